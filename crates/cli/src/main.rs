//! E20 cache simulator CLI.
//!
//! Parses `[-h | --help] [--cache CACHE] FILENAME`, loads the machine-code
//! file, runs the E20 interpreter to halt, and prints the cache access
//! trace (if `--cache` was given) to stdout.

use std::path::PathBuf;
use std::process::ExitCode;

use e20_core::common::error::ArgError;
use e20_core::{CacheHierarchy, Cpu, load_program, parse_cache_arg, trace};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
usage: e20sim [-h] [--cache CACHE] filename

Simulate E20 cache

positional arguments:
  filename    The file containing machine code, typically with .bin suffix

optional arguments:
  -h, --help  show this help message and exit
  --cache CACHE  Cache configuration: size,associativity,blocksize (for one
                 cache) or
                 size,associativity,blocksize,size,associativity,blocksize
                 (for two caches)";

/// Parsed command-line arguments: the required program path and an
/// optional raw `--cache` string (left unparsed — validated later so the
/// arity/arithmetic error can be reported separately from usage errors).
struct Args {
    filename: PathBuf,
    cache: Option<String>,
}

fn parse_args<I: Iterator<Item = String>>(mut args: I) -> Result<Args, ArgError> {
    let mut filename = None;
    let mut cache = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Err(ArgError::HelpRequested),
            "--cache" => {
                cache = Some(args.next().ok_or(ArgError::Usage)?);
            }
            other if other.starts_with('-') => return Err(ArgError::Usage),
            other => {
                if filename.is_some() {
                    return Err(ArgError::ExtraPositional);
                }
                filename = Some(PathBuf::from(other));
            }
        }
    }

    Ok(Args {
        filename: filename.ok_or(ArgError::MissingFilename)?,
        cache,
    })
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let raw_args = std::env::args().skip(1);
    let args = match parse_args(raw_args) {
        Ok(args) => args,
        Err(_) => {
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    let cache_config = match args.cache.as_deref().map(parse_cache_arg) {
        Some(Ok(config)) => Some(config),
        Some(Err(err)) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
        None => None,
    };

    let memory = match load_program(&args.filename) {
        Ok(memory) => memory,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let cache = cache_config.map(|config| {
        println!("{}", trace::format_header("L1", &config.l1));
        if let Some(l2) = &config.l2 {
            println!("{}", trace::format_header("L2", l2));
        }
        CacheHierarchy::new(config)
    });

    let mut cpu = Cpu::new(memory, cache);
    cpu.run(|event| println!("{}", trace::format_access(event)));

    ExitCode::SUCCESS
}
