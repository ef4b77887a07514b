//! Machine-code file loader.
//!
//! Parses the fixed `ram[<addr>] = 16'b<bits>;<rest>` textual format into a
//! [`Memory`] image. Addresses must appear in order starting at 0; anything
//! else is a fatal [`LoadError`] the caller reports before simulation
//! begins.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::common::addr::{Addr, MEM_SIZE};
use crate::common::error::LoadError;
use crate::cpu::Memory;

/// Parses one line into `(address, instruction word)`.
///
/// Returns `None` if the line does not match `ram[<D>] = 16'b<B>;...`.
fn parse_line(line: &str) -> Option<(usize, u16)> {
    let rest = line.strip_prefix("ram[")?;
    let close = rest.find(']')?;
    let addr_str = &rest[..close];
    let rest = rest[close + 1..].strip_prefix(" = 16'b")?;
    let semi = rest.find(';')?;
    let bits_str = &rest[..semi];

    if bits_str.is_empty()
        || bits_str.len() > 16
        || !bits_str.bytes().all(|b| b == b'0' || b == b'1')
    {
        return None;
    }

    let addr = addr_str.parse::<usize>().ok()?;
    let word = u16::from_str_radix(bits_str, 2).ok()?;
    Some((addr, word))
}

/// Loads a machine-code file into a fresh [`Memory`] image.
///
/// # Errors
///
/// Returns [`LoadError::Open`] if the file cannot be opened,
/// [`LoadError::Parse`] for a malformed line, [`LoadError::OutOfSequence`]
/// when addresses are not sequential starting at 0, and
/// [`LoadError::TooBig`] when the file has more lines than memory has
/// cells.
pub fn load_program(path: &Path) -> Result<Memory, LoadError> {
    tracing::debug!(path = %path.display(), "loading machine code");

    let file =
        File::open(path).map_err(|_| LoadError::Open(path.display().to_string()))?;
    let reader = BufReader::new(file);

    let mut memory = Memory::new();
    let mut expected_addr = 0usize;

    for line in reader.lines() {
        let line = line.map_err(|_| LoadError::Open(path.display().to_string()))?;
        if line.trim().is_empty() {
            continue;
        }

        let (addr, word) =
            parse_line(&line).ok_or_else(|| LoadError::Parse(line.clone()))?;

        if addr != expected_addr {
            return Err(LoadError::OutOfSequence(addr));
        }
        if addr >= MEM_SIZE {
            return Err(LoadError::TooBig);
        }

        memory.write(Addr::new(addr as u32), word);
        expected_addr += 1;
    }

    tracing::info!(lines = expected_addr, "loaded program");
    Ok(memory)
}
