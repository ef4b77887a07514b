//! Standard-output formatting for cache configuration headers and
//! per-access log lines.
//!
//! Both formats are fixed byte-for-byte; callers should never construct
//! these strings by hand. Formatting is pure (`String` in, `String` out)
//! so it can be unit tested without capturing stdout; the CLI driver is
//! responsible for actually writing the result.

use crate::cache::config::CacheConfig;
use crate::cache::hierarchy::AccessEvent;

/// Formats the one-time configuration header for a cache level.
#[must_use]
pub fn format_header(name: &str, config: &CacheConfig) -> String {
    format!(
        "Cache {name} has size {size}, associativity {assoc}, blocksize {block}, lines {lines}",
        size = config.size,
        assoc = config.assoc,
        block = config.blocksize,
        lines = config.num_lines,
    )
}

/// Formats a single access event as one trace log line.
#[must_use]
pub fn format_access(event: &AccessEvent) -> String {
    let label = format!("{} {}", event.level, event.status);
    format!(
        "{label:<8} pc:{pc:>5}\taddr:{addr:>5}\tline:{line:>4}",
        pc = event.pc,
        addr = event.addr,
        line = event.line,
    )
}
