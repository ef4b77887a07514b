//! Cache simulation: configuration, sets, levels, and the two-level
//! hierarchy policy that drives the access trace.

/// `--cache` argument parsing and per-level configuration.
pub mod config;
/// Two-level hierarchy sequencing and its access-event output.
pub mod hierarchy;
/// A single named cache level (a collection of sets).
pub mod level;
/// The tag-only LRU recency list backing one set.
pub mod set;

pub use config::{CacheConfig, CacheHierarchyConfig, parse_cache_arg};
pub use hierarchy::{AccessEvent, CacheHierarchy};
pub use set::AccessResult;
