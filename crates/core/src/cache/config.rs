//! Cache level configuration and the `--cache` argument grammar.

use crate::common::error::CacheConfigError;

/// Configuration for one cache level: size, associativity, and block size,
/// all measured in memory cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CacheConfig {
    /// Total cache capacity, in cells.
    pub size: usize,
    /// Ways per set.
    pub assoc: usize,
    /// Cells per block.
    pub blocksize: usize,
    /// Number of sets: `size / (assoc * blocksize)`.
    pub num_lines: usize,
}

impl CacheConfig {
    /// Builds a config from its three independent parameters, deriving
    /// `num_lines`.
    #[must_use]
    pub fn new(size: usize, assoc: usize, blocksize: usize) -> Self {
        Self {
            size,
            assoc,
            blocksize,
            num_lines: size / (assoc * blocksize),
        }
    }
}

/// A fully parsed `--cache` argument: an L1 config and an optional L2.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CacheHierarchyConfig {
    /// L1 (always present when `--cache` was given).
    pub l1: CacheConfig,
    /// L2, present only for the 6-integer form.
    pub l2: Option<CacheConfig>,
}

/// Parses the `--cache` value: either `size,assoc,blocksize` (one level)
/// or `size,assoc,blocksize,size,assoc,blocksize` (two levels).
pub fn parse_cache_arg(value: &str) -> Result<CacheHierarchyConfig, CacheConfigError> {
    let parts = value
        .split(',')
        .map(|p| p.trim().parse::<usize>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| CacheConfigError::NotAnInteger)?;

    let config = match parts.as_slice() {
        [size, assoc, blocksize] => CacheHierarchyConfig {
            l1: CacheConfig::new(*size, *assoc, *blocksize),
            l2: None,
        },
        [l1size, l1assoc, l1block, l2size, l2assoc, l2block] => CacheHierarchyConfig {
            l1: CacheConfig::new(*l1size, *l1assoc, *l1block),
            l2: Some(CacheConfig::new(*l2size, *l2assoc, *l2block)),
        },
        _ => return Err(CacheConfigError::InvalidArity),
    };

    tracing::debug!(l1.num_lines = config.l1.num_lines, two_level = config.l2.is_some(), "parsed cache config");
    Ok(config)
}
