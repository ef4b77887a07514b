//! One cache level: a collection of sets plus the config that maps
//! addresses onto them.

use crate::cache::config::CacheConfig;
use crate::cache::set::{AccessResult, CacheSet};
use crate::common::addr::Addr;

/// Decodes a word address into `(line_index, tag)` for a cache with the
/// given block size and set count.
///
/// Uses the word address directly — E20 is word-addressed, there is no
/// byte-address translation.
#[must_use]
pub fn decode_address(addr: Addr, blocksize: usize, num_lines: usize) -> (usize, u32) {
    let block_id = u32::from(addr.val()) / blocksize as u32;
    let line_index = (block_id % num_lines as u32) as usize;
    let tag = block_id / num_lines as u32;
    (line_index, tag)
}

/// A named cache level ("L1" or "L2"): its configuration plus the set of
/// sets that back it.
pub struct CacheLevel {
    /// Display name used in trace output ("L1" / "L2").
    pub name: &'static str,
    /// The level's size/associativity/blocksize configuration.
    pub config: CacheConfig,
    sets: Vec<CacheSet>,
}

impl CacheLevel {
    /// Creates a cache level with `config.num_lines` empty sets.
    #[must_use]
    pub fn new(name: &'static str, config: CacheConfig) -> Self {
        let sets = (0..config.num_lines)
            .map(|_| CacheSet::new(config.assoc))
            .collect();
        Self { name, config, sets }
    }

    /// Decodes `addr` and accesses the corresponding set.
    ///
    /// Returns the line index (for trace output) and whether the access
    /// was a hit or miss.
    pub fn probe(&mut self, addr: Addr) -> (usize, AccessResult) {
        let (line, tag) = decode_address(addr, self.config.blocksize, self.config.num_lines);
        (line, self.sets[line].access(tag))
    }
}
