//! Two-level cache hierarchy policy: sequencing L1 and L2 for loads and
//! stores, and producing the trace events each access emits.

use crate::cache::config::CacheHierarchyConfig;
use crate::cache::level::CacheLevel;
use crate::cache::set::AccessResult;
use crate::common::addr::Addr;

/// One line of the cache access trace: which level, what happened, and
/// where.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccessEvent {
    /// "L1" or "L2".
    pub level: &'static str,
    /// "HIT", "MISS", or "SW".
    pub status: &'static str,
    /// Program counter of the instruction that caused the access.
    pub pc: u16,
    /// The data address accessed.
    pub addr: u16,
    /// The set index within the level.
    pub line: usize,
}

/// The configured cache levels, if any. Owns L1 and an optional L2 and
/// applies the load/store access policy across them.
pub struct CacheHierarchy {
    l1: CacheLevel,
    l2: Option<CacheLevel>,
}

impl CacheHierarchy {
    /// Builds a hierarchy from a parsed `--cache` configuration.
    #[must_use]
    pub fn new(config: CacheHierarchyConfig) -> Self {
        Self {
            l1: CacheLevel::new("L1", config.l1),
            l2: config.l2.map(|cfg| CacheLevel::new("L2", cfg)),
        }
    }

    fn status_label(result: AccessResult) -> &'static str {
        match result {
            AccessResult::Hit => "HIT",
            AccessResult::Miss => "MISS",
        }
    }

    /// Handles a load: always probes L1; probes L2 only on an L1 miss.
    pub fn on_load(&mut self, pc: Addr, addr: Addr) -> Vec<AccessEvent> {
        let mut events = Vec::with_capacity(2);

        let (l1_line, l1_result) = self.l1.probe(addr);
        events.push(AccessEvent {
            level: self.l1.name,
            status: Self::status_label(l1_result),
            pc: pc.val(),
            addr: addr.val(),
            line: l1_line,
        });

        if l1_result == AccessResult::Miss {
            if let Some(l2) = &mut self.l2 {
                let (l2_line, l2_result) = l2.probe(addr);
                events.push(AccessEvent {
                    level: l2.name,
                    status: Self::status_label(l2_result),
                    pc: pc.val(),
                    addr: addr.val(),
                    line: l2_line,
                });
            }
        }

        events
    }

    /// Handles a store: always probes both configured levels, and both
    /// always report `SW` regardless of the underlying hit/miss outcome.
    pub fn on_store(&mut self, pc: Addr, addr: Addr) -> Vec<AccessEvent> {
        let mut events = Vec::with_capacity(2);

        let (l1_line, _) = self.l1.probe(addr);
        events.push(AccessEvent {
            level: self.l1.name,
            status: "SW",
            pc: pc.val(),
            addr: addr.val(),
            line: l1_line,
        });

        if let Some(l2) = &mut self.l2 {
            let (l2_line, _) = l2.probe(addr);
            events.push(AccessEvent {
                level: l2.name,
                status: "SW",
                pc: pc.val(),
                addr: addr.val(),
                line: l2_line,
            });
        }

        events
    }
}
