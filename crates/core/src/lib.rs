//! Cycle-behavioral simulator for the E20 instruction set, with an
//! optional one- or two-level cache access trace.
//!
//! The crate is split into the primitives the interpreter and cache
//! hierarchy are built from ([`common`], [`isa`]), the two subsystems
//! themselves ([`cpu`], [`cache`]), the machine-code loader ([`sim`]),
//! and the fixed-format trace output ([`trace`]). A CLI driver wires all
//! of these together; this crate has no knowledge of argument parsing or
//! process exit codes.

#![deny(unsafe_code)]

/// Addresses, the register file, and the fatal-error taxonomy.
pub mod common;
/// Set-associative cache simulation and the L1/L2 access policy.
pub mod cache;
/// The fetch-decode-execute interpreter and its memory image.
pub mod cpu;
/// Instruction decoding.
pub mod isa;
/// Machine-code file loading.
pub mod sim;
/// Fixed-format standard-output trace lines.
pub mod trace;

pub use cache::{CacheConfig, CacheHierarchy, CacheHierarchyConfig, parse_cache_arg};
pub use common::error::{ArgError, CacheConfigError, LoadError};
pub use common::{Addr, RegisterFile};
pub use cpu::{Cpu, Memory, StepOutcome};
pub use isa::{Instruction, decode};
pub use sim::load_program;
