//! Common types shared across the simulator: addresses, the register file,
//! and the fatal-error taxonomy used before simulation starts.

/// Address type and modular arithmetic for the 13-bit E20 address space.
pub mod addr;
/// Fatal, pre-simulation error types (loader, cache config, CLI args).
pub mod error;
/// The 8-register general-purpose register file.
pub mod reg;

pub use addr::{Addr, MEM_SIZE};
pub use reg::RegisterFile;
