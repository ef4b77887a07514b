//! Program loading: turning a machine-code file into a [`Memory`] image.
//!
//! [`Memory`]: crate::cpu::Memory

/// Parses the `ram[addr] = 16'b...;` machine-code format.
pub mod loader;

pub use loader::load_program;
