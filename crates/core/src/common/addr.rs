//! Program-counter and memory address type.
//!
//! E20 has a single 13-bit address space shared by the program counter and
//! data memory. This module defines a small wrapper type so that modular
//! (wrap-around) arithmetic on addresses happens in one place instead of
//! being repeated at every call site.

/// Width of the E20 address space, in bits.
pub const ADDR_BITS: u32 = 13;

/// Number of addressable memory cells (2^13).
pub const MEM_SIZE: usize = 1 << ADDR_BITS;

/// A 13-bit address into program memory.
///
/// All arithmetic on `Addr` wraps modulo [`MEM_SIZE`], matching the
/// hardware's fixed-width program counter and address bus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Addr(u16);

impl Addr {
    /// Creates an address from a raw value, wrapping modulo `MEM_SIZE`.
    #[inline]
    #[must_use]
    pub fn new(raw: u32) -> Self {
        Self((raw as usize % MEM_SIZE) as u16)
    }

    /// Returns the raw address value in `0..MEM_SIZE`.
    #[inline]
    #[must_use]
    pub fn val(self) -> u16 {
        self.0
    }

    /// Returns the address as a `usize` suitable for indexing memory.
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the next sequential address, wrapping at the top of memory.
    #[inline]
    #[must_use]
    pub fn next(self) -> Self {
        Self::new(u32::from(self.0) + 1)
    }

    /// Adds a signed offset, wrapping modulo `MEM_SIZE`.
    #[inline]
    #[must_use]
    pub fn offset(self, delta: i32) -> Self {
        let wrapped = (i64::from(self.0) + i64::from(delta)).rem_euclid(MEM_SIZE as i64);
        Self(wrapped as u16)
    }
}

impl From<Addr> for usize {
    fn from(addr: Addr) -> Self {
        addr.index()
    }
}
