//! RFLAGS status-flag register.
//!
//! This module defines the condition-code portion of the x86-64 RFLAGS
//! register. It provides:
//! 1. **Bit Layout:** The six status flags at their architectural bit
//!    positions.
//! 2. **Ownership Model:** Each virtual processor exclusively owns its
//!    flags; they are never shared across processors.
//!
//! The ALU operations take the flag set as an explicit `&mut` output
//! parameter so the data dependency is visible in every signature, rather
//! than hiding flag updates behind a global side channel.

use bitflags::bitflags;

bitflags! {
    /// The status-flag portion of the x86-64 RFLAGS register.
    ///
    /// Only the condition-code bits touched by the arithmetic/logic core are
    /// modeled here; control bits (IF, DF, TF, ...) belong to the
    /// surrounding emulator.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Rflags: u64 {
        /// Carry flag: unsigned overflow out of the most significant bit.
        const CF = 1 << 0;
        /// Reserved bit 1, architecturally always set.
        const RESERVED1 = 1 << 1;
        /// Parity flag: set when the low result byte has even parity.
        const PF = 1 << 2;
        /// Auxiliary carry flag: carry or borrow out of bit 3 (BCD support).
        const AF = 1 << 4;
        /// Zero flag: set when the width-masked result is zero.
        const ZF = 1 << 6;
        /// Sign flag: copy of the result's most significant bit at width.
        const SF = 1 << 7;
        /// Overflow flag: signed overflow at the operand width.
        const OF = 1 << 11;
    }
}

impl Default for Rflags {
    /// Returns the architectural reset value (only reserved bit 1 set).
    fn default() -> Self {
        Self::RESERVED1
    }
}
