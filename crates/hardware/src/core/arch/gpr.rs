//! x86-64 General-Purpose Register File.
//!
//! This module implements the General-Purpose Register (GPR) file for the
//! x86-64 architecture. It performs the following:
//! 1. **Storage:** Maintains the 16 integer registers (`RAX`-`R15`).
//! 2. **Width-Sliced Access:** Reads and writes at 8/16/32/64-bit widths
//!    with the architectural merge and zero-extension rules.
//! 3. **Debugging:** Provides utilities for dumping the complete register
//!    state.
//!
//! The critical architectural rule lives in [`Gpr::write32`]: a 32-bit write
//! to a register zero-fills the upper 32 bits of the containing 64-bit
//! register. 8- and 16-bit writes merge into the register and preserve the
//! untouched bits.

/// Number of general-purpose registers in 64-bit mode.
pub const GPR_COUNT: usize = 16;

/// Architectural register names, indexed by encoding.
const NAMES: [&str; GPR_COUNT] = [
    "rax", "rcx", "rdx", "rbx", "rsp", "rbp", "rsi", "rdi", "r8", "r9", "r10", "r11", "r12",
    "r13", "r14", "r15",
];

/// General-Purpose Register file.
///
/// Contains the 16 integer registers of an x86-64 virtual processor. Unlike
/// a flat byte array with pointer arithmetic into it, all sub-register views
/// go through typed accessors.
pub struct Gpr {
    regs: [u64; GPR_COUNT],
}

impl Gpr {
    /// Creates a new register file with all registers initialized to zero.
    pub const fn new() -> Self {
        Self {
            regs: [0; GPR_COUNT],
        }
    }

    /// Reads the full 64-bit value of a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-15).
    #[inline(always)]
    pub fn read64(&self, idx: usize) -> u64 {
        self.regs[idx]
    }

    /// Writes the full 64-bit value of a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-15).
    /// * `val` - The 64-bit value to write.
    #[inline(always)]
    pub fn write64(&mut self, idx: usize, val: u64) {
        self.regs[idx] = val;
    }

    /// Reads the low 32 bits of a register.
    #[inline(always)]
    pub fn read32(&self, idx: usize) -> u32 {
        self.regs[idx] as u32
    }

    /// Writes the low 32 bits of a register, zero-filling the upper half.
    ///
    /// This is the architectural zero-extension rule for 32-bit register
    /// writes in 64-bit mode. It applies only to register destinations;
    /// 32-bit memory stores touch exactly four bytes.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-15).
    /// * `val` - The 32-bit value to write.
    #[inline(always)]
    pub fn write32(&mut self, idx: usize, val: u32) {
        self.regs[idx] = u64::from(val);
    }

    /// Reads the low 16 bits of a register.
    #[inline(always)]
    pub fn read16(&self, idx: usize) -> u16 {
        self.regs[idx] as u16
    }

    /// Writes the low 16 bits of a register, preserving the upper 48.
    #[inline(always)]
    pub fn write16(&mut self, idx: usize, val: u16) {
        self.regs[idx] = (self.regs[idx] & !0xFFFF) | u64::from(val);
    }

    /// Reads an 8-bit lane of a register.
    ///
    /// # Arguments
    ///
    /// * `idx`  - Register index (0-15).
    /// * `high` - Selects the legacy high-byte lane (bits 8-15, the
    ///   `AH`/`CH`/`DH`/`BH` encodings available without a REX prefix)
    ///   instead of the low byte.
    #[inline(always)]
    pub fn read8(&self, idx: usize, high: bool) -> u8 {
        if high {
            (self.regs[idx] >> 8) as u8
        } else {
            self.regs[idx] as u8
        }
    }

    /// Writes an 8-bit lane of a register, preserving all other bits.
    ///
    /// # Arguments
    ///
    /// * `idx`  - Register index (0-15).
    /// * `high` - Selects the legacy high-byte lane instead of the low byte.
    /// * `val`  - The byte value to write.
    #[inline(always)]
    pub fn write8(&mut self, idx: usize, high: bool, val: u8) {
        if high {
            self.regs[idx] = (self.regs[idx] & !0xFF00) | (u64::from(val) << 8);
        } else {
            self.regs[idx] = (self.regs[idx] & !0xFF) | u64::from(val);
        }
    }

    /// Dumps the contents of all general-purpose registers to stdout.
    ///
    /// Displays registers in pairs with hexadecimal formatting for debugging
    /// purposes.
    pub fn dump(&self) {
        for i in (0..GPR_COUNT).step_by(2) {
            println!(
                "{:<3}={:#018x} {:<3}={:#018x}",
                NAMES[i],
                self.regs[i],
                NAMES[i + 1],
                self.regs[i + 1]
            );
        }
    }
}

impl Default for Gpr {
    fn default() -> Self {
        Self::new()
    }
}
