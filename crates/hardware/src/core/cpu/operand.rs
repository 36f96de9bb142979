//! Operand location resolution.
//!
//! This module maps the decoder's r/m designation to a typed, writable
//! operand location: either a lane of the virtual processor's register file
//! or a range of shared guest memory. It performs the following:
//! 1. **Register Resolution:** Applies the REX rule for 8-bit operands,
//!    where encodings 4-7 select the legacy high-byte lanes (AH/CH/DH/BH)
//!    unless a REX prefix is present.
//! 2. **Memory Resolution:** Passes through the effective address computed
//!    by the decode layer.
//! 3. **Validation:** Rejects encoding indices outside the register file.
//!
//! A resolved location is valid for exactly one instruction execution at
//! exactly one width; the dispatchers never resolve twice.

use crate::common::{GuestAddr, Trap, Width};
use crate::core::arch::gpr::GPR_COUNT;
use crate::isa::{Decoded, Rm};

/// A resolved, writable operand location.
///
/// Replaces raw pointer arithmetic into machine state with a typed
/// designation the dispatchers commit through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand {
    /// A lane of the executing processor's register file.
    Register {
        /// Register file index (0-15).
        index: usize,
        /// The legacy high-byte lane (bits 8-15); byte width only.
        high8: bool,
    },
    /// A location in shared guest memory.
    Memory {
        /// Guest physical address of the operand's first byte.
        addr: GuestAddr,
    },
}

/// Resolves the r/m operand of a decoded instruction at a given width.
///
/// # Arguments
///
/// * `decoded` - The instruction descriptor from the decode layer.
/// * `width`   - The operand width selected by the dispatcher.
///
/// # Returns
///
/// The typed operand location.
///
/// # Errors
///
/// Returns [`Trap::IllegalInstruction`] if the addressing bits request a
/// combination the register file cannot express.
pub fn resolve(decoded: &Decoded, width: Width) -> Result<Operand, Trap> {
    match decoded.rm {
        Rm::Memory(addr) => Ok(Operand::Memory { addr }),
        Rm::Register(encoding) => {
            let index = encoding as usize;
            if index >= GPR_COUNT {
                return Err(Trap::IllegalInstruction(decoded.raw));
            }
            // Without REX, byte encodings 4-7 are the high-byte lanes of
            // registers 0-3 rather than the low bytes of RSP/RBP/RSI/RDI.
            if width == Width::Byte && !decoded.rex_present && (4..8).contains(&index) {
                Ok(Operand::Register {
                    index: index - 4,
                    high8: true,
                })
            } else {
                Ok(Operand::Register {
                    index,
                    high8: false,
                })
            }
        }
    }
}
