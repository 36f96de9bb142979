//! Trap definitions.
//!
//! This module defines the fault conditions the execution core can raise.
//! It provides:
//! 1. **Trap Representation:** The undefined-opcode-class faults detected
//!    during operand resolution and dispatch.
//! 2. **Error Handling:** Integration with standard Rust error traits for
//!    propagation through the surrounding instruction loop.
//!
//! Traps are fatal to the current instruction only. The instruction loop
//! that invoked the core decides whether a trap terminates guest execution
//! or is delivered to the guest as a fault. Programmer-invariant violations
//! (for example a LOCK prefix reaching a dispatcher on a register-direct
//! operand) are not traps; they indicate a defect in the decode layer and
//! abort via `assert!`.

use thiserror::Error;

use super::data::Width;

/// Fault conditions raised by the execution core.
///
/// Every variant is delivered to the guest as an undefined-opcode exception
/// (#UD) by the surrounding instruction loop; the distinction between
/// variants exists for host-side diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Trap {
    /// Undefined instruction exception.
    ///
    /// Raised when a sub-opcode field selects an operation that does not
    /// exist in the instruction group, or when the addressing bits request
    /// a combination the resolver does not support. The associated value is
    /// the raw descriptor bits of the offending instruction.
    #[error("IllegalInstruction({0:#x})")]
    IllegalInstruction(u64),

    /// LOCK-prefixed access on a host without the required atomic width.
    ///
    /// Raised when the instruction carries a bus-lock prefix but the host
    /// configuration reports no compare-and-swap support at the resolved
    /// operand width. A silent non-atomic execution of a locked instruction
    /// is never acceptable, so the instruction faults instead. The
    /// associated value is the operand width that could not be locked.
    #[error("LockedAtomicUnavailable({0:?})")]
    LockedAtomicUnavailable(Width),
}
