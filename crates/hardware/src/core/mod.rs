//! Virtual processor core.
//!
//! Contains everything a single virtual processor owns and executes with:
//! 1. **Architectural State:** General-purpose registers and RFLAGS.
//! 2. **Execution:** Operand resolution and the unary dispatch paths,
//!    including the LOCK'd atomic read-modify-write loops.
//! 3. **Functional Units:** The unary ALU and its flag computations.

/// Architectural state (register file, flags).
pub mod arch;

/// Virtual processor state, operand resolution, and execution dispatch.
pub mod cpu;

/// Functional units (ALU).
pub mod units;

pub use cpu::Vcpu;
