//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the decoded-instruction descriptor consumed by the execution
//! core and the sub-opcode constants of the unary instruction groups.
//!
//! The core covers the unary arithmetic/logic family:
//!
//! * `NOT r/m` (F6h-F7h `/2`): bitwise complement.
//! * `NEG r/m` (F6h-F7h `/3`): two's-complement negation.
//! * `INC r/m` / `DEC r/m` (FEh-FFh `/0`-`/1`): increment/decrement.

/// Decoded instruction descriptor and r/m operand designation.
pub mod instruction;

/// Unary group sub-opcode constants.
pub mod unary;

pub use instruction::{Decoded, Rm};
