//! Functional units of the virtual processor.
//!
//! Each unit implements one self-contained piece of execution machinery.
//! The unary instruction family needs exactly one: the ALU.

/// Arithmetic Logic Unit (unary operations with condition flags).
pub mod alu;
