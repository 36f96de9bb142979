//! Arithmetic Logic Unit (ALU) for the unary instruction family.
//!
//! This module implements the unary arithmetic/logic operations of the
//! execution core: bitwise complement, two's-complement negation, increment
//! and decrement. It handles all four operand widths (8/16/32/64-bit) and
//! produces bit-exact x86-64 condition flags.
//!
//! The operation family and width are carried as plain enum values resolved
//! at decode time; the dispatcher hands the pair to [`UnaryOp::apply`]
//! instead of indexing a table of function pointers.

/// Unary operation implementations (NOT, NEG, INC, DEC) with flag updates.
pub mod unary;

pub use unary::UnaryOp;
