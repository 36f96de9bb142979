//! Unary instruction group sub-opcodes.
//!
//! The byte-width increment/decrement family (opcode FEh, "group 4")
//! multiplexes on the ModRM `reg` field. Only two encodings exist; every
//! other value is an undefined opcode.

/// `INC r/m8` (FEh `/0`).
pub const GRP4_INC: u8 = 0;

/// `DEC r/m8` (FEh `/1`).
pub const GRP4_DEC: u8 = 1;
