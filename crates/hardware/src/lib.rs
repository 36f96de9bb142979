//! x86-64 emulator execution core library.
//!
//! This crate implements the arithmetic-logic execution core of a
//! multi-processor x86-64 instruction emulator, covering the unary
//! read-modify-write family (NOT, NEG, INC, DEC) with the following:
//! 1. **Core:** Virtual processor state (GPR file, RFLAGS), operand
//!    resolution, and the unary ALU with bit-exact condition flags.
//! 2. **Widths:** All four operand widths (8/16/32/64-bit) selected from
//!    REX.W and the 66h operand-size override, including the architectural
//!    zero-extension of 32-bit register results.
//! 3. **Memory:** A guest RAM arena shared by every virtual processor, with
//!    little-endian-normalized accessors and typed atomic views.
//! 4. **Locking:** LOCK-prefixed instructions commit through a
//!    compare-and-swap retry loop, preserving the bus-lock consistency
//!    contract across processors; hosts without the required atomic width
//!    fault instead of silently degrading.
//!
//! Instruction fetch, decoding, and effective-address arithmetic live in
//! the surrounding emulator; this crate consumes their output as a
//! [`isa::Decoded`] descriptor.

/// Common types (guest addresses, operand widths, traps).
pub mod common;
/// Emulator configuration (defaults, host atomic capabilities).
pub mod config;
/// Virtual processor core (arch state, dispatch, ALU).
pub mod core;
/// Instruction descriptor and unary group sub-opcodes.
pub mod isa;
/// Guest memory arena.
pub mod mem;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main virtual processor type; one per emulated hardware thread.
pub use crate::core::Vcpu;
/// Shared guest RAM arena; construct once and hand to every `Vcpu` via `Arc`.
pub use crate::mem::GuestRam;
