//! Unary ALU Flag-Vector Tests.
//!
//! Deterministic edge-case tests for NOT, NEG, INC, and DEC across all
//! four operand widths. Each operation group covers:
//!   - Boundary values (0, 1, sign bit, all-ones)
//!   - Overflow/underflow wrapping behavior
//!   - The exact condition-code recipe of each operation:
//!     NOT touches nothing, NEG derives CF/OF from the pre-image,
//!     INC/DEC preserve CF
//!
//! Reference behavior: x86-64 condition codes for the F6h/F7h/FEh/FFh
//! unary groups.

use x64sim_core::common::Width;
use x64sim_core::core::arch::Rflags;
use x64sim_core::core::units::alu::UnaryOp;

// ─── Constants ───────────────────────────────────────────────────────────────
// Named constants for readability. Every magic number in a test vector is an
// architectural boundary condition at some width.

const ZERO: u64 = 0;
const ONE: u64 = 1;

// Per-width sign bits (the most-negative two's-complement values).
const I8_MIN: u64 = 0x80;
const I16_MIN: u64 = 0x8000;
const I32_MIN: u64 = 0x8000_0000;
const I64_MIN: u64 = 0x8000_0000_0000_0000;

// Per-width maximum positive values.
const I8_MAX: u64 = 0x7F;
const I64_MAX: u64 = 0x7FFF_FFFF_FFFF_FFFF;

// Useful patterns
const ALTERNATING_5: u64 = 0x5555_5555_5555_5555;
const ALTERNATING_A: u64 = 0xAAAA_AAAA_AAAA_AAAA;

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// Applies an operation starting from reset flags; returns (result, flags).
fn apply(op: UnaryOp, width: Width, x: u64) -> (u64, Rflags) {
    let mut flags = Rflags::default();
    let result = op.apply(width, x, &mut flags);
    (result, flags)
}

/// Applies an operation starting from the given flags.
fn apply_with(op: UnaryOp, width: Width, x: u64, mut flags: Rflags) -> (u64, Rflags) {
    let result = op.apply(width, x, &mut flags);
    (result, flags)
}

// ═════════════════════════════════════════════════════════════════════════════
//  NOT
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn not_byte_complements_within_the_width() {
    let (result, _) = apply(UnaryOp::Not, Width::Byte, ZERO);
    assert_eq!(result, 0xFF);
    let (result, _) = apply(UnaryOp::Not, Width::Byte, 0xFF);
    assert_eq!(result, 0x00);
}

#[test]
fn not_masks_inputs_wider_than_the_operand() {
    // Upper bits of the input must not leak into the result.
    let (result, _) = apply(UnaryOp::Not, Width::Word, 0xFFFF_0000_0000_F0F0);
    assert_eq!(result, 0x0F0F);
}

#[test]
fn not_qword_alternating_pattern() {
    let (result, _) = apply(UnaryOp::Not, Width::Qword, ALTERNATING_5);
    assert_eq!(result, ALTERNATING_A);
}

#[test]
fn not_touches_no_flags_from_reset() {
    let (_, flags) = apply(UnaryOp::Not, Width::Dword, ZERO);
    assert_eq!(flags, Rflags::default());
}

#[test]
fn not_touches_no_flags_when_all_are_set() {
    let all = Rflags::CF | Rflags::PF | Rflags::AF | Rflags::ZF | Rflags::SF | Rflags::OF;
    let (_, flags) = apply_with(UnaryOp::Not, Width::Byte, 0xA5, all);
    assert_eq!(flags, all);
}

// ═════════════════════════════════════════════════════════════════════════════
//  NEG
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn neg_of_zero_clears_carry_and_sets_zero() {
    let (result, flags) = apply(UnaryOp::Neg, Width::Byte, ZERO);
    assert_eq!(result, 0);
    assert!(!flags.contains(Rflags::CF));
    assert!(flags.contains(Rflags::ZF));
    assert!(!flags.contains(Rflags::SF));
    assert!(!flags.contains(Rflags::OF));
}

#[test]
fn neg_of_one_borrows_everywhere() {
    let (result, flags) = apply(UnaryOp::Neg, Width::Byte, ONE);
    assert_eq!(result, 0xFF);
    assert!(flags.contains(Rflags::CF));
    assert!(flags.contains(Rflags::SF));
    assert!(flags.contains(Rflags::AF));
    assert!(flags.contains(Rflags::PF)); // 0xFF has eight set bits
    assert!(!flags.contains(Rflags::ZF));
    assert!(!flags.contains(Rflags::OF));
}

#[test]
fn neg_of_the_sign_bit_overflows_at_every_width() {
    for (width, min) in [
        (Width::Byte, I8_MIN),
        (Width::Word, I16_MIN),
        (Width::Dword, I32_MIN),
        (Width::Qword, I64_MIN),
    ] {
        let (result, flags) = apply(UnaryOp::Neg, width, min);
        // The most-negative value negates to itself.
        assert_eq!(result, min);
        assert!(flags.contains(Rflags::OF));
        assert!(flags.contains(Rflags::CF));
        assert!(flags.contains(Rflags::SF));
        assert!(!flags.contains(Rflags::ZF));
    }
}

#[test]
fn neg_carry_is_set_iff_the_operand_was_nonzero() {
    for x in [ONE, 0x10, I8_MAX, I8_MIN, 0xFF] {
        let (_, flags) = apply(UnaryOp::Neg, Width::Byte, x);
        assert!(flags.contains(Rflags::CF), "CF clear for NEG of {x:#x}");
    }
    let (_, flags) = apply(UnaryOp::Neg, Width::Byte, ZERO);
    assert!(!flags.contains(Rflags::CF));
}

#[test]
fn neg_low_nibble_borrow_drives_af() {
    // 0x10 has a clear low nibble: 0x0 - 0x0 borrows nothing.
    let (_, flags) = apply(UnaryOp::Neg, Width::Byte, 0x10);
    assert!(!flags.contains(Rflags::AF));
    // 0x01 borrows out of bit 3.
    let (_, flags) = apply(UnaryOp::Neg, Width::Byte, 0x01);
    assert!(flags.contains(Rflags::AF));
}

#[test]
fn neg_qword_value() {
    let (result, flags) = apply(UnaryOp::Neg, Width::Qword, 2);
    assert_eq!(result, 0xFFFF_FFFF_FFFF_FFFE);
    assert!(flags.contains(Rflags::CF));
    assert!(flags.contains(Rflags::SF));
}

// ═════════════════════════════════════════════════════════════════════════════
//  INC
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn inc_basic() {
    let (result, flags) = apply(UnaryOp::Inc, Width::Dword, 41);
    assert_eq!(result, 42);
    assert!(!flags.contains(Rflags::ZF));
    assert!(!flags.contains(Rflags::OF));
}

#[test]
fn inc_preserves_a_set_carry() {
    let (_, flags) = apply_with(UnaryOp::Inc, Width::Byte, 5, Rflags::CF);
    assert!(flags.contains(Rflags::CF));
}

#[test]
fn inc_preserves_a_clear_carry_even_when_wrapping() {
    // INC of all-ones wraps to zero, which would set CF in an ADD; INC
    // must leave it clear.
    let (result, flags) = apply(UnaryOp::Inc, Width::Byte, 0xFF);
    assert_eq!(result, 0);
    assert!(!flags.contains(Rflags::CF));
    assert!(flags.contains(Rflags::ZF));
    assert!(flags.contains(Rflags::AF));
}

#[test]
fn inc_into_the_sign_bit_overflows() {
    let (result, flags) = apply(UnaryOp::Inc, Width::Byte, I8_MAX);
    assert_eq!(result, I8_MIN);
    assert!(flags.contains(Rflags::OF));
    assert!(flags.contains(Rflags::SF));
    assert!(flags.contains(Rflags::AF)); // carry out of bit 3
}

#[test]
fn inc_qword_max_wraps_to_zero() {
    let (result, flags) = apply(UnaryOp::Inc, Width::Qword, u64::MAX);
    assert_eq!(result, 0);
    assert!(flags.contains(Rflags::ZF));
    assert!(!flags.contains(Rflags::CF));
}

#[test]
fn inc_nibble_carry_drives_af() {
    let (_, flags) = apply(UnaryOp::Inc, Width::Byte, 0x0F);
    assert!(flags.contains(Rflags::AF));
    let (_, flags) = apply(UnaryOp::Inc, Width::Byte, 0x0E);
    assert!(!flags.contains(Rflags::AF));
}

// ═════════════════════════════════════════════════════════════════════════════
//  DEC
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn dec_basic() {
    let (result, flags) = apply(UnaryOp::Dec, Width::Dword, 43);
    assert_eq!(result, 42);
    assert!(!flags.contains(Rflags::ZF));
}

#[test]
fn dec_to_zero_sets_zero_flag() {
    let (result, flags) = apply(UnaryOp::Dec, Width::Word, ONE);
    assert_eq!(result, 0);
    assert!(flags.contains(Rflags::ZF));
    assert!(!flags.contains(Rflags::SF));
}

#[test]
fn dec_of_zero_wraps_without_touching_carry() {
    let (result, flags) = apply(UnaryOp::Dec, Width::Byte, ZERO);
    assert_eq!(result, 0xFF);
    assert!(!flags.contains(Rflags::CF));
    assert!(flags.contains(Rflags::SF));
    assert!(flags.contains(Rflags::AF));
}

#[test]
fn dec_preserves_a_set_carry() {
    let (_, flags) = apply_with(UnaryOp::Dec, Width::Qword, ZERO, Rflags::CF);
    assert!(flags.contains(Rflags::CF));
}

#[test]
fn dec_of_the_sign_bit_overflows() {
    let (result, flags) = apply(UnaryOp::Dec, Width::Byte, I8_MIN);
    assert_eq!(result, I8_MAX);
    assert!(flags.contains(Rflags::OF));
    assert!(!flags.contains(Rflags::SF));
}

#[test]
fn dec_qword_min_overflows() {
    let (result, flags) = apply(UnaryOp::Dec, Width::Qword, I64_MIN);
    assert_eq!(result, I64_MAX);
    assert!(flags.contains(Rflags::OF));
}

#[test]
fn dec_nibble_borrow_drives_af() {
    let (_, flags) = apply(UnaryOp::Dec, Width::Byte, 0x10);
    assert!(flags.contains(Rflags::AF));
    let (_, flags) = apply(UnaryOp::Dec, Width::Byte, 0x11);
    assert!(!flags.contains(Rflags::AF));
}

// ═════════════════════════════════════════════════════════════════════════════
//  Parity (shared recipe, low byte only)
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn parity_looks_at_the_low_result_byte_only() {
    // DEC 0x0201 -> 0x0200: low byte 0x00 has even parity.
    let (result, flags) = apply(UnaryOp::Dec, Width::Word, 0x0201);
    assert_eq!(result, 0x0200);
    assert!(flags.contains(Rflags::PF));

    // DEC 0x0202 -> 0x0201: low byte 0x01 has odd parity.
    let (result, flags) = apply(UnaryOp::Dec, Width::Word, 0x0202);
    assert_eq!(result, 0x0201);
    assert!(!flags.contains(Rflags::PF));
}
