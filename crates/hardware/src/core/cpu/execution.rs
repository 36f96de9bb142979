//! Unary instruction execution.
//!
//! This module implements the two dispatch paths of the unary
//! arithmetic/logic family. It performs the following:
//! 1. **Width Selection:** REX.W selects 64-bit, the 66h override selects
//!    16-bit, and 32-bit is the long-mode default.
//! 2. **Commit Paths:** Plain read-modify-write for unlocked operands, and
//!    a compare-and-swap retry loop for LOCK'd memory operands.
//! 3. **Entry Points:** One thin public method per instruction (`NOT`,
//!    `NEG`, `INC`, `DEC`) plus the FEh group multiplexer.
//!
//! The LOCK'd paths compute candidate flags into a scratch copy on every
//! attempt and commit the winning attempt's flags exactly once; failed
//! attempts leave the architectural flags untouched. A successful exchange
//! publishes with release ordering so that guest-visible writes preceding
//! the locked instruction become visible to any processor that subsequently
//! acquires the new value. Failures impose no ordering and always retry
//! with the freshly observed value.

use std::sync::atomic::Ordering;

use tracing::{debug, trace};

use super::Vcpu;
use super::operand::{self, Operand};
use crate::common::{Trap, Width};
use crate::core::units::alu::UnaryOp;
use crate::isa::{Decoded, unary};

impl Vcpu {
    /// Executes `NOT r/m8`.
    ///
    /// # Errors
    ///
    /// Propagates traps from operand resolution or the LOCK'd commit path.
    pub fn not_rm8(&mut self, decoded: &Decoded) -> Result<(), Trap> {
        self.unary_rm8(decoded, UnaryOp::Not)
    }

    /// Executes `NEG r/m8`.
    ///
    /// # Errors
    ///
    /// Propagates traps from operand resolution or the LOCK'd commit path.
    pub fn neg_rm8(&mut self, decoded: &Decoded) -> Result<(), Trap> {
        self.unary_rm8(decoded, UnaryOp::Neg)
    }

    /// Executes the FEh group (`INC r/m8` / `DEC r/m8`).
    ///
    /// The ModRM `reg` field selects the operation; the group has no other
    /// members.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::IllegalInstruction`] for any sub-opcode other than
    /// `/0` (INC) and `/1` (DEC), and propagates traps from the dispatch
    /// path.
    pub fn incdec_rm8(&mut self, decoded: &Decoded) -> Result<(), Trap> {
        match decoded.reg_field {
            unary::GRP4_INC => self.unary_rm8(decoded, UnaryOp::Inc),
            unary::GRP4_DEC => self.unary_rm8(decoded, UnaryOp::Dec),
            sub => {
                debug!(vcpu = self.id, sub, "undefined FEh group sub-opcode");
                Err(Trap::IllegalInstruction(decoded.raw))
            }
        }
    }

    /// Executes `NOT r/m16`, `NOT r/m32`, or `NOT r/m64`.
    ///
    /// # Errors
    ///
    /// Propagates traps from operand resolution or the LOCK'd commit path.
    pub fn not_rmv(&mut self, decoded: &Decoded) -> Result<(), Trap> {
        self.unary_rmv(decoded, UnaryOp::Not)
    }

    /// Executes `NEG r/m16`, `NEG r/m32`, or `NEG r/m64`.
    ///
    /// # Errors
    ///
    /// Propagates traps from operand resolution or the LOCK'd commit path.
    pub fn neg_rmv(&mut self, decoded: &Decoded) -> Result<(), Trap> {
        self.unary_rmv(decoded, UnaryOp::Neg)
    }

    /// Executes `INC r/m16`, `INC r/m32`, or `INC r/m64`.
    ///
    /// # Errors
    ///
    /// Propagates traps from operand resolution or the LOCK'd commit path.
    pub fn inc_rmv(&mut self, decoded: &Decoded) -> Result<(), Trap> {
        self.unary_rmv(decoded, UnaryOp::Inc)
    }

    /// Executes `DEC r/m16`, `DEC r/m32`, or `DEC r/m64`.
    ///
    /// # Errors
    ///
    /// Propagates traps from operand resolution or the LOCK'd commit path.
    pub fn dec_rmv(&mut self, decoded: &Decoded) -> Result<(), Trap> {
        self.unary_rmv(decoded, UnaryOp::Dec)
    }

    /// Byte-width unary dispatcher.
    ///
    /// Resolves an 8-bit writable operand, applies the operation, and
    /// commits the result, atomically when the LOCK prefix demands it.
    fn unary_rm8(&mut self, decoded: &Decoded, op: UnaryOp) -> Result<(), Trap> {
        if self.trace || cfg!(feature = "always-trace") {
            trace!(vcpu = self.id, ?op, "unary byte dispatch");
        }
        let resolved = operand::resolve(decoded, Width::Byte)?;

        if !decoded.lock {
            match resolved {
                Operand::Register { index, high8 } => {
                    let x = self.regs.read8(index, high8);
                    let z = op.apply(Width::Byte, u64::from(x), &mut self.rflags) as u8;
                    self.regs.write8(index, high8, z);
                }
                Operand::Memory { addr } => {
                    let x = self.ram.read_u8(addr);
                    let z = op.apply(Width::Byte, u64::from(x), &mut self.rflags) as u8;
                    self.ram.write_u8(addr, z);
                }
            }
            return Ok(());
        }

        // A locked register-direct operand cannot be encoded; reaching this
        // point with one is a decode-layer defect, not a guest error.
        let Operand::Memory { addr } = resolved else {
            panic!("LOCK prefix on a register-direct operand reached the byte dispatcher");
        };
        if !self.caps.byte_cas {
            debug!(vcpu = self.id, "LOCK'd byte RMW without host byte CAS support");
            return Err(Trap::LockedAtomicUnavailable(Width::Byte));
        }

        let cell = self.ram.atomic_u8(addr);
        let mut x = self.ram.read_u8(addr);
        loop {
            let mut scratch = self.rflags;
            let z = op.apply(Width::Byte, u64::from(x), &mut scratch) as u8;
            match cell.compare_exchange_weak(x, z, Ordering::Release, Ordering::Relaxed) {
                Ok(_) => {
                    self.rflags = scratch;
                    return Ok(());
                }
                Err(observed) => {
                    trace!(vcpu = self.id, addr = addr.val(), "locked byte CAS contended");
                    x = observed;
                }
            }
        }
    }

    /// Word/dword/qword unary dispatcher.
    ///
    /// Selects the operand width from the prefix state (REX.W before the
    /// 66h override before the 32-bit default) and applies the
    /// width-appropriate variant of the operation.
    fn unary_rmv(&mut self, decoded: &Decoded, op: UnaryOp) -> Result<(), Trap> {
        if self.trace || cfg!(feature = "always-trace") {
            trace!(vcpu = self.id, ?op, "unary word/dword/qword dispatch");
        }
        if decoded.rex_w {
            self.unary_rm64(decoded, op)
        } else if decoded.opsize_16 {
            self.unary_rm16(decoded, op)
        } else {
            self.unary_rm32(decoded, op)
        }
    }

    /// 16-bit path: plain read-modify-write only.
    fn unary_rm16(&mut self, decoded: &Decoded, op: UnaryOp) -> Result<(), Trap> {
        // No atomic path exists at this width in this family; a descriptor
        // carrying LOCK here is a decode-layer defect.
        assert!(!decoded.lock, "LOCK prefix on a 16-bit unary operand");
        match operand::resolve(decoded, Width::Word)? {
            Operand::Register { index, .. } => {
                let x = self.regs.read16(index);
                let z = op.apply(Width::Word, u64::from(x), &mut self.rflags) as u16;
                self.regs.write16(index, z);
            }
            Operand::Memory { addr } => {
                let x = self.ram.read_u16(addr);
                let z = op.apply(Width::Word, u64::from(x), &mut self.rflags) as u16;
                self.ram.write_u16(addr, z);
            }
        }
        Ok(())
    }

    /// 32-bit path: CAS loop for aligned LOCK'd memory operands, plain
    /// read-modify-write otherwise; register destinations zero-extend.
    fn unary_rm32(&mut self, decoded: &Decoded, op: UnaryOp) -> Result<(), Trap> {
        match operand::resolve(decoded, Width::Dword)? {
            Operand::Register { index, .. } => {
                assert!(
                    !decoded.lock,
                    "LOCK prefix on a register-direct operand reached the dword dispatcher"
                );
                let x = self.regs.read32(index);
                let z = op.apply(Width::Dword, u64::from(x), &mut self.rflags) as u32;
                // write32 zero-fills the upper half of the 64-bit register.
                self.regs.write32(index, z);
            }
            Operand::Memory { addr } => {
                if decoded.lock && addr.is_aligned(Width::Dword) {
                    let cell = self.ram.atomic_u32(addr);
                    let mut raw = cell.load(Ordering::Relaxed);
                    loop {
                        let mut scratch = self.rflags;
                        let z =
                            op.apply(Width::Dword, u64::from(u32::from_le(raw)), &mut scratch)
                                as u32;
                        match cell.compare_exchange_weak(
                            raw,
                            z.to_le(),
                            Ordering::Release,
                            Ordering::Relaxed,
                        ) {
                            Ok(_) => {
                                self.rflags = scratch;
                                break;
                            }
                            Err(observed) => {
                                trace!(
                                    vcpu = self.id,
                                    addr = addr.val(),
                                    "locked dword CAS contended"
                                );
                                raw = observed;
                            }
                        }
                    }
                } else {
                    // A misaligned LOCK falls back to a plain
                    // read-modify-write instead of a split lock; see
                    // DESIGN.md for the divergence.
                    let x = self.ram.read_u32(addr);
                    let z = op.apply(Width::Dword, u64::from(x), &mut self.rflags) as u32;
                    self.ram.write_u32(addr, z);
                }
            }
        }
        Ok(())
    }

    /// 64-bit path: capability-gated CAS loop for aligned LOCK'd memory
    /// operands, plain read-modify-write otherwise.
    fn unary_rm64(&mut self, decoded: &Decoded, op: UnaryOp) -> Result<(), Trap> {
        match operand::resolve(decoded, Width::Qword)? {
            Operand::Register { index, .. } => {
                assert!(
                    !decoded.lock,
                    "LOCK prefix on a register-direct operand reached the qword dispatcher"
                );
                let x = self.regs.read64(index);
                let z = op.apply(Width::Qword, x, &mut self.rflags);
                self.regs.write64(index, z);
            }
            Operand::Memory { addr } => {
                if decoded.lock && addr.is_aligned(Width::Qword) {
                    if !self.caps.qword_cas {
                        debug!(
                            vcpu = self.id,
                            "LOCK'd qword RMW without host qword CAS support"
                        );
                        return Err(Trap::LockedAtomicUnavailable(Width::Qword));
                    }
                    let cell = self.ram.atomic_u64(addr);
                    let mut raw = cell.load(Ordering::Relaxed);
                    loop {
                        let mut scratch = self.rflags;
                        let z = op.apply(Width::Qword, u64::from_le(raw), &mut scratch);
                        match cell.compare_exchange_weak(
                            raw,
                            z.to_le(),
                            Ordering::Release,
                            Ordering::Relaxed,
                        ) {
                            Ok(_) => {
                                self.rflags = scratch;
                                break;
                            }
                            Err(observed) => {
                                trace!(
                                    vcpu = self.id,
                                    addr = addr.val(),
                                    "locked qword CAS contended"
                                );
                                raw = observed;
                            }
                        }
                    }
                } else {
                    let x = self.ram.read_u64(addr);
                    let z = op.apply(Width::Qword, x, &mut self.rflags);
                    self.ram.write_u64(addr, z);
                }
            }
        }
        Ok(())
    }
}
