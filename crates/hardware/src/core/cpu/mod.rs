//! Virtual Processor Definition and Initialization.
//!
//! This module defines the central `Vcpu` structure, one per emulated
//! hardware thread. It coordinates the following:
//! 1. **State Management:** Owns the general-purpose registers and RFLAGS;
//!    neither is ever visible to another processor.
//! 2. **Shared Memory:** Holds a handle to the guest RAM arena shared by
//!    every processor of the machine.
//! 3. **Execution:** Hosts the unary dispatch paths (see [`execution`]).

/// Instruction execution dispatch (plain and LOCK'd paths).
pub mod execution;

/// Operand location resolution (register vs. memory).
pub mod operand;

use std::sync::Arc;

use crate::config::{AtomicCaps, Config};
use crate::core::arch::{Gpr, Rflags};
use crate::mem::GuestRam;

/// A single virtual processor.
///
/// Each `Vcpu` runs on its own host thread (or cooperative task), executing
/// an independent instruction stream against the shared guest memory arena.
/// Processors are created at machine startup and dropped at teardown;
/// nothing inside survives an individual instruction except the
/// architectural state itself.
pub struct Vcpu {
    /// Processor identifier (APIC-id-like ordinal, used in diagnostics).
    pub id: usize,
    /// General-purpose register file.
    pub regs: Gpr,
    /// Status-flag register, exclusively owned by this processor.
    pub rflags: Rflags,
    /// Shared guest RAM arena.
    pub ram: Arc<GuestRam>,
    /// Host atomic capabilities, resolved at configuration time.
    pub caps: AtomicCaps,
    /// Emit instruction-level trace events.
    pub trace: bool,
}

impl Vcpu {
    /// Creates a virtual processor attached to a shared guest RAM arena.
    ///
    /// # Arguments
    ///
    /// * `id`     - Processor ordinal.
    /// * `ram`    - The machine's shared guest memory.
    /// * `config` - Machine configuration (host capabilities, tracing).
    ///
    /// # Returns
    ///
    /// A new `Vcpu` with zeroed registers and reset flags.
    pub fn new(id: usize, ram: Arc<GuestRam>, config: &Config) -> Self {
        Self {
            id,
            regs: Gpr::new(),
            rflags: Rflags::default(),
            ram,
            caps: config.host.atomics,
            trace: config.general.trace_instructions,
        }
    }
}
