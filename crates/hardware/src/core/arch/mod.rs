//! Architectural state definitions for the x86-64 virtual processor.
//!
//! Contains the register-level state owned by a single virtual processor:
//! the general-purpose register file and the status-flag register. Neither
//! is ever shared between processors; shared state lives in the guest
//! memory arena.

/// General-purpose register file (RAX-R15, width-sliced access).
pub mod gpr;

/// RFLAGS status-flag register.
pub mod rflags;

pub use gpr::{GPR_COUNT, Gpr};
pub use rflags::Rflags;
