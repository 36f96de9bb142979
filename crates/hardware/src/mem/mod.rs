//! Guest memory subsystem.
//!
//! Contains the shared guest RAM arena. The arena is created once at machine
//! startup, wrapped in an `Arc`, and handed to every virtual processor; it
//! is never individually owned. All multi-byte accessors are little-endian
//! on the wire, matching the guest architecture, and the atomic views back
//! the LOCK'd read-modify-write paths.

/// Shared guest RAM arena (mmap-backed, typed atomic views).
pub mod ram;

pub use ram::GuestRam;
