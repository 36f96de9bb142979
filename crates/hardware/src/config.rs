//! Configuration system for the x86-64 execution core.
//!
//! This module defines all configuration structures used to parameterize the
//! emulator core. It provides:
//! 1. **Defaults:** Baseline machine constants (guest RAM size).
//! 2. **Structures:** Hierarchical config for general, memory, and host
//!    settings.
//! 3. **Capability Queries:** The host's atomic compare-and-swap support,
//!    resolved once at configuration time instead of scattering conditional
//!    compilation through the dispatch logic.
//!
//! Configuration is supplied as JSON from an embedder via
//! [`Config::from_json`], or use `Config::default()` for in-process use.

use serde::Deserialize;

/// Default configuration constants for the emulator core.
///
/// These values define the baseline machine configuration when not
/// explicitly overridden.
mod defaults {
    /// Total size of guest RAM (128 MiB).
    ///
    /// Defines the guest physical memory limit. Accesses beyond this bound
    /// are a defect in the surrounding emulator and abort.
    pub const RAM_SIZE: usize = 128 * 1024 * 1024;
}

/// Root configuration for the execution core.
///
/// # Examples
///
/// ```
/// use x64sim_core::config::Config;
///
/// let config = Config::from_json(r#"{ "memory": { "ram_size": 4194304 } }"#)
///     .unwrap();
/// assert_eq!(config.memory.ram_size, 4 * 1024 * 1024);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General emulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Guest memory configuration
    #[serde(default)]
    pub memory: MemoryConfig,
    /// Host platform capabilities
    #[serde(default)]
    pub host: HostConfig,
}

impl Config {
    /// Parses a configuration from a JSON document.
    ///
    /// Missing fields fall back to their defaults, so an embedder only
    /// specifies what it overrides.
    ///
    /// # Arguments
    ///
    /// * `json` - The JSON configuration text.
    ///
    /// # Errors
    ///
    /// Returns the underlying parse error if the document is not valid JSON
    /// or a field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// General emulation settings and options.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Enable instruction-level trace output (routed through `tracing`).
    #[serde(default)]
    pub trace_instructions: bool,
}

/// Guest memory configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// Guest RAM size in bytes.
    #[serde(default = "MemoryConfig::default_ram_size")]
    pub ram_size: usize,
}

impl MemoryConfig {
    /// Returns the default guest RAM size.
    fn default_ram_size() -> usize {
        defaults::RAM_SIZE
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            ram_size: defaults::RAM_SIZE,
        }
    }
}

/// Host platform configuration.
///
/// Capabilities are detected from the build target by default; an embedder
/// can override them (for example to exercise the trap paths of a
/// constrained host on a capable one).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HostConfig {
    /// Atomic compare-and-swap support of the host.
    #[serde(default)]
    pub atomics: AtomicCaps,
}

/// Atomic compare-and-swap capabilities of the host platform.
///
/// A LOCK-prefixed guest instruction at a width the host cannot CAS must
/// raise an undefined-opcode fault; silently executing it non-atomically is
/// never acceptable. Only the byte and qword widths are gated: every
/// supported host provides 32-bit CAS, and the 16-bit operand size never
/// reaches an atomic path in this instruction family.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AtomicCaps {
    /// Host supports single-byte compare-and-swap.
    ///
    /// False on targets without sub-word atomics, where a LOCK'd 8-bit
    /// read-modify-write faults instead.
    #[serde(default = "AtomicCaps::default_byte_cas")]
    pub byte_cas: bool,

    /// Host supports 64-bit compare-and-swap.
    ///
    /// False on 32-bit hosts, where a LOCK'd aligned 64-bit
    /// read-modify-write faults instead.
    #[serde(default = "AtomicCaps::default_qword_cas")]
    pub qword_cas: bool,
}

impl AtomicCaps {
    /// Detects the capabilities of the build target.
    ///
    /// # Returns
    ///
    /// An `AtomicCaps` with each width reported by the compiler's atomic
    /// support for the target.
    pub const fn detect() -> Self {
        Self {
            byte_cas: cfg!(target_has_atomic = "8"),
            qword_cas: cfg!(target_has_atomic = "64"),
        }
    }

    /// Serde default for [`AtomicCaps::byte_cas`].
    fn default_byte_cas() -> bool {
        Self::detect().byte_cas
    }

    /// Serde default for [`AtomicCaps::qword_cas`].
    fn default_qword_cas() -> bool {
        Self::detect().qword_cas
    }
}

impl Default for AtomicCaps {
    fn default() -> Self {
        Self::detect()
    }
}
