//! Simulator configuration.
//!
//! Configuration is plain data: construct with `Config::default()` or
//! deserialize from JSON. Every field carries a serde default so partial
//! documents work.

use serde::Deserialize;

/// Root configuration passed to [`crate::core::Cpu::new`].
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// General simulation settings.
    #[serde(default)]
    pub general: GeneralConfig,
}

impl Default for Config {
    /// Returns the default value.
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
        }
    }
}

/// General simulation settings and options.
///
/// Contains high-level simulation configuration such as instruction tracing
/// and the runaway-step guard.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Trace each decoded instruction to stderr before it executes.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Stop the run loop after this many cycles; 0 means unbounded.
    ///
    /// A program with no reachable `hlt` loops forever by design (the jump
    /// targets wrap inside the 16-byte space), so callers that need an upper
    /// bound set one here.
    #[serde(default)]
    pub max_steps: u64,
}

impl Default for GeneralConfig {
    /// Returns the default value.
    fn default() -> Self {
        Self {
            trace_instructions: false,
            max_steps: 0,
        }
    }
}
