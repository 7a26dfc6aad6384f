//! Configuration for Rollbook
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Main configuration for a Rollbook session
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Persistence Configuration
    // -------------------------------------------------------------------------
    /// Flat file holding one student record per line
    pub data_file: PathBuf,

    /// Write saves to `<data_file>.tmp` and rename over the real file,
    /// so a failed save never leaves a truncated data file behind
    pub atomic_save: bool,

    // -------------------------------------------------------------------------
    // Interface Configuration
    // -------------------------------------------------------------------------
    /// Cosmetic pause shown by the menu before mutations (milliseconds).
    /// The library never sleeps; only the binary reads this.
    pub loading_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("students.txt"),
            atomic_save: true,
            loading_delay_ms: 0,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data file path
    pub fn data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_file = path.into();
        self
    }

    /// Enable or disable write-then-rename saves
    pub fn atomic_save(mut self, enabled: bool) -> Self {
        self.config.atomic_save = enabled;
        self
    }

    /// Set the cosmetic loading delay (in milliseconds)
    pub fn loading_delay_ms(mut self, ms: u64) -> Self {
        self.config.loading_delay_ms = ms;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
