//! Stream format and smoothing settings.

use std::path::Path;

use serde::{Deserialize, Serialize};
use staccato_core::{
    AudioContext, DEFAULT_BIT_DEPTH, DEFAULT_BLOCK_SIZE, DEFAULT_SAMPLE_RATE, ms_to_samples,
    seconds_to_samples,
};

use crate::ConfigError;

/// Bit depths the DAC can be driven at.
pub const SUPPORTED_BIT_DEPTHS: [u8; 3] = [16, 24, 32];

/// Default parameter transition time in milliseconds.
pub const DEFAULT_TRANSITION_MS: f32 = 10.0;

/// Audio stream configuration.
///
/// Missing keys fall back to the driver defaults, so an empty file is a
/// valid configuration.
///
/// # Example
///
/// ```rust
/// use staccato_config::AudioConfig;
/// use staccato_core::AudioContext;
///
/// let config = AudioConfig::from_toml("sample_rate = 48000\nblock_size = 128").unwrap();
/// config.validate().unwrap();
/// assert_eq!(config.sample_rate(), 48000.0);
/// assert_eq!(config.bit_depth, 16);
/// assert_eq!(config.transition_samples(), 480);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioConfig {
    /// Sample rate in Hz.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,

    /// Samples per channel in each block. Must be even.
    #[serde(default = "default_block_size")]
    pub block_size: usize,

    /// DAC bit depth, one of [`SUPPORTED_BIT_DEPTHS`].
    #[serde(default = "default_bit_depth")]
    pub bit_depth: u8,

    /// Parameter transition time in milliseconds.
    #[serde(default = "default_transition_ms")]
    pub transition_ms: f32,
}

fn default_sample_rate() -> u32 {
    DEFAULT_SAMPLE_RATE
}

fn default_block_size() -> usize {
    DEFAULT_BLOCK_SIZE
}

fn default_bit_depth() -> u8 {
    DEFAULT_BIT_DEPTH
}

fn default_transition_ms() -> f32 {
    DEFAULT_TRANSITION_MS
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            block_size: DEFAULT_BLOCK_SIZE,
            bit_depth: DEFAULT_BIT_DEPTH,
            transition_ms: DEFAULT_TRANSITION_MS,
        }
    }
}

impl AudioConfig {
    /// Set the sample rate.
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Set the block size.
    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size;
        self
    }

    /// Set the bit depth.
    pub fn with_bit_depth(mut self, bit_depth: u8) -> Self {
        self.bit_depth = bit_depth;
        self
    }

    /// Set the transition time in milliseconds.
    pub fn with_transition_ms(mut self, transition_ms: f32) -> Self {
        self.transition_ms = transition_ms;
        self
    }

    /// Load and validate a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        let config = Self::from_toml(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), ?config, "loaded audio config");
        Ok(config)
    }

    /// Parse a configuration from a TOML string. Does not validate.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the configuration to a TOML file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        tracing::debug!(path = %path.display(), "saved audio config");
        Ok(())
    }

    /// Serialize to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Checks that every field can drive the audio path.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let result = self.check();
        if let Err(err) = &result {
            tracing::warn!(%err, "rejected audio config");
        }
        result
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.sample_rate == 0 {
            return Err(ConfigError::invalid("sample_rate", "must be > 0"));
        }
        if self.block_size == 0 {
            return Err(ConfigError::invalid("block_size", "must be > 0"));
        }
        if self.block_size % 2 != 0 {
            return Err(ConfigError::invalid(
                "block_size",
                format!("must be even, got {}", self.block_size),
            ));
        }
        if !SUPPORTED_BIT_DEPTHS.contains(&self.bit_depth) {
            return Err(ConfigError::invalid(
                "bit_depth",
                format!("expected 16, 24 or 32, got {}", self.bit_depth),
            ));
        }
        if !self.transition_ms.is_finite() || self.transition_ms < 0.0 {
            return Err(ConfigError::invalid(
                "transition_ms",
                format!("must be finite and >= 0, got {}", self.transition_ms),
            ));
        }
        Ok(())
    }

    /// Transition time converted to whole samples at this sample rate.
    pub fn transition_samples(&self) -> usize {
        seconds_to_samples(self.transition_ms / 1000.0, self.sample_rate as f32)
    }

    /// Transition time in (fractional) samples.
    pub fn transition_samples_exact(&self) -> f32 {
        ms_to_samples(self.transition_ms, self.sample_rate as f32)
    }
}

impl AudioContext for AudioConfig {
    fn sample_rate(&self) -> f32 {
        self.sample_rate as f32
    }

    fn block_size(&self) -> usize {
        self.block_size
    }
}
