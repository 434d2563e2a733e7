//! Runtime configuration for staccato audio streams.
//!
//! The core primitives take their stream format through
//! [`AudioContext`](staccato_core::AudioContext). This crate supplies that
//! format from a TOML file, with defaults for every missing key and validation
//! before anything reaches the audio path.
//!
//! # Example
//!
//! ```rust,no_run
//! use staccato_config::AudioConfig;
//! use staccato_core::{AudioModule, SmoothedGain};
//!
//! let config = AudioConfig::load("audio.toml").unwrap();
//!
//! let mut gain = SmoothedGain::new(1.0);
//! gain.set_transition_time(config.transition_ms / 1000.0);
//! AudioModule::<2, 256>::prepare(&mut gain, &config);
//!
//! config.save("backup/audio.toml").unwrap();
//! ```

mod audio_config;
mod error;

pub use audio_config::{AudioConfig, DEFAULT_TRANSITION_MS, SUPPORTED_BIT_DEPTHS};
pub use error::ConfigError;
