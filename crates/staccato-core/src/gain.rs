//! Smoothed gain stage.
//!
//! [`SmoothedGain`] is the simplest useful [`AudioModule`]: it multiplies
//! every channel by a [`Parameter`] that is advanced once per sample, so level
//! changes from a knob or a preset never click.
//!
//! # Usage
//!
//! ```rust
//! use staccato_core::{AudioBuffer, AudioModule, SmoothedGain};
//!
//! let mut gain = SmoothedGain::new(1.0);
//! AudioModule::<2, 64>::set_sample_rate(&mut gain, 48000.0);
//! gain.set_gain_db(-6.0);
//!
//! let mut block: AudioBuffer<f32, 2, 64> = AudioBuffer::new();
//! block.channel_mut(0).fill(1.0);
//! gain.process(&mut block);
//! assert!(block.channel(0)[63] < 1.0);
//! ```
//!
//! # Design
//!
//! The gain is linear internally. The dB interface clamps to
//! [`GAIN_MIN_DB`]..=[`GAIN_MAX_DB`].

use crate::audio_buffer::AudioBuffer;
use crate::context::DEFAULT_SAMPLE_RATE;
use crate::math::{db_to_linear, linear_to_db};
use crate::module::AudioModule;
use crate::parameter::Parameter;

/// Minimum gain in dB.
pub const GAIN_MIN_DB: f32 = -60.0;

/// Maximum gain in dB.
pub const GAIN_MAX_DB: f32 = 12.0;

/// Default ramp time in seconds (10 ms).
pub const DEFAULT_GAIN_TRANSITION: f32 = 0.01;

/// Gain module with a linear ramp between settings.
#[derive(Debug, Clone)]
pub struct SmoothedGain {
    gain: Parameter<f32>,
    transition_seconds: f32,
    sample_rate: f32,
}

impl SmoothedGain {
    /// Creates a gain stage settled at `linear`, with a
    /// [`DEFAULT_GAIN_TRANSITION`] ramp at [`DEFAULT_SAMPLE_RATE`].
    pub fn new(linear: f32) -> Self {
        let sample_rate = DEFAULT_SAMPLE_RATE as f32;
        let mut gain =
            Parameter::with_transition_time(linear, DEFAULT_GAIN_TRANSITION, sample_rate);
        gain.set_immediate(linear);
        Self {
            gain,
            transition_seconds: DEFAULT_GAIN_TRANSITION,
            sample_rate,
        }
    }

    /// Ramps to a linear gain.
    #[inline]
    pub fn set_gain(&mut self, linear: f32) {
        self.gain.set_value(linear);
    }

    /// Ramps to a gain in dB, clamped to [`GAIN_MIN_DB`]..=[`GAIN_MAX_DB`].
    #[inline]
    pub fn set_gain_db(&mut self, db: f32) {
        self.gain
            .set_value(db_to_linear(db.clamp(GAIN_MIN_DB, GAIN_MAX_DB)));
    }

    /// Target linear gain.
    #[inline]
    pub fn gain(&self) -> f32 {
        self.gain.value()
    }

    /// Target gain in dB.
    #[inline]
    pub fn gain_db(&self) -> f32 {
        linear_to_db(self.gain.value())
    }

    /// Sets the ramp time, re-derived whenever the sample rate changes.
    pub fn set_transition_time(&mut self, seconds: f32) {
        self.transition_seconds = seconds;
        self.gain.set_transition_time(seconds, self.sample_rate);
    }

    /// Ramp time in seconds.
    pub fn transition_time(&self) -> f32 {
        self.transition_seconds
    }

    /// The underlying parameter.
    pub fn parameter(&self) -> &Parameter<f32> {
        &self.gain
    }
}

impl Default for SmoothedGain {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl<const CHANNELS: usize, const LEN: usize> AudioModule<CHANNELS, LEN> for SmoothedGain {
    fn process(&mut self, buffer: &mut AudioBuffer<f32, CHANNELS, LEN>) {
        if self.gain.transition_is_complete() {
            buffer.apply_gain(self.gain.value());
            return;
        }
        for i in 0..LEN {
            let gain = self.gain.advance();
            for channel in buffer.channels_mut() {
                channel[i] *= gain;
            }
        }
    }

    fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        self.gain
            .set_transition_time(self.transition_seconds, sample_rate);
    }

    fn reset(&mut self) {
        self.gain.set_immediate(self.gain.value());
    }
}
