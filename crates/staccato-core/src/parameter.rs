//! Linearly interpolated parameters for click-free control changes.
//!
//! Jumping a gain or cutoff straight to a new value in the middle of a block
//! produces an audible click. A [`Parameter`] remembers where it came from
//! and ramps linearly to the new value over a fixed number of samples.
//!
//! ## Re-triggering
//!
//! [`set_value`](Parameter::set_value) starts the new ramp from the value the
//! listener currently *hears* (the interpolated value), not from the previous
//! target. Turning a knob quickly therefore never produces a step, however
//! often the transition is restarted.
//!
//! ## Usage
//!
//! ```rust
//! use staccato_core::Parameter;
//!
//! let mut cutoff = Parameter::new(1000.0_f32);
//! cutoff.set_transition_time(0.01, 48000.0); // 10 ms ramp
//!
//! cutoff.set_value(2000.0);
//!
//! // In the audio callback, once per sample
//! for _ in 0..480 {
//!     let smoothed = cutoff.advance();
//!     // use `smoothed`...
//! }
//! assert!(cutoff.transition_is_complete());
//! assert_eq!(cutoff.interpolated_value(), 2000.0);
//! ```

use crate::math::{Sample, seconds_to_samples};

/// Default transition length in samples.
pub const DEFAULT_TRANSITION_SAMPLES: usize = 100;

/// A parameter that ramps linearly from its last value to its current value.
///
/// `passed_samples` never exceeds `total_samples`, so the transition index
/// always lies in `[0, 1]`. A zero-length transition is always complete.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter<T> {
    /// Target of the running transition
    current: T,
    /// Start of the running transition
    last: T,
    /// Transition length in samples
    total_samples: usize,
    /// Samples elapsed since the last `set_value`
    passed_samples: usize,
}

impl<T: Sample> Parameter<T> {
    /// Creates a settled parameter (last and current both `value`) with a
    /// [`DEFAULT_TRANSITION_SAMPLES`]-long transition.
    pub fn new(value: T) -> Self {
        Self {
            current: value,
            last: value,
            total_samples: DEFAULT_TRANSITION_SAMPLES,
            passed_samples: 0,
        }
    }

    /// Creates a parameter with the transition length derived from a time.
    ///
    /// # Arguments
    /// * `value` - Initial value
    /// * `seconds` - Transition time in seconds
    /// * `sample_rate` - Sample rate in Hz
    pub fn with_transition_time(value: T, seconds: f32, sample_rate: f32) -> Self {
        let mut param = Self::new(value);
        param.set_transition_time(seconds, sample_rate);
        param
    }

    /// Target value of the running transition.
    #[inline]
    pub fn value(&self) -> T {
        self.current
    }

    /// Start value of the running transition.
    #[inline]
    pub fn last_value(&self) -> T {
        self.last
    }

    /// Instantaneous value: `last` blended towards `current` by
    /// [`transition_index`](Self::transition_index).
    #[inline]
    pub fn interpolated_value(&self) -> T {
        T::lerp(self.last, self.current, self.transition_index())
    }

    /// Progress of the transition in `[0, 1]`.
    ///
    /// Zero-length transitions report 1.0.
    #[inline]
    pub fn transition_index(&self) -> f32 {
        if self.total_samples == 0 {
            return 1.0;
        }
        self.passed_samples as f32 / self.total_samples as f32
    }

    /// Starts a transition towards `value` from the current interpolated value.
    #[inline]
    pub fn set_value(&mut self, value: T) {
        self.last = self.interpolated_value();
        self.current = value;
        self.passed_samples = 0;
    }

    /// Jumps to `value` with no transition.
    #[inline]
    pub fn set_immediate(&mut self, value: T) {
        self.last = value;
        self.current = value;
        self.passed_samples = self.total_samples;
    }

    /// Advances the transition by `samples`, saturating at its end.
    ///
    /// Call with 1 per sample or with the block length once per block.
    #[inline]
    pub fn update_sample_count(&mut self, samples: usize) {
        self.passed_samples = self
            .passed_samples
            .saturating_add(samples)
            .min(self.total_samples);
    }

    /// Returns the interpolated value, then advances by one sample.
    #[inline]
    pub fn advance(&mut self) -> T {
        let value = self.interpolated_value();
        self.update_sample_count(1);
        value
    }

    /// Sets the transition length in samples.
    ///
    /// Elapsed progress is clamped to the new length, so shortening a running
    /// transition may complete it. A completed transition stays complete.
    pub fn set_transition_samples(&mut self, samples: usize) {
        self.passed_samples = if self.transition_is_complete() {
            samples
        } else {
            self.passed_samples.min(samples)
        };
        self.total_samples = samples;

        #[cfg(feature = "tracing")]
        tracing::debug!("parameter: transition length {samples} samples");
    }

    /// Sets the transition length from a time, rounded to the nearest sample.
    ///
    /// # Arguments
    /// * `seconds` - Transition time in seconds (negative or NaN means 0)
    /// * `sample_rate` - Sample rate in Hz
    pub fn set_transition_time(&mut self, seconds: f32, sample_rate: f32) {
        self.set_transition_samples(seconds_to_samples(seconds, sample_rate));
    }

    /// Transition length in samples.
    #[inline]
    pub fn transition_samples(&self) -> usize {
        self.total_samples
    }

    /// Returns true once the transition has run its full length.
    #[inline]
    pub fn transition_is_complete(&self) -> bool {
        self.passed_samples >= self.total_samples
    }
}

impl<T: Sample> Default for Parameter<T> {
    fn default() -> Self {
        Self::new(T::ZERO)
    }
}
