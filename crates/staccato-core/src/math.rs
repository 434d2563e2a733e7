//! Math kernel shared by the lookup table, the parameter smoother and the
//! audio buffer.
//!
//! Everything here is stateless, allocation-free and suitable for `no_std`.
//!
//! # Functions
//!
//! - [`lerp`] - Linear interpolation between two values
//! - [`linear_map`] - Map a value from one range onto another
//! - [`clip`] - Limit a value to a range
//! - [`db_to_linear`] / [`linear_to_db`] - Convert between dB and linear gain
//! - [`ms_to_samples`] / [`seconds_to_samples`] - Time conversions
//!
//! # Sample Types
//!
//! The [`Sample`] trait abstracts over the numeric formats an
//! [`AudioBuffer`](crate::AudioBuffer) or [`Parameter`](crate::Parameter)
//! can hold: `f32`, `f64`, and integer PCM (`i16`, `i32`).

use libm::{expf, logf, round, roundf};

/// Linear interpolation between two values.
///
/// Computed as `a * (1 - mix) + b * mix`, so both endpoints are exact:
/// `mix = 0` yields `a` and `mix = 1` yields `b`.
///
/// # Arguments
/// * `a` - Value at `mix = 0`
/// * `b` - Value at `mix = 1`
/// * `mix` - Interpolation factor, expected in `[0.0, 1.0]`
///
/// # Example
/// ```rust
/// use staccato_core::lerp;
///
/// assert_eq!(lerp(-10.0, 10.0, 0.0), -10.0);
/// assert_eq!(lerp(-10.0, 10.0, 0.5), 0.0);
/// assert_eq!(lerp(-10.0, 10.0, 1.0), 10.0);
/// ```
#[inline]
pub fn lerp(a: f32, b: f32, mix: f32) -> f32 {
    a * (1.0 - mix) + b * mix
}

/// Linearly map `x` from `[input_min, input_max]` onto `[output_min, output_max]`.
///
/// Values outside the input range are extrapolated, not clipped. The input
/// range must have non-zero width.
///
/// # Example
/// ```rust
/// use staccato_core::linear_map;
///
/// assert_eq!(linear_map(5.0, 0.0, 10.0, 30.0, 50.0), 40.0);
/// assert_eq!(linear_map(0.25, 0.0, 1.0, 0.0, -1.0), -0.25);
/// ```
#[inline]
pub fn linear_map(x: f32, input_min: f32, input_max: f32, output_min: f32, output_max: f32) -> f32 {
    (x - input_min) / (input_max - input_min) * (output_max - output_min) + output_min
}

/// Clip `x` to `[min, max]`.
///
/// Unlike [`f32::clamp`] this never panics: with `min > max` the upper bound
/// wins. NaN passes through unchanged.
///
/// # Example
/// ```rust
/// use staccato_core::clip;
///
/// assert_eq!(clip(0.5, 0.0, 1.0), 0.5);
/// assert_eq!(clip(-13.1, -10.0, 10.0), -10.0);
/// assert_eq!(clip(204.5, -10.0, 10.0), 10.0);
/// ```
#[inline]
pub fn clip(x: f32, min: f32, max: f32) -> f32 {
    let x = if x < min { min } else { x };
    if x > max { max } else { x }
}

/// Convert decibels to linear gain.
///
/// # Example
/// ```rust
/// use staccato_core::db_to_linear;
///
/// assert!((db_to_linear(0.0) - 1.0).abs() < 0.001);
/// assert!((db_to_linear(-6.02) - 0.5).abs() < 0.01);
/// ```
#[inline]
pub fn db_to_linear(db: f32) -> f32 {
    // 10^(dB/20) = e^(dB * ln(10)/20)
    const FACTOR: f32 = core::f32::consts::LN_10 / 20.0;
    expf(db * FACTOR)
}

/// Convert linear gain to decibels. Gains below 1e-10 are floored.
#[inline]
pub fn linear_to_db(linear: f32) -> f32 {
    const FACTOR: f32 = 20.0 / core::f32::consts::LN_10;
    logf(linear.max(1e-10)) * FACTOR
}

/// Convert milliseconds to a (fractional) number of samples.
#[inline]
pub fn ms_to_samples(ms: f32, sample_rate: f32) -> f32 {
    ms * sample_rate / 1000.0
}

/// Convert a duration in seconds to a whole number of samples.
///
/// Rounds to the nearest sample. Negative and NaN products map to 0, and
/// products beyond `usize::MAX` saturate.
///
/// # Example
/// ```rust
/// use staccato_core::seconds_to_samples;
///
/// assert_eq!(seconds_to_samples(0.01, 48000.0), 480);
/// assert_eq!(seconds_to_samples(-1.0, 48000.0), 0);
/// ```
#[inline]
pub fn seconds_to_samples(seconds: f32, sample_rate: f32) -> usize {
    let samples = roundf(seconds * sample_rate);
    // `as` saturates and maps NaN to 0.
    if samples > 0.0 { samples as usize } else { 0 }
}

/// A numeric sample format usable in audio buffers and parameters.
///
/// Integer formats saturate instead of wrapping so that an overdriven
/// buffer clips rather than folds over.
pub trait Sample: Copy + Default + PartialEq + core::fmt::Debug {
    /// Silence.
    const ZERO: Self;

    /// Sum of two samples (mixing).
    fn accumulate(self, other: Self) -> Self;

    /// Product of two samples (ring modulation, envelopes).
    fn modulate(self, other: Self) -> Self;

    /// Multiply by a linear gain factor.
    fn scale(self, gain: f32) -> Self;

    /// Linear interpolation, see [`lerp`].
    fn lerp(a: Self, b: Self, mix: f32) -> Self;
}

impl Sample for f32 {
    const ZERO: Self = 0.0;

    #[inline]
    fn accumulate(self, other: Self) -> Self {
        self + other
    }

    #[inline]
    fn modulate(self, other: Self) -> Self {
        self * other
    }

    #[inline]
    fn scale(self, gain: f32) -> Self {
        self * gain
    }

    #[inline]
    fn lerp(a: Self, b: Self, mix: f32) -> Self {
        lerp(a, b, mix)
    }
}

impl Sample for f64 {
    const ZERO: Self = 0.0;

    #[inline]
    fn accumulate(self, other: Self) -> Self {
        self + other
    }

    #[inline]
    fn modulate(self, other: Self) -> Self {
        self * other
    }

    #[inline]
    fn scale(self, gain: f32) -> Self {
        self * f64::from(gain)
    }

    #[inline]
    fn lerp(a: Self, b: Self, mix: f32) -> Self {
        let mix = f64::from(mix);
        a * (1.0 - mix) + b * mix
    }
}

impl Sample for i16 {
    const ZERO: Self = 0;

    #[inline]
    fn accumulate(self, other: Self) -> Self {
        self.saturating_add(other)
    }

    #[inline]
    fn modulate(self, other: Self) -> Self {
        self.saturating_mul(other)
    }

    #[inline]
    fn scale(self, gain: f32) -> Self {
        roundf(f32::from(self) * gain) as i16
    }

    #[inline]
    fn lerp(a: Self, b: Self, mix: f32) -> Self {
        roundf(lerp(f32::from(a), f32::from(b), mix)) as i16
    }
}

impl Sample for i32 {
    const ZERO: Self = 0;

    #[inline]
    fn accumulate(self, other: Self) -> Self {
        self.saturating_add(other)
    }

    #[inline]
    fn modulate(self, other: Self) -> Self {
        self.saturating_mul(other)
    }

    #[inline]
    fn scale(self, gain: f32) -> Self {
        round(f64::from(self) * f64::from(gain)) as i32
    }

    #[inline]
    fn lerp(a: Self, b: Self, mix: f32) -> Self {
        let mix = f64::from(mix);
        round(f64::from(a) * (1.0 - mix) + f64::from(b) * mix) as i32
    }
}
