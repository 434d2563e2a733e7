//! Interpolated lookup tables for cheap function approximation.
//!
//! A [`LookupTable`] samples an arbitrary `f32 -> f32` function at `N` evenly
//! spaced points across `[arg_min, arg_max)` once, then answers queries by
//! linear interpolation between neighbouring samples. Evaluation costs the
//! same regardless of how expensive the original function was, which makes it
//! the usual way to run `sin`, `tanh` or `exp` shapers inside an audio callback
//! on FPU-poor targets.
//!
//! # Edge Behaviour
//!
//! The table holds `N + 1` values. The extra one sits just past the domain
//! and encodes the [`EdgeBehavior`], so the last interpolation segment bends
//! towards whatever lies beyond the domain:
//!
//! | Edge | Outside the domain | Sentinel sample |
//! |------|--------------------|-----------------|
//! | [`Zeroed`](EdgeBehavior::Zeroed) | `0.0` | `0.0` |
//! | [`Extended`](EdgeBehavior::Extended) | Nearest edge sample | Copy of sample `N - 1` |
//! | [`Periodic`](EdgeBehavior::Periodic) | Input wrapped into the domain | Copy of sample `0` |
//!
//! The domain is half-open: `arg_max` itself is already "outside".
//!
//! # Example
//!
//! ```rust
//! use staccato_core::{EdgeBehavior, LookupTable};
//! use core::f32::consts::{PI, TAU};
//!
//! // Built once, outside the audio callback
//! let sine: LookupTable<4096> = LookupTable::new(libm::sinf, 0.0, TAU, EdgeBehavior::Periodic);
//!
//! assert!((sine.eval(PI / 2.0) - 1.0).abs() < 1e-4);
//! // Phases outside [0, 2π) wrap around
//! assert!((sine.eval(PI / 2.0 + TAU) - 1.0).abs() < 1e-4);
//! ```

use libm::floorf;

use crate::math::{lerp, linear_map};

/// Behaviour of a [`LookupTable`] outside `[arg_min, arg_max)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EdgeBehavior {
    /// Evaluates to `0.0` outside the domain.
    Zeroed,
    /// Holds the first sample below the domain and the last sample above it.
    #[default]
    Extended,
    /// Treats the table as one period of a periodic function.
    Periodic,
}

/// Lookup table of `N` samples (plus one edge sentinel) of an `f32` function.
///
/// Immutable after construction, so one table can be shared by reference
/// between any number of voices.
#[derive(Debug, Clone)]
pub struct LookupTable<const N: usize> {
    table: [f32; N],
    /// Sample `N`, one step past the last real sample.
    sentinel: f32,
    arg_min: f32,
    arg_max: f32,
    edges: EdgeBehavior,
}

impl<const N: usize> LookupTable<N> {
    /// Samples `function` over `[arg_min, arg_max)`.
    ///
    /// Sample `i` is `function(arg_min + i * (arg_max - arg_min) / N)`.
    /// This calls `function` `N` times and is not meant for the audio thread.
    ///
    /// # Panics
    ///
    /// Panics if `N == 0` or if `arg_max <= arg_min` (including NaN bounds).
    pub fn new(
        function: impl Fn(f32) -> f32,
        arg_min: f32,
        arg_max: f32,
        edges: EdgeBehavior,
    ) -> Self {
        assert!(N > 0, "LookupTable size must be > 0");
        assert!(
            arg_max > arg_min,
            "LookupTable domain must be non-empty, got [{arg_min}, {arg_max})"
        );

        let mut table = [0.0; N];
        for (i, slot) in table.iter_mut().enumerate() {
            let x = lerp(arg_min, arg_max, i as f32 / N as f32);
            *slot = function(x);
        }

        let sentinel = match edges {
            EdgeBehavior::Periodic => table[0],
            EdgeBehavior::Extended => table[N - 1],
            EdgeBehavior::Zeroed => 0.0,
        };

        #[cfg(feature = "tracing")]
        tracing::debug!("lookup_table: {N} samples over [{arg_min}, {arg_max}), edges {edges:?}");

        Self {
            table,
            sentinel,
            arg_min,
            arg_max,
            edges,
        }
    }

    /// Approximates the sampled function at `x`.
    ///
    /// Inside the domain this is a linear interpolation between the two
    /// neighbouring samples. Outside it the [`EdgeBehavior`] decides.
    /// NaN input yields NaN.
    #[inline]
    pub fn eval(&self, x: f32) -> f32 {
        if x < self.arg_min || x >= self.arg_max {
            self.eval_outside(x)
        } else {
            self.interpolate(x)
        }
    }

    /// Lower bound of the domain (inclusive).
    #[inline]
    pub fn arg_min(&self) -> f32 {
        self.arg_min
    }

    /// Upper bound of the domain (exclusive).
    #[inline]
    pub fn arg_max(&self) -> f32 {
        self.arg_max
    }

    /// Edge behaviour chosen at construction.
    #[inline]
    pub fn edges(&self) -> EdgeBehavior {
        self.edges
    }

    /// The `N` real samples, without the sentinel.
    #[inline]
    pub fn samples(&self) -> &[f32; N] {
        &self.table
    }

    /// Number of real samples, always `N`.
    #[inline]
    pub const fn size(&self) -> usize {
        N
    }

    #[inline]
    fn eval_outside(&self, x: f32) -> f32 {
        match self.edges {
            EdgeBehavior::Zeroed => 0.0,
            EdgeBehavior::Extended => {
                if x < self.arg_min {
                    self.table[0]
                } else {
                    self.table[N - 1]
                }
            }
            EdgeBehavior::Periodic => self.interpolate(self.wrap(x)),
        }
    }

    /// Interpolates for `x` in `[arg_min, arg_max)`.
    #[inline]
    fn interpolate(&self, x: f32) -> f32 {
        let position = linear_map(x, self.arg_min, self.arg_max, 0.0, N as f32);
        // f32 rounding can push `position` up to exactly N just below arg_max.
        let index = (position as usize).min(N - 1);
        let frac = position - index as f32;
        lerp(self.table[index], self.sample(index + 1), frac)
    }

    #[inline]
    fn sample(&self, index: usize) -> f32 {
        self.table.get(index).copied().unwrap_or(self.sentinel)
    }

    /// Reduces `x` into `[arg_min, arg_max)` by whole periods.
    ///
    /// Equivalent to repeatedly adding or subtracting the domain width, but
    /// O(1) for any magnitude.
    #[inline]
    fn wrap(&self, x: f32) -> f32 {
        let width = self.arg_max - self.arg_min;
        let periods = floorf((x - self.arg_min) / width);
        let mut wrapped = x - periods * width;
        if wrapped >= self.arg_max {
            wrapped -= width;
        }
        if wrapped < self.arg_min {
            wrapped = self.arg_min;
        }
        wrapped
    }
}
