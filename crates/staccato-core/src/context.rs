//! Stream context: the sample rate and block size supplied by the driver.
//!
//! The primitives in this crate never talk to hardware. Whatever drives them
//! (a DMA interrupt, a host callback, an offline renderer) only has to say how
//! fast samples arrive and how many come per block, through [`AudioContext`].

/// Default sample rate of the DAC in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// Default number of samples per channel in one block.
pub const DEFAULT_BLOCK_SIZE: usize = 256;

/// Default bit depth of the DAC.
pub const DEFAULT_BIT_DEPTH: u8 = 16;

/// Supplier of the stream format consumed by modules and parameters.
///
/// The sample rate must stay stable while modules run: time-based settings
/// such as [`Parameter::set_transition_time`](crate::Parameter::set_transition_time)
/// are converted to samples once, when they are set.
pub trait AudioContext {
    /// Sample rate in Hz.
    fn sample_rate(&self) -> f32;

    /// Samples per channel in every block.
    fn block_size(&self) -> usize;

    /// Duration of one block in seconds.
    fn block_duration(&self) -> f32 {
        self.block_size() as f32 / self.sample_rate()
    }
}

/// Plain, copyable [`AudioContext`].
///
/// # Example
///
/// ```rust
/// use staccato_core::{AudioContext, StreamContext};
///
/// let ctx = StreamContext::new(48000.0, 480);
/// assert_eq!(ctx.sample_rate(), 48000.0);
/// assert!((ctx.block_duration() - 0.01).abs() < 1e-6);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StreamContext {
    sample_rate: f32,
    block_size: usize,
}

impl StreamContext {
    /// Creates a context.
    ///
    /// # Panics
    ///
    /// Panics if `sample_rate` is not strictly positive and finite, or if
    /// `block_size` is zero.
    pub fn new(sample_rate: f32, block_size: usize) -> Self {
        assert!(
            sample_rate.is_finite() && sample_rate > 0.0,
            "sample rate must be positive, got {sample_rate}"
        );
        assert!(block_size > 0, "block size must be > 0");
        Self {
            sample_rate,
            block_size,
        }
    }
}

impl Default for StreamContext {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_RATE as f32, DEFAULT_BLOCK_SIZE)
    }
}

impl AudioContext for StreamContext {
    #[inline]
    fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    #[inline]
    fn block_size(&self) -> usize {
        self.block_size
    }
}
