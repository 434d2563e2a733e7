//! Block-processing modules driven by the audio callback.
//!
//! An [`AudioModule`] transforms one [`AudioBuffer`] per callback. Modules
//! own their [`Parameter`](crate::Parameter)s and advance them either per
//! sample (inside `process`) or per block, which is the only cadence the
//! primitives rely on.
//!
//! ## Design Decisions
//!
//! - **Fixed block shape**: channel count and block length are const
//!   generics, so a module is bound to the driver's buffer format at compile
//!   time and no length checks happen in the callback.
//! - **Object-safe**: `dyn AudioModule<C, L>` works for runtime module lists,
//!   but [`ModuleExt::then`] builds static chains with no virtual calls.
//! - **No allocations**: every method may run in the audio interrupt.

use crate::audio_buffer::AudioBuffer;
use crate::context::AudioContext;

/// A processor for fixed-size blocks of `CHANNELS × LEN` `f32` samples.
///
/// # Example
///
/// ```rust
/// use staccato_core::{AudioBuffer, AudioModule};
///
/// struct Invert;
///
/// impl AudioModule<2, 64> for Invert {
///     fn process(&mut self, buffer: &mut AudioBuffer<f32, 2, 64>) {
///         buffer.apply_gain(-1.0);
///     }
///
///     fn set_sample_rate(&mut self, _sample_rate: f32) {}
/// }
///
/// let mut buffer = AudioBuffer::new();
/// buffer.channel_mut(0)[0] = 0.5;
/// Invert.process(&mut buffer);
/// assert_eq!(buffer.channel(0)[0], -0.5);
/// ```
pub trait AudioModule<const CHANNELS: usize, const LEN: usize> {
    /// Processes one block in place.
    fn process(&mut self, buffer: &mut AudioBuffer<f32, CHANNELS, LEN>);

    /// Updates the sample rate.
    ///
    /// Called before the first block and whenever the driver's rate changes.
    /// Modules recompute time-based settings here.
    fn set_sample_rate(&mut self, sample_rate: f32);

    /// Clears internal state without changing settings.
    fn reset(&mut self) {}

    /// Configures the module for a stream.
    ///
    /// Default forwards the context's sample rate to
    /// [`set_sample_rate`](Self::set_sample_rate).
    fn prepare(&mut self, context: &dyn AudioContext) {
        debug_assert_eq!(
            context.block_size(),
            LEN,
            "module block length does not match the stream"
        );
        self.set_sample_rate(context.sample_rate());
    }
}

/// Extension trait for chaining modules.
pub trait ModuleExt<const CHANNELS: usize, const LEN: usize>:
    AudioModule<CHANNELS, LEN> + Sized
{
    /// Runs `self`, then `next`, on the same block.
    fn then<M: AudioModule<CHANNELS, LEN>>(self, next: M) -> Chain<Self, M> {
        Chain {
            first: self,
            second: next,
        }
    }
}

impl<const CHANNELS: usize, const LEN: usize, T: AudioModule<CHANNELS, LEN>>
    ModuleExt<CHANNELS, LEN> for T
{
}

/// Two modules in series, created by [`ModuleExt::then`].
#[derive(Debug, Clone)]
pub struct Chain<A, B> {
    first: A,
    second: B,
}

impl<const CHANNELS: usize, const LEN: usize, A, B> AudioModule<CHANNELS, LEN> for Chain<A, B>
where
    A: AudioModule<CHANNELS, LEN>,
    B: AudioModule<CHANNELS, LEN>,
{
    #[inline]
    fn process(&mut self, buffer: &mut AudioBuffer<f32, CHANNELS, LEN>) {
        self.first.process(buffer);
        self.second.process(buffer);
    }

    fn set_sample_rate(&mut self, sample_rate: f32) {
        self.first.set_sample_rate(sample_rate);
        self.second.set_sample_rate(sample_rate);
    }

    fn reset(&mut self) {
        self.first.reset();
        self.second.reset();
    }
}

impl<A, B> Chain<A, B> {
    /// The module that runs first.
    pub fn first(&self) -> &A {
        &self.first
    }

    /// Mutable access to the module that runs first.
    pub fn first_mut(&mut self) -> &mut A {
        &mut self.first
    }

    /// The module that runs second.
    pub fn second(&self) -> &B {
        &self.second
    }

    /// Mutable access to the module that runs second.
    pub fn second_mut(&mut self) -> &mut B {
        &mut self.second
    }
}
