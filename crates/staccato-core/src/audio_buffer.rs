//! Fixed-size multichannel sample blocks.
//!
//! An [`AudioBuffer`] is the unit of work handed from the driver to
//! [`AudioModule`](crate::AudioModule)s: `CHANNELS` non-interleaved channels
//! of `LEN` samples each, stored inline so that a block never touches the
//! heap.

/// `CHANNELS` channels of `LEN` samples, zeroed on construction.
///
/// `LEN` must be even so a block splits into two DMA half-transfers. This is
/// checked at compile time.
///
/// # Example
///
/// ```rust
/// use staccato_core::AudioBuffer;
///
/// let mut dry: AudioBuffer<f32, 2, 64> = AudioBuffer::new();
/// dry.channel_mut(0).fill(0.5);
///
/// let mut wet = AudioBuffer::new();
/// wet.copy_from(&dry);
/// wet.apply_gain(0.5);
/// wet.add(&dry);
/// assert_eq!(wet.channel(0)[0], 0.75);
/// assert_eq!(wet.channel(1)[0], 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer<T, const CHANNELS: usize, const LEN: usize> {
    channels: [[T; LEN]; CHANNELS],
}

impl<T: crate::Sample, const CHANNELS: usize, const LEN: usize> AudioBuffer<T, CHANNELS, LEN> {
    const EVEN_LEN: () = assert!(LEN % 2 == 0, "AudioBuffer length must be even");

    /// Creates a silent buffer.
    pub fn new() -> Self {
        let () = Self::EVEN_LEN;
        Self {
            channels: [[T::ZERO; LEN]; CHANNELS],
        }
    }

    /// Number of channels.
    #[inline]
    pub const fn num_channels(&self) -> usize {
        CHANNELS
    }

    /// Samples per channel.
    #[inline]
    pub const fn len(&self) -> usize {
        LEN
    }

    /// Returns true if the buffer holds no samples.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        LEN == 0 || CHANNELS == 0
    }

    /// Read access to one channel.
    ///
    /// # Panics
    ///
    /// Panics if `channel >= CHANNELS`.
    #[inline]
    pub fn channel(&self, channel: usize) -> &[T] {
        &self.channels[channel]
    }

    /// Write access to one channel.
    ///
    /// # Panics
    ///
    /// Panics if `channel >= CHANNELS`.
    #[inline]
    pub fn channel_mut(&mut self, channel: usize) -> &mut [T] {
        &mut self.channels[channel]
    }

    /// All channels, in order.
    #[inline]
    pub fn channels(&self) -> &[[T; LEN]; CHANNELS] {
        &self.channels
    }

    /// All channels, mutably.
    #[inline]
    pub fn channels_mut(&mut self) -> &mut [[T; LEN]; CHANNELS] {
        &mut self.channels
    }

    /// Multiplies every sample by `gain`.
    pub fn apply_gain(&mut self, gain: f32) {
        for sample in self.channels.iter_mut().flatten() {
            *sample = sample.scale(gain);
        }
    }

    /// Adds `other` sample by sample (mix/accumulate).
    pub fn add(&mut self, other: &Self) {
        self.zip_with(other, T::accumulate);
    }

    /// Multiplies by `other` sample by sample.
    pub fn multiply(&mut self, other: &Self) {
        self.zip_with(other, T::modulate);
    }

    /// Copies the contents of `other`.
    pub fn copy_from(&mut self, other: &Self) {
        self.channels = other.channels;
    }

    /// Copies a mono buffer into one channel.
    ///
    /// # Panics
    ///
    /// Panics if `channel >= CHANNELS`.
    pub fn copy_to_channel(&mut self, mono: &AudioBuffer<T, 1, LEN>, channel: usize) {
        self.channels[channel] = mono.channels[0];
    }

    /// Fills every channel with silence.
    pub fn clear(&mut self) {
        for channel in &mut self.channels {
            channel.fill(T::ZERO);
        }
    }

    #[inline]
    fn zip_with(&mut self, other: &Self, op: impl Fn(T, T) -> T) {
        for (dst, src) in self.channels.iter_mut().zip(other.channels.iter()) {
            for (d, s) in dst.iter_mut().zip(src.iter()) {
                *d = op(*d, *s);
            }
        }
    }
}

impl<T: crate::Sample, const CHANNELS: usize, const LEN: usize> Default
    for AudioBuffer<T, CHANNELS, LEN>
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp_stereo() -> AudioBuffer<i32, 2, 128> {
        let mut buffer = AudioBuffer::new();
        for i in 0..128 {
            buffer.channel_mut(0)[i] = i as i32;
            buffer.channel_mut(1)[i] = i as i32 * 2;
        }
        buffer
    }

    #[test]
    fn test_dimensions() {
        let mut buffer: AudioBuffer<i32, 4, 128> = AudioBuffer::new();
        assert_eq!(buffer.num_channels(), 4);
        assert_eq!(buffer.len(), 128);
        assert_eq!(buffer.channels().len(), 4);
        let last = buffer.num_channels() - 1;
        buffer.channel_mut(last)[127] = 1;
        assert_eq!(buffer.channel(last)[127], 1);
    }

    #[test]
    fn test_new_is_silent() {
        let buffer: AudioBuffer<f32, 2, 16> = AudioBuffer::new();
        assert!(buffer.channels().iter().flatten().all(|&s| s == 0.0));
    }

    #[test]
    fn test_copy_from() {
        let source = ramp_stereo();
        let mut copy = AudioBuffer::new();
        copy.copy_from(&source);
        assert_eq!(copy, source);
    }

    #[test]
    fn test_copy_to_channel() {
        let source = ramp_stereo();
        let mut mono: AudioBuffer<i32, 1, 128> = AudioBuffer::new();
        mono.channel_mut(0).copy_from_slice(source.channel(1));

        let mut target: AudioBuffer<i32, 2, 128> = AudioBuffer::new();
        target.copy_to_channel(&mono, 0);
        target.copy_to_channel(&mono, 1);
        assert_eq!(target.channel(0), source.channel(1));
        assert_eq!(target.channel(1), source.channel(1));
    }

    #[test]
    fn test_add_onto_silence() {
        let source = ramp_stereo();
        let mut sum = AudioBuffer::new();
        sum.add(&source);
        assert_eq!(sum, source);
    }

    #[test]
    fn test_multiply_by_silence() {
        let mut source = ramp_stereo();
        let silence = AudioBuffer::new();
        source.multiply(&silence);
        assert_eq!(source, silence);
    }

    #[test]
    fn test_gain_cancels() {
        let source = ramp_stereo();
        let mut inverted = source.clone();
        inverted.apply_gain(-1.0);
        inverted.add(&source);

        let mut cleared = source;
        cleared.clear();
        assert_eq!(inverted, cleared);
    }

    #[test]
    fn test_float_gain() {
        let mut buffer: AudioBuffer<f32, 1, 4> = AudioBuffer::new();
        buffer.channel_mut(0).copy_from_slice(&[1.0, -1.0, 0.5, 0.0]);
        buffer.apply_gain(0.5);
        assert_eq!(buffer.channel(0), &[0.5, -0.5, 0.25, 0.0]);
    }

    #[test]
    fn test_integer_mix_saturates() {
        let mut a: AudioBuffer<i16, 1, 2> = AudioBuffer::new();
        a.channel_mut(0).copy_from_slice(&[i16::MAX, -5]);
        let b = a.clone();
        a.add(&b);
        assert_eq!(a.channel(0), &[i16::MAX, -10]);
    }
}
