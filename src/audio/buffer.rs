//! Audio buffer management
//!
//! Provides the planar multi-channel buffer type the separation engine
//! operates on. All processing uses 32-bit float samples; the pipeline
//! performs no clamping of its own.

use crate::audio::codec;
use crate::error::Result;

/// Planar multi-channel audio buffer.
///
/// Stores one contiguous `Vec<f32>` per channel. Every channel holds the
/// same number of frames; constructors uphold this invariant and the
/// separation pipeline verifies it for engine-produced buffers.
///
/// # Example
/// ```
/// use stemsplit::audio::WaveformBuffer;
///
/// let buffer = WaveformBuffer::silent(2, 44100);
/// assert_eq!(buffer.channels(), 2);
/// assert_eq!(buffer.frames(), 44100);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WaveformBuffer {
    /// Sample data: outer Vec is channels, inner Vec is frames
    samples: Vec<Vec<f32>>,
}

impl WaveformBuffer {
    /// Create a buffer of silence with the given shape.
    pub fn silent(channels: usize, frames: usize) -> Self {
        Self {
            samples: vec![vec![0.0_f32; frames]; channels],
        }
    }

    /// Take ownership of pre-built planar channel data.
    ///
    /// # Panics
    /// Panics in debug builds if channels have unequal lengths.
    pub fn from_planar(samples: Vec<Vec<f32>>) -> Self {
        debug_assert!(
            samples.windows(2).all(|w| w[0].len() == w[1].len()),
            "all channels must have equal length"
        );
        Self { samples }
    }

    /// Decode interleaved sample data into a planar buffer.
    ///
    /// Channel 0 takes samples at interleaved indices `0, C, 2C, ...`,
    /// channel 1 at `1, C+1, 2C+1, ...`, preserving frame order.
    ///
    /// # Errors
    /// `InvalidAudio` if the data length is not a multiple of `channels`.
    pub fn from_interleaved(interleaved: &[f32], channels: usize) -> Result<Self> {
        Ok(Self {
            samples: codec::deinterleave(interleaved, channels)?,
        })
    }

    /// Encode the buffer back to interleaved order.
    ///
    /// The exact inverse of [`WaveformBuffer::from_interleaved`]: the
    /// result has length `channels * frames` in file-native frame order.
    pub fn to_interleaved(&self) -> Vec<f32> {
        codec::interleave(&self.samples)
    }

    /// Number of channels
    #[inline]
    pub fn channels(&self) -> usize {
        self.samples.len()
    }

    /// Number of frames (samples per channel)
    #[inline]
    pub fn frames(&self) -> usize {
        self.samples.first().map(|ch| ch.len()).unwrap_or(0)
    }

    /// Check if the buffer holds no frames
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames() == 0
    }

    /// Immutable access to one channel's samples.
    ///
    /// # Panics
    /// Panics if the channel index is out of bounds.
    #[inline]
    pub fn channel(&self, index: usize) -> &[f32] {
        &self.samples[index]
    }

    /// Mutable access to one channel's samples.
    ///
    /// # Panics
    /// Panics if the channel index is out of bounds.
    #[inline]
    pub fn channel_mut(&mut self, index: usize) -> &mut [f32] {
        &mut self.samples[index]
    }

    /// Iterate over channels as sample slices.
    pub fn iter_channels(&self) -> impl Iterator<Item = &[f32]> {
        self.samples.iter().map(|ch| ch.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_buffer() {
        let buffer = WaveformBuffer::silent(2, 1000);
        assert_eq!(buffer.channels(), 2);
        assert_eq!(buffer.frames(), 1000);
        assert!(buffer.channel(0).iter().all(|&s| s == 0.0));
        assert!(buffer.channel(1).iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_from_interleaved_stereo() {
        let interleaved = vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6];
        let buffer = WaveformBuffer::from_interleaved(&interleaved, 2).unwrap();

        assert_eq!(buffer.channels(), 2);
        assert_eq!(buffer.frames(), 3);
        assert_eq!(buffer.channel(0), &[0.1, 0.3, 0.5]); // Left
        assert_eq!(buffer.channel(1), &[0.2, 0.4, 0.6]); // Right
    }

    #[test]
    fn test_from_interleaved_rejects_ragged() {
        let interleaved = vec![0.1, 0.2, 0.3];
        assert!(WaveformBuffer::from_interleaved(&interleaved, 2).is_err());
    }

    #[test]
    fn test_interleaved_roundtrip() {
        let original = vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8];
        let buffer = WaveformBuffer::from_interleaved(&original, 2).unwrap();
        assert_eq!(buffer.to_interleaved(), original);
    }

    #[test]
    fn test_from_planar() {
        let buffer = WaveformBuffer::from_planar(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        assert_eq!(buffer.channels(), 2);
        assert_eq!(buffer.frames(), 2);
        assert_eq!(buffer.to_interleaved(), vec![1.0, 3.0, 2.0, 4.0]);
    }

    #[test]
    fn test_channel_mut() {
        let mut buffer = WaveformBuffer::silent(2, 100);
        buffer.channel_mut(1)[50] = 0.75;
        assert_eq!(buffer.channel(1)[50], 0.75);
        assert_eq!(buffer.channel(0)[50], 0.0);
    }

    #[test]
    fn test_empty_buffer() {
        let buffer = WaveformBuffer::silent(2, 0);
        assert!(buffer.is_empty());
        assert!(buffer.to_interleaved().is_empty());
    }
}
