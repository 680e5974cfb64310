//! Interleaved <-> planar sample layout conversion
//!
//! WAV files store frames in interleaved order (`[L0, R0, L1, R1, ...]`)
//! while the separation engine works on planar buffers (one contiguous
//! run per channel). Both directions are pure transforms with no I/O.
//!
//! Index mapping for `C` channels: `planar[c][f] == interleaved[f * C + c]`.

use crate::error::{Result, SplitError};

/// Split interleaved samples into per-channel planar sequences.
///
/// # Arguments
/// * `samples` - Interleaved sample data, length must be a multiple of `channels`
/// * `channels` - Channel count (>= 1)
///
/// # Errors
/// `InvalidAudio` if `channels` is zero or the sample count does not divide
/// evenly into frames.
pub fn deinterleave(samples: &[f32], channels: usize) -> Result<Vec<Vec<f32>>> {
    if channels == 0 {
        return Err(SplitError::InvalidAudio {
            reason: "channel count must be at least 1".to_string(),
            source: None,
        });
    }

    if samples.len() % channels != 0 {
        return Err(SplitError::InvalidAudio {
            reason: format!(
                "interleaved data length {} is not divisible by channel count {}",
                samples.len(),
                channels
            ),
            source: None,
        });
    }

    let frames = samples.len() / channels;
    let mut planar = vec![Vec::with_capacity(frames); channels];

    for frame in samples.chunks_exact(channels) {
        for (ch, &sample) in frame.iter().enumerate() {
            planar[ch].push(sample);
        }
    }

    Ok(planar)
}

/// Merge per-channel planar sequences back into interleaved order.
///
/// The exact inverse of [`deinterleave`]. All channels must have the same
/// length; this is an invariant of every buffer in the pipeline, so a
/// mismatch here is a programming error and panics in debug builds.
pub fn interleave(channels: &[Vec<f32>]) -> Vec<f32> {
    if channels.is_empty() {
        return Vec::new();
    }

    let frames = channels[0].len();
    debug_assert!(
        channels.iter().all(|ch| ch.len() == frames),
        "all channels must have equal length"
    );

    let mut interleaved = Vec::with_capacity(frames * channels.len());

    for frame in 0..frames {
        for channel in channels {
            interleaved.push(channel[frame]);
        }
    }

    interleaved
}
