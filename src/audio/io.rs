//! Audio file I/O
//!
//! WAV import and per-stem export. Import decodes any common PCM depth to
//! 32-bit float; export always writes 32-bit float PCM so stems survive a
//! round trip bit-exactly.

use std::path::{Path, PathBuf};

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use log::debug;

use crate::audio::buffer::WaveformBuffer;
use crate::audio::format::AudioFileSpec;
use crate::error::{Result, SplitError};

/// Read a WAV file into interleaved 32-bit float samples.
///
/// Returns the header-derived [`AudioFileSpec`] alongside the samples in
/// file-native interleaved order. No format gating happens here; the
/// caller decides whether the spec is acceptable.
///
/// # Errors
/// * `FileNotFound` - the path does not exist
/// * `InvalidAudio` - the file is not decodable WAV data
pub fn import_interleaved(path: &Path) -> Result<(AudioFileSpec, Vec<f32>)> {
    if !path.exists() {
        return Err(SplitError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let reader = WavReader::open(path).map_err(|e| SplitError::InvalidAudio {
        reason: format!("failed to open WAV file: {}", e),
        source: Some(Box::new(e)),
    })?;

    let spec = reader.spec();
    let channels = spec.channels;
    let sample_rate = spec.sample_rate;
    let bits_per_sample = spec.bits_per_sample;
    let sample_format = spec.sample_format;

    let samples = read_samples_as_f32(reader, bits_per_sample, sample_format)?;
    let frames = if channels == 0 {
        0
    } else {
        samples.len() as u64 / channels as u64
    };

    debug!(
        "imported {}: {} channels, {}Hz, {} frames",
        path.display(),
        channels,
        sample_rate,
        frames
    );

    Ok((AudioFileSpec::new(sample_rate, channels, frames), samples))
}

/// Read samples from a WAV reader and normalize to f32
fn read_samples_as_f32<R: std::io::Read>(
    mut reader: WavReader<R>,
    bits_per_sample: u16,
    sample_format: SampleFormat,
) -> Result<Vec<f32>> {
    let collect_err = |e: hound::Error| SplitError::InvalidAudio {
        reason: format!("failed to read {}-bit samples: {}", bits_per_sample, e),
        source: Some(Box::new(e)),
    };

    match sample_format {
        SampleFormat::Float => reader
            .samples::<f32>()
            .collect::<std::result::Result<Vec<f32>, _>>()
            .map_err(collect_err),
        SampleFormat::Int => match bits_per_sample {
            16 => reader
                .samples::<i16>()
                .map(|s| s.map(|v| v as f32 / 32768.0))
                .collect::<std::result::Result<Vec<f32>, _>>()
                .map_err(collect_err),
            24 => {
                // 24-bit stored as i32 in hound
                reader
                    .samples::<i32>()
                    .map(|s| s.map(|v| v as f32 / 8_388_608.0))
                    .collect::<std::result::Result<Vec<f32>, _>>()
                    .map_err(collect_err)
            }
            32 => reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / 2_147_483_648.0))
                .collect::<std::result::Result<Vec<f32>, _>>()
                .map_err(collect_err),
            _ => Err(SplitError::InvalidAudio {
                reason: format!("{}-bit integer audio is not supported", bits_per_sample),
                source: None,
            }),
        },
    }
}

/// Per-stem WAV persistence.
///
/// Writes each stem as 32-bit float PCM into a fixed output directory at
/// the source sample rate. One writer serves a whole run; each `write`
/// call is independent and the caller aborts on the first failure.
#[derive(Debug)]
pub struct StemWriter {
    out_dir: PathBuf,
    sample_rate: u32,
}

impl StemWriter {
    pub fn new(out_dir: impl Into<PathBuf>, sample_rate: u32) -> Self {
        Self {
            out_dir: out_dir.into(),
            sample_rate,
        }
    }

    /// Destination path for a named stem.
    pub fn stem_path(&self, stem_name: &str) -> PathBuf {
        self.out_dir.join(format!("{}.wav", stem_name))
    }

    /// Persist one stem buffer as `<out_dir>/<stem_name>.wav`.
    ///
    /// The buffer is converted back to interleaved order and written as
    /// 32-bit float with the buffer's channel count.
    ///
    /// # Errors
    /// `Io` if the file cannot be created or written.
    pub fn write(&self, stem_name: &str, buffer: &WaveformBuffer) -> Result<PathBuf> {
        let path = self.stem_path(stem_name);

        let spec = WavSpec {
            channels: buffer.channels() as u16,
            sample_rate: self.sample_rate,
            bits_per_sample: 32,
            sample_format: SampleFormat::Float,
        };

        let mut writer = WavWriter::create(&path, spec).map_err(wav_io_error)?;

        for sample in buffer.to_interleaved() {
            writer.write_sample(sample).map_err(wav_io_error)?;
        }

        writer.finalize().map_err(wav_io_error)?;

        debug!("wrote stem '{}' to {}", stem_name, path.display());

        Ok(path)
    }
}

fn wav_io_error(e: hound::Error) -> SplitError {
    match e {
        hound::Error::IoError(io) => SplitError::Io(io),
        other => SplitError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            other.to_string(),
        )),
    }
}
