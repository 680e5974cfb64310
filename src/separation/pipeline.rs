//! Separation orchestration
//!
//! Drives one separation run: gate the input format, convert the
//! interleaved samples to a planar buffer, invoke the engine, verify the
//! returned shape against the catalog, and pair buffers with stem names.
//! All-or-nothing: the first error aborts the run and no partial result
//! escapes. Writing stems to disk is the caller's job.

use log::{debug, info};

use crate::audio::{AudioFileSpec, WaveformBuffer};
use crate::error::{Result, SplitError};
use crate::separation::engine::SeparationEngine;
use crate::separation::variant::SeparationVariant;

/// One named stem produced by a separation run.
#[derive(Debug, Clone, PartialEq)]
pub struct Stem {
    /// Catalog-assigned stem name (also the output file base name)
    pub name: &'static str,
    /// Planar waveform with the input's channel and frame counts
    pub buffer: WaveformBuffer,
}

/// Ordered stems of a completed separation run.
///
/// Length always equals the variant's stem count; each entry is consumed
/// exactly once by the stem writer.
#[derive(Debug, Clone, PartialEq)]
pub struct SeparationResult {
    pub variant: SeparationVariant,
    pub stems: Vec<Stem>,
}

impl SeparationResult {
    pub fn iter(&self) -> impl Iterator<Item = &Stem> {
        self.stems.iter()
    }
}

/// Top-level separation driver.
///
/// Borrows the engine for the duration of a run; owns no state of its
/// own and performs no filesystem writes.
pub struct SeparationPipeline<'e> {
    engine: &'e dyn SeparationEngine,
}

impl<'e> SeparationPipeline<'e> {
    pub fn new(engine: &'e dyn SeparationEngine) -> Self {
        Self { engine }
    }

    /// Separate one recording into stems.
    ///
    /// # Arguments
    /// * `spec` - Header-derived shape of the input file
    /// * `interleaved` - File-native interleaved samples
    /// * `variant` - Which stem set to produce
    ///
    /// # Errors
    /// * `UnsupportedFormat` - input is not 44.1kHz stereo
    /// * `InvalidAudio` - sample data does not match the spec's shape
    /// * `ModelInitialization` / `Separation` - propagated from the engine
    /// * `EngineContract` - engine returned the wrong stem count or shape
    pub fn separate(
        &self,
        spec: &AudioFileSpec,
        interleaved: &[f32],
        variant: SeparationVariant,
    ) -> Result<SeparationResult> {
        spec.validate()?;

        let waveform = WaveformBuffer::from_interleaved(interleaved, spec.channels as usize)?;
        debug!(
            "decoded {} frames across {} channels",
            waveform.frames(),
            waveform.channels()
        );

        let buffers = self.engine.split(&waveform, variant)?;
        verify_engine_contract(variant, &waveform, &buffers)?;

        info!(
            "separated {} frames into {} stems ({})",
            waveform.frames(),
            buffers.len(),
            variant
        );

        let stems = variant
            .stem_names()
            .iter()
            .zip(buffers)
            .map(|(&name, buffer)| Stem { name, buffer })
            .collect();

        Ok(SeparationResult { variant, stems })
    }
}

/// Check the engine's output against the catalog and the input shape.
///
/// A mismatch means engine/catalog version skew and is always fatal,
/// never silently truncated or padded.
fn verify_engine_contract(
    variant: SeparationVariant,
    input: &WaveformBuffer,
    buffers: &[WaveformBuffer],
) -> Result<()> {
    let expected = variant.stem_count();
    if buffers.len() != expected {
        return Err(SplitError::EngineContract {
            variant: variant.to_string(),
            detail: format!("expected {} stems, engine returned {}", expected, buffers.len()),
        });
    }

    for (i, buffer) in buffers.iter().enumerate() {
        if buffer.frames() != input.frames() {
            return Err(SplitError::EngineContract {
                variant: variant.to_string(),
                detail: format!(
                    "stem {} has {} frames, input has {}",
                    variant.stem_names()[i],
                    buffer.frames(),
                    input.frames()
                ),
            });
        }
        if buffer.channels() != input.channels() {
            return Err(SplitError::EngineContract {
                variant: variant.to_string(),
                detail: format!(
                    "stem {} has {} channels, input has {}",
                    variant.stem_names()[i],
                    buffer.channels(),
                    input.channels()
                ),
            });
        }
    }

    Ok(())
}
