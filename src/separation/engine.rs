//! Separation engine boundary
//!
//! The neural inference backend lives behind this trait. The pipeline
//! depends on exactly this contract and nothing else about the engine's
//! internals, which is also what makes the whole pipeline testable with
//! the doubles in [`crate::separation::mock`].

use std::path::Path;

use crate::audio::WaveformBuffer;
use crate::error::Result;
use crate::separation::variant::SeparationVariant;

/// An audio source separation backend.
pub trait SeparationEngine: Send + Sync {
    /// One-time setup: load model assets for the requested variants.
    ///
    /// Must be called before [`SeparationEngine::split`] and before any
    /// input file is read, so asset problems abort the run first.
    ///
    /// # Errors
    /// `ModelInitialization` if assets are missing or corrupt.
    fn initialize(&mut self, asset_dir: &Path, variants: &[SeparationVariant]) -> Result<()>;

    /// Split a planar waveform into this variant's stems.
    ///
    /// The returned buffers must appear in the variant's catalog order,
    /// one per stem, each with the input's channel count and frame count.
    /// The pipeline verifies this and treats any mismatch as a fatal
    /// contract violation.
    ///
    /// # Errors
    /// `Separation` on inference-time failure. No partial stem output is
    /// ever produced.
    fn split(
        &self,
        input: &WaveformBuffer,
        variant: SeparationVariant,
    ) -> Result<Vec<WaveformBuffer>>;
}
