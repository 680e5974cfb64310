//! Mock separation engines
//!
//! None of these run real inference; they simulate the engine contract so
//! the pipeline can be exercised end to end. `MockSeparator` is also what
//! the CLI wires in until a real backend is linked, in which case that
//! backend implements [`SeparationEngine`] and swaps in at the one
//! construction site.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use log::info;

use crate::audio::WaveformBuffer;
use crate::error::{Result, SplitError};
use crate::separation::engine::SeparationEngine;
use crate::separation::variant::SeparationVariant;

/// Mock backend producing per-stem gain-scaled copies of the input.
///
/// Stem `i` is the input scaled by `1 / (i + 1)`, so every output file is
/// distinct and verifiable while frame counts are preserved. Holds no
/// real model assets but honors the initialize-before-split contract.
#[derive(Debug, Default)]
pub struct MockSeparator {
    variants: Vec<SeparationVariant>,
}

impl MockSeparator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SeparationEngine for MockSeparator {
    fn initialize(&mut self, asset_dir: &Path, variants: &[SeparationVariant]) -> Result<()> {
        if variants.is_empty() {
            return Err(SplitError::ModelInitialization {
                reason: "no separation variants requested".to_string(),
            });
        }

        self.variants = variants.to_vec();

        info!(
            "mock separator initialized from {} for {} variant(s)",
            asset_dir.display(),
            variants.len()
        );

        Ok(())
    }

    fn split(
        &self,
        input: &WaveformBuffer,
        variant: SeparationVariant,
    ) -> Result<Vec<WaveformBuffer>> {
        if !self.variants.contains(&variant) {
            return Err(SplitError::Separation {
                reason: format!("variant '{}' was not initialized", variant),
            });
        }

        let stems = (0..variant.stem_count())
            .map(|i| {
                let gain = 1.0 / (i + 1) as f32;
                let channels = input
                    .iter_channels()
                    .map(|ch| ch.iter().map(|&s| s * gain).collect())
                    .collect();
                WaveformBuffer::from_planar(channels)
            })
            .collect();

        Ok(stems)
    }
}

/// Mock backend echoing the input once per stem, unchanged.
#[derive(Debug, Default)]
pub struct EchoSeparator;

impl EchoSeparator {
    pub fn new() -> Self {
        Self
    }
}

impl SeparationEngine for EchoSeparator {
    fn initialize(&mut self, _asset_dir: &Path, _variants: &[SeparationVariant]) -> Result<()> {
        Ok(())
    }

    fn split(
        &self,
        input: &WaveformBuffer,
        variant: SeparationVariant,
    ) -> Result<Vec<WaveformBuffer>> {
        Ok(vec![input.clone(); variant.stem_count()])
    }
}

/// Wrapper counting `split` invocations on an inner engine.
///
/// Lets tests assert that the pipeline never reached the engine, e.g.
/// when the format gate rejects the input first.
pub struct CountingSeparator<E> {
    inner: E,
    split_calls: AtomicUsize,
}

impl<E> CountingSeparator<E> {
    pub fn new(inner: E) -> Self {
        Self {
            inner,
            split_calls: AtomicUsize::new(0),
        }
    }

    /// Number of times `split` has been invoked.
    pub fn split_calls(&self) -> usize {
        self.split_calls.load(Ordering::SeqCst)
    }
}

impl<E: SeparationEngine> SeparationEngine for CountingSeparator<E> {
    fn initialize(&mut self, asset_dir: &Path, variants: &[SeparationVariant]) -> Result<()> {
        self.inner.initialize(asset_dir, variants)
    }

    fn split(
        &self,
        input: &WaveformBuffer,
        variant: SeparationVariant,
    ) -> Result<Vec<WaveformBuffer>> {
        self.split_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.split(input, variant)
    }
}
