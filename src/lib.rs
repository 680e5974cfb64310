//! Stemsplit - Audio Source Separation Pipeline
//!
//! Stemsplit splits a stereo recording into a fixed set of independent
//! stems (vocals, drums, bass, ...) according to a requested separation
//! variant, then persists each stem as a WAV file.
//!
//! # Architecture
//!
//! The pipeline is straight-line and synchronous:
//! 1. Format gate - the input must be 44.1kHz stereo
//! 2. Layout conversion - interleaved file samples become planar buffers
//! 3. Separation - an external engine splits the waveform per variant
//! 4. Fan-out - each stem is converted back and written to disk
//!
//! The neural inference itself lives behind the [`SeparationEngine`]
//! trait; this crate owns everything around it.
//!
//! [`SeparationEngine`]: separation::SeparationEngine

pub mod audio;
pub mod cli;
pub mod error;
pub mod separation;

pub use error::{Result, SplitError};
