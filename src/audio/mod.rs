//! Audio data model and file I/O
//!
//! Covers everything between the codec layer and the separation engine:
//! - Planar buffer type
//! - Interleaved <-> planar layout conversion
//! - Input format contract
//! - WAV import and per-stem export

pub mod buffer;
pub mod codec;
pub mod format;
pub mod io;

pub use buffer::WaveformBuffer;
pub use format::{AudioFileSpec, REQUIRED_CHANNELS, REQUIRED_SAMPLE_RATE};
pub use io::{import_interleaved, StemWriter};
