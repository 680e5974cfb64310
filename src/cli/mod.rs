//! CLI module
//!
//! Command-line surface for the stemsplit separation pipeline.

pub mod commands;

use clap::Parser;
use std::path::PathBuf;

use crate::separation::SeparationVariant;

/// Stemsplit - split a stereo recording into instrument stems
#[derive(Parser, Debug)]
#[command(name = "stemsplit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Input audio file (44.1kHz stereo WAV)
    pub input: PathBuf,

    /// Stem variant: 2stems, 4stems, or 5stems
    pub variant: SeparationVariant,

    /// Directory holding the separation model assets
    #[arg(long, default_value = "./models/offline")]
    pub models: PathBuf,
}
