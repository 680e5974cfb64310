//! CLI command implementation
//!
//! Drives one full separation run. Stage order matters: the engine is
//! initialized before the input file is read, and the output directory is
//! only created once separation has succeeded, so a failed run leaves
//! nothing on disk.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;

use crate::audio::{import_interleaved, StemWriter};
use crate::cli::Cli;
use crate::separation::{MockSeparator, SeparationEngine, SeparationPipeline};

/// Run the separation pipeline for one input file.
pub fn separate_file(args: &Cli) -> Result<()> {
    let mut engine = MockSeparator::new();
    engine
        .initialize(&args.models, &[args.variant])
        .context("initializing separation engine")?;

    let (spec, interleaved) = import_interleaved(&args.input)
        .with_context(|| format!("reading input file {}", args.input.display()))?;

    info!(
        "separating {} ({} frames) into {}",
        args.input.display(),
        spec.frames,
        args.variant
    );

    let pipeline = SeparationPipeline::new(&engine);
    let result = pipeline
        .separate(&spec, &interleaved, args.variant)
        .context("separating stems")?;

    let out_dir = output_dir(&args.input);
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    let writer = StemWriter::new(&out_dir, spec.sample_rate);
    for stem in result.iter() {
        writer
            .write(stem.name, &stem.buffer)
            .with_context(|| format!("writing stem '{}'", stem.name))?;
    }

    println!("Separation complete. Output saved to: {}", out_dir.display());

    Ok(())
}

/// Per-run output directory: `<input-basename>_stems`, next to the input.
fn output_dir(input: &Path) -> PathBuf {
    let base = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");

    match input.parent() {
        Some(parent) if parent.as_os_str().is_empty() => PathBuf::from(format!("{}_stems", base)),
        Some(parent) => parent.join(format!("{}_stems", base)),
        None => PathBuf::from(format!("{}_stems", base)),
    }
}
