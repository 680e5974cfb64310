//! Source separation
//!
//! This module provides:
//! - `SeparationVariant` catalog mapping variants to ordered stem names
//! - `SeparationEngine` trait, the boundary to the inference backend
//! - `SeparationPipeline`, the orchestration driver
//! - Mock engines for testing and for running without a real backend

pub mod engine;
pub mod mock;
pub mod pipeline;
pub mod variant;

pub use engine::SeparationEngine;
pub use mock::{CountingSeparator, EchoSeparator, MockSeparator};
pub use pipeline::{SeparationPipeline, SeparationResult, Stem};
pub use variant::SeparationVariant;
