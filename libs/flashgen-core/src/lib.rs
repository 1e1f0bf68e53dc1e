//! Core flashcard-generation library shared by the backend service.
//!
//! Provides:
//! - Naive question synthesizer (sentence splitting + substitution rules)
//! - Shared types (GeneratedCard)

pub mod synth;
pub mod types;

pub use synth::synthesize;
pub use types::GeneratedCard;
