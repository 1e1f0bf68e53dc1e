//! Core types for flashcard generation.

use serde::{Deserialize, Serialize};

/// A question/answer pair derived from one sentence of input text.
///
/// The answer is always the sentence it was derived from, unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedCard {
    pub question: String,
    pub answer: String,
}
