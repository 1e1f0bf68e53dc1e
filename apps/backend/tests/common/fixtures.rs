//! Test fixtures and factory functions for creating test data.

use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::json;

/// Sample prose that synthesizes into exactly `num_sentences` cards.
///
/// Every sentence is longer than the ten-character floor and contains
/// `" is "`, so none are filtered out.
pub fn sample_text(num_sentences: usize) -> String {
    (0..num_sentences)
        .map(|i| format!("Fact number {} is worth remembering", i + 1))
        .collect::<Vec<_>>()
        .join(". ")
        + "."
}

/// Create a generate-flashcards request body.
pub fn generate_request(text: &str, topic: &str, num_questions: usize) -> serde_json::Value {
    json!({
        "text": text,
        "topic": topic,
        "num_questions": num_questions
    })
}

/// Generate a unique test topic to avoid collisions between runs.
pub fn unique_topic(prefix: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before epoch")
        .as_nanos();
    format!("{}_{}", prefix, nanos)
}
