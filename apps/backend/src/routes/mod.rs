//! HTTP route handlers.

pub mod flashcards;
pub mod sessions;
