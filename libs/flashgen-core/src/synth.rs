//! Naive question synthesizer.
//!
//! Turns a block of prose into question/answer pairs by splitting on `.`
//! and applying a fixed sequence of string substitutions:
//!
//! ```text
//! "The sky is blue"   -> Q: "The sky is what? blue"
//! "Cats are mammals"  -> Q: "Cats are what? mammals"
//! "Water boils fast"  -> Q: "What is Water?"
//! ```
//!
//! The answer is always the original trimmed sentence.

use crate::types::GeneratedCard;

/// Sentences at or below this many characters never produce a card.
const MIN_SENTENCE_LEN: usize = 10;

/// Synthesize at most `max_count` cards from `text`.
///
/// Sentences are taken in original order, capped at `max_count` before the
/// length filter runs, so short sentences count against the cap. Pure and
/// deterministic; empty input yields an empty vec.
pub fn synthesize(text: &str, max_count: usize) -> Vec<GeneratedCard> {
    text.split('.')
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .take(max_count)
        .filter(|sentence| sentence.chars().count() > MIN_SENTENCE_LEN)
        .map(|sentence| GeneratedCard {
            question: derive_question(sentence),
            answer: sentence.to_string(),
        })
        .collect()
}

/// Derive a question from a trimmed sentence.
///
/// Priority: `" is "` substitution, then `" are "`, then a "What is X?"
/// fallback on the first whitespace-delimited token. Only the first
/// occurrence is substituted.
fn derive_question(sentence: &str) -> String {
    if sentence.contains(" is ") {
        sentence.replacen(" is ", " is what? ", 1)
    } else if sentence.contains(" are ") {
        sentence.replacen(" are ", " are what? ", 1)
    } else {
        let subject = sentence.split_whitespace().next().unwrap_or(sentence);
        format!("What is {}?", subject)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn substitutes_is_and_are_and_drops_short_sentences() {
        let cards = synthesize("The sky is blue. Cats are mammals. Hi.", 5);
        assert_eq!(
            cards,
            vec![
                GeneratedCard {
                    question: "The sky is what? blue".to_string(),
                    answer: "The sky is blue".to_string(),
                },
                GeneratedCard {
                    question: "Cats are what? mammals".to_string(),
                    answer: "Cats are mammals".to_string(),
                },
            ]
        );
    }

    #[test]
    fn falls_back_to_first_token_question() {
        let cards = synthesize("Water boils at high temperature.", 5);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].question, "What is Water?");
        assert_eq!(cards[0].answer, "Water boils at high temperature");
    }

    #[test]
    fn substitutes_only_the_first_occurrence() {
        let cards = synthesize("A tree is a plant that is tall.", 1);
        assert_eq!(cards[0].question, "A tree is what? a plant that is tall");
    }

    #[test]
    fn is_rule_takes_priority_over_are() {
        let cards = synthesize("Cats are mammals, that is true.", 1);
        assert_eq!(cards[0].question, "Cats are mammals, that is what? true");
    }

    #[test]
    fn caps_before_filtering_short_sentences() {
        // The short first sentence consumes the only slot, so nothing
        // survives even though a long sentence follows.
        let cards = synthesize("Short one. This sentence is long enough.", 1);
        assert!(cards.is_empty());
    }

    #[test]
    fn never_exceeds_max_count() {
        let text = "The sky is blue. Cats are mammals. Water boils at high temperature. \
                    Rust is a systems language. Paris is the capital of France.";
        let cards = synthesize(text, 2);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].answer, "The sky is blue");
        assert_eq!(cards[1].answer, "Cats are mammals");
    }

    #[test]
    fn length_boundary_is_exclusive_at_ten() {
        // 10 characters exactly is dropped, 11 is kept.
        let cards = synthesize("abcd efghi. abcd efghij.", 5);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].answer, "abcd efghij");
        assert_eq!(cards[0].question, "What is abcd?");
    }

    #[test]
    fn empty_input_yields_no_cards() {
        assert!(synthesize("", 5).is_empty());
        assert!(synthesize("....", 5).is_empty());
        assert!(synthesize("   ", 5).is_empty());
    }

    #[test]
    fn zero_max_count_yields_no_cards() {
        assert!(synthesize("The sky is blue.", 0).is_empty());
    }

    #[test]
    fn identical_input_yields_identical_output() {
        let text = "The sky is blue. Cats are mammals.";
        assert_eq!(synthesize(text, 5), synthesize(text, 5));
    }
}
