//! Grading of quiz answers.
//!
//! Answers are compared exactly, with no trimming or case folding.

use crate::types::Deck;

/// Result of checking an answer against the card that was asked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Grade {
    Correct,
    /// Wrong for the asked term, but the definition of another card.
    BelongsTo(String),
    Wrong,
}

impl Grade {
    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Correct)
    }

    /// Message shown to the user; `expected` is the asked card's definition.
    pub fn message(&self, expected: &str) -> String {
        match self {
            Self::Correct => "Correct!".to_string(),
            Self::BelongsTo(other) => format!(
                "Wrong...The right answer is \"{expected}\", but your definition is correct for \"{other}\""
            ),
            Self::Wrong => format!("Wrong...The right answer is \"{expected}\"."),
        }
    }
}

/// Grade `answer` for the card stored under `term`.
///
/// An unknown term grades every answer as [`Grade::Wrong`].
pub fn grade(deck: &Deck, term: &str, answer: &str) -> Grade {
    if deck.get(term).is_some_and(|card| card.definition == answer) {
        return Grade::Correct;
    }

    match deck.term_for_definition(answer) {
        Some(other) => Grade::BelongsTo(other.to_string()),
        None => Grade::Wrong,
    }
}
