//! Deck operations: validation of new cards, merging, statistics.

use std::fmt;

use crate::error::Rejection;
use crate::types::Deck;

impl Deck {
    /// Check that `term` is not already in the deck.
    pub fn check_term(&self, term: &str) -> Result<(), Rejection> {
        if self.contains_term(term) {
            return Err(Rejection::DuplicateTerm(term.to_string()));
        }
        Ok(())
    }

    /// Check that no card already uses `definition`.
    pub fn check_definition(&self, definition: &str) -> Result<(), Rejection> {
        if self.term_for_definition(definition).is_some() {
            return Err(Rejection::DuplicateDefinition(definition.to_string()));
        }
        Ok(())
    }

    /// First term (in deck order) whose card has exactly this definition.
    pub fn term_for_definition(&self, definition: &str) -> Option<&str> {
        self.iter()
            .find(|(_, card)| card.definition == definition)
            .map(|(term, _)| term)
    }

    /// Merge `other` into this deck. Cards from `other` replace cards with
    /// the same term; everything else is kept.
    pub fn merge(&mut self, other: Deck) {
        for (term, card) in other.entries {
            self.insert(term, card);
        }
    }

    /// Count a wrong answer for `term`. Returns false if the term is unknown.
    pub fn record_mistake(&mut self, term: &str) -> bool {
        match self.get_mut(term) {
            Some(card) => {
                card.mistakes += 1;
                true
            }
            None => false,
        }
    }

    pub fn reset_stats(&mut self) {
        for (_, card) in &mut self.entries {
            card.mistakes = 0;
        }
    }

    /// Find the card(s) with the highest mistake count.
    pub fn hardest(&self) -> HardestReport {
        let mut max_mistakes = 0;
        let mut terms: Vec<String> = Vec::new();

        for (term, card) in self.iter() {
            if card.mistakes > max_mistakes {
                max_mistakes = card.mistakes;
                terms.clear();
                terms.push(term.to_string());
            } else if card.mistakes == max_mistakes && max_mistakes > 0 {
                terms.push(term.to_string());
            }
        }

        match terms.len() {
            0 => HardestReport::NoErrors,
            1 => HardestReport::Single {
                term: terms.remove(0),
                mistakes: max_mistakes,
            },
            _ => HardestReport::Tied {
                terms,
                mistakes: max_mistakes,
            },
        }
    }
}

/// Outcome of [`Deck::hardest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HardestReport {
    NoErrors,
    Single { term: String, mistakes: u32 },
    Tied { terms: Vec<String>, mistakes: u32 },
}

impl fmt::Display for HardestReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoErrors => write!(f, "There are no cards with errors."),
            Self::Single { term, mistakes } => write!(
                f,
                "The hardest card is \"{term}\". You have {mistakes} errors answering it."
            ),
            Self::Tied { terms, mistakes } => {
                let quoted: Vec<String> = terms.iter().map(|t| format!("\"{t}\"")).collect();
                write!(
                    f,
                    "The hardest cards are {}. You have {mistakes} errors answering them.",
                    quoted.join(", ")
                )
            }
        }
    }
}
