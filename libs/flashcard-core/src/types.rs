//! Core types for the flashcard trainer.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A definition plus the number of wrong answers given for it.
///
/// The term is not stored here; it is the key the card lives under in a
/// [`Deck`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub definition: String,
    #[serde(default)]
    pub mistakes: u32,
}

impl Card {
    /// Create a card with no recorded mistakes.
    pub fn new(definition: impl Into<String>) -> Self {
        Self {
            definition: definition.into(),
            mistakes: 0,
        }
    }
}

/// Ordered mapping of term to card.
///
/// Iteration follows insertion order. Replacing an existing term keeps its
/// position. On disk a deck is a single JSON object keyed by term.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    pub(crate) entries: Vec<(String, Card)>,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, term: &str) -> Option<&Card> {
        self.position(term).map(|idx| &self.entries[idx].1)
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.position(term).is_some()
    }

    /// Card at `index` in insertion order.
    pub fn get_index(&self, index: usize) -> Option<(&str, &Card)> {
        self.entries
            .get(index)
            .map(|(term, card)| (term.as_str(), card))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Card)> {
        self.entries.iter().map(|(term, card)| (term.as_str(), card))
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(term, _)| term.as_str())
    }

    /// Insert or replace a card, returning the previous card for the term.
    pub fn insert(&mut self, term: impl Into<String>, card: Card) -> Option<Card> {
        let term = term.into();
        match self.position(&term) {
            Some(idx) => Some(std::mem::replace(&mut self.entries[idx].1, card)),
            None => {
                self.entries.push((term, card));
                None
            }
        }
    }

    pub fn remove(&mut self, term: &str) -> Option<Card> {
        self.position(term).map(|idx| self.entries.remove(idx).1)
    }

    pub(crate) fn get_mut(&mut self, term: &str) -> Option<&mut Card> {
        self.position(term).map(move |idx| &mut self.entries[idx].1)
    }

    fn position(&self, term: &str) -> Option<usize> {
        self.entries.iter().position(|(t, _)| t == term)
    }
}

impl<T: Into<String>> FromIterator<(T, Card)> for Deck {
    fn from_iter<I: IntoIterator<Item = (T, Card)>>(iter: I) -> Self {
        let mut deck = Deck::new();
        for (term, card) in iter {
            deck.insert(term, card);
        }
        deck
    }
}

impl Serialize for Deck {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de> Deserialize<'de> for Deck {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DeckVisitor;

        impl<'de> Visitor<'de> for DeckVisitor {
            type Value = Deck;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping terms to cards")
            }

            fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<Deck, M::Error> {
                let mut deck = Deck::new();
                // Repeated keys: last value wins, first position is kept.
                while let Some((term, card)) = access.next_entry::<String, Card>()? {
                    deck.insert(term, card);
                }
                Ok(deck)
            }
        }

        deserializer.deserialize_map(DeckVisitor)
    }
}

/// Keywords accepted at the action prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Remove,
    Import,
    Export,
    Ask,
    Exit,
    Log,
    HardestCard,
    ResetStats,
}

impl Action {
    pub const ALL: [Action; 9] = [
        Action::Add,
        Action::Remove,
        Action::Import,
        Action::Export,
        Action::Ask,
        Action::Exit,
        Action::Log,
        Action::HardestCard,
        Action::ResetStats,
    ];

    /// Get the keyword as typed by the user.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Remove => "remove",
            Self::Import => "import",
            Self::Export => "export",
            Self::Ask => "ask",
            Self::Exit => "exit",
            Self::Log => "log",
            Self::HardestCard => "hardest card",
            Self::ResetStats => "reset stats",
        }
    }

    /// Parse an exact, case-sensitive keyword.
    pub fn from_keyword(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.as_str() == s)
    }
}
