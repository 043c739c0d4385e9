//! Core library for the terminal flashcard trainer.
//!
//! Provides:
//! - Ordered deck of term/definition cards with mistake counters
//! - Answer grading and the hardest-card report
//! - Whole-file JSON import/export
//! - Transcript of everything shown and typed
//! - The interactive session driving all of the above

pub mod deck;
pub mod error;
pub mod matching;
pub mod session;
pub mod storage;
pub mod transcript;
pub mod types;

pub use deck::HardestReport;
pub use error::{FlashcardError, Rejection, Result};
pub use matching::{grade, Grade};
pub use session::{Session, SessionOptions, ACTION_PROMPT};
pub use storage::{load_deck, save_deck};
pub use transcript::{Entry, Transcript};
pub use types::{Action, Card, Deck};
