//! Whole-file JSON persistence for decks.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::Result;
use crate::types::Deck;

/// Read a deck file.
///
/// Returns `Ok(None)` when the file does not exist. Any other read failure
/// or malformed JSON is an error.
pub fn load_deck(path: &Path) -> Result<Option<Deck>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };

    let deck = serde_json::from_str(&content)?;
    Ok(Some(deck))
}

/// Write the whole deck to `path`, replacing any existing file.
pub fn save_deck(path: &Path, deck: &Deck) -> Result<()> {
    let json = serde_json::to_string(deck)?;
    fs::write(path, json)?;
    Ok(())
}
