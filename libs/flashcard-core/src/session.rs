//! Interactive session: the action prompt and one handler per action.
//!
//! Input and output are injected so a session can run over stdin/stdout or
//! over in-memory buffers. Every line written and every line read is also
//! recorded in the session's [`Transcript`].

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{FlashcardError, Result};
use crate::matching::grade;
use crate::storage::{load_deck, save_deck};
use crate::transcript::Transcript;
use crate::types::{Action, Card, Deck};

pub const ACTION_PROMPT: &str =
    "Input the action (add, remove, import, export, ask, exit, log, hardest card, reset stats):";

/// Startup options, usually taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Deck file imported before the first prompt.
    pub import_from: Option<PathBuf>,
    /// Deck file written when the user exits.
    pub export_to: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub struct Session<R, W> {
    deck: Deck,
    transcript: Transcript,
    options: SessionOptions,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, options: SessionOptions) -> Self {
        Self {
            deck: Deck::new(),
            transcript: Transcript::new(),
            options,
            input,
            output,
        }
    }

    /// Start from an existing deck instead of an empty one.
    pub fn with_deck(mut self, deck: Deck) -> Self {
        self.deck = deck;
        self
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn into_deck(self) -> Deck {
        self.deck
    }

    /// Run the startup import, then the action loop until `exit` or end of
    /// input.
    pub fn run(&mut self) -> Result<()> {
        if let Some(path) = self.options.import_from.clone() {
            self.import_cards(Some(&path))?;
        }

        loop {
            self.say(ACTION_PROMPT)?;
            let Some(line) = self.read_line()? else {
                warn!("input closed at the action prompt, ending session");
                return Ok(());
            };

            let Some(action) = Action::from_keyword(&line) else {
                debug!(keyword = %line, "ignoring unknown action");
                continue;
            };

            if self.dispatch(action)? == Flow::Exit {
                return Ok(());
            }
        }
    }

    fn dispatch(&mut self, action: Action) -> Result<Flow> {
        debug!(action = action.as_str(), cards = self.deck.len(), "dispatching");
        match action {
            Action::Add => self.add_card()?,
            Action::Remove => self.remove_card()?,
            Action::Import => self.import_cards(None)?,
            Action::Export => self.export_cards(None)?,
            Action::Ask => self.quiz()?,
            Action::Log => self.save_log()?,
            Action::HardestCard => self.report_hardest()?,
            Action::ResetStats => self.reset_stats()?,
            Action::Exit => {
                if let Some(path) = self.options.export_to.clone() {
                    self.export_cards(Some(&path))?;
                }
                self.say("Bye bye!")?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    /// Prompt for a term and a definition until both are unused, then add
    /// the card.
    pub fn add_card(&mut self) -> Result<()> {
        self.say("The card")?;
        let mut term = self.require_line()?;
        while let Err(rejection) = self.deck.check_term(&term) {
            self.say(rejection.to_string())?;
            term = self.require_line()?;
        }

        self.say("The definition of the card")?;
        let mut definition = self.require_line()?;
        while let Err(rejection) = self.deck.check_definition(&definition) {
            self.say(rejection.to_string())?;
            definition = self.require_line()?;
        }

        self.deck.insert(term.as_str(), Card::new(definition.as_str()));
        self.say(format!("The pair (\"{term}\":\"{definition}\") has been added."))
    }

    pub fn remove_card(&mut self) -> Result<()> {
        self.say("Which card?")?;
        let term = self.require_line()?;
        match self.deck.remove(&term) {
            Some(_) => self.say("The card has been removed."),
            None => self.say(format!("Can't remove \"{term}\": there is no such card.")),
        }
    }

    /// Import a deck file and merge it into the current deck. Without a
    /// `path` the file name is read from input.
    pub fn import_cards(&mut self, path: Option<&Path>) -> Result<()> {
        let path = match path {
            Some(path) => {
                self.say(format!("File name:\n> {}", path.display()))?;
                path.to_path_buf()
            }
            None => {
                self.say("File name:\n")?;
                PathBuf::from(self.require_line()?)
            }
        };

        match load_deck(&path)? {
            Some(imported) => {
                let count = imported.len();
                self.deck.merge(imported);
                info!(path = %path.display(), count, "imported cards");
                self.say(format!("{count} cards have been loaded."))
            }
            None => {
                warn!(path = %path.display(), "import file not found");
                self.say("File not found.")
            }
        }
    }

    /// Write the whole deck to a file. Without a `path` the file name is
    /// read from input.
    pub fn export_cards(&mut self, path: Option<&Path>) -> Result<()> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                self.say("File name:")?;
                PathBuf::from(self.require_line()?)
            }
        };

        save_deck(&path, &self.deck)?;
        let count = self.deck.len();
        info!(path = %path.display(), count, "exported cards");
        self.say(format!("{count} cards have been saved."))
    }

    /// Ask for definitions, cycling through the deck in order until the
    /// requested number of questions has been asked.
    pub fn quiz(&mut self) -> Result<()> {
        self.say("How many times to ask?")?;
        let raw = self.require_line()?;
        let count = raw
            .trim()
            .parse::<i64>()
            .map_err(|_| FlashcardError::InvalidCount(raw.clone()))?;
        let count = usize::try_from(count).unwrap_or(0);

        if self.deck.is_empty() {
            debug!(count, "quiz requested on an empty deck");
            return Ok(());
        }

        for i in 0..count {
            let Some((term, card)) = self.deck.get_index(i % self.deck.len()) else {
                break;
            };
            let term = term.to_string();
            let expected = card.definition.clone();

            self.say(format!("Print the definition of \"{term}\":"))?;
            let answer = self.require_line()?;

            let result = grade(&self.deck, &term, &answer);
            if !result.is_correct() {
                self.deck.record_mistake(&term);
            }
            self.say(result.message(&expected))?;
        }
        Ok(())
    }

    pub fn report_hardest(&mut self) -> Result<()> {
        let report = self.deck.hardest();
        self.say(report.to_string())
    }

    pub fn reset_stats(&mut self) -> Result<()> {
        self.deck.reset_stats();
        self.say("Card statistics have been reset.")
    }

    /// Write the transcript so far to a file named by the user.
    pub fn save_log(&mut self) -> Result<()> {
        self.say("File name:")?;
        let path = PathBuf::from(self.require_line()?);
        self.transcript.save(&path)?;
        info!(path = %path.display(), lines = self.transcript.len(), "saved log");
        self.say("The log has been saved.")
    }

    fn say(&mut self, message: impl Into<String>) -> Result<()> {
        let message = message.into();
        writeln!(self.output, "{message}")?;
        self.output.flush()?;
        self.transcript.record_message(message);
        Ok(())
    }

    /// Read one line without its line ending. `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        self.transcript.record_input(line.as_str());
        Ok(Some(line))
    }

    fn require_line(&mut self) -> Result<String> {
        self.read_line()?.ok_or(FlashcardError::UnexpectedEof)
    }
}
