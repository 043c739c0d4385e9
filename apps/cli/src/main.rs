use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use flashcard_core::{Session, SessionOptions};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "flashcards")]
#[command(
    about = "This program tests terms of imported or newly created flashcards and tracks success statistics."
)]
struct Cli {
    /// The name of the file containing the flashcards to import.
    #[arg(short = 'i', long = "import_from")]
    import_from: Option<PathBuf>,

    /// The filename to export flashcards to upon exiting the program.
    #[arg(short = 'e', long = "export_to")]
    export_to: Option<PathBuf>,
}

impl From<Cli> for SessionOptions {
    fn from(cli: Cli) -> Self {
        Self {
            import_from: cli.import_from,
            export_to: cli.export_to,
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only the session itself.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let options = SessionOptions::from(Cli::parse());
    tracing::debug!(?options, "starting session");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), options);
    session.run().context("flashcard session failed")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_flags() {
        let cli = Cli::try_parse_from(["flashcards", "-i", "in.json", "-e", "out.json"]).unwrap();
        let options = SessionOptions::from(cli);
        assert_eq!(options.import_from, Some(PathBuf::from("in.json")));
        assert_eq!(options.export_to, Some(PathBuf::from("out.json")));
    }

    #[test]
    fn parses_long_flags() {
        let cli =
            Cli::try_parse_from(["flashcards", "--import_from", "a.json", "--export_to=b.json"])
                .unwrap();
        assert_eq!(cli.import_from, Some(PathBuf::from("a.json")));
        assert_eq!(cli.export_to, Some(PathBuf::from("b.json")));
    }

    #[test]
    fn flags_are_optional() {
        let cli = Cli::try_parse_from(["flashcards"]).unwrap();
        assert!(cli.import_from.is_none());
        assert!(cli.export_to.is_none());
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
