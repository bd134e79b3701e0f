use std::path::{Path, PathBuf};

mod card;
mod deck;
mod terminal;

use clap::ArgAction;
use flashdeck::{Config, DeckManager, DeckStore};
use terminal::Colorize;
use tracing::instrument;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// The path to the project root; decks are kept under its data directory
    #[arg(short, long, default_value = ".", global = true)]
    root: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let config = load_config(&self.root);
        let store = DeckStore::from_config(&self.root, &config);

        self.command.unwrap_or(Command::Decks).run(&store)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

fn load_config(root: &Path) -> Config {
    let path = root.join(".flash").join("config.toml");
    Config::load(&path).unwrap_or_else(|e| {
        tracing::debug!("Failed to load config: {e}");
        Config::default()
    })
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// List all decks (default)
    Decks,

    /// Create, rename or delete decks
    #[command(subcommand)]
    Deck(deck::Command),

    /// Add a flashcard to a deck
    Add(card::Add),

    /// List the flashcards in a deck
    List(card::List),

    /// Show a single flashcard
    View(card::View),

    /// Change the question or answer of a flashcard
    Edit(card::Edit),

    /// Delete a flashcard
    Remove(card::Remove),

    /// Mark a flashcard as learned
    Learn(card::Mark),

    /// Mark a flashcard as not learned
    Unlearn(card::Mark),
}

impl Command {
    fn run(self, store: &DeckStore) -> anyhow::Result<()> {
        match self {
            Self::Decks => list_decks(store),
            Self::Deck(command) => command.run(store)?,
            Self::Add(command) => command.run(store)?,
            Self::List(command) => command.run(store)?,
            Self::View(command) => command.run(store)?,
            Self::Edit(command) => command.run(store)?,
            Self::Remove(command) => command.run(store)?,
            Self::Learn(command) => command.run(store, true)?,
            Self::Unlearn(command) => command.run(store, false)?,
        }
        Ok(())
    }
}

#[instrument(skip(store))]
fn list_decks(store: &DeckStore) {
    let manager = DeckManager::load(store);

    if manager.is_empty() {
        println!("{}", "No decks yet".dim());
        println!("  flash deck new <NAME>  # Create your first deck");
        return;
    }

    for deck in manager.decks() {
        println!(
            "{}  {}",
            deck.name().as_str().info(),
            format!("{} cards, {} learned", deck.len(), deck.learned_count()).dim()
        );
    }
}
