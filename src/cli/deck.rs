use std::io::BufRead;

use flashdeck::{DeckManager, DeckStore};
use tracing::instrument;

use crate::cli::terminal::Colorize;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Create a new, empty deck
    New {
        /// The name of the deck
        name: String,
    },

    /// Rename a deck and its file
    Rename {
        /// The current name of the deck
        old_name: String,

        /// The new name for the deck
        new_name: String,
    },

    /// Delete a deck and its file
    Delete {
        /// The name of the deck
        name: String,

        /// Skip confirmation prompts
        #[arg(long, short)]
        yes: bool,
    },
}

impl Command {
    #[instrument(skip(store))]
    pub fn run(self, store: &DeckStore) -> anyhow::Result<()> {
        let mut manager = DeckManager::load(store);

        match self {
            Self::New { name } => {
                let name = manager.create_deck(&name)?.name().clone();
                if store.contains(&name) {
                    anyhow::bail!(
                        "Deck file {} already exists",
                        store.path_for(&name).display()
                    );
                }
                // an empty deck only survives the session once it has a file
                manager.select_deck(&name)?;
                manager.save_current_deck(store)?;

                println!("{}", format!("✅ Created deck '{name}'").success());
            }
            Self::Rename { old_name, new_name } => {
                manager.rename_deck(&old_name, &new_name, store)?;

                println!(
                    "{}",
                    format!("✅ Renamed deck '{old_name}' → '{new_name}'").success()
                );
            }
            Self::Delete { name, yes } => {
                let Some(deck) = manager.deck(&name) else {
                    anyhow::bail!("Deck '{name}' not found");
                };

                if !yes {
                    println!("Deleting deck '{name}' with {} flashcards", deck.len());
                    eprint!("\nProceed? (y/N) ");
                    let mut line = String::new();
                    std::io::stdin().lock().read_line(&mut line)?;
                    if !line.trim().eq_ignore_ascii_case("y") {
                        println!("{}", "Cancelled".warning());
                        return Ok(());
                    }
                }

                manager.delete_deck(&name, store)?;
                println!("{}", format!("✅ Deleted deck '{name}'").success());
            }
        }

        Ok(())
    }
}
