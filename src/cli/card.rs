//! Commands that act on the flashcards of one deck.
//!
//! Each command loads the decks, selects the deck named by `--deck`, applies
//! one operation to it and, if the deck changed, saves it again.

use flashdeck::{Deck, DeckManager, DeckStore, Error, Flashcard, FlashcardId};
use tracing::instrument;

use crate::cli::terminal::Colorize;

#[derive(Debug, clap::Args)]
pub struct DeckArg {
    /// The deck to operate on
    #[arg(long, short)]
    deck: String,
}

impl DeckArg {
    fn open(&self, store: &DeckStore) -> Result<DeckManager, Error> {
        let mut manager = DeckManager::load(store);
        manager.select_deck(&self.deck)?;
        Ok(manager)
    }

    /// Apply `f` to the selected deck and save it.
    fn modify<T>(
        &self,
        store: &DeckStore,
        f: impl FnOnce(&mut Deck) -> Result<T, Error>,
    ) -> Result<T, Error> {
        let mut manager = self.open(store)?;
        let output = f(manager.current_deck_mut()?)?;
        manager.save_current_deck(store)?;
        Ok(output)
    }
}

fn describe(card: &Flashcard) -> String {
    let status = if card.is_learned() {
        "learned".success()
    } else {
        "not learned".dim()
    };
    format!(
        "{} {}\n    Q: {}\n    A: {}",
        format!("[{}]", card.id()).info(),
        status,
        card.question(),
        card.answer()
    )
}

#[derive(Debug, clap::Parser)]
pub struct Add {
    #[command(flatten)]
    deck: DeckArg,

    /// The question side of the flashcard
    #[arg(long, short)]
    question: String,

    /// The answer side of the flashcard
    #[arg(long, short)]
    answer: String,
}

impl Add {
    #[instrument(skip(store))]
    pub fn run(self, store: &DeckStore) -> anyhow::Result<()> {
        let (card, total) = self.deck.modify(store, |deck| {
            let card = deck.create_flashcard(&self.question, &self.answer)?.clone();
            Ok((card, deck.len()))
        })?;

        println!("{}", "✅ Added a new flashcard.".success());
        println!("Question: {}", card.question());
        println!("Answer: {}", card.answer());
        println!("You have {total} flashcard(s) in your deck.");
        Ok(())
    }
}

#[derive(Debug, clap::Parser)]
pub struct List {
    #[command(flatten)]
    deck: DeckArg,
}

impl List {
    #[instrument(skip(store))]
    pub fn run(self, store: &DeckStore) -> anyhow::Result<()> {
        let manager = self.deck.open(store)?;
        let deck = manager.current_deck()?;

        if deck.is_empty() {
            println!("{}", format!("Deck '{}' has no flashcards", deck.name()).dim());
            return Ok(());
        }

        for card in deck.flashcards() {
            println!("{}", describe(card));
        }
        println!(
            "{}",
            format!("{} of {} learned", deck.learned_count(), deck.len()).dim()
        );
        Ok(())
    }
}

#[derive(Debug, clap::Parser)]
pub struct View {
    #[command(flatten)]
    deck: DeckArg,

    /// The id of the flashcard
    id: FlashcardId,
}

impl View {
    #[instrument(skip(store))]
    pub fn run(self, store: &DeckStore) -> anyhow::Result<()> {
        let manager = self.deck.open(store)?;
        let card = manager.current_deck()?.view_flashcard(self.id)?;

        println!("{}", describe(card));
        Ok(())
    }
}

#[derive(Debug, clap::Parser)]
pub struct Edit {
    #[command(flatten)]
    deck: DeckArg,

    /// The id of the flashcard
    id: FlashcardId,

    /// The new question
    #[arg(long, short, required_unless_present = "answer")]
    question: Option<String>,

    /// The new answer
    #[arg(long, short)]
    answer: Option<String>,
}

impl Edit {
    #[instrument(skip(store))]
    pub fn run(self, store: &DeckStore) -> anyhow::Result<()> {
        let card = self.deck.modify(store, |deck| {
            deck.edit_flashcard(
                self.id,
                self.question.as_deref(),
                self.answer.as_deref(),
            )
            .cloned()
        })?;

        println!("{}", format!("✅ Updated flashcard {}", card.id()).success());
        println!("{}", describe(&card));
        Ok(())
    }
}

#[derive(Debug, clap::Parser)]
pub struct Remove {
    #[command(flatten)]
    deck: DeckArg,

    /// The id of the flashcard
    id: FlashcardId,
}

impl Remove {
    #[instrument(skip(store))]
    pub fn run(self, store: &DeckStore) -> anyhow::Result<()> {
        let card = self
            .deck
            .modify(store, |deck| deck.delete_flashcard(self.id))?;

        println!(
            "{}",
            format!("✅ Deleted flashcard {}: {}", card.id(), card.question()).success()
        );
        Ok(())
    }
}

#[derive(Debug, clap::Parser)]
pub struct Mark {
    #[command(flatten)]
    deck: DeckArg,

    /// The id of the flashcard
    id: FlashcardId,
}

impl Mark {
    #[instrument(skip(store))]
    pub fn run(self, store: &DeckStore, is_learned: bool) -> anyhow::Result<()> {
        self.deck
            .modify(store, |deck| deck.change_is_learned(self.id, is_learned))?;

        let status = if is_learned { "learned" } else { "not learned" };
        println!(
            "{}",
            format!("✅ Marked flashcard {} as {status}", self.id).success()
        );
        Ok(())
    }
}
