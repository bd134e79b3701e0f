//! Domain models for flashcard decks.
//!
//! This module contains the in-memory deck model, the session registry of
//! decks, configuration, and the error type shared by all of them.

mod config;
pub use config::Config;

/// Flashcard deck model.
pub mod deck;
pub use deck::Deck;

/// Validated deck names.
pub mod deck_name;
pub use deck_name::{DeckName, InvalidDeckName};

/// Session registry of named decks.
pub mod deck_manager;
pub use deck_manager::DeckManager;

mod error;
pub use error::Error;

/// Flashcards and their identifiers.
pub mod flashcard;
pub use flashcard::{Flashcard, FlashcardId, InvalidFlashcardId};
