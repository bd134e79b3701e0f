//! Plain-text Flashcard Decks
//!
//! Decks of question/answer flashcards are stored as text files, one file per
//! deck, in a directory.

pub mod domain;
pub use domain::{
    Config, Deck, DeckManager, DeckName, Error, Flashcard, FlashcardId, InvalidDeckName,
    InvalidFlashcardId,
};

/// Filesystem storage of deck files.
pub mod storage;
pub use storage::DeckStore;
