use std::io;

use crate::domain::{deck_name::InvalidDeckName, flashcard::InvalidFlashcardId};

/// Errors raised by deck and flashcard operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An argument was rejected, e.g. an illegal deck name or an empty
    /// question.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The named deck or flashcard does not exist.
    #[error("{0} not found")]
    NotFound(String),

    /// A flashcard operation was requested while no deck is selected.
    #[error("no deck selected")]
    NoDeckSelected,

    /// A deck file could not be written, renamed or deleted.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl From<InvalidDeckName> for Error {
    fn from(error: InvalidDeckName) -> Self {
        Self::InvalidArgument(error.to_string())
    }
}

impl From<InvalidFlashcardId> for Error {
    fn from(error: InvalidFlashcardId) -> Self {
        Self::InvalidArgument(error.to_string())
    }
}
