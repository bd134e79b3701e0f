use std::{fmt, num::NonZeroUsize, str::FromStr};

/// Identifier of a flashcard within its deck.
///
/// Ids are positive and assigned by the owning [`Deck`](crate::Deck), starting
/// at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FlashcardId(NonZeroUsize);

impl FlashcardId {
    /// The id given to the first card of a deck.
    pub const FIRST: Self = Self(NonZeroUsize::MIN);

    /// Wraps a non-zero integer as a flashcard id.
    #[must_use]
    pub const fn new(id: NonZeroUsize) -> Self {
        Self(id)
    }

    /// Returns the numeric value of the id.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// Returns the id following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl TryFrom<usize> for FlashcardId {
    type Error = InvalidFlashcardId;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        NonZeroUsize::new(value)
            .map(Self)
            .ok_or_else(|| InvalidFlashcardId(value.to_string()))
    }
}

impl FromStr for FlashcardId {
    type Err = InvalidFlashcardId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<NonZeroUsize>()
            .map(Self)
            .map_err(|_| InvalidFlashcardId(s.to_string()))
    }
}

impl fmt::Display for FlashcardId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when a value is not a positive integer id.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("invalid flashcard id '{0}': must be a positive integer")]
pub struct InvalidFlashcardId(String);

/// A question/answer pair with a learned flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flashcard {
    id: FlashcardId,
    question: String,
    answer: String,
    is_learned: bool,
}

impl Flashcard {
    /// Construct a flashcard from its parts.
    ///
    /// No validation is performed here; decks check question and answer
    /// content when cards are created through
    /// [`Deck::create_flashcard`](crate::Deck::create_flashcard).
    #[must_use]
    pub fn new(
        id: FlashcardId,
        question: impl Into<String>,
        answer: impl Into<String>,
        is_learned: bool,
    ) -> Self {
        Self {
            id,
            question: question.into(),
            answer: answer.into(),
            is_learned,
        }
    }

    /// The card's id within its deck.
    #[must_use]
    pub const fn id(&self) -> FlashcardId {
        self.id
    }

    /// The question side of the card.
    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    /// The answer side of the card.
    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Whether the card has been marked as learned.
    #[must_use]
    pub const fn is_learned(&self) -> bool {
        self.is_learned
    }

    /// Whether the card has both a question and an answer, and can therefore
    /// be persisted.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.question.is_empty() && !self.answer.is_empty()
    }

    pub(crate) fn set_question(&mut self, question: String) {
        self.question = question;
    }

    pub(crate) fn set_answer(&mut self, answer: String) {
        self.answer = answer;
    }

    pub(crate) const fn set_learned(&mut self, is_learned: bool) {
        self.is_learned = is_learned;
    }
}
