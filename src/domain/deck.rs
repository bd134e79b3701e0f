//! A named, ordered collection of flashcards.

use crate::domain::{
    Error,
    deck_name::DeckName,
    flashcard::{Flashcard, FlashcardId},
};

/// A deck of flashcards.
///
/// Cards keep their insertion (or load) order. Ids are assigned by the deck
/// when a card is created and are never renumbered or reused while the deck is
/// in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    name: DeckName,
    flashcards: Vec<Flashcard>,
    next_id: FlashcardId,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub const fn new(name: DeckName) -> Self {
        Self {
            name,
            flashcards: Vec::new(),
            next_id: FlashcardId::FIRST,
        }
    }

    /// The deck's name.
    #[must_use]
    pub const fn name(&self) -> &DeckName {
        &self.name
    }

    pub(crate) fn set_name(&mut self, name: DeckName) {
        self.name = name;
    }

    /// The cards in the deck, in order.
    #[must_use]
    pub fn flashcards(&self) -> &[Flashcard] {
        &self.flashcards
    }

    /// The number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.flashcards.len()
    }

    /// Whether the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flashcards.is_empty()
    }

    /// The number of cards marked as learned.
    #[must_use]
    pub fn learned_count(&self) -> usize {
        self.flashcards.iter().filter(|card| card.is_learned()).count()
    }

    /// The id the next created card will receive.
    ///
    /// Starts at 1 and only moves forward; deleting a card never frees its id
    /// for reuse.
    #[must_use]
    pub const fn next_id(&self) -> FlashcardId {
        self.next_id
    }

    /// Create a new unlearned card and append it to the deck.
    ///
    /// Question and answer are trimmed before they are stored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the question or answer is empty
    /// after trimming, or spans more than one line.
    pub fn create_flashcard(&mut self, question: &str, answer: &str) -> Result<&Flashcard, Error> {
        let question = validate_side("question", question)?;
        let answer = validate_side("answer", answer)?;

        let card = Flashcard::new(self.next_id, question, answer, false);
        self.next_id = self.next_id.next();
        tracing::debug!("Created flashcard {} in deck '{}'", card.id(), self.name);

        self.flashcards.push(card);
        Ok(&self.flashcards[self.flashcards.len() - 1])
    }

    /// Append a pre-built card without validating its content.
    ///
    /// Used when reconstructing decks from disk. Cards with an empty side are
    /// kept in memory and dropped when the deck is next saved.
    pub(crate) fn insert_flashcard(&mut self, card: Flashcard) {
        self.next_id = self.next_id.max(card.id().next());
        self.flashcards.push(card);
    }

    /// Look up a card by id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no card has the given id.
    pub fn view_flashcard(&self, id: FlashcardId) -> Result<&Flashcard, Error> {
        self.flashcards
            .iter()
            .find(|card| card.id() == id)
            .ok_or_else(|| self.card_not_found(id))
    }

    /// Replace the question and/or answer of a card.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no card has the given id, or
    /// [`Error::InvalidArgument`] if a replacement side is empty after
    /// trimming or spans more than one line. Nothing is changed on error.
    pub fn edit_flashcard(
        &mut self,
        id: FlashcardId,
        question: Option<&str>,
        answer: Option<&str>,
    ) -> Result<&Flashcard, Error> {
        let question = question
            .map(|q| validate_side("question", q))
            .transpose()?;
        let answer = answer.map(|a| validate_side("answer", a)).transpose()?;

        let index = self.position(id)?;
        let card = &mut self.flashcards[index];
        if let Some(question) = question {
            card.set_question(question);
        }
        if let Some(answer) = answer {
            card.set_answer(answer);
        }
        Ok(&*card)
    }

    /// Remove a card from the deck.
    ///
    /// Remaining cards keep their ids.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no card has the given id.
    pub fn delete_flashcard(&mut self, id: FlashcardId) -> Result<Flashcard, Error> {
        let index = self.position(id)?;
        let card = self.flashcards.remove(index);
        tracing::debug!("Deleted flashcard {id} from deck '{}'", self.name);
        Ok(card)
    }

    /// Set the learned flag of a card.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no card has the given id.
    pub fn change_is_learned(&mut self, id: FlashcardId, is_learned: bool) -> Result<(), Error> {
        let index = self.position(id)?;
        self.flashcards[index].set_learned(is_learned);
        Ok(())
    }

    fn position(&self, id: FlashcardId) -> Result<usize, Error> {
        self.flashcards
            .iter()
            .position(|card| card.id() == id)
            .ok_or_else(|| self.card_not_found(id))
    }

    fn card_not_found(&self, id: FlashcardId) -> Error {
        Error::NotFound(format!("flashcard {id} in deck '{}'", self.name))
    }
}

fn validate_side(side: &str, text: &str) -> Result<String, Error> {
    let text = text.trim();
    if text.is_empty() {
        return Err(Error::InvalidArgument(format!("{side} must not be empty")));
    }
    if text.contains(['\n', '\r']) {
        return Err(Error::InvalidArgument(format!(
            "{side} must fit on a single line"
        )));
    }
    Ok(text.to_string())
}
