//! The registry of decks for one session.
//!
//! A [`DeckManager`] is constructed at startup (usually from
//! [`DeckStore::load_all_decks`]), passed by reference to whatever drives the
//! session, and dropped at shutdown. The "current deck" is held as a name and
//! resolved against the registry on use, so removing a deck can never leave a
//! dangling selection.

use std::collections::BTreeMap;

use tracing::instrument;

use crate::{
    domain::{Deck, DeckName, Error},
    storage::DeckStore,
};

/// Named decks plus the current selection.
#[derive(Debug, Default)]
pub struct DeckManager {
    decks: BTreeMap<DeckName, Deck>,
    current: Option<DeckName>,
}

impl DeckManager {
    /// Create an empty registry with no deck selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the given decks, with no deck selected.
    #[must_use]
    pub const fn with_decks(decks: BTreeMap<DeckName, Deck>) -> Self {
        Self {
            decks,
            current: None,
        }
    }

    /// Create a registry from every deck file in the store.
    #[must_use]
    pub fn load(store: &DeckStore) -> Self {
        Self::with_decks(store.load_all_decks())
    }

    /// Replace the registry contents.
    ///
    /// The current selection is kept if a deck of the same name is among the
    /// new decks, and unset otherwise.
    pub fn install(&mut self, decks: BTreeMap<DeckName, Deck>) {
        self.decks = decks;
        if self
            .current
            .as_ref()
            .is_some_and(|name| !self.decks.contains_key(name))
        {
            self.current = None;
        }
    }

    /// Remove every deck and unset the current selection.
    pub fn clear(&mut self) {
        self.decks.clear();
        self.current = None;
    }

    /// The number of registered decks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.decks.len()
    }

    /// Whether no decks are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }

    /// All decks, ordered by name.
    pub fn decks(&self) -> impl Iterator<Item = &Deck> {
        self.decks.values()
    }

    /// Look up a deck by name.
    #[must_use]
    pub fn deck(&self, name: &str) -> Option<&Deck> {
        self.decks.get(name)
    }

    /// Look up a deck by name for modification.
    pub fn deck_mut(&mut self, name: &str) -> Option<&mut Deck> {
        self.decks.get_mut(name)
    }

    /// Register a new, empty deck.
    ///
    /// The new deck is not selected.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the name is not a legal deck name
    /// or a deck with that name already exists.
    #[instrument(skip(self))]
    pub fn create_deck(&mut self, name: &str) -> Result<&mut Deck, Error> {
        let name = self.available_name(name)?;
        tracing::info!("Created deck '{name}'");
        Ok(self
            .decks
            .entry(name.clone())
            .or_insert_with(|| Deck::new(name)))
    }

    /// Make the named deck the target of flashcard operations.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no deck has that name.
    pub fn select_deck(&mut self, name: &str) -> Result<(), Error> {
        let deck = self.decks.get(name).ok_or_else(|| deck_not_found(name))?;
        self.current = Some(deck.name().clone());
        Ok(())
    }

    /// The name of the selected deck, if any.
    #[must_use]
    pub const fn current_deck_name(&self) -> Option<&DeckName> {
        self.current.as_ref()
    }

    /// The selected deck.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoDeckSelected`] if no deck is selected.
    pub fn current_deck(&self) -> Result<&Deck, Error> {
        self.current
            .as_ref()
            .and_then(|name| self.decks.get(name))
            .ok_or(Error::NoDeckSelected)
    }

    /// The selected deck, for modification.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoDeckSelected`] if no deck is selected.
    pub fn current_deck_mut(&mut self) -> Result<&mut Deck, Error> {
        self.current
            .as_ref()
            .and_then(|name| self.decks.get_mut(name))
            .ok_or(Error::NoDeckSelected)
    }

    /// Write the selected deck to its file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoDeckSelected`] if no deck is selected, or
    /// [`Error::Io`] if the file cannot be written.
    pub fn save_current_deck(&self, store: &DeckStore) -> Result<(), Error> {
        let deck = self.current_deck()?;
        store.save_deck(deck.name(), deck)?;
        Ok(())
    }

    /// Remove a deck from the registry and delete its file.
    ///
    /// If the deck was selected, the selection is unset. A deck that was never
    /// saved has no file, which is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no deck has that name, or [`Error::Io`]
    /// if the file exists but cannot be deleted. The registry is unchanged on
    /// error.
    #[instrument(skip(self, store))]
    pub fn delete_deck(&mut self, name: &str, store: &DeckStore) -> Result<Deck, Error> {
        let key = self
            .decks
            .get(name)
            .map(|deck| deck.name().clone())
            .ok_or_else(|| deck_not_found(name))?;

        store.delete_deck_file(&key)?;

        if self.current.as_ref() == Some(&key) {
            self.current = None;
        }

        let deck = self.decks.remove(&key).ok_or_else(|| deck_not_found(name))?;
        tracing::info!("Deleted deck '{key}'");
        Ok(deck)
    }

    /// Give a deck a new name, moving its file if it has one.
    ///
    /// The selection follows the deck.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no deck is called `old_name`,
    /// [`Error::InvalidArgument`] if `new_name` is illegal or already taken by
    /// a registered deck or a file in the store, or [`Error::Io`] if the file cannot be renamed. The registry is
    /// unchanged on error.
    #[instrument(skip(self, store))]
    pub fn rename_deck(
        &mut self,
        old_name: &str,
        new_name: &str,
        store: &DeckStore,
    ) -> Result<(), Error> {
        let old_key = self
            .decks
            .get(old_name)
            .map(|deck| deck.name().clone())
            .ok_or_else(|| deck_not_found(old_name))?;
        let new_key = self.available_name(new_name)?;
        // a file that failed to load still occupies the name on disk
        if store.contains(&new_key) {
            return Err(Error::InvalidArgument(format!(
                "a deck file named '{new_key}' already exists"
            )));
        }

        if store.contains(&old_key) {
            store.rename_deck_file(&old_key, &new_key)?;
        }

        let mut deck = self
            .decks
            .remove(&old_key)
            .ok_or_else(|| deck_not_found(old_name))?;
        deck.set_name(new_key.clone());
        self.decks.insert(new_key.clone(), deck);

        if self.current.as_ref() == Some(&old_key) {
            self.current = Some(new_key.clone());
        }

        tracing::info!("Renamed deck '{old_key}' to '{new_key}'");
        Ok(())
    }

    fn available_name(&self, name: &str) -> Result<DeckName, Error> {
        let name = DeckName::try_from(name)?;
        if self.decks.contains_key(&name) {
            return Err(Error::InvalidArgument(format!(
                "a deck named '{name}' already exists"
            )));
        }
        Ok(name)
    }
}

fn deck_not_found(name: &str) -> Error {
    Error::NotFound(format!("deck '{name}'"))
}
