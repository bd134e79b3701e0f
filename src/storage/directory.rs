//! A filesystem backed store of decks
//!
//! The [`DeckStore`] owns the directory deck files live in. It knows how to
//! write a [`Deck`] to its file, read every deck file back, and rename or
//! delete a deck's file. It never touches the in-memory registry; callers
//! install what it loads.

use std::{
    collections::BTreeMap,
    fs::{self, File},
    io::{self, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use walkdir::WalkDir;

use crate::{
    domain::{Config, Deck, DeckName},
    storage::{
        path_parser::{construct_path_from_name, deck_name_from_path},
        record,
    },
};

/// A directory of deck files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckStore {
    /// The directory deck files are stored in.
    dir: PathBuf,
}

impl DeckStore {
    /// Opens the store at the given directory.
    ///
    /// The directory does not need to exist yet; it is created on the first
    /// save.
    #[must_use]
    pub const fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Opens the store configured for a project root.
    #[must_use]
    pub fn from_config(root: &Path, config: &Config) -> Self {
        Self::new(root.join(config.decks_dir()))
    }

    /// The directory deck files are stored in.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The path of a deck's file.
    #[must_use]
    pub fn path_for(&self, name: &DeckName) -> PathBuf {
        construct_path_from_name(&self.dir, name)
    }

    /// Whether a file exists for the deck.
    #[must_use]
    pub fn contains(&self, name: &DeckName) -> bool {
        self.path_for(name).is_file()
    }

    /// Write a deck to the file for `name`, replacing its previous contents.
    ///
    /// Cards with an empty question or answer are not written. The storage
    /// directory is created if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the file cannot
    /// be written.
    pub fn save_deck(&self, name: &DeckName, deck: &Deck) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;

        let path = self.path_for(name);
        let mut writer = BufWriter::new(File::create(&path)?);
        let written = record::write_deck(deck, &mut writer)?;
        writer.flush()?;

        tracing::debug!(
            "Saved {written} of {} flashcards to {}",
            deck.len(),
            path.display()
        );
        Ok(())
    }

    /// Read the deck stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or cannot be read as UTF-8
    /// text. Malformed records inside a readable file are skipped, not
    /// reported.
    pub fn load_deck(&self, name: &DeckName) -> io::Result<Deck> {
        let file = File::open(self.path_for(name))?;
        let cards = record::read_flashcards(BufReader::new(file))?;

        let mut deck = Deck::new(name.clone());
        for card in cards {
            deck.insert_flashcard(card);
        }
        Ok(deck)
    }

    /// Load every deck file in the directory.
    ///
    /// A missing directory yields an empty map. Entries that are not `.txt`
    /// files, and files that cannot be read, are skipped so that one damaged
    /// deck does not stop the others from loading.
    #[must_use]
    pub fn load_all_decks(&self) -> BTreeMap<DeckName, Deck> {
        if !self.dir.is_dir() {
            tracing::debug!(
                "Deck directory {} does not exist; no decks loaded",
                self.dir.display()
            );
            return BTreeMap::new();
        }

        let decks: BTreeMap<_, _> = collect_deck_paths(&self.dir)
            .into_iter()
            .filter_map(|path| self.try_load_deck(&path))
            .map(|deck| (deck.name().clone(), deck))
            .collect();

        tracing::debug!(
            "Loaded {} decks from {}",
            decks.len(),
            self.dir.display()
        );
        decks
    }

    fn try_load_deck(&self, path: &Path) -> Option<Deck> {
        let name = match deck_name_from_path(path) {
            Ok(name) => name,
            Err(e) => {
                tracing::debug!("Skipping {}: {e}", path.display());
                return None;
            }
        };

        match self.load_deck(&name) {
            Ok(deck) => Some(deck),
            Err(e) => {
                tracing::warn!("Failed to load deck from {}: {e}", path.display());
                None
            }
        }
    }

    /// Rename a deck's file.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no file for `old_name`, a file for
    /// `new_name` already exists, or the rename fails.
    pub fn rename_deck_file(&self, old_name: &DeckName, new_name: &DeckName) -> io::Result<()> {
        let from = self.path_for(old_name);
        let to = self.path_for(new_name);

        if !from.is_file() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("deck file {} does not exist", from.display()),
            ));
        }
        if to.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("deck file {} already exists", to.display()),
            ));
        }

        fs::rename(&from, &to)?;
        tracing::debug!("Renamed {} to {}", from.display(), to.display());
        Ok(())
    }

    /// Delete a deck's file.
    ///
    /// Deleting a file that does not exist is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be removed.
    pub fn delete_deck_file(&self, name: &DeckName) -> io::Result<()> {
        let path = self.path_for(name);
        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!("Deleted {}", path.display());
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

fn collect_deck_paths(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!("Failed to read entry in {}: {e}", dir.display());
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .collect()
}
