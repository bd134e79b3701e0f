//! Mapping between deck names and deck file paths.
//!
//! A deck called `Math` lives in `<dir>/Math.txt`.

use std::path::{Path, PathBuf};

use crate::domain::{DeckName, InvalidDeckName};

/// The extension of deck files.
pub const DECK_FILE_EXTENSION: &str = "txt";

/// Construct the path of a deck's file.
#[must_use]
pub fn construct_path_from_name(dir: &Path, name: &DeckName) -> PathBuf {
    // `with_extension` would clobber anything after a '.' in the name
    dir.join(format!("{name}.{DECK_FILE_EXTENSION}"))
}

/// Derive a deck name from the path of a deck file.
///
/// # Errors
///
/// Returns an error if:
/// - the path has no `.txt` extension
/// - the file stem is not valid UTF-8
/// - the file stem is not a legal deck name
pub fn deck_name_from_path(path: &Path) -> Result<DeckName, ParseError> {
    if path.extension().and_then(|ext| ext.to_str()) != Some(DECK_FILE_EXTENSION) {
        return Err(ParseError::NotADeckFile);
    }

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or(ParseError::InvalidPath)?;

    DeckName::try_from(stem).map_err(ParseError::Name)
}

/// Errors that can occur when deriving a deck name from a path.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    /// The path does not end in `.txt`.
    #[error("not a deck file")]
    NotADeckFile,

    /// The path has no usable file stem.
    #[error("invalid path")]
    InvalidPath,

    /// The file stem is not a legal deck name.
    #[error(transparent)]
    Name(InvalidDeckName),
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("Math", "decks/Math.txt"; "simple")]
    #[test_case("v1.2 notes", "decks/v1.2 notes.txt"; "name with dot")]
    fn builds_path(name: &str, expected: &str) {
        let name = DeckName::try_from(name).unwrap();
        assert_eq!(
            construct_path_from_name(Path::new("decks"), &name),
            PathBuf::from(expected)
        );
    }

    #[test_case("decks/Math.txt", "Math"; "simple")]
    #[test_case("decks/v1.2 notes.txt", "v1.2 notes"; "name with dot")]
    fn parses_name(path: &str, expected: &str) {
        assert_eq!(
            deck_name_from_path(Path::new(path)).unwrap().as_str(),
            expected
        );
    }

    #[test_case("decks/Math.md"; "wrong extension")]
    #[test_case("decks/Math"; "no extension")]
    #[test_case("decks/Math.TXT"; "uppercase extension")]
    fn rejects_other_files(path: &str) {
        assert_eq!(
            deck_name_from_path(Path::new(path)),
            Err(ParseError::NotADeckFile)
        );
    }

    #[test]
    fn round_trips_through_path() {
        let name = DeckName::try_from("Spanish verbs").unwrap();
        let path = construct_path_from_name(Path::new("data/decks"), &name);
        assert_eq!(deck_name_from_path(&path).unwrap(), name);
    }
}
