use std::{borrow::Borrow, fmt, ops::Deref, str::FromStr};

/// A validated deck name.
///
/// The name doubles as the stem of the deck's file on disk, so it must not be
/// blank and must not contain a path separator (`/` or `\`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DeckName(String);

impl DeckName {
    /// Creates a new `DeckName` from a string.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDeckName`] if the string is empty, only whitespace, or
    /// contains `/` or `\`.
    pub fn new(s: String) -> Result<Self, InvalidDeckName> {
        if s.trim().is_empty() {
            return Err(InvalidDeckName::Blank);
        }

        if let Some(separator) = s.chars().find(|&c| c == '/' || c == '\\') {
            return Err(InvalidDeckName::PathSeparator {
                name: s,
                separator,
            });
        }

        Ok(Self(s))
    }

    /// Returns the string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for DeckName {
    type Error = InvalidDeckName;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for DeckName {
    type Error = InvalidDeckName;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value.to_string())
    }
}

impl FromStr for DeckName {
    type Err = InvalidDeckName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_string())
    }
}

impl AsRef<str> for DeckName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for DeckName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Deref for DeckName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for DeckName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when a string is not a legal deck name.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InvalidDeckName {
    /// The name is empty or only whitespace.
    #[error("deck name must not be blank")]
    Blank,

    /// The name contains a path separator.
    #[error("deck name '{name}' must not contain '{separator}'")]
    PathSeparator {
        /// The rejected name.
        name: String,
        /// The offending separator character.
        separator: char,
    },
}
