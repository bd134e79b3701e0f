mod directory;
mod path_parser;
/// The line-oriented text format of deck files.
pub mod record;

pub use directory::DeckStore;
pub use path_parser::{
    DECK_FILE_EXTENSION, ParseError, construct_path_from_name, deck_name_from_path,
};
