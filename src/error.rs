//! # Error Types
//!
//! This module defines all error types for the fretcards library.
//!
//! The engine itself is total over its static catalogue: the only errors come
//! from looking things up by name, deriving a triad from notes that do not
//! form one, catalogue validation, configuration files and serialization.
//!
//! Calling [`fret_for`](crate::fret_for) with an unsupported string is a
//! programming error and panics instead of returning one of these.
//!
//! ## Usage
//! ```rust
//! use fretcards::{find_deck, FretcardsError};
//!
//! match find_deck("Lydian Licks") {
//!     Ok(deck) => println!("{} cards", deck.cards.len()),
//!     Err(FretcardsError::UnknownDeck(title)) => eprintln!("No deck named {}", title),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

use crate::note::Note;

#[derive(Error, Debug)]
pub enum FretcardsError {
    /// No catalogue deck carries the requested title.
    ///
    /// # Example
    /// ```
    /// # use fretcards::FretcardsError;
    /// let err = FretcardsError::UnknownDeck("Blues Licks".to_string());
    /// assert_eq!(err.to_string(), "Unknown deck: Blues Licks");
    /// ```
    #[error("Unknown deck: {0}")]
    UnknownDeck(String),

    /// Three stacked notes whose intervals are not a major, minor or diminished triad.
    ///
    /// # Example
    /// ```
    /// # use fretcards::{FretcardsError, Note};
    /// let err = FretcardsError::UnsupportedTriad {
    ///     root: Note::C,
    ///     third: Note::D,
    ///     fifth: Note::G,
    /// };
    /// assert_eq!(err.to_string(), "Unsupported triad: C D G");
    /// ```
    #[error("Unsupported triad: {root} {third} {fifth}")]
    UnsupportedTriad { root: Note, third: Note, fifth: Note },

    /// A fretboard diagram breaks its window or string contract.
    ///
    /// `card` is 1-indexed within the deck.
    ///
    /// # Example
    /// ```
    /// # use fretcards::FretcardsError;
    /// let err = FretcardsError::InvalidDiagram {
    ///     deck: "C Major".to_string(),
    ///     card: 4,
    ///     message: "dot on string 1 at fret 9 lies outside frets 1..=6".to_string(),
    /// };
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Invalid diagram in deck 'C Major', card 4: dot on string 1 at fret 9 lies outside frets 1..=6"
    /// );
    /// ```
    #[error("Invalid diagram in deck '{deck}', card {card}: {message}")]
    InvalidDiagram {
        deck: String,
        card: usize,
        message: String,
    },

    /// Invalid study configuration.
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, FretcardsError>;
