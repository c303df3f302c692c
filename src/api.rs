//! # Public API
//!
//! Entry points for rendering and study front ends.
//!
//! - [`get_all_decks()`] - the full catalogue, in a stable order
//! - [`find_deck()`] - one deck by title (case-insensitive)
//! - [`export_deck()`] - a deck serialized to JSON or YAML
//!
//! ## Typical Usage
//!
//! ```rust
//! use fretcards::{get_all_decks, find_deck, export_deck, ExportFormat};
//!
//! let titles: Vec<&str> = get_all_decks().iter().map(|d| d.title.as_str()).collect();
//! assert_eq!(titles, ["C Major", "Triad Shapes (3-2-1)", "Mode Shapes (3NPS)"]);
//!
//! let deck = find_deck("c major")?;
//! assert_eq!(deck.cards.len(), 22);
//!
//! let json = export_deck(deck, ExportFormat::Json)?;
//! assert!(json.contains("\"answerContent\""));
//! # Ok::<(), fretcards::FretcardsError>(())
//! ```

use std::fmt;
use std::str::FromStr;

use crate::card::Deck;
use crate::catalogue::all_decks;
use crate::error::{FretcardsError, Result};

/// Every deck: C Major, Triad Shapes (3-2-1), Mode Shapes (3NPS).
///
/// Built on first call and shared for the life of the process.
pub fn get_all_decks() -> &'static [Deck] {
    all_decks()
}

/// Look up a catalogue deck by title, ignoring case.
///
/// # Errors
/// [`FretcardsError::UnknownDeck`] if no deck carries that title.
pub fn find_deck(title: &str) -> Result<&'static Deck> {
    let wanted = title.trim();
    all_decks()
        .iter()
        .find(|deck| deck.title.eq_ignore_ascii_case(wanted))
        .ok_or_else(|| FretcardsError::UnknownDeck(wanted.to_string()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Json,
    Yaml,
}

impl FromStr for ExportFormat {
    type Err = FretcardsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "yaml" | "yml" => Ok(ExportFormat::Yaml),
            other => Err(FretcardsError::ConfigError(format!(
                "unknown export format '{}', expected json or yaml",
                other
            ))),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Json => f.write_str("json"),
            ExportFormat::Yaml => f.write_str("yaml"),
        }
    }
}

/// Serialize a deck for a front end.
pub fn export_deck(deck: &Deck, format: ExportFormat) -> Result<String> {
    let text = match format {
        ExportFormat::Json => serde_json::to_string_pretty(deck)?,
        ExportFormat::Yaml => serde_yaml::to_string(deck)?,
    };
    Ok(text)
}
