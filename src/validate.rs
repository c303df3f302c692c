//! # Diagram Validation
//!
//! Checks that every fretboard diagram in a deck honours the contract the
//! rendering side relies on:
//! - the window starts at fret 1 or above and spans at least one fret
//! - the diagram has at least one dot
//! - every dot sits on a string in `1..=6`
//! - the window ends at or below fret 255
//! - every dot's fret lies in `start_fret..=start_fret + fret_count`
//!
//! A failure here is a catalogue authoring bug. The `check` command and
//! the test suite run it over the whole catalogue.
//!
//! ## Example
//! ```rust
//! use fretcards::{all_decks, validate_catalogue};
//!
//! validate_catalogue(all_decks())?;
//! # Ok::<(), fretcards::FretcardsError>(())
//! ```

use crate::card::{Deck, FretboardDiagram};
use crate::error::{FretcardsError, Result};

/// Validate every deck, stopping at the first broken diagram.
pub fn validate_catalogue(decks: &[Deck]) -> Result<()> {
    for deck in decks {
        validate_deck(deck)?;
    }
    Ok(())
}

/// Validate every diagram card in a deck
pub fn validate_deck(deck: &Deck) -> Result<()> {
    for (i, card) in deck.cards.iter().enumerate() {
        if let Some(diagram) = card.diagram() {
            validate_diagram(diagram).map_err(|message| FretcardsError::InvalidDiagram {
                deck: deck.title.clone(),
                card: i + 1,
                message,
            })?;
        }
    }
    tracing::debug!(deck = %deck.title, cards = deck.cards.len(), "deck validated");
    Ok(())
}

fn validate_diagram(diagram: &FretboardDiagram) -> std::result::Result<(), String> {
    if diagram.start_fret < 1 {
        return Err("window must start at fret 1 or above".to_string());
    }
    if diagram.fret_count < 1 {
        return Err("window must span at least one fret".to_string());
    }
    if diagram.end_fret() > u16::from(u8::MAX) {
        return Err(format!(
            "window exceeds fret range: frets {}..={}",
            diagram.start_fret,
            diagram.end_fret()
        ));
    }
    if diagram.dots.is_empty() {
        return Err("diagram has no dots".to_string());
    }

    for dot in &diagram.dots {
        if !(1..=6).contains(&dot.string) {
            return Err(format!("dot '{}' on nonexistent string {}", dot.label, dot.string));
        }
        if !diagram.contains_fret(dot.fret) {
            return Err(format!(
                "dot on string {} at fret {} lies outside frets {}..={}",
                dot.string,
                dot.fret,
                diagram.start_fret,
                diagram.end_fret()
            ));
        }
    }

    Ok(())
}
