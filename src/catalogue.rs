//! The static deck catalogue.
//!
//! Built once per process on first use and shared read-only afterwards.

use std::sync::OnceLock;

use crate::card::Deck;
use crate::key::MusicalKey;
use crate::mode::all_mode_shapes;
use crate::shapes::TRIAD_SHAPES;

pub const TRIAD_SHAPES_DECK_TITLE: &str = "Triad Shapes (3-2-1)";
pub const MODE_SHAPES_DECK_TITLE: &str = "Mode Shapes (3NPS)";

static CATALOGUE: OnceLock<Vec<Deck>> = OnceLock::new();

/// The nine G-B-E triad grips
pub fn triad_shapes_321_deck() -> Deck {
    Deck {
        title: TRIAD_SHAPES_DECK_TITLE.to_string(),
        cards: TRIAD_SHAPES.iter().map(|s| s.to_flashcard()).collect(),
    }
}

/// The seven 3NPS mode fingerings
pub fn mode_shapes_deck() -> Deck {
    Deck {
        title: MODE_SHAPES_DECK_TITLE.to_string(),
        cards: all_mode_shapes().iter().map(|m| m.to_flashcard()).collect(),
    }
}

fn build_catalogue() -> Vec<Deck> {
    let mut decks = Vec::with_capacity(3);
    match MusicalKey::c_major() {
        Ok(key) => decks.push(key.to_deck()),
        Err(e) => tracing::error!("skipping C Major deck: {}", e),
    }
    decks.push(triad_shapes_321_deck());
    decks.push(mode_shapes_deck());
    tracing::debug!(
        decks = decks.len(),
        cards = decks.iter().map(|d| d.cards.len()).sum::<usize>(),
        "built deck catalogue"
    );
    decks
}

/// Every deck, in a fixed order: C Major, Triad Shapes (3-2-1), Mode Shapes (3NPS).
pub fn all_decks() -> &'static [Deck] {
    CATALOGUE.get_or_init(build_catalogue)
}
