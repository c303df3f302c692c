//! # Study Session
//!
//! Navigation state for working through one deck: a private (optionally
//! shuffled) copy of its cards, the current position and whether the current
//! card is showing its answer. The catalogue deck is never touched.
//!
//! ## Example
//! ```rust
//! use fretcards::{find_deck, Advance, StudySession};
//!
//! let deck = find_deck("Mode Shapes (3NPS)")?;
//! let mut session = StudySession::in_order(deck);
//!
//! assert_eq!(session.current().map(|c| c.question.as_str()), Some("Ionian"));
//! session.flip();
//! assert!(session.is_flipped());
//!
//! assert_eq!(session.next(), Advance::Moved);
//! assert!(!session.is_flipped());
//! assert_eq!(session.position(), 2);
//! # Ok::<(), fretcards::FretcardsError>(())
//! ```

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::card::{Deck, Flashcard};
use crate::config::StudyConfig;

/// Outcome of moving forward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the next card
    Moved,
    /// Already on the last card; the deck is done
    Completed,
}

#[derive(Debug, Clone)]
pub struct StudySession {
    title: String,
    cards: Vec<Flashcard>,
    index: usize,
    flipped: bool,
}

impl StudySession {
    /// Study the deck in catalogue order.
    pub fn in_order(deck: &Deck) -> Self {
        Self {
            title: deck.title.clone(),
            cards: deck.cards.clone(),
            index: 0,
            flipped: false,
        }
    }

    /// Study a copy of the deck shuffled with `rng`.
    pub fn shuffled<R: Rng + ?Sized>(deck: &Deck, rng: &mut R) -> Self {
        let mut session = Self::in_order(deck);
        session.cards.shuffle(rng);
        session
    }

    /// Order the cards as the configuration asks: unshuffled, seeded, or random.
    pub fn from_config(deck: &Deck, config: &StudyConfig) -> Self {
        let session = match (config.shuffle, config.seed) {
            (false, _) => Self::in_order(deck),
            (true, Some(seed)) => Self::shuffled(deck, &mut StdRng::seed_from_u64(seed)),
            (true, None) => Self::shuffled(deck, &mut rand::rng()),
        };
        tracing::debug!(
            deck = %session.title,
            cards = session.len(),
            shuffle = config.shuffle,
            seed = ?config.seed,
            "study session started"
        );
        session
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Cards in study order
    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    /// Card under study, `None` for an empty deck
    pub fn current(&self) -> Option<&Flashcard> {
        self.cards.get(self.index)
    }

    /// 1-based position of the current card, 0 when the deck is empty
    pub fn position(&self) -> usize {
        if self.cards.is_empty() {
            0
        } else {
            self.index + 1
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    /// Move to the next card, or report completion from the last one.
    pub fn next(&mut self) -> Advance {
        if self.index + 1 < self.cards.len() {
            self.index += 1;
            self.flipped = false;
            tracing::debug!(position = self.position(), "advanced");
            Advance::Moved
        } else {
            tracing::debug!(deck = %self.title, "session complete");
            Advance::Completed
        }
    }

    /// Move back one card; stays put on the first card.
    pub fn previous(&mut self) {
        if self.index > 0 {
            self.index -= 1;
            self.flipped = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered_deck(n: usize) -> Deck {
        Deck {
            title: "Numbers".to_string(),
            cards: (1..=n)
                .map(|i| Flashcard::text(format!("Q{}", i), format!("A{}", i)))
                .collect(),
        }
    }

    fn questions(session: &StudySession) -> Vec<String> {
        session.cards().iter().map(|c| c.question.clone()).collect()
    }

    #[test]
    fn test_walk_to_completion() {
        let deck = numbered_deck(3);
        let mut session = StudySession::in_order(&deck);

        assert_eq!(session.position(), 1);
        assert_eq!(session.next(), Advance::Moved);
        assert_eq!(session.next(), Advance::Moved);
        assert_eq!(session.current().unwrap().question, "Q3");
        assert_eq!(session.next(), Advance::Completed);
        assert_eq!(session.position(), 3);
    }

    #[test]
    fn test_previous_stops_at_first_card() {
        let deck = numbered_deck(2);
        let mut session = StudySession::in_order(&deck);
        session.flip();
        session.previous();
        assert_eq!(session.position(), 1);
        assert!(session.is_flipped());

        session.next();
        session.flip();
        session.previous();
        assert_eq!(session.position(), 1);
        assert!(!session.is_flipped());
    }

    #[test]
    fn test_flip_toggles() {
        let deck = numbered_deck(1);
        let mut session = StudySession::in_order(&deck);
        session.flip();
        session.flip();
        assert!(!session.is_flipped());
    }

    #[test]
    fn test_empty_deck() {
        let deck = numbered_deck(0);
        let mut session = StudySession::in_order(&deck);
        assert!(session.is_empty());
        assert!(session.current().is_none());
        assert_eq!(session.position(), 0);
        assert_eq!(session.next(), Advance::Completed);
        assert_eq!(session.position(), 0);
    }

    #[test]
    fn test_seeded_shuffle_is_reproducible_and_keeps_deck() {
        let deck = numbered_deck(20);
        let config = StudyConfig {
            seed: Some(7),
            ..StudyConfig::default()
        };
        let a = StudySession::from_config(&deck, &config);
        let b = StudySession::from_config(&deck, &config);
        assert_eq!(questions(&a), questions(&b));

        let mut sorted = questions(&a);
        sorted.sort();
        let mut original: Vec<String> = deck.cards.iter().map(|c| c.question.clone()).collect();
        original.sort();
        assert_eq!(sorted, original);

        // source deck untouched
        assert_eq!(deck.cards[0].question, "Q1");
    }

    #[test]
    fn test_unshuffled_config() {
        let deck = numbered_deck(5);
        let config = StudyConfig {
            shuffle: false,
            ..StudyConfig::default()
        };
        let session = StudySession::from_config(&deck, &config);
        assert_eq!(questions(&session), vec!["Q1", "Q2", "Q3", "Q4", "Q5"]);
    }
}
