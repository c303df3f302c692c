//! Musical keys and their study decks.

use serde::Serialize;

use crate::card::{Deck, Flashcard};
use crate::error::{FretcardsError, Result};
use crate::note::Note;
use crate::triad::Triad;

/// A key: its seven scale notes and the triad built on each degree.
///
/// `triads[i]` stacks `notes[i]`, `notes[i + 2]` and `notes[i + 4]` (mod 7).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MusicalKey {
    pub name: String,
    pub notes: [Note; 7],
    pub triads: [Triad; 7],
}

fn stack_thirds(notes: &[Note; 7], degree: usize) -> Result<Triad> {
    let (root, third, fifth) = (
        notes[degree],
        notes[(degree + 2) % 7],
        notes[(degree + 4) % 7],
    );
    Triad::stacked(root, third, fifth).ok_or(FretcardsError::UnsupportedTriad { root, third, fifth })
}

impl MusicalKey {
    /// Build a key by stacking thirds on each scale degree.
    ///
    /// Each triad's quality follows from its intervals; a degree that does not
    /// stack into a major, minor or diminished triad is an error.
    pub fn diatonic(name: impl Into<String>, notes: [Note; 7]) -> Result<Self> {
        let [t0, t1, t2, t3, t4, t5, t6] = std::array::from_fn(|degree| stack_thirds(&notes, degree));
        let triads = [t0?, t1?, t2?, t3?, t4?, t5?, t6?];

        Ok(Self {
            name: name.into(),
            notes,
            triads,
        })
    }

    /// C major: C D E F G A B, chords C Dm Em F G Am Bdim
    pub fn c_major() -> Result<Self> {
        Self::diatonic("C Major", Note::ALL)
    }

    /// Overview card followed by three inversion cards per triad.
    pub fn to_deck(&self) -> Deck {
        let notes = self
            .notes
            .iter()
            .map(|n| n.name())
            .collect::<Vec<_>>()
            .join(" ");
        let chords = self
            .triads
            .iter()
            .map(Triad::label)
            .collect::<Vec<_>>()
            .join(", ");

        let mut cards = vec![Flashcard::text(
            format!("What are the notes and chords of {}?", self.name),
            format!("Notes: {} | Chords: {}", notes, chords),
        )];
        cards.extend(self.triads.iter().flat_map(Triad::to_flashcards));

        Deck {
            title: self.name.clone(),
            cards,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triad::ChordQuality;

    #[test]
    fn test_c_major_chords() {
        let key = MusicalKey::c_major().unwrap();
        assert_eq!(key.notes, Note::ALL);
        assert_eq!(
            key.triads,
            [
                Triad::new(Note::C, Note::E, Note::G, ChordQuality::Major),
                Triad::new(Note::D, Note::F, Note::A, ChordQuality::Minor),
                Triad::new(Note::E, Note::G, Note::B, ChordQuality::Minor),
                Triad::new(Note::F, Note::A, Note::C, ChordQuality::Major),
                Triad::new(Note::G, Note::B, Note::D, ChordQuality::Major),
                Triad::new(Note::A, Note::C, Note::E, ChordQuality::Minor),
                Triad::new(Note::B, Note::D, Note::F, ChordQuality::Diminished),
            ]
        );
    }

    #[test]
    fn test_diatonic_qualities_follow_degree() {
        // A natural minor reuses the white keys starting on A
        let notes = [Note::A, Note::B, Note::C, Note::D, Note::E, Note::F, Note::G];
        let a_minor = MusicalKey::diatonic("A Minor", notes).unwrap();
        let qualities: Vec<ChordQuality> = a_minor.triads.iter().map(|t| t.quality).collect();
        assert_eq!(
            qualities,
            vec![
                ChordQuality::Minor,
                ChordQuality::Diminished,
                ChordQuality::Major,
                ChordQuality::Minor,
                ChordQuality::Minor,
                ChordQuality::Major,
                ChordQuality::Major,
            ]
        );
    }

    #[test]
    fn test_diatonic_rejects_non_tertian_scale() {
        let notes = [Note::C, Note::C, Note::D, Note::E, Note::F, Note::G, Note::A];
        let err = MusicalKey::diatonic("Broken", notes).unwrap_err();
        assert!(matches!(err, FretcardsError::UnsupportedTriad { .. }));
    }

    #[test]
    fn test_deck_shape() {
        let deck = MusicalKey::c_major().unwrap().to_deck();
        assert_eq!(deck.title, "C Major");
        assert_eq!(deck.cards.len(), 22);

        let overview = &deck.cards[0];
        assert_eq!(overview.question, "What are the notes and chords of C Major?");
        assert_eq!(
            overview.answer,
            "Notes: C D E F G A B | Chords: C, Dm, Em, F, G, Am, Bdim"
        );
        assert!(overview.answer_content.is_none());

        assert_eq!(deck.cards[1].question, "Root inversion C");
        assert_eq!(deck.cards[21].question, "2nd inversion Bdim");
    }
}
