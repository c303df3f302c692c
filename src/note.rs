//! Natural notes and where they sit on the top three strings in standard tuning.

use serde::Serialize;
use std::fmt;

/// One of the seven natural notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Note {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Note {
    pub const ALL: [Note; 7] = [
        Note::C,
        Note::D,
        Note::E,
        Note::F,
        Note::G,
        Note::A,
        Note::B,
    ];

    /// Semitone offset from C (0-11)
    pub fn semitone(self) -> u8 {
        match self {
            Note::C => 0,
            Note::D => 2,
            Note::E => 4,
            Note::F => 5,
            Note::G => 7,
            Note::A => 9,
            Note::B => 11,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Note::C => "C",
            Note::D => "D",
            Note::E => "E",
            Note::F => "F",
            Note::G => "G",
            Note::A => "A",
            Note::B => "B",
        }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Open-string semitone in standard tuning: 1 = high E, 2 = B, 3 = G.
///
/// Only the G-B-E group is tuned here; triad voicings never reach lower strings.
pub fn open_string_semitone(string: u8) -> Option<u8> {
    match string {
        1 => Some(4),
        2 => Some(11),
        3 => Some(7),
        _ => None,
    }
}

/// Fret where `note` falls on `string`, always in `1..=12`.
///
/// A note that would land on the open string is placed at fret 12 instead,
/// so every position is fretted.
///
/// # Panics
/// If `string` is not 1, 2 or 3. That is a catalogue authoring bug, not a
/// runtime condition.
///
/// # Example
/// ```
/// use fretcards::{fret_for, Note};
///
/// assert_eq!(fret_for(Note::C, 3), 5);
/// assert_eq!(fret_for(Note::E, 1), 12);
/// ```
pub fn fret_for(note: Note, string: u8) -> u8 {
    let open = open_string_semitone(string)
        .unwrap_or_else(|| panic!("Unsupported string: {}", string));
    let fret = (note.semitone() + 12 - open) % 12;
    if fret == 0 {
        12
    } else {
        fret
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semitones_are_distinct_and_in_octave() {
        let mut semitones: Vec<u8> = Note::ALL.iter().map(|n| n.semitone()).collect();
        assert_eq!(semitones, vec![0, 2, 4, 5, 7, 9, 11]);
        semitones.dedup();
        assert_eq!(semitones.len(), 7);
    }

    #[test]
    fn test_fret_for_never_open() {
        for note in Note::ALL {
            for string in 1..=3 {
                let fret = fret_for(note, string);
                assert!((1..=12).contains(&fret), "{} on string {} -> {}", note, string, fret);
            }
        }
    }

    #[test]
    fn test_fret_for_known_positions() {
        assert_eq!(fret_for(Note::C, 3), 5);
        assert_eq!(fret_for(Note::E, 2), 5);
        assert_eq!(fret_for(Note::G, 1), 3);
        assert_eq!(fret_for(Note::B, 2), 12); // open B
        assert_eq!(fret_for(Note::G, 3), 12); // open G
        assert_eq!(fret_for(Note::F, 1), 1);
    }

    #[test]
    #[should_panic(expected = "Unsupported string: 4")]
    fn test_fret_for_rejects_low_strings() {
        fret_for(Note::D, 4);
    }
}
