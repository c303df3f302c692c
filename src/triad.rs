//! # Triad Voicing Engine
//!
//! Turns a [`Triad`] into three playable voicings on the G-B-E string group,
//! one per inversion, each packaged as a flashcard with a fretboard diagram.
//!
//! ## Algorithm (per inversion)
//! 1. Rotate (root, third, fifth) by the inversion and lay the result on
//!    strings 3, 2, 1 (bass to treble).
//! 2. Look up each note's fret with [`fret_for`].
//! 3. Compact: while the span exceeds [`MAX_SPAN`] frets, raise the current
//!    lowest fret by an octave (at most [`MAX_SHIFTS`] times).
//! 4. Label dots by chord role and quality ("R", "3"/"♭3", "5"/"♭5").
//! 5. Frame the window one fret below the lowest note, at least 4 frets wide.
//!
//! ## Example
//! ```rust
//! use fretcards::{ChordQuality, Note, Triad};
//!
//! let c = Triad::new(Note::C, Note::E, Note::G, ChordQuality::Major);
//! let cards = c.to_flashcards();
//!
//! assert_eq!(cards.len(), 3);
//! assert_eq!(cards[0].question, "Root inversion C");
//! assert_eq!(cards[0].answer, "C E G");
//! ```

use serde::Serialize;

use crate::card::{DotType, Flashcard, FretboardDiagram, FretboardDot};
use crate::note::{fret_for, Note};

/// Widest playable span, in frets, for a three-note shape
pub const MAX_SPAN: u8 = 4;

/// Octave shifts attempted before a wide shape is returned as-is
pub const MAX_SHIFTS: usize = 3;

/// Strings a triad is voiced on, bass to treble (G, B, high E)
pub const TRIAD_STRINGS: [u8; 3] = [3, 2, 1];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChordQuality {
    Major,
    Minor,
    Diminished,
}

impl ChordQuality {
    pub const ALL: [ChordQuality; 3] = [
        ChordQuality::Major,
        ChordQuality::Minor,
        ChordQuality::Diminished,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            ChordQuality::Major => "Major",
            ChordQuality::Minor => "Minor",
            ChordQuality::Diminished => "Diminished",
        }
    }

    /// Chord-symbol suffix appended to the root name
    pub fn suffix(self) -> &'static str {
        match self {
            ChordQuality::Major => "",
            ChordQuality::Minor => "m",
            ChordQuality::Diminished => "dim",
        }
    }

    /// Classify a triad by its third and fifth above the root, in semitones.
    ///
    /// Major third + perfect fifth = major, minor third + perfect fifth = minor,
    /// minor third + diminished fifth = diminished. Anything else is `None`.
    pub fn from_intervals(third: u8, fifth: u8) -> Option<Self> {
        match (third, fifth) {
            (4, 7) => Some(ChordQuality::Major),
            (3, 7) => Some(ChordQuality::Minor),
            (3, 6) => Some(ChordQuality::Diminished),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Inversion {
    Root,
    First,
    Second,
}

impl Inversion {
    pub const ALL: [Inversion; 3] = [Inversion::Root, Inversion::First, Inversion::Second];

    /// Name used on shape-library cards ("Root Position", "1st Inversion", ...)
    pub fn display_name(self) -> &'static str {
        match self {
            Inversion::Root => "Root Position",
            Inversion::First => "1st Inversion",
            Inversion::Second => "2nd Inversion",
        }
    }

    /// Name used on key-deck voicing cards ("Root inversion", "1st inversion", ...)
    pub fn question_name(self) -> &'static str {
        match self {
            Inversion::Root => "Root inversion",
            Inversion::First => "1st inversion",
            Inversion::Second => "2nd inversion",
        }
    }

    /// Chord roles from bass to treble for this inversion
    pub fn roles(self) -> [TriadRole; 3] {
        let mut roles = [TriadRole::Root, TriadRole::Third, TriadRole::Fifth];
        roles.rotate_left(self as usize);
        roles
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriadRole {
    Root,
    Third,
    Fifth,
}

/// Interval label for a chord tone
pub fn interval_label(quality: ChordQuality, role: TriadRole) -> &'static str {
    match role {
        TriadRole::Root => "R",
        TriadRole::Third => match quality {
            ChordQuality::Major => "3",
            ChordQuality::Minor | ChordQuality::Diminished => "\u{266D}3",
        },
        TriadRole::Fifth => match quality {
            ChordQuality::Major | ChordQuality::Minor => "5",
            ChordQuality::Diminished => "\u{266D}5",
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Triad {
    pub root: Note,
    pub third: Note,
    pub fifth: Note,
    pub quality: ChordQuality,
}

impl Triad {
    pub fn new(root: Note, third: Note, fifth: Note, quality: ChordQuality) -> Self {
        Self {
            root,
            third,
            fifth,
            quality,
        }
    }

    /// Build a triad from stacked notes, inferring the quality from its intervals.
    pub fn stacked(root: Note, third: Note, fifth: Note) -> Option<Self> {
        let above = |note: Note| (note.semitone() + 12 - root.semitone()) % 12;
        let quality = ChordQuality::from_intervals(above(third), above(fifth))?;
        Some(Self::new(root, third, fifth, quality))
    }

    /// Chord symbol: "C", "Dm", "Bdim"
    pub fn label(&self) -> String {
        format!("{}{}", self.root, self.quality.suffix())
    }

    pub fn note(&self, role: TriadRole) -> Note {
        match role {
            TriadRole::Root => self.root,
            TriadRole::Third => self.third,
            TriadRole::Fifth => self.fifth,
        }
    }

    /// Notes bass to treble for an inversion
    pub fn notes_for(&self, inversion: Inversion) -> [Note; 3] {
        inversion.roles().map(|role| self.note(role))
    }

    /// Voice one inversion on the G-B-E strings.
    pub fn voicing(&self, inversion: Inversion) -> FretboardDiagram {
        let roles = inversion.roles();
        let raw = [0, 1, 2].map(|i| fret_for(self.note(roles[i]), TRIAD_STRINGS[i]));
        let frets = make_compact(raw);

        let dots: Vec<FretboardDot> = (0..3)
            .map(|i| {
                let label = interval_label(self.quality, roles[i]);
                FretboardDot {
                    string: TRIAD_STRINGS[i],
                    fret: frets[i],
                    dot_type: DotType::for_label(label),
                    label: label.to_string(),
                }
            })
            .collect();

        let (start_fret, fret_count) = diagram_window(&frets);
        FretboardDiagram {
            text_label: self.spelling(inversion),
            dots,
            start_fret,
            fret_count,
        }
    }

    /// One card per inversion: root, 1st, 2nd.
    pub fn to_flashcards(&self) -> Vec<Flashcard> {
        Inversion::ALL
            .iter()
            .map(|&inversion| {
                let answer = self.spelling(inversion);
                Flashcard::with_diagram(
                    format!("{} {}", inversion.question_name(), self.label()),
                    answer,
                    self.voicing(inversion),
                )
            })
            .collect()
    }

    fn spelling(&self, inversion: Inversion) -> String {
        self.notes_for(inversion)
            .iter()
            .map(|n| n.name())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn span(frets: &[u8]) -> u8 {
    let max = frets.iter().copied().max().unwrap_or(0);
    let min = frets.iter().copied().min().unwrap_or(0);
    max - min
}

/// Pull a shape into one hand position by raising its lowest note an octave.
///
/// The minimum is re-read on every pass, so shifts can cascade. After
/// [`MAX_SHIFTS`] attempts the shape is returned even if still too wide.
/// Shifted frets saturate at 255; real voicings never pass fret 48.
///
/// ```
/// use fretcards::triad::make_compact;
///
/// assert_eq!(make_compact([5, 5, 3]), [5, 5, 3]);
/// assert_eq!(make_compact([2, 1, 12]), [14, 13, 12]);
/// ```
pub fn make_compact(frets: [u8; 3]) -> [u8; 3] {
    let mut result = frets;
    for _ in 0..MAX_SHIFTS {
        if span(&result) <= MAX_SPAN {
            break;
        }
        // min_by_key keeps the first of equal minima
        let lowest = (0..result.len()).min_by_key(|&i| result[i]).unwrap_or(0);
        result[lowest] = result[lowest].saturating_add(12);
    }
    result
}

/// Fret window for a voicing: `(start_fret, fret_count)`.
///
/// Starts one fret below the lowest note (never below fret 1) and spans at
/// least 4 frets with one spare fret above the highest note.
pub fn diagram_window(frets: &[u8]) -> (u8, u8) {
    let min = frets.iter().copied().min().unwrap_or(1);
    let max = frets.iter().copied().max().unwrap_or(1);
    let start = min.saturating_sub(1).max(1);
    let count = max.saturating_sub(start).saturating_add(2).max(4);
    (start, count)
}
