//! # Mode Shape Generator
//!
//! Three-notes-per-string (3NPS) fingerings for the seven diatonic modes.
//!
//! Each mode is a fixed template of 18 relative fret offsets, three per
//! string, visited from the low E string up to the high E string. The
//! offsets are measured from the mode's root on the low E string.
//!
//! ## Degree Labels
//! A mode starting on scale degree `r` (Ionian = 1 ... Locrian = 7) labels
//! its 18 notes `((r - 1 + i) mod 7) + 1` for `i = 0..18`, with degree 1
//! drawn as "R". The pattern of fret spacings is what tells modes apart;
//! the labels just walk the scale.
//!
//! ## Rendering
//! Offsets are drawn [`DISPLAY_OFFSET`] frets up the neck so the root clears
//! the nut. The window always starts at fret 1.

use crate::card::{DotType, Flashcard, FretboardDiagram, FretboardDot};

/// Frets added to every relative offset when drawing (root lands on fret 3)
pub const DISPLAY_OFFSET: u8 = 3;

/// Notes in one 3NPS pattern: six strings, three notes each
pub const NOTES_PER_SHAPE: usize = 18;

/// String visited by each template slot, low E (6) to high E (1)
const SHAPE_STRINGS: [u8; NOTES_PER_SHAPE] = [6, 6, 6, 5, 5, 5, 4, 4, 4, 3, 3, 3, 2, 2, 2, 1, 1, 1];

const DEGREE_LABELS: [&str; 7] = ["R", "2", "3", "4", "5", "6", "7"];

/// A static fingering template: per-string offsets from low E up to high E.
struct ModeTemplate {
    name: &'static str,
    root_degree: u8,
    offsets: [[u8; 3]; 6],
}

const MODE_TEMPLATES: [ModeTemplate; 7] = [
    ModeTemplate {
        name: "Ionian",
        root_degree: 1,
        offsets: [[0, 2, 4], [0, 2, 4], [1, 2, 4], [1, 2, 4], [2, 4, 5], [2, 4, 5]],
    },
    ModeTemplate {
        name: "Dorian",
        root_degree: 2,
        offsets: [[0, 2, 3], [0, 2, 4], [0, 2, 4], [0, 2, 4], [2, 3, 5], [2, 3, 5]],
    },
    ModeTemplate {
        name: "Phrygian",
        root_degree: 3,
        offsets: [[0, 1, 3], [0, 2, 3], [0, 2, 3], [0, 2, 4], [1, 3, 5], [1, 3, 5]],
    },
    ModeTemplate {
        name: "Lydian",
        root_degree: 4,
        offsets: [[0, 2, 4], [1, 2, 4], [1, 2, 4], [1, 3, 4], [2, 4, 5], [2, 4, 6]],
    },
    ModeTemplate {
        name: "Mixolydian",
        root_degree: 5,
        offsets: [[0, 2, 4], [0, 2, 4], [0, 2, 4], [1, 2, 4], [2, 3, 5], [2, 4, 5]],
    },
    ModeTemplate {
        name: "Aeolian",
        root_degree: 6,
        offsets: [[0, 2, 3], [0, 2, 3], [0, 2, 4], [0, 2, 4], [1, 3, 5], [2, 3, 5]],
    },
    ModeTemplate {
        name: "Locrian",
        root_degree: 7,
        offsets: [[0, 1, 3], [0, 1, 3], [0, 2, 3], [0, 2, 3], [1, 3, 5], [1, 3, 5]],
    },
];

/// One note of a mode fingering, relative to the low-E root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeDot {
    pub string: u8,
    pub relative_offset: u8,
    pub degree_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeShape {
    pub name: &'static str,
    pub root_degree: u8,
    pub dots: Vec<ModeDot>,
}

/// Degree label for each of the 18 slots of a mode starting on `root_degree`.
pub fn degree_labels(root_degree: u8) -> [&'static str; NOTES_PER_SHAPE] {
    std::array::from_fn(|i| DEGREE_LABELS[(usize::from(root_degree) - 1 + i) % 7])
}

impl ModeShape {
    fn from_template(template: &ModeTemplate) -> Self {
        let labels = degree_labels(template.root_degree);
        let dots = template
            .offsets
            .iter()
            .flatten()
            .zip(SHAPE_STRINGS)
            .zip(labels)
            .map(|((&relative_offset, string), degree_label)| ModeDot {
                string,
                relative_offset,
                degree_label,
            })
            .collect();

        Self {
            name: template.name,
            root_degree: template.root_degree,
            dots,
        }
    }

    pub fn to_flashcard(&self) -> Flashcard {
        let dots: Vec<FretboardDot> = self
            .dots
            .iter()
            .map(|dot| FretboardDot {
                string: dot.string,
                fret: dot.relative_offset + DISPLAY_OFFSET,
                dot_type: DotType::for_label(dot.degree_label),
                label: dot.degree_label.to_string(),
            })
            .collect();
        let max_fret = dots.iter().map(|d| d.fret).max().unwrap_or(DISPLAY_OFFSET);

        Flashcard::with_diagram(
            self.name,
            self.name,
            FretboardDiagram {
                text_label: self.name.to_string(),
                dots,
                start_fret: 1,
                fret_count: max_fret + 1,
            },
        )
    }
}

/// The seven modes, Ionian through Locrian
pub fn all_mode_shapes() -> Vec<ModeShape> {
    MODE_TEMPLATES.iter().map(ModeShape::from_template).collect()
}
