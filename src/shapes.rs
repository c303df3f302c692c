//! # Triad Shape Library
//!
//! Hand-authored three-string triad grips on the G-B-E group: one shape per
//! chord quality and inversion, nine in all. Offsets are relative frets; a
//! shape is drawn [`SHAPE_DISPLAY_OFFSET`] frets up inside a fixed 5-fret
//! window starting at fret 1.

use crate::card::{DotType, Flashcard, FretboardDiagram, FretboardDot};
use crate::triad::{ChordQuality, Inversion};

pub const SHAPE_DISPLAY_OFFSET: u8 = 2;
pub const SHAPE_WINDOW_FRETS: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringGroup {
    /// Strings 3-2-1
    Gbe,
}

impl StringGroup {
    pub fn strings(self) -> [u8; 3] {
        match self {
            StringGroup::Gbe => [3, 2, 1],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeDot {
    pub string: u8,
    pub relative_offset: u8,
    pub interval_label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriadShape {
    pub quality: ChordQuality,
    pub inversion: Inversion,
    pub string_group: StringGroup,
    pub dots: [ShapeDot; 3],
}

const fn dot(string: u8, relative_offset: u8, interval_label: &'static str) -> ShapeDot {
    ShapeDot {
        string,
        relative_offset,
        interval_label,
    }
}

const fn gbe(quality: ChordQuality, inversion: Inversion, dots: [ShapeDot; 3]) -> TriadShape {
    TriadShape {
        quality,
        inversion,
        string_group: StringGroup::Gbe,
        dots,
    }
}

pub const TRIAD_SHAPES: [TriadShape; 9] = [
    gbe(
        ChordQuality::Major,
        Inversion::Root,
        [dot(3, 2, "R"), dot(2, 2, "3"), dot(1, 0, "5")],
    ),
    gbe(
        ChordQuality::Major,
        Inversion::First,
        [dot(3, 1, "3"), dot(2, 0, "5"), dot(1, 0, "R")],
    ),
    gbe(
        ChordQuality::Major,
        Inversion::Second,
        [dot(3, 0, "5"), dot(2, 1, "R"), dot(1, 0, "3")],
    ),
    gbe(
        ChordQuality::Minor,
        Inversion::Root,
        [dot(3, 2, "R"), dot(2, 1, "♭3"), dot(1, 0, "5")],
    ),
    gbe(
        ChordQuality::Minor,
        Inversion::First,
        [dot(3, 0, "♭3"), dot(2, 0, "5"), dot(1, 0, "R")],
    ),
    gbe(
        ChordQuality::Minor,
        Inversion::Second,
        [dot(3, 1, "5"), dot(2, 2, "R"), dot(1, 0, "♭3")],
    ),
    gbe(
        ChordQuality::Diminished,
        Inversion::Root,
        [dot(3, 3, "R"), dot(2, 2, "♭3"), dot(1, 0, "♭5")],
    ),
    gbe(
        ChordQuality::Diminished,
        Inversion::First,
        [dot(3, 1, "♭3"), dot(2, 0, "♭5"), dot(1, 1, "R")],
    ),
    gbe(
        ChordQuality::Diminished,
        Inversion::Second,
        [dot(3, 0, "♭5"), dot(2, 2, "R"), dot(1, 0, "♭3")],
    ),
];

impl TriadShape {
    /// "Minor 1st Inversion"
    pub fn label(&self) -> String {
        format!(
            "{} {}",
            self.quality.display_name(),
            self.inversion.display_name()
        )
    }

    pub fn to_flashcard(&self) -> Flashcard {
        let dots = self
            .dots
            .iter()
            .map(|d| FretboardDot {
                string: d.string,
                fret: d.relative_offset + SHAPE_DISPLAY_OFFSET,
                dot_type: DotType::for_label(d.interval_label),
                label: d.interval_label.to_string(),
            })
            .collect();
        let label = self.label();

        Flashcard::with_diagram(
            label.clone(),
            label.clone(),
            FretboardDiagram {
                text_label: label,
                dots,
                start_fret: 1,
                fret_count: SHAPE_WINDOW_FRETS,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triad::{interval_label, TriadRole};

    #[test]
    fn test_one_shape_per_quality_and_inversion() {
        for quality in ChordQuality::ALL {
            for inversion in Inversion::ALL {
                let count = TRIAD_SHAPES
                    .iter()
                    .filter(|s| s.quality == quality && s.inversion == inversion)
                    .count();
                assert_eq!(count, 1, "{:?} {:?}", quality, inversion);
            }
        }
    }

    #[test]
    fn test_shapes_sit_on_their_string_group() {
        for shape in &TRIAD_SHAPES {
            let strings: Vec<u8> = shape.dots.iter().map(|d| d.string).collect();
            assert_eq!(strings, shape.string_group.strings().to_vec());
        }
    }

    #[test]
    fn test_labels_agree_with_voicing_engine() {
        // Bass-to-treble labels must follow the inversion's role rotation
        for shape in &TRIAD_SHAPES {
            let expected: Vec<&str> = shape
                .inversion
                .roles()
                .iter()
                .map(|&role| interval_label(shape.quality, role))
                .collect();
            let actual: Vec<&str> = shape.dots.iter().map(|d| d.interval_label).collect();
            assert_eq!(actual, expected, "{}", shape.label());
        }
        assert_eq!(interval_label(ChordQuality::Minor, TriadRole::Third), "♭3");
    }

    #[test]
    fn test_flashcard() {
        let card = TRIAD_SHAPES[6].to_flashcard();
        assert_eq!(card.question, "Diminished Root Position");
        assert_eq!(card.answer, card.question);

        let diagram = card.diagram().unwrap();
        assert_eq!((diagram.start_fret, diagram.fret_count), (1, 5));
        let frets: Vec<u8> = diagram.dots.iter().map(|d| d.fret).collect();
        assert_eq!(frets, vec![5, 4, 2]);
        assert_eq!(diagram.dots[0].dot_type, DotType::Root);
    }
}
