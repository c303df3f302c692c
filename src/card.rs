//! Flashcard data types
//!
//! Cards, decks and the diagram payload handed to rendering collaborators.
//! Field names serialize in camelCase so a JSON consumer sees
//! `answerContent`, `startFret` and `fretCount`.

use serde::Serialize;

/// Marker colour class for a fretboard dot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DotType {
    Root,
    Interval,
}

impl DotType {
    /// Root for the "R" label, interval for everything else.
    pub fn for_label(label: &str) -> Self {
        if label == "R" {
            DotType::Root
        } else {
            DotType::Interval
        }
    }
}

/// One playable note marker on a diagram
///
/// # Fields
/// - `string`: 1 = high E ... 6 = low E
/// - `fret`: absolute fret position
/// - `label`: interval or degree label drawn inside the dot ("R", "♭3", "5", ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FretboardDot {
    pub string: u8,
    pub fret: u8,
    #[serde(rename = "type")]
    pub dot_type: DotType,
    pub label: String,
}

/// A diagram answer: the dots plus the fret window to frame them in.
///
/// Every dot's fret lies in `start_fret..=start_fret + fret_count`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FretboardDiagram {
    pub text_label: String,
    pub dots: Vec<FretboardDot>,
    pub start_fret: u8,
    pub fret_count: u8,
}

impl FretboardDiagram {
    /// Last fret covered by the window (inclusive). May exceed 255.
    pub fn end_fret(&self) -> u16 {
        u16::from(self.start_fret) + u16::from(self.fret_count)
    }

    pub fn contains_fret(&self, fret: u8) -> bool {
        (u16::from(self.start_fret)..=self.end_fret()).contains(&u16::from(fret))
    }
}

/// Rich answer payload for a card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CardContent {
    Text { value: String },
    FretboardDiagram(FretboardDiagram),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer_content: Option<CardContent>,
}

impl Flashcard {
    /// Plain-text card with no rich answer
    pub fn text(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            answer_content: None,
        }
    }

    pub fn with_diagram(
        question: impl Into<String>,
        answer: impl Into<String>,
        diagram: FretboardDiagram,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            answer_content: Some(CardContent::FretboardDiagram(diagram)),
        }
    }

    pub fn diagram(&self) -> Option<&FretboardDiagram> {
        match &self.answer_content {
            Some(CardContent::FretboardDiagram(diagram)) => Some(diagram),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deck {
    pub title: String,
    pub cards: Vec<Flashcard>,
}
