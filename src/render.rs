//! Plain-text rendering of cards and fretboard diagrams.
//!
//! Strings run top to bottom from high E (string 1) to low E (string 6),
//! frets left to right across the diagram window:
//!
//! ```text
//! C E G
//!      2   3   4   5   6
//! e |---|-5-|---|---|---|
//! B |---|---|---|-3-|---|
//! G |---|---|---|-R-|---|
//! D |---|---|---|---|---|
//! A |---|---|---|---|---|
//! E |---|---|---|---|---|
//! ```

use crate::card::{CardContent, Deck, Flashcard, FretboardDiagram};

const STRING_NAMES: [&str; 6] = ["e", "B", "G", "D", "A", "E"];

/// Draw a diagram as a six-line text fretboard headed by its label.
pub fn diagram_to_text(diagram: &FretboardDiagram) -> String {
    let first = diagram.start_fret;
    let highest_dot = diagram.dots.iter().map(|d| d.fret).max().unwrap_or(first);
    let last = first
        .saturating_add(diagram.fret_count.max(1) - 1)
        .max(highest_dot);

    let mut text = String::new();
    text.push_str(&diagram.text_label);
    text.push('\n');

    text.push_str("   ");
    for fret in first..=last {
        text.push_str(&format!(" {:^3}", fret));
    }
    text.push('\n');

    for (i, name) in STRING_NAMES.iter().enumerate() {
        let string = i as u8 + 1;
        text.push_str(&format!("{} |", name));
        for fret in first..=last {
            let label = diagram
                .dots
                .iter()
                .find(|d| d.string == string && d.fret == fret)
                .map(|d| d.label.as_str())
                .unwrap_or("");
            text.push_str(&format!("{:-^3}|", label));
        }
        text.push('\n');
    }

    text
}

/// The visible face of a card.
///
/// Unflipped shows the question. Flipped shows the rich answer when the
/// card has one, and the plain answer text otherwise.
pub fn card_face(card: &Flashcard, flipped: bool) -> String {
    if !flipped {
        return card.question.clone();
    }
    match &card.answer_content {
        None => card.answer.clone(),
        Some(CardContent::Text { value }) => value.clone(),
        Some(CardContent::FretboardDiagram(diagram)) => diagram_to_text(diagram),
    }
}

/// Every card of a deck, question then answer face
pub fn deck_to_text(deck: &Deck, show_diagrams: bool) -> String {
    let mut text = format!("{} ({} cards)\n", deck.title, deck.cards.len());
    for (i, card) in deck.cards.iter().enumerate() {
        text.push('\n');
        text.push_str(&format!("{:>2}. {}\n", i + 1, card.question));
        let answer = if show_diagrams {
            card_face(card, true)
        } else {
            card.answer.clone()
        };
        text.push_str(&answer);
        if !answer.ends_with('\n') {
            text.push('\n');
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triad::{ChordQuality, Inversion, Triad};
    use crate::Note;

    #[test]
    fn test_c_major_diagram() {
        let c = Triad::new(Note::C, Note::E, Note::G, ChordQuality::Major);
        let text = diagram_to_text(&c.voicing(Inversion::Root));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "C E G");
        assert_eq!(lines[1], "     2   3   4   5   6 ");
        assert_eq!(lines[2], "e |---|-5-|---|---|---|");
        assert_eq!(lines[3], "B |---|---|---|-3-|---|");
        assert_eq!(lines[4], "G |---|---|---|-R-|---|");
        assert_eq!(lines[7], "E |---|---|---|---|---|");
    }

    #[test]
    fn test_window_clamped_at_last_fret() {
        let diagram = FretboardDiagram {
            text_label: "high".to_string(),
            dots: vec![crate::card::FretboardDot {
                string: 2,
                fret: 252,
                dot_type: crate::card::DotType::Root,
                label: "R".to_string(),
            }],
            start_fret: 250,
            fret_count: 10,
        };
        let text = diagram_to_text(&diagram);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[1], "    250 251 252 253 254 255");
        assert_eq!(lines[3], "B |---|---|-R-|---|---|---|");
    }

    #[test]
    fn test_card_faces() {
        let plain = Flashcard::text("Q?", "plain");
        assert_eq!(card_face(&plain, false), "Q?");
        assert_eq!(card_face(&plain, true), "plain");

        let rich = Flashcard {
            question: "Q?".to_string(),
            answer: "plain".to_string(),
            answer_content: Some(CardContent::Text {
                value: "rich".to_string(),
            }),
        };
        assert_eq!(card_face(&rich, true), "rich");

        let c = Triad::new(Note::C, Note::E, Note::G, ChordQuality::Major);
        let cards = c.to_flashcards();
        assert!(card_face(&cards[0], true).starts_with("C E G\n"));
    }

    #[test]
    fn test_deck_text_without_diagrams() {
        let deck = Deck {
            title: "Tiny".to_string(),
            cards: vec![Flashcard::text("Q1", "A1")],
        };
        assert_eq!(deck_to_text(&deck, false), "Tiny (1 cards)\n\n 1. Q1\nA1\n");
    }
}
