pub mod api;
pub mod card;
pub mod catalogue;
pub mod config;
pub mod error;
pub mod key;
pub mod logging;
pub mod mode;
pub mod note;
pub mod render;
pub mod session;
pub mod shapes;
pub mod triad;
pub mod validate;

pub use api::{export_deck, find_deck, get_all_decks, ExportFormat};
pub use card::{CardContent, Deck, DotType, Flashcard, FretboardDiagram, FretboardDot};
pub use catalogue::{all_decks, mode_shapes_deck, triad_shapes_321_deck};
pub use config::StudyConfig;
pub use error::{FretcardsError, Result};
pub use key::MusicalKey;
pub use mode::{all_mode_shapes, ModeDot, ModeShape};
pub use note::{fret_for, Note};
pub use session::{Advance, StudySession};
pub use shapes::{ShapeDot, StringGroup, TriadShape, TRIAD_SHAPES};
pub use triad::{ChordQuality, Inversion, Triad};
pub use validate::{validate_catalogue, validate_deck};
