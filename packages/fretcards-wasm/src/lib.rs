use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct BindingError {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    deck: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    card: Option<usize>,
}

fn to_binding_error(e: fretcards::FretcardsError) -> BindingError {
    match e {
        fretcards::FretcardsError::InvalidDiagram {
            deck,
            card,
            message,
        } => BindingError {
            message,
            deck: Some(deck),
            card: Some(card),
        },
        other => BindingError {
            message: other.to_string(),
            deck: None,
            card: None,
        },
    }
}

fn error_json(e: fretcards::FretcardsError) -> String {
    serde_json::to_string(&to_binding_error(e))
        .unwrap_or_else(|_| r#"{"message":"unserializable error"}"#.to_string())
}

fn to_js_error(e: fretcards::FretcardsError) -> JsValue {
    JsValue::from_str(&error_json(e))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| to_js_error(e.into()))
}

/// Every deck in catalogue order, as a JSON array
#[wasm_bindgen]
pub fn get_all_decks() -> Result<String, JsValue> {
    to_json(&fretcards::get_all_decks())
}

/// Titles only, for a deck picker
#[wasm_bindgen]
pub fn deck_titles() -> Result<String, JsValue> {
    let titles: Vec<&str> = fretcards::get_all_decks()
        .iter()
        .map(|d| d.title.as_str())
        .collect();
    to_json(&titles)
}

fn deck_json(title: &str) -> fretcards::Result<String> {
    let deck = fretcards::find_deck(title)?;
    Ok(serde_json::to_string(deck)?)
}

fn shuffled_json(title: &str, seed: u64) -> fretcards::Result<String> {
    let deck = fretcards::find_deck(title)?;
    let config = fretcards::StudyConfig {
        seed: Some(seed),
        ..fretcards::StudyConfig::default()
    };
    let session = fretcards::StudySession::from_config(deck, &config);
    Ok(serde_json::to_string(&session.cards())?)
}

/// One deck by title (case-insensitive), as JSON
#[wasm_bindgen]
pub fn get_deck(title: &str) -> Result<String, JsValue> {
    deck_json(title).map_err(to_js_error)
}

/// Cards of a deck shuffled with a fixed seed, as a JSON array
#[wasm_bindgen]
pub fn shuffled_cards(title: &str, seed: u64) -> Result<String, JsValue> {
    shuffled_json(title, seed).map_err(to_js_error)
}

/// Validate every diagram; returns a JSON array of problems (empty when valid)
#[wasm_bindgen]
pub fn validate() -> String {
    let problems: Vec<BindingError> = fretcards::get_all_decks()
        .iter()
        .filter_map(|deck| fretcards::validate_deck(deck).err())
        .map(to_binding_error)
        .collect();
    serde_json::to_string(&problems).unwrap_or_else(|_| "[]".to_string())
}
