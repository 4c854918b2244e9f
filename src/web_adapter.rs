//! JSON payloads for the browser view layer.
//!
//! The crate renders no UI; this adapter maps deal and play outcomes to the
//! JSON shape a web client binds to its form, score, and error elements.
//! On a valid play the score is set and the error is null; on an invalid
//! play the reverse — the same toggle the view performs in the DOM.

use serde_json::{json, Value};

use crate::game_engine::{Card, Hand, Session, HAND_SIZE};

/// Build the 5-slot card array for the view, one `{id, card}` entry per
/// dealt position. Missing slots (invalid hand) render as empty strings.
fn card_slots(cards: &[Card]) -> Value {
    let mut slots = Vec::with_capacity(HAND_SIZE);
    for i in 0..HAND_SIZE {
        let card_str = cards.get(i).map(Card::to_string).unwrap_or_default();
        slots.push(json!({ "id": i, "card": card_str }));
    }
    Value::Array(slots)
}

/// Deal a fresh hand from the session and package it for the view.
///
/// A dealt hand always classifies, so the payload carries both the raw
/// hand string (to fill the form input) and its score.
pub fn deal_state(session: &mut Session) -> Value {
    let dealt = session.deal();
    play_state(&dealt)
}

/// Classify a hand string (dealt or typed by the user) and package the
/// result for the view.
pub fn play_state(input: &str) -> Value {
    match Hand::new(input) {
        Ok(hand) => json!({
            "hand": input,
            "cards": card_slots(hand.cards()),
            "score": hand.score().to_string(),
            "error": Value::Null,
        }),
        Err(err) => json!({
            "hand": input,
            "cards": card_slots(&[]),
            "score": Value::Null,
            "error": err.to_string(),
        }),
    }
}
