//! Core game engine — dealing, hand parsing, and classification.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: suits, ranks, cards, parse errors |
//! | `dealer`    | 52-card deck with Fisher-Yates shuffle and cursor-based dealing |
//! | `evaluator` | Straight/flush detection and rank multiplicity tracking |
//! | `hand`      | Hand parsing, score derivation, and score formatting |
//! | `session`   | One dealer plus hand construction, passed explicitly |

pub mod dealer;
pub mod evaluator;
pub mod hand;
pub mod models;
pub mod session;

// Re-export the public API surface so callers can use
// `game_engine::Hand` without reaching into sub-modules.
pub use dealer::{Dealer, DECK_SIZE, HAND_SIZE};
pub use hand::{Hand, HandScore};
pub use models::{Card, HandError, Rank, Suit};
pub use session::Session;
