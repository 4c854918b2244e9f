//! # draw_poker
//!
//! A casual five-card-draw dealer and hand evaluator.
//!
//! This library deals shuffled five-card hands and classifies any five-card
//! hand string into a standard poker category with a human-readable
//! description ("Full House, Threes over Deuces"). It is the model layer of
//! a single-player browser demo: the dealer and the evaluator are
//! independent, and a thin JSON adapter packages results for a web view.
//!
//! ## How it works
//!
//! 1. Create a [`Session`] (or a bare [`Dealer`]) — it owns one 52-card
//!    deck, shuffled with Fisher-Yates, and deals sequential 5-card slices,
//!    reshuffling on its own when fewer than five cards remain.
//! 2. Feed any hand string to [`Hand::new`] — it validates the input,
//!    sorts the cards, detects straights, flushes, and rank multiplicities,
//!    and derives a single descriptive [`HandScore`].
//! 3. Invalid input comes back as a typed [`HandError`] instead of a score;
//!    there is no partially evaluated hand.
//!
//! ## Known limitation
//!
//! The ace is always rank 14, so the only ace straight is 10-J-Q-K-A. The
//! wheel (A-2-3-4-5) classifies as "High Card, Ace". This is deliberate.
//!
//! ## Quick start
//!
//! ```rust
//! use draw_poker::{Hand, Session};
//!
//! // Deterministic session: same seed, same deals.
//! let mut session = Session::new(Some(42));
//! let dealt = session.deal();
//! let hand = session.play(&dealt).expect("dealt hands always parse");
//! println!("{dealt} -> {}", hand.score());
//!
//! // Hands can also be built directly, without a dealer.
//! let hand = Hand::new("2c 2d 3h 3s 3c").unwrap();
//! assert_eq!(hand.score().to_string(), "Full House, Threes over Deuces");
//!
//! // Errors are values, not panics.
//! assert!(Hand::new("2c 2d").is_err());
//! ```

pub mod game_engine;
pub mod web_adapter;

// Convenience re-exports so callers can use `draw_poker::Hand` directly
// without reaching into `game_engine::`.
pub use game_engine::{
    Card, Dealer, Hand, HandError, HandScore, Rank, Session, Suit, DECK_SIZE, HAND_SIZE,
};

#[cfg(test)]
mod tests;
