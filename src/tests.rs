//! Crate-level tests for `draw_poker`.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! # Coverage
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Shuffle | Every shuffle is a permutation of the same 52-card multiset |
//! | Dealing | 10 consecutive hands are disjoint; the 11th triggers a reshuffle |
//! | Determinism | Same seed → identical deal sequence |
//! | Classification | One golden case per category, plus the wheel limitation |
//! | Errors | Empty, wrong count, bad rank, bad suit, and message text |
//! | Round trip | Every dealt string parses back into a valid hand |

use std::collections::HashSet;

use crate::{Dealer, Hand, HandError, Session, DECK_SIZE};

// ── shuffle ──────────────────────────────────────────────────────────────────

#[test]
fn every_shuffle_is_a_permutation_of_the_deck() {
    let mut dealer = Dealer::new(Some(1));
    for round in 0..5 {
        dealer.shuffle();
        let mut seen = HashSet::new();
        for _ in 0..10 {
            for card in dealer.deal_cards() {
                assert!(seen.insert(card), "duplicate {card} in round {round}");
            }
        }
        assert_eq!(seen.len(), 50, "round {round} dealt a short deck");
    }
}

// ── dealing ──────────────────────────────────────────────────────────────────

#[test]
fn ten_consecutive_hands_are_disjoint() {
    let mut dealer = Dealer::new(Some(42));
    let mut seen: HashSet<String> = HashSet::new();
    for deal in 0..10 {
        let hand = dealer.deal();
        let cards: Vec<&str> = hand.split(' ').collect();
        assert_eq!(cards.len(), 5, "deal {deal} was not 5 cards");
        for card in cards {
            assert!(
                seen.insert(card.to_string()),
                "card {card} repeated across deals (deal {deal})"
            );
        }
    }
    assert_eq!(seen.len(), 50);
}

#[test]
fn eleventh_deal_reshuffles_and_stays_valid() {
    let mut dealer = Dealer::new(Some(42));
    for _ in 0..10 {
        dealer.deal();
    }
    let hand = dealer.deal();
    let unique: HashSet<&str> = hand.split(' ').collect();
    assert_eq!(unique.len(), 5, "duplicate within the post-reshuffle hand");
    assert!(Hand::new(&hand).is_ok());
    assert_eq!(dealer.remaining(), DECK_SIZE - 5);
}

#[test]
fn seeded_dealers_replay_the_same_sequence() {
    let deals = |seed: u64| -> Vec<String> {
        let mut dealer = Dealer::new(Some(seed));
        (0..10).map(|_| dealer.deal()).collect()
    };
    assert_eq!(deals(7), deals(7));
    assert_ne!(deals(7), deals(8));
}

#[test]
fn entropy_seeded_dealer_deals_a_valid_hand() {
    // Smoke test: rng_seed: None must not panic and must deal 5 cards.
    let mut dealer = Dealer::new(None);
    let hand = dealer.deal();
    assert!(Hand::new(&hand).is_ok());
}

// ── classification goldens ───────────────────────────────────────────────────

#[test]
fn golden_scores_per_category() {
    let cases = [
        ("10c Jc Qc Kc Ac", "Royal Flush, Clubs"),
        ("4d 5d 6d 7d 8d", "Straight Flush, Four to Eight, Diamonds"),
        ("2c 2d 2h 2s 3c", "Four of a Kind, Deuces"),
        ("2c 2d 3h 3s 3c", "Full House, Threes over Deuces"),
        ("2h 6h 9h Jh Kh", "Flush, Hearts"),
        ("5c 6d 7h 8s 9c", "Straight, Five to Nine"),
        ("9c 9d 9h 2s 5c", "Three of a Kind, Nines"),
        ("3c 3d 8h 8s Ac", "Two Pair, Eights and Threes"),
        ("Qc Qd 2h 7s 9c", "Pair of Queens"),
        ("2c 4d 7h 9s Kc", "High Card, King"),
    ];
    for (input, expected) in cases {
        let hand = Hand::new(input).unwrap();
        assert_eq!(hand.score().to_string(), expected, "for input {input:?}");
    }
}

#[test]
fn wheel_is_high_card_ace_by_design() {
    let hand = Hand::new("Ac 2d 3h 4s 5c").unwrap();
    let score = hand.score().to_string();
    assert_ne!(score, "Straight, Ace to Five");
    assert_eq!(score, "High Card, Ace");
}

#[test]
fn same_input_twice_gives_identical_results() {
    for input in ["10c Jc Qc Kc Ac", "2c 2d", "2c 4d 7h 9s Kc"] {
        let a = Hand::new(input);
        let b = Hand::new(input);
        assert_eq!(a, b, "for input {input:?}");
    }
}

// ── errors ───────────────────────────────────────────────────────────────────

#[test]
fn error_taxonomy() {
    assert_eq!(Hand::new(""), Err(HandError::EmptyHand));
    assert_eq!(Hand::new("2c 2d"), Err(HandError::WrongCount(2)));
    assert!(matches!(
        Hand::new("1c 2d 3h 4s 5c"),
        Err(HandError::InvalidRank(_))
    ));
    assert_eq!(
        Hand::new("2c 3d 4h 5s 6z"),
        Err(HandError::InvalidSuit('z'))
    );
}

#[test]
fn error_messages_are_human_readable() {
    let msg = Hand::new("2c 2d").unwrap_err().to_string();
    assert!(msg.contains("5 cards"), "unexpected message: {msg}");
    let msg = Hand::new("1c 2d 3h 4s 5c").unwrap_err().to_string();
    assert!(msg.contains('1'), "unexpected message: {msg}");
}

// ── round trip ───────────────────────────────────────────────────────────────

#[test]
fn every_dealt_hand_parses_and_scores() {
    let mut session = Session::new(Some(0xDEAD_BEEF));
    for deal in 0..40 {
        let dealt = session.deal();
        let hand = session
            .play(&dealt)
            .unwrap_or_else(|e| panic!("deal {deal} ({dealt:?}) failed to parse: {e}"));
        assert!(!hand.score().to_string().is_empty());
    }
}

#[test]
fn case_insensitive_input_parses_identically() {
    let lower = Hand::new("10c jc qc kc ac").unwrap();
    let upper = Hand::new("10C JC QC KC AC").unwrap();
    assert_eq!(lower, upper);
    assert_eq!(lower.score().to_string(), "Royal Flush, Clubs");
}
