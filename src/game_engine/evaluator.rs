//! Straight, flush, and rank-multiplicity detection over a sorted hand.
//!
//! These primitives operate on a rank-sorted 5-card slice and feed the
//! score derivation in [`crate::game_engine::hand`].

use crate::game_engine::dealer::HAND_SIZE;
use crate::game_engine::models::{Card, Rank};

/// True if all five cards share the first card's suit.
pub fn is_flush(cards: &[Card; HAND_SIZE]) -> bool {
    cards.iter().all(|c| c.suit == cards[0].suit)
}

/// True if the sorted ranks are five consecutive integers with no gap.
///
/// The ace is always rank 14, so the only ace straight is 10-J-Q-K-A.
/// The wheel (A-2-3-4-5) is not recognised; that is a documented
/// limitation of this evaluator, not an oversight.
pub fn is_straight(sorted: &[Card; HAND_SIZE]) -> bool {
    sorted
        .windows(2)
        .all(|pair| pair[1].rank.0 == pair[0].rank.0 + 1)
}

/// The rank multiplicities of a hand: ranks appearing exactly twice,
/// exactly three times, and exactly four times. A rank lives in at most
/// one of the three sets — reaching a higher multiplicity removes it from
/// the lower one.
///
/// Ranks are stored in ascending order (the cards are pre-sorted).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankSets {
    pub pairs: Vec<Rank>,
    pub triplets: Vec<Rank>,
    pub quads: Vec<Rank>,
}

/// Count the multiplicity of every distinct rank in the sorted hand.
///
/// Five cards can hold at most one quad, at most one triplet, and at most
/// two pairs; these cardinalities are asserted rather than assumed.
pub fn rank_sets(sorted: &[Card; HAND_SIZE]) -> RankSets {
    let mut counts = [0u8; Rank::MAX as usize + 1];
    for card in sorted {
        counts[card.rank.0 as usize] += 1;
    }

    let mut sets = RankSets {
        pairs: Vec::new(),
        triplets: Vec::new(),
        quads: Vec::new(),
    };
    for (value, &count) in counts.iter().enumerate() {
        let rank = Rank(value as u8);
        match count {
            2 => sets.pairs.push(rank),
            3 => sets.triplets.push(rank),
            4 => sets.quads.push(rank),
            _ => {}
        }
    }

    debug_assert!(sets.quads.len() <= 1, "5 cards cannot hold two quads");
    debug_assert!(sets.triplets.len() <= 1, "5 cards cannot hold two triplets");
    debug_assert!(sets.pairs.len() <= 2, "5 cards cannot hold three pairs");
    sets
}
