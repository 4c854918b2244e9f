//! Hand parsing and score derivation.
//!
//! A [`Hand`] is built fresh from a 5-card string such as `"2c 10d Kh Ah 7s"`.
//! Construction validates the input, sorts the cards ascending by rank, runs
//! the straight/flush/multiplicity detection, and derives a single
//! descriptive [`HandScore`]. Invalid input never produces a hand at all —
//! the error comes back as the `Err` variant instead of a hidden error field.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::game_engine::dealer::HAND_SIZE;
use crate::game_engine::evaluator::{is_flush, is_straight, rank_sets, RankSets};
use crate::game_engine::models::{Card, HandError, Rank, Suit};

/// The ten score categories, strongest first, each carrying the ranks and
/// suit its description mentions. No numeric ordering across hands is
/// derived from this — the output is descriptive text only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandScore {
    RoyalFlush(Suit),
    StraightFlush { low: Rank, high: Rank, suit: Suit },
    FourOfAKind(Rank),
    FullHouse { triplet: Rank, pair: Rank },
    Flush(Suit),
    Straight { low: Rank, high: Rank },
    ThreeOfAKind(Rank),
    /// Higher pair first: two-pair display order is deterministic by
    /// descending rank, unlike the original's container-iteration order.
    TwoPair { high: Rank, low: Rank },
    Pair(Rank),
    HighCard(Rank),
}

impl fmt::Display for HandScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandScore::RoyalFlush(suit) => {
                write!(f, "Royal Flush, {}", suit.word())
            }
            HandScore::StraightFlush { low, high, suit } => {
                write!(f, "Straight Flush, {} to {}, {}", low.word(), high.word(), suit.word())
            }
            HandScore::FourOfAKind(rank) => {
                write!(f, "Four of a Kind, {}", rank.word_plural())
            }
            HandScore::FullHouse { triplet, pair } => {
                write!(f, "Full House, {} over {}", triplet.word_plural(), pair.word_plural())
            }
            HandScore::Flush(suit) => {
                write!(f, "Flush, {}", suit.word())
            }
            HandScore::Straight { low, high } => {
                write!(f, "Straight, {} to {}", low.word(), high.word())
            }
            HandScore::ThreeOfAKind(rank) => {
                write!(f, "Three of a Kind, {}", rank.word_plural())
            }
            HandScore::TwoPair { high, low } => {
                write!(f, "Two Pair, {} and {}", high.word_plural(), low.word_plural())
            }
            HandScore::Pair(rank) => {
                write!(f, "Pair of {}", rank.word_plural())
            }
            HandScore::HighCard(rank) => {
                write!(f, "High Card, {}", rank.word())
            }
        }
    }
}

/// A validated, evaluated 5-card hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
    is_straight: bool,
    is_flush: bool,
    sets: RankSets,
    score: HandScore,
}

impl Hand {
    /// Parse and evaluate a 5-card string.
    ///
    /// Tokens are separated by single spaces; each token is `<rank><suit>`
    /// with a case-insensitive rank (`2`-`10` decimal or `J/Q/K/A`) and a
    /// case-insensitive suit letter (`c/d/h/s`). The first invalid token
    /// aborts the whole construction.
    pub fn new(input: &str) -> Result<Hand, HandError> {
        if input.is_empty() {
            return Err(HandError::EmptyHand);
        }

        // Split on single spaces, not general whitespace: doubled spaces
        // produce an empty token and fail rank parsing, same as the wire
        // format promises.
        let tokens: Vec<&str> = input.split(' ').collect();
        if tokens.len() != HAND_SIZE {
            return Err(HandError::WrongCount(tokens.len()));
        }

        let mut cards = Vec::with_capacity(HAND_SIZE);
        for token in tokens {
            cards.push(Card::parse(token)?);
        }
        cards.sort_by_key(|c| c.rank);

        let cards = [cards[0], cards[1], cards[2], cards[3], cards[4]];

        let is_straight = is_straight(&cards);
        let is_flush = is_flush(&cards);
        let sets = rank_sets(&cards);
        let score = derive_score(&cards, is_straight, is_flush, &sets);

        Ok(Hand { cards, is_straight, is_flush, sets, score })
    }

    /// The parsed cards, sorted ascending by rank.
    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    pub fn is_straight(&self) -> bool {
        self.is_straight
    }

    pub fn is_flush(&self) -> bool {
        self.is_flush
    }

    /// Ranks appearing exactly twice, three times, and four times.
    pub fn sets(&self) -> &RankSets {
        &self.sets
    }

    /// The derived score category; `to_string()` gives the descriptive
    /// text, e.g. `"Full House, Threes over Deuces"`.
    pub fn score(&self) -> &HandScore {
        &self.score
    }
}

impl FromStr for Hand {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hand::new(s)
    }
}

/// Pick the category for an evaluated hand, first match wins.
fn derive_score(
    cards: &[Card; HAND_SIZE],
    is_straight: bool,
    is_flush: bool,
    sets: &RankSets,
) -> HandScore {
    let low = cards[0];
    let high = cards[HAND_SIZE - 1];

    if is_flush && is_straight {
        if low.rank == Rank(10) {
            return HandScore::RoyalFlush(low.suit);
        }
        return HandScore::StraightFlush { low: low.rank, high: high.rank, suit: low.suit };
    }

    if let Some(&rank) = sets.quads.first() {
        return HandScore::FourOfAKind(rank);
    }

    if let (Some(&triplet), Some(&pair)) = (sets.triplets.first(), sets.pairs.first()) {
        return HandScore::FullHouse { triplet, pair };
    }

    if is_flush {
        return HandScore::Flush(low.suit);
    }

    if is_straight {
        return HandScore::Straight { low: low.rank, high: high.rank };
    }

    if let Some(&rank) = sets.triplets.first() {
        return HandScore::ThreeOfAKind(rank);
    }

    match sets.pairs.as_slice() {
        // Pairs arrive in ascending rank order; display the higher first.
        [first, second] => HandScore::TwoPair { high: *second, low: *first },
        [rank] => HandScore::Pair(*rank),
        _ => HandScore::HighCard(high.rank),
    }
}
