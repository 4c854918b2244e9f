use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game_engine::models::{Card, Rank, Suit};

/// Cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// Cards in a dealt hand.
pub const HAND_SIZE: usize = 5;

/// A dealer that owns a 52-card deck, shuffles it, and deals sequential
/// 5-card hands. When fewer than 5 cards remain it reshuffles on its own,
/// so `deal` always succeeds.
///
/// Sequential dealing from one shuffled deck (rather than drawing 5 random
/// cards each time) guarantees no duplicate cards within a pass through the
/// deck, like a real dealing shoe.
pub struct Dealer {
    deck: Vec<Card>,
    cursor: usize,
    rng: StdRng,
}

impl Dealer {
    /// Build the ordered 52-card deck (4 suits x ranks 2..=14) and shuffle
    /// it. `Some(seed)` gives a fully deterministic dealer; `None` seeds
    /// from entropy.
    pub fn new(rng_seed: Option<u64>) -> Self {
        let rng = match rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let deck: Vec<Card> = Suit::ALL
            .iter()
            .flat_map(|&suit| (Rank::MIN..=Rank::MAX).map(move |r| Card { rank: Rank(r), suit }))
            .collect();

        let mut dealer = Dealer { deck, cursor: 0, rng };
        dealer.shuffle();
        dealer
    }

    /// In-place Fisher-Yates shuffle; resets the cursor to the top of the
    /// deck. Public so a fresh shuffle can be forced between deals.
    pub fn shuffle(&mut self) {
        for i in (1..self.deck.len()).rev() {
            let j = self.rng.gen_range(0..=i);
            self.deck.swap(i, j);
        }
        self.cursor = 0;
    }

    /// Deal the next five cards as typed values, reshuffling first if the
    /// deck has fewer than five cards left.
    pub fn deal_cards(&mut self) -> [Card; HAND_SIZE] {
        if self.cursor + HAND_SIZE > DECK_SIZE {
            self.shuffle();
        }
        let top = &self.deck[self.cursor..];
        let hand = [top[0], top[1], top[2], top[3], top[4]];
        self.cursor += HAND_SIZE;
        hand
    }

    /// Deal the next five cards as a space-delimited string, e.g.
    /// `"2c 10d Kh Ah 7s"`. This is the hand-string format the evaluator
    /// parses. Never fails.
    pub fn deal(&mut self) -> String {
        self.deal_cards()
            .iter()
            .map(Card::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Cards still undealt before the next forced reshuffle.
    pub fn remaining(&self) -> usize {
        DECK_SIZE - self.cursor
    }
}
