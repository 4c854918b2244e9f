use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Everything that can go wrong while parsing a hand string. Any one of
/// these aborts construction of the whole hand; there is never a partially
/// evaluated hand.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HandError {
    #[error("No cards!")]
    EmptyHand,
    #[error("Expected 5 cards, got {0}")]
    WrongCount(usize),
    #[error("Invalid rank '{0}'...these aren't the cards you're looking for")]
    InvalidRank(String),
    #[error("Invalid suit '{0}'...what is this, UNO?")]
    InvalidSuit(char),
}

// ---------------------------------------------------------------------------
// Card primitives
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All four suits in the fixed order used to build a fresh deck.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Parse a single suit letter, case-insensitive.
    pub fn from_char(ch: char) -> Result<Suit, HandError> {
        match ch.to_ascii_uppercase() {
            'C' => Ok(Suit::Clubs),
            'D' => Ok(Suit::Diamonds),
            'H' => Ok(Suit::Hearts),
            'S' => Ok(Suit::Spades),
            _ => Err(HandError::InvalidSuit(ch)),
        }
    }

    /// Full word used in score text.
    pub fn word(self) -> &'static str {
        match self {
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Suit::Clubs => write!(f, "c"),
            Suit::Diamonds => write!(f, "d"),
            Suit::Hearts => write!(f, "h"),
            Suit::Spades => write!(f, "s"),
        }
    }
}

/// Rank 2..=14 where 14 = Ace (ace is always high).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rank(pub u8);

impl Rank {
    pub const MIN: u8 = 2;
    pub const MAX: u8 = 14;

    /// Parse the rank portion of a card token: a decimal number, or one of
    /// the face letters J/Q/K/A (case-insensitive). Anything outside 2..=14
    /// is rejected.
    pub fn parse(s: &str) -> Result<Rank, HandError> {
        let value = match s.parse::<u8>() {
            Ok(n) => n,
            Err(_) => match s.to_ascii_uppercase().as_str() {
                "J" => 11,
                "Q" => 12,
                "K" => 13,
                "A" => 14,
                _ => return Err(HandError::InvalidRank(s.to_string())),
            },
        };
        if (Rank::MIN..=Rank::MAX).contains(&value) {
            Ok(Rank(value))
        } else {
            Err(HandError::InvalidRank(s.to_string()))
        }
    }

    /// Short symbol: "2".."10" as decimal, then "J", "Q", "K", "A".
    /// Note 10 is "10", not "T" — this is the dealt wire format.
    pub fn symbol(self) -> &'static str {
        match self.0 {
            2 => "2", 3 => "3", 4 => "4", 5 => "5", 6 => "6",
            7 => "7", 8 => "8", 9 => "9", 10 => "10",
            11 => "J", 12 => "Q", 13 => "K", 14 => "A",
            _ => "?",
        }
    }

    /// Full word used in score text.
    pub fn word(self) -> &'static str {
        match self.0 {
            2 => "Deuce", 3 => "Three", 4 => "Four", 5 => "Five",
            6 => "Six", 7 => "Seven", 8 => "Eight", 9 => "Nine",
            10 => "Ten", 11 => "Jack", 12 => "Queen", 13 => "King",
            14 => "Ace",
            _ => "?",
        }
    }

    /// Plural word: plain "s" suffix, matching the score text format.
    pub fn word_plural(self) -> String {
        format!("{}s", self.word())
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    /// Parse one card token, e.g. "10c", "Kh", "ad". The last character is
    /// the suit, everything before it the rank. Rank is checked first, so
    /// an empty or garbled token surfaces as an invalid rank.
    pub fn parse(token: &str) -> Result<Card, HandError> {
        let mut chars = token.chars();
        let suit_ch = chars
            .next_back()
            .ok_or_else(|| HandError::InvalidRank(String::new()))?;
        let rank = Rank::parse(chars.as_str())?;
        let suit = Suit::from_char(suit_ch)?;
        Ok(Card { rank, suit })
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}
