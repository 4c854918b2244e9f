use crate::game_engine::dealer::Dealer;
use crate::game_engine::hand::Hand;
use crate::game_engine::models::HandError;

/// A single-player session: one dealer plus hand construction on demand.
///
/// The embedding application builds one of these and passes it around
/// explicitly; there is no ambient global state. The dealer and the hand
/// evaluator share nothing, so a hand can also be built directly with
/// [`Hand::new`] without going through a session.
pub struct Session {
    dealer: Dealer,
}

impl Session {
    /// `Some(seed)` gives a fully deterministic session.
    pub fn new(rng_seed: Option<u64>) -> Self {
        Session { dealer: Dealer::new(rng_seed) }
    }

    /// Deal the next 5-card hand string from the session's dealer.
    pub fn deal(&mut self) -> String {
        self.dealer.deal()
    }

    /// Classify a hand string, dealt or user-supplied.
    pub fn play(&self, input: &str) -> Result<Hand, HandError> {
        Hand::new(input)
    }

    pub fn dealer_mut(&mut self) -> &mut Dealer {
        &mut self.dealer
    }
}
