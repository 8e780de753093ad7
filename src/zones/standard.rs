//! Standard 52-card deck factory.
//!
//! A specialization of `Deck`, not a new behavioral type: exactly one card
//! per (rank, suit) pair, suit-major rank-minor order, all face-down.

use crate::cards::{Card, Rank, Suit};

use super::deck::Deck;

impl Deck {
    /// Build a full standard deck in deterministic order.
    ///
    /// Bottom-to-top: 2c..Ac, 2d..Ad, 2h..Ah, 2s..As.
    #[must_use]
    pub fn standard() -> Self {
        let mut deck = Deck::new();
        for suit in Suit::all() {
            for rank in Rank::all() {
                deck.add_top(Card::new(rank, suit));
            }
        }
        deck
    }
}
