//! Deck: an ordered pile of owned cards.
//!
//! Index 0 is the bottom, the last index is the top. A card appears in at
//! most one deck at any instant; `take_top`/`add_top` transfer ownership,
//! they never copy. Decks are mutated only by the owning engine.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::GameRng;
use crate::error::EmptyZoneError;

/// An ordered pile of cards (draw pile, hand, or table pile).
///
/// ```
/// use war_table::cards::{Card, Rank, Suit};
/// use war_table::zones::Deck;
///
/// let mut deck = Deck::new();
/// deck.add_top(Card::new(Rank::Ace, Suit::Spades));
/// let card = deck.take_top().unwrap();
/// assert_eq!(card.rank(), Rank::Ace);
/// assert!(deck.is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uniformly permute the deck in place. Card identities are untouched.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Remove and return the top card.
    pub fn take_top(&mut self) -> Result<Card, EmptyZoneError> {
        self.cards.pop().ok_or(EmptyZoneError)
    }

    /// Place a card on top. The caller upholds the single-owner invariant.
    pub fn add_top(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Borrow the top card.
    pub fn peek_top(&self) -> Result<&Card, EmptyZoneError> {
        self.cards.last().ok_or(EmptyZoneError)
    }

    /// Turn the top card face-up. No-op when empty.
    pub fn flip_top_up(&mut self) {
        if let Some(card) = self.cards.last_mut() {
            card.turn_face_up();
        }
    }

    /// Discard all cards. Used only on game reset.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards from bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterate bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
