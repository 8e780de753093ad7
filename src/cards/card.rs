//! Cards: immutable identity plus mutable orientation.
//!
//! A `Card` is an owned instance. Exactly one card exists per (rank, suit)
//! pair in a game, and a card lives in at most one zone at any instant;
//! ownership moves with the card, it is never copied between zones.
//!
//! `CardToken` is the copyable handle the presentation layer uses to address
//! a card's visual proxy.

use serde::{Deserialize, Serialize};

use super::rank::Rank;
use super::suit::Suit;

/// Physical card size in meters, used by the presentation layer to compute
/// stacking offsets (pile height = thickness × cards below).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
    pub thickness: f32,
}

/// A playing card: (rank, suit) identity and face-up/face-down orientation.
///
/// Cards are created face-down; [`Card::flip`] toggles orientation. Visual
/// orientation sync is the choreographer's concern, not the card's.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
    face_up: bool,
}

impl Card {
    /// Standard poker card dimensions. Thickness drives pile stacking.
    pub const DIMENSIONS: Dimensions = Dimensions {
        width: 0.0635,
        height: 0.0889,
        thickness: 0.00024,
    };

    /// Create a face-down card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            face_up: false,
        }
    }

    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// Toggle orientation. Pure data mutation, no failure modes.
    pub fn flip(&mut self) {
        self.face_up = !self.face_up;
    }

    /// Force orientation to face-up.
    pub fn turn_face_up(&mut self) {
        self.face_up = true;
    }

    /// Copyable identity handle for the presentation proxy.
    #[must_use]
    pub const fn token(&self) -> CardToken {
        CardToken {
            rank: self.rank,
            suit: self.suit,
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Copyable (rank, suit) identity handed to the presentation layer so it can
/// address the right visual proxy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardToken {
    pub rank: Rank,
    pub suit: Suit,
}

impl std::fmt::Display for CardToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}
