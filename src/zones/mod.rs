//! Zone system: ordered piles and typed zone addressing.
//!
//! ## Key Types
//!
//! - `Deck`: an ordered pile of owned cards (bottom = index 0, top = last)
//! - `Deck::standard()`: the 52-card factory
//! - `ZoneRef`: typed address for the fixed zones of a War table

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

pub mod deck;
pub mod standard;

pub use deck::Deck;

/// Address of one zone on the table.
///
/// The zones of a War game are fixed by rule: one shared draw pile plus a
/// hand and a table pile per player. Anchors, snapshots, and log lines all
/// address zones through this enum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneRef {
    /// The shared draw pile cards are dealt from.
    DrawPile,
    /// A player's face-down hand.
    Hand(PlayerId),
    /// A player's pile of cards played to the table.
    Table(PlayerId),
}

impl std::fmt::Display for ZoneRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ZoneRef::DrawPile => write!(f, "draw"),
            ZoneRef::Hand(p) => write!(f, "hand[{}]", p.index()),
            ZoneRef::Table(p) => write!(f, "table[{}]", p.index()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(format!("{}", ZoneRef::DrawPile), "draw");
        assert_eq!(format!("{}", ZoneRef::Hand(PlayerId::new(2))), "hand[2]");
        assert_eq!(format!("{}", ZoneRef::Table(PlayerId::new(0))), "table[0]");
    }
}
