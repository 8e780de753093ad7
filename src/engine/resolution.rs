//! Pluggable round resolution.
//!
//! The engine plays a turn up through the face-up reveal and then asks a
//! [`ResolutionRule`] to judge the table. Which revealed card "wins", and
//! what happens to the table piles afterward, is deliberately not decided
//! here; the shipped default declines to judge. A rule that does return a
//! winner is reported in the turn outcome, but the engine moves no cards on
//! its behalf.

use serde::{Deserialize, Serialize};

use crate::cards::CardToken;
use crate::core::PlayerId;

/// One player's revealed top table card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reveal {
    pub player: PlayerId,
    pub card: CardToken,
}

/// Strategy judging a round's face-up reveals.
pub trait ResolutionRule: Send {
    /// Judge the reveals; `None` declines to resolve the round.
    fn judge(&self, reveals: &[Reveal]) -> Option<PlayerId>;
}

/// Default rule: never resolves. The table piles simply accumulate.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoResolution;

impl ResolutionRule for NoResolution {
    fn judge(&self, _reveals: &[Reveal]) -> Option<PlayerId> {
        None
    }
}
