//! Turn state machine phases.

use serde::{Deserialize, Serialize};

/// Engine phase: `Idle → Dealing → TurnInProgress ⇄ (turns) → Finished`,
/// with `reset()` valid from any phase back to `Idle`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Fresh table, nothing dealt.
    #[default]
    Idle,
    /// Cards in flight from the draw pile to the hands.
    Dealing,
    /// Dealt and playing turns.
    TurnInProgress,
    /// Exactly one player holds cards; a winner is recorded.
    Finished,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Idle => "Idle",
            Phase::Dealing => "Dealing",
            Phase::TurnInProgress => "TurnInProgress",
            Phase::Finished => "Finished",
        };
        write!(f, "{}", name)
    }
}
