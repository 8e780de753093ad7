//! Error taxonomy.
//!
//! Zone-emptiness violations are programmer errors: unreachable when the
//! round-robin dealing and per-player non-empty guards are applied, and
//! fatal to the operation (never silently tolerated). Animation failures
//! are fatal to the current phase; the documented recovery is
//! [`GameEngine::reset`](crate::engine::GameEngine::reset). No retries
//! anywhere.

use std::time::Duration;

use thiserror::Error;

use crate::engine::Phase;
use crate::zones::ZoneRef;

/// `take_top`/`peek_top` on an empty zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("zone is empty")]
pub struct EmptyZoneError;

/// Failures surfaced by the game engine.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error(transparent)]
    EmptyZone(#[from] EmptyZoneError),

    #[error("operation requires phase {expected}, engine is in {actual}")]
    InvalidPhase { expected: Phase, actual: Phase },

    #[error("move toward {zone} did not complete within {timeout:?}")]
    AnimationTimedOut { zone: ZoneRef, timeout: Duration },

    #[error("choreographer dropped a completion signal")]
    AnimationFailed,
}
