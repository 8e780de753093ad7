//! Game engine: the turn state machine and its choreography.
//!
//! ## Key Types
//!
//! - `Phase`: `Idle → Dealing → TurnInProgress ⇄ (turns) → Finished`
//! - `GameEngine`: owns all zones and drives deals and turns
//! - `Command`: input-layer requests (start, reset)
//! - `TurnOutcome`, `TableSnapshot`: what callers observe
//! - `ResolutionRule`: pluggable round judging (default declines)

pub mod engine;
pub mod phase;
pub mod resolution;
pub mod ticket;

pub use engine::{Command, GameEngine, TableSnapshot, TurnOutcome};
pub use phase::Phase;
pub use resolution::{NoResolution, ResolutionRule, Reveal};
pub use ticket::MoveTicket;
