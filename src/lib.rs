//! # war-table
//!
//! A multi-player turn-based "War"-style card game engine. Cards are dealt
//! from a shuffled shared draw pile to player hands; each turn every player
//! with cards reveals their top card onto their table pile; the game ends
//! when only one player retains cards.
//!
//! ## Design Principles
//!
//! 1. **Authoritative zones**: the `GameEngine` exclusively owns the draw
//!    pile, hands, and table piles. No ambient globals; the host constructs
//!    one engine and shares it with its input and render layers.
//!
//! 2. **Choreographed transitions**: every card move pairs a logical zone
//!    transfer with an asynchronous visual animation. Removal happens before
//!    the animation starts; the append happens only when the engine
//!    processes the animation's completion signal. Game logic never races
//!    ahead of in-flight presentation effects.
//!
//! 3. **Soft vs. hard ordering**: moves within a phase overlap under a
//!    fixed stagger; phase transitions hard-await every outstanding
//!    completion, bounded by an animation timeout.
//!
//! 4. **Deterministic rules**: the shuffle is the only randomness. Same
//!    seed, same deal.
//!
//! ## Modules
//!
//! - `core`: player ids and maps, deterministic RNG, configuration
//! - `cards`: ranks, suits, owned card instances
//! - `zones`: ordered piles, the 52-card factory, zone addressing
//! - `choreo`: anchors and the presentation-collaborator contract
//! - `engine`: the phase state machine, move tickets, turn choreography
//! - `error`: error taxonomy

pub mod cards;
pub mod choreo;
pub mod core;
pub mod engine;
pub mod error;
pub mod zones;

// Re-export commonly used types
pub use crate::cards::{Card, CardToken, Dimensions, Rank, Suit};
pub use crate::choreo::{
    Anchor, AnchorMap, Choreographer, Completion, CompletionSignal, DelayedChoreographer,
    InstantChoreographer,
};
pub use crate::core::{EngineConfig, GameRng, PlayerId, PlayerMap, TimingConfig};
pub use crate::engine::{
    Command, GameEngine, NoResolution, Phase, ResolutionRule, Reveal, TableSnapshot, TurnOutcome,
};
pub use crate::error::{EmptyZoneError, EngineError};
pub use crate::zones::{Deck, ZoneRef};
