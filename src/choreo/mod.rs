//! Choreography contract: anchors, completion signals, and the
//! presentation collaborator trait.
//!
//! ## Key Types
//!
//! - `Anchor`, `AnchorMap`: one stable 3D placement per zone
//! - `Choreographer`: animates card moves, signals completion exactly once
//! - `Completion` / `CompletionSignal`: single-shot move-finished channel
//! - `InstantChoreographer`, `DelayedChoreographer`: headless implementations

pub mod anchor;
pub mod choreographer;

pub use anchor::{Anchor, AnchorMap};
pub use choreographer::{
    Choreographer, Completion, CompletionLost, CompletionSignal, DelayedChoreographer,
    InstantChoreographer,
};
