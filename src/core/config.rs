//! Engine configuration.
//!
//! `EngineConfig` fixes the table shape (player count, RNG seed) and the
//! choreography timing. Timing knobs distinguish the *soft* ordering device
//! (stagger between moves within a phase) from the *hard* one (awaiting
//! outstanding completions before a phase transition, bounded by the
//! animation timeout).

use std::time::Duration;

/// Choreography durations.
///
/// Defaults mirror the classic table feel: 1 s eased card moves issued with
/// a 100 ms stagger so animations overlap in a bounded, predictable way.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimingConfig {
    /// Duration of a single card move animation.
    pub move_duration: Duration,
    /// Pause between issuing successive moves within one phase.
    pub stagger: Duration,
    /// Visual beat after the last completion, before a phase transition.
    pub settle: Duration,
    /// Upper bound on awaiting any single completion signal.
    pub animation_timeout: Duration,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            move_duration: Duration::from_millis(1000),
            stagger: Duration::from_millis(100),
            settle: Duration::from_millis(100),
            animation_timeout: Duration::from_secs(5),
        }
    }
}

impl TimingConfig {
    /// Zero-delay timing for headless hosts and tests. The animation timeout
    /// stays nonzero so a stuck choreographer still surfaces an error.
    #[must_use]
    pub fn instant() -> Self {
        Self {
            move_duration: Duration::ZERO,
            stagger: Duration::ZERO,
            settle: Duration::ZERO,
            animation_timeout: Duration::from_secs(5),
        }
    }
}

/// Complete engine configuration.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Number of players (2-255).
    pub num_players: usize,
    /// Seed for the deal shuffle.
    pub seed: u64,
    /// Choreography timing.
    pub timing: TimingConfig,
}

impl EngineConfig {
    /// Create a configuration for `num_players` players with default timing.
    pub fn new(num_players: usize) -> Self {
        assert!(num_players >= 2, "Must have at least 2 players");
        assert!(num_players <= 255, "At most 255 players supported");

        Self {
            num_players,
            seed: 0,
            timing: TimingConfig::default(),
        }
    }

    /// Set the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the choreography timing.
    #[must_use]
    pub fn with_timing(mut self, timing: TimingConfig) -> Self {
        self.timing = timing;
        self
    }
}
