//! The game engine: authoritative state plus turn choreography.
//!
//! ## Move discipline
//!
//! Every card transfer follows the same ordering contract:
//!
//! 1. logical removal from the source zone (`take_top`),
//! 2. animation start (`Choreographer::animate_move`),
//! 3. logical append to the destination, only when the engine itself
//!    processes the move's completion signal.
//!
//! The append never happens inside a presentation callback. Completions are
//! drained opportunistically during stagger pauses and awaited exhaustively
//! (bounded by the animation timeout) before any phase transition, so game
//! logic neither races ahead of in-flight animations nor blocks on moves
//! that are allowed to overlap.

use std::sync::Arc;

use serde::Serialize;
use tokio::time::{sleep, timeout};

use crate::cards::Card;
use crate::choreo::{Anchor, AnchorMap, Choreographer};
use crate::core::{EngineConfig, GameRng, PlayerId, PlayerMap};
use crate::error::EngineError;
use crate::zones::{Deck, ZoneRef};

use super::phase::Phase;
use super::resolution::{NoResolution, ResolutionRule, Reveal};
use super::ticket::MoveTicket;

/// Input-layer commands, mapped externally (e.g. keybindings) onto engine
/// calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// `requestStart`: begin dealing if the table is idle.
    Start,
    /// `requestReset`: abandon everything and return to idle.
    Reset,
}

/// Result of one [`GameEngine::run_turn`] call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum TurnOutcome {
    /// Exactly one hand held cards; the game is over.
    Finished { winner: PlayerId },
    /// A round was played out up through the face-up reveal.
    Played {
        revealed: Vec<Reveal>,
        /// Verdict of the resolution rule, if it chose to judge.
        round_winner: Option<PlayerId>,
    },
}

/// Read-only view of the table for the render loop.
#[derive(Clone, Debug, Serialize)]
pub struct TableSnapshot {
    pub phase: Phase,
    pub round: u32,
    pub winner: Option<PlayerId>,
    pub draw_pile: Vec<Card>,
    pub hands: Vec<Vec<Card>>,
    pub table_piles: Vec<Vec<Card>>,
    /// Cards currently owned by in-flight move tickets.
    pub in_flight: usize,
}

/// Owns the draw pile, N hands, N table piles, and the turn state machine.
///
/// All zones are exclusively owned and mutated here; the choreographer sees
/// only card tokens and anchors. One engine instance is constructed by the
/// host and shared by reference with the input and render layers; there is
/// no ambient global state.
pub struct GameEngine {
    config: EngineConfig,
    rng: GameRng,
    draw_pile: Deck,
    hands: PlayerMap<Deck>,
    table_piles: PlayerMap<Deck>,
    phase: Phase,
    winner: Option<PlayerId>,
    round: u32,
    anchors: AnchorMap,
    choreographer: Arc<dyn Choreographer>,
    resolution: Box<dyn ResolutionRule>,
    pending: Vec<MoveTicket>,
}

impl GameEngine {
    /// Create an idle table with a fresh unshuffled standard deck.
    #[must_use]
    pub fn new(config: EngineConfig, choreographer: Arc<dyn Choreographer>) -> Self {
        let num_players = config.num_players;
        let rng = GameRng::new(config.seed);
        Self {
            config,
            rng,
            draw_pile: Deck::standard(),
            hands: PlayerMap::new(num_players, |_| Deck::new()),
            table_piles: PlayerMap::new(num_players, |_| Deck::new()),
            phase: Phase::Idle,
            winner: None,
            round: 0,
            anchors: AnchorMap::new(),
            choreographer,
            resolution: Box::new(NoResolution),
            pending: Vec::new(),
        }
    }

    /// Replace the round resolution rule.
    #[must_use]
    pub fn with_resolution(mut self, rule: impl ResolutionRule + 'static) -> Self {
        self.resolution = Box::new(rule);
        self
    }

    /// Register a zone's anchor (presentation layout).
    pub fn set_anchor(&mut self, zone: ZoneRef, anchor: Anchor) {
        self.anchors.set(zone, anchor);
    }

    // === Queries (render loop contract) ===

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Completed turn count since the deal.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn num_players(&self) -> usize {
        self.config.num_players
    }

    /// Borrow a zone's contents.
    #[must_use]
    pub fn zone(&self, zone: ZoneRef) -> &Deck {
        match zone {
            ZoneRef::DrawPile => &self.draw_pile,
            ZoneRef::Hand(p) => &self.hands[p],
            ZoneRef::Table(p) => &self.table_piles[p],
        }
    }

    /// Cards currently owned by in-flight move tickets.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.pending.len()
    }

    /// Total cards tracked across all zones and in-flight moves.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        let zones: usize = self.draw_pile.len()
            + self.hands.iter().map(|(_, d)| d.len()).sum::<usize>()
            + self.table_piles.iter().map(|(_, d)| d.len()).sum::<usize>();
        zones + self.pending.len()
    }

    /// Serializable view of the whole table.
    #[must_use]
    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            phase: self.phase,
            round: self.round,
            winner: self.winner,
            draw_pile: self.draw_pile.cards().to_vec(),
            hands: self.hands.iter().map(|(_, d)| d.cards().to_vec()).collect(),
            table_piles: self
                .table_piles
                .iter()
                .map(|(_, d)| d.cards().to_vec())
                .collect(),
            in_flight: self.pending.len(),
        }
    }

    // === Commands (input layer contract) ===

    /// Dispatch an input-layer command.
    pub async fn handle(&mut self, command: Command) -> Result<(), EngineError> {
        match command {
            Command::Start => {
                self.start_game().await?;
            }
            Command::Reset => self.reset(),
        }
        Ok(())
    }

    // === State machine ===

    /// Shuffle and deal the draw pile round-robin, then enter the first turn.
    ///
    /// Returns `Ok(false)` without touching state unless the engine is
    /// `Idle`. Deal target advances after every single card, even once the
    /// pile empties mid-round.
    pub async fn start_game(&mut self) -> Result<bool, EngineError> {
        if self.phase != Phase::Idle {
            log::debug!("[engine] start ignored, phase is {}", self.phase);
            return Ok(false);
        }
        self.phase = Phase::Dealing;
        log::info!(
            "[engine] dealing {} cards to {} players (seed {})",
            self.draw_pile.len(),
            self.config.num_players,
            self.rng.seed()
        );

        self.draw_pile.shuffle(&mut self.rng);

        let mut target = 0u8;
        while !self.draw_pile.is_empty() {
            let dest = ZoneRef::Hand(PlayerId::new(target));
            self.issue_move(ZoneRef::DrawPile, dest)?;
            target = (target + 1) % self.config.num_players as u8;
            self.stagger().await;
        }

        self.settle_pending().await?;
        self.phase = Phase::TurnInProgress;
        log::info!("[engine] deal settled, turns may begin");
        Ok(true)
    }

    /// Play one turn: termination check, table moves, settle, reveal.
    pub async fn run_turn(&mut self) -> Result<TurnOutcome, EngineError> {
        if self.phase != Phase::TurnInProgress {
            return Err(EngineError::InvalidPhase {
                expected: Phase::TurnInProgress,
                actual: self.phase,
            });
        }

        // Termination is evaluated before any card moves.
        let holders: Vec<PlayerId> = self
            .hands
            .iter()
            .filter(|(_, hand)| !hand.is_empty())
            .map(|(player, _)| player)
            .collect();
        if holders.len() == 1 {
            let winner = holders[0];
            self.end_game(winner);
            return Ok(TurnOutcome::Finished { winner });
        }

        self.round += 1;
        log::debug!("[engine] round {} begins", self.round);

        for player in PlayerId::all(self.config.num_players) {
            if self.hands[player].is_empty() {
                continue;
            }
            self.issue_move(ZoneRef::Hand(player), ZoneRef::Table(player))?;
            self.stagger().await;
        }

        self.settle_pending().await?;

        // Flip every non-empty table pile's top card face-up. Orientation is
        // instantaneous, so no delay is needed between flips.
        let mut revealed = Vec::new();
        for (player, pile) in self.table_piles.iter_mut() {
            if pile.is_empty() {
                continue;
            }
            pile.flip_top_up();
            let card = pile.peek_top()?;
            revealed.push(Reveal {
                player,
                card: card.token(),
            });
        }
        for reveal in &revealed {
            self.choreographer.set_orientation(reveal.card, true);
        }

        let round_winner = self.resolution.judge(&revealed);
        if let Some(winner) = round_winner {
            log::debug!("[engine] round {} judged for {}", self.round, winner);
        }

        Ok(TurnOutcome::Played {
            revealed,
            round_winner,
        })
    }

    /// Abandon everything and return to an idle table.
    ///
    /// Valid from any phase. Outstanding move tickets are dropped *before*
    /// zones are touched, so a completion signaled after the reset lands in
    /// a closed channel instead of mutating fresh state.
    pub fn reset(&mut self) {
        let abandoned = self.pending.len();
        self.pending.clear();
        if abandoned > 0 {
            log::warn!("[engine] reset abandoned {} in-flight moves", abandoned);
        }

        self.draw_pile = Deck::standard();
        for (_, hand) in self.hands.iter_mut() {
            hand.clear();
        }
        for (_, pile) in self.table_piles.iter_mut() {
            pile.clear();
        }
        self.phase = Phase::Idle;
        self.winner = None;
        self.round = 0;
        log::info!("[engine] table reset");
    }

    // === Move discipline ===

    /// Take the source zone's top card and start its animation. The card is
    /// owned by the ticket until the completion is processed.
    fn issue_move(&mut self, from: ZoneRef, dest: ZoneRef) -> Result<(), EngineError> {
        let card = self.zone_mut(from).take_top()?;
        let token = card.token();
        let start = self.anchors.get(from);
        let end = self.anchors.get(dest);
        let done =
            self.choreographer
                .animate_move(token, start, end, self.config.timing.move_duration);
        log::debug!("[engine] move {} issued: {} -> {}", token, from, dest);
        self.pending.push(MoveTicket::new(card, dest, done));
        Ok(())
    }

    /// Soft ordering device: pause between successive moves, finalizing any
    /// already-completed tickets along the way.
    async fn stagger(&mut self) {
        sleep(self.config.timing.stagger).await;
        self.drain_finished();
    }

    fn drain_finished(&mut self) {
        let mut i = 0;
        while i < self.pending.len() {
            if self.pending[i].is_finished() {
                let ticket = self.pending.remove(i);
                self.finalize(ticket);
            } else {
                i += 1;
            }
        }
    }

    fn finalize(&mut self, ticket: MoveTicket) {
        log::debug!("[engine] move {} landed in {}", ticket.card, ticket.dest);
        self.zone_mut(ticket.dest).add_top(ticket.card);
    }

    /// Hard ordering device: await every outstanding completion, bounded by
    /// the animation timeout, then apply the settle pause. On failure the
    /// phase is poisoned and `reset()` is the recovery; only the failed
    /// ticket is consumed, so the rest stay pending and the in-flight count
    /// stays honest while the table is poisoned.
    async fn settle_pending(&mut self) -> Result<(), EngineError> {
        let bound = self.config.timing.animation_timeout;
        while !self.pending.is_empty() {
            let MoveTicket { card, dest, done } = self.pending.remove(0);
            match timeout(bound, done.wait()).await {
                Ok(Ok(())) => self.zone_mut(dest).add_top(card),
                Ok(Err(_)) => {
                    log::warn!("[engine] completion lost for {} -> {}", card, dest);
                    return Err(EngineError::AnimationFailed);
                }
                Err(_) => {
                    log::warn!(
                        "[engine] move {} -> {} timed out after {:?}",
                        card,
                        dest,
                        bound
                    );
                    return Err(EngineError::AnimationTimedOut {
                        zone: dest,
                        timeout: bound,
                    });
                }
            }
        }
        sleep(self.config.timing.settle).await;
        Ok(())
    }

    fn end_game(&mut self, winner: PlayerId) {
        self.winner = Some(winner);
        self.phase = Phase::Finished;
        log::info!("[engine] {} wins after {} rounds", winner, self.round);
    }

    fn zone_mut(&mut self, zone: ZoneRef) -> &mut Deck {
        match zone {
            ZoneRef::DrawPile => &mut self.draw_pile,
            ZoneRef::Hand(p) => &mut self.hands[p],
            ZoneRef::Table(p) => &mut self.table_piles[p],
        }
    }
}
