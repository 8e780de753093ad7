//! The choreographer contract and headless implementations.
//!
//! The choreographer owns presentation state exclusively. It moves a card's
//! visual proxy between anchors and reports back through a single-shot
//! [`Completion`]; it never mutates game-logic state. The engine alone
//! finalizes a card's zone membership, when *it* processes the completion.

use std::time::Duration;

use tokio::sync::oneshot;

use crate::cards::CardToken;

use super::anchor::Anchor;

/// Sender half of a move's completion signal. Signals exactly once.
#[derive(Debug)]
pub struct CompletionSignal {
    tx: oneshot::Sender<()>,
}

impl CompletionSignal {
    /// Report the move as visually complete.
    pub fn signal(self) {
        // Receiver may already be gone (reset dropped the ticket).
        let _ = self.tx.send(());
    }
}

/// Receiver half of a move's completion signal.
///
/// The engine may poll it between staggers ([`Completion::try_finished`])
/// and must await it ([`Completion::wait`]) before a phase transition.
#[derive(Debug)]
pub struct Completion {
    rx: oneshot::Receiver<()>,
    finished: bool,
    lost: bool,
}

impl Completion {
    /// Create a connected signal/completion pair.
    #[must_use]
    pub fn pair() -> (CompletionSignal, Completion) {
        let (tx, rx) = oneshot::channel();
        (
            CompletionSignal { tx },
            Completion {
                rx,
                finished: false,
                lost: false,
            },
        )
    }

    /// Non-blocking check. Returns `true` once the signal has arrived; a
    /// dropped signal keeps returning `false` and surfaces as an error from
    /// [`Completion::wait`].
    pub fn try_finished(&mut self) -> bool {
        if self.finished {
            return true;
        }
        if self.lost {
            return false;
        }
        match self.rx.try_recv() {
            Ok(()) => {
                self.finished = true;
                true
            }
            // The receiver must never be touched again after `Closed`;
            // latch it so `wait` can report the loss without re-polling.
            Err(oneshot::error::TryRecvError::Closed) => {
                self.lost = true;
                false
            }
            Err(oneshot::error::TryRecvError::Empty) => false,
        }
    }

    /// Await the signal. Errors if the choreographer dropped its half
    /// without signaling.
    pub async fn wait(self) -> Result<(), CompletionLost> {
        if self.finished {
            return Ok(());
        }
        if self.lost {
            return Err(CompletionLost);
        }
        self.rx.await.map_err(|_| CompletionLost)
    }
}

/// The sender half was dropped without signaling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompletionLost;

/// Presentation collaborator that animates card moves.
///
/// `animate_move` must not block and must resolve its `Completion` exactly
/// once. `set_orientation` is instantaneous and carries no completion.
pub trait Choreographer: Send + Sync {
    /// Start moving `card`'s proxy from `from` to `to` over `duration`.
    fn animate_move(
        &self,
        card: CardToken,
        from: Anchor,
        to: Anchor,
        duration: Duration,
    ) -> Completion;

    /// Update a proxy's face-up/face-down orientation.
    fn set_orientation(&self, card: CardToken, face_up: bool);
}

/// Headless choreographer that completes every move immediately.
///
/// For tests and hosts without a renderer.
#[derive(Clone, Copy, Debug, Default)]
pub struct InstantChoreographer;

impl Choreographer for InstantChoreographer {
    fn animate_move(
        &self,
        card: CardToken,
        _from: Anchor,
        _to: Anchor,
        _duration: Duration,
    ) -> Completion {
        log::trace!("[choreo] instant move of {}", card);
        let (signal, completion) = Completion::pair();
        signal.signal();
        completion
    }

    fn set_orientation(&self, card: CardToken, face_up: bool) {
        log::trace!("[choreo] {} face_up={}", card, face_up);
    }
}

/// Headless choreographer that signals after the requested duration.
///
/// Completions resolve on a spawned timer task, so moves genuinely overlap
/// under stagger. Useful for exercising the settle and timeout paths.
#[derive(Clone, Copy, Debug, Default)]
pub struct DelayedChoreographer;

impl Choreographer for DelayedChoreographer {
    fn animate_move(
        &self,
        card: CardToken,
        _from: Anchor,
        _to: Anchor,
        duration: Duration,
    ) -> Completion {
        log::trace!("[choreo] timed move of {} over {:?}", card, duration);
        let (signal, completion) = Completion::pair();
        tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            signal.signal();
        });
        completion
    }

    fn set_orientation(&self, card: CardToken, face_up: bool) {
        log::trace!("[choreo] {} face_up={}", card, face_up);
    }
}
