//! Move tickets: in-flight single-card transfers.
//!
//! A ticket owns the card between the logical removal from its source zone
//! and the append to its destination, so an in-flight card is counted in
//! neither zone but always in exactly one place. Dropping a ticket (on
//! reset) invalidates its completion: a late signal lands in a closed
//! channel and cannot touch post-reset state.

use crate::cards::Card;
use crate::choreo::Completion;
use crate::zones::ZoneRef;

/// One in-flight move: the removed card, where it lands, and the signal
/// that gates the landing.
#[derive(Debug)]
pub struct MoveTicket {
    pub(crate) card: Card,
    pub(crate) dest: ZoneRef,
    pub(crate) done: Completion,
}

impl MoveTicket {
    #[must_use]
    pub(crate) fn new(card: Card, dest: ZoneRef, done: Completion) -> Self {
        Self { card, dest, done }
    }

    /// Non-blocking completion check.
    pub(crate) fn is_finished(&mut self) -> bool {
        self.done.try_finished()
    }
}
