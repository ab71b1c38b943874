//! Events emitted to a presentation layer.

use alloc::vec::Vec;
use core::time::Duration;

use crate::card::Card;
use crate::game::RoundState;
use crate::hand::Seat;
use crate::result::Outcome;

/// Something that happened at the table.
///
/// The stream is enough for a renderer to follow the round without
/// re-deriving any game logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A bet was accepted.
    BetPlaced {
        /// Amount added by this call.
        amount: u64,
        /// Total bet on the round.
        total: u64,
    },
    /// The wallet could not cover a bet or double down.
    FundsRejected {
        /// Amount that was asked for.
        amount: u64,
    },
    /// A card was dealt. A concealed card should be drawn face down.
    CardDealt {
        /// Who received the card.
        seat: Seat,
        /// The card.
        card: Card,
    },
    /// The dealer's hole card was turned over.
    CardRevealed {
        /// The card, now face up.
        card: Card,
    },
    /// A displayed total changed. `None` means the total is not known yet.
    ScoreChanged {
        /// Whose total changed.
        seat: Seat,
        /// The new total.
        score: Option<u8>,
    },
    /// The round moved to a new state.
    StateChanged(RoundState),
    /// The dealer shows an Ace or a ten and peeks at the hole card.
    DealerPeek {
        /// The dealer's up card.
        up_card: Card,
    },
    /// Split was requested on a pair; split play is not offered yet.
    SplitUnavailable,
    /// The round was settled.
    RoundFinished {
        /// The outcome.
        outcome: Outcome,
        /// Net result for the player.
        profit: i64,
    },
    /// The round was aborted by a system fault and the bet refunded.
    RoundAborted {
        /// Amount refunded.
        refund: u64,
    },
}

/// Receives events and pacing pauses from the game.
pub trait EventSink {
    /// Handles an event.
    fn emit(&mut self, event: Event);

    /// Waits between visual steps. Only called for non-zero delays.
    fn pause(&mut self, duration: Duration) {
        let _ = duration;
    }
}

impl EventSink for () {
    fn emit(&mut self, _event: Event) {}
}

impl EventSink for Vec<Event> {
    fn emit(&mut self, event: Event) {
        self.push(event);
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn emit(&mut self, event: Event) {
        (**self).emit(event);
    }

    fn pause(&mut self, duration: Duration) {
        (**self).pause(duration);
    }
}

/// Sink adapter that sleeps the current thread on every pause.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[derive(Debug, Clone, Default)]
pub struct PacedSink<S> {
    inner: S,
}

#[cfg(feature = "std")]
impl<S: EventSink> PacedSink<S> {
    /// Wraps `inner`.
    pub const fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Returns the wrapped sink.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

#[cfg(feature = "std")]
impl<S: EventSink> EventSink for PacedSink<S> {
    fn emit(&mut self, event: Event) {
        self.inner.emit(event);
    }

    fn pause(&mut self, duration: Duration) {
        self.inner.pause(duration);
        std::thread::sleep(duration);
    }
}
