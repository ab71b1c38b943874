use tracing::{debug, warn};

use crate::card::Card;
use crate::error::ActionError;
use crate::event::{Event, EventSink};
use crate::hand::Seat;
use crate::result::{Outcome, RoundResult};
use crate::wallet::Wallet;

use super::{Game, RoundState};

impl<W: Wallet, S: EventSink> Game<W, S> {
    /// Returns whether the player may hit.
    pub const fn can_hit(&self) -> bool {
        matches!(self.state, RoundState::Dealt)
    }

    /// Returns whether the player may stand.
    pub const fn can_stand(&self) -> bool {
        matches!(self.state, RoundState::Dealt)
    }

    /// Returns whether the player may double down: first decision on two
    /// cards, with enough in the wallet to match the bet.
    pub fn can_double(&self) -> bool {
        self.state == RoundState::Dealt
            && !self.hit_taken
            && self.player.len() == 2
            && self.wallet.balance() >= self.bet
    }

    /// Returns whether split is offered: first decision on a pair.
    pub fn can_split(&self) -> bool {
        self.state == RoundState::Dealt && !self.hit_taken && self.player.can_split()
    }

    /// Player action: Hit (draw a card).
    ///
    /// Going over 21 ends the round as [`Outcome::PlayerBust`]; reaching
    /// exactly 21 stands automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if the player is not on turn, or the deck runs out
    /// (the round is then aborted and the bet refunded).
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        if self.state != RoundState::Dealt {
            return Err(self.reject("hit"));
        }

        let card = self.draw_into(Seat::Player, false)?;
        self.hit_taken = true;
        self.emit_scores();

        let score = self.player.visible_score();
        if score > 21 {
            self.resolve(Outcome::PlayerBust);
        } else if score == 21 {
            debug!("player reached 21, standing");
            self.play_out()?;
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// Reveals the hole card, plays the dealer out and settles the round.
    ///
    /// # Errors
    ///
    /// Returns an error if the player is not on turn, or the deck runs out
    /// while the dealer draws (the round is then aborted and the bet
    /// refunded).
    pub fn stand(&mut self) -> Result<RoundResult, ActionError> {
        if self.state != RoundState::Dealt {
            return Err(self.reject("stand"));
        }

        Ok(self.play_out()?)
    }

    /// Player action: Double down (double bet, receive one card, then stand).
    ///
    /// # Errors
    ///
    /// Returns an error if the player is not on turn, has already hit, the
    /// wallet cannot match the bet, or the deck runs out. Nothing changes
    /// when the wallet cannot match the bet.
    pub fn double_down(&mut self) -> Result<Card, ActionError> {
        if self.state != RoundState::Dealt {
            return Err(self.reject("double_down"));
        }

        if self.hit_taken || self.player.len() != 2 {
            return Err(ActionError::CannotDouble);
        }

        let extra = self.bet;
        if !self.wallet.spend(extra) {
            warn!(amount = extra, balance = self.wallet.balance(), "insufficient funds to double");
            self.sink.emit(Event::FundsRejected { amount: extra });
            return Err(ActionError::InsufficientFunds);
        }

        self.bet = self.bet.saturating_add(extra);
        debug!(total = self.bet, "doubled down");
        self.sink.emit(Event::BetPlaced {
            amount: extra,
            total: self.bet,
        });

        let card = self.draw_into(Seat::Player, false)?;
        self.emit_scores();

        if self.player.visible_score() > 21 {
            self.resolve(Outcome::PlayerBust);
        } else {
            self.play_out()?;
        }

        Ok(card)
    }

    /// Player action: Split.
    ///
    /// Split play is not offered yet. On a splittable pair this emits
    /// [`Event::SplitUnavailable`] and leaves the round as it is.
    ///
    /// # Errors
    ///
    /// Returns an error if the player is not on turn or the hand is not a
    /// pair.
    pub fn split(&mut self) -> Result<(), ActionError> {
        if self.state != RoundState::Dealt {
            return Err(self.reject("split"));
        }

        if !self.can_split() {
            return Err(ActionError::CannotSplit);
        }

        debug!("split requested, not available");
        self.sink.emit(Event::SplitUnavailable);
        Ok(())
    }
}
