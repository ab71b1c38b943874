use tracing::{debug, warn};

use crate::deck::Deck;
use crate::error::{BetError, DealError};
use crate::event::{Event, EventSink};
use crate::hand::Seat;
use crate::wallet::Wallet;

use super::{Game, RoundState};

impl<W: Wallet, S: EventSink> Game<W, S> {
    /// Places a bet, adding to any bet already on the table.
    ///
    /// After a finished round the table is reset first; the wallet is left
    /// alone. Returns the total bet.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is zero, a round is in play, or the
    /// wallet cannot cover the amount. Nothing changes on error.
    pub fn place_bet(&mut self, amount: u64) -> Result<u64, BetError> {
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }

        let finished = match self.state {
            RoundState::Betting => false,
            RoundState::Finished => true,
            RoundState::Dealt | RoundState::Stand => {
                warn!(amount, state = self.state.as_str(), "bet ignored");
                return Err(BetError::InvalidState);
            }
        };

        if !self.wallet.spend(amount) {
            warn!(amount, balance = self.wallet.balance(), "insufficient funds for bet");
            self.sink.emit(Event::FundsRejected { amount });
            return Err(BetError::InsufficientFunds);
        }

        if finished {
            self.reset_round();
        }

        self.bet = self.bet.saturating_add(amount);
        debug!(amount, total = self.bet, "bet placed");
        self.sink.emit(Event::BetPlaced {
            amount,
            total: self.bet,
        });

        Ok(self.bet)
    }

    /// Returns whether [`deal`](Self::deal) would start a round.
    pub const fn can_deal(&self) -> bool {
        matches!(self.state, RoundState::Betting) && self.bet > 0
    }

    /// Deals the opening cards from a fresh deck.
    ///
    /// Cards go player, dealer (up), player, dealer (hole, face down). A
    /// dealer Ace or ten triggers a peek. A two-card 21 for the player
    /// stands automatically, so the round may already be finished when this
    /// returns.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not taking bets, no bet has been
    /// placed, or the deck runs out (the round is then aborted and the bet
    /// refunded).
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != RoundState::Betting {
            warn!(state = self.state.as_str(), "deal ignored");
            return Err(DealError::InvalidState);
        }

        if self.bet == 0 {
            return Err(DealError::NoBet);
        }

        self.player.clear();
        self.dealer.clear();
        self.result = None;
        self.hit_taken = false;
        self.dealer_peeked = false;
        self.deck = match self.primed.take() {
            Some(deck) => deck,
            None => Deck::shuffled(&mut self.rng),
        };

        self.set_state(RoundState::Dealt);

        self.draw_into(Seat::Player, false)?;
        self.draw_into(Seat::Dealer, false)?;
        self.draw_into(Seat::Player, false)?;
        self.draw_into(Seat::Dealer, true)?;

        self.emit_scores();
        self.peek();

        if self.player.visible_score() == 21 {
            debug!("player natural, standing");
            self.play_out()?;
        }

        Ok(())
    }
}
