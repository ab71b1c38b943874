use tracing::{debug, info};

use crate::error::DeckExhausted;
use crate::event::{Event, EventSink};
use crate::hand::Seat;
use crate::result::{Outcome, RoundResult};
use crate::wallet::Wallet;

use super::{Game, RoundState};

/// The dealer draws while below this total, soft or hard.
const DEALER_STANDS_ON: u8 = 17;

impl<W: Wallet, S: EventSink> Game<W, S> {
    /// Dealer peeks under an Ace or ten-value up card.
    pub(super) fn peek(&mut self) {
        let Some(up_card) = self.dealer.up_card().copied() else {
            return;
        };

        if up_card.is_ace() || up_card.rank.is_ten_value() {
            debug!(%up_card, "dealer peeking");
            self.dealer_peeked = true;
            self.sink.emit(Event::DealerPeek { up_card });
            self.pause(self.options.peek_delay);
        }
    }

    /// Ends the player's turn: reveals the hole card, plays the dealer out
    /// and settles the round.
    pub(super) fn play_out(&mut self) -> Result<RoundResult, DeckExhausted> {
        self.set_state(RoundState::Stand);

        for card in self.dealer.reveal() {
            self.sink.emit(Event::CardRevealed { card });
            self.pause(self.options.reveal_delay);
        }
        self.emit_scores();

        self.dealer_play()?;

        let outcome = self.compare();
        Ok(self.resolve(outcome))
    }

    /// Dealer draws until reaching 17 or more.
    fn dealer_play(&mut self) -> Result<(), DeckExhausted> {
        while self.dealer.score(true) < DEALER_STANDS_ON {
            self.draw_into(Seat::Dealer, false)?;
            self.emit_scores();
        }
        Ok(())
    }

    fn compare(&self) -> Outcome {
        let player = self.player.score(true);
        let dealer = self.dealer.score(true);

        if dealer > 21 {
            Outcome::DealerBust
        } else if player > dealer {
            Outcome::PlayerWin
        } else if player < dealer {
            Outcome::DealerWin
        } else {
            Outcome::Push
        }
    }

    /// Settles the bet, credits any payout and records the outcome.
    pub(super) fn resolve(&mut self, outcome: Outcome) -> RoundResult {
        let result = RoundResult::settle(
            outcome,
            self.bet,
            self.player.score(true),
            self.dealer.score(true),
        );
        self.result = Some(result);
        self.set_state(RoundState::Finished);

        if result.payout > 0 {
            self.wallet.credit(result.payout);
        }
        self.wallet
            .record_outcome(outcome, result.bet, result.profit);

        info!(
            %outcome,
            bet = result.bet,
            payout = result.payout,
            profit = result.profit,
            player = result.player_score,
            dealer = result.dealer_score,
            "round finished"
        );
        self.sink.emit(Event::RoundFinished {
            outcome,
            profit: result.profit,
        });

        result
    }
}
