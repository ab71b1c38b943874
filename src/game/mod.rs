//! Round engine and state management.

use core::time::Duration;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, error, warn};

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{ActionError, DeckExhausted};
use crate::event::{Event, EventSink};
use crate::hand::{Hand, Seat};
use crate::options::GameOptions;
use crate::result::{Outcome, RoundResult};
use crate::wallet::Wallet;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::RoundState;

/// A single-player blackjack table.
///
/// The game owns the deck and both hands, takes bets from a [`Wallet`], and
/// reports everything it does to an [`EventSink`]. Actions take `&mut self`,
/// so one action always finishes before the next starts. An action called
/// in a state that does not allow it changes nothing and returns an
/// `InvalidState` error.
///
/// # Example
///
/// ```
/// use bjtable::{Game, GameOptions, MemoryWallet, RoundState};
///
/// let mut game = Game::new(GameOptions::default(), MemoryWallet::default(), (), 42);
/// game.place_bet(10_000).unwrap();
/// game.deal().unwrap();
/// if game.state() == RoundState::Dealt {
///     game.stand().unwrap();
/// }
/// assert_eq!(game.state(), RoundState::Finished);
/// ```
#[derive(Debug)]
pub struct Game<W, S = ()> {
    options: GameOptions,
    wallet: W,
    sink: S,
    rng: ChaCha8Rng,
    /// Deck for the current round.
    deck: Deck,
    /// Deck to use on the next deal instead of a freshly shuffled one.
    primed: Option<Deck>,
    state: RoundState,
    bet: u64,
    player: Hand,
    dealer: Hand,
    result: Option<RoundResult>,
    /// Set once the player hits; rules out double and split.
    hit_taken: bool,
    dealer_peeked: bool,
}

impl<W: Wallet, S: EventSink> Game<W, S> {
    /// Creates a table in the betting state.
    ///
    /// `seed` drives every shuffle, so equal seeds replay equal games.
    #[must_use]
    pub fn new(options: GameOptions, wallet: W, sink: S, seed: u64) -> Self {
        Self {
            options,
            wallet,
            sink,
            rng: ChaCha8Rng::seed_from_u64(seed),
            deck: Deck::empty(),
            primed: None,
            state: RoundState::Betting,
            bet: 0,
            player: Hand::new(Seat::Player),
            dealer: Hand::new(Seat::Dealer),
            result: None,
            hit_taken: false,
            dealer_peeked: false,
        }
    }

    /// Returns the table options.
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current round state.
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the total bet on the current round.
    pub const fn bet(&self) -> u64 {
        self.bet
    }

    /// Returns the player's hand.
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the player's total.
    pub fn player_score(&self) -> u8 {
        self.player.visible_score()
    }

    /// Returns the dealer's total, or `None` while the hole card is down.
    pub fn dealer_score(&self) -> Option<u8> {
        if self.dealer.has_concealed() {
            None
        } else {
            Some(self.dealer.score(true))
        }
    }

    /// Returns the outcome once the round is settled.
    pub fn outcome(&self) -> Option<Outcome> {
        self.result.map(|r| r.outcome)
    }

    /// Returns the settlement once the round is settled.
    pub const fn result(&self) -> Option<RoundResult> {
        self.result
    }

    /// Returns whether the dealer peeked under the up card this round.
    ///
    /// Advisory only; nothing in the rules depends on it.
    pub const fn dealer_peeked(&self) -> bool {
        self.dealer_peeked
    }

    /// Returns whether the player has hit this round.
    pub const fn hit_taken(&self) -> bool {
        self.hit_taken
    }

    /// Returns the number of cards left in the round's deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the wallet.
    pub const fn wallet(&self) -> &W {
        &self.wallet
    }

    /// Returns the wallet mutably.
    pub const fn wallet_mut(&mut self) -> &mut W {
        &mut self.wallet
    }

    /// Returns the event sink.
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns the event sink mutably.
    pub const fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Splits the game into its wallet and sink.
    pub fn into_parts(self) -> (W, S) {
        (self.wallet, self.sink)
    }

    /// Uses `deck` as-is for the next deal instead of building and shuffling
    /// a fresh one. Intended for replays and tests.
    pub fn prime_deck(&mut self, deck: Deck) {
        self.primed = Some(deck);
    }

    /// Starts the next round.
    ///
    /// Clears both hands and the settled bet. From `Betting` this does
    /// nothing, so a bet already placed is kept.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidState`] while a round is in play.
    pub fn new_round(&mut self) -> Result<(), ActionError> {
        match self.state {
            RoundState::Finished => {
                self.reset_round();
                Ok(())
            }
            RoundState::Betting => Ok(()),
            RoundState::Dealt | RoundState::Stand => Err(self.reject("new_round")),
        }
    }

    fn reset_round(&mut self) {
        self.player.clear();
        self.dealer.clear();
        self.deck = Deck::empty();
        self.bet = 0;
        self.result = None;
        self.hit_taken = false;
        self.dealer_peeked = false;
        self.set_state(RoundState::Betting);
    }

    fn set_state(&mut self, state: RoundState) {
        debug!(from = self.state.as_str(), to = state.as_str(), "round state changed");
        self.state = state;
        self.sink.emit(Event::StateChanged(state));
    }

    fn reject(&self, action: &'static str) -> ActionError {
        warn!(action, state = self.state.as_str(), "action ignored");
        ActionError::InvalidState
    }

    fn pause(&mut self, delay: Duration) {
        if !delay.is_zero() {
            self.sink.pause(delay);
        }
    }

    fn emit_scores(&mut self) {
        let player = Some(self.player_score());
        let dealer = self.dealer_score();
        self.sink.emit(Event::ScoreChanged {
            seat: Seat::Player,
            score: player,
        });
        self.sink.emit(Event::ScoreChanged {
            seat: Seat::Dealer,
            score: dealer,
        });
    }

    /// Draws the top card into `seat`'s hand.
    ///
    /// An empty deck aborts the round before the error is returned.
    fn draw_into(&mut self, seat: Seat, concealed: bool) -> Result<Card, DeckExhausted> {
        let card = match self.deck.draw() {
            Ok(card) if concealed => card.face_down(),
            Ok(card) => card,
            Err(err) => {
                self.abort();
                return Err(err);
            }
        };

        match seat {
            Seat::Player => self.player.add_card(card),
            Seat::Dealer => self.dealer.add_card(card),
        }
        debug!(?seat, %card, concealed, remaining = self.deck.len(), "card dealt");

        self.sink.emit(Event::CardDealt { seat, card });
        self.pause(self.options.deal_delay);
        Ok(card)
    }

    /// Ends the round without an outcome and hands the bet back.
    fn abort(&mut self) {
        let refund = self.bet;
        error!(refund, state = self.state.as_str(), "deck exhausted, aborting round");

        if refund > 0 {
            self.wallet.credit(refund);
        }
        self.bet = 0;
        self.result = None;
        self.set_state(RoundState::Finished);
        self.sink.emit(Event::RoundAborted { refund });
    }
}
