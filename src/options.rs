//! Game configuration options.

use core::time::Duration;

use crate::wallet::STARTING_BALANCE;

/// Configuration options for a blackjack table.
///
/// Delays default to zero so a game runs straight through. The engine only
/// reads the delays; the other fields are for callers that build a wallet
/// or validate bets. Use the builder pattern to customize options:
///
/// ```
/// use core::time::Duration;
/// use bjtable::GameOptions;
///
/// let options = GameOptions::default()
///     .with_deal_delay(Duration::from_millis(250))
///     .with_min_bet(5_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Pause after each dealt card.
    pub deal_delay: Duration,
    /// Pause after the dealer's hole card is turned over.
    pub reveal_delay: Duration,
    /// Pause while the dealer peeks under an Ace or ten.
    pub peek_delay: Duration,
    /// Balance a new or bankrupt wallet starts with. The engine does not
    /// read this; front ends pass it to [`MemoryWallet`](crate::MemoryWallet).
    pub starting_balance: u64,
    /// Smallest bet front ends should accept. The engine itself only
    /// rejects zero.
    pub min_bet: u64,
    /// A restored balance below this is treated as bankrupt. Like
    /// `starting_balance`, this is wallet setup the engine never reads.
    pub bankrupt_threshold: u64,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            deal_delay: Duration::ZERO,
            reveal_delay: Duration::ZERO,
            peek_delay: Duration::ZERO,
            starting_balance: STARTING_BALANCE,
            min_bet: 10_000,
            bankrupt_threshold: 10_000,
        }
    }
}

impl GameOptions {
    /// Options with table pacing for a human audience.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use bjtable::GameOptions;
    ///
    /// let options = GameOptions::paced();
    /// assert_eq!(options.deal_delay, Duration::from_millis(400));
    /// ```
    #[must_use]
    pub fn paced() -> Self {
        Self::default()
            .with_deal_delay(Duration::from_millis(400))
            .with_reveal_delay(Duration::from_millis(600))
            .with_peek_delay(Duration::from_millis(900))
    }

    /// Sets the pause after each dealt card.
    #[must_use]
    pub const fn with_deal_delay(mut self, delay: Duration) -> Self {
        self.deal_delay = delay;
        self
    }

    /// Sets the pause after the hole card is revealed.
    #[must_use]
    pub const fn with_reveal_delay(mut self, delay: Duration) -> Self {
        self.reveal_delay = delay;
        self
    }

    /// Sets the dealer peek pause.
    #[must_use]
    pub const fn with_peek_delay(mut self, delay: Duration) -> Self {
        self.peek_delay = delay;
        self
    }

    /// Sets the starting balance.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_balance(50_000);
    /// assert_eq!(options.starting_balance, 50_000);
    /// ```
    #[must_use]
    pub const fn with_starting_balance(mut self, balance: u64) -> Self {
        self.starting_balance = balance;
        self
    }

    /// Sets the minimum bet.
    #[must_use]
    pub const fn with_min_bet(mut self, min_bet: u64) -> Self {
        self.min_bet = min_bet;
        self
    }

    /// Sets the bankrupt threshold.
    #[must_use]
    pub const fn with_bankrupt_threshold(mut self, threshold: u64) -> Self {
        self.bankrupt_threshold = threshold;
        self
    }
}
