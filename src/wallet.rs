//! Wallet capability and an in-memory implementation.

use alloc::collections::VecDeque;

use crate::result::Outcome;

/// Funds the game draws bets from and pays winnings into.
///
/// The game never persists anything itself; an implementation may save its
/// state on every call.
pub trait Wallet {
    /// Returns the current balance.
    fn balance(&self) -> u64;

    /// Debits `amount` if the balance covers it.
    ///
    /// Returns `false` and leaves the balance untouched otherwise.
    fn spend(&mut self, amount: u64) -> bool;

    /// Credits `amount`. Implementations should saturate rather than
    /// overflow.
    fn credit(&mut self, amount: u64);

    /// Records a finished round.
    fn record_outcome(&mut self, outcome: Outcome, bet: u64, profit: i64);
}

impl<W: Wallet + ?Sized> Wallet for &mut W {
    fn balance(&self) -> u64 {
        (**self).balance()
    }

    fn spend(&mut self, amount: u64) -> bool {
        (**self).spend(amount)
    }

    fn credit(&mut self, amount: u64) {
        (**self).credit(amount);
    }

    fn record_outcome(&mut self, outcome: Outcome, bet: u64, profit: i64) {
        (**self).record_outcome(outcome, bet, profit);
    }
}

/// Maximum number of history entries kept.
pub const HISTORY_LIMIT: usize = 10;

/// Starting balance of a fresh wallet.
pub const STARTING_BALANCE: u64 = 100_000;

/// One finished round in the wallet history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Sequence number of the round, starting at 1.
    pub round: u64,
    /// The outcome.
    pub outcome: Outcome,
    /// The total bet.
    pub bet: u64,
    /// Net result of the round.
    pub profit: i64,
}

/// Aggregate statistics across all recorded rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    /// Number of rounds recorded.
    pub total_games: u64,
    /// Rounds with a positive profit.
    pub wins: u64,
    /// Sum of all profits.
    pub total_profit: i64,
}

impl Stats {
    /// Returns the win rate as a percentage, or 0 before the first game.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            return 0.0;
        }
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for game counts"
        )]
        let rate = self.wins as f64 / self.total_games as f64 * 100.0;
        rate
    }
}

/// A wallet kept in memory, with bounded history and running stats.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryWallet {
    balance: u64,
    starting_balance: u64,
    history: VecDeque<HistoryEntry>,
    stats: Stats,
    rounds: u64,
}

impl MemoryWallet {
    /// Creates a wallet holding `balance`.
    #[must_use]
    pub const fn new(balance: u64) -> Self {
        Self {
            balance,
            starting_balance: balance,
            history: VecDeque::new(),
            stats: Stats {
                total_games: 0,
                wins: 0,
                total_profit: 0,
            },
            rounds: 0,
        }
    }

    /// Rebuilds a wallet from saved state.
    ///
    /// A saved balance below `bankrupt_threshold` counts as bankrupt and is
    /// replaced by `starting_balance`. History beyond [`HISTORY_LIMIT`] is
    /// dropped from the oldest end.
    #[must_use]
    pub fn restore(
        balance: u64,
        history: impl IntoIterator<Item = HistoryEntry>,
        stats: Stats,
        starting_balance: u64,
        bankrupt_threshold: u64,
    ) -> Self {
        let mut history: VecDeque<HistoryEntry> = history.into_iter().collect();
        history.truncate(HISTORY_LIMIT);
        let rounds = history.iter().map(|h| h.round).max().unwrap_or(0);

        let balance = if balance < bankrupt_threshold {
            tracing::info!(balance, starting_balance, "wallet bankrupt, resetting balance");
            starting_balance
        } else {
            balance
        };

        Self {
            balance,
            starting_balance,
            history,
            stats,
            rounds,
        }
    }

    /// Returns the history, most recent first.
    pub fn history(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.history.iter()
    }

    /// Returns the number of history entries.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Returns the aggregate statistics.
    #[must_use]
    pub const fn stats(&self) -> Stats {
        self.stats
    }

    /// Clears history and statistics, keeping the balance.
    pub fn reset_stats(&mut self) {
        self.history.clear();
        self.stats = Stats::default();
    }

    /// Puts the balance back to the starting balance.
    pub const fn reset_balance(&mut self) {
        self.balance = self.starting_balance;
    }
}

impl Default for MemoryWallet {
    fn default() -> Self {
        Self::new(STARTING_BALANCE)
    }
}

impl Wallet for MemoryWallet {
    fn balance(&self) -> u64 {
        self.balance
    }

    fn spend(&mut self, amount: u64) -> bool {
        if self.balance < amount {
            return false;
        }
        self.balance -= amount;
        true
    }

    fn credit(&mut self, amount: u64) {
        self.balance = self.balance.saturating_add(amount);
    }

    fn record_outcome(&mut self, outcome: Outcome, bet: u64, profit: i64) {
        self.rounds += 1;
        self.stats.total_games += 1;
        if profit > 0 {
            self.stats.wins += 1;
        }
        self.stats.total_profit = self.stats.total_profit.saturating_add(profit);

        self.history.push_front(HistoryEntry {
            round: self.rounds,
            outcome,
            bet,
            profit,
        });
        self.history.truncate(HISTORY_LIMIT);
    }
}
