//! Round outcome types.

use core::fmt;

/// Terminal outcome of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player has the higher total.
    PlayerWin,
    /// Dealer went over 21.
    DealerBust,
    /// Equal totals.
    Push,
    /// Player went over 21.
    PlayerBust,
    /// Dealer has the higher total.
    DealerWin,
}

impl Outcome {
    /// All outcomes.
    pub const ALL: [Self; 5] = [
        Self::PlayerWin,
        Self::DealerBust,
        Self::Push,
        Self::PlayerBust,
        Self::DealerWin,
    ];

    /// Parses a label produced by [`label`](Self::label).
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|outcome| outcome.label() == label)
    }

    /// Returns how many times the bet is paid back.
    #[must_use]
    pub const fn multiplier(self) -> u64 {
        match self {
            Self::PlayerWin | Self::DealerBust => 2,
            Self::Push => 1,
            Self::PlayerBust | Self::DealerWin => 0,
        }
    }

    /// Returns whether the player came out ahead.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::PlayerWin | Self::DealerBust)
    }

    /// Returns the label shown to the player.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PlayerWin => "PLAYER WIN",
            Self::DealerBust => "DEALER BUST",
            Self::Push => "PUSH",
            Self::PlayerBust => "PLAYER BUST",
            Self::DealerWin => "DEALER WIN",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Settlement of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome.
    pub outcome: Outcome,
    /// The total bet, including any double down.
    pub bet: u64,
    /// Amount credited back to the wallet.
    pub payout: u64,
    /// Net result (positive = profit, negative = loss).
    pub profit: i64,
    /// The player's final total.
    pub player_score: u8,
    /// The dealer's final total.
    pub dealer_score: u8,
}

impl RoundResult {
    /// Settles `bet` against `outcome`.
    ///
    /// A payout past `u64::MAX` is capped there, and the profit is clamped
    /// to the `i64` range.
    #[must_use]
    pub fn settle(outcome: Outcome, bet: u64, player_score: u8, dealer_score: u8) -> Self {
        let payout = bet.saturating_mul(outcome.multiplier());
        let profit = i128::from(payout) - i128::from(bet);
        let profit = i64::try_from(profit).unwrap_or(if profit < 0 { i64::MIN } else { i64::MAX });
        Self {
            outcome,
            bet,
            payout,
            profit,
            player_score,
            dealer_score,
        }
    }
}
