//! Round state types.

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundState {
    /// Accepting bets for the next deal.
    Betting,
    /// Cards are out and the player is deciding.
    Dealt,
    /// Player stood; the dealer is playing out their hand.
    Stand,
    /// Round is settled, or was aborted.
    Finished,
}

impl RoundState {
    /// Returns a short lowercase name for the state.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Betting => "betting",
            Self::Dealt => "dealt",
            Self::Stand => "stand",
            Self::Finished => "finished",
        }
    }
}
