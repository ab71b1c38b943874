//! Error types for game operations.

use thiserror::Error;

/// The deck ran out of cards mid-round.
///
/// A single-deck game between one player and the dealer never needs this
/// many cards, so this is treated as a system fault rather than a game event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("deck exhausted")]
pub struct DeckExhausted;

/// Errors that can occur while building a stacked deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The same suit and rank appear more than once.
    #[error("duplicate card in deck")]
    DuplicateCard,
}

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Insufficient funds.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// Invalid round state for betting.
    #[error("invalid round state for betting")]
    InvalidState,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid round state for dealing.
    #[error("invalid round state for dealing")]
    InvalidState,
    /// No bet has been placed.
    #[error("no bet has been placed")]
    NoBet,
    /// The deck ran out of cards; the round was aborted.
    #[error(transparent)]
    DeckExhausted(#[from] DeckExhausted),
}

/// Errors that can occur during player actions.
///
/// [`ActionError::InvalidState`] is never fatal: the action was ignored and
/// nothing changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid round state for this action.
    #[error("invalid round state for this action")]
    InvalidState,
    /// Cannot double down on this hand.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// Cannot split this hand.
    #[error("cannot split this hand")]
    CannotSplit,
    /// Insufficient funds for this action.
    #[error("insufficient funds for this action")]
    InsufficientFunds,
    /// The deck ran out of cards; the round was aborted.
    #[error(transparent)]
    DeckExhausted(#[from] DeckExhausted),
}
