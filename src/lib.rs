//! A single-player blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs one round at a time:
//! betting, the opening deal, player decisions, dealer play and settlement.
//! Funds come from a [`Wallet`] passed in by the caller, and every visible
//! step is reported to an [`EventSink`] so a front end can render the table
//! without re-deriving any rules.
//!
//! # Example
//!
//! ```
//! use bjtable::{Event, Game, GameOptions, MemoryWallet, Wallet};
//!
//! let mut events: Vec<Event> = Vec::new();
//! let mut game = Game::new(GameOptions::default(), MemoryWallet::default(), &mut events, 7);
//!
//! game.place_bet(10_000).unwrap();
//! game.deal().unwrap();
//! let _ = game.stand();
//!
//! let balance = game.wallet().balance();
//! drop(game);
//! assert!(!events.is_empty());
//! assert!(balance <= 110_000);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod event;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod wallet;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, BetError, DealError, DeckError, DeckExhausted};
#[cfg(feature = "std")]
pub use event::PacedSink;
pub use event::{Event, EventSink};
pub use game::{Game, RoundState};
pub use hand::{Hand, Seat, score};
pub use options::GameOptions;
pub use result::{Outcome, RoundResult};
pub use wallet::{HISTORY_LIMIT, HistoryEntry, MemoryWallet, STARTING_BALANCE, Stats, Wallet};
