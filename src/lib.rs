//! A single-table blackjack rule engine.
//!
//! The crate provides a [`Game`] type that deals from a 52-card [`Deck`],
//! runs the player's hit/stand/double-down turn, plays the dealer out to 17,
//! and compares the hands. Every transition returns the [`GameEvent`]s a
//! front end needs to redraw the table, toggle its buttons, and pace the
//! dealer's draws.
//!
//! House rules: aces are always low, there is no splitting, and the dealer
//! stands on 17.
//!
//! # Example
//!
//! ```
//! use tabletop21::{Game, GameOptions, GameState};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.new_game().unwrap();
//!
//! if game.state() == GameState::PlayerTurn {
//!     game.stand().unwrap();
//!     game.run_dealer().unwrap();
//! }
//! assert_eq!(game.state(), GameState::RoundOver);
//! assert!(game.result().is_some());
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

// Re-export main types
pub use card::{Card, DECK_SIZE, Face, Suit};
pub use deck::{CardView, Deck};
pub use error::{ActionError, DeckError};
pub use event::{Announcement, Controls, GameEvent, TableView};
pub use game::{Action, Game, GameState, RoundId};
pub use hand::{BUST_LIMIT, Hand, Seat};
pub use options::{GameOptions, DEALER_STANDS_ON, STEP_DELAY};
pub use result::{Outcome, RoundResult};
