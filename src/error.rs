//! Error types for deck and game operations.

use thiserror::Error;

use crate::game::state::{Action, GameState};

/// Errors that can occur while dealing from or arranging a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Every card has already been dealt since the last reset or shuffle.
    #[error("no cards left in the deck")]
    Exhausted,
    /// A supplied card order is not a permutation of the standard deck.
    #[error("card order is not a permutation of the standard deck")]
    InvalidOrder,
}

/// Errors that can occur while driving a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The action is not legal in the current game state.
    #[error("cannot {action:?} while the game is in {state:?}")]
    InvalidState {
        /// The rejected action.
        action: Action,
        /// The state the game was in.
        state: GameState,
    },
    /// A dealer step was scheduled for a round that has since been replaced.
    #[error("dealer step belongs to a previous round")]
    StaleStep,
    /// A dealer step was requested while nothing was waiting on one.
    #[error("no dealer step is pending while the game is in {state:?}")]
    NoPendingStep {
        /// The state the game was in.
        state: GameState,
    },
    /// The deck could not supply a card.
    #[error(transparent)]
    Deck(#[from] DeckError),
}
