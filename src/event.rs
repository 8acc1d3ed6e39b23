//! Events emitted to the presentation layer.
//!
//! Every game transition returns the events it produced, in order. A front
//! end redraws on [`GameEvent::Render`], updates its buttons on
//! [`GameEvent::Controls`], and calls [`Game::step`](crate::Game::step) once
//! the delay in [`GameEvent::StepScheduled`] has elapsed.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;
use core::time::Duration;

use crate::card::Card;
use crate::deck::CardView;
use crate::game::state::RoundId;
use crate::hand::Seat;
use crate::result::RoundResult;

/// Everything needed to draw the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    /// Player cards in deal order.
    pub player: Vec<Card>,
    /// Dealer cards in deal order, with the hole card hidden until revealed.
    pub dealer: Vec<CardView>,
    /// The player's total.
    pub player_value: u16,
    /// The total of the dealer cards shown face up.
    pub dealer_visible_value: u16,
}

/// Which buttons are enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    /// Hit button.
    pub hit: bool,
    /// Stand button.
    pub stand: bool,
    /// Double down button.
    pub double_down: bool,
    /// New game button.
    pub new_game: bool,
}

impl Controls {
    /// Hit, stand, and double down enabled.
    pub const PLAYER_TURN: Self = Self {
        hit: true,
        stand: true,
        double_down: true,
        new_game: true,
    };

    /// Only a new game can be started.
    pub const LOCKED: Self = Self {
        hit: false,
        stand: false,
        double_down: false,
        new_game: true,
    };
}

/// Status line describing the latest move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Announcement {
    /// A seat drew a card.
    Hit {
        /// Who drew.
        seat: Seat,
        /// The card drawn.
        card: Card,
    },
    /// The player stood.
    Stand,
    /// The player doubled down.
    DoubleDown,
}

impl fmt::Display for Announcement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hit {
                seat: Seat::Player,
                card,
            } => write!(f, "Player hit and got a {card}"),
            Self::Hit {
                seat: Seat::Dealer,
                card,
            } => write!(f, "Dealer hit and got a {card}"),
            Self::Stand => f.write_str("User stands..."),
            Self::DoubleDown => f.write_str("User doubles down..."),
        }
    }
}

/// A notification for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// The table changed and should be redrawn.
    Render(TableView),
    /// A new status line.
    Announcement(Announcement),
    /// The round is over.
    Outcome(RoundResult),
    /// Button availability after the transition.
    Controls(Controls),
    /// Call [`Game::step`](crate::Game::step) for `round` after `delay`.
    StepScheduled {
        /// Round the step belongs to.
        round: RoundId,
        /// How long to wait before stepping.
        delay: Duration,
    },
}
