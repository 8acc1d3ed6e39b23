//! Game state types.

use core::fmt;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// No round has been started yet.
    Idle,
    /// Initial cards are being dealt.
    Dealing,
    /// Waiting for the player to hit, stand, or double down.
    PlayerTurn,
    /// Dealer plays out their hand one card per step.
    DealerTurn,
    /// Both hands are final and waiting to be compared.
    Comparing,
    /// Round has ended; only a new game is accepted.
    RoundOver,
}

impl GameState {
    /// Returns whether the dealer's full hand is visible in this state.
    #[must_use]
    pub const fn reveals_dealer(self) -> bool {
        matches!(self, Self::DealerTurn | Self::Comparing | Self::RoundOver)
    }

    /// Returns whether a scheduled dealer step can advance this state.
    #[must_use]
    pub const fn has_pending_step(self) -> bool {
        matches!(self, Self::DealerTurn | Self::Comparing)
    }
}

/// Input actions accepted by the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Start a fresh round.
    NewGame,
    /// Take one more card.
    Hit,
    /// End the player's turn.
    Stand,
    /// Take exactly one more card, then stand.
    DoubleDown,
}

/// Identifies one round; advanced by every new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RoundId(pub u64);

impl RoundId {
    /// Returns the identifier of the following round.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
