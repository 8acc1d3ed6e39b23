//! Round result types.

use core::fmt;

/// How a round ended, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player went over the limit; the dealer never played.
    PlayerBust,
    /// Dealer went over the limit while drawing.
    DealerBust,
    /// Both hands have the same total.
    Push,
    /// Player has the higher total.
    PlayerWins,
    /// Dealer has the higher total.
    DealerWins,
}

impl Outcome {
    /// Returns whether the player won the round.
    #[must_use]
    pub const fn is_player_win(self) -> bool {
        matches!(self, Self::DealerBust | Self::PlayerWins)
    }

    /// Returns whether the dealer won the round.
    #[must_use]
    pub const fn is_dealer_win(self) -> bool {
        matches!(self, Self::PlayerBust | Self::DealerWins)
    }
}

/// Result of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: Outcome,
    /// The player's final total.
    pub player_value: u16,
    /// The dealer's final total.
    pub dealer_value: u16,
}

impl RoundResult {
    /// Compares two final, non-bust totals.
    #[must_use]
    pub fn compare(player_value: u16, dealer_value: u16) -> Self {
        let outcome = match player_value.cmp(&dealer_value) {
            core::cmp::Ordering::Equal => Outcome::Push,
            core::cmp::Ordering::Greater => Outcome::PlayerWins,
            core::cmp::Ordering::Less => Outcome::DealerWins,
        };

        Self {
            outcome,
            player_value,
            dealer_value,
        }
    }
}

impl fmt::Display for RoundResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (player, dealer) = (self.player_value, self.dealer_value);
        match self.outcome {
            Outcome::PlayerBust => f.write_str("You busted! You lose..."),
            Outcome::DealerBust => f.write_str("The dealer busted! You win!"),
            Outcome::Push => write!(f, "You and the dealer push with {player}."),
            Outcome::PlayerWins => write!(f, "The dealer got {dealer}, you win with {player}!"),
            Outcome::DealerWins => write!(f, "The dealer got {dealer}, you lose with {player}"),
        }
    }
}
