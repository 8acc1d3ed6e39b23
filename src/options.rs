//! Table configuration options.

use core::time::Duration;

use crate::hand::BUST_LIMIT;

/// Total at which the dealer stops drawing.
pub const DEALER_STANDS_ON: u8 = 17;

/// Pause between animated dealer steps.
pub const STEP_DELAY: Duration = Duration::from_millis(1500);

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use core::time::Duration;
/// use tabletop21::GameOptions;
///
/// let options = GameOptions::default()
///     .with_dealer_stands_on(17)
///     .with_step_delay(Duration::from_millis(250));
/// assert_eq!(options.bust_limit, 21);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Dealer draws while below this total.
    pub dealer_stands_on: u8,
    /// Hands totalling more than this are bust.
    pub bust_limit: u8,
    /// Delay the presentation layer should wait before each dealer step.
    pub step_delay: Duration,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            dealer_stands_on: DEALER_STANDS_ON,
            bust_limit: BUST_LIMIT,
            step_delay: STEP_DELAY,
        }
    }
}

impl GameOptions {
    /// Sets the total at which the dealer stands.
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, total: u8) -> Self {
        self.dealer_stands_on = total;
        self
    }

    /// Sets the bust limit.
    #[must_use]
    pub const fn with_bust_limit(mut self, limit: u8) -> Self {
        self.bust_limit = limit;
        self
    }

    /// Sets the delay between dealer steps.
    #[must_use]
    pub const fn with_step_delay(mut self, delay: Duration) -> Self {
        self.step_delay = delay;
        self
    }
}
