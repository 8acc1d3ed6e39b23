//! Player and dealer hand representation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Default total above which a hand is bust.
pub const BUST_LIMIT: u8 = 21;

/// The two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// The player.
    Player,
    /// The dealer.
    Dealer,
}

/// Cards held by one seat during a round.
///
/// The running total is not derived from the cards: callers add a card and
/// then add its value, so the table decides how each card scores.
#[derive(Debug, Clone)]
pub struct Hand {
    /// Cards in deal order.
    cards: Vec<Card>,
    /// Sum of values added so far.
    total: u16,
    /// Total above which the hand is bust.
    bust_limit: u8,
}

impl Hand {
    /// Creates a new empty hand using the standard bust limit of 21.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_bust_limit(BUST_LIMIT)
    }

    /// Creates a new empty hand with a custom bust limit.
    #[must_use]
    pub const fn with_bust_limit(bust_limit: u8) -> Self {
        Self {
            cards: Vec::new(),
            total: 0,
            bust_limit,
        }
    }

    /// Appends a card to the hand without touching the total.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Adds `value` to the running total.
    ///
    /// The total is wide enough for a full deck of maximum-value cards.
    pub fn add_to_value(&mut self, value: u8) {
        self.total = self.total.saturating_add(u16::from(value));
    }

    /// Returns the running total.
    #[must_use]
    pub const fn total_value(&self) -> u16 {
        self.total
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether the total is over the bust limit.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.total > u16::from(self.bust_limit)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}
