//! A single 52-card deck with a deal cursor.

extern crate alloc;

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Face, Suit};
use crate::error::DeckError;

/// What the presentation layer draws in one card slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardView {
    /// A face-up card.
    Face(Card),
    /// The back of a card, hiding its face.
    Back,
}

fn canonical_cards() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::ALL {
        for face in Face::ALL {
            cards.push(Card::standard(face, suit));
        }
    }

    cards
}

/// An ordered deck of 52 unique cards.
///
/// Cards are dealt from a cursor rather than removed, so [`Deck::reset`] and
/// [`Deck::shuffle`] always work on the full set.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a deck in canonical order with the given shuffle seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            cards: canonical_cards(),
            position: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a deck that deals `cards` in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::InvalidOrder`] unless `cards` holds each of the
    /// 52 standard cards exactly once.
    pub fn with_order(cards: Vec<Card>, seed: u64) -> Result<Self, DeckError> {
        if cards.len() != DECK_SIZE {
            return Err(DeckError::InvalidOrder);
        }

        let all_present = canonical_cards().iter().all(|expected| {
            cards
                .iter()
                .filter(|card| card.is_same_card(expected) && card.value() == expected.value())
                .count()
                == 1
        });
        if !all_present {
            return Err(DeckError::InvalidOrder);
        }

        Ok(Self {
            cards,
            position: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    /// Restores the canonical card order and rewinds the cursor.
    pub fn reset(&mut self) {
        self.cards = canonical_cards();
        self.position = 0;
    }

    /// Moves the cursor back to the first card, keeping the current order.
    pub(crate) const fn rewind(&mut self) {
        self.position = 0;
    }

    /// Randomly permutes all 52 cards and rewinds the cursor.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    /// Deals the card at the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] once all 52 cards have been dealt.
    pub fn deal(&mut self) -> Result<Card, DeckError> {
        let card = *self.cards.get(self.position).ok_or(DeckError::Exhausted)?;
        self.position += 1;
        Ok(card)
    }

    /// Returns the number of cards left to deal.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }

    /// Returns the number of cards dealt since the last reset or shuffle.
    #[must_use]
    pub const fn dealt(&self) -> usize {
        self.position
    }

    /// Returns all cards in their current order, dealt ones included.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The placeholder drawn over the dealer's hidden card.
    #[must_use]
    pub const fn card_back() -> CardView {
        CardView::Back
    }
}
