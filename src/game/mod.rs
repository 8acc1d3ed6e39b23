//! Game engine and state management.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::{CardView, Deck};
use crate::error::ActionError;
use crate::event::{Controls, GameEvent, TableView};
use crate::hand::{Hand, Seat};
use crate::options::GameOptions;
use crate::result::{Outcome, RoundResult};

mod actions;
mod dealer;
pub mod state;

pub use state::{Action, GameState, RoundId};

/// A single-table blackjack game that deals, sequences turns, and settles rounds.
///
/// The game owns the deck and both hands. Each transition returns the
/// [`GameEvent`]s it produced so a front end can redraw, update its buttons,
/// and schedule dealer steps without the engine knowing about timers.
#[derive(Debug, Clone)]
pub struct Game {
    /// The deck cards are dealt from.
    deck: Deck,
    /// Game options.
    options: GameOptions,
    /// Current game state.
    state: GameState,
    /// Current round, advanced by every new game.
    round: RoundId,
    /// The player's hand.
    player: Hand,
    /// The dealer's hand.
    dealer: Hand,
    /// Result of the round once it is over.
    result: Option<RoundResult>,
}

impl Game {
    /// Creates a new idle game whose deck shuffles from `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use tabletop21::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::Idle);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            deck: Deck::new(seed),
            options,
            state: GameState::Idle,
            round: RoundId::default(),
            player: Hand::with_bust_limit(options.bust_limit),
            dealer: Hand::with_bust_limit(options.bust_limit),
            result: None,
        }
    }

    /// Starts a new round from a freshly reset and shuffled deck.
    ///
    /// Accepted in every state. Dealer steps scheduled for the previous round
    /// become stale.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck cannot supply the opening cards.
    pub fn new_game(&mut self) -> Result<Vec<GameEvent>, ActionError> {
        self.begin_round();
        self.deck.reset();
        self.deck.shuffle();
        self.deal_opening()
    }

    /// Starts a new round dealing from `deck` as given, without shuffling.
    ///
    /// The deck is rewound first, so cards already dealt from it are dealt
    /// again from the top of its order.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck cannot supply the opening cards.
    pub fn new_game_with_deck(&mut self, deck: Deck) -> Result<Vec<GameEvent>, ActionError> {
        self.begin_round();
        self.deck = deck;
        self.deck.rewind();
        self.deal_opening()
    }

    fn begin_round(&mut self) {
        self.round = self.round.next();
        self.player = Hand::with_bust_limit(self.options.bust_limit);
        self.dealer = Hand::with_bust_limit(self.options.bust_limit);
        self.result = None;
        self.state = GameState::Dealing;
        log::info!("round {} started", self.round);
    }

    /// Deals two cards to the player, then two to the dealer.
    fn deal_opening(&mut self) -> Result<Vec<GameEvent>, ActionError> {
        for seat in [Seat::Player, Seat::Dealer] {
            for _ in 0..2 {
                self.deal_to(seat)?;
            }
        }

        let mut events = Vec::new();
        if self.player.is_bust() {
            self.conclude(Outcome::PlayerBust, &mut events);
        } else {
            self.set_state(GameState::PlayerTurn);
            events.push(GameEvent::Render(self.view()));
            events.push(GameEvent::Controls(self.controls()));
        }

        Ok(events)
    }

    /// Deals one card to `seat` and adds its value to the seat's total.
    fn deal_to(&mut self, seat: Seat) -> Result<Card, ActionError> {
        let card = self.deck.deal()?;
        let hand = match seat {
            Seat::Player => &mut self.player,
            Seat::Dealer => &mut self.dealer,
        };
        hand.add_card(card);
        hand.add_to_value(card.value());

        log::debug!(
            "{seat:?} dealt {card} (total {})",
            hand.total_value()
        );
        Ok(card)
    }

    fn set_state(&mut self, state: GameState) {
        log::debug!("round {}: {:?} -> {state:?}", self.round, self.state);
        self.state = state;
    }

    /// Ends the round and emits the final table, the outcome, and the controls.
    fn conclude(&mut self, outcome: Outcome, events: &mut Vec<GameEvent>) {
        let result = RoundResult {
            outcome,
            player_value: self.player.total_value(),
            dealer_value: self.dealer.total_value(),
        };
        self.finish(result, events);
    }

    fn finish(&mut self, result: RoundResult, events: &mut Vec<GameEvent>) {
        self.set_state(GameState::RoundOver);
        self.result = Some(result);
        log::info!("round {} over: {:?} ({result})", self.round, result.outcome);

        events.push(GameEvent::Render(self.view()));
        events.push(GameEvent::Outcome(result));
        events.push(GameEvent::Controls(self.controls()));
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the current round identifier.
    #[must_use]
    pub const fn round(&self) -> RoundId {
        self.round
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand, hidden card included.
    #[must_use]
    pub const fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the result of the round, once it is over.
    #[must_use]
    pub const fn result(&self) -> Option<RoundResult> {
        self.result
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Returns which buttons should be enabled in the current state.
    #[must_use]
    pub const fn controls(&self) -> Controls {
        match self.state {
            GameState::PlayerTurn => Controls::PLAYER_TURN,
            _ => Controls::LOCKED,
        }
    }

    /// Returns the table as the player should see it.
    ///
    /// Until the dealer's hand is revealed, the first dealer card is drawn
    /// face down and left out of the visible dealer total.
    #[must_use]
    pub fn view(&self) -> TableView {
        let revealed = self.state.reveals_dealer();
        let hidden = usize::from(!revealed);

        let dealer = self
            .dealer
            .cards()
            .iter()
            .enumerate()
            .map(|(index, card)| {
                if index < hidden {
                    Deck::card_back()
                } else {
                    CardView::Face(*card)
                }
            })
            .collect();

        let dealer_visible_value = if revealed {
            self.dealer.total_value()
        } else {
            self.dealer
                .cards()
                .iter()
                .skip(hidden)
                .map(|card| u16::from(card.value()))
                .sum()
        };

        TableView {
            player: self.player.cards().to_vec(),
            dealer,
            player_value: self.player.total_value(),
            dealer_visible_value,
        }
    }
}
