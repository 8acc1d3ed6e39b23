extern crate alloc;

use alloc::vec::Vec;

use crate::error::ActionError;
use crate::event::{Announcement, GameEvent};
use crate::hand::Seat;
use crate::result::Outcome;

use super::{Action, Game, GameState};

impl Game {
    fn ensure_player_turn(&self, action: Action) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState {
                action,
                state: self.state,
            });
        }

        Ok(())
    }

    /// Applies an input action.
    ///
    /// # Errors
    ///
    /// Returns an error if the action is not legal in the current state or
    /// the deck runs out of cards.
    pub fn apply(&mut self, action: Action) -> Result<Vec<GameEvent>, ActionError> {
        match action {
            Action::NewGame => self.new_game(),
            Action::Hit => self.hit(),
            Action::Stand => self.stand(),
            Action::DoubleDown => self.double_down(),
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// A bust ends the round immediately; the dealer never plays.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state or the deck
    /// is empty.
    pub fn hit(&mut self) -> Result<Vec<GameEvent>, ActionError> {
        self.ensure_player_turn(Action::Hit)?;

        let mut events = Vec::new();
        self.player_hit(&mut events)?;

        if self.state == GameState::PlayerTurn {
            events.push(GameEvent::Controls(self.controls()));
        }

        Ok(events)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// Reveals the dealer's hand and schedules the first dealer step.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state.
    pub fn stand(&mut self) -> Result<Vec<GameEvent>, ActionError> {
        self.ensure_player_turn(Action::Stand)?;

        let mut events = Vec::new();
        self.begin_dealer_turn(Announcement::Stand, &mut events);

        Ok(events)
    }

    /// Player action: Double down (receive exactly one card, then stand).
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state or the deck
    /// is empty.
    pub fn double_down(&mut self) -> Result<Vec<GameEvent>, ActionError> {
        self.ensure_player_turn(Action::DoubleDown)?;

        let mut events = Vec::new();
        self.player_hit(&mut events)?;

        // If not bust, stand
        if self.state == GameState::PlayerTurn {
            self.begin_dealer_turn(Announcement::DoubleDown, &mut events);
        }

        Ok(events)
    }

    fn player_hit(&mut self, events: &mut Vec<GameEvent>) -> Result<(), ActionError> {
        let card = self.deal_to(Seat::Player)?;
        events.push(GameEvent::Announcement(Announcement::Hit {
            seat: Seat::Player,
            card,
        }));

        if self.player.is_bust() {
            self.conclude(Outcome::PlayerBust, events);
        } else {
            events.push(GameEvent::Render(self.view()));
        }

        Ok(())
    }

    fn begin_dealer_turn(&mut self, announcement: Announcement, events: &mut Vec<GameEvent>) {
        self.set_state(GameState::DealerTurn);

        events.push(GameEvent::Announcement(announcement));
        events.push(GameEvent::Render(self.view()));
        events.push(GameEvent::Controls(self.controls()));
        events.push(self.schedule_step());
    }
}
