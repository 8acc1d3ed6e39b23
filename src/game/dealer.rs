extern crate alloc;

use alloc::vec::Vec;

use crate::error::ActionError;
use crate::event::{Announcement, GameEvent};
use crate::hand::Seat;
use crate::result::{Outcome, RoundResult};

use super::{Game, GameState, RoundId};

impl Game {
    pub(super) fn schedule_step(&self) -> GameEvent {
        GameEvent::StepScheduled {
            round: self.round,
            delay: self.options.step_delay,
        }
    }

    /// Returns whether the dealer has reached the total they stand on.
    #[must_use]
    pub fn is_dealer_done(&self) -> bool {
        self.dealer.total_value() >= u16::from(self.options.dealer_stands_on)
    }

    /// Advances the dealer's turn by one step.
    ///
    /// In [`GameState::DealerTurn`] the dealer draws one card while below
    /// the stand total. Once there, a bust ends the round and anything else
    /// moves to [`GameState::Comparing`]. In `Comparing` the totals are
    /// compared and the round ends. Every step that leaves work pending
    /// schedules the next one.
    ///
    /// # Errors
    ///
    /// Returns an error if `round` is not the current round, no step is
    /// pending, or the deck is empty while the dealer must draw.
    pub fn step(&mut self, round: RoundId) -> Result<Vec<GameEvent>, ActionError> {
        if round != self.round {
            log::warn!("ignoring dealer step for round {round}, now at {}", self.round);
            return Err(ActionError::StaleStep);
        }

        match self.state {
            GameState::DealerTurn => self.dealer_step(),
            GameState::Comparing => Ok(self.compare_hands()),
            state => Err(ActionError::NoPendingStep { state }),
        }
    }

    /// Runs every pending dealer step without waiting.
    ///
    /// Returns the events of all steps in order.
    ///
    /// # Errors
    ///
    /// Returns an error if no step is pending or the deck runs out.
    pub fn run_dealer(&mut self) -> Result<Vec<GameEvent>, ActionError> {
        if !self.state.has_pending_step() {
            return Err(ActionError::NoPendingStep { state: self.state });
        }

        let mut events = Vec::new();
        while self.state.has_pending_step() {
            events.extend(self.step(self.round)?);
        }

        Ok(events)
    }

    fn dealer_step(&mut self) -> Result<Vec<GameEvent>, ActionError> {
        let mut events = Vec::new();

        if !self.is_dealer_done() {
            let card = self.deal_to(Seat::Dealer)?;
            events.push(GameEvent::Announcement(Announcement::Hit {
                seat: Seat::Dealer,
                card,
            }));
            events.push(GameEvent::Render(self.view()));
            events.push(self.schedule_step());
        } else if self.dealer.is_bust() {
            self.conclude(Outcome::DealerBust, &mut events);
        } else {
            self.set_state(GameState::Comparing);
            events.push(GameEvent::Controls(self.controls()));
            events.push(self.schedule_step());
        }

        Ok(events)
    }

    fn compare_hands(&mut self) -> Vec<GameEvent> {
        let result = RoundResult::compare(self.player.total_value(), self.dealer.total_value());

        let mut events = Vec::new();
        self.finish(result, &mut events);
        events
    }
}
