//! Game integration tests.

use core::time::Duration;

use tabletop21::{
    Action, ActionError, Announcement, Card, CardView, Controls, Deck, Face, Game, GameEvent,
    GameOptions, GameState, Outcome, RoundResult, Seat, Suit,
};

const fn card(face: Face, suit: Suit) -> Card {
    Card::standard(face, suit)
}

/// Builds a deck that deals `draws` first, followed by the rest of the standard deck.
fn stacked(draws: &[Card]) -> Deck {
    let mut order = draws.to_vec();
    for card in Deck::new(0).cards() {
        if !draws.iter().any(|drawn| drawn.is_same_card(card)) {
            order.push(*card);
        }
    }
    Deck::with_order(order, 0).unwrap()
}

fn game_from_draws(draws: &[Card]) -> Game {
    let mut game = Game::new(GameOptions::default(), 1);
    game.new_game_with_deck(stacked(draws)).unwrap();
    game
}

fn outcomes(events: &[GameEvent]) -> Vec<RoundResult> {
    events
        .iter()
        .filter_map(|event| match event {
            GameEvent::Outcome(result) => Some(*result),
            _ => None,
        })
        .collect()
}

fn dealer_hits(events: &[GameEvent]) -> usize {
    events
        .iter()
        .filter(|event| {
            matches!(
                event,
                GameEvent::Announcement(Announcement::Hit {
                    seat: Seat::Dealer,
                    ..
                })
            )
        })
        .count()
}

#[test]
fn new_game_deals_two_cards_each() {
    let mut game = Game::new(GameOptions::default(), 42);
    assert_eq!(game.state(), GameState::Idle);

    let events = game.new_game().unwrap();
    assert_eq!(game.state(), GameState::PlayerTurn);
    assert_eq!(game.player().len(), 2);
    assert_eq!(game.dealer().len(), 2);
    assert_eq!(game.cards_remaining(), 48);
    assert_eq!(events.last(), Some(&GameEvent::Controls(Controls::PLAYER_TURN)));

    let sum: u16 = game
        .player()
        .cards()
        .iter()
        .map(|card| u16::from(card.value()))
        .sum();
    assert_eq!(game.player().total_value(), sum);
}

#[test]
fn dealer_stands_on_seventeen_and_wins() {
    let mut game = game_from_draws(&[
        card(Face::Ace, Suit::Hearts),  // player
        card(Face::Nine, Suit::Clubs),  // player
        card(Face::Ten, Suit::Spades),  // dealer
        card(Face::Seven, Suit::Diamonds), // dealer
    ]);
    assert_eq!(game.player().total_value(), 10);
    assert!(!game.player().is_bust());

    game.stand().unwrap();
    assert_eq!(game.state(), GameState::DealerTurn);
    assert!(game.is_dealer_done());

    let events = game.run_dealer().unwrap();
    assert_eq!(dealer_hits(&events), 0);
    assert_eq!(game.dealer().len(), 2);
    assert_eq!(game.state(), GameState::RoundOver);
    assert_eq!(
        outcomes(&events),
        vec![RoundResult {
            outcome: Outcome::DealerWins,
            player_value: 10,
            dealer_value: 17,
        }]
    );
}

#[test]
fn player_bust_ends_round_before_dealer_turn() {
    let mut game = game_from_draws(&[
        card(Face::Ten, Suit::Hearts),
        card(Face::Ten, Suit::Spades),
        card(Face::Two, Suit::Clubs),
        card(Face::Three, Suit::Clubs),
        card(Face::Five, Suit::Diamonds), // player hit
    ]);
    assert_eq!(game.player().total_value(), 20);

    let events = game.hit().unwrap();
    assert_eq!(game.player().total_value(), 25);
    assert_eq!(game.state(), GameState::RoundOver);
    assert_eq!(game.dealer().len(), 2);
    assert_eq!(game.result().map(|result| result.outcome), Some(Outcome::PlayerBust));
    assert_eq!(events.last(), Some(&GameEvent::Controls(Controls::LOCKED)));
    assert!(
        !events
            .iter()
            .any(|event| matches!(event, GameEvent::StepScheduled { .. }))
    );

    let round = game.round();
    assert_eq!(
        game.step(round).unwrap_err(),
        ActionError::NoPendingStep {
            state: GameState::RoundOver
        }
    );
}

#[test]
fn hit_without_bust_keeps_player_turn() {
    let mut game = game_from_draws(&[
        card(Face::Two, Suit::Hearts),
        card(Face::Three, Suit::Hearts),
        card(Face::Ten, Suit::Clubs),
        card(Face::Eight, Suit::Clubs),
        card(Face::Four, Suit::Diamonds), // player hit
    ]);

    let events = game.hit().unwrap();
    assert_eq!(game.state(), GameState::PlayerTurn);
    assert_eq!(game.player().total_value(), 9);
    assert_eq!(
        events.first(),
        Some(&GameEvent::Announcement(Announcement::Hit {
            seat: Seat::Player,
            card: card(Face::Four, Suit::Diamonds),
        }))
    );
    assert_eq!(events.last(), Some(&GameEvent::Controls(Controls::PLAYER_TURN)));
}

#[test]
fn double_down_hits_once_then_stands() {
    let mut game = game_from_draws(&[
        card(Face::Five, Suit::Hearts),
        card(Face::Four, Suit::Hearts),
        card(Face::Ten, Suit::Clubs),
        card(Face::Six, Suit::Clubs),
        card(Face::Ten, Suit::Diamonds), // player double
        card(Face::Two, Suit::Spades),   // dealer draw
    ]);
    assert_eq!(game.player().total_value(), 9);

    let events = game.double_down().unwrap();
    assert_eq!(game.player().total_value(), 19);
    assert_eq!(game.player().len(), 3);
    assert_eq!(game.state(), GameState::DealerTurn);
    assert!(events.contains(&GameEvent::Announcement(Announcement::DoubleDown)));
    assert_eq!(
        events.last(),
        Some(&GameEvent::StepScheduled {
            round: game.round(),
            delay: Duration::from_millis(1500),
        })
    );

    assert_eq!(
        game.hit().unwrap_err(),
        ActionError::InvalidState {
            action: Action::Hit,
            state: GameState::DealerTurn,
        }
    );

    let events = game.run_dealer().unwrap();
    assert_eq!(dealer_hits(&events), 1);
    assert_eq!(
        game.result(),
        Some(RoundResult {
            outcome: Outcome::PlayerWins,
            player_value: 19,
            dealer_value: 18,
        })
    );
}

#[test]
fn double_down_bust_skips_dealer() {
    let mut game = game_from_draws(&[
        card(Face::King, Suit::Hearts),
        card(Face::Nine, Suit::Hearts),
        card(Face::Ten, Suit::Clubs),
        card(Face::Six, Suit::Clubs),
        card(Face::Queen, Suit::Diamonds),
    ]);

    let events = game.double_down().unwrap();
    assert_eq!(game.state(), GameState::RoundOver);
    assert_eq!(game.result().map(|result| result.outcome), Some(Outcome::PlayerBust));
    assert!(!events.contains(&GameEvent::Announcement(Announcement::DoubleDown)));
}

#[test]
fn equal_totals_push() {
    let mut game = game_from_draws(&[
        card(Face::Ten, Suit::Hearts),
        card(Face::Eight, Suit::Hearts),
        card(Face::Jack, Suit::Clubs),
        card(Face::Eight, Suit::Clubs),
    ]);

    game.stand().unwrap();
    let events = game.run_dealer().unwrap();
    let results = outcomes(&events);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].outcome, Outcome::Push);
    assert_eq!((results[0].player_value, results[0].dealer_value), (18, 18));
    assert_eq!(results[0].to_string(), "You and the dealer push with 18.");
}

#[test]
fn dealer_draws_one_card_per_step() {
    let mut game = game_from_draws(&[
        card(Face::Ten, Suit::Hearts),
        card(Face::Nine, Suit::Hearts),
        card(Face::Two, Suit::Clubs),
        card(Face::Three, Suit::Clubs),
        card(Face::Four, Suit::Diamonds),
        card(Face::Five, Suit::Diamonds),
        card(Face::Six, Suit::Diamonds),
    ]);
    game.stand().unwrap();
    let round = game.round();

    let mut hits = 0;
    while game.state() == GameState::DealerTurn {
        let events = game.step(round).unwrap();
        hits += dealer_hits(&events);
    }
    assert_eq!(hits, 3);
    assert_eq!(game.dealer().total_value(), 20);
    assert_eq!(game.state(), GameState::Comparing);

    let events = game.step(round).unwrap();
    assert_eq!(game.state(), GameState::RoundOver);
    assert_eq!(outcomes(&events)[0].outcome, Outcome::DealerWins);
}

#[test]
fn dealer_bust_pays_player() {
    let mut game = game_from_draws(&[
        card(Face::Ten, Suit::Hearts),
        card(Face::Seven, Suit::Hearts),
        card(Face::Ten, Suit::Clubs),
        card(Face::Six, Suit::Clubs),
        card(Face::King, Suit::Diamonds),
    ]);

    game.stand().unwrap();
    game.run_dealer().unwrap();

    let result = game.result().unwrap();
    assert_eq!(result.outcome, Outcome::DealerBust);
    assert!(result.outcome.is_player_win());
    assert_eq!(result.dealer_value, 26);
    assert_eq!(result.to_string(), "The dealer busted! You win!");
}

#[test]
fn new_game_invalidates_pending_dealer_steps() {
    let mut game = game_from_draws(&[
        card(Face::Ten, Suit::Hearts),
        card(Face::Nine, Suit::Hearts),
        card(Face::Two, Suit::Clubs),
        card(Face::Three, Suit::Clubs),
    ]);
    game.stand().unwrap();
    let stale = game.round();

    game.new_game().unwrap();
    assert_ne!(game.round(), stale);
    assert_eq!(game.step(stale).unwrap_err(), ActionError::StaleStep);
    assert_eq!(game.state(), GameState::PlayerTurn);
    assert_eq!(game.dealer().len(), 2);
}

#[test]
fn actions_rejected_outside_player_turn() {
    let mut game = Game::new(GameOptions::default(), 5);

    for action in [Action::Hit, Action::Stand, Action::DoubleDown] {
        assert_eq!(
            game.apply(action).unwrap_err(),
            ActionError::InvalidState {
                action,
                state: GameState::Idle,
            }
        );
    }
    assert!(game.run_dealer().is_err());

    game.apply(Action::NewGame).unwrap();
    assert_eq!(game.state(), GameState::PlayerTurn);
    game.apply(Action::Stand).unwrap();
    game.run_dealer().unwrap();

    assert_eq!(
        game.apply(Action::Hit).unwrap_err(),
        ActionError::InvalidState {
            action: Action::Hit,
            state: GameState::RoundOver,
        }
    );
    assert!(game.controls().new_game);
    assert!(game.apply(Action::NewGame).is_ok());
}

#[test]
fn dealer_hole_card_hidden_until_stand() {
    let mut game = game_from_draws(&[
        card(Face::Ten, Suit::Hearts),
        card(Face::Two, Suit::Hearts),
        card(Face::Nine, Suit::Clubs),
        card(Face::Eight, Suit::Clubs),
    ]);

    let view = game.view();
    assert_eq!(view.player.len(), 2);
    assert_eq!(view.player_value, 12);
    assert_eq!(view.dealer[0], CardView::Back);
    assert_eq!(view.dealer[1], CardView::Face(card(Face::Eight, Suit::Clubs)));
    assert_eq!(view.dealer_visible_value, 8);

    let events = game.stand().unwrap();
    let revealed = events
        .iter()
        .find_map(|event| match event {
            GameEvent::Render(view) => Some(view.clone()),
            _ => None,
        })
        .unwrap();
    assert!(revealed.dealer.iter().all(|view| *view != CardView::Back));
    assert_eq!(revealed.dealer_visible_value, 17);
    assert_eq!(game.controls(), Controls::LOCKED);
}

#[test]
fn options_change_dealer_threshold_and_delay() {
    let options = GameOptions::default()
        .with_dealer_stands_on(12)
        .with_step_delay(Duration::ZERO);
    let mut game = Game::new(options, 1);
    game.new_game_with_deck(stacked(&[
        card(Face::Ten, Suit::Hearts),
        card(Face::Three, Suit::Hearts),
        card(Face::Ten, Suit::Clubs),
        card(Face::Two, Suit::Clubs),
    ]))
    .unwrap();

    let events = game.stand().unwrap();
    assert!(events.contains(&GameEvent::StepScheduled {
        round: game.round(),
        delay: Duration::ZERO,
    }));

    game.run_dealer().unwrap();
    assert_eq!(game.dealer().len(), 2);
    assert_eq!(game.result().map(|result| result.outcome), Some(Outcome::PlayerWins));
}

#[test]
fn announcements_read_like_the_table() {
    let hit = Announcement::Hit {
        seat: Seat::Player,
        card: card(Face::Five, Suit::Clubs),
    };
    assert_eq!(hit.to_string(), "Player hit and got a 5 of clubs");
    assert_eq!(Announcement::Stand.to_string(), "User stands...");
    assert_eq!(Announcement::DoubleDown.to_string(), "User doubles down...");

    let loss = RoundResult::compare(15, 19);
    assert_eq!(loss.outcome, Outcome::DealerWins);
    assert_eq!(loss.to_string(), "The dealer got 19, you lose with 15");
}

#[test]
fn dealer_steps_that_change_state_report_controls() {
    let mut game = game_from_draws(&[
        card(Face::Ten, Suit::Hearts),
        card(Face::Eight, Suit::Hearts),
        card(Face::Two, Suit::Clubs),
        card(Face::Three, Suit::Clubs),
        card(Face::Queen, Suit::Diamonds), // dealer draws to 15
        card(Face::Three, Suit::Spades),   // dealer draws to 18
    ]);
    game.stand().unwrap();
    let round = game.round();

    while game.state().has_pending_step() {
        let before = game.state();
        let events = game.step(round).unwrap();
        if game.state() != before {
            assert!(
                events
                    .iter()
                    .any(|event| matches!(event, GameEvent::Controls(_))),
                "no controls after {before:?} -> {:?}",
                game.state()
            );
        }
    }

    assert_eq!(game.result().map(|result| result.outcome), Some(Outcome::Push));
}

#[test]
fn comparing_step_locks_controls_before_scheduling() {
    let mut game = game_from_draws(&[
        card(Face::Ten, Suit::Hearts),
        card(Face::Eight, Suit::Hearts),
        card(Face::Jack, Suit::Clubs),
        card(Face::Eight, Suit::Clubs),
    ]);
    game.stand().unwrap();
    let round = game.round();

    let events = game.step(round).unwrap();
    assert_eq!(game.state(), GameState::Comparing);
    assert_eq!(
        events,
        vec![
            GameEvent::Controls(Controls::LOCKED),
            GameEvent::StepScheduled {
                round,
                delay: Duration::from_millis(1500),
            },
        ]
    );
}

#[test]
fn new_game_with_partly_dealt_deck_starts_clean() {
    let mut deck = Deck::new(0);
    for _ in 0..51 {
        deck.deal().unwrap();
    }

    let mut game = Game::new(GameOptions::default(), 1);
    let events = game.new_game_with_deck(deck).unwrap();

    assert_eq!(game.state(), GameState::PlayerTurn);
    assert_eq!(game.player().len(), 2);
    assert_eq!(game.dealer().len(), 2);
    assert_eq!(game.cards_remaining(), 48);
    // Canonical order: A, 2 of hearts to the player; 3, 4 of hearts to the dealer.
    assert_eq!(game.player().total_value(), 3);
    assert_eq!(game.dealer().total_value(), 7);
    assert_eq!(events.last(), Some(&GameEvent::Controls(Controls::PLAYER_TURN)));
}

#[test]
fn opening_bust_ends_round_immediately() {
    let options = GameOptions::default().with_bust_limit(15);
    let mut game = Game::new(options, 1);

    let events = game
        .new_game_with_deck(stacked(&[
            card(Face::Ten, Suit::Hearts),
            card(Face::Ten, Suit::Spades),
            card(Face::Two, Suit::Clubs),
            card(Face::Three, Suit::Clubs),
        ]))
        .unwrap();

    assert_eq!(game.state(), GameState::RoundOver);
    assert_eq!(
        outcomes(&events),
        vec![RoundResult {
            outcome: Outcome::PlayerBust,
            player_value: 20,
            dealer_value: 5,
        }]
    );
    assert_eq!(events.last(), Some(&GameEvent::Controls(Controls::LOCKED)));
    let outcome_at = events
        .iter()
        .position(|event| matches!(event, GameEvent::Outcome(_)))
        .unwrap();
    assert_eq!(events[outcome_at + 1], GameEvent::Controls(Controls::LOCKED));
    assert!(
        !events
            .iter()
            .any(|event| matches!(event, GameEvent::StepScheduled { .. }))
    );
}
