//! CLI blackjack example.
//!
//! Stands in for the table window: keys map to the four buttons, rendered
//! tables and outcomes are printed, and dealer steps are paced with the
//! configured delay. Set `RUST_LOG=debug` to watch the engine's transitions.

#![allow(clippy::missing_docs_in_private_items)]

extern crate alloc;

use alloc::collections::VecDeque;
use std::io::{self, Write};
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use tabletop21::{
    Action, Card, CardView, Controls, Game, GameEvent, GameOptions, Outcome, RoundResult, Suit,
    TableView,
};

fn main() {
    env_logger::init();

    println!("Blackjack CLI example (type 'q' to quit)");
    println!("House rules: aces are always low, no splitting, dealer stands on 17.");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), seed);
    let mut controls = game.controls();

    loop {
        println!("{}", format_controls(controls));
        let action = match prompt_line("Action: ").as_str() {
            "n" | "new" => Action::NewGame,
            "h" | "hit" => Action::Hit,
            "s" | "stand" => Action::Stand,
            "d" | "double" => Action::DoubleDown,
            "q" | "quit" => {
                println!("Goodbye.");
                return;
            }
            _ => {
                println!("Unknown action.");
                continue;
            }
        };

        match game.apply(action) {
            Ok(events) => controls = play_out(&mut game, events, controls),
            Err(err) => println!("Action error: {err}"),
        }
    }
}

/// Handles events in order, running scheduled dealer steps after their delay.
fn play_out(game: &mut Game, events: Vec<GameEvent>, mut controls: Controls) -> Controls {
    let mut queue: VecDeque<GameEvent> = events.into();

    while let Some(event) = queue.pop_front() {
        match event {
            GameEvent::Render(view) => print_table(&view),
            GameEvent::Announcement(announcement) => println!("{announcement}"),
            GameEvent::Outcome(result) => print_outcome(&result),
            GameEvent::Controls(next) => controls = next,
            GameEvent::StepScheduled { round, delay } => {
                thread::sleep(delay);
                match game.step(round) {
                    Ok(more) => queue.extend(more),
                    Err(err) => log::warn!("dealer step skipped: {err}"),
                }
            }
        }
    }

    controls
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_table(view: &TableView) {
    let dealer = view
        .dealer
        .iter()
        .map(format_view)
        .collect::<Vec<_>>()
        .join(" ");
    let player = view
        .player
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ");

    println!("\nDealer: {dealer} (showing {})", view.dealer_visible_value);
    println!("Player: {player} (value {})\n", view.player_value);
}

fn print_outcome(result: &RoundResult) {
    let color_code = match result.outcome {
        Outcome::DealerBust | Outcome::PlayerWins => "32",
        Outcome::PlayerBust | Outcome::DealerWins => "31",
        Outcome::Push => "0",
    };
    println!("{}", colorize(&result.to_string(), color_code));
}

fn format_controls(controls: Controls) -> String {
    let parts = [
        format_action("new game", "n", controls.new_game),
        format_action("hit", "h", controls.hit),
        format_action("stand", "s", controls.stand),
        format_action("double", "d", controls.double_down),
    ];
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_view(view: &CardView) -> String {
    match view {
        CardView::Face(card) => format_card(card),
        CardView::Back => colorize("??", "90"),
    }
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit() {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    format!("{}{}", card.face(), colorize(suit, color_code))
}
