//! CLI Crazy Eights demo against the computer opponent.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use eights::{Action, Actor, Card, DrawOutcome, Game, GameOptions, Hand, PlayOutcome, Status, Suit};
use tracing_subscriber::EnvFilter;

/// Pause before each opponent move so it can be followed.
const OPPONENT_DELAY: Duration = Duration::from_millis(800);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .without_time()
        .init();

    println!("Crazy Eights CLI demo (type 'q' to quit, 'r' to restart)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = match Game::new(GameOptions::default(), seed) {
        Ok(game) => game,
        Err(err) => {
            println!("Deal error: {err}");
            return;
        }
    };

    loop {
        match game.state().status() {
            Status::NotStarted => {
                if prompt_line("Press enter to start: ") == "q" {
                    return;
                }
                if let Err(err) = game.start() {
                    println!("Start error: {err}");
                }
            }
            Status::AwaitingSuit => {
                let Some(suit) = prompt_suit() else {
                    return;
                };
                if let Err(err) = game.choose_suit(suit) {
                    println!("Suit error: {err}");
                }
            }
            Status::PlayerWon | Status::OpponentWon => {
                print_table(&game);
                if game.state().winner() == Some(Actor::Player) {
                    println!("You won!");
                } else {
                    println!("The opponent won.");
                }
                if prompt_line("Play again? (y/n): ") != "y" {
                    return;
                }
                if let Err(err) = game.restart_with(true) {
                    println!("Deal error: {err}");
                    return;
                }
            }
            Status::InProgress if game.state().turn() == Actor::Opponent => {
                thread::sleep(OPPONENT_DELAY);
                match game.opponent_step() {
                    Ok(Some(action)) => describe_opponent(action),
                    Ok(None) => {}
                    Err(err) => {
                        println!("Opponent error: {err}");
                        return;
                    }
                }
            }
            Status::InProgress => {
                print_table(&game);
                if !player_turn(&mut game) {
                    return;
                }
            }
        }
    }
}

/// Handles one player command. Returns `false` to quit.
fn player_turn(game: &mut Game) -> bool {
    let input = prompt_line("Card number to play, [d]raw: ");
    match input.as_str() {
        "q" | "quit" => return false,
        "r" | "restart" => {
            if let Err(err) = game.restart_with(true) {
                println!("Deal error: {err}");
            }
        }
        "d" | "draw" => match game.draw_card(Actor::Player) {
            Ok(DrawOutcome::Drew(card)) => println!("You drew the {card}."),
            Ok(DrawOutcome::Skipped) => println!("Deck empty! Turn skipped."),
            Err(err) => println!("Draw error: {err}"),
        },
        other => {
            let hand = game.state().player_hand().clone();
            let Some(&card) = other
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|index| hand.cards().get(index))
            else {
                println!("Unknown command.");
                return true;
            };
            match game.play_card(card, Actor::Player) {
                Ok(PlayOutcome::AwaitingSuit) => println!("Crazy 8! Choose a new suit."),
                Ok(_) => {}
                Err(err) => println!("Can't play the {card}: {err}"),
            }
        }
    }
    true
}

fn describe_opponent(action: Action) {
    match action {
        Action::PlayNonWild(card) => println!("Opponent played the {card}."),
        Action::PlayWild(card, suit) => {
            println!("Opponent played the {card} and changed the suit to {suit}.");
        }
        Action::Draw => println!("Opponent drew a card."),
        Action::Skip => println!("Opponent has nothing to play and the deck is empty. Skipped."),
    }
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

fn prompt_suit() -> Option<Suit> {
    loop {
        match prompt_line("Suit ([h]earts [d]iamonds [c]lubs [s]pades): ").as_str() {
            "h" | "hearts" => return Some(Suit::Hearts),
            "d" | "diamonds" => return Some(Suit::Diamonds),
            "c" | "clubs" => return Some(Suit::Clubs),
            "s" | "spades" => return Some(Suit::Spades),
            "q" | "quit" => return None,
            _ => println!("Please pick a suit."),
        }
    }
}

fn print_table(game: &Game) {
    let state = game.state();
    println!("\nDeck: {} cards left", state.deck_len());
    println!("Opponent: {} cards", state.opponent_hand().len());

    if let Some(top) = state.top_discard() {
        println!(
            "Discard: {} | suit {}",
            format_card(top),
            colorize(&state.active_suit().to_string().to_uppercase(), "33")
        );
    }

    println!("Your hand: {}", format_hand(state, state.player_hand()));
    println!();
}

fn format_hand(state: &eights::GameState, hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .enumerate()
        .map(|(index, card)| {
            let label = format!("{}:{}", index + 1, format_card(card));
            if state.is_playable(*card) {
                label
            } else {
                colorize(&format!("{}:{}{}", index + 1, card.rank, card.suit.symbol()), "90")
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&format!("{}{}", card.rank, card.suit.symbol()), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
