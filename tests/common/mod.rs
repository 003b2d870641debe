//! Shared helpers for integration tests.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use std::sync::Once;

use eights::{Card, GameOptions, GameParts, GameState, Rank, Suit, build_deck};
use tracing_subscriber::{EnvFilter, fmt};

static INIT: Once = Once::new();

/// Initializes test logging once per binary.
///
/// The filter comes from `TEST_LOG`, then `RUST_LOG`, defaulting to `warn`.
pub fn init_logging() {
    INIT.call_once(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

pub const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

/// Deals the canonical, unshuffled deck.
///
/// Player: 2♥..9♥. Opponent: 10♥..A♥, 2♦..4♦. Starter: A♠ (spades active).
/// Deck top: K♠.
pub fn canonical(options: GameOptions) -> GameState {
    GameState::deal_from(build_deck(), options).unwrap()
}

/// Canonical deal, already started.
pub fn started() -> GameState {
    canonical(GameOptions::default()).start().unwrap()
}

/// Rebuilds `state` after `f` rearranges its raw parts.
pub fn arrange(state: GameState, f: impl FnOnce(&mut GameParts)) -> GameState {
    let mut parts = state.into_parts();
    f(&mut parts);
    GameState::from_parts(parts)
}
