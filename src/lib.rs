//! A Crazy Eights game engine with optional `no_std` support.
//!
//! The crate provides a [`GameState`] value with transitions for dealing,
//! playing, drawing and declaring suits, a greedy computer opponent in
//! [`opponent`], and a [`Game`] session that owns the shuffling RNG and the
//! one live state.
//!
//! # Example
//!
//! ```
//! use eights::{Actor, Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default().with_auto_start(true), 42).unwrap();
//! let playable = game.state().playable_cards(Actor::Player);
//! if let Some(&card) = playable.iter().find(|c| !c.is_wild()) {
//!     game.play_card(card, Actor::Player).unwrap();
//!     game.run_opponent_turn().unwrap();
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod integrity;
pub mod opponent;
pub mod options;
pub mod result;

// Re-export main types
pub use card::{Card, CardId, DECK_SIZE, INITIAL_HAND_SIZE, Rank, Suit, WILD_RANK};
pub use deck::{build_deck, shuffle};
pub use error::{ActionError, DealError, DrawError, IntegrityError, PlayError, StateError};
pub use game::{Game, GameState, Status};
#[doc(hidden)]
pub use game::GameParts;
pub use hand::Hand;
pub use integrity::check_partition;
pub use opponent::{Action, choose_action, declare_suit};
pub use options::{DrawPolicy, GameOptions};
pub use result::{Actor, DrawOutcome, PlayOutcome};
