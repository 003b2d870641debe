//! Game engine and state management.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::card::{Card, Suit};
use crate::error::{ActionError, DealError, DrawError, PlayError, StateError};
use crate::opponent::{Action, choose_action};
use crate::options::GameOptions;
use crate::result::{Actor, DrawOutcome, PlayOutcome};

mod actions;
mod deal;
pub mod state;

pub use state::{GameParts, GameState, Status};

/// A play session holding the one live [`GameState`].
///
/// The session owns the random number generator used for shuffling, so a
/// sequence of games is reproducible from its seed. Every successful
/// transition replaces the held state wholesale; a failed one leaves it
/// untouched.
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    options: GameOptions,
    /// Current game state.
    state: GameState,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new session with the given seed and deals the first game.
    ///
    /// # Example
    ///
    /// ```
    /// use eights::{Game, GameOptions, Status};
    ///
    /// let game = Game::new(GameOptions::default(), 42).unwrap();
    /// assert_eq!(game.state().status(), Status::NotStarted);
    /// ```
    ///
    /// # Errors
    ///
    /// Dealing a standard deck does not fail; the error is passed through
    /// from [`GameState::deal`].
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, DealError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let state = GameState::deal(&mut rng, options)?;

        Ok(Self {
            options,
            state,
            rng,
        })
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the session options.
    #[must_use]
    pub const fn options(&self) -> GameOptions {
        self.options
    }

    /// Discards the current game and deals a new one.
    ///
    /// The new deck is shuffled from the continuing generator stream, so it
    /// is independent of every earlier deal in the session.
    ///
    /// # Errors
    ///
    /// See [`Game::new`]. On error the current game is kept.
    pub fn restart(&mut self) -> Result<(), DealError> {
        self.restart_with(self.options.auto_start)
    }

    /// Like [`Game::restart`], with the caller choosing whether the new game
    /// starts in progress or waits for [`Game::start`].
    ///
    /// # Example
    ///
    /// ```
    /// use eights::{Game, GameOptions, Status};
    ///
    /// let mut game = Game::new(GameOptions::default(), 42).unwrap();
    /// game.restart_with(true).unwrap();
    /// assert_eq!(game.state().status(), Status::InProgress);
    /// ```
    ///
    /// # Errors
    ///
    /// See [`Game::new`]. On error the current game is kept.
    pub fn restart_with(&mut self, auto_start: bool) -> Result<(), DealError> {
        let options = self.options.with_auto_start(auto_start);
        self.state = GameState::deal(&mut self.rng, options)?;
        debug!(auto_start, "game restarted");
        Ok(())
    }

    /// Starts a dealt game.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has already been started.
    pub fn start(&mut self) -> Result<(), StateError> {
        self.state = self.state.start()?;
        Ok(())
    }

    /// Plays `card` for `actor`.
    ///
    /// # Errors
    ///
    /// See [`GameState::play_card`].
    pub fn play_card(&mut self, card: Card, actor: Actor) -> Result<PlayOutcome, PlayError> {
        let (next, outcome) = self.state.play_card_with_outcome(card, actor)?;
        self.state = next;
        Ok(outcome)
    }

    /// Declares the active suit after a wild card.
    ///
    /// # Errors
    ///
    /// See [`GameState::choose_suit`].
    pub fn choose_suit(&mut self, suit: Suit) -> Result<(), StateError> {
        self.state = self.state.choose_suit(suit)?;
        Ok(())
    }

    /// Draws a card for `actor`.
    ///
    /// # Errors
    ///
    /// See [`GameState::draw_card`].
    pub fn draw_card(&mut self, actor: Actor) -> Result<DrawOutcome, DrawError> {
        let (next, outcome) = self.state.draw_card_with_outcome(actor)?;
        self.state = next;
        Ok(outcome)
    }

    /// Applies `action` for `actor`.
    ///
    /// # Errors
    ///
    /// See [`GameState::apply`].
    pub fn apply(&mut self, actor: Actor, action: Action) -> Result<(), ActionError> {
        self.state = self.state.apply(actor, action)?;
        Ok(())
    }

    /// Decides and applies one opponent move.
    ///
    /// Returns `None` when it is not the opponent's turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the decided action is rejected, which the policy
    /// never produces for a consistent state.
    pub fn opponent_step(&mut self) -> Result<Option<Action>, ActionError> {
        if !self.state.is_turn_of(Actor::Opponent) {
            return Ok(None);
        }

        let action = choose_action(&self.state.opponent_hand, &self.state);
        debug!(?action, "opponent decided");
        self.apply(Actor::Opponent, action)?;
        Ok(Some(action))
    }

    /// Runs opponent moves until the turn leaves the opponent or the game
    /// ends, returning the moves in order.
    ///
    /// Every step either passes the turn or shrinks the deck, so the loop
    /// always terminates.
    ///
    /// # Errors
    ///
    /// See [`Game::opponent_step`]. Moves applied before the error stay
    /// applied.
    pub fn run_opponent_turn(&mut self) -> Result<Vec<Action>, ActionError> {
        let mut actions = Vec::new();
        while let Some(action) = self.opponent_step()? {
            actions.push(action);
        }
        Ok(actions)
    }
}
