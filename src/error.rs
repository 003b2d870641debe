//! Error types for game operations.
//!
//! Every error leaves the game state unchanged; callers surface them as
//! advisory messages and carry on.

use thiserror::Error;

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Not enough cards to fill both hands and turn a starter.
    #[error("not enough cards to deal")]
    NotEnoughCards,
    /// Every remaining card has the wild rank.
    #[error("no non-wild card available to start the discard pile")]
    NoStarterCard,
}

/// Errors that can occur when playing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// The game is not accepting plays.
    #[error("invalid game state for playing a card")]
    InvalidState,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// The card is not in the acting player's hand.
    #[error("card is not in hand")]
    CardNotInHand,
    /// The card matches neither the active suit nor the top discard's rank.
    #[error("card does not match the active suit or rank")]
    NotPlayable,
    /// A wild card was played without a declared suit.
    #[error("wild card requires a declared suit")]
    SuitRequired,
    /// A suit was declared for a card that is not wild.
    #[error("only wild cards can declare a suit")]
    NotWild,
}

/// Errors raised when a status transition is not allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StateError {
    /// No wild card is waiting for a suit.
    #[error("not awaiting a suit choice")]
    NotAwaitingSuit,
    /// The game has already been started.
    #[error("game already started")]
    AlreadyStarted,
}

/// Errors that can occur when drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// The game is not accepting draws.
    #[error("invalid game state for drawing")]
    InvalidState,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// A skip was requested while cards remain to be drawn.
    #[error("cannot skip while the deck has cards")]
    DeckNotEmpty,
}

/// Errors that can occur when applying an [`Action`](crate::opponent::Action).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Playing the card failed.
    #[error(transparent)]
    Play(#[from] PlayError),
    /// Drawing or skipping failed.
    #[error(transparent)]
    Draw(#[from] DrawError),
}

/// Violations of the 52-card partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IntegrityError {
    /// The piles together do not hold a full deck.
    #[error("expected 52 cards, found {0}")]
    WrongCount(usize),
    /// A card appears more than once.
    #[error("card {0} appears more than once")]
    Duplicate(crate::card::CardId),
    /// The discard pile is empty.
    #[error("discard pile is empty")]
    EmptyDiscard,
}
