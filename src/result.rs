//! Participants and transition outcomes.

use core::fmt;

use crate::card::{Card, Suit};

/// One of the two participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Actor {
    /// The human player.
    Player,
    /// The computer opponent.
    Opponent,
}

impl Actor {
    /// Returns the other participant.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Player => Self::Opponent,
            Self::Opponent => Self::Player,
        }
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player => f.write_str("player"),
            Self::Opponent => f.write_str("opponent"),
        }
    }
}

/// Result of a draw request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOutcome {
    /// A card was drawn into the actor's hand.
    Drew(Card),
    /// The deck was empty and the turn was skipped.
    Skipped,
}

/// Result of a successful play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The turn passed to the other participant.
    Continue,
    /// A wild card was played and a suit must be chosen.
    AwaitingSuit,
    /// A suit was declared along with the wild card.
    SuitDeclared(Suit),
    /// The actor emptied their hand.
    Won(Actor),
}
