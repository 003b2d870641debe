//! Game state types.

use alloc::vec::Vec;

use crate::card::{Card, Suit};
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::result::Actor;

/// Game status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Dealt, waiting for an explicit start.
    NotStarted,
    /// Waiting for the current actor to play or draw.
    InProgress,
    /// A wild card was played and the actor on turn must declare a suit.
    AwaitingSuit,
    /// The player emptied their hand.
    PlayerWon,
    /// The opponent emptied their hand.
    OpponentWon,
}

impl Status {
    /// Returns the terminal status for `actor` winning.
    #[must_use]
    pub const fn won_by(actor: Actor) -> Self {
        match actor {
            Actor::Player => Self::PlayerWon,
            Actor::Opponent => Self::OpponentWon,
        }
    }

    /// Returns whether the game has ended.
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::PlayerWon | Self::OpponentWon)
    }
}

/// The complete state of one game.
///
/// Transitions never mutate a state in place: each returns a new value that
/// callers swap in for the old one, so a rejected move leaves the held state
/// exactly as it was.
///
/// The deck, both hands and the discard pile always partition the 52 cards;
/// see [`check_partition`](crate::integrity::check_partition).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Cards left to draw. The top of the deck is the last element.
    pub(crate) deck: Vec<Card>,
    /// The human player's hand.
    pub(crate) player_hand: Hand,
    /// The computer opponent's hand.
    pub(crate) opponent_hand: Hand,
    /// Played cards. The last element is the active discard.
    pub(crate) discard_pile: Vec<Card>,
    /// Suit that plays must match when not matching the active discard's rank.
    pub(crate) active_suit: Suit,
    /// Whose turn it is.
    pub(crate) turn: Actor,
    /// Current status.
    pub(crate) status: Status,
    /// Options the game was dealt with.
    pub(crate) options: GameOptions,
}

/// Raw parts of a [`GameState`], for arranging positions in tests and
/// replays. Nothing is validated; pair with
/// [`check_partition`](crate::integrity::check_partition) where it matters.
#[doc(hidden)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameParts {
    pub deck: Vec<Card>,
    pub player_hand: Hand,
    pub opponent_hand: Hand,
    pub discard_pile: Vec<Card>,
    pub active_suit: Suit,
    pub turn: Actor,
    pub status: Status,
    pub options: GameOptions,
}

impl GameState {
    #[doc(hidden)]
    #[must_use]
    pub fn from_parts(parts: GameParts) -> Self {
        Self {
            deck: parts.deck,
            player_hand: parts.player_hand,
            opponent_hand: parts.opponent_hand,
            discard_pile: parts.discard_pile,
            active_suit: parts.active_suit,
            turn: parts.turn,
            status: parts.status,
            options: parts.options,
        }
    }

    #[doc(hidden)]
    #[must_use]
    pub fn into_parts(self) -> GameParts {
        GameParts {
            deck: self.deck,
            player_hand: self.player_hand,
            opponent_hand: self.opponent_hand,
            discard_pile: self.discard_pile,
            active_suit: self.active_suit,
            turn: self.turn,
            status: self.status,
            options: self.options,
        }
    }

    /// Returns the cards left to draw; the top of the deck is the last one.
    #[must_use]
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    /// Returns the human player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the computer opponent's hand.
    #[must_use]
    pub const fn opponent_hand(&self) -> &Hand {
        &self.opponent_hand
    }

    /// Returns the played cards, oldest first.
    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard_pile
    }

    /// Returns the suit plays must match.
    #[must_use]
    pub const fn active_suit(&self) -> Suit {
        self.active_suit
    }

    /// Returns whose turn it is.
    #[must_use]
    pub const fn turn(&self) -> Actor {
        self.turn
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Returns the options the game was dealt with.
    #[must_use]
    pub const fn options(&self) -> GameOptions {
        self.options
    }

    /// Returns the hand held by `actor`.
    #[must_use]
    pub const fn hand(&self, actor: Actor) -> &Hand {
        match actor {
            Actor::Player => &self.player_hand,
            Actor::Opponent => &self.opponent_hand,
        }
    }

    pub(crate) const fn hand_mut(&mut self, actor: Actor) -> &mut Hand {
        match actor {
            Actor::Player => &mut self.player_hand,
            Actor::Opponent => &mut self.opponent_hand,
        }
    }

    /// Returns the active discard.
    #[must_use]
    pub fn top_discard(&self) -> Option<&Card> {
        self.discard_pile.last()
    }

    /// Returns whether `card` may be played on the current table.
    ///
    /// A card is playable if it is wild, matches the active suit, or matches
    /// the active discard's rank. Whose turn it is and whether the card is
    /// held are not considered.
    #[must_use]
    pub fn is_playable(&self, card: Card) -> bool {
        card.is_wild()
            || card.suit == self.active_suit
            || self.top_discard().is_some_and(|top| top.rank == card.rank)
    }

    /// Returns the cards in `actor`'s hand that are currently playable, in
    /// hand order.
    #[must_use]
    pub fn playable_cards(&self, actor: Actor) -> Vec<Card> {
        self.hand(actor)
            .cards()
            .iter()
            .copied()
            .filter(|card| self.is_playable(*card))
            .collect()
    }

    /// Returns the number of cards left to draw.
    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    /// Returns the winner, if the game has ended.
    #[must_use]
    pub const fn winner(&self) -> Option<Actor> {
        match self.status {
            Status::PlayerWon => Some(Actor::Player),
            Status::OpponentWon => Some(Actor::Opponent),
            _ => None,
        }
    }

    /// Returns whether the game has ended.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Returns whether `actor` may act right now.
    #[must_use]
    pub fn is_turn_of(&self, actor: Actor) -> bool {
        self.status == Status::InProgress && self.turn == actor
    }
}
