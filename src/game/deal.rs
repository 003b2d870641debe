use alloc::vec::Vec;

use rand::Rng;
use tracing::{info, warn};

use crate::card::{Card, INITIAL_HAND_SIZE};
use crate::deck::{build_deck, shuffle};
use crate::error::DealError;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::result::Actor;

use super::{GameState, Status};

/// Pops cards off the top until a non-wild one turns up, recycling wild
/// cards to the bottom. Gives up after one full pass over the deck.
fn turn_starter(deck: &mut Vec<Card>) -> Result<Card, DealError> {
    for _ in 0..deck.len() {
        let Some(card) = deck.pop() else {
            break;
        };
        if !card.is_wild() {
            return Ok(card);
        }
        deck.insert(0, card);
    }

    warn!(cards = deck.len(), "no non-wild starter card in deck");
    Err(DealError::NoStarterCard)
}

impl GameState {
    /// Builds and shuffles a fresh deck and deals a new game from it.
    ///
    /// # Errors
    ///
    /// Never fails for a standard deck; see [`GameState::deal_from`].
    pub fn deal<R: Rng + ?Sized>(rng: &mut R, options: GameOptions) -> Result<Self, DealError> {
        Self::deal_from(shuffle(&build_deck(), rng), options)
    }

    /// Deals a new game from `deck` as ordered.
    ///
    /// The first eight cards go to the player and the next eight to the
    /// opponent. The rest form the draw pile, whose last card is turned as
    /// the starter; wild starters are moved to the bottom and another card
    /// is turned. The player moves first.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck cannot fill both hands plus a starter,
    /// or if every remaining card is wild.
    pub fn deal_from(mut deck: Vec<Card>, options: GameOptions) -> Result<Self, DealError> {
        if deck.len() <= INITIAL_HAND_SIZE * 2 {
            return Err(DealError::NotEnoughCards);
        }

        let player_hand = Hand::from_cards(deck.drain(..INITIAL_HAND_SIZE).collect());
        let opponent_hand = Hand::from_cards(deck.drain(..INITIAL_HAND_SIZE).collect());
        let starter = turn_starter(&mut deck)?;

        let status = if options.auto_start {
            Status::InProgress
        } else {
            Status::NotStarted
        };

        info!(starter = %starter, deck = deck.len(), ?status, "dealt new game");

        Ok(Self {
            deck,
            player_hand,
            opponent_hand,
            discard_pile: alloc::vec![starter],
            active_suit: starter.suit,
            turn: Actor::Player,
            status,
            options,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    #[test]
    fn wild_starters_move_to_the_bottom() {
        let mut deck = alloc::vec![
            Card::new(Suit::Hearts, Rank::Two),
            Card::new(Suit::Clubs, Rank::Eight),
            Card::new(Suit::Spades, Rank::Eight),
        ];
        let starter = turn_starter(&mut deck).unwrap();
        assert_eq!(starter, Card::new(Suit::Hearts, Rank::Two));
        assert_eq!(
            deck,
            alloc::vec![
                Card::new(Suit::Clubs, Rank::Eight),
                Card::new(Suit::Spades, Rank::Eight),
            ]
        );
    }

    #[test]
    fn all_wild_deck_has_no_starter() {
        let mut deck = alloc::vec![
            Card::new(Suit::Clubs, Rank::Eight),
            Card::new(Suit::Spades, Rank::Eight),
        ];
        assert_eq!(turn_starter(&mut deck), Err(DealError::NoStarterCard));
        assert_eq!(deck.len(), 2);
    }
}
