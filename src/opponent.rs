//! Computer opponent decision policy.
//!
//! The policy is greedy and looks one step ahead at most: it plays the first
//! legal non-wild card in hand order, falls back to a wild card, and draws
//! otherwise. After a draw the caller asks again with the updated state.

use crate::card::{Card, Suit};
use crate::game::GameState;
use crate::hand::Hand;

/// A single decided move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Play a card that is not wild.
    PlayNonWild(Card),
    /// Play a wild card and declare the new active suit.
    PlayWild(Card, Suit),
    /// Draw from the deck.
    Draw,
    /// Pass the turn because nothing is playable and the deck is empty.
    Skip,
}

/// Returns the suit to declare when playing a wild card from `hand`.
///
/// Counts the whole hand, wild cards included, and picks the most common
/// suit; ties go to the earliest in [`Suit::ALL`].
#[must_use]
pub fn declare_suit(hand: &Hand) -> Suit {
    hand.most_common_suit()
}

/// Decides the next move for `hand` against the table in `state`.
#[must_use]
pub fn choose_action(hand: &Hand, state: &GameState) -> Action {
    let mut wild: Option<Card> = None;

    for &card in hand.cards() {
        if !state.is_playable(card) {
            continue;
        }
        if !card.is_wild() {
            return Action::PlayNonWild(card);
        }
        if wild.is_none() {
            wild = Some(card);
        }
    }

    if let Some(card) = wild {
        return Action::PlayWild(card, declare_suit(hand));
    }

    if state.deck.is_empty() {
        Action::Skip
    } else {
        Action::Draw
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;
    use crate::card::Rank;
    use crate::game::Status;
    use crate::options::GameOptions;
    use crate::result::Actor;

    fn table(top: Card, active_suit: Suit, deck: Vec<Card>) -> GameState {
        GameState {
            deck,
            player_hand: Hand::new(),
            opponent_hand: Hand::new(),
            discard_pile: vec![top],
            active_suit,
            turn: Actor::Opponent,
            status: Status::InProgress,
            options: GameOptions::default(),
        }
    }

    #[test]
    fn prefers_non_wild_card() {
        let state = table(
            Card::new(Suit::Hearts, Rank::Five),
            Suit::Hearts,
            vec![Card::new(Suit::Spades, Rank::King)],
        );
        let hand = Hand::from_cards(vec![
            Card::new(Suit::Clubs, Rank::Eight),
            Card::new(Suit::Hearts, Rank::Three),
            Card::new(Suit::Hearts, Rank::Three),
        ]);

        assert_eq!(
            choose_action(&hand, &state),
            Action::PlayNonWild(Card::new(Suit::Hearts, Rank::Three))
        );
    }

    #[test]
    fn first_legal_card_in_hand_order() {
        let state = table(Card::new(Suit::Hearts, Rank::Five), Suit::Hearts, Vec::new());
        let hand = Hand::from_cards(vec![
            Card::new(Suit::Spades, Rank::Two),
            Card::new(Suit::Clubs, Rank::Five),
            Card::new(Suit::Hearts, Rank::Jack),
        ]);

        assert_eq!(
            choose_action(&hand, &state),
            Action::PlayNonWild(Card::new(Suit::Clubs, Rank::Five))
        );
    }

    #[test]
    fn wild_declares_most_common_suit_in_whole_hand() {
        let state = table(Card::new(Suit::Hearts, Rank::Five), Suit::Hearts, Vec::new());
        let eight = Card::new(Suit::Diamonds, Rank::Eight);
        let hand = Hand::from_cards(vec![
            Card::new(Suit::Spades, Rank::Two),
            eight,
            Card::new(Suit::Spades, Rank::Nine),
            Card::new(Suit::Clubs, Rank::King),
        ]);

        assert_eq!(choose_action(&hand, &state), Action::PlayWild(eight, Suit::Spades));
    }

    #[test]
    fn wild_tie_goes_to_hearts() {
        let state = table(Card::new(Suit::Clubs, Rank::Five), Suit::Clubs, Vec::new());
        let eight = Card::new(Suit::Spades, Rank::Eight);
        let hand = Hand::from_cards(vec![eight, Card::new(Suit::Hearts, Rank::Two)]);

        assert_eq!(choose_action(&hand, &state), Action::PlayWild(eight, Suit::Hearts));
    }

    #[test]
    fn draws_then_skips() {
        let hand = Hand::from_cards(vec![Card::new(Suit::Spades, Rank::Two)]);

        let state = table(
            Card::new(Suit::Hearts, Rank::Five),
            Suit::Hearts,
            vec![Card::new(Suit::Clubs, Rank::King)],
        );
        assert_eq!(choose_action(&hand, &state), Action::Draw);

        let state = table(Card::new(Suit::Hearts, Rank::Five), Suit::Hearts, Vec::new());
        assert_eq!(choose_action(&hand, &state), Action::Skip);
    }
}
