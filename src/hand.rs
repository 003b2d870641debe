//! Player hand representation.

use alloc::vec::Vec;

use crate::card::{Card, Suit};

/// Cards held by one player, in the order they were received.
///
/// Order carries no meaning for the rules, but the opponent breaks ties by
/// it and a presentation layer displays it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding `cards` in the given order.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Adds a card to the end of the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes `card` from the hand, returning whether it was held.
    pub fn remove(&mut self, card: Card) -> bool {
        let id = card.id();
        match self.cards.iter().position(|c| c.id() == id) {
            Some(index) => {
                self.cards.remove(index);
                true
            }
            None => false,
        }
    }

    /// Returns whether the hand holds `card`.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        let id = card.id();
        self.cards.iter().any(|c| c.id() == id)
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Counts cards of each suit, indexed by [`Suit::index`].
    #[must_use]
    pub fn suit_counts(&self) -> [usize; 4] {
        let mut counts = [0; 4];
        for card in &self.cards {
            counts[card.suit.index()] += 1;
        }
        counts
    }

    /// Returns the suit held most often, ties going to the earliest in
    /// [`Suit::ALL`]. An empty hand yields hearts.
    #[must_use]
    pub fn most_common_suit(&self) -> Suit {
        let counts = self.suit_counts();
        let mut best = Suit::Hearts;
        for suit in Suit::ALL {
            if counts[suit.index()] > counts[best.index()] {
                best = suit;
            }
        }
        best
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::card::Rank;

    #[test]
    fn remove_only_takes_held_cards() {
        let mut hand = Hand::from_cards(vec![
            Card::new(Suit::Hearts, Rank::Two),
            Card::new(Suit::Clubs, Rank::King),
        ]);

        assert!(hand.remove(Card::new(Suit::Hearts, Rank::Two)));
        assert!(!hand.remove(Card::new(Suit::Hearts, Rank::Two)));
        assert_eq!(hand.cards(), &[Card::new(Suit::Clubs, Rank::King)]);
    }

    #[test]
    fn most_common_suit_breaks_ties_in_suit_order() {
        let hand = Hand::from_cards(vec![
            Card::new(Suit::Spades, Rank::Two),
            Card::new(Suit::Diamonds, Rank::Three),
            Card::new(Suit::Spades, Rank::Four),
            Card::new(Suit::Diamonds, Rank::Five),
        ]);
        assert_eq!(hand.suit_counts(), [0, 2, 0, 2]);
        assert_eq!(hand.most_common_suit(), Suit::Diamonds);

        assert_eq!(Hand::new().most_common_suit(), Suit::Hearts);
    }
}
