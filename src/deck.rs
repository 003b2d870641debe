//! Deck construction and shuffling.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// Builds the 52-card deck in canonical order.
///
/// Suits follow [`Suit::ALL`] and, within a suit, ranks follow [`Rank::ALL`],
/// so the first card is the two of hearts and the last the ace of spades.
#[must_use]
pub fn build_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(suit, rank));
        }
    }
    cards
}

/// Returns a uniformly shuffled copy of `cards`.
///
/// The input is left untouched; call again with the same generator for an
/// independent ordering.
#[must_use]
pub fn shuffle<R: Rng + ?Sized>(cards: &[Card], rng: &mut R) -> Vec<Card> {
    let mut shuffled = cards.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn canonical_order_starts_with_two_of_hearts() {
        let deck = build_deck();
        assert_eq!(deck.len(), DECK_SIZE);
        assert_eq!(deck[0], Card::new(Suit::Hearts, Rank::Two));
        assert_eq!(deck[1], Card::new(Suit::Hearts, Rank::Three));
        assert_eq!(deck[DECK_SIZE - 1], Card::new(Suit::Spades, Rank::Ace));
        assert_eq!(build_deck(), deck);
    }

    #[test]
    fn shuffle_keeps_input_and_card_set() {
        let deck = build_deck();
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let shuffled = shuffle(&deck, &mut rng);

        assert_eq!(deck, build_deck());
        assert_ne!(shuffled, deck);

        let mut ids: Vec<u8> = shuffled.iter().map(|c| c.id().get()).collect();
        ids.sort_unstable();
        let expected: Vec<u8> = (0..DECK_SIZE as u8).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn repeated_shuffles_differ() {
        let deck = build_deck();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let first = shuffle(&deck, &mut rng);
        let second = shuffle(&deck, &mut rng);
        assert_ne!(first, second);
    }
}
