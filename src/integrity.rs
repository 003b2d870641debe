//! Consistency checks over a game state.

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::card::DECK_SIZE;
use crate::error::IntegrityError;
use crate::game::GameState;

/// Verifies that the deck, both hands and the discard pile together hold
/// each of the 52 cards exactly once, and that a discard is showing.
///
/// # Errors
///
/// Returns the first violation found.
pub fn check_partition(state: &GameState) -> Result<(), IntegrityError> {
    if state.discard_pile.is_empty() {
        return Err(IntegrityError::EmptyDiscard);
    }

    let all = state
        .deck
        .iter()
        .chain(state.player_hand.cards())
        .chain(state.opponent_hand.cards())
        .chain(&state.discard_pile);

    let mut seen = HashSet::with_capacity(DECK_SIZE);
    let mut count = 0;
    for card in all {
        if !seen.insert(card.id()) {
            return Err(IntegrityError::Duplicate(card.id()));
        }
        count += 1;
    }

    if count != DECK_SIZE {
        return Err(IntegrityError::WrongCount(count));
    }

    Ok(())
}
