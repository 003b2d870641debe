//! Property tests over seeded play-outs driven by the opponent policy.

mod common;

use eights::{
    Action, DECK_SIZE, DrawPolicy, GameOptions, GameState, build_deck, check_partition,
    choose_action, shuffle,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const MAX_STEPS: usize = 400;

fn options(pass_if_unplayable: bool) -> GameOptions {
    let policy = if pass_if_unplayable {
        DrawPolicy::PassIfUnplayable
    } else {
        DrawPolicy::Hold
    };
    GameOptions::default()
        .with_auto_start(true)
        .with_draw_policy(policy)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Shuffling keeps exactly the same cards.
    #[test]
    fn prop_shuffle_is_a_permutation(seed in any::<u64>()) {
        let deck = build_deck();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut shuffled = shuffle(&deck, &mut rng);

        prop_assert_eq!(shuffled.len(), DECK_SIZE);
        shuffled.sort_by_key(|c| c.id());
        prop_assert_eq!(shuffled, deck);
    }

    /// A fresh deal partitions the deck and never starts on a wild card.
    #[test]
    fn prop_deal_is_a_partition(seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let state = GameState::deal(&mut rng, GameOptions::default()).unwrap();

        prop_assert!(check_partition(&state).is_ok());
        prop_assert!(!state.discard_pile()[0].is_wild());
        prop_assert_eq!(state.active_suit(), state.discard_pile()[0].suit);
    }

    /// Every transition of a play-out keeps the partition and the step rules.
    #[test]
    fn prop_playout_keeps_invariants(seed in any::<u64>(), pass in any::<bool>()) {
        common::init_logging();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut state = GameState::deal(&mut rng, options(pass)).unwrap();

        for _ in 0..MAX_STEPS {
            if state.is_over() {
                break;
            }

            let actor = state.turn();
            let action = choose_action(state.hand(actor), &state);
            let next = state.apply(actor, action).unwrap();
            prop_assert!(check_partition(&next).is_ok());

            match action {
                Action::PlayNonWild(card) => {
                    prop_assert_eq!(next.active_suit(), card.suit);
                    prop_assert_eq!(next.turn(), actor.other());
                    prop_assert_eq!(next.hand(actor).len() + 1, state.hand(actor).len());
                }
                Action::PlayWild(card, suit) => {
                    prop_assert_eq!(next.top_discard(), Some(&card));
                    if !next.is_over() {
                        prop_assert_eq!(next.active_suit(), suit);
                        prop_assert_eq!(next.turn(), actor.other());
                    }
                }
                Action::Draw => {
                    prop_assert_eq!(next.hand(actor).len(), state.hand(actor).len() + 1);
                    prop_assert_eq!(next.deck_len() + 1, state.deck_len());
                    if !pass {
                        prop_assert_eq!(next.turn(), actor);
                    }
                }
                Action::Skip => {
                    prop_assert_eq!(next.hand(actor).len(), state.hand(actor).len());
                    prop_assert_eq!(next.deck_len(), 0);
                    prop_assert_eq!(next.turn(), actor.other());
                }
            }

            if next.hand(actor).is_empty() {
                prop_assert_eq!(next.winner(), Some(actor));
            }
            state = next;
        }

        if let Some(winner) = state.winner() {
            prop_assert!(state.hand(winner).is_empty());
            prop_assert!(state.draw_card(winner.other()).is_err());
            prop_assert!(state.apply(winner.other(), Action::Skip).is_err());
            prop_assert_eq!(state.winner(), Some(winner));
        }
    }
}
