//! Cube integration tests: full games through the public API.

use cube_game::cards::STANDARD_DECK_SIZE;
use cube_game::{Card, Cube, CubeConfig, CubeError, Deck, Prediction, Suit, WagerOutcome, SLOT_COUNT};
use proptest::prelude::*;

/// Deck that deals `slots` in slot order and then draws `draws` in order.
fn stacked(slots: &[u8], draws: &[u8]) -> Deck {
    let mut cards: Vec<Card> = slots
        .iter()
        .chain(draws)
        .map(|&rank| Card::new(rank, Suit::Clubs))
        .collect();
    cards.reverse();
    Deck::from_cards(cards)
}

/// Check every cached invariant against the slot state.
fn assert_consistent(cube: &Cube) {
    let live: Vec<usize> = cube.live_slots().collect();
    assert_eq!(cube.alive_count(), live.len());
    assert_eq!(cube.alive_count() + cube.dead_count(), SLOT_COUNT);
    assert_eq!(cube.deck_size() + cube.cards_consumed(), STANDARD_DECK_SIZE);

    match (cube.highest(), cube.lowest()) {
        (Some(high), Some(low)) => {
            assert!(cube.is_alive(high.index));
            assert!(cube.is_alive(low.index));
            assert!(high.card >= low.card);
            for &i in &live {
                let card = cube.slot(i).unwrap();
                assert!(card <= high.card);
                assert!(card >= low.card);
            }
        }
        (None, None) => assert!(cube.is_over()),
        other => panic!("highest and lowest disagree: {:?}", other),
    }
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn test_new_cube() {
    let cube = Cube::new().unwrap();

    assert_eq!(cube.alive_count(), SLOT_COUNT);
    assert_eq!(cube.depths().iter().sum::<usize>(), SLOT_COUNT);
    assert!(cube.depths().iter().all(|&d| d == 1));
    assert!(!cube.is_over());
    assert_consistent(&cube);
}

#[test]
fn test_config_seed_reproduces_deal() {
    let config = CubeConfig::new().with_seed(31337);
    let a = Cube::with_config(&config).unwrap();
    let b = Cube::with_config(&config).unwrap();

    let faces = |cube: &Cube| -> Vec<(u8, Suit)> {
        cube.slots().iter().map(|c| (c.rank(), c.suit())).collect()
    };
    assert_eq!(faces(&a), faces(&b));
}

// =============================================================================
// Wagers
// =============================================================================

#[test]
fn test_play_slot_until_it_loses() {
    let mut cube = Cube::seeded(17).unwrap();
    let mut wagers = 0;

    loop {
        let outcome = cube.wager(0, Prediction::Higher).unwrap();
        wagers += 1;
        assert_consistent(&cube);
        if outcome == WagerOutcome::Lost {
            break;
        }
    }

    assert_eq!(cube.depth(0), Some(1 + wagers));
    assert!(!cube.is_alive(0));
    assert_eq!(cube.alive_count(), SLOT_COUNT - 1);

    // Further wagers on the dead slot change nothing
    for _ in 0..5 {
        assert_eq!(cube.wager(0, Prediction::Higher), Ok(WagerOutcome::SlotDead));
    }
    assert_eq!(cube.depth(0), Some(1 + wagers));
    assert_eq!(cube.alive_count(), SLOT_COUNT - 1);
}

#[test]
fn test_tie_loses_either_way() {
    let slots = [8, 8, 3, 4, 5, 6, 7, 9, 10];
    let mut cube = Cube::from_deck(stacked(&slots, &[8, 8])).unwrap();

    assert_eq!(cube.wager(0, Prediction::Higher), Ok(WagerOutcome::Lost));
    assert_eq!(cube.wager(1, Prediction::Lower), Ok(WagerOutcome::Lost));
    assert_eq!(cube.alive_count(), SLOT_COUNT - 2);
}

#[test]
fn test_errors_leave_state_unchanged() {
    let slots = [2, 3, 4, 5, 6, 7, 9, 10, 11];
    let mut cube = Cube::from_deck(stacked(&slots, &[])).unwrap();
    let before = cube.to_string();

    assert_eq!(cube.wager(0, Prediction::Higher), Err(CubeError::EmptyDeck));
    assert!(matches!(
        cube.wager(SLOT_COUNT, Prediction::Lower),
        Err(CubeError::InvalidIndex { index: 9, .. })
    ));
    assert_eq!(cube.to_string(), before);
}

#[test]
fn test_most_extreme_follows_deaths() {
    // Ace (distance 6) beats Four (distance 4) until the Ace dies.
    let slots = [4, 14, 6, 7, 8, 9, 10, 6, 7];
    let mut cube = Cube::from_deck(stacked(&slots, &[14])).unwrap();

    let pick = cube.most_extreme().unwrap();
    assert_eq!((pick.index, pick.card.rank()), (1, 14));
    assert_eq!(pick.safer_prediction(), Prediction::Lower);

    assert_eq!(cube.wager(1, Prediction::Lower), Ok(WagerOutcome::Lost));

    let pick = cube.most_extreme().unwrap();
    assert_eq!((pick.index, pick.card.rank()), (0, 4));
    assert_eq!(pick.safer_prediction(), Prediction::Higher);
}

#[test]
fn test_exhaust_deck() {
    let mut cube = Cube::seeded(1).unwrap();
    let mut errors = 0;

    // Keep betting on whatever is alive until the deck is gone or the cube is cleared
    while !cube.is_over() {
        let Some(index) = cube.live_slots().next() else { break };
        match cube.wager(index, Prediction::Lower) {
            Ok(_) => assert_consistent(&cube),
            Err(CubeError::EmptyDeck) => {
                errors += 1;
                break;
            }
            Err(e) => panic!("unexpected error: {}", e),
        }
    }

    assert!(cube.is_over() || (cube.is_exhausted() && errors == 1));
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_invariants_hold_for_any_play(
        seed in any::<u64>(),
        moves in prop::collection::vec((0usize..SLOT_COUNT, any::<bool>()), 0..80),
    ) {
        let mut cube = Cube::seeded(seed).unwrap();

        for (index, higher) in moves {
            let alive_before = cube.alive_count();
            let depth_before = cube.depth(index).unwrap();
            let was_alive = cube.is_alive(index);

            match cube.bet(index, higher) {
                Ok(WagerOutcome::SlotDead) => {
                    prop_assert!(!was_alive);
                    prop_assert_eq!(cube.depth(index), Some(depth_before));
                    prop_assert_eq!(cube.alive_count(), alive_before);
                }
                Ok(WagerOutcome::Won) => {
                    prop_assert!(cube.is_alive(index));
                    prop_assert_eq!(cube.depth(index), Some(depth_before + 1));
                    prop_assert_eq!(cube.alive_count(), alive_before);
                }
                Ok(WagerOutcome::Lost) => {
                    prop_assert!(!cube.is_alive(index));
                    prop_assert_eq!(cube.depth(index), Some(depth_before + 1));
                    prop_assert_eq!(cube.alive_count(), alive_before - 1);
                }
                Err(err) => {
                    prop_assert_eq!(err, CubeError::EmptyDeck);
                    prop_assert_eq!(cube.depth(index), Some(depth_before));
                }
            }
            assert_consistent(&cube);
        }
    }

    #[test]
    fn prop_most_extreme_is_farthest(seed in any::<u64>()) {
        let cube = Cube::seeded(seed).unwrap();
        let high = cube.highest().unwrap();
        let low = cube.lowest().unwrap();
        let pick = cube.most_extreme().unwrap();

        if high.distance() > low.distance() {
            prop_assert_eq!(pick, high);
        } else {
            prop_assert_eq!(pick, low);
        }
    }

    #[test]
    fn prop_card_order_is_rank_order(a in 2u8..=14, b in 2u8..=14, s in 0usize..4, t in 0usize..4) {
        let x = Card::new(a, Suit::ALL[s]);
        let y = Card::new(b, Suit::ALL[t]);
        prop_assert_eq!(x.cmp(&y), a.cmp(&b));
        prop_assert_eq!(x == y, a == b);
    }
}
