//! Property-based tests for bid placement and the hook rule.

use proptest::prelude::*;

use crate::domain::bidding::{legal_bids, place_bid};
use crate::domain::cards_types::{Card, Color};
use crate::domain::state::{GameState, Player, PlayerId};
use crate::domain::transitions::GamePhase;

/// A bidding-phase state with `players` seats and `hand_size` suited cards
/// per hand. Card identity is irrelevant for bidding.
fn bidding_state(players: usize, hand_size: u8) -> GameState {
    let mut state = GameState::new();
    state.players = (0..players)
        .map(|i| Player {
            id: PlayerId(i as i64 + 1),
            nickname: format!("p{i}"),
            hand: (1..=hand_size)
                .map(|v| Card::suited(Color::ALL[i % 4], v))
                .collect(),
        })
        .collect();
    state.phase = GamePhase::Guess;
    state.round = hand_size;
    state.dealer = 0;
    state.turn = 1 % players;
    state.guesses = vec![None; players];
    state.wins_this_round = vec![0; players];
    state.totals = vec![0; players];
    state
}

proptest! {
    /// However the table bids, the final sum never equals the trick count.
    #[test]
    fn completed_bidding_never_sums_to_the_trick_count(
        players in 3usize..=6,
        hand_size in 1u8..=10,
        picks in prop::collection::vec(0usize..64, 6),
    ) {
        let mut state = bidding_state(players, hand_size);
        for turn in 0..players {
            let seat = state.turn;
            let options = legal_bids(&state, seat);
            prop_assert!(!options.is_empty());
            let bid = options[picks[turn] % options.len()];
            place_bid(&mut state, seat, i32::from(bid)).unwrap();
        }
        let sum: u32 = state.guesses.iter().flatten().map(|&b| u32::from(b)).sum();
        prop_assert_ne!(sum, u32::from(hand_size));
    }

    /// The last bidder is refused exactly one value, and only when the
    /// earlier bids leave the trick count reachable.
    #[test]
    fn last_bidder_is_refused_exactly_the_hooked_value(
        players in 3usize..=6,
        hand_size in 1u8..=10,
        picks in prop::collection::vec(0usize..64, 5),
    ) {
        let mut state = bidding_state(players, hand_size);
        for turn in 0..players - 1 {
            let seat = state.turn;
            let options = legal_bids(&state, seat);
            let bid = options[picks[turn] % options.len()];
            place_bid(&mut state, seat, i32::from(bid)).unwrap();
        }

        let sum: u32 = state.guesses.iter().flatten().map(|&b| u32::from(b)).sum();
        let last = state.turn;
        for bid in 0..=hand_size {
            let mut probe = state.clone();
            let result = place_bid(&mut probe, last, i32::from(bid));
            if sum + u32::from(bid) == u32::from(hand_size) {
                prop_assert!(result.is_err());
            } else {
                prop_assert!(result.is_ok());
            }
        }
    }
}
