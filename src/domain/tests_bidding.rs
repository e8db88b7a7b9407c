use crate::domain::bidding::{forbidden_last_bid, legal_bids, place_bid};
use crate::domain::test_state_helpers::guess_state;
use crate::errors::domain::ValidationKind;

#[test]
fn bids_are_bounded_by_the_hand() {
    let mut state = guess_state(&[&["R1", "R2"], &["G1", "G2"], &["B1", "B2"]], 0);

    // Seat 1 bids first (left of the dealer).
    let err = place_bid(&mut state, 1, -1).unwrap_err();
    assert_eq!(err.kind(), ValidationKind::InvalidBid);

    let err = place_bid(&mut state, 1, 3).unwrap_err();
    assert_eq!(err.kind(), ValidationKind::BidExceedsHand);

    assert!(place_bid(&mut state, 1, 2).is_ok());
}

#[test]
fn bidding_is_turn_ordered() {
    let mut state = guess_state(&[&["R1"], &["G1"], &["B1"]], 0);

    let err = place_bid(&mut state, 0, 0).unwrap_err();
    assert_eq!(err.kind(), ValidationKind::NotYourTurn);
    assert_eq!(state.bids_recorded(), 0);

    assert!(place_bid(&mut state, 1, 0).is_ok());
    assert_eq!(state.turn, 2);
}

#[test]
fn last_bidder_cannot_complete_the_trick_count() {
    // Round 2: seats 1 and 2 bid 1 and 0, leaving seat 0 (the dealer) last.
    let mut state = guess_state(&[&["R1", "R2"], &["G1", "G2"], &["B1", "B2"]], 0);
    place_bid(&mut state, 1, 1).unwrap();
    place_bid(&mut state, 2, 0).unwrap();

    assert_eq!(forbidden_last_bid(&state, 2), Some(1));

    // 1 + 0 + 1 == 2 tricks: hooked.
    let err = place_bid(&mut state, 0, 1).unwrap_err();
    assert_eq!(err.kind(), ValidationKind::HookViolation);
    assert_eq!(state.guesses[0], None);

    // Any other value in range is legal.
    let outcome = place_bid(&mut state, 0, 0).unwrap();
    assert!(outcome.all_bids_in);

    let sum: u32 = state.guesses.iter().flatten().map(|&b| u32::from(b)).sum();
    assert_ne!(sum, u32::from(state.round));
}

#[test]
fn hook_rule_only_binds_the_final_bidder() {
    let mut state = guess_state(&[&["R1", "R2"], &["G1", "G2"], &["B1", "B2"]], 0);
    // First bidder may bid the full trick count freely.
    assert!(place_bid(&mut state, 1, 2).is_ok());
    assert_eq!(forbidden_last_bid(&state, 2), None);
}

#[test]
fn no_forbidden_bid_when_sum_already_exceeds_tricks() {
    let mut state = guess_state(&[&["R1", "R2"], &["G1", "G2"], &["B1", "B2"]], 0);
    place_bid(&mut state, 1, 2).unwrap();
    place_bid(&mut state, 2, 2).unwrap();
    // 4 > 2: no single bid can land the sum on the trick count.
    assert_eq!(forbidden_last_bid(&state, 2), None);
    assert!(place_bid(&mut state, 0, 0).is_ok());
}

#[test]
fn legal_bids_excludes_the_hooked_value() {
    let mut state = guess_state(&[&["R1", "R2"], &["G1", "G2"], &["B1", "B2"]], 0);
    assert_eq!(legal_bids(&state, 1), vec![0, 1, 2]);

    place_bid(&mut state, 1, 0).unwrap();
    place_bid(&mut state, 2, 0).unwrap();
    assert_eq!(legal_bids(&state, 0), vec![0, 1]);
}

#[test]
fn all_bids_in_signals_the_caller() {
    let mut state = guess_state(&[&["R1"], &["G1"], &["B1"]], 0);
    assert!(!place_bid(&mut state, 1, 0).unwrap().all_bids_in);
    assert!(!place_bid(&mut state, 2, 0).unwrap().all_bids_in);
    // The hooked value for seat 0 is 1; bidding 0 is legal and closes bidding.
    assert!(place_bid(&mut state, 0, 0).unwrap().all_bids_in);
}
