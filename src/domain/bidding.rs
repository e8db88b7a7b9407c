//! Bid validation and placement, including the hook rule for the last bidder.

use tracing::info;

use super::rules::valid_bid_range;
use super::state::{GameState, Seat};
use crate::errors::domain::{DomainError, ValidationKind};

/// Outcome of a recorded bid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BidOutcome {
    /// True once every seat has a bid; the caller moves the game into play.
    pub all_bids_in: bool,
}

/// The one value the final bidder may not choose, if any: the bid that would
/// make the round's bids sum to exactly the number of tricks available.
pub fn forbidden_last_bid(state: &GameState, hand_size: u8) -> Option<u8> {
    if state.bids_recorded() != state.player_count() - 1 {
        return None;
    }
    let sum: u32 = state.guesses.iter().flatten().map(|&b| u32::from(b)).sum();
    let hand = u32::from(hand_size);
    (sum <= hand).then(|| (hand - sum) as u8)
}

/// All bids `seat` could legally submit right now.
pub fn legal_bids(state: &GameState, seat: Seat) -> Vec<u8> {
    let hand_size = state.players[seat].hand.len() as u8;
    let forbidden = forbidden_last_bid(state, hand_size);
    valid_bid_range(hand_size)
        .filter(|b| Some(*b) != forbidden)
        .collect()
}

/// Validate and record `seat`'s bid, advancing the turn pointer.
///
/// Checks run in order: turn, below-zero range, above-hand range, then the
/// hook rule for the final bidder. Nothing is mutated on a failed check.
pub fn place_bid(state: &mut GameState, seat: Seat, proposed: i32) -> Result<BidOutcome, DomainError> {
    if state.turn != seat {
        return Err(DomainError::validation(
            ValidationKind::NotYourTurn,
            format!("Seat {} bids next", state.turn),
        ));
    }
    if proposed < 0 {
        return Err(DomainError::validation(
            ValidationKind::InvalidBid,
            "Guess has to be 0 or higher",
        ));
    }

    let hand_size = state.players[seat].hand.len() as u8;
    // The hand dealt for round N holds N cards at bid time.
    debug_assert_eq!(hand_size, state.round);

    if proposed > i32::from(hand_size) {
        return Err(DomainError::validation(
            ValidationKind::BidExceedsHand,
            "Cannot guess more than you have cards",
        ));
    }
    let proposed = proposed as u8;

    if let Some(forbidden) = forbidden_last_bid(state, hand_size) {
        if proposed == forbidden {
            return Err(DomainError::validation(
                ValidationKind::HookViolation,
                "Last bidder cannot make the bids sum to the number of tricks",
            ));
        }
    }

    debug_assert!(
        state.guesses[seat].is_none(),
        "turn order admits one bid per seat per round"
    );
    state.guesses[seat] = Some(proposed);
    state.turn = state.next_seat(seat);
    info!(seat, bid = proposed, "guess recorded");

    Ok(BidOutcome {
        all_bids_in: state.bids_recorded() == state.player_count(),
    })
}
