//! Round scoring: bids vs tricks won into points, history, running totals.

use tracing::info;

use super::state::{GameState, Seat};

/// Points for one player's round: an exact guess pays a base of 20 plus 10
/// per predicted trick; a miss costs 10 per trick of error.
pub fn round_points(bid: u8, won: u8) -> i16 {
    if bid == won {
        20 + 10 * i16::from(bid)
    } else {
        -10 * (i16::from(bid) - i16::from(won)).abs()
    }
}

/// Score the finished round: append one row to the history and fold it into
/// the running totals. Totals are unclamped and may go negative.
pub fn score_round(state: &mut GameState) {
    let mut row = Vec::with_capacity(state.player_count());
    for seat in 0..state.player_count() {
        let bid = state.guesses[seat].unwrap_or(0);
        let won = state.wins_this_round[seat];
        let points = round_points(bid, won);
        state.totals[seat] += points;
        row.push(points);
        info!(
            seat,
            bid,
            won,
            points,
            total = state.totals[seat],
            "round scored"
        );
    }
    state.points_per_round.push(row);
}

/// Seats holding the maximum total.
pub fn winners(state: &GameState) -> Vec<Seat> {
    let Some(max) = state.totals.iter().max().copied() else {
        return Vec::new();
    };
    (0..state.player_count())
        .filter(|&s| state.totals[s] == max)
        .collect()
}
