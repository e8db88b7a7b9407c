//! Trick play legality and resolution.

use tracing::debug;

use super::cards_logic::{beats, hand_has_color, led_color};
use super::cards_types::{Card, Color};
use super::state::{GameState, PlayedCard, Seat};
use crate::errors::domain::{DomainError, ValidationKind};

/// Result of a card entering the trick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayOutcome {
    /// True once the trick holds one card per player.
    pub trick_complete: bool,
}

/// Cards `seat` may legally put into the current trick.
pub fn legal_plays(state: &GameState, seat: Seat) -> Vec<Card> {
    let hand = &state.players[seat].hand;
    match led_color(&state.played_cards) {
        Some(led) if hand_has_color(hand, led) => hand
            .iter()
            .copied()
            .filter(|c| c.is_special() || c.color() == Some(led))
            .collect(),
        _ => hand.clone(),
    }
}

/// Validate and apply `seat` playing `card`: remove it from the hand, append
/// it to the trick, advance the turn. Nothing is mutated on a failed check.
pub fn play_card(state: &mut GameState, seat: Seat, card: Card) -> Result<PlayOutcome, DomainError> {
    if state.turn != seat {
        return Err(DomainError::validation(
            ValidationKind::NotYourTurn,
            format!("Seat {} plays next", state.turn),
        ));
    }

    let hand = &state.players[seat].hand;
    let Some(pos) = hand.iter().position(|&c| c == card) else {
        return Err(DomainError::validation(
            ValidationKind::CardNotInHand,
            format!("Card {card} is not in hand"),
        ));
    };

    // Follow the first suited card of the trick when holding its color;
    // specials may always be played.
    if !card.is_special() {
        if let Some(led) = led_color(&state.played_cards) {
            if card.color() != Some(led) && hand_has_color(hand, led) {
                return Err(DomainError::validation(
                    ValidationKind::SuitViolation,
                    "Must play the led color or a special card",
                ));
            }
        }
    }

    let removed = state.players[seat].hand.remove(pos);
    state.played_cards.push(PlayedCard {
        seat,
        card: removed,
    });
    state.turn = state.next_seat(seat);

    debug!(
        seat,
        card = %removed,
        played = state.played_cards.len(),
        of = state.player_count(),
        "card played"
    );

    Ok(PlayOutcome {
        trick_complete: state.played_cards.len() == state.player_count(),
    })
}

/// Pick the winning play of a completed trick.
///
/// A Wizard that led wins outright and the scan is skipped. Otherwise the
/// first Wizard found takes the trick and ends the scan; Jokers never take
/// over; a suited card takes over per [`beats`]. A trick of nothing but
/// Jokers goes to the first one played.
pub fn resolve_trick(plays: &[PlayedCard], trump_color: Option<Color>) -> PlayedCard {
    assert!(!plays.is_empty(), "cannot resolve an empty trick");
    let mut best = plays[0];
    if best.card.is_wizard() {
        return best;
    }
    for candidate in &plays[1..] {
        if candidate.card.is_joker() {
            continue;
        }
        if candidate.card.is_wizard() {
            best = *candidate;
            break;
        }
        if beats(candidate.card, best.card, trump_color) {
            best = *candidate;
        }
    }
    best
}
