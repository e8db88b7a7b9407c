//! Per-round dealing: fresh shuffled deck, round-robin deal, trump turn-up.

use tracing::debug;

use super::cards_types::Trump;
use super::deck::{Deck, Shuffler};
use super::state::GameState;
use crate::domain::rules::DECK_SIZE;
use crate::errors::domain::DomainError;

/// What the trump turn-up produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealtTrump {
    /// Every card was dealt out; the round has no trump at all.
    Exhausted,
    /// Trump settled: a suited card's own color, or a Joker (no trump color).
    Settled,
    /// A Wizard was turned up; the dealer must choose the color.
    NeedsColor,
}

/// Deal `state.round` cards to every player, starting at the seat left of
/// the dealer, then turn up the trump card.
///
/// The caller guarantees the deck can cover the round
/// (`round * player_count <= 60`); the round counter never advances past
/// that bound.
pub fn deal_round(
    state: &mut GameState,
    shuffler: &mut dyn Shuffler,
) -> Result<DealtTrump, DomainError> {
    let n = state.player_count();
    debug_assert!(usize::from(state.round) * n <= DECK_SIZE);
    debug_assert!(state.players.iter().all(|p| p.hand.is_empty()));

    let mut deck = Deck::canonical();
    deck.shuffle(shuffler);

    let first = state.next_seat(state.dealer);
    state.turn = first;
    for _ in 0..state.round {
        for offset in 0..n {
            let seat = (first + offset) % n;
            let card = deck.draw()?;
            state.players[seat].hand.push(card);
        }
    }

    let outcome = match deck.draw() {
        Ok(card) => {
            // A Joker turn-up is turned down: the round plays without trump.
            let needs_color = card.is_wizard();
            state.trump = Some(Trump {
                card,
                color: card.color(),
            });
            if needs_color {
                DealtTrump::NeedsColor
            } else {
                DealtTrump::Settled
            }
        }
        Err(_) => {
            // Last round: all cards are dealt out, so there is no trump.
            state.trump = None;
            DealtTrump::Exhausted
        }
    };

    state.deck = deck;
    debug!(
        round = state.round,
        dealer = state.dealer,
        trump = ?state.trump,
        "round dealt"
    );
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::domain::deck::SeededShuffler;
    use crate::domain::test_state_helpers::seated_players;
    use crate::domain::Card;

    fn state_for_round(players: usize, round: u8, dealer: usize) -> GameState {
        let mut state = GameState::new();
        state.players = seated_players(players);
        state.round = round;
        state.dealer = dealer;
        state
    }

    #[test]
    fn deals_round_number_of_cards_to_each_player() {
        let mut state = state_for_round(4, 3, 0);
        deal_round(&mut state, &mut SeededShuffler::from_seed(5)).unwrap();
        for player in &state.players {
            assert_eq!(player.hand.len(), 3);
        }
        // 60 dealt minus 12 hands minus the turn-up
        assert_eq!(state.deck.len(), 60 - 12 - 1);
        assert_eq!(state.turn, 1);
    }

    #[test]
    fn dealt_cards_deck_and_trump_partition_the_canonical_set() {
        let mut state = state_for_round(5, 4, 2);
        deal_round(&mut state, &mut SeededShuffler::from_seed(11)).unwrap();

        let mut seen: Vec<Card> = Vec::new();
        for player in &state.players {
            seen.extend(player.hand.iter().copied());
        }
        seen.extend(state.deck.cards().iter().copied());
        if let Some(trump) = &state.trump {
            seen.push(trump.card);
        }

        let unique: HashSet<Card> = seen.iter().copied().collect();
        assert_eq!(seen.len(), 60);
        assert_eq!(unique.len(), 60);
    }

    #[test]
    fn final_round_has_no_trump() {
        let mut state = state_for_round(3, 20, 1);
        let outcome = deal_round(&mut state, &mut SeededShuffler::from_seed(3)).unwrap();
        assert_eq!(outcome, DealtTrump::Exhausted);
        assert!(state.trump.is_none());
        assert!(state.deck.is_empty());
    }
}
