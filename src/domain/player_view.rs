//! Per-player projection of the aggregate: everything one client may see,
//! with every other player's hand reduced to a card count.

use serde::{Deserialize, Serialize};

use super::cards_types::{Card, Trump};
use super::scoring::winners;
use super::state::{GameState, PlayerId, Seat};
use super::transitions::GamePhase;

/// Public info about a seated player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatView {
    pub id: PlayerId,
    pub nickname: String,
    pub seat: Seat,
    pub cards_left: usize,
}

/// A played card with its player named.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayedView {
    pub nickname: String,
    pub card: Card,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuessView {
    pub nickname: String,
    pub guess: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WinsView {
    pub nickname: String,
    pub wins: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointsView {
    pub nickname: String,
    pub points: i16,
}

/// Everything a single player is allowed to observe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub phase: GamePhase,
    pub round: u8,
    pub nickname: String,
    /// The viewer's own hand, in full detail.
    pub hand: Vec<Card>,
    pub players: Vec<SeatView>,
    pub turn: Option<PlayerId>,
    pub trump: Option<Trump>,
    pub played_cards: Vec<PlayedView>,
    pub guesses: Vec<GuessView>,
    pub wins_this_round: Vec<WinsView>,
    pub points_per_round: Vec<Vec<PointsView>>,
    pub total_points: Vec<PointsView>,
    /// Winning play of the most recently resolved trick.
    pub highest_played_card: Option<PlayedView>,
    /// Populated only once the game is over.
    pub winners: Vec<String>,
}

/// Project the aggregate for the player at `viewer`.
pub fn player_view(state: &GameState, viewer: Seat) -> PlayerView {
    let nick = |seat: Seat| state.players[seat].nickname.clone();

    let players = state
        .players
        .iter()
        .enumerate()
        .map(|(seat, p)| SeatView {
            id: p.id,
            nickname: p.nickname.clone(),
            seat,
            cards_left: p.hand.len(),
        })
        .collect();

    let played_cards = state
        .played_cards
        .iter()
        .map(|p| PlayedView {
            nickname: nick(p.seat),
            card: p.card,
        })
        .collect();

    let guesses = state
        .guesses
        .iter()
        .enumerate()
        .filter_map(|(seat, g)| {
            g.map(|guess| GuessView {
                nickname: nick(seat),
                guess,
            })
        })
        .collect();

    let wins_this_round = state
        .wins_this_round
        .iter()
        .enumerate()
        .map(|(seat, &wins)| WinsView {
            nickname: nick(seat),
            wins,
        })
        .collect();

    let points_per_round = state
        .points_per_round
        .iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .map(|(seat, &points)| PointsView {
                    nickname: nick(seat),
                    points,
                })
                .collect()
        })
        .collect();

    let total_points = state
        .totals
        .iter()
        .enumerate()
        .map(|(seat, &points)| PointsView {
            nickname: nick(seat),
            points,
        })
        .collect();

    let winner_names = if state.phase == GamePhase::Winner {
        winners(state).into_iter().map(nick).collect()
    } else {
        Vec::new()
    };

    PlayerView {
        phase: state.phase,
        round: state.round,
        nickname: nick(viewer),
        hand: state.players[viewer].hand.clone(),
        players,
        turn: (state.phase != GamePhase::Lobby).then(|| state.players[state.turn].id),
        trump: state.trump,
        played_cards,
        guesses,
        wins_this_round,
        points_per_round,
        total_points,
        highest_played_card: state.highest_played_card.map(|p| PlayedView {
            nickname: nick(p.seat),
            card: p.card,
        }),
        winners: winner_names,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::state::PlayedCard;
    use crate::domain::test_state_helpers::guess_state;

    #[test]
    fn only_recorded_guesses_are_listed() {
        let mut state = guess_state(&[&["R1"], &["G1"], &["B1"]], 0);
        state.guesses[1] = Some(0);

        let view = player_view(&state, 0);
        assert_eq!(view.guesses.len(), 1);
        assert_eq!(view.guesses[0].nickname, "player-1");
    }

    #[test]
    fn own_hand_is_full_detail_and_others_are_counts() {
        let state = guess_state(&[&["R1"], &["G1"], &["B1"]], 0);
        let view = player_view(&state, 2);
        assert_eq!(view.hand, state.players[2].hand);
        assert_eq!(view.players[0].cards_left, 1);
        assert_eq!(view.nickname, "player-2");
    }

    #[test]
    fn winners_stay_hidden_until_the_game_is_over() {
        let mut state = guess_state(&[&["R1"], &["G1"], &["B1"]], 0);
        state.totals = vec![10, 40, 40];
        assert!(player_view(&state, 0).winners.is_empty());

        state.phase = GamePhase::Winner;
        assert_eq!(
            player_view(&state, 0).winners,
            vec!["player-1".to_string(), "player-2".to_string()]
        );
    }

    #[test]
    fn played_cards_carry_player_attribution() {
        let mut state = guess_state(&[&["R1"], &["G1"], &["B1"]], 0);
        state.phase = GamePhase::Play;
        state.played_cards.push(PlayedCard {
            seat: 1,
            card: "G1".parse().unwrap(),
        });

        let view = player_view(&state, 0);
        assert_eq!(view.played_cards.len(), 1);
        assert_eq!(view.played_cards[0].nickname, "player-1");
    }
}
