//! The session aggregate and seat bookkeeping.

use serde::{Deserialize, Serialize};

use super::cards_types::{Card, Trump};
use super::deck::Deck;
use super::transitions::GamePhase;
use crate::errors::domain::{DomainError, ValidationKind};

/// Stable identity supplied by the session layer; the engine never mints
/// these and never interprets them beyond equality.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub i64);

/// Index into the seating order (== join order).
pub type Seat = usize;

/// One seated player and the cards they currently hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub nickname: String,
    pub hand: Vec<Card>,
}

/// A card played into the current trick; the trick vec keeps play order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PlayedCard {
    pub seat: Seat,
    pub card: Card,
}

/// The single authoritative aggregate for one game session.
///
/// Mutated only by sequentially applied commands; the surrounding transport
/// serializes command delivery per session, so nothing here locks.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub phase: GamePhase,
    /// Seat order == join order; frozen once the game starts.
    pub players: Vec<Player>,
    /// Cards not yet dealt this round.
    pub deck: Deck,
    /// 1-based; round N deals N cards to each player.
    pub round: u8,
    pub dealer: Seat,
    /// Whose move is next.
    pub turn: Seat,
    pub trump: Option<Trump>,
    /// Current trick, in play order; cleared when a new trick starts.
    pub played_cards: Vec<PlayedCard>,
    /// One slot per seat; `None` until that player has bid this round.
    pub guesses: Vec<Option<u8>>,
    /// Tricks won per seat this round.
    pub wins_this_round: Vec<u8>,
    /// One row per completed round, one value per seat. Append-only.
    pub points_per_round: Vec<Vec<i16>>,
    /// Running sums of `points_per_round` per seat.
    pub totals: Vec<i16>,
    /// Winning play of the most recently resolved trick.
    pub highest_played_card: Option<PlayedCard>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Lobby,
            players: Vec::new(),
            deck: Deck::empty(),
            round: 1,
            dealer: 0,
            turn: 0,
            trump: None,
            played_cards: Vec::new(),
            guesses: Vec::new(),
            wins_this_round: Vec::new(),
            points_per_round: Vec::new(),
            totals: Vec::new(),
            highest_played_card: None,
        }
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn seat_of(&self, player: PlayerId) -> Option<Seat> {
        self.players.iter().position(|p| p.id == player)
    }

    pub fn require_seat(&self, player: PlayerId) -> Result<Seat, DomainError> {
        self.seat_of(player).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::UnknownPlayer,
                format!("Player {} is not seated at this table", player.0),
            )
        })
    }

    /// Next seat clockwise, wrapping at the table size.
    pub fn next_seat(&self, seat: Seat) -> Seat {
        (seat + 1) % self.player_count()
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.turn]
    }

    /// Bids recorded so far this round.
    pub fn bids_recorded(&self) -> usize {
        self.guesses.iter().flatten().count()
    }

    pub fn all_hands_empty(&self) -> bool {
        self.players.iter().all(|p| p.hand.is_empty())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_state_helpers::seated_players;

    #[test]
    fn seat_math_wraps_at_table_size() {
        let mut state = GameState::new();
        state.players = seated_players(4);
        assert_eq!(state.next_seat(0), 1);
        assert_eq!(state.next_seat(3), 0);
    }

    #[test]
    fn seat_lookup_by_player_id() {
        let mut state = GameState::new();
        state.players = seated_players(3);
        assert_eq!(state.seat_of(PlayerId(2)), Some(1));
        assert_eq!(state.seat_of(PlayerId(9)), None);
        assert_eq!(
            state.require_seat(PlayerId(9)).unwrap_err().kind(),
            ValidationKind::UnknownPlayer
        );
    }
}
