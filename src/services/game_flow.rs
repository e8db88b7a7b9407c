//! The command surface of the engine: every external command is validated
//! against the current phase, applied to the owned aggregate, and answered
//! with a uniform result.
//!
//! One `GameFlow` per game session. The surrounding transport serializes
//! command delivery per session, so nothing here locks; the injected
//! [`Shuffler`] is the engine's only source of randomness, consulted once per
//! round while dealing. A rejected command leaves the aggregate exactly as it
//! was.

use tracing::info;

use crate::domain::bidding;
use crate::domain::cards_logic::led_color;
use crate::domain::deck::{SeededShuffler, Shuffler};
use crate::domain::player_view::{player_view, PlayerView};
use crate::domain::rules::{DECK_SIZE, MAX_PLAYERS, MIN_PLAYERS};
use crate::domain::state::{GameState, Player, PlayerId, Seat};
use crate::domain::transitions::{transition_to, GamePhase};
use crate::domain::tricks;
use crate::domain::{Card, Color};
use crate::errors::domain::{DomainError, ValidationKind};

pub struct GameFlow {
    state: GameState,
    shuffler: Box<dyn Shuffler>,
}

impl GameFlow {
    /// Fresh lobby with entropy-backed shuffling.
    pub fn new() -> Self {
        Self::with_shuffler(Box::new(SeededShuffler::from_entropy()))
    }

    /// Fresh lobby with reproducible deals, for replays and tests.
    pub fn seeded(seed: u64) -> Self {
        Self::with_shuffler(Box::new(SeededShuffler::from_seed(seed)))
    }

    pub fn with_shuffler(shuffler: Box<dyn Shuffler>) -> Self {
        Self {
            state: GameState::new(),
            shuffler,
        }
    }

    #[cfg(test)]
    pub(crate) fn from_parts(state: GameState, shuffler: Box<dyn Shuffler>) -> Self {
        Self { state, shuffler }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Seat a player in the lobby.
    pub fn join_game(
        &mut self,
        player: PlayerId,
        nickname: impl Into<String>,
    ) -> Result<(), DomainError> {
        if self.state.phase != GamePhase::Lobby {
            return Err(DomainError::validation(
                ValidationKind::GameAlreadyStarted,
                "Game has already started",
            ));
        }
        if self.state.seat_of(player).is_some() {
            return Err(DomainError::validation(
                ValidationKind::AlreadyJoined,
                "Player is already seated",
            ));
        }
        if self.state.player_count() == MAX_PLAYERS {
            return Err(DomainError::validation(
                ValidationKind::RoomFull,
                format!("A maximum of {MAX_PLAYERS} players is allowed"),
            ));
        }
        let nickname = nickname.into();
        info!(player = player.0, nickname = %nickname, "player joined");
        self.state.players.push(Player {
            id: player,
            nickname,
            hand: Vec::new(),
        });
        Ok(())
    }

    /// Leave the lobby and deal round one.
    pub fn start_game(&mut self, player: PlayerId) -> Result<(), DomainError> {
        if self.state.phase != GamePhase::Lobby {
            return Err(DomainError::validation(
                ValidationKind::GameAlreadyStarted,
                "Game has already started",
            ));
        }
        if self.state.player_count() < MIN_PLAYERS {
            return Err(DomainError::validation(
                ValidationKind::NotEnoughPlayers,
                format!("A minimum of {MIN_PLAYERS} players is required"),
            ));
        }
        info!(player = player.0, "game started");
        transition_to(&mut self.state, self.shuffler.as_mut(), GamePhase::Guess)
    }

    /// The dealer answers a Wizard turn-up with a trump color.
    pub fn set_trump_color(&mut self, player: PlayerId, color: Color) -> Result<(), DomainError> {
        if self.state.phase != GamePhase::AskTrump {
            return Err(DomainError::validation(
                ValidationKind::WrongState,
                "Game is not asking for a trump color",
            ));
        }
        let Some(trump) = self.state.trump.as_mut() else {
            return Err(DomainError::validation(
                ValidationKind::NoActiveTrump,
                "There is no trump this round",
            ));
        };
        trump.color = Some(color);
        info!(player = player.0, ?color, "trump color chosen");
        transition_to(&mut self.state, self.shuffler.as_mut(), GamePhase::Guess)
    }

    /// Record the current player's guess; the last guess opens play.
    pub fn submit_guess(&mut self, player: PlayerId, count: i32) -> Result<(), DomainError> {
        if self.state.phase != GamePhase::Guess {
            return Err(DomainError::validation(
                ValidationKind::WrongState,
                "Guesses are only accepted while guessing",
            ));
        }
        let seat = self.state.require_seat(player)?;
        let outcome = bidding::place_bid(&mut self.state, seat, count)?;
        if outcome.all_bids_in {
            transition_to(&mut self.state, self.shuffler.as_mut(), GamePhase::Play)?;
        }
        Ok(())
    }

    /// Put a card into the current trick; the last card resolves it.
    pub fn play_card(&mut self, player: PlayerId, card: Card) -> Result<(), DomainError> {
        if self.state.phase != GamePhase::Play {
            return Err(DomainError::validation(
                ValidationKind::WrongState,
                "Cards can only be played during a trick",
            ));
        }
        let seat = self.state.require_seat(player)?;
        let outcome = tricks::play_card(&mut self.state, seat, card)?;
        if outcome.trick_complete {
            transition_to(
                &mut self.state,
                self.shuffler.as_mut(),
                GamePhase::BattleDone,
            )?;
        }
        Ok(())
    }

    /// Move on from a resolved trick or a finished round.
    pub fn advance_round(&mut self, player: PlayerId) -> Result<(), DomainError> {
        match self.state.phase {
            GamePhase::BattleDone => {
                info!(player = player.0, "next trick");
                transition_to(&mut self.state, self.shuffler.as_mut(), GamePhase::Play)
            }
            GamePhase::RoundDone => {
                let cards_needed =
                    (usize::from(self.state.round) + 1) * self.state.player_count();
                if cards_needed > DECK_SIZE {
                    return transition_to(
                        &mut self.state,
                        self.shuffler.as_mut(),
                        GamePhase::Winner,
                    );
                }
                self.state.round += 1;
                self.state.dealer = self.state.next_seat(self.state.dealer);
                info!(
                    player = player.0,
                    round = self.state.round,
                    dealer = self.state.dealer,
                    "next round"
                );
                transition_to(&mut self.state, self.shuffler.as_mut(), GamePhase::Guess)
            }
            _ => Err(DomainError::validation(
                ValidationKind::RoundNotComplete,
                "Round is not done yet",
            )),
        }
    }

    /// Synthesize a legal action for whichever player currently holds the
    /// turn, routed through the ordinary validators.
    pub fn auto_play(&mut self) -> Result<(), DomainError> {
        match self.state.phase {
            GamePhase::AskTrump => {
                let player = self.state.current_player().id;
                self.set_trump_color(player, Color::Red)
            }
            GamePhase::BattleDone | GamePhase::RoundDone => {
                let player = self.state.current_player().id;
                self.advance_round(player)
            }
            GamePhase::Guess => {
                let seat = self.state.turn;
                let player = self.state.players[seat].id;
                let bid = bidding::legal_bids(&self.state, seat)
                    .first()
                    .copied()
                    .unwrap_or(0);
                self.submit_guess(player, i32::from(bid))
            }
            GamePhase::Play => {
                let seat = self.state.turn;
                let player = self.state.players[seat].id;
                let card = self.pick_card(seat);
                self.play_card(player, card)
            }
            GamePhase::Lobby | GamePhase::Winner => Err(DomainError::validation(
                ValidationKind::WrongState,
                "Nothing to play for automatically",
            )),
        }
    }

    // Lead the first card; otherwise prefer the first special, then the first
    // card following the led color, then anything (legal when void).
    fn pick_card(&self, seat: Seat) -> Card {
        let hand = &self.state.players[seat].hand;
        if self.state.played_cards.is_empty() {
            return hand[0];
        }
        let led = led_color(&self.state.played_cards);
        hand.iter()
            .copied()
            .find(|c| c.is_special() || led.is_none() || c.color() == led)
            .unwrap_or(hand[0])
    }

    /// Project the aggregate for one player, hiding everyone else's hand.
    pub fn view_for(&self, player: PlayerId) -> Result<PlayerView, DomainError> {
        let seat = self.state.require_seat(player)?;
        Ok(player_view(&self.state, seat))
    }
}

impl Default for GameFlow {
    fn default() -> Self {
        Self::new()
    }
}
