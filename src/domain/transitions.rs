//! Game phase machine: the allowed-transition table and per-phase
//! enter/exit behavior.
//!
//! Transitions chain through an explicit enter-flow loop instead of
//! recursion: entering a phase may demand a follow-up transition (dealing a
//! Wizard trump sends Guess straight to AskTrump; an emptied table sends
//! BattleDone on to RoundDone). An attempted transition absent from the
//! table is a programming error and panics before anything mutates.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::dealing::{deal_round, DealtTrump};
use super::deck::Shuffler;
use super::scoring::score_round;
use super::state::GameState;
use super::tricks::resolve_trick;
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GamePhase {
    Lobby,
    Guess,
    AskTrump,
    Play,
    BattleDone,
    RoundDone,
    Winner,
}

/// Static transition table; consulted before any mutation.
pub fn allowed_next(phase: GamePhase) -> &'static [GamePhase] {
    match phase {
        GamePhase::Lobby => &[GamePhase::Guess],
        GamePhase::Guess => &[GamePhase::AskTrump, GamePhase::Play],
        GamePhase::AskTrump => &[GamePhase::Guess],
        GamePhase::Play => &[GamePhase::BattleDone],
        GamePhase::BattleDone => &[GamePhase::Play, GamePhase::RoundDone],
        GamePhase::RoundDone => &[GamePhase::Guess, GamePhase::Winner],
        GamePhase::Winner => &[],
    }
}

/// What entering a phase asks of the dispatcher.
enum EnterFlow {
    Settled,
    Chain(GamePhase),
}

/// Drive the machine from the current phase into `next`, running exit
/// validation and entry behavior, and following chained transitions until
/// the state settles.
///
/// # Panics
///
/// When `next` is not reachable from the current phase per [`allowed_next`].
/// Commands check their own phase before calling, so reaching the panic is a
/// bug in the engine, not a player mistake.
pub(crate) fn transition_to(
    state: &mut GameState,
    shuffler: &mut dyn Shuffler,
    next: GamePhase,
) -> Result<(), DomainError> {
    let mut target = next;
    loop {
        let current = state.phase;
        assert!(
            allowed_next(current).contains(&target),
            "cannot transition from {current:?} to {target:?}"
        );
        on_exit(state, current, target)?;
        state.phase = target;
        debug!(from = ?current, to = ?target, "phase transition");
        match on_enter(state, shuffler, target, current)? {
            EnterFlow::Settled => return Ok(()),
            EnterFlow::Chain(chained) => target = chained,
        }
    }
}

fn on_exit(state: &mut GameState, current: GamePhase, next: GamePhase) -> Result<(), DomainError> {
    match current {
        GamePhase::Lobby => {
            // The first joiner deals round one; bidding opens on the next seat.
            state.dealer = 0;
            state.turn = state.next_seat(state.dealer);
            state.totals = vec![0; state.player_count()];
            info!(players = state.player_count(), "new game");
            Ok(())
        }
        GamePhase::AskTrump => match &state.trump {
            Some(trump) if trump.color.is_some() => Ok(()),
            _ => Err(DomainError::validation(
                ValidationKind::MissingTrumpColor,
                "Leaving trump selection with no trump color set",
            )),
        },
        GamePhase::Guess => {
            if next == GamePhase::Play {
                info!(leader = state.turn, "all guesses in");
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

fn on_enter(
    state: &mut GameState,
    shuffler: &mut dyn Shuffler,
    entered: GamePhase,
    previous: GamePhase,
) -> Result<EnterFlow, DomainError> {
    match entered {
        GamePhase::Guess => enter_guess(state, shuffler, previous),
        GamePhase::Play => {
            state.played_cards.clear();
            state.highest_played_card = None;
            Ok(EnterFlow::Settled)
        }
        GamePhase::BattleDone => Ok(enter_battle_done(state)),
        GamePhase::RoundDone => {
            score_round(state);
            Ok(EnterFlow::Settled)
        }
        GamePhase::Lobby | GamePhase::AskTrump | GamePhase::Winner => Ok(EnterFlow::Settled),
    }
}

fn enter_guess(
    state: &mut GameState,
    shuffler: &mut dyn Shuffler,
    previous: GamePhase,
) -> Result<EnterFlow, DomainError> {
    let n = state.player_count();
    state.wins_this_round = vec![0; n];
    state.played_cards.clear();
    state.guesses = vec![None; n];

    // Re-entry from trump selection keeps the already-dealt hands.
    if previous == GamePhase::AskTrump {
        info!(seat = state.turn, "trump settled, guessing opens");
        return Ok(EnterFlow::Settled);
    }

    match deal_round(state, shuffler)? {
        DealtTrump::NeedsColor => Ok(EnterFlow::Chain(GamePhase::AskTrump)),
        DealtTrump::Settled | DealtTrump::Exhausted => {
            info!(seat = state.turn, "guessing opens");
            Ok(EnterFlow::Settled)
        }
    }
}

fn enter_battle_done(state: &mut GameState) -> EnterFlow {
    let trump_color = state.trump.as_ref().and_then(|t| t.color);
    let winning = resolve_trick(&state.played_cards, trump_color);
    state.wins_this_round[winning.seat] += 1;
    state.turn = winning.seat;
    state.highest_played_card = Some(winning);
    info!(
        seat = winning.seat,
        card = %winning.card,
        wins = state.wins_this_round[winning.seat],
        "trick resolved"
    );

    if state.all_hands_empty() {
        EnterFlow::Chain(GamePhase::RoundDone)
    } else {
        EnterFlow::Settled
    }
}
