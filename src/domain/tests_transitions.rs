use crate::domain::deck::SeededShuffler;
use crate::domain::state::{GameState, PlayerId};
use crate::domain::test_state_helpers::{
    parse_cards, play_state, seated_players, stack_deck, StackedShuffler,
};
use crate::domain::transitions::{allowed_next, transition_to, GamePhase};
use crate::domain::{Card, Color};
use crate::errors::domain::ValidationKind;
use crate::services::game_flow::GameFlow;

fn card(tok: &str) -> Card {
    tok.parse().expect("hardcoded valid card token")
}

/// Three joined players over a stacked round-one deal (seats 1, 2, 0 in deal
/// order) with the given turn-up.
fn started_flow(deal: [&str; 3], trump: Option<&str>) -> GameFlow {
    let order = stack_deck(&parse_cards(&deal), trump.map(card));
    let mut flow = GameFlow::with_shuffler(Box::new(StackedShuffler::new(order)));
    flow.join_game(PlayerId(1), "ann").unwrap();
    flow.join_game(PlayerId(2), "bob").unwrap();
    flow.join_game(PlayerId(3), "cid").unwrap();
    flow.start_game(PlayerId(1)).unwrap();
    flow
}

#[test]
fn lobby_enforces_player_limits() {
    let mut flow = GameFlow::seeded(1);
    assert_eq!(
        flow.start_game(PlayerId(1)).unwrap_err().kind(),
        ValidationKind::NotEnoughPlayers
    );

    for i in 1..=6 {
        flow.join_game(PlayerId(i), format!("p{i}")).unwrap();
    }
    assert_eq!(
        flow.join_game(PlayerId(7), "late").unwrap_err().kind(),
        ValidationKind::RoomFull
    );
    assert_eq!(
        flow.join_game(PlayerId(3), "again").unwrap_err().kind(),
        ValidationKind::AlreadyJoined
    );
}

#[test]
fn joining_after_start_is_rejected() {
    let mut flow = started_flow(["R5", "G7", "B2"], Some("B9"));
    assert_eq!(
        flow.join_game(PlayerId(9), "late").unwrap_err().kind(),
        ValidationKind::GameAlreadyStarted
    );
    assert_eq!(
        flow.start_game(PlayerId(1)).unwrap_err().kind(),
        ValidationKind::GameAlreadyStarted
    );
}

#[test]
fn starting_deals_round_one_left_of_the_dealer() {
    let flow = started_flow(["R5", "G7", "B2"], Some("B9"));
    let state = flow.state();

    assert_eq!(state.phase, GamePhase::Guess);
    assert_eq!(state.round, 1);
    assert_eq!(state.dealer, 0);
    assert_eq!(state.turn, 1);
    assert_eq!(state.players[1].hand, vec![card("R5")]);
    assert_eq!(state.players[2].hand, vec![card("G7")]);
    assert_eq!(state.players[0].hand, vec![card("B2")]);
    assert_eq!(state.deck.len(), 56);

    let trump = state.trump.expect("suited turn-up fixes trump");
    assert_eq!(trump.card, card("B9"));
    assert_eq!(trump.color, Some(Color::Blue));
}

#[test]
fn wizard_turn_up_asks_the_dealer_for_a_color() {
    let mut flow = started_flow(["R5", "G7", "B2"], Some("W0"));
    assert_eq!(flow.state().phase, GamePhase::AskTrump);
    assert_eq!(flow.state().trump.unwrap().color, None);

    // No guessing until the color is chosen.
    assert_eq!(
        flow.submit_guess(PlayerId(2), 0).unwrap_err().kind(),
        ValidationKind::WrongState
    );

    flow.set_trump_color(PlayerId(1), Color::Green).unwrap();
    let state = flow.state();
    assert_eq!(state.phase, GamePhase::Guess);
    assert_eq!(state.trump.unwrap().color, Some(Color::Green));
    // Re-entering the guess phase must not re-deal.
    assert_eq!(state.players[1].hand, vec![card("R5")]);
    assert_eq!(state.deck.len(), 56);

    assert_eq!(
        flow.set_trump_color(PlayerId(1), Color::Red).unwrap_err().kind(),
        ValidationKind::WrongState
    );
}

#[test]
fn joker_turn_up_plays_the_round_without_trump() {
    let flow = started_flow(["R5", "G7", "B2"], Some("J0"));
    let state = flow.state();
    assert_eq!(state.phase, GamePhase::Guess);
    let trump = state.trump.expect("the turn-up card is still shown");
    assert_eq!(trump.card, card("J0"));
    assert_eq!(trump.color, None);
}

#[test]
fn full_round_resolves_scores_and_rotates_the_dealer() {
    let mut flow = started_flow(["R5", "G7", "B2"], Some("B9"));

    flow.submit_guess(PlayerId(2), 0).unwrap();
    flow.submit_guess(PlayerId(3), 0).unwrap();
    assert_eq!(
        flow.submit_guess(PlayerId(1), 1).unwrap_err().kind(),
        ValidationKind::HookViolation
    );
    flow.submit_guess(PlayerId(1), 0).unwrap();
    assert_eq!(flow.state().phase, GamePhase::Play);

    flow.play_card(PlayerId(2), card("R5")).unwrap();
    flow.play_card(PlayerId(3), card("G7")).unwrap();
    flow.play_card(PlayerId(1), card("B2")).unwrap();

    // Blue trump takes the trick; hands are empty, so the round is scored.
    let state = flow.state();
    assert_eq!(state.phase, GamePhase::RoundDone);
    assert_eq!(state.turn, 0);
    assert_eq!(state.wins_this_round, vec![1, 0, 0]);
    assert_eq!(state.points_per_round, vec![vec![-10, 20, 20]]);
    assert_eq!(state.totals, vec![-10, 20, 20]);
    let highest = state.highest_played_card.expect("trick was resolved");
    assert_eq!(highest.card, card("B2"));

    flow.advance_round(PlayerId(1)).unwrap();
    let state = flow.state();
    assert_eq!(state.phase, GamePhase::Guess);
    assert_eq!(state.round, 2);
    assert_eq!(state.dealer, 1);
    assert_eq!(state.turn, 2);
    for player in &state.players {
        assert_eq!(player.hand.len(), 2);
    }
}

#[test]
fn trick_winner_leads_the_next_trick() {
    // A two-card round mid-play: seat 0 leads the first trick.
    let state = play_state(
        &[&["R5", "B2"], &["R9", "G4"], &["G7", "G8"]],
        None,
        0,
    );
    let mut flow = GameFlow::from_parts(state, Box::new(SeededShuffler::from_seed(1)));

    flow.play_card(PlayerId(1), card("R5")).unwrap();
    flow.play_card(PlayerId(2), card("R9")).unwrap();
    flow.play_card(PlayerId(3), card("G7")).unwrap();

    // Highest red wins; seat 1 takes over the lead.
    assert_eq!(flow.state().phase, GamePhase::BattleDone);
    assert_eq!(flow.state().turn, 1);
    assert_eq!(flow.state().wins_this_round, vec![0, 1, 0]);

    flow.advance_round(PlayerId(2)).unwrap();
    assert_eq!(flow.state().phase, GamePhase::Play);
    assert!(flow.state().played_cards.is_empty());

    flow.play_card(PlayerId(2), card("G4")).unwrap();
    flow.play_card(PlayerId(3), card("G8")).unwrap();
    flow.play_card(PlayerId(1), card("B2")).unwrap();

    // Hands are empty, so the round chains straight into scoring.
    let state = flow.state();
    assert_eq!(state.phase, GamePhase::RoundDone);
    assert_eq!(state.wins_this_round, vec![0, 1, 1]);
    assert_eq!(state.totals, vec![20, -10, -10]);
}

#[test]
fn advance_round_is_rejected_mid_play() {
    let mut flow = started_flow(["R5", "G7", "B2"], Some("B9"));
    assert_eq!(
        flow.advance_round(PlayerId(1)).unwrap_err().kind(),
        ValidationKind::RoundNotComplete
    );

    flow.submit_guess(PlayerId(2), 0).unwrap();
    flow.submit_guess(PlayerId(3), 0).unwrap();
    flow.submit_guess(PlayerId(1), 0).unwrap();
    assert_eq!(
        flow.advance_round(PlayerId(1)).unwrap_err().kind(),
        ValidationKind::RoundNotComplete
    );
}

#[test]
fn failed_commands_leave_the_aggregate_untouched() {
    let mut flow = started_flow(["R5", "G7", "B2"], Some("B9"));
    flow.submit_guess(PlayerId(2), 0).unwrap();
    flow.submit_guess(PlayerId(3), 0).unwrap();

    let before = flow.state().clone();
    assert!(flow.submit_guess(PlayerId(1), 1).is_err());
    assert!(flow.advance_round(PlayerId(1)).is_err());
    assert!(flow.play_card(PlayerId(1), card("B2")).is_err());
    assert_eq!(flow.state(), &before);
}

#[test]
fn game_ends_when_the_deck_cannot_cover_the_next_round() {
    let mut state = GameState::new();
    state.players = seated_players(3);
    state.phase = GamePhase::RoundDone;
    state.round = 20;
    state.dealer = 1;
    state.turn = 2;
    state.guesses = vec![Some(0); 3];
    state.wins_this_round = vec![0; 3];
    state.totals = vec![120, 80, 120];
    state.points_per_round = vec![vec![120, 80, 120]];

    let mut flow = GameFlow::from_parts(state, Box::new(SeededShuffler::from_seed(1)));
    flow.advance_round(PlayerId(1)).unwrap();
    assert_eq!(flow.state().phase, GamePhase::Winner);
    // Round 21 for three players would need 63 cards; the count stays put.
    assert_eq!(flow.state().round, 20);

    let view = flow.view_for(PlayerId(2)).unwrap();
    assert_eq!(view.winners, vec!["player-0".to_string(), "player-2".to_string()]);

    assert_eq!(
        flow.advance_round(PlayerId(1)).unwrap_err().kind(),
        ValidationKind::RoundNotComplete
    );
}

#[test]
fn transition_table_matches_the_lifecycle() {
    assert_eq!(allowed_next(GamePhase::Lobby), &[GamePhase::Guess]);
    assert_eq!(
        allowed_next(GamePhase::Guess),
        &[GamePhase::AskTrump, GamePhase::Play]
    );
    assert_eq!(allowed_next(GamePhase::AskTrump), &[GamePhase::Guess]);
    assert_eq!(allowed_next(GamePhase::Play), &[GamePhase::BattleDone]);
    assert_eq!(
        allowed_next(GamePhase::BattleDone),
        &[GamePhase::Play, GamePhase::RoundDone]
    );
    assert_eq!(
        allowed_next(GamePhase::RoundDone),
        &[GamePhase::Guess, GamePhase::Winner]
    );
    assert!(allowed_next(GamePhase::Winner).is_empty());
}

#[test]
#[should_panic(expected = "cannot transition")]
fn illegal_transition_is_a_contract_violation() {
    let mut state = GameState::new();
    state.players = seated_players(3);
    let mut shuffler = SeededShuffler::from_seed(1);
    let _ = transition_to(&mut state, &mut shuffler, GamePhase::Play);
}
