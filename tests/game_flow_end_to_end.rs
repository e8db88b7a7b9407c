//! End-to-end drive of the public engine surface.

use wizard_engine::{DomainError, GameFlow, GamePhase, PlayerId, ValidationKind};

fn seated(seed: u64, players: i64) -> GameFlow {
    let mut flow = GameFlow::seeded(seed);
    for i in 1..=players {
        flow.join_game(PlayerId(i), format!("p{i}")).unwrap();
    }
    flow.start_game(PlayerId(1)).unwrap();
    flow
}

#[test]
fn a_seeded_four_player_game_runs_to_completion() {
    let mut flow = seated(2024, 4);

    let mut steps = 0u32;
    while flow.state().phase != GamePhase::Winner {
        flow.auto_play().expect("auto play picks a legal action");
        steps += 1;
        assert!(steps < 10_000, "game did not finish");
    }

    // 60 cards across 4 players bound the game at 15 rounds.
    assert_eq!(flow.state().points_per_round.len(), 15);

    for i in 1..=4 {
        let view = flow.view_for(PlayerId(i)).unwrap();
        assert_eq!(view.phase, GamePhase::Winner);
        assert!(!view.winners.is_empty());
        // Only the viewer's own hand is exposed, and it is spent.
        assert!(view.hand.is_empty());
    }
}

#[test]
fn views_serialize_for_broadcast() {
    let flow = seated(5, 3);
    let view = flow.view_for(PlayerId(2)).unwrap();
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["round"], 1);
    assert!(json["players"].as_array().unwrap().len() == 3);
    // Other players' cards appear only as counts.
    assert!(json.get("hands").is_none());
}

#[test]
fn commands_outside_their_phase_are_rejected() {
    let mut flow = GameFlow::seeded(1);
    flow.join_game(PlayerId(1), "ann").unwrap();
    flow.join_game(PlayerId(2), "bob").unwrap();
    flow.join_game(PlayerId(3), "cid").unwrap();

    let kind = |res: Result<(), DomainError>| res.unwrap_err().kind();

    assert_eq!(
        kind(flow.submit_guess(PlayerId(1), 0)),
        ValidationKind::WrongState
    );
    assert_eq!(
        kind(flow.advance_round(PlayerId(1))),
        ValidationKind::RoundNotComplete
    );
    assert_eq!(kind(flow.auto_play()), ValidationKind::WrongState);
}
