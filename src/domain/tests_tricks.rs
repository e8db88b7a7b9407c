use crate::domain::state::PlayedCard;
use crate::domain::test_state_helpers::{parse_cards, play_state};
use crate::domain::tricks::{legal_plays, play_card, resolve_trick};
use crate::domain::{Card, Color};
use crate::errors::domain::ValidationKind;

fn card(tok: &str) -> Card {
    tok.parse().expect("hardcoded valid card token")
}

fn trick(tokens: &[&str]) -> Vec<PlayedCard> {
    parse_cards(tokens)
        .into_iter()
        .enumerate()
        .map(|(seat, card)| PlayedCard { seat, card })
        .collect()
}

#[test]
fn legal_plays_follow_the_led_color() {
    let mut state = play_state(
        &[&["R5", "B2"], &["R9", "G4"], &["G7", "G8"]],
        None,
        0,
    );
    play_card(&mut state, 0, card("R5")).unwrap();

    // Seat 1 holds red, so only red may be played.
    assert_eq!(legal_plays(&state, 1), vec![card("R9")]);
    // Seat 2 is void in red and may play anything.
    assert_eq!(legal_plays(&state, 2).len(), 2);
}

#[test]
fn specials_are_always_playable() {
    let mut state = play_state(
        &[&["R5", "B2"], &["R9", "W0"], &["G7", "J1"]],
        None,
        0,
    );
    play_card(&mut state, 0, card("R5")).unwrap();

    assert!(legal_plays(&state, 1).contains(&card("W0")));
    assert!(play_card(&mut state, 1, card("W0")).is_ok());
    assert!(play_card(&mut state, 2, card("J1")).is_ok());
}

#[test]
fn off_color_play_rejected_while_holding_the_led_color() {
    let mut state = play_state(
        &[&["R5", "B2"], &["R9", "B3"], &["G7", "G8"]],
        None,
        0,
    );
    play_card(&mut state, 0, card("R5")).unwrap();

    let err = play_card(&mut state, 1, card("B3")).unwrap_err();
    assert_eq!(err.kind(), ValidationKind::SuitViolation);
    assert_eq!(state.played_cards.len(), 1);
    assert_eq!(state.players[1].hand.len(), 2);

    // Seat 1 follows; seat 2 is void in red and may slough any color.
    play_card(&mut state, 1, card("R9")).unwrap();
    assert!(play_card(&mut state, 2, card("G7")).is_ok());
}

#[test]
fn play_requires_turn_and_hand_membership() {
    let mut state = play_state(&[&["R5"], &["R9"], &["G7"]], None, 0);

    let err = play_card(&mut state, 1, card("R9")).unwrap_err();
    assert_eq!(err.kind(), ValidationKind::NotYourTurn);

    let err = play_card(&mut state, 0, card("Y13")).unwrap_err();
    assert_eq!(err.kind(), ValidationKind::CardNotInHand);

    let outcome = play_card(&mut state, 0, card("R5")).unwrap();
    assert!(!outcome.trick_complete);
    assert_eq!(state.turn, 1);
}

#[test]
fn trick_completes_at_one_card_per_player() {
    let mut state = play_state(&[&["R5"], &["R9"], &["G7"]], None, 0);
    play_card(&mut state, 0, card("R5")).unwrap();
    play_card(&mut state, 1, card("R9")).unwrap();
    let outcome = play_card(&mut state, 2, card("G7")).unwrap();
    assert!(outcome.trick_complete);
}

#[test]
fn a_joker_lead_leaves_the_color_open_until_a_suited_card() {
    let mut state = play_state(
        &[&["J0", "R2"], &["B9", "G1"], &["B4", "R7"]],
        None,
        0,
    );
    play_card(&mut state, 0, card("J0")).unwrap();
    // No color fixed yet: seat 1 may play anything.
    play_card(&mut state, 1, card("B9")).unwrap();
    // Blue is now led; seat 2 holds blue and may not slough red.
    let err = play_card(&mut state, 2, card("R7")).unwrap_err();
    assert_eq!(err.kind(), ValidationKind::SuitViolation);
    assert!(play_card(&mut state, 2, card("B4")).is_ok());
}

#[test]
fn highest_of_led_color_wins_without_trump() {
    let plays = trick(&["R5", "R11", "B13"]);
    assert_eq!(resolve_trick(&plays, None).seat, 1);
}

#[test]
fn trump_outranks_the_led_color() {
    let plays = trick(&["R11", "B2", "R13"]);
    assert_eq!(resolve_trick(&plays, Some(Color::Blue)).seat, 1);
}

#[test]
fn higher_trump_wins_within_trump() {
    let plays = trick(&["B3", "R13", "B9"]);
    assert_eq!(resolve_trick(&plays, Some(Color::Blue)).seat, 2);
}

#[test]
fn leading_wizard_wins_over_everything_including_later_wizards() {
    let plays = trick(&["W0", "W3", "B13"]);
    assert_eq!(resolve_trick(&plays, Some(Color::Blue)).seat, 0);
}

#[test]
fn mid_trick_wizard_wins_and_stops_the_scan() {
    // Blue is trump, yet the wizard played second takes the trick.
    let plays = trick(&["R5", "W1", "B9"]);
    assert_eq!(resolve_trick(&plays, Some(Color::Blue)).seat, 1);
}

#[test]
fn first_of_two_mid_trick_wizards_wins() {
    let plays = trick(&["R5", "W1", "W2", "R9"]);
    assert_eq!(resolve_trick(&plays, None).seat, 1);
}

#[test]
fn jokers_never_take_a_mixed_trick() {
    let plays = trick(&["J0", "R3", "J1", "R7"]);
    assert_eq!(resolve_trick(&plays, None).seat, 3);
}

#[test]
fn all_joker_trick_goes_to_the_first_joker() {
    let plays = trick(&["J0", "J1", "J2"]);
    assert_eq!(resolve_trick(&plays, Some(Color::Red)).seat, 0);
}

#[test]
fn trump_from_a_wizard_choice_applies_to_resolution() {
    // Dealer chose green after a wizard turn-up.
    let mut state = play_state(
        &[&["R13"], &["G2"], &["B9"]],
        Some(Color::Green),
        0,
    );
    play_card(&mut state, 0, card("R13")).unwrap();
    play_card(&mut state, 1, card("G2")).unwrap();
    play_card(&mut state, 2, card("B9")).unwrap();
    let trump = state.trump.as_ref().and_then(|t| t.color);
    assert_eq!(resolve_trick(&state.played_cards, trump).seat, 1);
}
