//! Property-based tests for trick resolution.

use proptest::prelude::*;

use crate::domain::test_gens;
use crate::domain::tricks::resolve_trick;

proptest! {
    // Several tests below `prop_assume!` a rare shape of trick (e.g. a Wizard
    // in the lead), which rejects the large majority of generated cases. Raise
    // the reject budget so enough accepted cases reach the default 256 runs.
    #![proptest_config(ProptestConfig { max_global_rejects: 100_000, ..ProptestConfig::default() })]

    /// The winner is always one of the trick's participants, holding the
    /// winning card.
    #[test]
    fn winner_is_a_participant(
        plays in test_gens::complete_trick(),
        trump in test_gens::trump_color(),
    ) {
        let winner = resolve_trick(&plays, trump);
        prop_assert!(plays.contains(&winner));
        prop_assert!(winner.seat < plays.len());
    }

    /// A Joker never wins unless the trick is nothing but Jokers, in which
    /// case the first one played wins.
    #[test]
    fn jokers_only_win_all_joker_tricks(
        plays in test_gens::complete_trick(),
        trump in test_gens::trump_color(),
    ) {
        let winner = resolve_trick(&plays, trump);
        let all_jokers = plays.iter().all(|p| p.card.is_joker());
        if all_jokers {
            prop_assert_eq!(winner, plays[0]);
        } else {
            prop_assert!(!winner.card.is_joker());
        }
    }

    /// A Wizard in the lead wins no matter what follows.
    #[test]
    fn leading_wizard_wins(
        plays in test_gens::complete_trick(),
        trump in test_gens::trump_color(),
    ) {
        prop_assume!(plays[0].card.is_wizard());
        prop_assert_eq!(resolve_trick(&plays, trump), plays[0]);
    }

    /// When any Wizard is played and none led, the first Wizard wins.
    #[test]
    fn first_wizard_takes_a_wizardless_lead(
        plays in test_gens::complete_trick(),
        trump in test_gens::trump_color(),
    ) {
        prop_assume!(!plays[0].card.is_wizard());
        let first_wizard = plays.iter().find(|p| p.card.is_wizard());
        prop_assume!(first_wizard.is_some());
        prop_assert_eq!(resolve_trick(&plays, trump), *first_wizard.unwrap());
    }

    /// Cards after the first Wizard cannot change the outcome.
    #[test]
    fn resolution_ignores_cards_after_a_wizard(
        plays in test_gens::complete_trick(),
        trump in test_gens::trump_color(),
    ) {
        let cut = plays
            .iter()
            .position(|p| p.card.is_wizard())
            .map(|i| i + 1)
            .unwrap_or(plays.len());
        prop_assert_eq!(
            resolve_trick(&plays, trump),
            resolve_trick(&plays[..cut], trump)
        );
    }

    /// Without wizards in the trick, a suited winner must be top of trump,
    /// or top of the led color when no trump was played.
    #[test]
    fn suited_winner_is_maximal(
        plays in test_gens::complete_trick(),
        trump in test_gens::trump_color(),
    ) {
        prop_assume!(plays.iter().all(|p| !p.card.is_wizard()));
        prop_assume!(plays.iter().any(|p| !p.card.is_joker()));

        let winner = resolve_trick(&plays, trump);
        let winner_color = winner.card.color().expect("mixed trick has a suited winner");

        let top_of = |color| {
            plays
                .iter()
                .filter_map(|p| match p.card {
                    crate::domain::Card::Suited { color: c, value } if c == color => Some(value),
                    _ => None,
                })
                .max()
        };

        let trump_played = trump.is_some() && top_of(trump.unwrap()).is_some();
        if trump_played {
            prop_assert_eq!(Some(winner_color), trump);
            prop_assert_eq!(
                match winner.card {
                    crate::domain::Card::Suited { value, .. } => Some(value),
                    _ => None,
                },
                top_of(winner_color)
            );
        }
    }
}
