//! Card comparisons: color holdings, led color, the beats relation.

use super::cards_types::{Card, Color};
use super::state::PlayedCard;

/// True when the hand holds any suited card of `color`. Specials never count.
pub fn hand_has_color(hand: &[Card], color: Color) -> bool {
    hand.iter().any(|c| c.color() == Some(color))
}

/// Color of the first non-special card played this trick.
///
/// Specials can lead a trick without fixing a color; the first suited card
/// fixes it for everyone after.
pub fn led_color(plays: &[PlayedCard]) -> Option<Color> {
    plays.iter().find_map(|p| p.card.color())
}

/// Whether `candidate` takes over from `best` in the resolution scan.
///
/// Wizard and Joker short-circuits live in `tricks::resolve_trick`; this
/// covers a suited candidate against the current best: a Joker best always
/// loses, otherwise the candidate must outrank within the best's color or be
/// (higher) trump.
pub fn beats(candidate: Card, best: Card, trump_color: Option<Color>) -> bool {
    let Card::Suited { color, value } = candidate else {
        return false;
    };
    if best.is_joker() {
        return true;
    }
    let Card::Suited {
        color: best_color,
        value: best_value,
    } = best
    else {
        // Best is a Wizard; the scan never asks.
        return false;
    };
    if color == best_color && value > best_value {
        return true;
    }
    match trump_color {
        Some(trump) => color == trump && (best_color != trump || value > best_value),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_state_helpers::parse_cards;

    fn card(tok: &str) -> Card {
        tok.parse().expect("hardcoded valid card token")
    }

    #[test]
    fn hand_color_lookup_ignores_specials() {
        let hand = parse_cards(&["R3", "W0", "J1"]);
        assert!(hand_has_color(&hand, Color::Red));
        assert!(!hand_has_color(&hand, Color::Blue));
    }

    #[test]
    fn led_color_skips_leading_specials() {
        let plays = [
            PlayedCard {
                seat: 0,
                card: card("J0"),
            },
            PlayedCard {
                seat: 1,
                card: card("B7"),
            },
        ];
        assert_eq!(led_color(&plays), Some(Color::Blue));
        assert_eq!(led_color(&plays[..1]), None);
    }

    #[test]
    fn higher_value_of_same_color_beats() {
        assert!(beats(card("R9"), card("R5"), None));
        assert!(!beats(card("R5"), card("R9"), None));
    }

    #[test]
    fn off_color_never_beats_without_trump() {
        assert!(!beats(card("B13"), card("R2"), None));
    }

    #[test]
    fn trump_beats_any_non_trump() {
        assert!(beats(card("B2"), card("R13"), Some(Color::Blue)));
        assert!(!beats(card("R13"), card("B2"), Some(Color::Blue)));
    }

    #[test]
    fn within_trump_value_decides() {
        assert!(beats(card("B9"), card("B4"), Some(Color::Blue)));
        assert!(!beats(card("B4"), card("B9"), Some(Color::Blue)));
    }

    #[test]
    fn anything_suited_beats_a_joker_best() {
        assert!(beats(card("G2"), card("J0"), None));
        assert!(!beats(card("J1"), card("J0"), None));
    }
}
