// Proptest generators for domain types. Tricks are generated with unique
// cards, one per seat, the way a real table produces them.

use proptest::prelude::*;

use crate::domain::cards_types::{Card, Color, SpecialKind};
use crate::domain::state::PlayedCard;

pub fn color() -> impl Strategy<Value = Color> {
    prop_oneof![
        Just(Color::Red),
        Just(Color::Green),
        Just(Color::Blue),
        Just(Color::Yellow),
    ]
}

pub fn suited_card() -> impl Strategy<Value = Card> {
    (color(), 1u8..=13).prop_map(|(color, value)| Card::Suited { color, value })
}

pub fn special_card() -> impl Strategy<Value = Card> {
    (
        prop_oneof![Just(SpecialKind::Wizard), Just(SpecialKind::Joker)],
        0u8..4,
    )
        .prop_map(|(kind, index)| Card::Special { kind, index })
}

pub fn card() -> impl Strategy<Value = Card> {
    prop_oneof![
        6 => suited_card(),
        1 => special_card(),
    ]
}

fn all_unique(cards: &[Card]) -> bool {
    cards
        .iter()
        .all(|c| cards.iter().filter(|o| *o == c).count() == 1)
}

/// A complete trick for 3..=6 seats: unique cards, seat i played i-th.
pub fn complete_trick() -> impl Strategy<Value = Vec<PlayedCard>> {
    (3usize..=6)
        .prop_flat_map(|n| prop::collection::vec(card(), n))
        .prop_filter("cards in a trick are unique", |cards| all_unique(cards))
        .prop_map(|cards| {
            cards
                .into_iter()
                .enumerate()
                .map(|(seat, card)| PlayedCard { seat, card })
                .collect()
        })
}

/// An optional trump color for resolution.
pub fn trump_color() -> impl Strategy<Value = Option<Color>> {
    prop_oneof![
        1 => Just(None),
        3 => color().prop_map(Some),
    ]
}
