//! Core card-related types: Card, Color, SpecialKind, Trump

use serde::{Deserialize, Serialize};

use crate::domain::rules::SUITED_VALUES;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
}

impl Color {
    pub const ALL: [Color; 4] = [Color::Red, Color::Green, Color::Blue, Color::Yellow];
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum SpecialKind {
    Wizard,
    Joker,
}

/// A single card. Suited values run 1..=13; a special's `index` only
/// disambiguates the four physical copies of its kind.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Card {
    Suited { color: Color, value: u8 },
    Special { kind: SpecialKind, index: u8 },
}

impl Card {
    pub fn suited(color: Color, value: u8) -> Self {
        debug_assert!(SUITED_VALUES.contains(&value));
        Card::Suited { color, value }
    }

    pub fn wizard(index: u8) -> Self {
        Card::Special {
            kind: SpecialKind::Wizard,
            index,
        }
    }

    pub fn joker(index: u8) -> Self {
        Card::Special {
            kind: SpecialKind::Joker,
            index,
        }
    }

    /// Color of a suited card; specials have none.
    pub fn color(&self) -> Option<Color> {
        match self {
            Card::Suited { color, .. } => Some(*color),
            Card::Special { .. } => None,
        }
    }

    pub fn is_special(&self) -> bool {
        matches!(self, Card::Special { .. })
    }

    pub fn is_wizard(&self) -> bool {
        matches!(
            self,
            Card::Special {
                kind: SpecialKind::Wizard,
                ..
            }
        )
    }

    pub fn is_joker(&self) -> bool {
        matches!(
            self,
            Card::Special {
                kind: SpecialKind::Joker,
                ..
            }
        )
    }
}

// Note: Ord on Card is only for stable sorting: colors in declaration order,
// then value, specials after suited. Do not use for trick resolution.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match (self, other) {
            (
                Card::Suited {
                    color: c1,
                    value: v1,
                },
                Card::Suited {
                    color: c2,
                    value: v2,
                },
            ) => c1.cmp(c2).then(v1.cmp(v2)),
            (Card::Suited { .. }, Card::Special { .. }) => std::cmp::Ordering::Less,
            (Card::Special { .. }, Card::Suited { .. }) => std::cmp::Ordering::Greater,
            (
                Card::Special {
                    kind: k1,
                    index: i1,
                },
                Card::Special {
                    kind: k2,
                    index: i2,
                },
            ) => k1.cmp(k2).then(i1.cmp(i2)),
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// The turned-up trump for a round.
///
/// `color` is `None` when a Joker was turned up (the round plays without a
/// trump color) or while a Wizard turn-up still awaits the dealer's choice.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Trump {
    pub card: Card,
    pub color: Option<Color>,
}
