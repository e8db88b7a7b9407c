//! Card parsing and formatting as string tokens (e.g., "R5", "G13", "W0", "J2")

use std::fmt;
use std::str::FromStr;

use super::cards_types::{Card, Color, SpecialKind};
use crate::domain::rules::{SPECIAL_COPIES, SUITED_VALUES};
use crate::errors::domain::{DomainError, ValidationKind};

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || DomainError::validation(ValidationKind::ParseCard, format!("Parse card: {s}"));
        let mut chars = s.chars();
        let head = chars.next().ok_or_else(err)?;
        let value: u8 = chars.as_str().parse().map_err(|_| err())?;
        match head {
            'R' | 'G' | 'B' | 'Y' => {
                if !SUITED_VALUES.contains(&value) {
                    return Err(err());
                }
                let color = match head {
                    'R' => Color::Red,
                    'G' => Color::Green,
                    'B' => Color::Blue,
                    _ => Color::Yellow,
                };
                Ok(Card::Suited { color, value })
            }
            'W' | 'J' => {
                if value >= SPECIAL_COPIES {
                    return Err(err());
                }
                let kind = if head == 'W' {
                    SpecialKind::Wizard
                } else {
                    SpecialKind::Joker
                };
                Ok(Card::Special { kind, index: value })
            }
            _ => Err(err()),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Suited { color, value } => {
                let c = match color {
                    Color::Red => 'R',
                    Color::Green => 'G',
                    Color::Blue => 'B',
                    Color::Yellow => 'Y',
                };
                write!(f, "{c}{value}")
            }
            Card::Special { kind, index } => {
                let k = match kind {
                    SpecialKind::Wizard => 'W',
                    SpecialKind::Joker => 'J',
                };
                write!(f, "{k}{index}")
            }
        }
    }
}

/// Non-panicking helper to parse card tokens into Card instances.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_suited_and_special_tokens() {
        assert_eq!(
            "R5".parse::<Card>().unwrap(),
            Card::suited(Color::Red, 5)
        );
        assert_eq!(
            "G13".parse::<Card>().unwrap(),
            Card::suited(Color::Green, 13)
        );
        assert_eq!(
            "Y1".parse::<Card>().unwrap(),
            Card::suited(Color::Yellow, 1)
        );
        assert_eq!("W0".parse::<Card>().unwrap(), Card::wizard(0));
        assert_eq!("J3".parse::<Card>().unwrap(), Card::joker(3));
    }

    #[test]
    fn display_roundtrips() {
        for tok in ["R5", "G13", "B1", "Y10", "W0", "W3", "J0", "J2"] {
            let card: Card = tok.parse().unwrap();
            assert_eq!(card.to_string(), tok);
        }
    }

    #[test]
    fn rejects_invalid_tokens() {
        for tok in ["", "R", "R0", "R14", "W4", "J9", "X3", "5R", "RR", "r5"] {
            assert!(tok.parse::<Card>().is_err(), "token {tok:?} must not parse");
        }
    }

    #[test]
    fn try_parse_cards_propagates_failure() {
        assert_eq!(try_parse_cards(["R1", "W2"]).unwrap().len(), 2);
        assert!(try_parse_cards(["R1", "Z9"]).is_err());
    }
}
