//! Serialization for card types: cards as compact tokens, colors as
//! SCREAMING_SNAKE strings.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::cards_types::{Card, Color};

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = match self {
            Color::Red => "RED",
            Color::Green => "GREEN",
            Color::Blue => "BLUE",
            Color::Yellow => "YELLOW",
        };
        serializer.serialize_str(s)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "RED" => Ok(Color::Red),
            "GREEN" => Ok(Color::Green),
            "BLUE" => Ok(Color::Blue),
            "YELLOW" => Ok(Color::Yellow),
            _ => Err(serde::de::Error::custom(format!("Invalid color: {s}"))),
        }
    }
}

// Card serde (compact token format like "R5", "W0")
impl Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<Card>()
            .map_err(|e| serde::de::Error::custom(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cards_types::Trump;

    #[test]
    fn card_serde_roundtrip() {
        for tok in ["R5", "G13", "B1", "Y10", "W0", "J3"] {
            let card: Card = tok.parse().unwrap();
            let s = serde_json::to_string(&card).unwrap();
            assert_eq!(s, format!("\"{tok}\""));
            let decoded: Card = serde_json::from_str(&s).unwrap();
            assert_eq!(decoded, card);
        }
    }

    #[test]
    fn color_serde() {
        assert_eq!(serde_json::to_string(&Color::Red).unwrap(), "\"RED\"");
        assert_eq!(serde_json::to_string(&Color::Yellow).unwrap(), "\"YELLOW\"");
        assert_eq!(
            serde_json::from_str::<Color>("\"GREEN\"").unwrap(),
            Color::Green
        );
        assert!(serde_json::from_str::<Color>("\"PURPLE\"").is_err());
    }

    #[test]
    fn trump_serde_carries_card_and_color() {
        let trump = Trump {
            card: "W1".parse().unwrap(),
            color: Some(Color::Blue),
        };
        let json = serde_json::to_string(&trump).unwrap();
        assert_eq!(json, r#"{"card":"W1","color":"BLUE"}"#);
        let decoded: Trump = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, trump);
    }

    #[test]
    fn rejects_invalid_card_tokens() {
        for tok in ["1H", "R14", "w0", "ZZ", ""] {
            let res: Result<Card, _> = serde_json::from_str(&format!("\"{tok}\""));
            assert!(res.is_err());
        }
    }
}
