use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// What the coin landed on
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CoinFace {
    Heads,
    Tails,
}

impl fmt::Display for CoinFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoinFace::Heads => write!(f, "heads"),
            CoinFace::Tails => write!(f, "tails"),
        }
    }
}

/// Kind of draw with its parameters
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DrawKind {
    Coin,
    Die { sides: u32 },
    Range { min: i64, max: i64 },
}

impl DrawKind {
    /// The standard six-sided die
    pub fn d6() -> Self {
        DrawKind::Die { sides: 6 }
    }
}

impl fmt::Display for DrawKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawKind::Coin => write!(f, "coin"),
            DrawKind::Die { sides } => write!(f, "d{}", sides),
            DrawKind::Range { min, max } => write!(f, "range[{}, {}]", min, max),
        }
    }
}

/// Outcome of a draw: a coin label or an integer
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Outcome {
    Face(CoinFace),
    Number(i64),
}

impl Outcome {
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Outcome::Number(n) => Some(*n),
            Outcome::Face(_) => None,
        }
    }

    pub fn as_face(&self) -> Option<CoinFace> {
        match self {
            Outcome::Face(face) => Some(*face),
            Outcome::Number(_) => None,
        }
    }
}

/// A completed draw. Never modified after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DrawResult {
    pub id: Uuid,
    pub kind: DrawKind,
    pub outcome: Outcome,
    /// Line shown on the current-result surface
    pub display_text: String,
    /// Line shown in the history list
    pub history_text: String,
    pub drawn_at: DateTime<Utc>,
}

impl DrawResult {
    pub fn new(kind: DrawKind, outcome: Outcome, display_text: String, history_text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            outcome,
            display_text,
            history_text,
            drawn_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_accessors() {
        assert_eq!(Outcome::Number(4).as_number(), Some(4));
        assert_eq!(Outcome::Number(4).as_face(), None);
        assert_eq!(Outcome::Face(CoinFace::Tails).as_face(), Some(CoinFace::Tails));
    }

    #[test]
    fn test_draw_result_json_shape() {
        let result = DrawResult::new(
            DrawKind::Range { min: 1, max: 3 },
            Outcome::Number(2),
            "Range draw (1-3): 2".to_string(),
            "Range draw (1-3): 2".to_string(),
        );

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["kind"]["kind"], "range");
        assert_eq!(json["kind"]["min"], 1);
        assert_eq!(json["outcome"], 2);

        let coin = DrawResult::new(
            DrawKind::Coin,
            Outcome::Face(CoinFace::Heads),
            String::new(),
            String::new(),
        );
        assert_eq!(serde_json::to_value(&coin).unwrap()["outcome"], "heads");
    }
}
