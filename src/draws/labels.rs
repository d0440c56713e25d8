//! User-visible wording for draws, placeholders and errors.

use crate::draws::types::CoinFace;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported display languages
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ja,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => write!(f, "en"),
            Locale::Ja => write!(f, "ja"),
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "ja" => Ok(Locale::Ja),
            other => Err(format!("unsupported locale '{}', expected en or ja", other)),
        }
    }
}

/// Fixed strings and line formats for one locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub heads: &'static str,
    pub tails: &'static str,
    pub in_progress: &'static str,
    pub range_error: &'static str,
    pub no_history: &'static str,
    pub history_title: &'static str,
    pub busy: &'static str,
    locale: Locale,
}

const EN: Labels = Labels {
    heads: "Heads",
    tails: "Tails",
    in_progress: "Drawing...",
    range_error: "Range error",
    no_history: "No history yet",
    history_title: "History",
    busy: "A draw is in progress, please wait",
    locale: Locale::En,
};

const JA: Labels = Labels {
    heads: "表",
    tails: "裏",
    in_progress: "抽選中...",
    range_error: "範囲エラー",
    no_history: "履歴がありません",
    history_title: "履歴",
    busy: "抽選中です。しばらくお待ちください",
    locale: Locale::Ja,
};

impl Labels {
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::En => EN,
            Locale::Ja => JA,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn coin_face(&self, face: CoinFace) -> &'static str {
        match face {
            CoinFace::Heads => self.heads,
            CoinFace::Tails => self.tails,
        }
    }

    pub fn coin_result(&self, face: CoinFace) -> String {
        match self.locale {
            Locale::En => format!("Coin result: {}", self.coin_face(face)),
            Locale::Ja => format!("コインの結果: {}", self.coin_face(face)),
        }
    }

    pub fn coin_entry(&self, face: CoinFace) -> String {
        match self.locale {
            Locale::En => format!("Coin: {}", self.coin_face(face)),
            Locale::Ja => format!("コイン: {}", self.coin_face(face)),
        }
    }

    pub fn die_result(&self, sides: u32, value: i64) -> String {
        match self.locale {
            Locale::En => format!("Die ({} sides) result: {}", sides, value),
            Locale::Ja => format!("サイコロ({}面)の結果: {}", sides, value),
        }
    }

    pub fn die_entry(&self, sides: u32, value: i64) -> String {
        match self.locale {
            Locale::En => format!("Die ({} sides): {}", sides, value),
            Locale::Ja => format!("サイコロ({}面): {}", sides, value),
        }
    }

    /// Range draws use the same line for the result and the history entry.
    pub fn range_line(&self, min: i64, max: i64, value: i64) -> String {
        match self.locale {
            Locale::En => format!("Range draw ({}-{}): {}", min, max, value),
            Locale::Ja => format!("範囲抽選({}～{}): {}", min, max, value),
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        EN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_parsing() {
        assert_eq!("en".parse::<Locale>(), Ok(Locale::En));
        assert_eq!(" JA ".parse::<Locale>(), Ok(Locale::Ja));
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn test_english_lines() {
        let labels = Labels::for_locale(Locale::En);
        assert_eq!(labels.coin_result(CoinFace::Heads), "Coin result: Heads");
        assert_eq!(labels.coin_entry(CoinFace::Tails), "Coin: Tails");
        assert_eq!(labels.die_result(6, 4), "Die (6 sides) result: 4");
        assert_eq!(labels.die_entry(6, 4), "Die (6 sides): 4");
        assert_eq!(labels.range_line(-3, 10, 7), "Range draw (-3-10): 7");
    }

    #[test]
    fn test_japanese_lines() {
        let labels = Labels::for_locale(Locale::Ja);
        assert_eq!(labels.coin_result(CoinFace::Heads), "コインの結果: 表");
        assert_eq!(labels.die_entry(6, 2), "サイコロ(6面): 2");
        assert_eq!(labels.range_line(1, 10, 5), "範囲抽選(1～10): 5");
        assert_eq!(labels.range_error, "範囲エラー");
    }
}
