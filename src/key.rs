//! Identity keys shared by breadcrumbs and links.
//!
//! Keys are either numbers or strings. Comparison is strict: the number `1`
//! and the string `"1"` are different keys. Numbers are JSON numbers, so
//! fractional ids and ids beyond `i64` survive an export/import cycle.
//! Integer and float forms stay distinct (`1` is not `1.0`).

use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt;

/// A string-or-number identity key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemKey {
    Number(Number),
    Text(String),
}

impl ItemKey {
    /// Parse user input.
    ///
    /// An optionally signed run of digits, with at most one `.` between
    /// digits, becomes a number. Anything else is text.
    pub fn parse(s: &str) -> Self {
        if looks_numeric(s) {
            if let Ok(n) = s.parse::<Number>() {
                return Self::Number(n);
            }
        }
        Self::Text(s.to_string())
    }

    /// Get the key as a string slice if it is textual.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Number(_) => None,
        }
    }
}

fn looks_numeric(s: &str) -> bool {
    let unsigned = s.strip_prefix('-').unwrap_or(s);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    all_digits(whole) && fraction.is_none_or(all_digits)
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for ItemKey {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for ItemKey {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for ItemKey {
    fn from(n: i64) -> Self {
        Self::Number(Number::from(n))
    }
}

impl From<i32> for ItemKey {
    fn from(n: i32) -> Self {
        Self::Number(Number::from(n))
    }
}

impl From<u64> for ItemKey {
    fn from(n: u64) -> Self {
        Self::Number(Number::from(n))
    }
}

impl From<Number> for ItemKey {
    fn from(n: Number) -> Self {
        Self::Number(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_and_text_are_distinct() {
        assert_ne!(ItemKey::from(1), ItemKey::from("1"));
    }

    #[test]
    fn parse_digits_as_number() {
        assert_eq!(ItemKey::parse("42"), ItemKey::from(42));
        assert_eq!(ItemKey::parse("-7"), ItemKey::from(-7));
    }

    #[test]
    fn parse_wide_and_fractional_numbers() {
        assert_eq!(ItemKey::parse("18446744073709551615"), ItemKey::from(u64::MAX));
        assert_eq!(ItemKey::parse("1.5").to_string(), "1.5");
        assert!(matches!(ItemKey::parse("1.5"), ItemKey::Number(_)));
    }

    #[test]
    fn parse_other_input_as_text() {
        assert_eq!(ItemKey::parse("a1"), ItemKey::Text("a1".into()));
        assert_eq!(ItemKey::parse(""), ItemKey::Text(String::new()));
        assert_eq!(ItemKey::parse("-"), ItemKey::Text("-".into()));
        assert_eq!(ItemKey::parse("1."), ItemKey::Text("1.".into()));
        assert_eq!(ItemKey::parse("1e5"), ItemKey::Text("1e5".into()));
    }

    #[test]
    fn serializes_untagged() {
        let keys = vec![ItemKey::from(3), ItemKey::from("home")];
        let json = serde_json::to_string(&keys).unwrap();
        assert_eq!(json, r#"[3,"home"]"#);

        let parsed: Vec<ItemKey> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, keys);
    }

    #[test]
    fn deserializes_non_integer_numbers() {
        let parsed: Vec<ItemKey> = serde_json::from_str("[1.5, 18446744073709551615]").unwrap();
        assert_eq!(parsed[0].to_string(), "1.5");
        assert_eq!(parsed[1], ItemKey::from(u64::MAX));
        assert_ne!(parsed[0], ItemKey::from(1));
    }

    #[test]
    fn display_matches_inner_value() {
        assert_eq!(ItemKey::from(9).to_string(), "9");
        assert_eq!(ItemKey::from("docs").to_string(), "docs");
        assert_eq!(ItemKey::from("docs").as_str(), Some("docs"));
        assert_eq!(ItemKey::from(9).as_str(), None);
    }
}
