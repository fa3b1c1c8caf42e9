//! Serde support.
//!
//! Money has exactly one serialized form: its display string. JSON, TOML
//! and friends all see `"-$1,234.56"`, and anything [`Money::parse`]
//! accepts deserializes.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

use crate::money::Money;

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct MoneyVisitor;

impl<'de> Visitor<'de> for MoneyVisitor {
    type Value = Money;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a money string such as \"$1,234.56\"")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Money, E> {
        Money::parse(value).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(MoneyVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_as_display_string() {
        let json = serde_json::to_string(&Money::from_cents(-1000012345)).unwrap();
        assert_eq!(json, "\"-$10,000,123.45\"");
    }

    #[test]
    fn test_deserialize_from_string() {
        let money: Money = serde_json::from_str("\"$1,299.99\"").unwrap();
        assert_eq!(money.as_cents(), 129999);

        let prices: Vec<Money> = serde_json::from_str(r#"["$1.00", "-$0.01", "$5"]"#).unwrap();
        assert_eq!(
            prices,
            vec![
                Money::from_cents(100),
                Money::from_cents(-1),
                Money::from_cents(500)
            ]
        );
    }

    #[test]
    fn test_deserialize_rejects_bad_input() {
        let err = serde_json::from_str::<Money>("\"$100.0\"").unwrap_err();
        assert!(err.to_string().contains("expected exactly two digits"));

        // numbers are not accepted; the string form is the only format
        assert!(serde_json::from_str::<Money>("1099").is_err());
    }
}
