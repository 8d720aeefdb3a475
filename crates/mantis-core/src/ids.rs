//! Canonical entity ids.
//!
//! The API hands out integer primary keys, but ids also arrive as strings
//! (query parameters, form values, hand-edited JSON). Everything is funneled
//! through [`EntityId`] at the boundary so comparisons inside the crate are
//! always strict and type-stable.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::CoreError;

/// A positive integer primary key. Serialized as a JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, JsonSchema)]
#[serde(transparent)]
pub struct EntityId(u64);

impl EntityId {
    /// Wrap a raw key.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] for `0`, which the API never assigns.
    pub fn new(raw: u64) -> Result<Self, CoreError> {
        if raw == 0 {
            return Err(CoreError::validation("invalid id '0'"));
        }
        Ok(Self(raw))
    }

    /// Parse an id from text, tolerating surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when the text is not a positive integer.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let trimmed = raw.trim();
        let value = trimmed
            .parse::<u64>()
            .map_err(|_| CoreError::validation(format!("invalid id '{trimmed}'")))?;
        Self::new(value)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntityId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<u64> for EntityId {
    type Error = CoreError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

struct EntityIdVisitor;

impl Visitor<'_> for EntityIdVisitor {
    type Value = EntityId;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a positive integer id or a numeric string")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        EntityId::try_from(v).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        let raw = u64::try_from(v).map_err(|_| E::custom(format!("invalid id '{v}'")))?;
        self.visit_u64(raw)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        EntityId::parse(v).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(EntityIdVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("42", 42)]
    #[case(" 7 ", 7)]
    #[case("0010", 10)]
    fn parses_numeric_text(#[case] raw: &str, #[case] expected: u64) {
        assert_eq!(EntityId::parse(raw).unwrap().get(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("0")]
    #[case("-3")]
    #[case("abc")]
    #[case("1.5")]
    #[case("undefined")]
    fn rejects_malformed_text(#[case] raw: &str) {
        let err = EntityId::parse(raw).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)), "{raw}: {err}");
    }

    #[test]
    fn number_and_string_payloads_compare_equal() {
        let from_number: EntityId = serde_json::from_str("12").unwrap();
        let from_string: EntityId = serde_json::from_str("\"12\"").unwrap();
        assert_eq!(from_number, from_string);
    }

    #[test]
    fn serializes_as_plain_number() {
        let id = EntityId::parse("99").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "99");
    }

    #[test]
    fn negative_and_null_payloads_fail() {
        assert!(serde_json::from_str::<EntityId>("-1").is_err());
        assert!(serde_json::from_str::<EntityId>("null").is_err());
        assert!(serde_json::from_str::<EntityId>("0").is_err());
    }

    #[test]
    fn optional_ids_accept_null() {
        let id: Option<EntityId> = serde_json::from_str("null").unwrap();
        assert!(id.is_none());
    }
}
