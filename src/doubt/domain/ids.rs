//! Identifier types for the doubt domain.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Prefix carried by every doubt identifier.
const DOUBT_ID_PREFIX: &str = "DQ-";

/// Number of hex characters following the prefix.
const DOUBT_ID_SUFFIX_LEN: usize = 6;

/// Unique short identifier for a doubt record, in `DQ-xxxxxx` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DoubtId(String);

impl DoubtId {
    /// Generates a fresh doubt identifier from v4 UUID entropy.
    #[must_use]
    pub fn generate() -> Self {
        let suffix: String = Uuid::new_v4()
            .simple()
            .to_string()
            .chars()
            .take(DOUBT_ID_SUFFIX_LEN)
            .collect();
        Self(format!("{DOUBT_ID_PREFIX}{}", suffix.to_ascii_uppercase()))
    }

    /// Parses a persisted doubt identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ParseDoubtIdError`] when the value does not consist of the
    /// `DQ-` prefix followed by exactly six uppercase hex characters.
    pub fn parse(value: impl Into<String>) -> Result<Self, ParseDoubtIdError> {
        let raw = value.into();
        let is_valid = raw.strip_prefix(DOUBT_ID_PREFIX).is_some_and(|suffix| {
            suffix.len() == DOUBT_ID_SUFFIX_LEN
                && suffix
                    .chars()
                    .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase())
        });
        if !is_valid {
            return Err(ParseDoubtIdError(raw));
        }
        Ok(Self(raw))
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DoubtId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for DoubtId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned while parsing doubt identifiers from persistence.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("malformed doubt id: {0}")]
pub struct ParseDoubtIdError(pub String);
