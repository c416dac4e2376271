// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub const ID_MAX_LEN: usize = 128;

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    Empty(&'static str),
    Trimmed(&'static str),
    TooLong(&'static str, usize),
    Unknown(&'static str, String),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty(name) => write!(f, "{name} must not be empty"),
            Self::Trimmed(name) => {
                write!(f, "{name} must not contain leading/trailing whitespace")
            }
            Self::TooLong(name, max) => write!(f, "{name} exceeds max length {max}"),
            Self::Unknown(name, value) => write!(f, "unknown {name}: {value}"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Stable certification identifier, e.g. `az-104`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CertId(String);

impl CertId {
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        if input.is_empty() {
            return Err(ParseError::Empty("id"));
        }
        if input.trim() != input {
            return Err(ParseError::Trimmed("id"));
        }
        if input.len() > ID_MAX_LEN {
            return Err(ParseError::TooLong("id", ID_MAX_LEN));
        }
        Ok(Self(input.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Key used for case-insensitive lookups.
    #[must_use]
    pub fn lookup_key(&self) -> String {
        lookup_key(&self.0)
    }

    #[must_use]
    pub fn eq_ignore_case(&self, other: &str) -> bool {
        lookup_key(&self.0) == lookup_key(other)
    }
}

pub(crate) fn lookup_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}

impl TryFrom<String> for CertId {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CertId> for String {
    fn from(value: CertId) -> Self {
        value.0
    }
}

impl Display for CertId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cert_id_rejects_hidden_trimming() {
        assert!(CertId::parse("az-900").is_ok());
        assert_eq!(CertId::parse(" az-900"), Err(ParseError::Trimmed("id")));
        assert_eq!(CertId::parse(""), Err(ParseError::Empty("id")));
        assert!(CertId::parse(&"x".repeat(ID_MAX_LEN + 1)).is_err());
    }

    #[test]
    fn cert_id_case_insensitive_comparison() {
        let id = CertId::parse("AZ-104").expect("id");
        assert!(id.eq_ignore_case("az-104"));
        assert!(!id.eq_ignore_case("az-204"));
        assert_eq!(id.lookup_key(), "az-104");
    }

    #[test]
    fn cert_id_serde_validates() {
        let id: CertId = serde_json::from_str("\"aws-saa\"").expect("decode");
        assert_eq!(id.as_str(), "aws-saa");
        assert!(serde_json::from_str::<CertId>("\"\"").is_err());
    }
}
