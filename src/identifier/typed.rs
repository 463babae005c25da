//! TypedIdentifier: an authority-tagged identifier value

use super::authority::Authority;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while constructing identifiers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    #[error("identifier value is empty")]
    EmptyValue,

    #[error("unknown authority: {0:?}")]
    UnknownAuthority(String),

    #[error("malformed CURIE: {0:?} (expected PREFIX:value)")]
    MalformedCurie(String),
}

/// Result type for identifier construction
pub type IdentifierResult<T> = Result<T, IdentifierError>;

/// An external identifier qualified by the authority that issued it.
///
/// Equality and hashing are by `(authority, value)`. The value is never
/// empty; fields are private so a constructed identifier cannot change.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawIdentifier")]
pub struct TypedIdentifier {
    authority: Authority,
    value: String,
}

#[derive(Deserialize)]
struct RawIdentifier {
    authority: Authority,
    value: String,
}

impl TryFrom<RawIdentifier> for TypedIdentifier {
    type Error = IdentifierError;

    fn try_from(raw: RawIdentifier) -> Result<Self, Self::Error> {
        Self::new(raw.authority, raw.value)
    }
}

impl TypedIdentifier {
    /// Create an identifier. Surrounding whitespace is trimmed from `value`.
    pub fn new(authority: Authority, value: impl Into<String>) -> IdentifierResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(IdentifierError::EmptyValue);
        }
        let value = if trimmed.len() == value.len() {
            value
        } else {
            trimmed.to_string()
        };
        Ok(Self { authority, value })
    }

    /// Parse a `PREFIX:value` CURIE such as `EG:7157` or `PMC:PMC12345`.
    ///
    /// Only the first colon separates prefix from value, so values that
    /// themselves contain colons (`MGI:MGI:98834`) survive intact.
    pub fn parse_curie(curie: &str) -> IdentifierResult<Self> {
        let (prefix, value) = curie
            .split_once(':')
            .ok_or_else(|| IdentifierError::MalformedCurie(curie.to_string()))?;
        let authority: Authority = prefix.parse()?;
        Self::new(authority, value)
    }

    pub fn authority(&self) -> &Authority {
        &self.authority
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Render as `PREFIX:value`.
    pub fn to_curie(&self) -> String {
        format!("{}:{}", self.authority.prefix(), self.value)
    }
}

impl std::fmt::Display for TypedIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.authority, self.value)
    }
}
