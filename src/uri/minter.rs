//! URI minter
//!
//! Local names and external identifiers are percent-encoded here, before
//! concatenation: RFC 3986 unreserved characters (`A-Z a-z 0-9 - _ . ~`) pass
//! through, everything else becomes `%XX`. Callers therefore pass raw
//! identifier values.
//!
//! A minted URI is exactly `base + encode(local_name)`. Any candidate the URL
//! parser would rewrite (dot-segments, upper-case scheme or host, bare spaces)
//! is rejected as malformed rather than returned in its normalized form, so
//! distinct local names never collapse onto one URI.

use super::namespace::Namespace;
use crate::identifier::{Authority, TypedIdentifier};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Errors from URI minting
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UriError {
    #[error("malformed URI {candidate:?}: {reason}")]
    Malformed { candidate: String, reason: String },

    #[error("no namespace is mapped for authority {0}")]
    UnmappedAuthority(Authority),
}

/// Result type for URI minting
pub type UriResult<T> = Result<T, UriError>;

/// A syntactically valid absolute URI
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Uri(String);

impl Uri {
    /// Validate an already-assembled URI string.
    ///
    /// The string must already be in canonical form: it is stored verbatim,
    /// never normalized.
    pub fn parse(candidate: &str) -> UriResult<Self> {
        let malformed = |reason: String| UriError::Malformed {
            candidate: candidate.to_string(),
            reason,
        };
        check_percent_escapes(candidate).map_err(malformed)?;
        let url = Url::parse(candidate).map_err(|e| malformed(e.to_string()))?;
        if url.as_str() != candidate {
            return Err(malformed(format!("not in canonical form (parses as {:?})", url.as_str())));
        }
        Ok(Self(candidate.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Uri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Uri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Every `%` must introduce a two-digit hex escape.
fn check_percent_escapes(candidate: &str) -> Result<(), String> {
    let bytes = candidate.as_bytes();
    for (i, _) in candidate.match_indices('%') {
        let escape = bytes.get(i + 1..i + 3);
        if !escape.is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit)) {
            return Err(format!("invalid percent escape at byte {i}"));
        }
    }
    Ok(())
}

fn concat_and_validate(base: &str, local_name: &str) -> UriResult<Uri> {
    if local_name.is_empty() {
        return Err(UriError::Malformed {
            candidate: base.to_string(),
            reason: "empty local name".to_string(),
        });
    }
    let candidate = format!("{}{}", base, urlencoding::encode(local_name));
    Uri::parse(&candidate)
}

/// Mint `namespace.base() + encode(local_name)`.
///
/// An empty local name is malformed: it would mint the namespace itself.
pub fn mint(namespace: &Namespace, local_name: &str) -> UriResult<Uri> {
    concat_and_validate(namespace.base(), local_name)
}

/// Mint a URI for an entity that lives under a fixed external base path,
/// e.g. an article identifier appended to a literature archive prefix.
pub fn mint_for_external_document(base_uri: &str, external_id: &str) -> UriResult<Uri> {
    concat_and_validate(base_uri, external_id)
}

/// Mint the canonical URI of an identifier under its authority's namespace.
pub fn mint_for_identifier(identifier: &TypedIdentifier) -> UriResult<Uri> {
    let namespace = Namespace::for_authority(identifier.authority())
        .ok_or_else(|| UriError::UnmappedAuthority(identifier.authority().clone()))?;
    mint(&namespace, identifier.value())
}
