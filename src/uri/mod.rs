//! URI minting for semantic-web export
//!
//! Minting is deterministic string construction: a namespace base followed
//! by a percent-encoded local name, validated as an absolute URI. No network
//! access is involved.

mod minter;
mod namespace;

pub use minter::{mint, mint_for_external_document, mint_for_identifier, Uri, UriError, UriResult};
pub use namespace::Namespace;
