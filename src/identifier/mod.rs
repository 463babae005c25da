//! Typed external identifiers
//!
//! An identifier is an opaque value tagged with the authority that issued it
//! (a gene database, a literature index). Identifiers are immutable value
//! objects; whichever annotation carries one owns it.

mod authority;
mod typed;

pub use authority::{Authority, EntityKind, OtherPrefix};
pub use typed::{IdentifierError, IdentifierResult, TypedIdentifier};
