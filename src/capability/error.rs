//! Capability and dispatch errors

use super::kinds::{AttributeKind, CapabilityKind, SchemaId};
use crate::identifier::{Authority, EntityKind};
use thiserror::Error;

/// Errors raised while configuring the registry or dispatching to adapters.
///
/// Configuration errors (see [`CapabilityError::is_configuration_error`])
/// mean the deployment is broken and must abort pipeline setup. Everything
/// else concerns a single annotation and leaves siblings unaffected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CapabilityError {
    #[error("duplicate binding for {capability} on schema {schema}")]
    DuplicateBinding {
        capability: CapabilityKind,
        schema: SchemaId,
    },

    #[error("no adapter bound for {capability} on schema {schema}")]
    UnboundCapability {
        capability: CapabilityKind,
        schema: SchemaId,
    },

    #[error("authority {authority} is not supported for {entity_kind} identifiers on schema {schema}")]
    UnsupportedAuthority {
        authority: Authority,
        entity_kind: EntityKind,
        schema: SchemaId,
    },

    #[error("adapter declares schema {declared} but was bound to {bound}")]
    SchemaMismatch { declared: SchemaId, bound: SchemaId },

    #[error("{adapter} adapter cannot serve {capability}")]
    HandleMismatch {
        capability: CapabilityKind,
        adapter: &'static str,
    },

    #[error("annotation on schema {schema} is not a {expected}")]
    InvalidAnnotation {
        schema: SchemaId,
        expected: &'static str,
    },

    #[error("expected a {expected} value, got {actual}")]
    AttributeKindMismatch {
        expected: AttributeKind,
        actual: AttributeKind,
    },
}

impl CapabilityError {
    /// True for registry misconfiguration, which is fatal at setup time.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::DuplicateBinding { .. }
                | Self::UnboundCapability { .. }
                | Self::SchemaMismatch { .. }
                | Self::HandleMismatch { .. }
        )
    }
}

/// Result type for capability operations
pub type CapabilityResult<T> = Result<T, CapabilityError>;
