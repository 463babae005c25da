//! Capability traits: the contracts schema adapters implement
//!
//! Each adapter serves exactly one schema and declares it through
//! `schema()`. The registry uses that declaration when binding, and the
//! declared kinds or authorities when registering through the typed
//! shortcuts.

use super::error::{CapabilityError, CapabilityResult};
use super::handle::{AnnotationHandle, AnnotationHandleMut};
use super::kinds::{AttributeKind, AttributeValue, CapabilityKind, SchemaId};
use crate::identifier::{Authority, EntityKind, TypedIdentifier};
use std::sync::Arc;

/// Reads normalized attribute values out of a schema's annotations.
pub trait AttributeExtractor: Send + Sync {
    /// The schema whose annotations this adapter understands
    fn schema(&self) -> &SchemaId;

    /// Attribute kinds this adapter can extract
    fn supported_kinds(&self) -> &[AttributeKind];

    /// Extract every value of `kind` recorded on the annotation.
    ///
    /// Zero values is a normal result. Every returned value must be of `kind`.
    fn extract(
        &self,
        annotation: &AnnotationHandle<'_>,
        kind: AttributeKind,
    ) -> CapabilityResult<Vec<AttributeValue>>;
}

/// Records normalized attribute values in a schema's own storage.
pub trait AttributeDecorator: Send + Sync {
    fn schema(&self) -> &SchemaId;

    fn supported_kinds(&self) -> &[AttributeKind];

    /// Attach `value` to the annotation. The value itself is not modified.
    fn decorate(
        &self,
        annotation: &mut AnnotationHandleMut<'_>,
        value: &AttributeValue,
    ) -> CapabilityResult<()>;
}

/// Attaches typed identifiers to entity annotations (e.g. genes).
pub trait EntityIdentifierDecorator: Send + Sync {
    fn schema(&self) -> &SchemaId;

    /// The entity kind this adapter decorates
    fn entity_kind(&self) -> EntityKind;

    /// Authorities this adapter can store for its entity kind
    fn supported_authorities(&self) -> &[Authority];

    /// Attach `identifier` to the annotation.
    ///
    /// Implementations call [`check_authority`](Self::check_authority) before
    /// touching the annotation so an unsupported authority leaves it unmodified.
    fn attach_identifier(
        &self,
        annotation: &mut AnnotationHandleMut<'_>,
        identifier: &TypedIdentifier,
    ) -> CapabilityResult<()>;

    fn supports_authority(&self, authority: &Authority) -> bool {
        self.supported_authorities().contains(authority)
    }

    /// Fail with [`CapabilityError::UnsupportedAuthority`] unless the
    /// identifier's authority is one this adapter recognizes.
    fn check_authority(&self, identifier: &TypedIdentifier) -> CapabilityResult<()> {
        if self.supports_authority(identifier.authority()) {
            Ok(())
        } else {
            Err(CapabilityError::UnsupportedAuthority {
                authority: identifier.authority().clone(),
                entity_kind: self.entity_kind(),
                schema: self.schema().clone(),
            })
        }
    }
}

/// A bound adapter, as stored in and returned by the registry.
#[derive(Clone)]
pub enum AdapterHandle {
    Extractor(Arc<dyn AttributeExtractor>),
    Decorator(Arc<dyn AttributeDecorator>),
    IdentifierDecorator(Arc<dyn EntityIdentifierDecorator>),
}

impl AdapterHandle {
    /// The schema the wrapped adapter declares
    pub fn schema(&self) -> &SchemaId {
        match self {
            Self::Extractor(a) => a.schema(),
            Self::Decorator(a) => a.schema(),
            Self::IdentifierDecorator(a) => a.schema(),
        }
    }

    /// Short name of the adapter role, for diagnostics
    pub fn role(&self) -> &'static str {
        match self {
            Self::Extractor(_) => "extractor",
            Self::Decorator(_) => "decorator",
            Self::IdentifierDecorator(_) => "identifier-decorator",
        }
    }

    /// True if this adapter's role and declared keys cover `capability`.
    pub fn provides(&self, capability: &CapabilityKind) -> bool {
        match (self, capability) {
            (Self::Extractor(a), CapabilityKind::Extract(kind)) => {
                a.supported_kinds().contains(kind)
            }
            (Self::Decorator(a), CapabilityKind::Decorate(kind)) => {
                a.supported_kinds().contains(kind)
            }
            (Self::IdentifierDecorator(a), CapabilityKind::IdentifyEntity(kind)) => {
                a.entity_kind() == *kind
            }
            _ => false,
        }
    }

    pub fn as_extractor(&self) -> Option<&Arc<dyn AttributeExtractor>> {
        match self {
            Self::Extractor(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_decorator(&self) -> Option<&Arc<dyn AttributeDecorator>> {
        match self {
            Self::Decorator(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_identifier_decorator(&self) -> Option<&Arc<dyn EntityIdentifierDecorator>> {
        match self {
            Self::IdentifierDecorator(a) => Some(a),
            _ => None,
        }
    }

    /// True if both handles wrap the same adapter instance.
    pub fn same_adapter(&self, other: &AdapterHandle) -> bool {
        match (self, other) {
            (Self::Extractor(a), Self::Extractor(b)) => Arc::ptr_eq(a, b),
            (Self::Decorator(a), Self::Decorator(b)) => Arc::ptr_eq(a, b),
            (Self::IdentifierDecorator(a), Self::IdentifierDecorator(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl std::fmt::Debug for AdapterHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdapterHandle")
            .field("role", &self.role())
            .field("schema", self.schema())
            .finish()
    }
}

impl From<Arc<dyn AttributeExtractor>> for AdapterHandle {
    fn from(adapter: Arc<dyn AttributeExtractor>) -> Self {
        Self::Extractor(adapter)
    }
}

impl From<Arc<dyn AttributeDecorator>> for AdapterHandle {
    fn from(adapter: Arc<dyn AttributeDecorator>) -> Self {
        Self::Decorator(adapter)
    }
}

impl From<Arc<dyn EntityIdentifierDecorator>> for AdapterHandle {
    fn from(adapter: Arc<dyn EntityIdentifierDecorator>) -> Self {
        Self::IdentifierDecorator(adapter)
    }
}
