//! Dispatcher: the consumer-facing entry point
//!
//! Consumers hand the dispatcher an annotation handle; the handle's schema
//! selects the adapter, and the result comes back as a normalized value.
//! Per-annotation failures are returned, never swallowed, so the host can
//! skip the annotation and carry on with its siblings.

use super::error::{CapabilityError, CapabilityResult};
use super::handle::{AnnotationHandle, AnnotationHandleMut};
use super::kinds::{AttributeKind, AttributeValue, PartOfSpeech};
use super::registry::DispatchRegistry;
use crate::identifier::{EntityKind, TypedIdentifier};
use std::sync::Arc;

/// Routes capability requests to the adapters bound in a registry.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: Arc<DispatchRegistry>,
}

impl Dispatcher {
    pub fn new(registry: Arc<DispatchRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &DispatchRegistry {
        &self.registry
    }

    /// Extract every value of `kind` from the annotation.
    pub fn extract(
        &self,
        annotation: &AnnotationHandle<'_>,
        kind: AttributeKind,
    ) -> CapabilityResult<Vec<AttributeValue>> {
        let extractor = self.registry.resolve_extractor(kind, annotation.schema())?;
        let values = extractor.extract(annotation, kind)?;

        if let Some(stray) = values.iter().find(|v| v.kind() != kind) {
            tracing::warn!(
                schema = %annotation.schema(),
                expected = %kind,
                actual = %stray.kind(),
                "extractor returned a value of the wrong kind"
            );
            return Err(CapabilityError::AttributeKindMismatch {
                expected: kind,
                actual: stray.kind(),
            });
        }
        Ok(values)
    }

    /// Part-of-speech tags of a token annotation.
    pub fn parts_of_speech(
        &self,
        annotation: &AnnotationHandle<'_>,
    ) -> CapabilityResult<Vec<PartOfSpeech>> {
        Ok(self
            .extract(annotation, AttributeKind::PartOfSpeech)?
            .into_iter()
            .filter_map(|value| match value {
                AttributeValue::PartOfSpeech(pos) => Some(pos),
                _ => None,
            })
            .collect())
    }

    /// Record `value` on the annotation through the decorator bound for its kind.
    pub fn decorate(
        &self,
        annotation: &mut AnnotationHandleMut<'_>,
        value: &AttributeValue,
    ) -> CapabilityResult<()> {
        let decorator = self
            .registry
            .resolve_decorator(value.kind(), annotation.schema())?;
        decorator.decorate(annotation, value)
    }

    /// Attach an identifier to an entity annotation.
    ///
    /// The authority is checked against the adapter's declared set before the
    /// adapter runs, so a rejected identifier never reaches the annotation.
    pub fn attach_identifier(
        &self,
        annotation: &mut AnnotationHandleMut<'_>,
        entity_kind: EntityKind,
        identifier: &TypedIdentifier,
    ) -> CapabilityResult<()> {
        let decorator = self
            .registry
            .resolve_identifier_decorator(entity_kind, annotation.schema())?;

        if let Err(err) = decorator.check_authority(identifier) {
            tracing::warn!(
                schema = %annotation.schema(),
                %identifier,
                %entity_kind,
                "identifier authority not supported by adapter"
            );
            return Err(err);
        }
        decorator.attach_identifier(annotation, identifier)
    }
}
