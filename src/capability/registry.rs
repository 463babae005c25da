//! Dispatch registry: binds (capability, schema) to one adapter
//!
//! Registration happens once, during pipeline configuration, on a
//! `RegistryBuilder`. `build()` checks every required binding eagerly and
//! freezes the table into a `DispatchRegistry`, which is read-only and can
//! be shared across threads behind an `Arc` without locking. There is no
//! unregister; rebinding means building a new registry.

use super::error::{CapabilityError, CapabilityResult};
use super::kinds::{AttributeKind, CapabilityKind, SchemaId};
use super::traits::{
    AdapterHandle, AttributeDecorator, AttributeExtractor, EntityIdentifierDecorator,
};
use crate::identifier::EntityKind;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// The key a binding is registered under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BindingKey {
    #[serde(flatten)]
    pub capability: CapabilityKind,
    pub schema: SchemaId,
}

impl BindingKey {
    pub fn new(capability: CapabilityKind, schema: impl Into<SchemaId>) -> Self {
        Self {
            capability,
            schema: schema.into(),
        }
    }
}

impl std::fmt::Display for BindingKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} @ {}", self.capability, self.schema)
    }
}

type BindingTable = HashMap<SchemaId, HashMap<CapabilityKind, AdapterHandle>>;

/// Mutable configuration-time view of the registry.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    bindings: BindingTable,
    required: Vec<BindingKey>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn is_bound(&self, capability: &CapabilityKind, schema: &SchemaId) -> bool {
        self.bindings
            .get(schema)
            .is_some_and(|caps| caps.contains_key(capability))
    }

    fn check(
        &self,
        capability: &CapabilityKind,
        schema: &SchemaId,
        adapter: &AdapterHandle,
    ) -> CapabilityResult<()> {
        if !adapter.provides(capability) {
            return Err(CapabilityError::HandleMismatch {
                capability: *capability,
                adapter: adapter.role(),
            });
        }
        if adapter.schema() != schema {
            return Err(CapabilityError::SchemaMismatch {
                declared: adapter.schema().clone(),
                bound: schema.clone(),
            });
        }
        if self.is_bound(capability, schema) {
            return Err(CapabilityError::DuplicateBinding {
                capability: *capability,
                schema: schema.clone(),
            });
        }
        Ok(())
    }

    fn insert(&mut self, capability: CapabilityKind, schema: SchemaId, adapter: AdapterHandle) {
        tracing::debug!(%capability, %schema, role = adapter.role(), "capability bound");
        self.bindings
            .entry(schema)
            .or_default()
            .insert(capability, adapter);
    }

    /// Bind `adapter` to `(capability, schema)`.
    ///
    /// Fails with `DuplicateBinding` if the pair is already bound, with
    /// `SchemaMismatch` if the adapter declares another schema, and with
    /// `HandleMismatch` if the adapter does not provide the capability.
    pub fn register(
        &mut self,
        capability: CapabilityKind,
        schema: impl Into<SchemaId>,
        adapter: AdapterHandle,
    ) -> CapabilityResult<()> {
        let schema = schema.into();
        self.check(&capability, &schema, &adapter)?;
        self.insert(capability, schema, adapter);
        Ok(())
    }

    /// Register a batch atomically: either every binding is added or none.
    fn register_all(
        &mut self,
        capabilities: Vec<CapabilityKind>,
        adapter: AdapterHandle,
    ) -> CapabilityResult<()> {
        let schema = adapter.schema().clone();
        for (i, capability) in capabilities.iter().enumerate() {
            self.check(capability, &schema, &adapter)?;
            if capabilities[..i].contains(capability) {
                return Err(CapabilityError::DuplicateBinding {
                    capability: *capability,
                    schema,
                });
            }
        }
        for capability in capabilities {
            self.insert(capability, schema.clone(), adapter.clone());
        }
        Ok(())
    }

    /// Bind an extractor for every kind it declares, under its declared schema.
    pub fn register_extractor(
        &mut self,
        adapter: Arc<dyn AttributeExtractor>,
    ) -> CapabilityResult<()> {
        let capabilities = adapter
            .supported_kinds()
            .iter()
            .map(|kind| CapabilityKind::Extract(*kind))
            .collect();
        self.register_all(capabilities, AdapterHandle::Extractor(adapter))
    }

    /// Bind a decorator for every kind it declares, under its declared schema.
    pub fn register_decorator(
        &mut self,
        adapter: Arc<dyn AttributeDecorator>,
    ) -> CapabilityResult<()> {
        let capabilities = adapter
            .supported_kinds()
            .iter()
            .map(|kind| CapabilityKind::Decorate(*kind))
            .collect();
        self.register_all(capabilities, AdapterHandle::Decorator(adapter))
    }

    /// Bind an identifier decorator for its entity kind, under its declared schema.
    pub fn register_identifier_decorator(
        &mut self,
        adapter: Arc<dyn EntityIdentifierDecorator>,
    ) -> CapabilityResult<()> {
        let capabilities = vec![CapabilityKind::IdentifyEntity(adapter.entity_kind())];
        self.register_all(capabilities, AdapterHandle::IdentifierDecorator(adapter))
    }

    /// Declare a binding the pipeline cannot run without; checked by `build()`.
    pub fn require(&mut self, capability: CapabilityKind, schema: impl Into<SchemaId>) -> &mut Self {
        self.required.push(BindingKey::new(capability, schema));
        self
    }

    /// Declare several required bindings at once.
    pub fn require_all(&mut self, keys: impl IntoIterator<Item = BindingKey>) -> &mut Self {
        self.required.extend(keys);
        self
    }

    /// Check every required binding and freeze the table.
    ///
    /// Fails with `UnboundCapability` on the first requirement (in declaration
    /// order) that has no adapter.
    pub fn build(self) -> CapabilityResult<DispatchRegistry> {
        let missing: Vec<&BindingKey> = self
            .required
            .iter()
            .filter(|key| !self.is_bound(&key.capability, &key.schema))
            .collect();

        if let Some(first) = missing.first() {
            for key in &missing {
                tracing::error!(binding = %key, "required capability has no adapter");
            }
            return Err(CapabilityError::UnboundCapability {
                capability: first.capability,
                schema: first.schema.clone(),
            });
        }

        let registry = DispatchRegistry {
            bindings: self.bindings,
        };
        tracing::debug!(
            bindings = registry.len(),
            required = self.required.len(),
            "dispatch registry built"
        );
        Ok(registry)
    }
}

/// Immutable binding table consulted for every annotation.
#[derive(Debug, Default)]
pub struct DispatchRegistry {
    bindings: BindingTable,
}

impl DispatchRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// The adapter bound to `(capability, schema)`.
    pub fn resolve(
        &self,
        capability: &CapabilityKind,
        schema: &SchemaId,
    ) -> CapabilityResult<&AdapterHandle> {
        self.bindings
            .get(schema)
            .and_then(|caps| caps.get(capability))
            .ok_or_else(|| CapabilityError::UnboundCapability {
                capability: *capability,
                schema: schema.clone(),
            })
    }

    pub fn resolve_extractor(
        &self,
        kind: AttributeKind,
        schema: &SchemaId,
    ) -> CapabilityResult<&Arc<dyn AttributeExtractor>> {
        let capability = CapabilityKind::Extract(kind);
        let handle = self.resolve(&capability, schema)?;
        handle.as_extractor().ok_or(CapabilityError::HandleMismatch {
            capability,
            adapter: handle.role(),
        })
    }

    pub fn resolve_decorator(
        &self,
        kind: AttributeKind,
        schema: &SchemaId,
    ) -> CapabilityResult<&Arc<dyn AttributeDecorator>> {
        let capability = CapabilityKind::Decorate(kind);
        let handle = self.resolve(&capability, schema)?;
        handle.as_decorator().ok_or(CapabilityError::HandleMismatch {
            capability,
            adapter: handle.role(),
        })
    }

    pub fn resolve_identifier_decorator(
        &self,
        entity_kind: EntityKind,
        schema: &SchemaId,
    ) -> CapabilityResult<&Arc<dyn EntityIdentifierDecorator>> {
        let capability = CapabilityKind::IdentifyEntity(entity_kind);
        let handle = self.resolve(&capability, schema)?;
        handle
            .as_identifier_decorator()
            .ok_or(CapabilityError::HandleMismatch {
                capability,
                adapter: handle.role(),
            })
    }

    pub fn is_bound(&self, capability: &CapabilityKind, schema: &SchemaId) -> bool {
        self.resolve(capability, schema).is_ok()
    }

    /// Every binding, in no particular order.
    pub fn bindings(&self) -> impl Iterator<Item = (BindingKey, &AdapterHandle)> + '_ {
        self.bindings.iter().flat_map(|(schema, caps)| {
            caps.iter()
                .map(move |(capability, adapter)| (BindingKey::new(*capability, schema.clone()), adapter))
        })
    }

    /// Schemas with at least one binding
    pub fn schemas(&self) -> impl Iterator<Item = &SchemaId> + '_ {
        self.bindings.keys()
    }

    /// Number of bindings
    pub fn len(&self) -> usize {
        self.bindings.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
