//! Capability layer
//!
//! Consumers ask for a capability (extract part-of-speech, attach a gene
//! identifier) against an opaque annotation. Schema adapters, supplied by
//! external code, implement the capability for one concrete annotation
//! representation each. The dispatch registry binds the two once, at
//! pipeline configuration time.

mod dispatch;
mod error;
mod handle;
mod kinds;
mod registry;
#[cfg(test)]
mod test_support;
mod traits;

pub use dispatch::Dispatcher;
pub use error::{CapabilityError, CapabilityResult};
pub use handle::{AnnotationHandle, AnnotationHandleMut};
pub use kinds::{AttributeKind, AttributeValue, CapabilityKind, PartOfSpeech, SchemaId};
pub use registry::{BindingKey, DispatchRegistry, RegistryBuilder};
pub use traits::{AdapterHandle, AttributeDecorator, AttributeExtractor, EntityIdentifierDecorator};
