//! Annoshim: capability shims over biomedical annotation schemas
//!
//! Entity taggers, syntactic analyzers and semantic-web exporters work
//! against normalized capabilities rather than against any one upstream
//! annotation schema. Schema adapters plug in behind those capabilities
//! without consumer code changing.
//!
//! # Core Concepts
//!
//! - **Capabilities**: attribute extraction, attribute decoration and
//!   identifier attachment, each keyed by an attribute kind or entity kind
//! - **Dispatch registry**: binds (capability, schema) to exactly one adapter,
//!   checked eagerly at configuration time and read-only afterwards
//! - **Typed identifiers**: authority-tagged external identifiers
//! - **Utilities**: stop-word filtering and URI minting for export
//!
//! # Example
//!
//! ```
//! use annoshim::{mint_for_external_document, remove_stop_words};
//!
//! assert_eq!(remove_stop_words(" the cat").trim(), "cat");
//!
//! let uri = mint_for_external_document("http://www.ncbi.nlm.nih.gov/pmc/articles/", "PMC12345")
//!     .unwrap();
//! assert_eq!(uri.as_str(), "http://www.ncbi.nlm.nih.gov/pmc/articles/PMC12345");
//! ```

pub mod capability;
pub mod config;
pub mod identifier;
pub mod text;
pub mod uri;

pub use capability::{
    AdapterHandle, AnnotationHandle, AnnotationHandleMut, AttributeDecorator, AttributeExtractor,
    AttributeKind, AttributeValue, BindingKey, CapabilityError, CapabilityKind, CapabilityResult,
    DispatchRegistry, Dispatcher, EntityIdentifierDecorator, PartOfSpeech, RegistryBuilder,
    SchemaId,
};
pub use config::{ConfigError, ConfigResult, ShimConfig, StopWordSource};
pub use identifier::{
    Authority, EntityKind, IdentifierError, IdentifierResult, OtherPrefix, TypedIdentifier,
};
pub use text::{init_stop_words, remove_stop_words, stop_words, StopWordError, StopWordSet};
pub use uri::{mint, mint_for_external_document, mint_for_identifier, Namespace, Uri, UriError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
