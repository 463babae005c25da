//! Capability keys and normalized attribute values

use crate::identifier::EntityKind;
use serde::{Deserialize, Serialize};

/// Identity of an upstream annotation schema (a type system, a token model).
///
/// Serializes as a plain string such as `"ccp-token"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaId(String);

impl SchemaId {
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SchemaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SchemaId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for SchemaId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Normalized attribute categories a consumer can request.
///
/// Adding a kind never changes the meaning of the existing ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKind {
    PartOfSpeech,
    Lemma,
    Stem,
}

impl std::fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::PartOfSpeech => "part_of_speech",
            Self::Lemma => "lemma",
            Self::Stem => "stem",
        };
        f.write_str(name)
    }
}

/// A part-of-speech tag. Position comes from the host annotation, not from here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PartOfSpeech {
    /// The tag itself, e.g. `NN`
    pub tag: String,
    /// Tag set the tag belongs to, e.g. `penn`, when the schema records it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_set: Option<String>,
}

impl PartOfSpeech {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            tag_set: None,
        }
    }

    pub fn with_tag_set(mut self, tag_set: impl Into<String>) -> Self {
        self.tag_set = Some(tag_set.into());
        self
    }
}

/// A normalized attribute value; the variant determines its kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum AttributeValue {
    PartOfSpeech(PartOfSpeech),
    Lemma(String),
    Stem(String),
}

impl AttributeValue {
    pub fn kind(&self) -> AttributeKind {
        match self {
            Self::PartOfSpeech(_) => AttributeKind::PartOfSpeech,
            Self::Lemma(_) => AttributeKind::Lemma,
            Self::Stem(_) => AttributeKind::Stem,
        }
    }

    pub fn as_part_of_speech(&self) -> Option<&PartOfSpeech> {
        match self {
            Self::PartOfSpeech(pos) => Some(pos),
            _ => None,
        }
    }
}

impl From<PartOfSpeech> for AttributeValue {
    fn from(pos: PartOfSpeech) -> Self {
        Self::PartOfSpeech(pos)
    }
}

/// A capability an adapter can provide, keyed by what it operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "capability", content = "key", rename_all = "snake_case")]
pub enum CapabilityKind {
    /// Read attributes of this kind
    Extract(AttributeKind),
    /// Write attributes of this kind
    Decorate(AttributeKind),
    /// Attach identifiers to entities of this kind
    IdentifyEntity(EntityKind),
}

impl std::fmt::Display for CapabilityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Extract(kind) => write!(f, "extract({})", kind),
            Self::Decorate(kind) => write!(f, "decorate({})", kind),
            Self::IdentifyEntity(kind) => write!(f, "identify({})", kind),
        }
    }
}
