//! Toy schema adapters shared by the capability unit tests

use super::error::{CapabilityError, CapabilityResult};
use super::handle::{AnnotationHandle, AnnotationHandleMut};
use super::kinds::{AttributeKind, AttributeValue, PartOfSpeech, SchemaId};
use super::traits::{AttributeDecorator, AttributeExtractor, EntityIdentifierDecorator};
use crate::identifier::{Authority, EntityKind, TypedIdentifier};

/// Token representation of the toy schema
#[derive(Debug, Default)]
pub struct ToyToken {
    pub pos: Vec<String>,
    pub lemma: Option<String>,
}

/// Gene mention representation of the toy schema
#[derive(Debug, Default)]
pub struct ToyGene {
    pub ids: Vec<TypedIdentifier>,
}

pub struct PosExtractor {
    schema: SchemaId,
}

impl PosExtractor {
    pub fn new(schema: &str) -> Self {
        Self {
            schema: schema.into(),
        }
    }
}

impl AttributeExtractor for PosExtractor {
    fn schema(&self) -> &SchemaId {
        &self.schema
    }

    fn supported_kinds(&self) -> &[AttributeKind] {
        &[AttributeKind::PartOfSpeech]
    }

    fn extract(
        &self,
        annotation: &AnnotationHandle<'_>,
        kind: AttributeKind,
    ) -> CapabilityResult<Vec<AttributeValue>> {
        let token = annotation.data::<ToyToken>()?;
        if kind != AttributeKind::PartOfSpeech {
            return Ok(Vec::new());
        }
        Ok(token
            .pos
            .iter()
            .map(|tag| PartOfSpeech::new(tag.as_str()).into())
            .collect())
    }
}

pub struct PosWriter {
    schema: SchemaId,
    kinds: Vec<AttributeKind>,
}

impl PosWriter {
    pub fn new(schema: &str) -> Self {
        Self::with_kinds(schema, vec![AttributeKind::PartOfSpeech])
    }

    pub fn with_kinds(schema: &str, kinds: Vec<AttributeKind>) -> Self {
        Self {
            schema: schema.into(),
            kinds,
        }
    }
}

impl AttributeDecorator for PosWriter {
    fn schema(&self) -> &SchemaId {
        &self.schema
    }

    fn supported_kinds(&self) -> &[AttributeKind] {
        &self.kinds
    }

    fn decorate(
        &self,
        annotation: &mut AnnotationHandleMut<'_>,
        value: &AttributeValue,
    ) -> CapabilityResult<()> {
        let token = annotation.data_mut::<ToyToken>()?;
        match value {
            AttributeValue::PartOfSpeech(pos) => token.pos.push(pos.tag.clone()),
            AttributeValue::Lemma(lemma) => token.lemma = Some(lemma.clone()),
            other => {
                return Err(CapabilityError::AttributeKindMismatch {
                    expected: AttributeKind::PartOfSpeech,
                    actual: other.kind(),
                })
            }
        }
        Ok(())
    }
}

pub struct GeneIdAdapter {
    schema: SchemaId,
    authorities: Vec<Authority>,
}

impl GeneIdAdapter {
    pub fn new(schema: &str, authorities: Vec<Authority>) -> Self {
        Self {
            schema: schema.into(),
            authorities,
        }
    }
}

impl EntityIdentifierDecorator for GeneIdAdapter {
    fn schema(&self) -> &SchemaId {
        &self.schema
    }

    fn entity_kind(&self) -> EntityKind {
        EntityKind::Gene
    }

    fn supported_authorities(&self) -> &[Authority] {
        &self.authorities
    }

    fn attach_identifier(
        &self,
        annotation: &mut AnnotationHandleMut<'_>,
        identifier: &TypedIdentifier,
    ) -> CapabilityResult<()> {
        self.check_authority(identifier)?;
        annotation.data_mut::<ToyGene>()?.ids.push(identifier.clone());
        Ok(())
    }
}
