//! Toy schema adapters

use annoshim::{
    AnnotationHandle, AnnotationHandleMut, AttributeDecorator, AttributeExtractor, AttributeKind,
    AttributeValue, Authority, CapabilityError, CapabilityResult, DispatchRegistry,
    EntityIdentifierDecorator, EntityKind, PartOfSpeech, RegistryBuilder, SchemaId,
    TypedIdentifier,
};
use std::collections::BTreeMap;
use std::sync::Arc;

pub const CCP: &str = "ccp-token";
pub const CLEARTK: &str = "cleartk-token";

// ============================================================================
// CCP-style schema: tag list, Entrez-only gene mentions
// ============================================================================

#[derive(Debug, Default, Clone)]
pub struct CcpToken {
    pub pos_tags: Vec<String>,
}

impl CcpToken {
    pub fn new(tags: &[&str]) -> Self {
        Self {
            pos_tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct CcpGene {
    pub entrez_ids: Vec<String>,
}

pub struct CcpTokenAdapter {
    schema: SchemaId,
}

impl CcpTokenAdapter {
    pub fn new() -> Self {
        Self { schema: CCP.into() }
    }
}

impl AttributeExtractor for CcpTokenAdapter {
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
        let token = annotation.data::<CcpToken>()?;
        match kind {
            AttributeKind::PartOfSpeech => Ok(token
                .pos_tags
                .iter()
                .map(|tag| PartOfSpeech::new(tag.as_str()).with_tag_set("penn").into())
                .collect()),
            _ => Ok(Vec::new()),
        }
    }
}

impl AttributeDecorator for CcpTokenAdapter {
    fn schema(&self) -> &SchemaId {
        &self.schema
    }

    fn supported_kinds(&self) -> &[AttributeKind] {
        &[AttributeKind::PartOfSpeech]
    }

    fn decorate(
        &self,
        annotation: &mut AnnotationHandleMut<'_>,
        value: &AttributeValue,
    ) -> CapabilityResult<()> {
        let pos = value
            .as_part_of_speech()
            .ok_or(CapabilityError::AttributeKindMismatch {
                expected: AttributeKind::PartOfSpeech,
                actual: value.kind(),
            })?;
        annotation.data_mut::<CcpToken>()?.pos_tags.push(pos.tag.clone());
        Ok(())
    }
}

pub struct CcpGeneAdapter {
    schema: SchemaId,
}

impl CcpGeneAdapter {
    pub fn new() -> Self {
        Self { schema: CCP.into() }
    }
}

impl EntityIdentifierDecorator for CcpGeneAdapter {
    fn schema(&self) -> &SchemaId {
        &self.schema
    }

    fn entity_kind(&self) -> EntityKind {
        EntityKind::Gene
    }

    fn supported_authorities(&self) -> &[Authority] {
        &[Authority::EntrezGene]
    }

    fn attach_identifier(
        &self,
        annotation: &mut AnnotationHandleMut<'_>,
        identifier: &TypedIdentifier,
    ) -> CapabilityResult<()> {
        self.check_authority(identifier)?;
        annotation
            .data_mut::<CcpGene>()?
            .entrez_ids
            .push(identifier.value().to_string());
        Ok(())
    }
}

// ============================================================================
// ClearTK-style schema: single tag plus lemma, multi-authority gene mentions
// ============================================================================

#[derive(Debug, Default, Clone)]
pub struct ClearTkToken {
    pub pos: Option<String>,
    pub lemma: Option<String>,
}

impl ClearTkToken {
    pub fn new(pos: Option<&str>) -> Self {
        Self {
            pos: pos.map(str::to_string),
            lemma: None,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct ClearTkGene {
    /// authority prefix -> identifier value
    pub ids: BTreeMap<String, String>,
}

pub struct ClearTkTokenAdapter {
    schema: SchemaId,
}

impl ClearTkTokenAdapter {
    pub fn new() -> Self {
        Self {
            schema: CLEARTK.into(),
        }
    }
}

impl AttributeExtractor for ClearTkTokenAdapter {
    fn schema(&self) -> &SchemaId {
        &self.schema
    }

    fn supported_kinds(&self) -> &[AttributeKind] {
        &[AttributeKind::PartOfSpeech, AttributeKind::Lemma]
    }

    fn extract(
        &self,
        annotation: &AnnotationHandle<'_>,
        kind: AttributeKind,
    ) -> CapabilityResult<Vec<AttributeValue>> {
        let token = annotation.data::<ClearTkToken>()?;
        let value = match kind {
            AttributeKind::PartOfSpeech => token
                .pos
                .as_ref()
                .map(|tag| AttributeValue::PartOfSpeech(PartOfSpeech::new(tag.as_str()))),
            AttributeKind::Lemma => token.lemma.clone().map(AttributeValue::Lemma),
            AttributeKind::Stem => None,
        };
        Ok(value.into_iter().collect())
    }
}

impl AttributeDecorator for ClearTkTokenAdapter {
    fn schema(&self) -> &SchemaId {
        &self.schema
    }

    fn supported_kinds(&self) -> &[AttributeKind] {
        &[AttributeKind::PartOfSpeech, AttributeKind::Lemma]
    }

    fn decorate(
        &self,
        annotation: &mut AnnotationHandleMut<'_>,
        value: &AttributeValue,
    ) -> CapabilityResult<()> {
        let token = annotation.data_mut::<ClearTkToken>()?;
        match value {
            AttributeValue::PartOfSpeech(pos) => token.pos = Some(pos.tag.clone()),
            AttributeValue::Lemma(lemma) => token.lemma = Some(lemma.clone()),
            AttributeValue::Stem(_) => {
                return Err(CapabilityError::AttributeKindMismatch {
                    expected: AttributeKind::PartOfSpeech,
                    actual: AttributeKind::Stem,
                })
            }
        }
        Ok(())
    }
}

pub struct ClearTkGeneAdapter {
    schema: SchemaId,
}

impl ClearTkGeneAdapter {
    pub fn new() -> Self {
        Self {
            schema: CLEARTK.into(),
        }
    }
}

impl EntityIdentifierDecorator for ClearTkGeneAdapter {
    fn schema(&self) -> &SchemaId {
        &self.schema
    }

    fn entity_kind(&self) -> EntityKind {
        EntityKind::Gene
    }

    fn supported_authorities(&self) -> &[Authority] {
        &[Authority::EntrezGene, Authority::UniProt, Authority::Hgnc]
    }

    fn attach_identifier(
        &self,
        annotation: &mut AnnotationHandleMut<'_>,
        identifier: &TypedIdentifier,
    ) -> CapabilityResult<()> {
        self.check_authority(identifier)?;
        annotation.data_mut::<ClearTkGene>()?.ids.insert(
            identifier.authority().prefix().to_string(),
            identifier.value().to_string(),
        );
        Ok(())
    }
}

// ============================================================================
// Registries
// ============================================================================

fn register_ccp(builder: &mut RegistryBuilder) {
    let tokens = Arc::new(CcpTokenAdapter::new());
    builder.register_extractor(tokens.clone()).unwrap();
    builder.register_decorator(tokens).unwrap();
    builder
        .register_identifier_decorator(Arc::new(CcpGeneAdapter::new()))
        .unwrap();
}

fn register_cleartk(builder: &mut RegistryBuilder) {
    let tokens = Arc::new(ClearTkTokenAdapter::new());
    builder.register_extractor(tokens.clone()).unwrap();
    builder.register_decorator(tokens).unwrap();
    builder
        .register_identifier_decorator(Arc::new(ClearTkGeneAdapter::new()))
        .unwrap();
}

/// Registry with only the CCP-style schema bound
pub fn ccp_registry() -> DispatchRegistry {
    let mut builder = RegistryBuilder::new();
    register_ccp(&mut builder);
    builder.build().unwrap()
}

/// Registry with both schemas bound
pub fn two_schema_registry() -> DispatchRegistry {
    let mut builder = RegistryBuilder::new();
    register_ccp(&mut builder);
    register_cleartk(&mut builder);
    builder.build().unwrap()
}
