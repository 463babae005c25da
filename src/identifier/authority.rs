//! Source authorities and entity kinds

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The authority that issued an identifier value.
///
/// The known members cover the biomedical sources consumers export to.
/// `Other` keeps the set extensible. Its payload can only be built through
/// parsing or [`Authority::other`], which map known prefixes first and
/// upper-case everything else, so an `Other` never shadows a named member
/// and survives a serde round trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Authority {
    /// NCBI Entrez Gene
    EntrezGene,
    /// UniProt knowledgebase
    UniProt,
    /// HUGO Gene Nomenclature Committee
    Hgnc,
    /// Mouse Genome Informatics
    Mgi,
    /// PubMed citation index
    PubMed,
    /// PubMed Central article archive
    Pmc,
    /// Any other authority, keyed by its canonical prefix
    Other(OtherPrefix),
}

/// Canonical prefix of an authority outside the known set.
///
/// Always upper-case, non-empty, free of whitespace and `:`, and never one of
/// the known prefixes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OtherPrefix(String);

impl OtherPrefix {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OtherPrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Authority {
    /// Stable prefix used in CURIEs and serialized forms.
    pub fn prefix(&self) -> &str {
        match self {
            Self::EntrezGene => "EG",
            Self::UniProt => "UNIPROT",
            Self::Hgnc => "HGNC",
            Self::Mgi => "MGI",
            Self::PubMed => "PMID",
            Self::Pmc => "PMC",
            Self::Other(prefix) => prefix.as_str(),
        }
    }

    /// Canonicalize an arbitrary prefix: known prefixes map to their named
    /// member, anything else becomes an upper-cased `Other`.
    pub fn other(prefix: &str) -> super::IdentifierResult<Self> {
        prefix.parse()
    }

    /// True for the authorities this crate knows by name.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl std::fmt::Display for Authority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.prefix())
    }
}

impl FromStr for Authority {
    type Err = super::IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.contains(|c: char| c == ':' || c.is_whitespace()) {
            return Err(super::IdentifierError::UnknownAuthority(s.to_string()));
        }
        let upper = trimmed.to_ascii_uppercase();
        Ok(match upper.as_str() {
            "EG" | "ENTREZ" | "ENTREZGENE" | "NCBIGENE" => Self::EntrezGene,
            "UNIPROT" => Self::UniProt,
            "HGNC" => Self::Hgnc,
            "MGI" => Self::Mgi,
            "PMID" | "PUBMED" => Self::PubMed,
            "PMC" => Self::Pmc,
            _ => Self::Other(OtherPrefix(upper)),
        })
    }
}

impl From<Authority> for String {
    fn from(authority: Authority) -> Self {
        authority.prefix().to_string()
    }
}

impl TryFrom<String> for Authority {
    type Error = super::IdentifierError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// The kind of entity an identifier decorator handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Gene,
    Protein,
    Document,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Gene => "gene",
            Self::Protein => "protein",
            Self::Document => "document",
        };
        f.write_str(name)
    }
}
