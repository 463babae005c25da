//! Well-known namespaces

use crate::identifier::Authority;
use serde::{Deserialize, Serialize};

/// A namespace whose base URI prefixes minted local names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Namespace {
    EntrezGene,
    UniProt,
    Hgnc,
    Mgi,
    PubMed,
    Pmc,
    Rdf,
    Rdfs,
    Owl,
    /// Caller-supplied base, validated at mint time
    Custom(String),
}

impl Namespace {
    pub fn base(&self) -> &str {
        match self {
            Self::EntrezGene => "http://www.ncbi.nlm.nih.gov/gene/",
            Self::UniProt => "http://purl.uniprot.org/uniprot/",
            Self::Hgnc => "http://identifiers.org/hgnc/",
            Self::Mgi => "http://identifiers.org/mgi/",
            Self::PubMed => "http://www.ncbi.nlm.nih.gov/pubmed/",
            Self::Pmc => "http://www.ncbi.nlm.nih.gov/pmc/articles/",
            Self::Rdf => "http://www.w3.org/1999/02/22-rdf-syntax-ns#",
            Self::Rdfs => "http://www.w3.org/2000/01/rdf-schema#",
            Self::Owl => "http://www.w3.org/2002/07/owl#",
            Self::Custom(base) => base,
        }
    }

    /// The namespace identifiers from `authority` are minted under.
    ///
    /// `Authority::Other` has no canonical namespace.
    pub fn for_authority(authority: &Authority) -> Option<Self> {
        match authority {
            Authority::EntrezGene => Some(Self::EntrezGene),
            Authority::UniProt => Some(Self::UniProt),
            Authority::Hgnc => Some(Self::Hgnc),
            Authority::Mgi => Some(Self::Mgi),
            Authority::PubMed => Some(Self::PubMed),
            Authority::Pmc => Some(Self::Pmc),
            Authority::Other(_) => None,
        }
    }
}
