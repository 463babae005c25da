//! Stop-word filtering
//!
//! A `StopWordSet` is an immutable set of lowercase tokens. The process-wide
//! set is initialised at most once, either explicitly through
//! [`init_stop_words`] at startup or lazily with the built-in list on first
//! read, and is never mutated afterwards.

use std::collections::HashSet;
use std::io::BufRead;
use std::path::Path;
use std::sync::{LazyLock, OnceLock};
use thiserror::Error;

/// Errors from stop-word set loading and initialisation
#[derive(Debug, Error)]
pub enum StopWordError {
    #[error("process-wide stop-word set is already initialised")]
    AlreadyInitialized,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for stop-word operations
pub type StopWordResult<T> = Result<T, StopWordError>;

/// Built-in English list used for biomedical abstracts.
const BUILTIN_WORDS: &[&str] = &[
    "a", "about", "again", "all", "almost", "also", "although", "always", "among", "an",
    "and", "another", "any", "are", "as", "at", "be", "because", "been", "before", "being",
    "between", "both", "but", "by", "can", "could", "did", "do", "does", "done", "due",
    "during", "each", "either", "enough", "especially", "etc", "for", "found", "from",
    "further", "had", "has", "have", "having", "here", "how", "however", "i", "if", "in",
    "into", "is", "it", "its", "itself", "just", "kg", "km", "made", "mainly", "make", "may",
    "mg", "might", "ml", "mm", "most", "mostly", "must", "nearly", "neither", "no", "nor",
    "obtained", "of", "often", "on", "our", "overall", "perhaps", "quite", "rather",
    "really", "regarding", "seem", "seen", "several", "should", "show", "showed", "shown",
    "shows", "significantly", "since", "so", "some", "such", "than", "that", "the", "their",
    "theirs", "them", "then", "there", "therefore", "these", "they", "this", "those",
    "through", "thus", "to", "upon", "use", "used", "using", "various", "very", "was", "we",
    "were", "what", "when", "which", "while", "with", "within", "without", "would",
];

static BUILTIN: LazyLock<StopWordSet> = LazyLock::new(|| StopWordSet::from_words(BUILTIN_WORDS));

static GLOBAL: OnceLock<StopWordSet> = OnceLock::new();

/// An immutable set of lowercase stop words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWordSet {
    words: HashSet<String>,
}

impl StopWordSet {
    /// The built-in list.
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Build a set from arbitrary words; each is trimmed and lower-cased.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Read one word per line. Blank lines and `#` comments are skipped.
    pub fn from_reader(reader: impl BufRead) -> StopWordResult<Self> {
        let mut lines = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if word.is_empty() || word.starts_with('#') {
                continue;
            }
            lines.push(word.to_string());
        }
        Ok(Self::from_words(lines))
    }

    /// Load a word-per-line file.
    pub fn from_file(path: impl AsRef<Path>) -> StopWordResult<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(&token.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Drop every whitespace-separated token that is a stop word and rejoin
    /// the survivors with single spaces, in order.
    ///
    /// Tokens are not stripped of punctuation: `"the,cat"` is one token and
    /// survives.
    pub fn filter(&self, text: &str) -> String {
        let kept: Vec<&str> = text
            .split_whitespace()
            .filter(|token| !self.contains(token))
            .collect();
        kept.join(" ")
    }
}

/// Install the process-wide set.
///
/// Must happen before the first call to [`stop_words`] or
/// [`remove_stop_words`]; afterwards the set is frozen and this fails with
/// [`StopWordError::AlreadyInitialized`].
pub fn init_stop_words(set: StopWordSet) -> StopWordResult<()> {
    let size = set.len();
    GLOBAL
        .set(set)
        .map_err(|_| StopWordError::AlreadyInitialized)?;
    tracing::info!(size, "process-wide stop-word set initialised");
    Ok(())
}

/// The process-wide set, falling back to the built-in list on first read.
pub fn stop_words() -> &'static StopWordSet {
    GLOBAL.get_or_init(|| {
        tracing::info!(size = BUILTIN.len(), "using built-in stop-word set");
        StopWordSet::builtin()
    })
}

/// Remove stop words using the process-wide set. Total over any input.
pub fn remove_stop_words(text: &str) -> String {
    stop_words().filter(text)
}
