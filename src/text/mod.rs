//! Text normalization applied before attribute extraction

mod stopwords;

pub use stopwords::{
    init_stop_words, remove_stop_words, stop_words, StopWordError, StopWordResult, StopWordSet,
};
