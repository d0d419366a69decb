//! Text normalization: word segmentation, case folding and stopword removal.

pub mod stopwords;
pub mod tokenizer;

pub use stopwords::StopwordSet;
pub use tokenizer::{normalize, PunctuationPolicy, Tokenizer};
