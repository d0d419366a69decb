//! Bigram Jaccard similarity and the plagiarism decision built on it.

pub mod bigrams;
pub mod detector;
pub mod jaccard;
pub mod threshold;

pub use bigrams::{bigrams_of, Bigram, BigramSet};
pub use detector::{may_be_plagiarism_of, Comparison, Detector};
pub use jaccard::jaccard;
pub use threshold::{Threshold, ThresholdPolicy, DEFAULT_THRESHOLD};
