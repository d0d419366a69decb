use serde::Serialize;
use tracing::debug;

use super::bigrams::{bigrams_of, BigramSet};
use super::jaccard::jaccard;
use super::threshold::Threshold;
use crate::nlp::{StopwordSet, Tokenizer};

/// Outcome of comparing one suspect text against one original.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub coefficient: f64,
    pub result: bool,
    /// Both bigram sets were empty and the coefficient was defaulted to 0.
    pub empty: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suspect_bigrams: Option<BigramSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_bigrams: Option<BigramSet>,
}

/// Decides whether a suspect text may plagiarize an original.
///
/// Built once at startup and shared read-only between requests.
#[derive(Debug, Clone)]
pub struct Detector {
    tokenizer: Tokenizer,
    threshold: Threshold,
    diagnostics: bool,
}

impl Detector {
    pub fn new(tokenizer: Tokenizer, threshold: Threshold) -> Self {
        Self {
            tokenizer,
            threshold,
            diagnostics: false,
        }
    }

    /// Keep intermediate bigram sets in each [`Comparison`] and trace them.
    pub fn with_diagnostics(mut self, diagnostics: bool) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    pub fn diagnostics(&self) -> bool {
        self.diagnostics
    }

    pub fn bigrams(&self, text: &str) -> BigramSet {
        bigrams_of(&self.tokenizer.normalize(text))
    }

    pub fn compare(&self, suspect: &str, original: &str) -> Comparison {
        let original_bigrams = self.bigrams(original);
        let suspect_bigrams = self.bigrams(suspect);

        if self.diagnostics {
            debug!(bigrams = ?original_bigrams, "Original bigrams");
            debug!(bigrams = ?suspect_bigrams, "Suspect bigrams");
        }

        let (coefficient, empty) = match jaccard(&suspect_bigrams, &original_bigrams) {
            Ok(coefficient) => (coefficient, false),
            Err(err) => {
                debug!(error = %err, "No bigrams on either side, treating as not plagiarism");
                (0.0, true)
            }
        };
        let result = !empty && self.threshold.is_exceeded_by(coefficient);

        debug!(
            coefficient,
            result,
            threshold = self.threshold.value(),
            policy = self.threshold.policy().as_str(),
            "Compared texts"
        );

        let (suspect_bigrams, original_bigrams) = if self.diagnostics {
            (Some(suspect_bigrams), Some(original_bigrams))
        } else {
            (None, None)
        };

        Comparison {
            coefficient,
            result,
            empty,
            suspect_bigrams,
            original_bigrams,
        }
    }

    pub fn may_be_plagiarism_of(&self, suspect: &str, original: &str) -> bool {
        self.compare(suspect, original).result
    }
}

/// Pure decision with a strict threshold: `jaccard(suspect, original) > threshold`.
///
/// When neither text yields a bigram the answer is `false`.
pub fn may_be_plagiarism_of(
    suspect: &str,
    original: &str,
    stopwords: &StopwordSet,
    threshold: f64,
) -> bool {
    let suspect_bigrams = bigrams_of(&crate::nlp::normalize(suspect, stopwords));
    let original_bigrams = bigrams_of(&crate::nlp::normalize(original, stopwords));

    jaccard(&suspect_bigrams, &original_bigrams)
        .map(|coefficient| coefficient > threshold)
        .unwrap_or(false)
}
