use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use super::stopwords::StopwordSet;

/// What to do with segments that contain no letters or digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PunctuationPolicy {
    /// Emit each punctuation mark as its own token.
    #[default]
    Keep,
    /// Drop punctuation-only segments.
    Discard,
}

impl PunctuationPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Keep => "keep",
            Self::Discard => "discard",
        }
    }
}

/// Splits text into lowercase word tokens with stopwords removed.
///
/// Segmentation follows Unicode word boundaries (UAX #29). Whitespace never
/// produces a token. The stopword set is injected so that callers decide
/// when and how it is loaded.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    stopwords: StopwordSet,
    punctuation: PunctuationPolicy,
}

impl Tokenizer {
    pub fn new(stopwords: StopwordSet) -> Self {
        Self {
            stopwords,
            punctuation: PunctuationPolicy::default(),
        }
    }

    pub fn with_punctuation(mut self, punctuation: PunctuationPolicy) -> Self {
        self.punctuation = punctuation;
        self
    }

    pub fn language(&self) -> &str {
        self.stopwords.language()
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    pub fn punctuation(&self) -> PunctuationPolicy {
        self.punctuation
    }

    /// Normalize `text` into an ordered token sequence.
    pub fn normalize(&self, text: &str) -> Vec<String> {
        normalize_with(text, &self.stopwords, self.punctuation)
    }
}

/// Normalize `text` with the given stopwords and the default punctuation policy.
pub fn normalize(text: &str, stopwords: &StopwordSet) -> Vec<String> {
    normalize_with(text, stopwords, PunctuationPolicy::default())
}

fn normalize_with(text: &str, stopwords: &StopwordSet, punctuation: PunctuationPolicy) -> Vec<String> {
    text.split_word_bounds()
        .filter(|segment| !segment.trim().is_empty())
        .filter(|segment| match punctuation {
            PunctuationPolicy::Keep => true,
            PunctuationPolicy::Discard => segment.chars().any(char::is_alphanumeric),
        })
        .map(str::to_lowercase)
        .filter(|token| !stopwords.contains(token))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spanish_articles() -> StopwordSet {
        StopwordSet::from_words("spanish", ["el", "la", "los", "las", "en", "por"])
    }

    #[test]
    fn test_lowercases_and_removes_stopwords() {
        let tokens = normalize("El perro corre en el parque", &spanish_articles());
        assert_eq!(tokens, vec!["perro", "corre", "parque"]);
    }

    #[test]
    fn test_capitalized_stopword_is_removed() {
        let tokens = normalize("EL Perro", &spanish_articles());
        assert_eq!(tokens, vec!["perro"]);
    }

    #[test]
    fn test_preserves_order_and_duplicates() {
        let tokens = normalize("gato perro gato", &spanish_articles());
        assert_eq!(tokens, vec!["gato", "perro", "gato"]);
    }

    #[test]
    fn test_empty_text() {
        assert!(normalize("", &spanish_articles()).is_empty());
        assert!(normalize("   \n\t ", &spanish_articles()).is_empty());
    }

    #[test]
    fn test_only_stopwords() {
        assert!(normalize("El en la por los", &spanish_articles()).is_empty());
    }

    #[test]
    fn test_only_builtin_spanish_stopwords() {
        let spanish = StopwordSet::for_language("spanish").unwrap();
        assert!(normalize("De la que el en y a los", &spanish).is_empty());
    }

    #[test]
    fn test_builtin_spanish_keeps_content_words() {
        let spanish = StopwordSet::for_language("spanish").unwrap();
        let tokens = normalize("El trabajo duro trae tiempo libre", &spanish);
        assert_eq!(tokens, vec!["trabajo", "duro", "trae", "tiempo", "libre"]);
    }

    #[test]
    fn test_punctuation_kept_as_tokens() {
        let tokens = normalize("¿Corre el perro? Sí.", &spanish_articles());
        assert_eq!(tokens, vec!["¿", "corre", "perro", "?", "sí", "."]);
    }

    #[test]
    fn test_punctuation_discarded() {
        let tokenizer = Tokenizer::new(spanish_articles())
            .with_punctuation(PunctuationPolicy::Discard);
        let tokens = tokenizer.normalize("¿Corre el perro? Sí.");
        assert_eq!(tokens, vec!["corre", "perro", "sí"]);
    }

    #[test]
    fn test_accented_words_stay_whole() {
        let tokens = normalize("Rápido océano", &StopwordSet::empty("spanish"));
        assert_eq!(tokens, vec!["rápido", "océano"]);
    }

    #[test]
    fn test_tokenizer_reports_language() {
        let tokenizer = Tokenizer::new(spanish_articles());
        assert_eq!(tokenizer.language(), "spanish");
        assert_eq!(tokenizer.punctuation(), PunctuationPolicy::Keep);
    }
}
