//! Stopword resources.
//!
//! A [`StopwordSet`] is loaded once at startup, either from the built-in
//! lists shipped by the `stop-words` crate or from a plain word-list file,
//! and is immutable afterwards.

use std::path::Path;

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};
use tracing::debug;

use crate::errors::PlagiarismError;

/// An immutable set of lowercase stopwords for one language.
#[derive(Debug, Clone)]
pub struct StopwordSet {
    language: String,
    words: FxHashSet<String>,
}

impl StopwordSet {
    /// Load the built-in list for a language name or ISO 639-1 code.
    ///
    /// Supported: spanish, english, german, french, italian, portuguese,
    /// dutch, russian, swedish, norwegian, danish, finnish, hungarian,
    /// turkish, arabic. The lists are the NLTK corpus lists.
    pub fn for_language(language: &str) -> Result<Self, PlagiarismError> {
        let lang = resolve_language(language).ok_or_else(|| {
            PlagiarismError::ResourceUnavailable(format!(
                "No built-in stopword list for language '{}'",
                language
            ))
        })?;

        let set = Self::from_words(language, get(lang));
        if set.is_empty() {
            return Err(PlagiarismError::ResourceUnavailable(format!(
                "Built-in stopword list for '{}' is empty",
                language
            )));
        }

        debug!(language = %set.language, count = set.len(), "Loaded built-in stopwords");
        Ok(set)
    }

    /// Load a newline-separated word list. Blank lines and `#` comments are skipped.
    pub fn from_file(path: &Path, language: &str) -> Result<Self, PlagiarismError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PlagiarismError::ResourceUnavailable(format!(
                "Cannot read stopword file {}: {}",
                path.display(),
                e
            ))
        })?;

        let words = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'));
        let set = Self::from_words(language, words);

        if set.is_empty() {
            return Err(PlagiarismError::ResourceUnavailable(format!(
                "Stopword file {} contains no words",
                path.display()
            )));
        }

        debug!(path = %path.display(), count = set.len(), "Loaded stopword file");
        Ok(set)
    }

    /// Build a set from an explicit word list.
    pub fn from_words<I, S>(language: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            language: language.to_lowercase(),
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// A set that filters nothing.
    pub fn empty(language: &str) -> Self {
        Self::from_words(language, std::iter::empty::<&str>())
    }

    /// Return a copy extended with additional words.
    pub fn with_extra<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in extra {
            let word = word.as_ref().trim().to_lowercase();
            if !word.is_empty() {
                self.words.insert(word);
            }
        }
        self
    }

    /// Membership check for an already lowercased token.
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn resolve_language(language: &str) -> Option<LANGUAGE> {
    let lang = match language.trim().to_lowercase().as_str() {
        "es" | "spanish" => LANGUAGE::Spanish,
        "en" | "english" => LANGUAGE::English,
        "de" | "german" => LANGUAGE::German,
        "fr" | "french" => LANGUAGE::French,
        "it" | "italian" => LANGUAGE::Italian,
        "pt" | "portuguese" => LANGUAGE::Portuguese,
        "nl" | "dutch" => LANGUAGE::Dutch,
        "ru" | "russian" => LANGUAGE::Russian,
        "sv" | "swedish" => LANGUAGE::Swedish,
        "no" | "norwegian" => LANGUAGE::Norwegian,
        "da" | "danish" => LANGUAGE::Danish,
        "fi" | "finnish" => LANGUAGE::Finnish,
        "hu" | "hungarian" => LANGUAGE::Hungarian,
        "tr" | "turkish" => LANGUAGE::Turkish,
        "ar" | "arabic" => LANGUAGE::Arabic,
        _ => return None,
    };
    Some(lang)
}
