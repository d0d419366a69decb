use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::nlp::PunctuationPolicy;
use crate::similarity::{ThresholdPolicy, DEFAULT_THRESHOLD};

pub const DEFAULT_LANGUAGE: &str = "spanish";

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct PlagcheckConfig {
    pub detection: Option<DetectionConfig>,
    pub server: Option<ServerConfig>,
}

impl PlagcheckConfig {
    /// Detection settings, falling back to defaults when the section is absent.
    pub fn detection(&self) -> DetectionConfig {
        self.detection.clone().unwrap_or_default()
    }

    pub fn server(&self) -> ServerConfig {
        self.server.clone().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DetectionConfig {
    pub language: String,
    pub threshold: f64,
    pub threshold_policy: ThresholdPolicy,
    pub punctuation: PunctuationPolicy,
    /// Replaces the built-in list for `language` when set.
    pub stopwords_file: Option<PathBuf>,
    pub extra_stopwords: Vec<String>,
    pub diagnostics: bool,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            threshold: DEFAULT_THRESHOLD,
            threshold_policy: ThresholdPolicy::Strict,
            punctuation: PunctuationPolicy::Keep,
            stopwords_file: None,
            extra_stopwords: Vec::new(),
            diagnostics: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout_secs: u64,
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            request_timeout_secs: 10,
            max_body_bytes: 1_048_576,
        }
    }
}
