use std::path::Path;

use tracing::{info, warn};

use super::schema::CONFIG_SCHEMA;
use super::types::{DetectionConfig, PlagcheckConfig};
use crate::errors::PlagiarismError;
use crate::nlp::{StopwordSet, Tokenizer};
use crate::similarity::{Detector, Threshold};

pub async fn parse_config(path: &Path) -> Result<PlagcheckConfig, PlagiarismError> {
    if !path.exists() {
        return Err(PlagiarismError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > 1_048_576 {
        return Err(PlagiarismError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    let yaml: serde_yaml::Value = serde_yaml::from_str(&content)?;

    // An empty file parses as null
    if yaml.is_null() {
        return Ok(PlagcheckConfig::default());
    }

    // JSON Schema validation
    validate_schema(&yaml)?;

    // Parse into typed config
    let config: PlagcheckConfig = serde_yaml::from_value(yaml)?;

    validate_semantics(&config)?;

    Ok(config)
}

/// Validate config against the JSON schema for structural correctness.
fn validate_schema(yaml: &serde_yaml::Value) -> Result<(), PlagiarismError> {
    let json_value: serde_json::Value = serde_json::to_value(yaml)
        .map_err(|e| PlagiarismError::Config(format!("Config conversion error: {}", e)))?;

    let compiled = jsonschema::JSONSchema::compile(&CONFIG_SCHEMA)
        .map_err(|e| PlagiarismError::Config(format!("Schema compilation error: {}", e)))?;

    let result = compiled.validate(&json_value);
    if let Err(errors) = result {
        // Advisory only: typed parsing and semantic checks decide validity
        for e in errors {
            warn!(validation_error = %e, path = %e.instance_path, "Config schema warning");
        }
    }

    Ok(())
}

/// Reject values that parse but cannot be served.
fn validate_semantics(config: &PlagcheckConfig) -> Result<(), PlagiarismError> {
    if let Some(detection) = &config.detection {
        Threshold::new(detection.threshold, detection.threshold_policy)?;

        if detection.language.trim().is_empty() && detection.stopwords_file.is_none() {
            return Err(PlagiarismError::Config(
                "detection.language must not be empty".into(),
            ));
        }
    }

    if let Some(server) = &config.server {
        if server.port == 0 {
            return Err(PlagiarismError::Config("server.port must be non-zero".into()));
        }
        if server.request_timeout_secs == 0 {
            return Err(PlagiarismError::Config(
                "server.request_timeout_secs must be at least 1".into(),
            ));
        }
        if server.max_body_bytes == 0 {
            return Err(PlagiarismError::Config(
                "server.max_body_bytes must be at least 1".into(),
            ));
        }
    }

    Ok(())
}

/// Load the stopword resource and assemble a detector.
///
/// Any failure to obtain stopwords is `ResourceUnavailable`, which callers
/// treat as fatal before serving.
pub fn build_detector(detection: &DetectionConfig) -> Result<Detector, PlagiarismError> {
    let threshold = Threshold::new(detection.threshold, detection.threshold_policy)?;

    let stopwords = match &detection.stopwords_file {
        Some(path) => StopwordSet::from_file(path, &detection.language)?,
        None => StopwordSet::for_language(&detection.language)?,
    }
    .with_extra(&detection.extra_stopwords);

    info!(
        language = %stopwords.language(),
        stopwords = stopwords.len(),
        threshold = threshold.value(),
        policy = threshold.policy().as_str(),
        punctuation = detection.punctuation.as_str(),
        diagnostics = detection.diagnostics,
        "Detector ready"
    );

    let tokenizer = Tokenizer::new(stopwords).with_punctuation(detection.punctuation);
    Ok(Detector::new(tokenizer, threshold).with_diagnostics(detection.diagnostics))
}
