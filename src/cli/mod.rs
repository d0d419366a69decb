pub mod commands;
pub mod compare;
pub mod serve;

pub use commands::{Cli, Commands};

use std::path::Path;

use crate::config::{parse_config, PlagcheckConfig};
use crate::errors::PlagiarismError;
use crate::similarity::ThresholdPolicy;
use commands::DetectionOverrides;

/// Load the configuration file if one was given, otherwise defaults.
pub async fn load_config(path: Option<&str>) -> Result<PlagcheckConfig, PlagiarismError> {
    match path {
        Some(path) => parse_config(Path::new(path)).await,
        None => Ok(PlagcheckConfig::default()),
    }
}

/// Apply command-line detection overrides on top of the file configuration.
pub fn apply_overrides(config: &mut PlagcheckConfig, overrides: &DetectionOverrides) {
    let mut detection = config.detection();
    if let Some(language) = &overrides.language {
        detection.language = language.clone();
    }
    if let Some(threshold) = overrides.threshold {
        detection.threshold = threshold;
    }
    if overrides.inclusive {
        detection.threshold_policy = ThresholdPolicy::Inclusive;
    }
    if overrides.diagnostics {
        detection.diagnostics = true;
    }
    config.detection = Some(detection);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_file_values() {
        let mut config = PlagcheckConfig::default();
        let overrides = DetectionOverrides {
            language: Some("english".into()),
            threshold: Some(0.5),
            inclusive: true,
            diagnostics: false,
        };
        apply_overrides(&mut config, &overrides);
        let detection = config.detection();
        assert_eq!(detection.language, "english");
        assert_eq!(detection.threshold, 0.5);
        assert_eq!(detection.threshold_policy, ThresholdPolicy::Inclusive);
        assert!(!detection.diagnostics);
    }

    #[test]
    fn test_empty_overrides_keep_defaults() {
        let mut config = PlagcheckConfig::default();
        apply_overrides(&mut config, &DetectionOverrides::default());
        let detection = config.detection();
        assert_eq!(detection.language, "spanish");
        assert_eq!(detection.threshold, 0.2);
    }

    #[tokio::test]
    async fn test_load_config_without_path() {
        let config = load_config(None).await.unwrap();
        assert!(config.detection.is_none());
    }
}
