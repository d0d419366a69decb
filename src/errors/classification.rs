use super::types::PlagiarismError;

#[derive(Debug, Clone)]
pub struct ErrorClassification {
    pub error_type: &'static str,
    /// True when the caller can fix the failure by changing what it sent.
    pub client_fault: bool,
}

impl PlagiarismError {
    /// Classify this error by type name and by who is responsible for it.
    pub fn classify(&self) -> ErrorClassification {
        match self {
            // Caller-caused
            PlagiarismError::InvalidInput(_) => ErrorClassification {
                error_type: "InvalidInput",
                client_fault: true,
            },
            PlagiarismError::Config(_) => ErrorClassification {
                error_type: "ConfigError",
                client_fault: true,
            },
            PlagiarismError::Yaml(_) => ErrorClassification {
                error_type: "YamlError",
                client_fault: true,
            },

            // Server-side
            PlagiarismError::EmptyComparison(_) => ErrorClassification {
                error_type: "EmptyComparison",
                client_fault: false,
            },
            PlagiarismError::ResourceUnavailable(_) => ErrorClassification {
                error_type: "ResourceUnavailable",
                client_fault: false,
            },
            PlagiarismError::Json(_) => ErrorClassification {
                error_type: "JsonError",
                client_fault: false,
            },
            PlagiarismError::Io(_) => ErrorClassification {
                error_type: "IoError",
                client_fault: false,
            },
            PlagiarismError::Internal(_) => ErrorClassification {
                error_type: "InternalError",
                client_fault: false,
            },
        }
    }

    /// Process exit code used by the binary for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            PlagiarismError::Config(_) | PlagiarismError::Yaml(_) => 2,
            PlagiarismError::ResourceUnavailable(_) => 3,
            PlagiarismError::InvalidInput(_) => 4,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_is_client_fault() {
        let err = PlagiarismError::InvalidInput("missing suspicious_text".into());
        let class = err.classify();
        assert!(class.client_fault);
        assert_eq!(class.error_type, "InvalidInput");
    }

    #[test]
    fn test_resource_unavailable_is_server_fault() {
        let err = PlagiarismError::ResourceUnavailable("no stopwords for klingon".into());
        let class = err.classify();
        assert!(!class.client_fault);
        assert_eq!(class.error_type, "ResourceUnavailable");
    }

    #[test]
    fn test_empty_comparison_classification() {
        let err = PlagiarismError::EmptyComparison("both bigram sets are empty".into());
        assert_eq!(err.classify().error_type, "EmptyComparison");
        assert!(!err.classify().client_fault);
    }

    #[test]
    fn test_config_error_is_client_fault() {
        let err = PlagiarismError::Config("threshold out of range".into());
        assert!(err.classify().client_fault);
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(PlagiarismError::Config("x".into()).exit_code(), 2);
        assert_eq!(PlagiarismError::ResourceUnavailable("x".into()).exit_code(), 3);
        assert_eq!(PlagiarismError::InvalidInput("x".into()).exit_code(), 4);
        assert_eq!(PlagiarismError::Internal("x".into()).exit_code(), 1);
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: PlagiarismError = io.into();
        assert_eq!(err.classify().error_type, "IoError");
    }
}
