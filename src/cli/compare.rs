use crate::cli::commands::CompareArgs;
use crate::cli::{apply_overrides, load_config};
use crate::config::build_detector;
use crate::errors::PlagiarismError;
use tracing::info;

pub async fn handle_compare(config_path: Option<&str>, args: CompareArgs) -> Result<(), PlagiarismError> {
    let mut config = load_config(config_path).await?;
    apply_overrides(&mut config, &args.detection);

    let detector = build_detector(&config.detection())?;

    let original = read_text(&args.original).await?;
    let suspect = read_text(&args.suspect).await?;

    let comparison = detector.compare(&suspect, &original);
    info!(
        original = %args.original,
        suspect = %args.suspect,
        coefficient = comparison.coefficient,
        result = comparison.result,
        "Comparison finished"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&comparison)?);
    } else {
        println!("Coefficient: {:.4}", comparison.coefficient);
        println!(
            "Threshold: {} ({})",
            detector.threshold().value(),
            detector.threshold().policy().as_str()
        );
        if comparison.empty {
            println!("Note: neither text produced any bigram");
        }
        println!(
            "Result: {}",
            if comparison.result { "possible plagiarism" } else { "no plagiarism detected" }
        );
    }

    Ok(())
}

async fn read_text(path: &str) -> Result<String, PlagiarismError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| PlagiarismError::InvalidInput(format!("Cannot read {}: {}", path, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::DetectionOverrides;
    use std::io::Write;

    fn text_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn args(original: &str, suspect: &str, json: bool) -> CompareArgs {
        CompareArgs {
            original: original.to_string(),
            suspect: suspect.to_string(),
            json,
            detection: DetectionOverrides::default(),
        }
    }

    #[tokio::test]
    async fn test_read_text_missing_file_is_invalid_input() {
        let err = read_text("/nonexistent/original.txt").await.unwrap_err();
        assert!(matches!(err, PlagiarismError::InvalidInput(_)));
        assert!(err.to_string().contains("/nonexistent/original.txt"));
    }

    #[tokio::test]
    async fn test_read_text_returns_content() {
        let file = text_file("El perro corre en el parque");
        let path = file.path().to_str().unwrap();
        assert_eq!(read_text(path).await.unwrap(), "El perro corre en el parque");
    }

    #[tokio::test]
    async fn test_compare_two_files() {
        let original = text_file("El perro corre en el parque");
        let suspect = text_file("El perro corre rápido en el parque");
        let original_path = original.path().to_str().unwrap();
        let suspect_path = suspect.path().to_str().unwrap();

        handle_compare(None, args(original_path, suspect_path, false)).await.unwrap();
        handle_compare(None, args(original_path, suspect_path, true)).await.unwrap();
    }

    #[tokio::test]
    async fn test_compare_missing_suspect_fails() {
        let original = text_file("El perro corre en el parque");
        let original_path = original.path().to_str().unwrap();

        let err = handle_compare(None, args(original_path, "/nonexistent/suspect.txt", false))
            .await
            .unwrap_err();
        assert!(matches!(err, PlagiarismError::InvalidInput(_)));
    }
}
