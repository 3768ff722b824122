//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use kolam::KolamError;
    use kolam::io::error::{WithPath, computation_error, invalid_design, invalid_input};
    use std::error::Error;
    use std::path::PathBuf;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = KolamError::FileSystem {
            path: "/tmp/lotus.json".into(),
            operation: "read design",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(invalid_design(&"empty").source().is_none());
    }

    // Tests InvalidInput error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_input_error() {
        let message = invalid_input("radius", &-1.0, &"must be positive").to_string();

        assert!(message.contains("radius"));
        assert!(message.contains("-1"));
        assert!(message.contains("must be positive"));
    }

    // Tests InputTooLarge reports count and limit
    // Verified by swapping the two numbers
    #[test]
    fn test_input_too_large_error() {
        let error = KolamError::InputTooLarge {
            points: 20_000,
            limit: 10_000,
        };
        assert_eq!(
            error.to_string(),
            "Pattern too large to analyze: 20000 points (limit 10000)"
        );
    }

    // Tests helper constructors build the expected variants
    // Verified by mapping helpers to the wrong variant
    #[test]
    fn test_helper_variants() {
        assert!(matches!(
            computation_error("centroid", &"overflow"),
            KolamError::Computation {
                operation: "centroid",
                ..
            }
        ));
        assert!(invalid_design(&"stale analysis")
            .to_string()
            .contains("stale analysis"));
    }

    // Tests JSON errors convert and pick up their path
    // Verified by overwriting an already known path
    #[test]
    fn test_json_error_path() {
        let parse: Result<serde_json::Value, _> = serde_json::from_str("{");
        let error = parse.with_path("designs/kolam.json").unwrap_err();

        match &error {
            KolamError::Json { path, .. } => {
                assert_eq!(path, &PathBuf::from("designs/kolam.json"));
            }
            _ => unreachable!("Expected Json error type"),
        }
        assert!(error.to_string().contains("designs/kolam.json"));

        let known: kolam::Result<()> = Err(error);
        match known.with_path("other.json").unwrap_err() {
            KolamError::Json { path, .. } => {
                assert_eq!(path, PathBuf::from("designs/kolam.json"));
            }
            _ => unreachable!("Expected Json error type"),
        }
    }

    // Tests non-file errors pass through with_path untouched
    // Verified by converting every error to FileSystem
    #[test]
    fn test_with_path_ignores_other_errors() {
        let result: kolam::Result<()> = Err(invalid_design(&"bad"));
        assert!(matches!(
            result.with_path("a.json"),
            Err(KolamError::InvalidDesign { .. })
        ));
    }
}
