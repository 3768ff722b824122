//! Tests for design file parsing, validation and persistence

#[cfg(test)]
mod tests {
    use kolam::KolamError;
    use kolam::analysis::symmetry::{Symmetry, SymmetryAnalyzer};
    use kolam::generation::presets::{Style, generate_seeded};
    use kolam::generation::shapes::{circle, dot_grid};
    use kolam::geometry::point::{Point, PointSet};
    use kolam::io::configuration::DEFAULT_COLOR;
    use kolam::io::design::{Color, DesignFile, DesignMetadata, current_timestamp};
    use tempfile::TempDir;

    fn grid_design() -> DesignFile {
        DesignFile::new(dot_grid(3, 3, 2.0).unwrap(), Color::default())
    }

    // Tests color validation
    // Verified by accepting three-digit colors
    #[test]
    fn test_color_parse() {
        let color = Color::parse("#1a2B3c").unwrap();
        assert_eq!(color.as_str(), "#1a2B3c");

        for bad in ["1a2b3c", "#abc", "#12345g", "", "#1234567"] {
            assert!(Color::parse(bad).is_err(), "{bad} accepted");
        }
        assert_eq!(Color::default().as_str(), DEFAULT_COLOR);
        assert!(Color::parse(DEFAULT_COLOR).is_ok());
    }

    // Tests the documented JSON shape with optional blocks
    // Verified by renaming the pattern field
    #[test]
    fn test_parse_minimal_design() {
        let design = DesignFile::from_json(
            r##"{"pattern": [[0, 0], [2, 0], [1, 1.5]], "color": "#00FF00", "timestamp": "2024-01-01T10:00:00.000000"}"##,
        )
        .unwrap();

        assert_eq!(design.pattern.len(), 3);
        assert_eq!(design.color.as_str(), "#00FF00");
        assert!(design.analysis.is_none());
        assert!(design.metadata.is_none());
    }

    // Tests missing color and timestamp fall back to defaults
    // Verified by making color mandatory
    #[test]
    fn test_parse_defaults() {
        let design = DesignFile::from_json(r#"{"pattern": []}"#).unwrap();
        assert!(design.pattern.is_empty());
        assert_eq!(design.color, Color::default());
        assert!(design.timestamp.is_empty());
    }

    // Tests structural errors are rejected
    // Verified by ignoring the pattern field type
    #[test]
    fn test_parse_malformed_design() {
        for text in [
            "not json",
            r##"{"color": "#FFFFFF"}"##,
            r#"{"pattern": [[1, 2, 3]]}"#,
            r#"{"pattern": [[1, 2]], "color": "blue"}"#,
            r#"{"pattern": [[1, 2]], "analysis": {"points": 1, "complexity": 11, "symmetries": []}}"#,
            r#"{"pattern": [[1, 2]], "analysis": {"points": 1, "complexity": 0, "symmetries": ["spin"]}}"#,
        ] {
            assert!(
                matches!(DesignFile::from_json(text), Err(KolamError::Json { .. })),
                "accepted {text}"
            );
        }
    }

    // Tests an analysis block must describe the stored pattern
    // Verified by skipping validation after parsing
    #[test]
    fn test_stale_analysis_rejected() {
        let text = r#"{"pattern": [[0, 0], [1, 1]], "analysis": {"points": 3, "complexity": 0, "symmetries": []}}"#;
        assert!(matches!(
            DesignFile::from_json(text),
            Err(KolamError::InvalidDesign { .. })
        ));
    }

    // Tests legacy symmetry labels are read
    // Verified by accepting only current labels
    #[test]
    fn test_legacy_labels() {
        let text = r#"{"pattern": [[0, 0], [1, 1], [2, 2]], "analysis": {"points": 3, "complexity": 0, "symmetries": ["2-fold rotational", "reflection"]}}"#;
        let analysis = DesignFile::from_json(text).unwrap().analysis.unwrap();

        assert!(analysis.symmetries.contains(Symmetry::Rotational(2)));
        assert!(analysis.symmetries.has_reflection());
        assert_eq!(
            serde_json::to_value(&analysis.symmetries).unwrap(),
            serde_json::json!(["2-fold rotation", "Reflection"])
        );
    }

    // Tests analyzed designs survive a JSON round trip unchanged
    // Verified by dropping fields during serialization
    #[test]
    fn test_round_trip_with_analysis() {
        let design = grid_design().analyzed(&SymmetryAnalyzer::default()).unwrap();
        let analysis = design.analysis.clone().unwrap();
        assert_eq!(analysis.points, 9);
        assert_eq!(analysis.symmetries.len(), 3);

        let parsed = DesignFile::from_json(&design.to_json().unwrap()).unwrap();
        assert_eq!(parsed, design);
    }

    // Tests coordinates are stored exactly
    // Verified by rounding coordinates when writing
    #[test]
    fn test_coordinates_preserved_exactly() {
        let center = Point::new(0.1, 1.0 / 3.0).unwrap();
        let design = DesignFile::new(circle(&center, 7.3, 7).unwrap(), Color::default());
        let parsed = DesignFile::from_json(&design.to_json().unwrap()).unwrap();
        assert_eq!(parsed.pattern, design.pattern);
    }

    // Tests appending clears the stale analysis
    // Verified by keeping the analysis after append
    #[test]
    fn test_append_clears_analysis() {
        let mut design = grid_design().analyzed(&SymmetryAnalyzer::default()).unwrap();
        design.append(&PointSet::from_coordinates(&[[50.0, 50.0]]).unwrap());

        assert_eq!(design.pattern.len(), 10);
        assert!(design.analysis.is_none());
    }

    // Tests metadata from seeded generation
    // Verified by leaving the seed out of the conversion
    #[test]
    fn test_metadata_from_generated() {
        let generated = generate_seeded(5, &Point::new(10.0, 10.0).unwrap()).unwrap();
        let metadata = DesignMetadata::from(&generated);

        assert_eq!(metadata.points, generated.points.len());
        assert_eq!(metadata.seed, Some(5));

        let preset = DesignMetadata {
            points: 12,
            style: Some(Style::Modern),
            complexity: Some(3),
            seed: None,
        };
        let json = serde_json::to_value(&preset).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"points": 12, "style": "modern", "complexity": 3})
        );
    }

    // Tests saving and loading through the file system
    // Verified by writing compact JSON without the color
    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("grid.json");

        let design = grid_design();
        design.save(&path).unwrap();
        assert_eq!(DesignFile::load(&path).unwrap(), design);
    }

    // Tests load errors carry the file path
    // Verified by leaving the path unknown
    #[test]
    fn test_load_errors_carry_path() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.json");
        match DesignFile::load(&missing) {
            Err(KolamError::FileSystem { path, .. }) => assert_eq!(path, missing),
            other => unreachable!("Expected FileSystem error, got {other:?}"),
        }

        let broken = temp_dir.path().join("broken.json");
        std::fs::write(&broken, "{").unwrap();
        match DesignFile::load(&broken) {
            Err(KolamError::Json { path, .. }) => assert_eq!(path, broken),
            other => unreachable!("Expected Json error, got {other:?}"),
        }
    }

    // Tests timestamp format
    // Verified by including the UTC offset
    #[test]
    fn test_timestamp_format() {
        let stamp = current_timestamp();
        assert_eq!(stamp.len(), "2024-01-01T10:00:00.000000".len());
        assert_eq!(stamp.as_bytes()[10], b'T');
        assert!(!grid_design().timestamp.is_empty());
    }
}
