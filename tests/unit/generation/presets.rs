//! Tests for style presets and seeded style selection

#[cfg(test)]
mod tests {
    use kolam::KolamError;
    use kolam::generation::presets::{Style, generate, generate_seeded};
    use kolam::generation::shapes::mandala;
    use kolam::geometry::point::Point;
    use kolam::io::configuration::MAX_STYLE_COMPLEXITY;

    fn center() -> Point {
        Point::new(10.0, 10.0).unwrap()
    }

    // Tests traditional preset is a mandala plus four spirals
    // Verified by generating three satellite spirals
    #[test]
    fn test_traditional_point_count() {
        let points = generate(Style::Traditional, &center(), 3).unwrap();
        assert_eq!(points.len(), 25 + 4 * 50);

        let core = mandala(&center(), 3).unwrap();
        assert_eq!(&points.points()[..core.len()], core.points());
    }

    // Tests modern preset nests polygons with growing vertex counts
    // Verified by starting at four sides
    #[test]
    fn test_modern_point_count() {
        let points = generate(Style::Modern, &center(), 5).unwrap();
        assert_eq!(points.len(), 3 + 4 + 5 + 6 + 7);

        let innermost = points.points()[0].distance(&center());
        assert!((innermost - 2.0).abs() < 1e-9);
    }

    // Tests fusion rounds the complexity split upward
    // Verified by using floor division for the split
    #[test]
    fn test_fusion_point_count() {
        let points = generate(Style::Fusion, &center(), 5).unwrap();
        assert_eq!(points.len(), 225 + 3 + 4 + 5);

        let smallest = generate(Style::Fusion, &center(), 1).unwrap();
        assert_eq!(smallest.len(), 7 + 4 * 50 + 3);
    }

    // Tests complexity bounds are enforced
    // Verified by accepting complexity zero
    #[test]
    fn test_complexity_bounds() {
        for style in Style::ALL {
            assert!(matches!(
                generate(style, &center(), 0),
                Err(KolamError::InvalidInput {
                    parameter: "complexity",
                    ..
                })
            ));
            assert!(generate(style, &center(), MAX_STYLE_COMPLEXITY + 1).is_err());
            assert!(generate(style, &center(), MAX_STYLE_COMPLEXITY).is_ok());
        }
    }

    // Tests seeded selection is reproducible and recorded
    // Verified by drawing from an unseeded generator
    #[test]
    fn test_generate_seeded_is_deterministic() {
        let first = generate_seeded(42, &center()).unwrap();
        let second = generate_seeded(42, &center()).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.seed, Some(42));
        assert!((1..=MAX_STYLE_COMPLEXITY).contains(&first.complexity));
        assert_eq!(
            first.points,
            generate(first.style, &center(), first.complexity).unwrap()
        );
    }

    // Tests different seeds explore more than one style
    // Verified by always selecting the first style
    #[test]
    fn test_generate_seeded_varies_style() {
        let styles: std::collections::HashSet<Style> = (0..64)
            .map(|seed| generate_seeded(seed, &center()).unwrap().style)
            .collect();
        assert!(styles.len() > 1);
    }

    // Tests style names round-trip through parsing
    // Verified by making parsing case-sensitive
    #[test]
    fn test_style_names() {
        for style in Style::ALL {
            assert_eq!(style.to_string().parse::<Style>().unwrap(), style);
        }
        assert_eq!("FUSION".parse::<Style>().unwrap(), Style::Fusion);
        assert!("baroque".parse::<Style>().is_err());
        assert_eq!(
            serde_json::to_string(&Style::Traditional).unwrap(),
            "\"traditional\""
        );
    }
}
