//! Tests for the bounded complexity score

#[cfg(test)]
mod tests {
    use kolam::analysis::complexity::{ComplexityScore, radial_spread, score};
    use kolam::generation::shapes::{circle, dot_grid};
    use kolam::geometry::point::{Point, PointSet};

    // Tests sets below two points score zero
    // Verified by scoring single points by their count term
    #[test]
    fn test_tiny_sets_score_zero() {
        assert_eq!(score(&PointSet::new()), ComplexityScore::ZERO);
        let single = PointSet::from_coordinates(&[[5.0, 5.0]]).unwrap();
        assert_eq!(score(&single), ComplexityScore::ZERO);
        let pair = PointSet::from_coordinates(&[[0.0, 0.0], [1.0, 0.0]]).unwrap();
        assert_eq!(score(&pair).value(), 0);
    }

    // Tests the count and spread terms are both floored
    // Verified by rounding the spread term
    #[test]
    fn test_count_and_spread_terms() {
        let points =
            PointSet::from_coordinates(&[[0.0, 0.0], [0.0, 0.0], [0.0, 0.0], [12.0, 0.0]])
                .unwrap();
        assert_eq!(radial_spread(&points), Some(6.0));
        assert_eq!(score(&points).value(), 3);
    }

    // Tests evenly spaced circles have no spread
    // Verified by using the maximum radius as spread
    #[test]
    fn test_circle_has_no_spread() {
        let points = circle(&Point::new(10.0, 10.0).unwrap(), 4.0, 8).unwrap();
        assert!(radial_spread(&points).unwrap() < 1e-9);
        assert_eq!(score(&points).value(), 1);
    }

    // Tests the score saturates at ten
    // Verified by removing the upper clamp
    #[test]
    fn test_score_saturates() {
        assert_eq!(score(&dot_grid(8, 8, 1.0).unwrap()), ComplexityScore::MAX);
        assert_eq!(score(&dot_grid(100, 100, 5.0).unwrap()).value(), 10);
    }

    // Tests adding far-away points never lowers the score
    // Verified by subtracting the spread term
    #[test]
    fn test_score_monotone_in_growth() {
        let mut points = dot_grid(2, 2, 1.0).unwrap();
        let mut previous = score(&points);
        for step in 1..20 {
            points.push(Point::new(f64::from(step) * 3.0, 0.0).unwrap());
            let current = score(&points);
            assert!(current >= previous);
            previous = current;
        }
    }

    // Tests extreme coordinates score from their real spread
    // Verified by saturating the score when the centroid is unavailable
    #[test]
    fn test_extreme_coordinates() {
        let points =
            PointSet::from_coordinates(&[[-1e308, 0.0], [1e308, 0.0], [0.0, 0.0]]).unwrap();
        assert_eq!(radial_spread(&points), Some(1e308));
        assert_eq!(score(&points), ComplexityScore::MAX);
    }

    // Tests a spread beyond the f64 range contributes nothing
    // Verified by mapping a missing spread to the maximum term
    #[test]
    fn test_unrepresentable_spread() {
        let points = PointSet::from_coordinates(&[
            [-1.7e308, 0.0],
            [1.7e308, 0.0],
            [1.7e308, 0.0],
        ])
        .unwrap();
        assert_eq!(radial_spread(&points), None);
        assert_eq!(score(&points), ComplexityScore::ZERO);
    }

    // Tests score range validation and display
    // Verified by accepting eleven
    #[test]
    fn test_score_conversions() {
        assert_eq!(ComplexityScore::try_from(7).unwrap().to_string(), "7/10");
        assert!(ComplexityScore::try_from(11).is_err());
        assert_eq!(u8::from(ComplexityScore::MAX), 10);
        assert!(serde_json::from_str::<ComplexityScore>("12").is_err());
        assert_eq!(
            serde_json::from_str::<ComplexityScore>("4").unwrap().value(),
            4
        );
    }
}
