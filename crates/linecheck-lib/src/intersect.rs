//! Polyline intersection search.
//!
//! Segment-level intersection is delegated to `geo`. This module only decides
//! which crossing to report when a pair of polylines meets more than once:
//! segments of the first line are scanned in path order, and for each of them
//! the segments of the second line in path order. The first hit wins. When
//! two segments overlap collinearly, the start of the shared sub-segment is
//! reported.

use std::collections::BTreeMap;

use geo::algorithm::line_intersection::{line_intersection, LineIntersection};

use crate::geometry::{LineString, Position, ReferenceLine};

/// Reference line identifier mapped to the point where it meets the input line.
pub type IntersectionResult = BTreeMap<String, Position>;

/// First intersection point between two line strings, if any.
///
/// Returns `None` when either line has fewer than two positions.
pub fn line_string_intersection(a: &LineString, b: &LineString) -> Option<Position> {
    a.segments().find_map(|p| {
        b.segments()
            .find_map(|q| line_intersection(p, q))
            .map(|hit| match hit {
                LineIntersection::SinglePoint { intersection, .. } => Position::from(intersection),
                LineIntersection::Collinear { intersection } => Position::from(intersection.start),
            })
    })
}

/// Check `line` against every reference line and collect the hits.
pub fn find_intersections(line: &LineString, references: &[ReferenceLine]) -> IntersectionResult {
    let result: IntersectionResult = references
        .iter()
        .filter_map(|reference| {
            line_string_intersection(line, &reference.path)
                .map(|point| (reference.id.clone(), point))
        })
        .collect();

    tracing::trace!(
        checked = references.len(),
        found = result.len(),
        "intersection search complete"
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(points: &[(f64, f64)]) -> LineString {
        LineString::from(points.to_vec())
    }

    fn assert_near(actual: Option<Position>, expected: (f64, f64)) {
        let actual = actual.expect("expected an intersection");
        assert!(
            (actual.lon - expected.0).abs() < 1e-9 && (actual.lat - expected.1).abs() < 1e-9,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn test_crossing_segments() {
        let a = line(&[(-5.0, -5.0), (5.0, 5.0)]);
        let b = line(&[(-5.0, 5.0), (5.0, -5.0)]);
        assert_near(line_string_intersection(&a, &b), (0.0, 0.0));
    }

    #[test]
    fn test_disjoint_segments() {
        let a = line(&[(0.0, 0.0), (1.0, 0.0)]);
        let b = line(&[(0.0, 1.0), (1.0, 1.0)]);
        assert_eq!(line_string_intersection(&a, &b), None);
    }

    #[test]
    fn test_touching_endpoint_counts() {
        let a = line(&[(0.0, 0.0), (2.0, 0.0)]);
        let b = line(&[(2.0, 0.0), (2.0, 3.0)]);
        assert_near(line_string_intersection(&a, &b), (2.0, 0.0));
    }

    #[test]
    fn test_first_crossing_along_input_wins() {
        // Zig-zag crosses the horizontal line twice: at x=1 and x=3.
        let zigzag = line(&[(0.0, -1.0), (2.0, 1.0), (4.0, -1.0)]);
        let horizontal = line(&[(-10.0, 0.0), (10.0, 0.0)]);
        assert_near(line_string_intersection(&zigzag, &horizontal), (1.0, 0.0));
    }

    #[test]
    fn test_collinear_overlap_reports_a_shared_point() {
        let a = line(&[(0.0, 0.0), (4.0, 0.0)]);
        let b = line(&[(2.0, 0.0), (6.0, 0.0)]);
        let hit = line_string_intersection(&a, &b).expect("overlap intersects");
        assert_eq!(hit.lat, 0.0);
        assert!((2.0..=4.0).contains(&hit.lon));
    }

    #[test]
    fn test_degenerate_line_never_intersects() {
        let a = line(&[(0.0, 0.0)]);
        let b = line(&[(-1.0, -1.0), (1.0, 1.0)]);
        assert_eq!(line_string_intersection(&a, &b), None);
        assert_eq!(line_string_intersection(&b, &a), None);
    }

    #[test]
    fn test_find_intersections_keys_only_hits() {
        let input = line(&[(-5.0, -5.0), (5.0, 5.0)]);
        let references = vec![
            ReferenceLine {
                id: "L01".to_string(),
                path: line(&[(-5.0, 5.0), (5.0, -5.0)]),
            },
            ReferenceLine {
                id: "L02".to_string(),
                path: line(&[(8.0, 9.0), (9.0, 9.5)]),
            },
        ];

        let result = find_intersections(&input, &references);
        assert_eq!(result.len(), 1);
        assert_near(result.get("L01").copied(), (0.0, 0.0));
        assert!(!result.contains_key("L02"));
    }

    #[test]
    fn test_find_intersections_empty_references() {
        let input = line(&[(0.0, 0.0), (1.0, 1.0)]);
        assert!(find_intersections(&input, &[]).is_empty());
    }
}
