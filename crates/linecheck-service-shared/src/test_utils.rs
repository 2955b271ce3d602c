//! Test utilities for handler testing.
//!
//! Provides application states backed by deterministic reference sources so
//! handler tests can assert exact responses instead of statistical ones.

use linecheck_lib::{
    reference_id, FixedReferenceSource, LineString, ReferenceLine, SeededReferenceSource,
    REFERENCE_LINE_COUNT,
};

use crate::state::AppState;

/// Seed used by [`seeded_state`] when tests do not care about the exact value.
pub const TEST_SEED: u64 = 0x5eed;

/// State whose reference lines replay the same seeded sequence on every request.
pub fn seeded_state(seed: u64) -> AppState {
    AppState::new(SeededReferenceSource::new(seed))
}

/// State whose reference lines are exactly `lines`.
pub fn fixed_state(lines: Vec<ReferenceLine>) -> AppState {
    AppState::new(FixedReferenceSource::new(lines))
}

/// Build a reference line from an identifier and a list of points.
pub fn reference_line(id: &str, points: &[(f64, f64)]) -> ReferenceLine {
    ReferenceLine {
        id: id.to_string(),
        path: LineString::from(points.to_vec()),
    }
}

/// Known reference geometry for fixed-source tests.
pub mod fixture_lines {
    use super::*;

    /// Anti-diagonal through the origin; crosses `[[-5,-5],[5,5]]` at (0, 0).
    pub fn anti_diagonal(id: &str) -> ReferenceLine {
        reference_line(id, &[(-5.0, 5.0), (5.0, -5.0)])
    }

    /// Short segment in the upper-right corner, clear of the main diagonal.
    pub fn corner(id: &str) -> ReferenceLine {
        reference_line(id, &[(8.0, 9.0), (9.0, 9.5)])
    }

    /// Vertical segment at x = 2 crossing the main diagonal at (2, 2).
    pub fn vertical_at_two(id: &str) -> ReferenceLine {
        reference_line(id, &[(2.0, -10.0), (2.0, 10.0)])
    }
}

/// All identifiers a generated reference set may use.
pub fn valid_reference_ids() -> Vec<String> {
    (1..=REFERENCE_LINE_COUNT).map(reference_id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_state_repeats() {
        let state = seeded_state(TEST_SEED);
        assert_eq!(state.reference_lines(), state.reference_lines());
    }

    #[test]
    fn test_fixed_state_returns_lines() {
        let state = fixed_state(vec![fixture_lines::corner("L01")]);
        let lines = state.reference_lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].id, "L01");
    }

    #[test]
    fn test_valid_reference_ids_range() {
        let ids = valid_reference_ids();
        assert_eq!(ids.len(), 50);
        assert_eq!(ids.first().map(String::as_str), Some("L01"));
        assert_eq!(ids.last().map(String::as_str), Some("L50"));
    }
}
