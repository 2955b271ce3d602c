//! Reference line generation.
//!
//! Every request is compared against a fresh set of [`REFERENCE_LINE_COUNT`]
//! straight lines with endpoints scattered uniformly over
//! `[COORDINATE_MIN, COORDINATE_MAX)` on both axes. The random source is
//! injected through [`ReferenceSource`] so handlers can be exercised against
//! deterministic data.

use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

use crate::geometry::{LineString, Position, ReferenceLine};

/// Number of reference lines generated per request.
pub const REFERENCE_LINE_COUNT: usize = 50;

/// Inclusive lower bound for generated coordinates.
pub const COORDINATE_MIN: f64 = -10.0;

/// Exclusive upper bound for generated coordinates.
pub const COORDINATE_MAX: f64 = 10.0;

/// Identifier for the reference line at a 1-based `ordinal`, e.g. `L07`.
pub fn reference_id(ordinal: usize) -> String {
    format!("L{:02}", ordinal)
}

fn random_position<R: Rng + ?Sized>(rng: &mut R) -> Position {
    Position::new(
        rng.gen_range(COORDINATE_MIN..COORDINATE_MAX),
        rng.gen_range(COORDINATE_MIN..COORDINATE_MAX),
    )
}

/// Generate `L01`..`L50` in order, each a two-point line with random endpoints.
pub fn generate_reference_lines<R: Rng + ?Sized>(rng: &mut R) -> Vec<ReferenceLine> {
    (1..=REFERENCE_LINE_COUNT)
        .map(|ordinal| ReferenceLine {
            id: reference_id(ordinal),
            path: LineString::new(vec![random_position(rng), random_position(rng)]),
        })
        .collect()
}

/// Supplies the reference lines a request is checked against.
pub trait ReferenceSource: Send + Sync {
    fn reference_lines(&self) -> Vec<ReferenceLine>;
}

/// Unseeded source: a new set of lines on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomReferenceSource;

impl ReferenceSource for RandomReferenceSource {
    fn reference_lines(&self) -> Vec<ReferenceLine> {
        generate_reference_lines(&mut rand::thread_rng())
    }
}

/// Deterministic source: every call replays the same seeded sequence.
#[derive(Debug, Clone, Copy)]
pub struct SeededReferenceSource {
    seed: u64,
}

impl SeededReferenceSource {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl ReferenceSource for SeededReferenceSource {
    fn reference_lines(&self) -> Vec<ReferenceLine> {
        let mut rng = XorShiftRng::seed_from_u64(self.seed);
        generate_reference_lines(&mut rng)
    }
}

/// Returns a caller-supplied set of lines verbatim.
#[derive(Debug, Clone, Default)]
pub struct FixedReferenceSource {
    lines: Vec<ReferenceLine>,
}

impl FixedReferenceSource {
    pub fn new(lines: Vec<ReferenceLine>) -> Self {
        Self { lines }
    }
}

impl ReferenceSource for FixedReferenceSource {
    fn reference_lines(&self) -> Vec<ReferenceLine> {
        self.lines.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_id_zero_padded() {
        assert_eq!(reference_id(1), "L01");
        assert_eq!(reference_id(9), "L09");
        assert_eq!(reference_id(10), "L10");
        assert_eq!(reference_id(50), "L50");
    }

    #[test]
    fn test_generate_count_and_order() {
        let mut rng = XorShiftRng::seed_from_u64(7);
        let lines = generate_reference_lines(&mut rng);

        assert_eq!(lines.len(), REFERENCE_LINE_COUNT);
        for (index, line) in lines.iter().enumerate() {
            assert_eq!(line.id, reference_id(index + 1));
        }
    }

    #[test]
    fn test_generated_endpoints_within_bounds() {
        let mut rng = XorShiftRng::seed_from_u64(42);
        for line in generate_reference_lines(&mut rng) {
            assert_eq!(line.path.len(), 2);
            for pos in &line.path.coordinates {
                assert!((COORDINATE_MIN..COORDINATE_MAX).contains(&pos.lon));
                assert!((COORDINATE_MIN..COORDINATE_MAX).contains(&pos.lat));
            }
        }
    }

    #[test]
    fn test_seeded_source_is_repeatable() {
        let source = SeededReferenceSource::new(1234);
        assert_eq!(source.reference_lines(), source.reference_lines());
    }

    #[test]
    fn test_seeded_sources_differ_by_seed() {
        let a = SeededReferenceSource::new(1).reference_lines();
        let b = SeededReferenceSource::new(2).reference_lines();
        assert_ne!(a, b);
    }

    #[test]
    fn test_random_source_produces_full_set() {
        let lines = RandomReferenceSource.reference_lines();
        assert_eq!(lines.len(), REFERENCE_LINE_COUNT);
        assert_eq!(lines[0].id, "L01");
        assert_eq!(lines[49].id, "L50");
    }

    #[test]
    fn test_fixed_source_returns_lines_verbatim() {
        let lines = vec![ReferenceLine {
            id: "L01".to_string(),
            path: LineString::from(vec![(0.0, 0.0), (1.0, 1.0)]),
        }];
        let source = FixedReferenceSource::new(lines.clone());
        assert_eq!(source.reference_lines(), lines);
    }
}
