//! Line check library entry points.
//!
//! This crate owns the geometry model for submitted polylines, the generator
//! for the reference lines each request is compared against, and the
//! intersection search itself. The HTTP service only decodes requests and
//! formats responses around the functions exported here.
//!

#![deny(warnings)]

pub mod error;
pub mod geometry;
pub mod intersect;
pub mod reference;

pub use error::{Error, Result};
pub use geometry::{LineString, Position, ReferenceLine, MIN_POSITIONS};
pub use intersect::{find_intersections, line_string_intersection, IntersectionResult};
pub use reference::{
    generate_reference_lines, reference_id, FixedReferenceSource, RandomReferenceSource,
    ReferenceSource, SeededReferenceSource, COORDINATE_MAX, COORDINATE_MIN, REFERENCE_LINE_COUNT,
};
