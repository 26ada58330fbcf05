//! Emitter swarm model: ranges, parsing, bounding volume, and overlap counting.
#![forbid(unsafe_code)]

pub mod bounds;
pub mod census;
pub mod emitter;
pub mod overlap;
pub mod parse;

pub use beacon_geom::{COORD_LIMIT, Cube, Point};
pub use bounds::bounding_cube;
pub use census::{in_range_of_strongest, strongest};
pub use emitter::Emitter;
pub use overlap::{overlap_at, overlap_bound};
pub use parse::{ParseError, ParseErrorKind, parse_emitters};
