//! Overlap counting.
//!
//! `overlap_bound` over a cube never increases when the cube is subdivided,
//! and at side length 1 it equals `overlap_at` for the single point. The
//! search relies on both facts.

use beacon_geom::{Cube, Point};

use crate::emitter::Emitter;

/// Number of emitters that could reach at least one point of `cube`.
pub fn overlap_bound(cube: &Cube, emitters: &[Emitter]) -> usize {
    emitters.iter().filter(|e| e.could_reach_cube(cube)).count()
}

/// Number of emitters whose range contains `p`.
pub fn overlap_at(p: Point, emitters: &[Emitter]) -> usize {
    emitters.iter().filter(|e| e.reaches(p)).count()
}
