use std::cmp::Ordering;

use beacon_geom::{Cube, Point};
use beacon_swarm::{Emitter, overlap_bound};

use crate::config::TieBreak;

/// A queued cube with its overlap bound and its distance from the reference point.
///
/// Ordered so that `BinaryHeap::pop` yields the most promising cube: higher
/// bound, then nearer to the reference, then smaller side, then lower corner.
#[derive(Clone, Copy, Debug)]
pub struct Candidate {
    pub cube: Cube,
    pub bound: usize,
    /// Distance from the reference point to `cube`, measured per [`TieBreak`].
    /// Exact for a unit cube under either rule.
    pub distance: i64,
}

impl Candidate {
    pub fn score(cube: Cube, emitters: &[Emitter], reference: Point, tie_break: TieBreak) -> Self {
        let distance = match tie_break {
            TieBreak::Corner => cube.corner().distance(reference),
            TieBreak::Nearest => cube.distance_to(reference),
        };
        Self {
            cube,
            bound: overlap_bound(&cube, emitters),
            distance,
        }
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.bound
            .cmp(&other.bound)
            .then_with(|| other.distance.cmp(&self.distance))
            .then_with(|| other.cube.side().cmp(&self.cube.side()))
            .then_with(|| other.cube.corner().cmp(&self.cube.corner()))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}
