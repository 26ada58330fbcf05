use std::collections::BinaryHeap;

use beacon_geom::{Cube, Point};
use beacon_swarm::{Emitter, bounding_cube};
use rayon::prelude::*;

use crate::candidate::Candidate;
use crate::config::SearchConfig;
use crate::error::SearchError;

/// The decided point: most overlapping ranges, then nearest to the reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BestPoint {
    pub point: Point,
    pub overlap: usize,
    pub distance: i64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Cubes split into octants.
    pub expanded: u64,
    /// Candidates ever queued, the seed included.
    pub pushed: u64,
    pub max_queue_len: usize,
    pub initial_side: i64,
}

pub struct Search {
    config: SearchConfig,
}

impl Search {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Run the search to completion.
    ///
    /// The heap always yields the candidate with the highest bound, so the
    /// first unit cube popped is exact and no queued cube can beat it. Under
    /// [`TieBreak::Nearest`](crate::TieBreak::Nearest) the distance key is a
    /// lower bound too, which makes the tie-break exact as well.
    pub fn run(&self, emitters: &[Emitter]) -> Result<(BestPoint, SearchStats), SearchError> {
        let reference = self.config.reference;
        if !reference.within_limit() || !emitters.iter().all(Emitter::within_limit) {
            return Err(SearchError::OutOfRange);
        }
        let seed = bounding_cube(emitters).ok_or(SearchError::InvalidInput)?;
        log::debug!(
            "seeding search with {} over {} emitters (reference {})",
            seed,
            emitters.len(),
            reference
        );

        let mut stats = SearchStats {
            initial_side: seed.side(),
            pushed: 1,
            max_queue_len: 1,
            ..SearchStats::default()
        };
        let mut heap = BinaryHeap::new();
        heap.push(Candidate::score(seed, emitters, reference, self.config.tie_break));

        loop {
            // Each expansion queues eight octants, so the heap never drains.
            let best = heap.pop().ok_or(SearchError::InvalidInput)?;
            let Some(octants) = best.cube.octants() else {
                let found = BestPoint {
                    point: best.cube.corner(),
                    overlap: best.bound,
                    distance: best.distance,
                };
                log::info!(
                    "best point {} overlap={} distance={} (expanded {}, queued {})",
                    found.point,
                    found.overlap,
                    found.distance,
                    stats.expanded,
                    stats.pushed
                );
                return Ok((found, stats));
            };

            if let Some(limit) = self.config.max_expansions {
                if stats.expanded >= limit {
                    log::warn!("expansion limit {} reached with {} queued", limit, heap.len());
                    return Err(SearchError::ExpansionLimit { limit });
                }
            }

            log::trace!("expand {} bound={} distance={}", best.cube, best.bound, best.distance);
            stats.expanded += 1;
            heap.extend(self.score_octants(&octants, emitters));
            stats.pushed += octants.len() as u64;
            stats.max_queue_len = stats.max_queue_len.max(heap.len());
        }
    }

    fn score_octants(&self, octants: &[Cube], emitters: &[Emitter]) -> Vec<Candidate> {
        let reference = self.config.reference;
        let tie_break = self.config.tie_break;
        let score = |cube: &Cube| Candidate::score(*cube, emitters, reference, tie_break);
        if self.config.parallel {
            octants.par_iter().map(score).collect()
        } else {
            octants.iter().map(score).collect()
        }
    }
}

/// Search with the default configuration: origin reference, no cap, serial.
pub fn find_best_point(emitters: &[Emitter]) -> Result<BestPoint, SearchError> {
    Search::new(SearchConfig::default())
        .run(emitters)
        .map(|(best, _)| best)
}
