use beacon_geom::Cube;

use crate::emitter::Emitter;

/// Smallest power-of-two cube holding every point any emitter can reach.
///
/// Anchored at the per-axis minimum of `center - radius`; `None` when the
/// swarm is empty.
pub fn bounding_cube(emitters: &[Emitter]) -> Option<Cube> {
    let (first, rest) = emitters.split_first()?;
    let (lo, hi) = rest.iter().fold(
        (first.min_extent(), first.max_extent()),
        |(lo, hi), e| (lo.component_min(e.min_extent()), hi.component_max(e.max_extent())),
    );
    Some(Cube::covering(lo, hi))
}
