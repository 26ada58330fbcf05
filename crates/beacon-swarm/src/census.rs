use crate::emitter::Emitter;

/// The emitter with the largest radius; the earliest one wins ties.
pub fn strongest(emitters: &[Emitter]) -> Option<&Emitter> {
    emitters
        .iter()
        .reduce(|best, e| if e.radius > best.radius { e } else { best })
}

/// How many emitter centers (the strongest's own included) lie inside the
/// strongest emitter's range. Zero for an empty swarm.
pub fn in_range_of_strongest(emitters: &[Emitter]) -> usize {
    let Some(strong) = strongest(emitters) else {
        return 0;
    };
    emitters.iter().filter(|e| e.within_range_of(strong)).count()
}
