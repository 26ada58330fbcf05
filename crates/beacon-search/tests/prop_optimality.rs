use beacon_search::{Search, SearchConfig, TieBreak, find_best_point};
use beacon_swarm::{Cube, Emitter, Point, bounding_cube, overlap_at};
use proptest::prelude::*;

fn arb_emitter() -> impl Strategy<Value = Emitter> {
    ((-6i64..=6, -6i64..=6, -6i64..=6), 0i64..=4)
        .prop_map(|((x, y, z), r)| Emitter::new(Point::new(x, y, z), r))
}

fn arb_swarm() -> impl Strategy<Value = Vec<Emitter>> {
    prop::collection::vec(arb_emitter(), 1..7)
}

/// Every range lies on the positive side of the origin on all axes.
fn arb_positive_swarm() -> impl Strategy<Value = Vec<Emitter>> {
    let emitter = ((4i64..=16, 4i64..=16, 4i64..=16), 0i64..=4)
        .prop_map(|((x, y, z), r)| Emitter::new(Point::new(x, y, z), r));
    prop::collection::vec(emitter, 1..7)
}

fn nearest(reference: Point) -> Search {
    Search::new(SearchConfig {
        reference,
        tie_break: TieBreak::Nearest,
        ..SearchConfig::default()
    })
}

/// (max overlap, min distance among maximizers) over every lattice point any
/// emitter can reach.
fn brute_force(swarm: &[Emitter], reference: Point) -> (usize, i64) {
    let lo = swarm.iter().map(Emitter::min_extent).reduce(Point::component_min).unwrap();
    let hi = swarm.iter().map(Emitter::max_extent).reduce(Point::component_max).unwrap();
    let mut best = (0usize, i64::MAX);
    for x in lo.x..=hi.x {
        for y in lo.y..=hi.y {
            for z in lo.z..=hi.z {
                let p = Point::new(x, y, z);
                let n = overlap_at(p, swarm);
                let d = p.distance(reference);
                if n > best.0 || (n == best.0 && d < best.1) {
                    best = (n, d);
                }
            }
        }
    }
    best
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn search_matches_brute_force(swarm in arb_swarm()) {
        let (best, _) = nearest(Point::ORIGIN).run(&swarm).unwrap();
        let (overlap, distance) = brute_force(&swarm, Point::ORIGIN);
        prop_assert_eq!(best.overlap, overlap);
        prop_assert_eq!(best.distance, distance);
        prop_assert_eq!(overlap_at(best.point, &swarm), best.overlap);
        prop_assert_eq!(best.point.distance_to_origin(), best.distance);
    }

    #[test]
    fn search_matches_brute_force_off_origin(swarm in arb_swarm(), (x, y, z) in (-9i64..=9, -9i64..=9, -9i64..=9)) {
        let reference = Point::new(x, y, z);
        let (best, _) = nearest(reference).run(&swarm).unwrap();
        prop_assert_eq!((best.overlap, best.distance), brute_force(&swarm, reference));
        prop_assert_eq!(best.point.distance(reference), best.distance);
    }

    #[test]
    fn corner_rule_keeps_maximal_overlap(swarm in arb_swarm(), (x, y, z) in (-9i64..=9, -9i64..=9, -9i64..=9)) {
        let reference = Point::new(x, y, z);
        let cfg = SearchConfig { reference, ..SearchConfig::default() };
        let (best, _) = Search::new(cfg).run(&swarm).unwrap();
        let (overlap, distance) = brute_force(&swarm, reference);
        prop_assert_eq!(best.overlap, overlap);
        prop_assert_eq!(overlap_at(best.point, &swarm), overlap);
        prop_assert!(best.distance >= distance);
        prop_assert_eq!(best.point.distance(reference), best.distance);
    }

    // With every cube on one side of the reference, the lowest corner is the nearest point.
    #[test]
    fn corner_rule_is_exact_on_one_side_of_reference(swarm in arb_positive_swarm()) {
        let best = find_best_point(&swarm).unwrap();
        prop_assert_eq!((best.overlap, best.distance), brute_force(&swarm, Point::ORIGIN));
        prop_assert_eq!(nearest(Point::ORIGIN).run(&swarm).unwrap().0, best);
    }

    #[test]
    fn repeated_runs_agree(swarm in arb_swarm()) {
        let search = Search::new(SearchConfig::default());
        let first = search.run(&swarm).unwrap();
        let second = search.run(&swarm).unwrap();
        prop_assert_eq!(first, second);
        let par = Search::new(SearchConfig { parallel: true, ..SearchConfig::default() });
        prop_assert_eq!(par.run(&swarm).unwrap(), first);
    }

    // The answer comes from the seed after at least one split per halving level
    #[test]
    fn answer_lies_inside_seed_cube(swarm in arb_swarm()) {
        let seed: Cube = bounding_cube(&swarm).unwrap();
        let (best, stats) = Search::new(SearchConfig::default()).run(&swarm).unwrap();
        prop_assert!(seed.contains(best.point));
        let depth = u64::from(seed.side().trailing_zeros());
        prop_assert!(stats.expanded >= depth);
        prop_assert_eq!(stats.pushed, 1 + 8 * stats.expanded);
    }

    // Each expansion nets seven queued cubes; these swarms settle well inside the ceilings.
    #[test]
    fn search_stays_within_budget(swarm in arb_swarm(), rule in prop_oneof![Just(TieBreak::Corner), Just(TieBreak::Nearest)]) {
        let seed = bounding_cube(&swarm).unwrap();
        let cfg = SearchConfig { tie_break: rule, ..SearchConfig::default() };
        let (_, stats) = Search::new(cfg).run(&swarm).unwrap();
        let depth = seed.side().trailing_zeros();
        let internal_nodes = (8u64.pow(depth) - 1) / 7;
        prop_assert!(stats.expanded <= internal_nodes);
        prop_assert!(stats.max_queue_len as u64 <= 1 + 7 * stats.expanded);
        prop_assert!(stats.expanded <= 200, "{:?}", stats);
        prop_assert!(stats.max_queue_len <= 1_500, "{:?}", stats);
    }
}
