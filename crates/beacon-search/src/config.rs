use beacon_geom::Point;
use serde::Deserialize;

/// How equally covered cubes are ranked against the reference point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TieBreak {
    /// Distance from the reference to the cube's lowest corner. Child 0 keeps
    /// its parent's corner, so the search dives straight to a unit cube and
    /// finishes quickly on large swarms. The overlap is still maximal; the
    /// distance is that of the first maximizer reached, not always the nearest.
    #[default]
    Corner,
    /// Distance from the reference to the nearest point of the cube. Exact on
    /// both overlap and distance, but every equally covered cube nearer than
    /// the answer must be split to the bottom, which is only practical for
    /// small swarms.
    Nearest,
}

/// Tuning for [`crate::Search`]. Every field has a default, so an empty
/// `[search]` table is valid.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Point whose distance breaks ties between equally covered points.
    pub reference: Point,
    pub tie_break: TieBreak,
    /// Give up after this many cube expansions. Unlimited when absent.
    pub max_expansions: Option<u64>,
    /// Score the eight octants of each expansion on the rayon pool.
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            reference: Point::ORIGIN,
            tie_break: TieBreak::Corner,
            max_expansions: None,
            parallel: false,
        }
    }
}
