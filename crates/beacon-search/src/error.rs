use beacon_geom::COORD_LIMIT;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// The emitter set was empty.
    InvalidInput,
    /// An emitter or the reference point lies beyond `±COORD_LIMIT`.
    OutOfRange,
    /// The configured expansion cap was reached before a point was decided.
    ExpansionLimit { limit: u64 },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchError::InvalidInput => write!(f, "invalid input: no emitters to search"),
            SearchError::OutOfRange => {
                write!(f, "coordinates and radii must stay within ±{}", COORD_LIMIT)
            }
            SearchError::ExpansionLimit { limit } => {
                write!(f, "search gave up after {} expansions", limit)
            }
        }
    }
}

impl std::error::Error for SearchError {}
