//! Best-first branch-and-bound search for the point covered by the most emitter ranges.
#![forbid(unsafe_code)]

mod candidate;
mod config;
mod error;
mod search;

pub use candidate::Candidate;
pub use config::{SearchConfig, TieBreak};
pub use error::SearchError;
pub use search::{BestPoint, Search, SearchStats, find_best_point};
