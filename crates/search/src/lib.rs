//! Keyword search over restaurant candidates.
//!
//! Candidates are raw JSON records of whatever shape the caller has. They are
//! resolved into [`SearchCandidate`]s, scored against the keyword (expanded
//! with chain hints) and an optional diet or cuisine filter, and returned in
//! descending score order.

mod hints;
mod policy;
mod rank;
pub mod resolve;

pub use hints::chain_hints;
pub use policy::{FOOD_VENUE_TAGS, RankingPolicy};
pub use rank::{RankedResult, SearchQuery, is_food_venue, normalize_keyword, rank, rank_with, score};
pub use resolve::{Coordinates, SearchCandidate};
