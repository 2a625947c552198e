//! The two page rank estimators.
//!
//! [`iterated::IteratedPageRank`] solves the page rank recurrence until every
//! page is stable, and [`sampled::SampledPageRank`] walks the graph as a
//! random surfer and counts visits. Both return ranks that sum to 1 over the
//! whole graph, so either can be checked against the other.

pub mod iterated;
pub mod sampled;
mod traits;
pub use self::traits::*;
