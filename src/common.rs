use crate::{Error, Graph, Result};
use std::collections::HashMap;

/// Rank of every page, keyed by page identifier.
pub type Ranks = HashMap<String, f64, ahash::RandomState>;

pub fn norm_1(v: &Ranks) -> f64 {
    v.values().map(|x| x.abs()).sum()
}

/// Largest per-page difference between two rank mappings. A page missing
/// from one side counts as rank 0 there.
pub fn max_abs_diff(a: &Ranks, b: &Ranks) -> f64 {
    a.iter()
        .map(|(k, x)| (x - b.get(k).copied().unwrap_or(0.0)).abs())
        .chain(
            b.iter()
                .filter(|(k, _)| !a.contains_key(*k))
                .map(|(_, y)| y.abs()),
        )
        .fold(0.0, f64::max)
}

pub(crate) fn check_damping(damping: f64) -> Result<()> {
    if damping > 0.0 && damping < 1.0 {
        Ok(())
    } else {
        Err(Error::InvalidParameter(format!(
            "damping={damping}, expected in (0, 1)"
        )))
    }
}

pub(crate) fn to_ranks(graph: &Graph, values: &[f64]) -> Ranks {
    graph
        .iter_pages()
        .map(|v| (graph.name(v).to_string(), values[v.index()]))
        .collect()
}
