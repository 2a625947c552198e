use crate::{Graph, Ranks, Result};

pub trait PageRank {
    type Result: PageRankResult;

    fn calc(&self) -> Result<Self::Result>;
}

pub trait PageRankResult {
    fn page_rank(&self) -> &Ranks;
    fn debug<'a>(&'a self, graph: &'a Graph) -> impl std::fmt::Debug + 'a;
}
