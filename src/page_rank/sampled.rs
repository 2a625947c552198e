use super::*;
use crate::{common::*, transition, Error, Graph, PageId, RandomSource, Ranks};
use rand::rngs::ThreadRng;
use std::{cell::RefCell, collections::HashMap};
use tracing::debug;

/// Estimates page rank by how often a random surfer visits each page.
pub struct SampledPageRank<'a, R>
where
    R: RandomSource,
{
    graph: &'a Graph,
    samples: usize,
    transitions: Vec<Vec<f64>>,
    source: RefCell<R>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub damping: f64,
    /// Length of the walk, i.e., the number of visits recorded.
    pub samples: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: 0.85,
            samples: 10_000,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Result {
    pub page_rank: Ranks,
    pub visits: HashMap<String, usize, ahash::RandomState>,
    pub samples: usize,
}

impl<'a> SampledPageRank<'a, ThreadRng> {
    /// A sampler drawing from the thread-local generator, so every run
    /// takes a different walk.
    pub fn with_thread_rng(g: &'a Graph, config: &Config) -> crate::Result<Self> {
        Self::new(g, config, rand::rng())
    }
}

impl<'a, R: RandomSource> SampledPageRank<'a, R> {
    pub fn new(g: &'a Graph, config: &Config, source: R) -> crate::Result<Self> {
        check_damping(config.damping)?;
        if config.samples < 2 {
            return Err(Error::InvalidParameter(format!(
                "samples={}, expected at least 2",
                config.samples
            )));
        }
        if g.is_empty() {
            return Err(Error::InvalidGraph("no pages".to_string()));
        }
        let transitions = g
            .iter_pages()
            .map(|u| transition::weights(g, u, config.damping))
            .collect();
        Ok(Self {
            graph: g,
            samples: config.samples,
            transitions,
            source: RefCell::new(source),
        })
    }
}

impl<R: RandomSource> PageRank for SampledPageRank<'_, R> {
    type Result = self::Result;

    fn calc(&self) -> crate::Result<Self::Result> {
        let g = self.graph;
        let n = self.samples;
        debug!(pages = g.len(), samples = n, "sampling page rank");

        let mut source = self.source.borrow_mut();
        let mut counts = vec![0usize; g.len()];
        let mut cur = source.choose_uniform(g.len());
        counts[cur] += 1;
        for _ in 1..n {
            cur = source
                .choose_weighted(&self.transitions[cur])
                .ok_or_else(|| Error::DegenerateDistribution(g.name(PageId(cur)).to_string()))?;
            counts[cur] += 1;
        }

        let ranks: Vec<f64> = counts.iter().map(|c| *c as f64 / n as f64).collect();
        let visits = g
            .iter_pages()
            .map(|v| (g.name(v).to_string(), counts[v.index()]))
            .collect();
        debug!(
            visited = counts.iter().filter(|c| **c > 0).count(),
            "page rank sampled"
        );
        Ok(Self::Result {
            page_rank: to_ranks(g, &ranks),
            visits,
            samples: n,
        })
    }
}

impl PageRankResult for self::Result {
    fn page_rank(&self) -> &Ranks {
        &self.page_rank
    }

    fn debug<'a>(&'a self, graph: &'a Graph) -> impl std::fmt::Debug + 'a {
        ResultDebug {
            graph,
            result: self,
        }
    }
}

pub struct ResultDebug<'a> {
    graph: &'a Graph,
    result: &'a self::Result,
}

impl std::fmt::Debug for ResultDebug<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for v in self.graph.iter_names() {
            let p = self.result.page_rank.get(v).copied().unwrap_or(0.0);
            let c = self.result.visits.get(v).copied().unwrap_or(0);
            writeln!(f, "{v}: {p:?}, {c}/{}", self.result.samples)?;
        }
        Ok(())
    }
}
