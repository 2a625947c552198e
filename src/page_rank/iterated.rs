use super::*;
use crate::{common::*, Error, Graph, Ranks};
use tracing::{debug, trace, warn};

pub struct IteratedPageRank<'a> {
    graph: &'a Graph,
    damping: f64,
    epsilon: f64,
    max_iterations: usize,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub damping: f64,
    /// A page is stable once its rank moves by at most this much.
    pub epsilon: f64,
    pub max_iterations: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: 0.85,
            epsilon: 0.001,
            max_iterations: 10_000,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Result {
    pub page_rank: Ranks,
    pub delta: Ranks,
    pub iterations: usize,
    pub converged: bool,
}

impl<'a> IteratedPageRank<'a> {
    pub fn new(g: &'a Graph, config: &Config) -> crate::Result<Self> {
        check_damping(config.damping)?;
        let epsilon = config.epsilon;
        if !(epsilon > 0.0) {
            return Err(Error::InvalidParameter(format!("epsilon={epsilon}")));
        }
        if config.max_iterations == 0 {
            return Err(Error::InvalidParameter("max_iterations=0".to_string()));
        }
        if g.is_empty() {
            return Err(Error::InvalidGraph("no pages".to_string()));
        }
        Ok(Self {
            graph: g,
            damping: config.damping,
            epsilon,
            max_iterations: config.max_iterations,
        })
    }
}

impl PageRank for IteratedPageRank<'_> {
    type Result = self::Result;

    fn calc(&self) -> crate::Result<Self::Result> {
        let damping = self.damping;
        let g = self.graph;
        let n = g.len() as f64;
        debug!(pages = g.len(), damping, epsilon = self.epsilon, "iterating page rank");

        let mut p = vec![1.0 / n; g.len()];
        let mut r = vec![0.0; g.len()];
        let mut iterations = 0;
        let converged = loop {
            iterations += 1;
            let dangling: f64 = g
                .iter_pages()
                .filter(|v| g.is_dangling(*v))
                .map(|v| p[v.index()])
                .sum();
            r.fill((1.0 - damping) / n + damping * dangling / n);
            for u in g.iter_pages() {
                let links = g.out_links(u);
                if links.is_empty() {
                    continue;
                }
                let share = damping * p[u.index()] / links.len() as f64;
                for v in links.iter() {
                    r[v.index()] += share;
                }
            }

            let max_delta = p
                .iter()
                .zip(r.iter())
                .map(|(a, b)| (a - b).abs())
                .fold(0.0, f64::max);
            trace!(iterations, max_delta, "page rank iteration");

            std::mem::swap(&mut p, &mut r);
            if max_delta <= self.epsilon {
                break true;
            }
            if iterations >= self.max_iterations {
                warn!(iterations, max_delta, "page rank did not converge");
                break false;
            }
        };
        debug!(iterations, converged, "page rank iterated");

        // `p` holds the newest ranks and `r` the ones before them.
        let delta: Vec<f64> = p.iter().zip(r.iter()).map(|(a, b)| a - b).collect();
        Ok(Self::Result {
            page_rank: to_ranks(g, &p),
            delta: to_ranks(g, &delta),
            iterations,
            converged,
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
            let d = self.result.delta.get(v).copied().unwrap_or(0.0);
            writeln!(f, "{v}: {p:?}, {d:?}")?;
        }
        Ok(())
    }
}
