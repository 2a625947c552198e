use crate::{Error, Result};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Dense index of a page inside a [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageId(pub(crate) usize);

impl PageId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// An immutable link graph over a corpus of pages.
///
/// Pages are kept in sorted identifier order, so iterating a graph (and
/// therefore drawing from a seeded random source while walking it) is
/// deterministic.
#[derive(Debug, Clone)]
pub struct Graph {
    pages: Vec<String>,
    index: HashMap<String, PageId, ahash::RandomState>,
    out_links: Vec<Vec<PageId>>,
}

impl Graph {
    /// Builds a graph from `(page, links)` pairs.
    ///
    /// A page listed more than once gets the union of its links. Every link
    /// target must itself be listed as a page.
    pub fn new<I, K, L, V>(links: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, L)>,
        K: Into<String>,
        L: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let mut corpus: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (page, targets) in links {
            corpus
                .entry(page.into())
                .or_default()
                .extend(targets.into_iter().map(Into::into));
        }
        if corpus.is_empty() {
            return Err(Error::InvalidGraph("no pages".to_string()));
        }

        let pages: Vec<String> = corpus.keys().cloned().collect();
        let index: HashMap<_, _, ahash::RandomState> = pages
            .iter()
            .enumerate()
            .map(|(i, p)| (p.clone(), PageId(i)))
            .collect();
        let mut out_links = Vec::with_capacity(pages.len());
        for (page, targets) in corpus.iter() {
            let mut ids = Vec::with_capacity(targets.len());
            for t in targets.iter() {
                let Some(id) = index.get(t) else {
                    return Err(Error::InvalidGraph(format!(
                        "{page} links to {t}, which is not in the graph"
                    )));
                };
                ids.push(*id);
            }
            out_links.push(ids);
        }
        Ok(Self {
            pages,
            index,
            out_links,
        })
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Always `false` for a constructed graph.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn page_id(&self, page: &str) -> Option<PageId> {
        self.index.get(page).copied()
    }

    pub fn name(&self, id: PageId) -> &str {
        &self.pages[id.0]
    }

    pub fn iter_pages(&self) -> impl Iterator<Item = PageId> + '_ {
        (0..self.pages.len()).map(PageId)
    }

    pub fn iter_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.pages.iter().map(String::as_str)
    }

    pub fn out_links(&self, id: PageId) -> &[PageId] {
        &self.out_links[id.0]
    }

    pub fn is_dangling(&self, id: PageId) -> bool {
        self.out_links[id.0].is_empty()
    }

    pub fn edge_size(&self) -> usize {
        self.out_links.iter().map(Vec::len).sum()
    }
}
