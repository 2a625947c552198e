use crate::{common::*, Error, Graph, PageId, Result};

/// Probability of each page being the next one visited from `page` by a
/// random surfer.
///
/// With probability `1 - damping` the surfer jumps to any page uniformly,
/// otherwise it follows one of `page`'s links uniformly. From a dangling page
/// every link is taken to be the whole graph, so the result is uniform.
pub fn transition(graph: &Graph, page: &str, damping: f64) -> Result<Ranks> {
    check_damping(damping)?;
    let id = graph
        .page_id(page)
        .ok_or_else(|| Error::InvalidPage(page.to_string()))?;
    Ok(to_ranks(graph, &weights(graph, id, damping)))
}

/// Same distribution as [`transition`], laid out in the graph's page order.
pub fn weights(graph: &Graph, page: PageId, damping: f64) -> Vec<f64> {
    let n = graph.len() as f64;
    let links = graph.out_links(page);
    if links.is_empty() {
        return vec![1.0 / n; graph.len()];
    }
    let mut res = vec![(1.0 - damping) / n; graph.len()];
    let unit = damping / links.len() as f64;
    for v in links.iter() {
        res[v.index()] += unit;
    }
    res
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::RandomGraph;
    use quickcheck_macros::quickcheck;

    #[test]
    fn linked_pages() {
        let g = Graph::new([("a", vec!["b"]), ("b", vec!["a", "c"]), ("c", vec!["a"])]).unwrap();
        let dist = transition(&g, "b", 0.85).unwrap();
        assert!((dist["a"] - (0.05 + 0.425)).abs() < 1e-9, "{dist:?}");
        assert!((dist["c"] - (0.05 + 0.425)).abs() < 1e-9, "{dist:?}");
        assert!((dist["b"] - 0.05).abs() < 1e-9, "{dist:?}");
        assert!(dist["a"] > dist["b"]);
    }

    #[test]
    fn dangling_page_is_uniform() {
        let g = Graph::new([("a", vec!["b"]), ("b", vec![]), ("c", vec!["a"])]).unwrap();
        let dist = transition(&g, "b", 0.85).unwrap();
        for p in ["a", "b", "c"] {
            assert!((dist[p] - 1.0 / 3.0).abs() < 1e-9, "{dist:?}");
        }
    }

    #[test]
    fn single_page() {
        let g = Graph::new([("only", Vec::<&str>::new())]).unwrap();
        let dist = transition(&g, "only", 0.85).unwrap();
        assert_eq!(dist.len(), 1);
        assert!((dist["only"] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn self_loop_is_an_ordinary_link() {
        let g = Graph::new([("a", vec!["a"]), ("b", vec!["a"])]).unwrap();
        let dist = transition(&g, "a", 0.5).unwrap();
        assert!((dist["a"] - 0.75).abs() < 1e-9, "{dist:?}");
        assert!((dist["b"] - 0.25).abs() < 1e-9, "{dist:?}");
    }

    #[test]
    fn bad_inputs() {
        let g = Graph::new([("a", Vec::<&str>::new())]).unwrap();
        assert_eq!(
            transition(&g, "z", 0.85),
            Err(Error::InvalidPage("z".to_string()))
        );
        assert!(matches!(
            transition(&g, "a", 1.0),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[quickcheck]
    fn sums_to_one(g: RandomGraph) {
        let damping = g.damping;
        let g = &g.graph;
        for page in g.iter_names() {
            let dist = transition(g, page, damping).unwrap();
            assert_eq!(dist.len(), g.len());
            assert!(dist.values().all(|p| *p >= 0.0), "{dist:?}");
            assert!((norm_1(&dist) - 1.0).abs() < 1e-9, "{dist:?}");
            let id = g.page_id(page).unwrap();
            for v in g.out_links(id) {
                for u in g.iter_pages() {
                    if !g.out_links(id).contains(&u) {
                        assert!(dist[g.name(*v)] > dist[g.name(u)], "{dist:?}");
                    }
                }
            }
        }
    }
}
