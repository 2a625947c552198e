mod common;
pub use self::common::*;
mod error;
pub use self::error::{Error, Result};
mod graph;
pub use self::graph::{Graph, PageId};
mod random;
pub use self::random::RandomSource;
pub mod transition;
pub use self::transition::transition;

pub mod page_rank;

#[cfg(test)]
mod tests {
    use crate::Graph;
    use quickcheck::Arbitrary;

    #[derive(Debug, Clone)]
    pub struct RandomGraph {
        pub graph: Graph,
        pub damping: f64,
    }

    impl Arbitrary for RandomGraph {
        fn arbitrary(g: &mut quickcheck::Gen) -> Self {
            const N: usize = 10;

            let n: usize = usize::arbitrary(g) % N + 1;
            let mut links: Vec<(String, Vec<String>)> =
                (0..n).map(|i| (format!("p{i}"), vec![])).collect();
            for _ in 0..(n * 2) {
                let u = usize::arbitrary(g) % n;
                let v = usize::arbitrary(g) % n;
                links[u].1.push(format!("p{v}"));
            }
            let damping = 0.05 + (u8::arbitrary(g) % 91) as f64 / 100.0;
            let graph = Graph::new(links).expect("links stay inside the graph");
            Self { graph, damping }
        }
    }
}
