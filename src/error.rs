#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("invalid graph: {0}")]
    InvalidGraph(String),
    #[error("page not in graph: {0}")]
    InvalidPage(String),
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("cannot draw the next page after {0}")]
    DegenerateDistribution(String),
}

pub type Result<T> = std::result::Result<T, Error>;
