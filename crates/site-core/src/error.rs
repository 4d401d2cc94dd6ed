use thiserror::Error;

/// Failures surfaced by the platform-free layer.
///
/// None of these are fatal for the page; the web frontend logs them and
/// leaves the affected feature in its static state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("list has no items to paginate")]
    EmptyList,
    #[error("page size must be at least 1")]
    ZeroPageSize,
    #[error("invalid orbit epoch {0:?}")]
    InvalidEpoch(String),
    #[error("session storage: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, Error>;
