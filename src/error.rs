use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while setting up a simulation.
///
/// Stepping itself never fails; only parameter checks produce these.
#[derive(Debug, Error)]
pub enum Error {
    /// A parameter is out of its allowed range.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),
}
