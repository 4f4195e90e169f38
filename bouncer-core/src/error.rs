use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported at the configuration boundary.
///
/// The stepper itself is a total arithmetic function and never fails;
/// parameter validation happens once, before a run starts.
#[derive(Debug, Error)]
pub enum Error {
    /// A simulation parameter is non-finite or outside its valid range.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// Boundary planes are ordered so the region is empty or inverted.
    #[error("invalid bounds: {0}")]
    InvalidBounds(String),
}
