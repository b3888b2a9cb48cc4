use thiserror::Error;

/// Error type returned by matrix concatenation operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixConcatenationError {
    #[error("Incompatible dimensions")]
    /// Indicates inputs have incompatible dimension
    IncompatibleDimension,
}

/// Error type returned by dense factorization routines.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DenseFactorizationError {
    /// Matrix dimension fields and/or array lengths are incompatible
    #[error("Matrix dimension fields and/or array lengths are incompatible")]
    IncompatibleDimension,
    /// No acceptable pivot was found in the given column
    #[error("LU factorization is singular at column {0}")]
    Singular(usize),
    /// The factors or solution contain Infs or NaNs
    #[error("LU solution is not finite")]
    NonFinite,
}
