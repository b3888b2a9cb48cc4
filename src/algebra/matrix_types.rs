#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// All matrices in the solver are small and dense, so there is
// only one concrete matrix type.  Data is stored column major.

/// Dense matrix in column major format
///
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Matrix<T = f64> {
    /// number of rows
    pub m: usize,
    /// number of columns
    pub n: usize,
    /// vector of data in column major format
    pub data: Vec<T>,
}
