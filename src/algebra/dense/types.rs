#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Dense owned vector of fixed length.
///
/// The length is set at construction and never changes.  Elements are
/// mutable in place through indexing or through the slice returned by
/// dereferencing.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Vector<T = f64> {
    pub(crate) data: Vec<T>,
}

/// Dense owned matrix in row-major format.
///
/// Rows and columns are fixed at construction.  Entry `(r, c)` is
/// stored at linear index `r * n + c`.
///
/// When the `serde` feature is enabled the matrix serializes as a
/// sequence of rows, the same nested-array form accepted from host
/// environments.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        into = "Vec<Vec<T>>",
        from = "Vec<Vec<T>>",
        bound(
            serialize = "T: crate::algebra::FloatT + Serialize",
            deserialize = "T: crate::algebra::FloatT + Deserialize<'de>"
        )
    )
)]
pub struct Matrix<T = f64> {
    /// number of rows
    pub(crate) m: usize,
    /// number of columns
    pub(crate) n: usize,
    /// vector of data in row major format
    pub(crate) data: Vec<T>,
}
