use thiserror::Error;

/// Error type returned when constructing dense matrices from raw data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DenseFormatError {
    /// Matrix dimension fields and data length are incompatible
    #[error("Matrix dimensions ({m} x {n}) incompatible with data length {len}")]
    IncompatibleDimension { m: usize, n: usize, len: usize },
}
