use super::{RoutineStatus, SettingsError};
use thiserror::Error;

/// Dimensional inconsistency in assembled problem data.  Always
/// reported before any workspace is allocated.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    #[error("The D matrix must be symmetric")]
    DNotSquare,
    #[error("The D matrix and the d vector are incompatible")]
    DIncompatibleWithd,
    #[error("The A matrix and the d vector are incompatible")]
    AIncompatibleWithd,
    #[error("The A matrix and the b vector are incompatible")]
    AIncompatibleWithb,
    #[error("meq exceeds the number of constraints")]
    TooManyEqualities,
    #[error("The D matrix is not numerically symmetric")]
    DNotSymmetric,
    #[error("Problem data contains NaN or infinite values")]
    NonFiniteData,
}

/// The six positional arguments of a solve call
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentRole {
    D,
    d,
    A1,
    b1,
    A2,
    b2,
}

impl ArgumentRole {
    pub const ALL: [ArgumentRole; 6] = [
        ArgumentRole::D,
        ArgumentRole::d,
        ArgumentRole::A1,
        ArgumentRole::b1,
        ArgumentRole::A2,
        ArgumentRole::b2,
    ];
}

impl std::fmt::Display for ArgumentRole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Error type returned by the host facing solve entry points
#[derive(Error, Debug)]
pub enum QpError {
    /// wrong number of positional arguments
    #[error("Expected 6 arguments: D, d, A1, b1, A2, b2 (got {0})")]
    Arity(usize),
    /// an argument is not array shaped
    #[error("{0} must be an array")]
    Type(ArgumentRole),
    /// a row of a matrix argument is not array shaped
    #[error("row {row} of {role} must be an array")]
    RowType { role: ArgumentRole, row: usize },
    /// a non-numeric entry with coercion disabled
    #[error("{0} contains a non-numeric entry")]
    NonNumeric(ArgumentRole),
    #[error(transparent)]
    Shape(#[from] ShapeError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    /// the routine ran and reported failure
    #[error("QP routine failed: {0}")]
    Numerical(RoutineStatus),
}

impl QpError {
    /// The routine's integer error code, if the error came from the routine
    pub fn error_code(&self) -> Option<i32> {
        match self {
            QpError::Numerical(status) => Some(status.code()),
            _ => None,
        }
    }
}

#[test]
fn test_error_messages() {
    assert_eq!(
        ShapeError::DNotSquare.to_string(),
        "The D matrix must be symmetric"
    );
    assert_eq!(QpError::Type(ArgumentRole::A1).to_string(), "A1 must be an array");
    assert_eq!(QpError::Type(ArgumentRole::d).to_string(), "d must be an array");
    assert_eq!(
        QpError::from(ShapeError::AIncompatibleWithb).to_string(),
        "The A matrix and the b vector are incompatible"
    );
    assert_eq!(QpError::Numerical(RoutineStatus::Infeasible).error_code(), Some(1));
    assert_eq!(QpError::Arity(5).error_code(), None);
}
