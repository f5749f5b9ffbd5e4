use super::*;
use crate::algebra::*;
use crate::solver::core::ShapeError;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Problem data for the [`DefaultSolver`](super::DefaultSolver).
///
/// Holds a single merged constraint system in which the first `meq`
/// rows of `A` are equalities and the remaining rows are `A_i·x ≥ b_i`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: FloatT + Serialize + DeserializeOwned"))]
pub struct DefaultProblemData<T: FloatT> {
    /// quadratic objective term, n×n
    pub D: Matrix<T>,
    /// linear objective term, length n
    pub d: Vector<T>,
    /// constraint matrix, q×n
    pub A: Matrix<T>,
    /// constraint right hand side, length q
    pub b: Vector<T>,
    /// number of leading equality rows
    pub meq: usize,
    /// number of variables
    pub n: usize,
    /// number of constraints
    pub q: usize,
}

impl<T> DefaultProblemData<T>
where
    T: FloatT,
{
    /// Merge the equality block `(A1, b1)` and the inequality block
    /// `(A2, b2)` into a single system and validate it.
    ///
    /// The merged matrix has `rows(A1) + rows(A2)` rows and the wider of
    /// the two column counts, with short rows padded by zeros.
    pub fn new(
        D: &Matrix<T>,
        d: &[T],
        A1: &Matrix<T>,
        b1: &[T],
        A2: &Matrix<T>,
        b2: &[T],
        settings: &DefaultSettings<T>,
    ) -> Result<Self, ShapeError> {
        let A = Matrix::vcat_padded(A1, A2);
        let b: Vector<T> = [b1, b2].concat().into();
        let meq = b1.len();

        Self::from_parts(D.clone(), d.into(), A, b, meq, settings)
    }

    /// Validate an already merged system.
    pub fn from_parts(
        D: Matrix<T>,
        d: Vector<T>,
        A: Matrix<T>,
        b: Vector<T>,
        meq: usize,
        settings: &DefaultSettings<T>,
    ) -> Result<Self, ShapeError> {
        validate(&D, &d, &A, &b, meq, settings)?;

        let n = d.len();
        let q = b.len();
        Ok(Self {
            D,
            d,
            A,
            b,
            meq,
            n,
            q,
        })
    }
}

// Checks run in a fixed order and stop at the first failure.  The
// problem dimension is taken from D.
fn validate<T: FloatT>(
    D: &Matrix<T>,
    d: &[T],
    A: &Matrix<T>,
    b: &[T],
    meq: usize,
    settings: &DefaultSettings<T>,
) -> Result<(), ShapeError> {
    let n = D.nrows();
    if !D.is_square() {
        return Err(ShapeError::DNotSquare);
    }
    if n != d.len() {
        return Err(ShapeError::DIncompatibleWithd);
    }
    // an empty constraint block has no columns to compare
    if A.nrows() > 0 && n != A.ncols() {
        return Err(ShapeError::AIncompatibleWithd);
    }
    if A.nrows() != b.len() {
        return Err(ShapeError::AIncompatibleWithb);
    }
    if meq > b.len() {
        return Err(ShapeError::TooManyEqualities);
    }
    if settings.check_symmetry && !D.is_symmetric(settings.symmetry_tolerance) {
        return Err(ShapeError::DNotSymmetric);
    }
    if !(D.data().is_finite() && d.is_finite() && A.data().is_finite() && b.is_finite()) {
        return Err(ShapeError::NonFiniteData);
    }
    Ok(())
}
