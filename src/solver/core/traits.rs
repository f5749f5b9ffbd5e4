//! Trait at the seam between problem assembly and the numerical routine.
//!
//! Any implementation of [`DualActiveSetRoutine`] can be plugged into
//! [`DefaultSolver`](crate::solver::DefaultSolver), e.g. a wrapper
//! around a foreign library or a stub used for testing.

use super::{RoutineStatus, SolverWorkspace};
use crate::algebra::FloatT;

/// Borrowed problem buffers passed to a routine for a single call.
///
/// Matrices are stored column major with the given leading dimension.
/// A row-major `n×n` symmetric `D` and a row-major `q×n` constraint
/// matrix `A` therefore arrive as `D` and `Aᵀ` respectively.
#[derive(Debug)]
pub struct RoutineData<'a, T> {
    /// objective matrix, overwritten by the routine
    pub dmat: &'a mut [T],
    /// linear objective term
    pub dvec: &'a [T],
    /// leading dimension of `dmat`
    pub fddmat: usize,
    /// number of variables
    pub n: usize,
    /// constraint matrix, n×q with leading dimension `fdamat`
    pub amat: &'a mut [T],
    /// constraint right hand side
    pub bvec: &'a [T],
    /// leading dimension of `amat`
    pub fdamat: usize,
    /// number of constraints
    pub q: usize,
    /// the first `meq` constraints are equalities
    pub meq: usize,
    /// `dmat` already holds `R⁻¹` with `D = RᵀR`
    pub factorized: bool,
}

/// A dual active-set QP routine solving
///
/// ```text
///     minimize     1/2 x' D x - d' x
///     subject to   A[0..meq] x  = b[0..meq]
///                  A[meq..q] x >= b[meq..q]
/// ```
///
/// Results are written into the workspace: `sol`, `lagr`, `crval`,
/// the first `nact` entries of `iact` and `iter`.
pub trait DualActiveSetRoutine<T: FloatT> {
    fn solve(&mut self, data: RoutineData<'_, T>, ws: &mut SolverWorkspace<T>) -> RoutineStatus;
}

impl<T, F> DualActiveSetRoutine<T> for F
where
    T: FloatT,
    F: FnMut(RoutineData<'_, T>, &mut SolverWorkspace<T>) -> RoutineStatus,
{
    fn solve(&mut self, data: RoutineData<'_, T>, ws: &mut SolverWorkspace<T>) -> RoutineStatus {
        self(data, ws)
    }
}
