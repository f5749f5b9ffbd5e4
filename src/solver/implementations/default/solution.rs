use crate::{
    algebra::*,
    solver::core::{RoutineStatus, SolverStatus, SolverWorkspace},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Solution returned by the [`DefaultSolver`](super::DefaultSolver)
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DefaultSolution<T> {
    /// primal solution
    pub x: Vec<T>,
    /// Lagrange multipliers, one per constraint row.  Zero for
    /// constraints outside the final active set.
    pub lagr: Vec<T>,
    /// objective value 1/2 x'Dx - d'x
    pub obj_val: T,
    /// indices of the active constraints
    pub iact: Vec<usize>,
    /// number of active constraints
    pub nact: usize,
    /// [constraints added, constraints dropped]
    pub iterations: [usize; 2],
    /// final solver status
    pub status: SolverStatus,
    /// routine error code, 0 on success
    pub error_code: i32,
    /// solve time in seconds
    pub solve_time: f64,
}

impl<T> DefaultSolution<T>
where
    T: FloatT,
{
    /// Create a new `DefaultSolution` object
    pub fn new(n: usize, q: usize) -> Self {
        Self {
            x: vec![T::zero(); n],
            lagr: vec![T::zero(); q],
            obj_val: T::nan(),
            iact: Vec::new(),
            nact: 0,
            iterations: [0, 0],
            status: SolverStatus::Unsolved,
            error_code: 0,
            solve_time: 0f64,
        }
    }

    /// Copy routine outputs.  The objective is NaN unless the
    /// routine succeeded; on infeasibility the remaining fields hold
    /// the iterate at which the routine stopped.
    pub(crate) fn post_process(&mut self, status: RoutineStatus, ws: &SolverWorkspace<T>) {
        self.status = status.into();
        self.error_code = status.code();

        self.x.copy_from(&ws.sol);
        self.lagr.copy_from(&ws.lagr);
        self.nact = ws.nact;
        self.iact = ws.iact[..ws.nact].to_vec();
        self.iterations = ws.iter;

        self.obj_val = if status.is_success() {
            ws.crval
        } else {
            T::nan()
        };
    }
}

#[test]
fn test_post_process() {
    let mut ws = SolverWorkspace::<f64>::new(2, 3);
    ws.sol.copy_from_slice(&[1., 2.]);
    ws.lagr.copy_from_slice(&[0., 0.5, 0.]);
    ws.crval = -1.5;
    ws.iact[0] = 1;
    ws.iact[1] = 2;
    ws.nact = 1;
    ws.iter = [2, 1];

    let mut solution = DefaultSolution::<f64>::new(2, 3);
    solution.post_process(RoutineStatus::Success, &ws);
    assert_eq!(solution.x, vec![1., 2.]);
    assert_eq!(solution.iact, vec![1]);
    assert_eq!(solution.iterations, [2, 1]);
    assert_eq!(solution.obj_val, -1.5);
    assert_eq!(solution.status, SolverStatus::Solved);

    solution.post_process(RoutineStatus::Infeasible, &ws);
    assert!(solution.obj_val.is_nan());
    assert_eq!(solution.error_code, 1);
    assert_eq!(solution.status, SolverStatus::Infeasible);
}
