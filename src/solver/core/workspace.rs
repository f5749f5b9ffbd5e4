use crate::algebra::FloatT;

/// Per-call output and scratch buffers for a
/// [`DualActiveSetRoutine`](super::traits::DualActiveSetRoutine).
///
/// Every buffer length is a pure function of the number of
/// variables `n` and constraints `q`.
#[derive(Debug, Clone)]
pub struct SolverWorkspace<T> {
    /// solution, length n
    pub sol: Vec<T>,
    /// Lagrange multipliers, length q
    pub lagr: Vec<T>,
    /// objective value at `sol`
    pub crval: T,
    /// active constraint indices, only the first `nact` are meaningful
    pub iact: Vec<usize>,
    /// number of active constraints
    pub nact: usize,
    /// [constraints added, constraints dropped]
    pub iter: [usize; 2],
    /// scratch space
    pub work: Vec<T>,
}

impl<T> SolverWorkspace<T>
where
    T: FloatT,
{
    pub fn new(n: usize, q: usize) -> Self {
        Self {
            sol: vec![T::zero(); n],
            lagr: vec![T::zero(); q],
            crval: T::zero(),
            iact: vec![0; q],
            nact: 0,
            iter: [0, 0],
            work: vec![T::zero(); Self::work_len(n, q)],
        }
    }

    /// scratch length `2n + r(r+5)/2 + 2q + 1` with `r = min(n,q)`
    pub fn work_len(n: usize, q: usize) -> usize {
        let r = usize::min(n, q);
        2 * n + r * (r + 5) / 2 + 2 * q + 1
    }

    /// number of variables
    pub fn n(&self) -> usize {
        self.sol.len()
    }

    /// number of constraints
    pub fn q(&self) -> usize {
        self.lagr.len()
    }
}

#[test]
fn test_workspace_sizes() {
    let ws = SolverWorkspace::<f64>::new(3, 5);
    assert_eq!(ws.sol.len(), 3);
    assert_eq!(ws.lagr.len(), 5);
    assert_eq!(ws.iact.len(), 5);
    // r = 3: 6 + 12 + 10 + 1
    assert_eq!(ws.work.len(), 29);
    assert_eq!(SolverWorkspace::<f64>::work_len(2, 0), 5);
    assert_eq!(SolverWorkspace::<f64>::work_len(0, 0), 1);
}
