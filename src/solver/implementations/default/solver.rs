use super::*;
use crate::algebra::*;
use crate::io::PrintTarget;
use crate::solver::core::{traits::*, QpError, SolverWorkspace};
use crate::timers::*;
use itertools::iproduct;

/// Solver for dense QPs with equality and inequality constraints.
///
/// Problem data is merged and validated on construction.  Each call to
/// [`solve`](DefaultSolver::solve) copies `D` and `A` into fresh
/// buffers for the routine, so the stored problem is never modified
/// and `solve` may be repeated.
pub struct DefaultSolver<T: FloatT = f64, R = GoldfarbIdnani> {
    pub data: DefaultProblemData<T>,
    pub settings: DefaultSettings<T>,
    pub solution: DefaultSolution<T>,
    pub(crate) routine: R,
    pub(crate) stream: PrintTarget,
    pub(crate) timers: Option<Timers>,
}

impl<T> DefaultSolver<T, GoldfarbIdnani>
where
    T: FloatT,
{
    pub fn new(
        D: &Matrix<T>,
        d: &[T],
        A1: &Matrix<T>,
        b1: &[T],
        A2: &Matrix<T>,
        b2: &[T],
        settings: DefaultSettings<T>,
    ) -> Result<Self, QpError> {
        Self::new_with_routine(D, d, A1, b1, A2, b2, settings, GoldfarbIdnani)
    }

    pub fn from_problem_data(
        data: DefaultProblemData<T>,
        settings: DefaultSettings<T>,
    ) -> Result<Self, QpError> {
        Self::from_problem_data_with_routine(data, settings, GoldfarbIdnani)
    }
}

impl<T, R> DefaultSolver<T, R>
where
    T: FloatT,
    R: DualActiveSetRoutine<T>,
{
    /// As [`new`](DefaultSolver::new), but solving with a
    /// user supplied routine
    #[allow(clippy::too_many_arguments)]
    pub fn new_with_routine(
        D: &Matrix<T>,
        d: &[T],
        A1: &Matrix<T>,
        b1: &[T],
        A2: &Matrix<T>,
        b2: &[T],
        settings: DefaultSettings<T>,
        routine: R,
    ) -> Result<Self, QpError> {
        settings.validate()?;
        let mut timers = Timers::default();
        let data;
        timeit! {timers => "setup"; {
            data = DefaultProblemData::new(D, d, A1, b1, A2, b2, &settings)?;
        }}
        Ok(Self::assemble(data, settings, routine, timers))
    }

    pub fn from_problem_data_with_routine(
        data: DefaultProblemData<T>,
        settings: DefaultSettings<T>,
        routine: R,
    ) -> Result<Self, QpError> {
        settings.validate()?;
        let mut timers = Timers::default();
        let data_checked;
        timeit! {timers => "setup"; {
            let DefaultProblemData { D, d, A, b, meq, .. } = data;
            data_checked = DefaultProblemData::from_parts(D, d, A, b, meq, &settings)?;
        }}
        Ok(Self::assemble(data_checked, settings, routine, timers))
    }

    fn assemble(
        data: DefaultProblemData<T>,
        settings: DefaultSettings<T>,
        routine: R,
        timers: Timers,
    ) -> Self {
        let solution = DefaultSolution::new(data.n, data.q);
        Self {
            data,
            settings,
            solution,
            routine,
            stream: PrintTarget::default(),
            timers: Some(timers),
        }
    }

    /// Solve the stored problem, writing results into `self.solution`.
    pub fn solve(&mut self) {
        //timers is stored as an option so that
        //we can swap it out here and avoid
        //borrow conflicts with other fields.
        let mut timers = self.timers.take().unwrap_or_default();

        let _ = self.print_configuration();
        let elapsed_before = timers.elapsed("solve");

        timeit! {timers => "solve"; {

        let (n, q) = (self.data.n, self.data.q);
        let mut ws = SolverWorkspace::<T>::new(n, q);

        // column major copy of D, transposing so that a factorized
        // upper triangular input keeps its orientation
        let mut dmat = vec![T::zero(); n * n];
        for (i, j) in iproduct!(0..n, 0..n) {
            dmat[i + j * n] = self.data.D[(i, j)];
        }
        // row major A is already A' in column major form
        let mut amat = self.data.A.data().to_vec();

        let routine_data = RoutineData {
            dmat: &mut dmat,
            dvec: &self.data.d,
            fddmat: n,
            n,
            amat: &mut amat,
            bvec: &self.data.b,
            fdamat: n,
            q,
            meq: self.data.meq,
            factorized: self.settings.factorized,
        };

        let status = self.routine.solve(routine_data, &mut ws);
        self.solution.post_process(status, &ws);

        }} //end "solve" timer

        self.solution.solve_time = (timers.elapsed("solve") - elapsed_before).as_secs_f64();
        self.timers.replace(timers);

        let _ = self.print_footer();
    }

    /// The routine used by this solver
    pub fn routine(&self) -> &R {
        &self.routine
    }

    /// Mutable access to the routine used by this solver
    pub fn routine_mut(&mut self) -> &mut R {
        &mut self.routine
    }

    /// Accumulated setup and solve timings
    pub fn timers(&self) -> Option<&Timers> {
        self.timers.as_ref()
    }
}
