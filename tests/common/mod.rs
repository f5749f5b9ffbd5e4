// shared test helpers

use dualqp::solver::traits::*;
use dualqp::solver::*;
use std::cell::Cell;

/// A routine that records how many times it was invoked and
/// reports success without touching the workspace
pub struct CountingRoutine<'a>(pub &'a Cell<usize>);

impl DualActiveSetRoutine<f64> for CountingRoutine<'_> {
    fn solve(&mut self, _data: RoutineData<'_, f64>, _ws: &mut SolverWorkspace<f64>) -> RoutineStatus {
        self.0.set(self.0.get() + 1);
        RoutineStatus::Success
    }
}
