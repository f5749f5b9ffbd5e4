#![allow(non_snake_case)]

use dualqp::{algebra::*, solver::*};

// minimize 1/2 |x|^2 - d'x
// subject to x1 + x2 = 1, x1 >= 0
fn eq_constrained_data() -> (Matrix<f64>, Matrix<f64>, Vec<f64>, Matrix<f64>, Vec<f64>) {
    let D = Matrix::identity(2);
    let A1 = Matrix::from(&[[1., 1.]]);
    let b1 = vec![1.];
    let A2 = Matrix::from(&[[1., 0.]]);
    let b2 = vec![0.];
    (D, A1, b1, A2, b2)
}

#[test]
fn test_eq_constrained_inactive_bound() {
    let (D, A1, b1, A2, b2) = eq_constrained_data();
    let d = [0., 0.];

    let settings = DefaultSettings::default();
    let mut solver = DefaultSolver::new(&D, &d, &A1, &b1, &A2, &b2, settings).unwrap();

    solver.solve();

    let refsol = [0.5, 0.5];
    assert_eq!(solver.solution.status, SolverStatus::Solved);
    assert!(solver.solution.x.dist(&refsol) <= 1e-8);
    assert!((solver.solution.obj_val - 0.25).abs() <= 1e-8);

    // only the equality is active
    assert_eq!(solver.solution.iact, vec![0]);
    assert!((solver.solution.lagr[0] - 0.5).abs() <= 1e-8);
    assert_eq!(solver.solution.lagr[1], 0.);
}

#[test]
fn test_eq_constrained_active_bound() {
    let (D, A1, b1, A2, b2) = eq_constrained_data();
    let d = [-2., 0.];

    let settings = DefaultSettings::default();
    let mut solver = DefaultSolver::new(&D, &d, &A1, &b1, &A2, &b2, settings).unwrap();

    solver.solve();

    let refsol = [0., 1.];
    assert_eq!(solver.solution.status, SolverStatus::Solved);
    assert!(solver.solution.x.dist(&refsol) <= 1e-8);
    assert!((solver.solution.obj_val - 0.5).abs() <= 1e-8);
    assert_eq!(solver.solution.nact, 2);

    // stationarity D x - d = A' lagr with a nonnegative
    // multiplier on the inequality
    let lagr = &solver.solution.lagr;
    assert!(lagr[1] >= 0.);
    assert!((lagr[0] - 1.).abs() <= 1e-8);
    assert!((lagr[1] - 1.).abs() <= 1e-8);
}

#[test]
fn test_eq_constrained_resolve() {
    let (D, A1, b1, A2, b2) = eq_constrained_data();
    let d = [-2., 0.];

    let settings = DefaultSettings::default();
    let mut solver = DefaultSolver::new(&D, &d, &A1, &b1, &A2, &b2, settings).unwrap();

    solver.solve();
    let first = solver.solution.clone();
    solver.solve();

    // stored problem data is not modified by a solve
    assert_eq!(solver.data.D, D);
    assert_eq!(first.x, solver.solution.x);
    assert_eq!(first.lagr, solver.solution.lagr);
}

#[test]
fn test_eq_constrained_infeasible() {
    // x1 >= 1 and -x1 >= 0
    let D = Matrix::identity(1);
    let d = [0.];
    let empty = Matrix::zeros((0, 1));
    let A2 = Matrix::from(&[
        [1.],  //
        [-1.], //
    ]);
    let b2 = [1., 0.];

    let settings = DefaultSettings::<f64>::default();
    let mut solver = DefaultSolver::new(&D, &d, &empty, &[], &A2, &b2, settings).unwrap();

    solver.solve();
    assert_eq!(solver.solution.status, SolverStatus::Infeasible);
    assert_eq!(solver.solution.error_code, 1);
    assert!(solver.solution.obj_val.is_nan());
}

#[test]
fn test_eq_constrained_factorized() {
    // D = R'R with R = [2 1; 0 1]
    let D = Matrix::from(&[
        [4., 2.], //
        [2., 2.], //
    ]);
    let Rinv = Matrix::from(&[
        [0.5, -0.5], //
        [0., 1.],    //
    ]);
    let d = [1., 1.];
    let A1 = Matrix::zeros((0, 2));
    let A2 = Matrix::from(&[[1., 0.]]);
    let b2 = [0.5];

    let settings = DefaultSettings::default();
    let mut solver = DefaultSolver::new(&D, &d, &A1, &[], &A2, &b2, settings).unwrap();
    solver.solve();

    let settings = DefaultSettingsBuilder::default()
        .factorized(true)
        .build()
        .unwrap();
    let mut solver2 = DefaultSolver::new(&Rinv, &d, &A1, &[], &A2, &b2, settings).unwrap();
    solver2.solve();

    assert_eq!(solver.solution.status, SolverStatus::Solved);
    assert_eq!(solver2.solution.status, SolverStatus::Solved);
    assert!(solver.solution.x.dist(&solver2.solution.x) <= 1e-8);
    assert!(solver.solution.lagr.dist(&solver2.solution.lagr) <= 1e-8);
}

#[test]
fn test_eq_constrained_from_problem_data() {
    let (D, A1, b1, A2, b2) = eq_constrained_data();
    let d = [-2., 0.];

    let settings = DefaultSettings::default();
    let data = DefaultProblemData::new(&D, &d, &A1, &b1, &A2, &b2, &settings).unwrap();
    let mut solver = DefaultSolver::from_problem_data(data, settings).unwrap();

    solver.solve();

    let refsol = [0., 1.];
    assert_eq!(solver.solution.status, SolverStatus::Solved);
    assert!(solver.solution.x.dist(&refsol) <= 1e-8);
    assert!(solver.timers().is_some());
}
