#![allow(non_snake_case)]

use dualqp::{algebra::*, solver::*};

#[test]
fn test_unconstrained_feasible() {
    let D = Matrix::identity(3);
    let d = [1., 2., -3.];
    let A = Matrix::zeros((0, 3)); // <- no constraints
    let b = [];

    let settings = DefaultSettings::<f64>::default();
    let mut solver = DefaultSolver::new(&D, &d, &A, &b, &A, &b, settings).unwrap();

    solver.solve();

    assert!(solver.solution.x.dist(&d) <= 1e-6);
    assert!((solver.solution.obj_val + 7.).abs() <= 1e-8);
    assert_eq!(solver.solution.status, SolverStatus::Solved);
    assert_eq!(solver.solution.nact, 0);
    assert!(solver.solution.lagr.is_empty());
}

#[test]
fn test_unconstrained_scaled() {
    let D = Matrix::from(&[
        [2., 0.], //
        [0., 4.], //
    ]);
    let d = [1., 1.];
    let empty = Matrix::zeros((0, 0));

    let settings = DefaultSettings::default();
    let mut solver = DefaultSolver::new(&D, &d, &empty, &[], &empty, &[], settings).unwrap();

    solver.solve();

    let refsol = [0.5, 0.25];
    assert!(solver.solution.x.dist(&refsol) <= 1e-6);
    assert_eq!(solver.solution.iterations, [0, 0]);
}

#[test]
fn test_unconstrained_not_positive_definite() {
    let D = Matrix::from(&[
        [1., 2.], //
        [2., 1.], //
    ]);
    let d = [1., 0.];
    let empty = Matrix::zeros((0, 0));

    let settings = DefaultSettings::<f64>::default();
    let mut solver = DefaultSolver::new(&D, &d, &empty, &[], &empty, &[], settings).unwrap();

    solver.solve();
    assert_eq!(solver.solution.status, SolverStatus::NonPositiveDefinite);
    assert_eq!(solver.solution.error_code, 2);
    assert!(solver.solution.obj_val.is_nan());
}

#[test]
fn test_unconstrained_non_finite() {
    let D = Matrix::from(&[[f64::NAN]]);
    let d = [1.];
    let empty = Matrix::zeros((0, 1));
    let A2 = Matrix::identity(1);
    let b2 = [2.];

    let settings = DefaultSettings::default();
    let result = DefaultSolver::new(&D, &d, &empty, &[], &A2, &b2, settings);
    assert!(matches!(result, Err(QpError::Shape(ShapeError::NonFiniteData))));

    // a non-finite bound is never silently ignored
    let D = Matrix::identity(1);
    let b2 = [f64::NAN];
    let settings = DefaultSettings::default();
    let result = DefaultSolver::new(&D, &d, &empty, &[], &A2, &b2, settings);
    assert!(matches!(result, Err(QpError::Shape(ShapeError::NonFiniteData))));
}
