#![cfg(feature = "serde")]
#![allow(non_snake_case)]

use dualqp::{algebra::*, solver::*};
use std::io::{Seek, SeekFrom};

#[test]
fn test_json_io() {
    let D = Matrix::from(&[
        [3., 1.], //
        [1., 2.], //
    ]);
    let d = [1., -1.];
    let A1 = Matrix::zeros((0, 2));
    let A2 = Matrix::from(&[
        [1., 0.], //
        [0., 1.], //
    ]);
    let b2 = [0.5, 0.];

    let settings = DefaultSettings::default();
    let mut solver = DefaultSolver::new(&D, &d, &A1, &[], &A2, &b2, settings).unwrap();
    solver.solve();

    // write the problem to a file
    let mut file = tempfile::tempfile().unwrap();
    solver.save_to_file(&mut file).unwrap();

    // read the problem from the file, overriding settings
    file.seek(SeekFrom::Start(0)).unwrap();
    let settings = DefaultSettingsBuilder::default()
        .check_symmetry(true)
        .build()
        .unwrap();
    let mut solver2 = DefaultSolver::<f64>::load_from_file(&mut file, Some(settings)).unwrap();
    assert!(solver2.settings.check_symmetry);
    assert_eq!(solver2.data.meq, 0);
    solver2.solve();

    assert_eq!(solver2.solution.status, SolverStatus::Solved);
    assert_eq!(solver.solution.x, solver2.solution.x);
}

#[test]
fn test_json_io_bad_file() {
    let mut file = tempfile::tempfile().unwrap();
    assert!(DefaultSolver::<f64>::load_from_file(&mut file, None).is_err());
}
