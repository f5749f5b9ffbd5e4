// Python wrappers and interface for the Default solver
// implementation and its related types.

#![allow(non_snake_case)]

use pyo3::create_exception;
use pyo3::exceptions::{PyException, PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyTuple;
use std::fmt::Write;

//python interface require some access to solver internals,
//so just use the internal crate definitions instead of the API.
use crate::solver::core::{QpError, SolverStatus};
use crate::solver::implementations::default::*;

//Here we end up repeating several datatypes defined internally
//in the default implementation.   Pyo3 does not support
//autoderivation of python types from Rust structs that use
//generics.

create_exception!(
    dualqp,
    QpNumericalError,
    PyException,
    "The QP routine failed.  Arguments are (message, error_code)."
);

impl From<QpError> for PyErr {
    fn from(err: QpError) -> PyErr {
        let msg = err.to_string();
        match err {
            QpError::Arity(_)
            | QpError::Type(_)
            | QpError::RowType { .. }
            | QpError::NonNumeric(_) => PyTypeError::new_err(msg),
            QpError::Shape(_) | QpError::Settings(_) => PyValueError::new_err(msg),
            QpError::Numerical(status) => QpNumericalError::new_err((msg, status.code())),
        }
    }
}

// ----------------------------------
// Solution
// ----------------------------------

#[derive(Debug)]
#[pyclass(name = "QpSolution")]
pub struct PyQpSolution {
    #[pyo3(get)]
    pub x: Vec<f64>,
    #[pyo3(get)]
    pub lagr: Vec<f64>,
    #[pyo3(get)]
    pub obj_val: f64,
    #[pyo3(get)]
    pub iact: Vec<usize>,
    #[pyo3(get)]
    pub nact: usize,
    #[pyo3(get)]
    pub iterations: Vec<usize>,
    #[pyo3(get)]
    pub status: PySolverStatus,
    #[pyo3(get)]
    pub error_code: i32,
    #[pyo3(get)]
    pub solve_time: f64,
}

impl PyQpSolution {
    pub(crate) fn new_from_internal(result: &DefaultSolution<f64>) -> Self {
        Self {
            x: result.x.clone(),
            lagr: result.lagr.clone(),
            obj_val: result.obj_val,
            iact: result.iact.clone(),
            nact: result.nact,
            iterations: result.iterations.to_vec(),
            status: PySolverStatus::new_from_internal(&result.status),
            error_code: result.error_code,
            solve_time: result.solve_time,
        }
    }
}

#[pymethods]
impl PyQpSolution {
    pub fn __repr__(&self) -> String {
        format!("dualqp solution object (status = {:?})", self.status)
    }
}

// ----------------------------------
// Solver Status
// ----------------------------------

#[derive(Debug, Clone, PartialEq)]
#[pyclass(name = "SolverStatus", eq, eq_int)]
pub enum PySolverStatus {
    Unsolved,
    Solved,
    Infeasible,
    NonPositiveDefinite,
    RoutineError,
}

impl PySolverStatus {
    pub(crate) fn new_from_internal(status: &SolverStatus) -> Self {
        match status {
            SolverStatus::Unsolved => PySolverStatus::Unsolved,
            SolverStatus::Solved => PySolverStatus::Solved,
            SolverStatus::Infeasible => PySolverStatus::Infeasible,
            SolverStatus::NonPositiveDefinite => PySolverStatus::NonPositiveDefinite,
            SolverStatus::RoutineError => PySolverStatus::RoutineError,
        }
    }
}

#[pymethods]
impl PySolverStatus {
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }
}

// ----------------------------------
// Solver Settings
// ----------------------------------

#[derive(Debug, Clone)]
#[pyclass(name = "DefaultSettings")]
pub struct PyDefaultSettings {
    #[pyo3(get, set)]
    pub verbose: bool,
    #[pyo3(get, set)]
    pub coerce_non_numeric_to_zero: bool,
    #[pyo3(get, set)]
    pub check_symmetry: bool,
    #[pyo3(get, set)]
    pub symmetry_tolerance: f64,
    #[pyo3(get, set)]
    pub factorized: bool,
}

#[pymethods]
impl PyDefaultSettings {
    #[new]
    pub fn new() -> Self {
        PyDefaultSettings::new_from_internal(&DefaultSettings::<f64>::default())
    }

    #[staticmethod]
    #[pyo3(name = "default")]
    pub fn py_default() -> Self {
        PyDefaultSettings::default()
    }

    pub fn __repr__(&self) -> String {
        let mut s = String::new();
        write!(s, "{:#?}", self).unwrap();
        s
    }
}

//Default not really necessary, but keeps clippy happy....
impl Default for PyDefaultSettings {
    fn default() -> Self {
        PyDefaultSettings::new()
    }
}

impl PyDefaultSettings {
    pub(crate) fn new_from_internal(set: &DefaultSettings<f64>) -> Self {
        PyDefaultSettings {
            verbose: set.verbose,
            coerce_non_numeric_to_zero: set.coerce_non_numeric_to_zero,
            check_symmetry: set.check_symmetry,
            symmetry_tolerance: set.symmetry_tolerance,
            factorized: set.factorized,
        }
    }

    pub(crate) fn to_internal(&self) -> DefaultSettings<f64> {
        DefaultSettings::<f64> {
            verbose: self.verbose,
            coerce_non_numeric_to_zero: self.coerce_non_numeric_to_zero,
            check_symmetry: self.check_symmetry,
            symmetry_tolerance: self.symmetry_tolerance,
            factorized: self.factorized,
        }
    }
}

// ----------------------------------
// Solve
// ----------------------------------

/// solve(D, d, A1, b1, A2, b2, settings=None)
///
/// Minimize 1/2 x'Dx - d'x subject to A1 x = b1 and A2 x >= b2.
/// Raises QpNumericalError if the constraints are inconsistent or
/// D is not positive definite.
#[pyfunction(name = "solve", signature = (*args, settings = None))]
pub(crate) fn solve_py(
    args: &Bound<'_, PyTuple>,
    settings: Option<PyDefaultSettings>,
) -> PyResult<PyQpSolution> {
    let args: Vec<Bound<'_, PyAny>> = args.iter().collect();
    let settings = settings.map(|s| s.to_internal());
    let solution = crate::host::solve(&args, settings)?;
    Ok(PyQpSolution::new_from_internal(&solution))
}
