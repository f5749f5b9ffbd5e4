//! dualqp solver main module.
//!
//! This module contains the main types and traits for the dualqp solver.
//!
//! The solver comes with a [default implementation](crate::solver::implementations::default)
//! that assembles dense problem data from an equality block and an
//! inequality block and solves it with the Goldfarb-Idnani dual
//! active-set method.
//!
//! A different numerical routine can be used by implementing
//! [`DualActiveSetRoutine`](crate::solver::traits::DualActiveSetRoutine)
//! and passing it to
//! [`DefaultSolver::new_with_routine`](crate::solver::DefaultSolver::new_with_routine).

// internal module structure
pub(crate) mod core;
pub mod implementations;

//Here we expose only part of the solver internals
//and rearrange public modules a bit to give a more
//user friendly API

//user facing status, error and workspace types
pub use crate::solver::core::{
    ArgumentRole, QpError, RoutineStatus, SettingsError, ShapeError, SolverStatus,
    SolverWorkspace,
};

//user facing traits required to define new routines
pub use crate::solver::core::traits;

pub use crate::solver::implementations::default;
pub use crate::solver::implementations::default::*;
