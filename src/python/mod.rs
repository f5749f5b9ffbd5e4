//! dualqp Python interface.
//!
//! This module implements a wrapper for the Rust version of Python using
//! [PyO3](https://pyo3.rs/).   To build these wrappers from `cargo`, compile the crate with
//! `--features python`.   This module has no public API.
//!
//! The Python module exposes a single `solve(D, d, A1, b1, A2, b2, settings=None)`
//! function taking nested lists or tuples of numbers.
//!

mod hostvalue_py;
mod impl_default_py;
pub(crate) mod io;
mod module_py;

// NB : Nothing is actually public here, but the python module itself
// is made public so that we can force the docstring above to appear
// in the API documentation.

pub(crate) use impl_default_py::*;
