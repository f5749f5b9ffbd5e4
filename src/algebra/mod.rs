//! Dense vector and matrix types used to hold problem data.
//!
//! The QP data handed to the solver is dense: an objective matrix `D`,
//! a linear term `d`, and a constraint system `(A, b)`.  All matrices
//! here are stored row-major, which coincides with the column-major
//! layout (leading dimension `n`) expected by the dual active-set
//! routine for both the symmetric `D` and the transposed constraint
//! matrix.
//!
//! Internal linear algebra goes through the [`VectorMath`] trait,
//! implemented generically on slices of [`FloatT`].

mod dense;
mod error_types;
mod floats;
mod math_traits;
mod matrix_traits;
mod vecmath;

pub use dense::*;
pub use error_types::*;
pub use floats::*;
pub use math_traits::*;
pub use matrix_traits::*;
