//! Host-agnostic solve entry point.
//!
//! A host environment (a scripting language, a JSON document, ...)
//! supplies the six positional arguments `D, d, A1, b1, A2, b2` as
//! nested arrays of numbers.  Any value type implementing [`HostValue`]
//! can be converted to the dense containers in [`algebra`](crate::algebra)
//! and solved with [`solve`].
//!
//! Argument checks happen in a fixed order, each before any numerical
//! work: the argument count, then that every argument is array shaped,
//! then conversion, then the dimensional checks of
//! [`DefaultProblemData`](crate::solver::DefaultProblemData).

use crate::algebra::*;
use crate::solver::core::{traits::DualActiveSetRoutine, ArgumentRole, QpError, RoutineStatus};
use crate::solver::{DefaultSettings, DefaultSolution, DefaultSolver, GoldfarbIdnani};
use std::borrow::Cow;

#[cfg(feature = "serde")]
mod json;

/// Read-only view of a dynamically typed host value.
///
/// A value is numeric when it converts to a real number and is not a
/// boolean, even where the host would convert booleans to 0 or 1.
pub trait HostValue: Clone {
    /// The elements of the value, if it is array shaped
    fn as_array(&self) -> Option<Cow<'_, [Self]>>;
    /// true for the host's boolean values
    fn is_bool(&self) -> bool;
    /// Conversion of the value to a real number, if the host
    /// provides one
    fn to_f64(&self) -> Option<f64>;

    /// The value as a real number, if it is numeric
    fn as_number(&self) -> Option<f64> {
        if self.is_bool() {
            None
        } else {
            self.to_f64()
        }
    }
}

fn number_from_host<V: HostValue>(
    value: &V,
    role: ArgumentRole,
    coerce: bool,
) -> Result<f64, QpError> {
    match value.as_number() {
        Some(v) => Ok(v),
        None if coerce => Ok(0.0),
        None => Err(QpError::NonNumeric(role)),
    }
}

/// Convert an array of numbers.  Non-numeric entries become zero when
/// `coerce` is set and are an error otherwise.
pub fn vector_from_host<V: HostValue>(
    value: &V,
    role: ArgumentRole,
    coerce: bool,
) -> Result<Vector<f64>, QpError> {
    let elems = value.as_array().ok_or(QpError::Type(role))?;
    numbers_from_host(&elems, role, coerce).map(Vector::from)
}

fn numbers_from_host<V: HostValue>(
    elems: &[V],
    role: ArgumentRole,
    coerce: bool,
) -> Result<Vec<f64>, QpError> {
    elems
        .iter()
        .map(|v| number_from_host(v, role, coerce))
        .collect()
}

/// Convert an array of rows.  The column count is the length of the
/// longest row and shorter rows are padded with zeros.
pub fn matrix_from_host<V: HostValue>(
    value: &V,
    role: ArgumentRole,
    coerce: bool,
) -> Result<Matrix<f64>, QpError> {
    let rows = value.as_array().ok_or(QpError::Type(role))?;
    let rows = rows
        .iter()
        .enumerate()
        .map(|(row, v)| match v.as_array() {
            Some(elems) => numbers_from_host(&elems, role, coerce),
            None => Err(QpError::RowType { role, row }),
        })
        .collect::<Result<Vec<Vec<f64>>, _>>()?;
    Ok(Matrix::from(rows))
}

/// Solve `minimize 1/2 x'Dx - d'x` subject to `A1 x = b1`, `A2 x >= b2`
/// from six host values.
///
/// A failure of the numerical routine is reported as
/// [`QpError::Numerical`] carrying the routine's error code.
pub fn solve<V: HostValue>(
    args: &[V],
    settings: Option<DefaultSettings<f64>>,
) -> Result<DefaultSolution<f64>, QpError> {
    solve_with(args, settings, GoldfarbIdnani)
}

/// As [`solve`], with a user supplied routine
#[allow(non_snake_case)]
pub fn solve_with<V, R>(
    args: &[V],
    settings: Option<DefaultSettings<f64>>,
    routine: R,
) -> Result<DefaultSolution<f64>, QpError>
where
    V: HostValue,
    R: DualActiveSetRoutine<f64>,
{
    if args.len() != ArgumentRole::ALL.len() {
        return Err(QpError::Arity(args.len()));
    }
    for (arg, role) in args.iter().zip(ArgumentRole::ALL) {
        if arg.as_array().is_none() {
            return Err(QpError::Type(role));
        }
    }

    let settings = settings.unwrap_or_default();
    let coerce = settings.coerce_non_numeric_to_zero;

    let D = matrix_from_host(&args[0], ArgumentRole::D, coerce)?;
    let d = vector_from_host(&args[1], ArgumentRole::d, coerce)?;
    let A1 = matrix_from_host(&args[2], ArgumentRole::A1, coerce)?;
    let b1 = vector_from_host(&args[3], ArgumentRole::b1, coerce)?;
    let A2 = matrix_from_host(&args[4], ArgumentRole::A2, coerce)?;
    let b2 = vector_from_host(&args[5], ArgumentRole::b2, coerce)?;

    let mut solver = DefaultSolver::new_with_routine(&D, &d, &A1, &b1, &A2, &b2, settings, routine)?;
    solver.solve();

    match solver.solution.error_code {
        0 => Ok(solver.solution),
        code => Err(QpError::Numerical(RoutineStatus::from_code(code))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // a host with numeric types besides its native number, all
    // convertible to f64, and booleans convertible to 0 or 1
    #[derive(Debug, Clone)]
    enum Mock {
        Float(f64),
        Int64(i64),
        Bool(bool),
        Text,
        List(Vec<Mock>),
    }

    impl HostValue for Mock {
        fn as_array(&self) -> Option<Cow<'_, [Mock]>> {
            match self {
                Mock::List(v) => Some(Cow::Borrowed(v.as_slice())),
                _ => None,
            }
        }
        fn is_bool(&self) -> bool {
            matches!(self, Mock::Bool(_))
        }
        fn to_f64(&self) -> Option<f64> {
            match self {
                Mock::Float(v) => Some(*v),
                Mock::Int64(v) => Some(*v as f64),
                Mock::Bool(v) => Some(*v as i32 as f64),
                _ => None,
            }
        }
    }

    #[test]
    fn test_numeric_conversion_rule() {
        let value = Mock::List(vec![
            Mock::Int64(2),
            Mock::Float(0.5),
            Mock::Bool(true),
            Mock::Text,
        ]);

        // any convertible non-boolean value is kept
        let v = vector_from_host(&value, ArgumentRole::d, true).unwrap();
        assert_eq!(*v, [2., 0.5, 0., 0.]);

        let err = vector_from_host(&value, ArgumentRole::d, false).unwrap_err();
        assert!(matches!(err, QpError::NonNumeric(ArgumentRole::d)));
    }

    #[test]
    fn test_solve_with_wide_integers() {
        let row = |v: [i64; 2]| Mock::List(v.iter().map(|&x| Mock::Int64(x)).collect());
        let args = vec![
            Mock::List(vec![row([2, 0]), row([0, 2])]),
            row([2, 4]),
            Mock::List(vec![]),
            Mock::List(vec![]),
            Mock::List(vec![]),
            Mock::List(vec![]),
        ];
        let solution = solve(&args, None).unwrap();
        assert!(solution.x.dist(&[1., 2.]) <= 1e-12);
    }
}
