// Dense triangular kernels on square n x n buffers stored in
// column major format, i.e. entry (i,j) lives at i + j*n.  Only
// the upper triangle is referenced.

use crate::algebra::{FloatT, VectorMath};

/// Error returned by [`cholesky`] when the input is not positive definite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NotPositiveDefinite;

/// Overwrite the upper triangle of `mat` with `R` such that `mat = R'R`.
pub(crate) fn cholesky<T: FloatT>(mat: &mut [T], n: usize) -> Result<(), NotPositiveDefinite> {
    debug_assert_eq!(mat.len(), n * n);
    for j in 0..n {
        for k in 0..j {
            let s = mat[k * n..k * n + k].dot(&mat[j * n..j * n + k]);
            mat[k + j * n] = (mat[k + j * n] - s) / mat[k + k * n];
        }

        let colj = &mat[j * n..j * n + j];
        let s = mat[j + j * n] - colj.dot(colj);
        // NaN pivots fail too
        if s.is_nan() || s <= T::zero() {
            return Err(NotPositiveDefinite);
        }
        mat[j + j * n] = s.sqrt();
    }
    Ok(())
}

/// vec = mat * vec, with mat upper triangular
pub(crate) fn triangular_multiply<T: FloatT>(mat: &[T], vec: &mut [T]) {
    let n = vec.len();
    debug_assert_eq!(mat.len(), n * n);
    for j in 0..n {
        let vj = vec[j];
        vec[..j].axpby(vj, &mat[j * n..j * n + j], T::one());
        vec[j] *= mat[j + j * n];
    }
}

/// vec = mat' * vec, with mat upper triangular
pub(crate) fn triangular_multiply_transpose<T: FloatT>(mat: &[T], vec: &mut [T]) {
    let n = vec.len();
    debug_assert_eq!(mat.len(), n * n);
    for j in (0..n).rev() {
        vec[j] *= mat[j + j * n];
        vec[j] += vec[..j].dot(&mat[j * n..j * n + j]);
    }
}

/// Solve mat * x = vec in place, with mat upper triangular
pub(crate) fn triangular_solve<T: FloatT>(mat: &[T], vec: &mut [T]) {
    let n = vec.len();
    debug_assert_eq!(mat.len(), n * n);
    for k in (0..n).rev() {
        vec[k] /= mat[k + k * n];
        let vk = vec[k];
        vec[..k].axpby(-vk, &mat[k * n..k * n + k], T::one());
    }
}

/// Solve mat' * x = vec in place, with mat upper triangular
pub(crate) fn triangular_solve_transpose<T: FloatT>(mat: &[T], vec: &mut [T]) {
    let n = vec.len();
    debug_assert_eq!(mat.len(), n * n);
    for k in 0..n {
        vec[k] -= mat[k * n..k * n + k].dot(&vec[..k]);
        vec[k] /= mat[k + k * n];
    }
}

/// Overwrite the upper triangular `mat` with its inverse
pub(crate) fn triangular_invert<T: FloatT>(mat: &mut [T], n: usize) {
    debug_assert_eq!(mat.len(), n * n);
    for k in 0..n {
        mat[k + k * n] = T::recip(mat[k + k * n]);
        let mkk = mat[k + k * n];
        mat[k * n..k * n + k].scale(-mkk);

        // columns right of k are updated using column k
        let (left, right) = mat.split_at_mut(n + k * n);
        let colk = &left[k * n..k * n + k];
        for j in 0..n - k - 1 {
            let rkj = right[k + j * n];
            right[j * n..j * n + k].axpby(rkj, colk, T::one());
            right[k + j * n] *= mkk;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // symmetric positive definite, so layout is irrelevant
    fn spd() -> Vec<f64> {
        vec![
            4., 2., 0., //
            2., 5., 1., //
            0., 1., 3., //
        ]
    }

    #[test]
    fn test_cholesky_reconstructs() {
        let n = 3;
        let mut r = spd();
        cholesky(&mut r, n).unwrap();

        // R'R should reproduce the upper triangle of the input
        let a = spd();
        for j in 0..n {
            for i in 0..=j {
                let rij: f64 = (0..=i).map(|k| r[k + i * n] * r[k + j * n]).sum();
                assert!((rij - a[i + j * n]).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_cholesky_rejects_indefinite() {
        let mut a = vec![1., 2., 2., 1.];
        assert_eq!(cholesky(&mut a, 2), Err(NotPositiveDefinite));
        let mut z = vec![0.];
        assert_eq!(cholesky(&mut z, 1), Err(NotPositiveDefinite));
        let mut nan = vec![f64::NAN];
        assert_eq!(cholesky(&mut nan, 1), Err(NotPositiveDefinite));
        let mut nan = vec![1., f64::NAN, f64::NAN, 1.];
        assert_eq!(cholesky(&mut nan, 2), Err(NotPositiveDefinite));
    }

    #[test]
    fn test_triangular_solves() {
        let n = 3;
        let mut r = spd();
        cholesky(&mut r, n).unwrap();

        // solve A x = b via R'R
        let b = [1., 2., 3.];
        let mut x = b;
        triangular_solve_transpose(&r, &mut x);
        triangular_solve(&r, &mut x);

        let a = spd();
        for i in 0..n {
            let ax: f64 = (0..n).map(|j| a[i + j * n] * x[j]).sum();
            assert!((ax - b[i]).abs() < 1e-12);
        }
    }

    #[test]
    fn test_triangular_invert() {
        let n = 3;
        let mut r = spd();
        cholesky(&mut r, n).unwrap();
        for j in 0..n {
            for i in j + 1..n {
                r[i + j * n] = 0.;
            }
        }
        let mut rinv = r.clone();
        triangular_invert(&mut rinv, n);

        // multiplying by R^-1 then R is the identity
        let x = [1., -2., 0.5];
        let mut y = x;
        triangular_multiply(&rinv, &mut y);
        triangular_multiply(&r, &mut y);
        assert!(y.norm_inf_diff(&x) < 1e-12);

        let mut y = x;
        triangular_multiply_transpose(&rinv, &mut y);
        triangular_multiply_transpose(&r, &mut y);
        assert!(y.norm_inf_diff(&x) < 1e-12);
    }
}
