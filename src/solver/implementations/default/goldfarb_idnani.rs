//! Goldfarb-Idnani dual active-set method for strictly convex QPs.
//!
//! D. Goldfarb and A. Idnani (1983). A numerically stable dual
//! method for solving strictly convex quadratic programs.
//! Mathematical Programming, 27, 1-33.
//!
//! The method starts from the unconstrained minimizer and repeatedly
//! adds the most violated constraint to an active set, dropping active
//! inequalities whose multipliers would otherwise become negative.  The
//! active constraint normals are kept as a QR factorization `J`, `R`
//! updated by Givens rotations on every change.

use crate::algebra::*;
use crate::solver::core::{traits::*, RoutineStatus, SolverWorkspace};

/// Reference [`DualActiveSetRoutine`] implementing the dual method.
///
/// Operates in place on the `dmat` buffer, which on exit holds `J`.
/// The constraint matrix is left untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoldfarbIdnani;

impl<T> DualActiveSetRoutine<T> for GoldfarbIdnani
where
    T: FloatT,
{
    fn solve(&mut self, data: RoutineData<'_, T>, ws: &mut SolverWorkspace<T>) -> RoutineStatus {
        let RoutineData {
            dmat,
            dvec,
            fddmat,
            n,
            amat,
            bvec,
            fdamat,
            q,
            meq,
            factorized,
        } = data;

        debug_assert_eq!(fddmat, n);
        debug_assert!(fdamat >= n);
        debug_assert!(meq <= q);
        debug_assert_eq!(ws.n(), n);
        debug_assert_eq!(ws.q(), q);

        let r = usize::min(n, q);
        let jmat = &mut dmat[..n * n];
        let amat: &[T] = amat;
        let arow = move |i: usize| &amat[i * fdamat..i * fdamat + n];
        // columns of J, with n possibly zero
        let jcols = n.max(1);

        let SolverWorkspace {
            sol,
            lagr,
            crval,
            iact,
            nact: nact_out,
            iter,
            work,
        } = ws;

        // carve up the scratch space
        let (dv, rest) = work.split_at_mut(n);
        let (zv, rest) = rest.split_at_mut(n);
        let (rv_mem, rest) = rest.split_at_mut(r);
        let (uv, rest) = rest.split_at_mut(r);
        let (rmat, rest) = rest.split_at_mut(r * (r + 1) / 2);
        let (sv, rest) = rest.split_at_mut(q);
        let (nbv, _) = rest.split_at_mut(q);

        lagr.set(T::zero());
        iact.fill(0);
        *nact_out = 0;
        *iter = [0, 0];

        // unconstrained minimizer D⁻¹d, leaving J = R⁻¹ in place of D
        sol.copy_from(dvec);
        if factorized {
            triangular_multiply_transpose(jmat, sol);
            triangular_multiply(jmat, sol);
        } else {
            if cholesky(jmat, n).is_err() {
                return RoutineStatus::NotPositiveDefinite;
            }
            triangular_solve_transpose(jmat, sol);
            triangular_solve(jmat, sol);
            triangular_invert(jmat, n);
        }
        for j in 0..n {
            jmat[(j * n + j + 1)..(j + 1) * n].set(T::zero());
        }

        *crval = -dvec.dot(sol) / (2.0).as_T();

        // constraint norms, used to normalise violations
        for (i, nbvi) in nbv.iter_mut().enumerate() {
            let a = arow(i);
            *nbvi = a.dot(a).sqrt();
        }

        let eps = T::epsilon();
        let mut nact = 0;

        loop {
            // slacks, forced to zero on the active set
            for (i, svi) in sv.iter_mut().enumerate() {
                *svi = arow(i).dot(sol) - bvec[i];
            }
            for &k in iact[..nact].iter() {
                sv[k] = T::zero();
            }

            // pick the most violated constraint
            let mut iadd = q;
            let mut max_violation = T::zero();
            for (i, (&svi, &nbvi)) in sv.iter().zip(nbv.iter()).enumerate() {
                if svi < -max_violation * nbvi - eps {
                    iadd = i;
                    max_violation = -svi / nbvi;
                } else if i < meq && svi > max_violation * nbvi + eps {
                    iadd = i;
                    max_violation = svi / nbvi;
                }
            }
            if iadd == q {
                break;
            }

            let aadd = arow(iadd);
            let mut slack = sv[iadd];
            let mut u = T::zero();

            // equalities may be approached from either side
            let direc = -slack.signum();
            lagr[iadd] = direc;

            loop {
                // dv = J'n⁺ with n⁺ the oriented normal of the new constraint
                for (dvi, jcol) in dv.iter_mut().zip(jmat.chunks_exact(jcols)) {
                    *dvi = direc * jcol.dot(aadd);
                }

                // primal step direction zv = J₂d₂
                zv.set(T::zero());
                for (jcol, &dvi) in jmat.chunks_exact(jcols).zip(dv.iter()).skip(nact) {
                    zv.axpby(dvi, jcol, T::one());
                }

                // negative dual step direction rv = R⁻¹d₁
                let rv = &mut rv_mem[..nact];
                rv.copy_from(&dv[..nact]);
                for i in (0..nact).rev() {
                    let start = i * (i + 1) / 2;
                    rv[i] /= rmat[start + i];
                    let rvi = rv[i];
                    rv[..i].axpby(-rvi, &rmat[start..start + i], T::one());
                }

                // largest dual step t1 before an active inequality's
                // multiplier reaches zero
                let mut idel = nact;
                let mut t1 = T::infinity();
                for (k, (&uvk, &rvk)) in uv[..nact].iter().zip(rv.iter()).enumerate() {
                    if iact[k] >= meq && rvk > T::zero() {
                        let tk = uvk / rvk;
                        if tk < t1 {
                            t1 = tk;
                            idel = k;
                        }
                    }
                }

                // full step t2 bringing the new constraint's slack to zero
                let (ztn, t2) = if zv.sumsq() <= eps {
                    (T::zero(), T::infinity())
                } else {
                    let za = zv.dot(aadd);
                    (za.abs(), -slack / za)
                };

                if t1.is_infinite() && t2.is_infinite() {
                    *nact_out = nact;
                    orient_multipliers(lagr, &iact[..nact], &mut uv[..nact]);
                    return RoutineStatus::Infeasible;
                }

                let partial_step = t2 > t1;
                let step = if partial_step { t1 } else { t2 };

                sol.axpby(step, zv, T::one());
                *crval += step * ztn * (step / (2.0).as_T() + u);
                uv[..nact].axpby(-step, rv, T::one());
                u += step;

                if !partial_step {
                    break;
                }

                // drop constraint idel from the active set
                qr_delete(idel + 1, jmat, n, &mut rmat[..nact * (nact + 1) / 2], nact);
                uv.copy_within(idel + 1..nact, idel);
                iact.copy_within(idel + 1..nact, idel);
                nact -= 1;
                iter[1] += 1;

                slack = aadd.dot(sol) - bvec[iadd];
            }

            // add constraint iadd to the active set
            uv[nact] = u;
            iact[nact] = iadd;
            nact += 1;
            iter[0] += 1;
            qr_insert(nact, dv, jmat);
            let start = nact * (nact - 1) / 2;
            rmat[start..start + nact].copy_from_slice(&dv[..nact]);
        }

        *nact_out = nact;
        orient_multipliers(lagr, &iact[..nact], &mut uv[..nact]);
        RoutineStatus::Success
    }
}

// While running, lagr[i] holds the direction in which constraint i was
// last added.  Convert the active set multipliers so that they refer to
// the constraint rows as supplied and scatter them into lagr.
fn orient_multipliers<T: FloatT>(lagr: &mut [T], iact: &[usize], uv: &mut [T]) {
    for (uvk, &k) in uv.iter_mut().zip(iact) {
        *uvk *= lagr[k];
    }
    lagr.set(T::zero());
    for (&uvk, &k) in uv.iter().zip(iact) {
        lagr[k] = uvk;
    }
}

// sqrt(a² + b²) carrying the sign of a
fn signed_hypot<T: FloatT>(a: T, b: T) -> T {
    T::hypot(a, b) * a.signum()
}

// adjacent length `len` slices either side of `split`, i.e. two
// neighbouring columns of a square matrix
fn left_right_slices<T>(slice: &mut [T], split: usize, len: usize) -> (&mut [T], &mut [T]) {
    let (left, right) = slice.split_at_mut(split);
    (&mut left[split - len..], &mut right[..len])
}

// Apply Givens rotations so that the entries of `vec` beyond the rth
// vanish, applying the same rotations to the columns of `mat`.  The
// trailing entries of `vec` are not actually zeroed.
fn qr_insert<T: FloatT>(r: usize, vec: &mut [T], mat: &mut [T]) {
    let n = vec.len();
    debug_assert_eq!(mat.len(), n * n);
    debug_assert!(r >= 1 && r <= n);

    for i in (r..n).rev() {
        if vec[i] == T::zero() {
            continue;
        }

        let (left, right) = left_right_slices(mat, i * n, n);
        if vec[i - 1] == T::zero() {
            vec[i - 1] = vec[i];
            left.swap_with_slice(right);
        } else {
            let h = signed_hypot(vec[i - 1], vec[i]);
            let gc = vec[i - 1] / h;
            let gs = vec[i] / h;
            let nu = vec[i] / (vec[i - 1] + h);
            vec[i - 1] = h;

            for (li, ri) in left.iter_mut().zip(right.iter_mut()) {
                let temp = gc * *li + gs * *ri;
                *ri = nu * (*li + temp) - *ri;
                *li = temp;
            }
        }
    }
}

// Remove the col-th (1 based) column of the r×r packed upper triangular
// `rmat`, restoring triangular form with Givens rotations that are also
// applied to the columns of the n×n `qmat`.  On exit the leading
// (r-1)r/2 entries of `rmat` hold the reduced factor.
fn qr_delete<T: FloatT>(col: usize, qmat: &mut [T], n: usize, rmat: &mut [T], r: usize) {
    debug_assert_eq!(qmat.len(), n * n);
    debug_assert_eq!(rmat.len(), r * (r + 1) / 2);

    for i in col..r {
        // reduce R[i+1,i+1] to zero, then move column i+1 to position i
        let di = i * (i + 1) / 2;
        let l = di + i;
        if rmat[l] == T::zero() {
            continue;
        }

        let (left, right) = left_right_slices(qmat, i * n, n);
        if rmat[l - 1] == T::zero() {
            let mut ind = l;
            for j in i + 1..=r {
                rmat.swap(ind - 1, ind);
                ind += j;
            }
            left.swap_with_slice(right);
        } else {
            let h = signed_hypot(rmat[l - 1], rmat[l]);
            let gc = rmat[l - 1] / h;
            let gs = rmat[l] / h;
            let nu = rmat[l] / (rmat[l - 1] + h);

            let mut ind = l;
            for j in i + 1..=r {
                let temp = gc * rmat[ind - 1] + gs * rmat[ind];
                rmat[ind] = nu * (rmat[ind - 1] + temp) - rmat[ind];
                rmat[ind - 1] = temp;
                ind += j;
            }

            for (li, ri) in left.iter_mut().zip(right.iter_mut()) {
                let temp = gc * *li + gs * *ri;
                *ri = nu * (*li + temp) - *ri;
                *li = temp;
            }
        }

        let (left, right) = left_right_slices(rmat, di, i);
        left.swap_with_slice(right);
    }
}
