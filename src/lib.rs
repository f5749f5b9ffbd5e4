//!  __dualqp__ is a Rust implementation of the Goldfarb-Idnani dual
//! active-set method for dense, strictly convex quadratic programs.
//! dualqp solves the following problem:
//!
//! $$
//! \begin{array}{rl}
//! \text{minimize} & \frac{1}{2}x^T D x - d^T x\\\\\[2ex\]
//!  \text{subject to} & A_1 x = b_1 \\\\\[1ex\]
//!         & A_2 x \ge b_2
//!  \end{array}
//! $$
//!
//! with decision variables $x \in \mathbb{R}^n$ and data
//! $D=D^\top \succ 0$, $d \in \mathbb{R}^n$,
//! $A_1 \in \mathbb{R}^{m_1 \times n}$, $b_1 \in \mathbb{R}^{m_1}$,
//! $A_2 \in \mathbb{R}^{m_2 \times n}$ and $b_2 \in \mathbb{R}^{m_2}$.
//!
//! The two constraint blocks are merged into a single system in which
//! the first $m_1$ rows are equalities.
//!
//! ## Features
//!
//! * __Dual method__: no feasible starting point is required.  The
//!   method starts from the unconstrained minimizer and adds violated
//!   constraints one at a time, dropping constraints whose multipliers
//!   would become negative.
//!
//! * __Infeasibility detection__: inconsistent constraints are reported
//!   with a dedicated status rather than an error.
//!
//! * __Pluggable routine__: the numerical routine sits behind the
//!   [`DualActiveSetRoutine`](crate::solver::traits::DualActiveSetRoutine)
//!   trait.
//!
//! # Host interfaces
//!
//! Problems may be given as nested arrays of numbers from a dynamically
//! typed host, see [`host`].  A Python interface is available with the
//! `python` feature.
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod algebra;
pub mod host;
pub mod io;
pub mod solver;
pub mod timers;

#[cfg(feature = "python")]
pub mod python;
