// ---------------------------------
// Routine return codes
// ---------------------------------

/// Integer status reported by a [`DualActiveSetRoutine`](super::traits::DualActiveSetRoutine)
#[derive(PartialEq, Eq, Clone, Debug, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoutineStatus {
    /// code 0
    Success,
    /// code 1: the constraints are inconsistent
    Infeasible,
    /// code 2: the objective matrix is not positive definite
    NotPositiveDefinite,
    /// any other code returned by a foreign routine
    Other(i32),
}

impl RoutineStatus {
    pub fn code(&self) -> i32 {
        match *self {
            RoutineStatus::Success => 0,
            RoutineStatus::Infeasible => 1,
            RoutineStatus::NotPositiveDefinite => 2,
            RoutineStatus::Other(code) => code,
        }
    }

    pub fn from_code(code: i32) -> Self {
        match code {
            0 => RoutineStatus::Success,
            1 => RoutineStatus::Infeasible,
            2 => RoutineStatus::NotPositiveDefinite,
            _ => RoutineStatus::Other(code),
        }
    }

    pub fn is_success(&self) -> bool {
        *self == RoutineStatus::Success
    }
}

impl std::fmt::Display for RoutineStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            RoutineStatus::Success => write!(f, "success"),
            RoutineStatus::Infeasible => write!(f, "constraints are inconsistent, no solution (code 1)"),
            RoutineStatus::NotPositiveDefinite => {
                write!(f, "matrix D in quadratic function is not positive definite (code 2)")
            }
            RoutineStatus::Other(code) => write!(f, "unknown routine error (code {})", code),
        }
    }
}

// ---------------------------------
// Solver status type
// ---------------------------------

/// Status of solver at termination
#[repr(u32)]
#[derive(PartialEq, Eq, Clone, Debug, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverStatus {
    /// Problem is not solved (solver hasn't run).
    #[default]
    Unsolved,
    /// Solver terminated with a solution.
    Solved,
    /// Constraints are inconsistent.
    Infeasible,
    /// Objective matrix is not positive definite.
    NonPositiveDefinite,
    /// Routine failed with an unrecognised code.
    RoutineError,
}

impl SolverStatus {
    pub fn is_solved(&self) -> bool {
        *self == SolverStatus::Solved
    }
}

impl From<RoutineStatus> for SolverStatus {
    fn from(status: RoutineStatus) -> Self {
        match status {
            RoutineStatus::Success => SolverStatus::Solved,
            RoutineStatus::Infeasible => SolverStatus::Infeasible,
            RoutineStatus::NotPositiveDefinite => SolverStatus::NonPositiveDefinite,
            RoutineStatus::Other(_) => SolverStatus::RoutineError,
        }
    }
}

impl std::fmt::Display for SolverStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[test]
fn test_status_codes() {
    for code in -1..4 {
        assert_eq!(RoutineStatus::from_code(code).code(), code);
    }
    assert_eq!(SolverStatus::from(RoutineStatus::Success), SolverStatus::Solved);
    assert_eq!(SolverStatus::from(RoutineStatus::Other(7)), SolverStatus::RoutineError);
    assert_eq!(SolverStatus::default(), SolverStatus::Unsolved);
}
