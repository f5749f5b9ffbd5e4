//! Solver implementations.
//!
//! Only a single implementation is currently provided, combining a
//! dense problem format with the Goldfarb-Idnani dual method.

pub mod default;
