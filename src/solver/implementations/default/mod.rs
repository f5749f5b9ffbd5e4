#![allow(non_snake_case)]

mod goldfarb_idnani;
mod info_print;
#[cfg(feature = "serde")]
mod json;
mod problemdata;
mod settings;
mod solution;
mod solver;

//export flattened
pub use goldfarb_idnani::*;
pub use problemdata::*;
pub use settings::*;
pub use solution::*;
pub use solver::*;
