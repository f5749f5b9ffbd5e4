// package together all of the following and re-export
// in a partially flattened structure :
// : the routine trait
// : per-call workspace
// : status and error types
// : settings errors

pub mod traits;

mod error_types;
mod settings;
mod status;
mod workspace;
pub use error_types::*;
pub use settings::*;
pub use status::*;
pub use workspace::*;
