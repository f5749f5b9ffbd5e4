mod block_concatenate;
mod core;
mod triangular;
mod types;
pub use self::types::*;
pub(crate) use triangular::*;
