mod block_concatenate;
mod core;
mod lu;
mod matrix_math;
pub use self::lu::*;
