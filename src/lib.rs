pub mod console;
pub mod runtime;
pub mod square;

pub use square::{NumericInput, Square, compute, compute_with};
