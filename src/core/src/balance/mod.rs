mod analyzer;
mod error;
mod substitution;

pub use analyzer::*;
pub use error::*;
pub use substitution::*;
