mod aggregate;
mod formation;
mod member;

pub use aggregate::*;
pub use formation::*;
pub use member::*;
