mod position;
mod profile;

pub use position::*;
pub use profile::*;
