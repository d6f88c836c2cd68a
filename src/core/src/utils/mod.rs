mod numeric;
mod time;

pub use numeric::*;
pub use time::*;
