mod analytics;
mod compatibility;
mod distance;
mod ranking;
mod weights;

pub use analytics::*;
pub use compatibility::*;
pub use distance::*;
pub use ranking::*;
pub use weights::*;
