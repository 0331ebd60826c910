pub mod distance;
pub mod record;

pub use distance::*;
pub use record::*;
