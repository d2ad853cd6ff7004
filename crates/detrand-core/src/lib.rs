pub mod errors;
pub mod hash;
pub mod mulberry;
pub mod seed;

pub use errors::{RandError, RandResult};
pub use hash::fnv1a32;
pub use mulberry::Mulberry32;
pub use seed::Seed;
