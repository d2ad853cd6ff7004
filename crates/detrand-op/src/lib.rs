pub mod ambient;
pub mod hooks;
pub mod random;

pub use ambient::{ambient_f64, ambient_u64};
pub use detrand_core::{Mulberry32, RandError, RandResult, Seed, fnv1a32};
pub use hooks::{SeedHook, register_seed_hook, seed_hook_names, unregister_seed_hook};
pub use random::{
    DEFAULT_SEED, randint, random, seed_global, shuffle, try_seed_global, with_global,
};
