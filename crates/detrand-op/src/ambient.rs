use std::sync::LazyLock;

use parking_lot::Mutex;
use rand::prelude::*;

use crate::random::DEFAULT_SEED;

// stand-in for a host's general purpose generator, kept in step with seed_global
static AMBIENT_RNG: LazyLock<Mutex<SmallRng>> =
    LazyLock::new(|| Mutex::new(SmallRng::seed_from_u64(DEFAULT_SEED as u64)));

pub(crate) fn set_ambient_seed(seed: u32) {
    *AMBIENT_RNG.lock() = SmallRng::seed_from_u64(seed as u64);
}

pub fn ambient_u64() -> u64 {
    AMBIENT_RNG.lock().next_u64()
}

pub fn ambient_f64() -> f64 {
    AMBIENT_RNG.lock().random()
}
