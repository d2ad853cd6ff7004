use std::sync::LazyLock;

use detrand_core::{Mulberry32, RandResult, Seed};
use log::debug;
use parking_lot::Mutex;

use crate::{ambient::set_ambient_seed, hooks::run_seed_hooks};

/// Seed used when a draw happens before any `seed_global` call.
pub const DEFAULT_SEED: u32 = 0;

static GLOBAL_RNG_STATE: LazyLock<Mutex<Mulberry32>> =
    LazyLock::new(|| Mutex::new(Mulberry32::new(DEFAULT_SEED)));

/// Replaces the process-wide generator and returns the derived 32-bit seed.
///
/// The ambient `rand` generator and every registered seed hook are reseeded
/// with the same value afterwards. Hook failures never reach the caller.
pub fn seed_global(seed: impl Into<Seed>) -> u32 {
    let seed = seed.into();
    let derived = seed.to_u32();
    *GLOBAL_RNG_STATE.lock() = Mulberry32::new(derived);
    debug!("seeded global generator with {} ({:#010x})", seed, derived);
    set_ambient_seed(derived);
    run_seed_hooks(derived);
    derived
}

/// `seed_global` for seeds arriving as floats, e.g. from config or json.
///
/// An integral value such as `12.0` seeds exactly like the integer `12`; it is
/// not hashed as the text `"12.0"`. Anything non-integral is `InvalidSeed`.
pub fn try_seed_global(seed: f64) -> RandResult<u32> {
    Ok(seed_global(Seed::try_from(seed)?))
}

pub fn random() -> f64 {
    GLOBAL_RNG_STATE.lock().next_f64()
}

pub fn randint(low: i64, high: i64) -> RandResult<i64> {
    GLOBAL_RNG_STATE.lock().randint(low, high)
}

/// Returns a shuffled copy; the lock is held across all draws of one call.
pub fn shuffle<T: Clone>(seq: &[T]) -> Vec<T> {
    GLOBAL_RNG_STATE.lock().shuffle(seq)
}

/// Runs `f` with exclusive access to the global generator.
pub fn with_global<R>(f: impl FnOnce(&mut Mulberry32) -> R) -> R {
    f(&mut GLOBAL_RNG_STATE.lock())
}
