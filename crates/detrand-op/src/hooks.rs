use std::panic::{self, AssertUnwindSafe};
use std::sync::LazyLock;

use log::{debug, warn};
use parking_lot::RwLock;

/// Called with the derived 32-bit seed on every `seed_global`. Hooks must not
/// call back into `seed_global` or the hook registry.
pub type SeedHook = Box<dyn Fn(u32) -> anyhow::Result<()> + Send + Sync>;

static SEED_HOOKS: LazyLock<RwLock<Vec<(String, SeedHook)>>> =
    LazyLock::new(|| RwLock::new(Vec::new()));

/// Registers `hook` under `name`, replacing any hook already using that name.
/// Hooks run in registration order.
pub fn register_seed_hook<F>(name: &str, hook: F)
where
    F: Fn(u32) -> anyhow::Result<()> + Send + Sync + 'static,
{
    let mut hooks = SEED_HOOKS.write();
    match hooks.iter_mut().find(|(n, _)| n == name) {
        Some(entry) => entry.1 = Box::new(hook),
        None => hooks.push((name.to_owned(), Box::new(hook))),
    }
}

pub fn unregister_seed_hook(name: &str) -> bool {
    let mut hooks = SEED_HOOKS.write();
    let len = hooks.len();
    hooks.retain(|(n, _)| n != name);
    hooks.len() != len
}

pub fn seed_hook_names() -> Vec<String> {
    SEED_HOOKS.read().iter().map(|(n, _)| n.clone()).collect()
}

pub(crate) fn run_seed_hooks(seed: u32) {
    let hooks = SEED_HOOKS.read();
    for (name, hook) in hooks.iter() {
        match panic::catch_unwind(AssertUnwindSafe(|| hook(seed))) {
            Ok(Ok(())) => debug!("seed hook '{}' synced", name),
            Ok(Err(e)) => warn!("seed hook '{}' failed, ignored: {}", name, e),
            Err(_) => warn!("seed hook '{}' panicked, ignored", name),
        }
    }
}
