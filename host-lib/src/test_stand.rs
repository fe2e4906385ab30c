use std::sync::{
    LockResult,
    Mutex,
    MutexGuard,
};

use lazy_static::lazy_static;


/// Guarantees that only one test runs at a time
///
/// Must not be dropped while exclusive access is required. Once it is dropped,
/// another test case might start running immediately.
pub type ExclusiveAccess = LockResult<MutexGuard<'static, ()>>;


/// Acquire exclusive access to the test environment
///
/// Blocks until no other guard is alive. Test cases share the report directory,
/// and a scenario expects to be the only one driving its chip.
pub fn exclusive_access() -> ExclusiveAccess {
    // The test harness runs tests on multiple threads, and there's no way to
    // turn that off from `Cargo.toml`.
    //
    // The `Result` is not unwrapped. An error only means that another thread
    // panicked while holding the lock, and the lock is acquired either way.
    lazy_static! { static ref MUTEX: Mutex<()> = Mutex::new(()); }
    MUTEX.lock()
}
