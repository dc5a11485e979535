//! Single-acquisition reentrancy lock.

use crate::error::ClaimSwapError;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// Lock shared by every guarded entry point of one contract instance.
///
/// Atomic so a [`ClaimSwap`](crate::ClaimSwap) stays `Send + Sync` and can be
/// handed to a worker thread or shared behind a lock.
#[derive(Debug, Default)]
pub struct ReentrancyGuard {
    locked: Arc<AtomicBool>,
}

impl ReentrancyGuard {
    /// Acquires the lock, failing with [`ClaimSwapError::Reentrancy`] while
    /// another guarded entry point is still running.
    pub fn enter(&self) -> Result<GuardLock, ClaimSwapError> {
        self.locked
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .map_err(|_| {
                tracing::warn!(target: "claimswap", "reentrant call rejected");
                ClaimSwapError::Reentrancy
            })?;
        Ok(GuardLock { locked: Arc::clone(&self.locked) })
    }

    /// Whether a guarded entry point is in flight.
    pub fn is_locked(&self) -> bool {
        self.locked.load(Ordering::Acquire)
    }
}

/// Held for the duration of a guarded entry point; releases the lock on drop,
/// on success, error and unwinding alike.
#[derive(Debug)]
#[must_use = "the lock is released as soon as the guard is dropped"]
pub struct GuardLock {
    locked: Arc<AtomicBool>,
}

impl Drop for GuardLock {
    fn drop(&mut self) {
        self.locked.store(false, Ordering::Release);
    }
}
