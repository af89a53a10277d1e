//! Page scroll locking for modal overlays.
//!
//! The page is locked while at least one [`ScrollLockGuard`] is alive.
//! Guards are counted, so a modal opened on top of another keeps the page
//! locked until both are gone, whichever closes first.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Shared lock state for one page.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    holders: Arc<AtomicUsize>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Locks the page until the returned guard is dropped.
    #[must_use = "the page unlocks as soon as the guard is dropped"]
    pub fn acquire(&self) -> ScrollLockGuard {
        let previous = self.holders.fetch_add(1, Ordering::AcqRel);
        if previous == 0 {
            tracing::debug!("page scroll locked");
        }
        ScrollLockGuard {
            holders: Arc::clone(&self.holders),
        }
    }

    pub fn is_locked(&self) -> bool {
        self.holders.load(Ordering::Acquire) > 0
    }
}

/// Releases its hold on the page when dropped.
#[derive(Debug)]
pub struct ScrollLockGuard {
    holders: Arc<AtomicUsize>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        let previous = self.holders.fetch_sub(1, Ordering::AcqRel);
        if previous == 1 {
            tracing::debug!("page scroll unlocked");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlocked_by_default() {
        assert!(!ScrollLock::new().is_locked());
    }

    #[test]
    fn guard_releases_on_drop() {
        let lock = ScrollLock::new();

        let guard = lock.acquire();
        assert!(lock.is_locked());

        drop(guard);
        assert!(!lock.is_locked());
    }

    #[test]
    fn nested_guards_are_counted() {
        let lock = ScrollLock::new();
        let outer = lock.acquire();
        let inner = lock.clone().acquire();

        drop(outer);
        assert!(lock.is_locked());

        drop(inner);
        assert!(!lock.is_locked());
    }
}
