//! Mobile navigation overlay and the page scroll lock it holds.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Shared page scroll lock.
///
/// The page scrolls only while no guard is alive. Clones share the same
/// counter, so the scroll surface and the overlay can each hold a handle.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    holders: Arc<AtomicUsize>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock scrolling until the returned guard is dropped.
    pub fn acquire(&self) -> ScrollLockGuard {
        self.holders.fetch_add(1, Ordering::SeqCst);
        ScrollLockGuard {
            holders: Arc::clone(&self.holders),
        }
    }

    pub fn is_locked(&self) -> bool {
        self.holders.load(Ordering::SeqCst) > 0
    }
}

/// Releases its hold on the [`ScrollLock`] when dropped.
#[derive(Debug)]
#[must_use = "dropping the guard releases the scroll lock immediately"]
pub struct ScrollLockGuard {
    holders: Arc<AtomicUsize>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.holders.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Full-screen navigation overlay used on narrow windows.
#[derive(Debug)]
pub struct MobileMenu {
    lock: ScrollLock,
    guard: Option<ScrollLockGuard>,
}

impl MobileMenu {
    pub fn new(lock: ScrollLock) -> Self {
        Self { lock, guard: None }
    }

    pub fn is_open(&self) -> bool {
        self.guard.is_some()
    }

    /// Open the overlay. Opening an open menu keeps its single lock.
    pub fn open(&mut self) {
        if self.guard.is_none() {
            tracing::debug!("mobile menu opened");
            self.guard = Some(self.lock.acquire());
        }
    }

    pub fn close(&mut self) {
        if self.guard.take().is_some() {
            tracing::debug!("mobile menu closed");
        }
    }

    pub fn toggle(&mut self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn scroll_lock(&self) -> &ScrollLock {
        &self.lock
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_and_close_toggle_the_lock() {
        let lock = ScrollLock::new();
        let mut menu = MobileMenu::new(lock.clone());
        menu.open();
        assert!(lock.is_locked());
        menu.close();
        assert!(!lock.is_locked());
    }

    #[test]
    fn double_open_holds_one_lock() {
        let lock = ScrollLock::new();
        let mut menu = MobileMenu::new(lock.clone());
        menu.open();
        menu.open();
        menu.close();
        assert!(!lock.is_locked());
    }

    #[test]
    fn dropping_an_open_menu_releases_the_lock() {
        let lock = ScrollLock::new();
        {
            let mut menu = MobileMenu::new(lock.clone());
            menu.toggle();
            assert!(lock.is_locked());
        }
        assert!(!lock.is_locked());
    }

    #[test]
    fn independent_holders_stack() {
        let lock = ScrollLock::new();
        let first = lock.acquire();
        let second = lock.acquire();
        drop(first);
        assert!(lock.is_locked());
        drop(second);
        assert!(!lock.is_locked());
    }
}
