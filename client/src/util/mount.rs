//! Mount tracking for async work started by a component.
//!
//! A task spawned from a page may settle after the page is gone. Checking
//! `is_mounted` before touching page-local signals drops those late results.

#[cfg(test)]
#[path = "mount_test.rs"]
mod mount_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cheap cloneable flag that flips to unmounted once.
#[derive(Clone, Debug)]
pub struct MountGuard {
    alive: Arc<AtomicBool>,
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl MountGuard {
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    /// Create a guard tied to the current reactive owner's cleanup.
    pub fn install() -> Self {
        let guard = Self::new();
        let on_drop = guard.clone();
        leptos::prelude::on_cleanup(move || on_drop.mark_unmounted());
        guard
    }

    pub fn is_mounted(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    pub fn mark_unmounted(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }
}
