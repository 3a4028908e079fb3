//! Named lock wrapper, the host-testable analogue of the teacher's
//! `spinlock::Mutex`.
//!
//! The teacher's own lock (referenced from `proc.rs` as
//! `crate::spinlock::{Mutex, MutexGuard}`, not itself included in the
//! retrieval pack) is a hardware spinlock carrying a debug name for panic
//! messages. This crate has no interrupts to disable, so `Lock<T>` is a
//! named wrapper over `std::sync::Mutex<T>` instead, keeping the naming and
//! the "which lock poisoned" panic message the teacher's version gives you.

use std::sync::{Mutex, MutexGuard};

pub struct Lock<T> {
    name: &'static str,
    inner: Mutex<T>,
}

impl<T> Lock<T> {
    pub const fn new(name: &'static str, value: T) -> Self {
        Self {
            name,
            inner: Mutex::new(value),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Acquire the lock, panicking with the lock's name if a prior holder
    /// panicked while holding it rather than silently propagating poison.
    pub fn lock(&self) -> MutexGuard<'_, T> {
        self.inner
            .lock()
            .unwrap_or_else(|_| panic!("lock {:?} poisoned", self.name))
    }
}
