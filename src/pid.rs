//! PID allocation (spec §4.1).

use crate::sync::Lock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pid(pub i64);

impl Pid {
    pub const NONE: Pid = Pid(0);

    pub fn is_none(self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for Pid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A monotonically increasing counter guarded by a single mutex — a leaf in
/// the lock order (spec §3, "Lock ordering"). Modeled as a real mutex
/// rather than an atomic so the lock-ordering invariant is something a
/// caller can actually be asked to hold, matching the original `pid_lock`.
pub struct PidAllocator {
    next: Lock<i64>,
}

impl PidAllocator {
    pub const fn new() -> Self {
        Self {
            next: Lock::new("pid_lock", 1),
        }
    }

    pub fn allocate(&self) -> Pid {
        let mut next = self.next.lock();
        let pid = *next;
        *next += 1;
        Pid(pid)
    }
}

impl Default for PidAllocator {
    fn default() -> Self {
        Self::new()
    }
}
