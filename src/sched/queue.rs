//! MLFQ's per-level ready queues (spec §4.12), grounded on
//! `examples/original_source/kernel/proc.c`'s `q[MLFQ_LEVELS]` arrays of
//! pids, reworked here as queues of `Arc<Proc>` since this crate doesn't
//! carry a separate pid-to-slot index.

use crate::param::MLFQ_LEVELS;
use crate::proc::Proc;
use std::collections::VecDeque;
use std::sync::Arc;

/// `MLFQ_LEVELS` FIFO queues, numbered 0 (highest priority) through
/// `MLFQ_LEVELS - 1` (lowest). A process is in at most one queue at a time;
/// `ProcInner::mlfq_priority` is kept in sync with queue membership so
/// diagnostics can report a process's queue without scanning all of them.
pub struct MlfqQueues {
    levels: [VecDeque<Arc<Proc>>; MLFQ_LEVELS],
}

impl MlfqQueues {
    pub fn new() -> Self {
        Self {
            levels: Default::default(),
        }
    }

    /// Appends `proc` to the tail of `level` (spec §4.12: new and
    /// re-enqueued processes go to the back of their queue, never the
    /// front — that is what keeps the policy fair within a level).
    pub fn push_tail(&mut self, level: usize, proc: Arc<Proc>) {
        proc.inner.lock().mlfq_priority = Some(level);
        self.levels[level].push_back(proc);
    }

    /// Removes and returns the process at the front of the highest
    /// non-empty queue, along with the level it came from. `None` if every
    /// queue is empty.
    ///
    /// The teacher's `pop_head` returns a sentinel pid (0) on an empty
    /// queue rather than an `Option`; this is harmless there only because
    /// pid 0 is reserved and never allocated. We use `Option` instead
    /// since nothing here forces the sentinel convention on us — see
    /// DESIGN.md's open-question note on this.
    pub fn pop_head(&mut self) -> Option<(usize, Arc<Proc>)> {
        for (level, queue) in self.levels.iter_mut().enumerate() {
            if let Some(proc) = queue.pop_front() {
                proc.inner.lock().mlfq_priority = None;
                return Some((level, proc));
            }
        }
        None
    }

    /// Removes `proc` from whichever queue it is currently in, used when a
    /// process is killed or exits while still enqueued (spec §4.12 edge
    /// case). A no-op if `proc` isn't enqueued.
    pub fn remove(&mut self, proc: &Arc<Proc>) {
        for queue in self.levels.iter_mut() {
            if let Some(pos) = queue.iter().position(|p| Arc::ptr_eq(p, proc)) {
                queue.remove(pos);
                proc.inner.lock().mlfq_priority = None;
                return;
            }
        }
    }

    pub fn level(&self, level: usize) -> impl Iterator<Item = &Arc<Proc>> {
        self.levels[level].iter()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.iter().all(|q| q.is_empty())
    }
}

impl Default for MlfqQueues {
    fn default() -> Self {
        Self::new()
    }
}
