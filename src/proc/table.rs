//! The process table (spec §3): a fixed pool of [`Proc`] slots plus the
//! `wait_lock` that serializes parent/child relationship changes, grounded
//! on `examples/Yuleo1-octox/src/kernel/proc.rs`'s `ProcTable`/`PROC`
//! static pool and its `WAIT_LOCK`.

use crate::collab::MemoryOps;
use crate::param::NPROC;
use crate::pid::{Pid, PidAllocator};
use crate::proc::process::Proc;
use crate::proc::state::ProcState;
use array_macro::array;
use std::sync::{Arc, Mutex};

/// Fixed-size process pool with a table-wide lock ordered before any single
/// slot's lock (spec §3, "Lock ordering: wait_lock before per-process
/// lock"). `wait_lock` itself carries no payload — it exists purely to be
/// held, exactly like the teacher's `WAIT_LOCK: SpinLock<()>`.
pub struct ProcTable {
    pool: [Arc<Proc>; NPROC],
    wait_lock: Mutex<()>,
    pids: PidAllocator,
}

impl ProcTable {
    pub fn new() -> Self {
        Self {
            pool: array![_ => Arc::new(Proc::new()); NPROC],
            wait_lock: Mutex::new(()),
            pids: PidAllocator::new(),
        }
    }

    pub fn pids(&self) -> &PidAllocator {
        &self.pids
    }

    pub fn slots(&self) -> &[Arc<Proc>; NPROC] {
        &self.pool
    }

    pub fn find(&self, pid: Pid) -> Option<Arc<Proc>> {
        self.pool.iter().find(|p| p.pid() == pid).cloned()
    }

    /// Claims the first `Unused` slot, stamps a fresh PID and `ctime`, and
    /// transitions it to `Used`. `None` means the table is full (spec §4.2
    /// edge case: "process table full").
    pub fn alloc_slot(&self, now: u64) -> Option<Arc<Proc>> {
        for proc in self.pool.iter() {
            let mut inner = proc.inner.lock();
            if inner.state == ProcState::Unused {
                inner.pid = self.pids.allocate();
                inner.state = ProcState::Used;
                inner.killed = false;
                inner.exit_status = 0;
                inner.ctime = now;
                inner.rtime = 0;
                inner.etime = 0;
                inner.wtime = 0;
                inner.twtime = 0;
                inner.rtime_prev = 0;
                inner.stime_prev = 0;
                inner.is_new = true;
                inner.pstatic = crate::param::DEFAULT_PSTATIC;
                inner.pdynamic = crate::param::DEFAULT_PSTATIC;
                inner.niceness = 5;
                inner.ns = 0;
                inner.cur_queue = 0;
                inner.mlfq_priority = None;
                inner.qcount = [0; crate::param::MLFQ_LEVELS];
                drop(inner);
                return Some(proc.clone());
            }
        }
        None
    }

    /// Resets a slot to `Unused` after its exit status has been reaped
    /// (spec §4.5). Caller must hold `wait_lock` across the reparent +
    /// free sequence so a concurrent `wait` cannot observe a half-freed
    /// slot.
    pub fn free_slot(&self, proc: &Proc, mem: &dyn MemoryOps, _wait_guard: &std::sync::MutexGuard<'_, ()>) {
        let mut inner = proc.inner.lock();
        inner.state = ProcState::Unused;
        inner.pid = Pid::NONE;
        inner.killed = false;
        inner.exit_status = 0;
        inner.sleep_chan = 0;
        inner.mlfq_priority = None;
        drop(inner);
        unsafe {
            let data = proc.data_mut();
            if let Some(pt) = data.page_table.take() {
                mem.free_user_pagetable(pt, data.mem_size);
            }
            if let Some(tf) = data.trap_frame.take() {
                mem.free_trap_frame(tf);
            }
            data.mem_size = 0;
            data.kernel_stack = None;
            data.open_files = [None; crate::param::NOFILE];
            data.cwd = None;
            data.set_name("");
            data.trace_mask = crate::proc::trace::TraceMask::empty();
        }
        proc.set_parent_guarded(_wait_guard, None);
    }

    pub fn wait_lock(&self) -> &Mutex<()> {
        &self.wait_lock
    }

    /// Every process whose parent is `proc` (spec §4.2, for `reparent`).
    pub fn children_of(&self, proc: &Arc<Proc>, wait_guard: &std::sync::MutexGuard<'_, ()>) -> Vec<Arc<Proc>> {
        self.pool
            .iter()
            .filter(|p| {
                p.state() != ProcState::Unused
                    && p.parent_guarded(wait_guard).map(|par| Arc::ptr_eq(&par, proc)).unwrap_or(false)
            })
            .cloned()
            .collect()
    }

    /// Reassigns every child of `proc` to `init`, waking `init` in case any
    /// of them are already zombies (spec §4.2's reparent-to-init rule).
    /// Caller must already hold `wait_lock`.
    pub fn reparent_children(
        &self,
        proc: &Arc<Proc>,
        init: &Arc<Proc>,
        wait_guard: &std::sync::MutexGuard<'_, ()>,
    ) {
        for child in self.children_of(proc, wait_guard) {
            child.set_parent_guarded(wait_guard, Some(init.clone()));
        }
        init.wake.notify_all();
    }
}

impl Default for ProcTable {
    fn default() -> Self {
        Self::new()
    }
}
