//! Round-robin (spec §4.10's RR case), grounded on
//! `examples/Yuleo1-octox/src/kernel/proc.rs`'s default scheduler loop,
//! which is itself a round-robin scan of the process table. Here the scan
//! is replaced with an explicit FIFO ready queue so ordering is a data
//! structure invariant rather than an artifact of table-slot order.

use crate::proc::{Proc, ProcTable};
use crate::sched::policy::SchedulingPolicy;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Ticks a process is allowed to run before it is preempted back to the
/// tail of the ready queue (spec §4.10's time-slice edge case).
pub const TIME_SLICE_TICKS: u64 = 2;

pub struct RoundRobin {
    ready: Mutex<VecDeque<Arc<Proc>>>,
}

impl RoundRobin {
    pub fn new() -> Self {
        Self {
            ready: Mutex::new(VecDeque::new()),
        }
    }
}

impl Default for RoundRobin {
    fn default() -> Self {
        Self::new()
    }
}

impl SchedulingPolicy for RoundRobin {
    fn select_next(&self, table: &ProcTable) -> Option<Arc<Proc>> {
        let mut ready = self.ready.lock().unwrap();
        // Reconcile against the table in case a process became Runnable
        // without going through `on_enqueue` (e.g. freshly forked before
        // the policy was attached) — keeps RR robust to NCPU-wide races
        // without needing its own lock ordered against `proc.inner`.
        for proc in table.slots() {
            if proc.state() == crate::proc::ProcState::Runnable
                && !ready.iter().any(|p| Arc::ptr_eq(p, proc))
            {
                ready.push_back(proc.clone());
            }
        }
        ready.pop_front()
    }

    fn on_enqueue(&self, proc: &Arc<Proc>) {
        let mut ready = self.ready.lock().unwrap();
        if !ready.iter().any(|p| Arc::ptr_eq(p, proc)) {
            ready.push_back(proc.clone());
        }
    }

    fn on_dispatch(&self, _proc: &Arc<Proc>) {}

    fn on_tick(&self, _table: &ProcTable, running: &Arc<Proc>, elapsed_ticks: u64) {
        if elapsed_ticks >= TIME_SLICE_TICKS {
            let mut inner = running.inner.lock();
            if inner.state == crate::proc::ProcState::Running {
                inner.state = crate::proc::ProcState::Runnable;
                drop(inner);
                self.on_enqueue(running);
            }
        }
    }

    fn name(&self) -> &'static str {
        "rr"
    }
}
