//! Per-tick timing accounting (spec §4.10), grounded on
//! `examples/original_source/kernel/proc.c`'s `update_time()`: every live
//! process accrues `rtime`/`rtime_prev` while running, `stime_prev` while
//! sleeping, and `wtime`/`twtime` while runnable — the `_prev` counters feed
//! PBS's niceness recomputation and are reset on each (re)schedule, while
//! `wtime`/`twtime`/`rtime` accumulate for the process's whole life.

use crate::proc::{ProcState, ProcTable};

/// Advances every process's time-in-state counters by one tick. Called
/// once per scheduler tick regardless of which policy is active — timing
/// accounting is policy-independent (spec §4.10's own framing: PBS and
/// MLFQ both consume these counters, but neither owns them).
pub fn tick(table: &ProcTable) {
    for proc in table.slots() {
        let mut inner = proc.inner.lock();
        if inner.mlfq_priority.is_some() {
            let level = inner.cur_queue;
            inner.qcount[level] += 1;
        }
        match inner.state {
            ProcState::Running => {
                inner.rtime += 1;
                inner.rtime_prev += 1;
            }
            ProcState::Runnable => {
                inner.wtime += 1;
                inner.twtime += 1;
            }
            ProcState::Sleeping => inner.stime_prev += 1,
            ProcState::Used | ProcState::Zombie | ProcState::Unused => {}
        }
    }
}
