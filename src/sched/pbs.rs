//! Priority-based scheduling (spec §4.12's PBS case, §4.11 for the dynamic
//! priority formula), grounded on
//! `examples/original_source/kernel/proc.c`'s `#ifdef PBS` branch: picks
//! the `Runnable` process with the lowest dynamic priority number
//! (lower = more urgent), breaking ties by scheduled-count then creation
//! time.

use crate::param::{PDYNAMIC_MAX, PDYNAMIC_MIN};
use crate::proc::{Proc, ProcState, ProcTable};
use crate::sched::policy::SchedulingPolicy;
use std::sync::Arc;

#[derive(Default)]
pub struct Pbs;

impl Pbs {
    pub fn new() -> Self {
        Self
    }

    /// Recomputes `pdynamic` from niceness and static priority (spec
    /// §4.12): `pdynamic = max(0, min(pstatic - niceness + 5, 100))`.
    pub fn recompute_dynamic_priority(pstatic: i32, niceness: i32) -> i32 {
        (pstatic - niceness + 5).clamp(PDYNAMIC_MIN, PDYNAMIC_MAX)
    }

    /// Niceness from the fraction of the interval since the last
    /// (re)schedule spent sleeping versus running (spec §4.12): a process
    /// that has never been scheduled gets the neutral middle value;
    /// otherwise heavy sleepers get a low niceness number (friendlier,
    /// higher effective priority next time).
    pub fn recompute_niceness(is_new: bool, rtime_prev: u64, stime_prev: u64) -> i32 {
        if is_new {
            return 5;
        }
        let total = rtime_prev + stime_prev;
        if total == 0 {
            5
        } else {
            ((10 * stime_prev) / total) as i32
        }
    }
}

impl SchedulingPolicy for Pbs {
    /// Recomputes every live slot's niceness/pdynamic before picking the
    /// `Runnable` one with the lowest `pdynamic` (spec §4.12: "for every
    /// slot, compute niceness/pdynamic", not just the one about to run).
    fn select_next(&self, table: &ProcTable) -> Option<Arc<Proc>> {
        for proc in table.slots() {
            let mut inner = proc.inner.lock();
            if inner.state == ProcState::Unused {
                continue;
            }
            let niceness = Self::recompute_niceness(inner.is_new, inner.rtime_prev, inner.stime_prev);
            inner.niceness = niceness;
            inner.pdynamic = Self::recompute_dynamic_priority(inner.pstatic, niceness);
        }
        table
            .slots()
            .iter()
            .filter(|p| p.state() == ProcState::Runnable)
            .min_by_key(|p| {
                let inner = p.inner.lock();
                (inner.pdynamic, inner.ns, inner.ctime)
            })
            .cloned()
    }

    fn on_enqueue(&self, _proc: &Arc<Proc>) {}

    /// Clears `is_new` and resets the per-interval counters the niceness
    /// formula consumes (spec §4.12's "on dispatch" clause).
    fn on_dispatch(&self, proc: &Arc<Proc>) {
        let mut inner = proc.inner.lock();
        inner.is_new = false;
        inner.rtime_prev = 0;
        inner.stime_prev = 0;
        inner.ns += 1;
    }

    fn on_tick(&self, _table: &ProcTable, _running: &Arc<Proc>, _elapsed_ticks: u64) {
        // PBS recomputes niceness/pdynamic at selection time, over every
        // slot at once (see `select_next`); there is nothing left for a
        // per-tick hook to do.
    }

    fn name(&self) -> &'static str {
        "pbs"
    }
}
