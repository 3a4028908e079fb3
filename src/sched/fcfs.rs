//! First-come-first-served (spec §4.10's FCFS case), grounded on
//! `examples/original_source/kernel/proc.c`'s `#ifdef FCFS` scheduler loop:
//! among all `Runnable` processes, picks the one with the smallest
//! creation time and never preempts it once running.

use crate::proc::{Proc, ProcTable};
use crate::sched::policy::SchedulingPolicy;
use std::sync::Arc;

#[derive(Default)]
pub struct Fcfs;

impl Fcfs {
    pub fn new() -> Self {
        Self
    }
}

impl SchedulingPolicy for Fcfs {
    fn select_next(&self, table: &ProcTable) -> Option<Arc<Proc>> {
        table
            .slots()
            .iter()
            .filter(|p| p.state() == crate::proc::ProcState::Runnable)
            .min_by_key(|p| p.inner.lock().ctime)
            .cloned()
    }

    fn on_enqueue(&self, _proc: &Arc<Proc>) {}

    fn on_dispatch(&self, _proc: &Arc<Proc>) {}

    fn on_tick(&self, _table: &ProcTable, _running: &Arc<Proc>, _elapsed_ticks: u64) {
        // FCFS never preempts on a tick (spec §4.10 edge case).
    }

    fn name(&self) -> &'static str {
        "fcfs"
    }
}
