//! Multi-level feedback queue (spec §4.10's MLFQ case, §4.12 for the
//! queue set and ageing), grounded on
//! `examples/original_source/kernel/proc.c`'s `#ifdef MLFQ` branch and its
//! `q[]`/`AGEING_THRESHOLD` tables.

use crate::param::{AGEING_THRESHOLD, MLFQ_LEVELS};
use crate::proc::{Proc, ProcTable};
use crate::sched::policy::SchedulingPolicy;
use crate::sched::queue::MlfqQueues;
use std::sync::{Arc, Mutex};

pub struct Mlfq {
    queues: Mutex<MlfqQueues>,
}

impl Mlfq {
    pub fn new() -> Self {
        Self {
            queues: Mutex::new(MlfqQueues::new()),
        }
    }

    /// Promotes every process that has waited past its level's ageing
    /// threshold one level up (spec §4.12's starvation-avoidance rule).
    /// Level 0 never ages further up; a level whose threshold is `None`
    /// (the lowest level) never ages.
    fn age(&self) {
        let mut queues = self.queues.lock().unwrap();
        for level in (1..MLFQ_LEVELS).rev() {
            let Some(threshold) = AGEING_THRESHOLD[level] else {
                continue;
            };
            let stale: Vec<Arc<Proc>> = queues
                .level(level)
                .filter(|p| {
                    let inner = p.inner.lock();
                    inner.wtime > threshold
                })
                .cloned()
                .collect();
            for proc in stale {
                queues.remove(&proc);
                let mut inner = proc.inner.lock();
                inner.wtime = 0;
                inner.cur_queue = level - 1;
                drop(inner);
                queues.push_tail(level - 1, proc);
            }
        }
    }
}

impl Default for Mlfq {
    fn default() -> Self {
        Self::new()
    }
}

impl SchedulingPolicy for Mlfq {
    fn select_next(&self, _table: &ProcTable) -> Option<Arc<Proc>> {
        self.age();
        let mut queues = self.queues.lock().unwrap();
        queues.pop_head().map(|(_, proc)| proc)
    }

    fn on_enqueue(&self, proc: &Arc<Proc>) {
        let level = proc.inner.lock().cur_queue;
        let mut queues = self.queues.lock().unwrap();
        queues.push_tail(level, proc.clone());
    }

    fn on_dispatch(&self, _proc: &Arc<Proc>) {}

    /// No per-level time slice in this design: ageing is the only queue
    /// transition MLFQ makes outside of yield/enqueue (see DESIGN.md's
    /// open-question decision on the dropped `interrupt_procs`/`cpu_time`
    /// fragment).
    fn on_tick(&self, _table: &ProcTable, _running: &Arc<Proc>, _elapsed_ticks: u64) {}

    fn name(&self) -> &'static str {
        "mlfq"
    }
}
