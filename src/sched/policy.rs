//! The scheduling-policy seam (spec §9 REDESIGN FLAGS: "scheduler core
//! should be generic over a `SchedulingPolicy` trait instead of `#[cfg]`
//! blocks scattered through `proc.c`"). Each of FCFS/RR/PBS/MLFQ
//! implements this trait; `Scheduler` holds a `Box<dyn SchedulingPolicy>`
//! and never itself branches on which policy is active.

use crate::proc::{Proc, ProcTable};
use std::sync::Arc;

/// Called once per scheduler iteration to choose the next process to run,
/// and at the points in a process's life where a policy might want to
/// react (enqueue, dispatch, timer tick).
pub trait SchedulingPolicy: Send + Sync {
    /// Picks the next `Runnable` process to dispatch, if any (spec §5).
    /// Must not mutate process state beyond what is needed to remove the
    /// chosen process from whatever internal structure the policy keeps.
    fn select_next(&self, table: &ProcTable) -> Option<Arc<Proc>>;

    /// Called when a process transitions into `Runnable` (freshly forked,
    /// woken up, or preempted back from `Running`). Policies that keep
    /// their own queue (RR, MLFQ) use this to enqueue; FCFS and PBS scan
    /// the table directly in `select_next` and can leave this empty.
    fn on_enqueue(&self, proc: &Arc<Proc>);

    /// Called immediately before `proc` is switched onto a CPU.
    fn on_dispatch(&self, proc: &Arc<Proc>);

    /// Called once per scheduler tick for the currently running process
    /// (spec §4.12's ageing, §4.10's time-slice expiry). `elapsed_ticks`
    /// is how many ticks have passed since the last call.
    fn on_tick(&self, table: &ProcTable, running: &Arc<Proc>, elapsed_ticks: u64);

    /// Human-readable name for diagnostics (spec §4.14's `procdump`).
    fn name(&self) -> &'static str;
}
