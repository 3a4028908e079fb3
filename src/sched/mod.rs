//! The scheduler subsystem (spec §4.10, §5): policy selectors, the MLFQ
//! queue set, the timing accountant, and the CPU-facing dispatch loop.

pub mod accountant;
pub mod cpu;
pub mod fcfs;
pub mod mlfq;
pub mod pbs;
pub mod policy;
pub mod queue;
pub mod rr;

pub use cpu::{Cpu, Scheduler};
pub use policy::SchedulingPolicy;

use crate::error::SchedResult;
use crate::pid::Pid;
use crate::proc::lifecycle::{self, LifecycleCtx};
use crate::proc::{Proc, ProcState};
use std::sync::Arc;

/// Builds the default-feature policy (spec §9: build-time policy
/// selection via Cargo features, one crate per kernel image — matching
/// how a real xv6 build picks exactly one scheduler at compile time).
/// When more than one policy feature is enabled in a build (e.g. for
/// testing all four against the same harness), `mlfq` wins, then `pbs`,
/// then `rr`, then `fcfs`; this priority is arbitrary and only matters for
/// multi-feature test builds.
pub fn default_policy() -> Box<dyn SchedulingPolicy> {
    #[cfg(feature = "mlfq")]
    return Box::new(mlfq::Mlfq::new());
    #[cfg(all(feature = "pbs", not(feature = "mlfq")))]
    return Box::new(pbs::Pbs::new());
    #[cfg(all(feature = "rr", not(any(feature = "mlfq", feature = "pbs"))))]
    return Box::new(rr::RoundRobin::new());
    #[cfg(all(
        feature = "fcfs",
        not(any(feature = "mlfq", feature = "pbs", feature = "rr"))
    ))]
    return Box::new(fcfs::Fcfs::new());
    #[cfg(not(any(feature = "mlfq", feature = "pbs", feature = "rr", feature = "fcfs")))]
    return Box::new(rr::RoundRobin::new());
}

/// Voluntary CPU yield (spec §4.6): demotes the caller from `Running` back
/// to `Runnable` and re-enqueues it with the active policy, without
/// touching any of its accounting fields beyond what `on_tick` would have
/// anyway.
pub fn yield_proc(scheduler: &Scheduler, proc: &Arc<Proc>) {
    let mut inner = proc.inner.lock();
    if inner.state == ProcState::Running {
        inner.state = ProcState::Runnable;
    }
    drop(inner);
    scheduler.enqueue(proc);
}

/// Forks `parent` and enqueues the child with the active policy (spec
/// §4.3) — `proc::lifecycle::fork` only allocates the slot and marks it
/// `Runnable`; it has no policy to hand the child to, so any caller that
/// skips this wrapper in favor of the bare lifecycle function leaves the
/// child unreachable under MLFQ (spec §3's "mlfq_priority set iff
/// enqueued" invariant).
pub fn fork(scheduler: &Scheduler, ctx: &LifecycleCtx<'_>, parent: &Arc<Proc>) -> SchedResult<Pid> {
    let pid = lifecycle::fork(ctx, parent)?;
    if let Some(child) = scheduler.table.find(pid) {
        scheduler.enqueue(&child);
    }
    Ok(pid)
}

/// Wakes every process sleeping on `chan` and enqueues each one with the
/// active policy (spec §4.8), for the same reason [`fork`] wraps
/// `lifecycle::fork`.
pub fn wakeup(scheduler: &Scheduler, chan: usize) {
    for proc in lifecycle::wakeup(&scheduler.table, chan) {
        scheduler.enqueue(&proc);
    }
}

/// Kills `pid`, enqueuing it with the active policy if the kill forced it
/// out of `Sleeping` (spec §4.9), for the same reason [`fork`] wraps
/// `lifecycle::fork`. A kill that finds the process already runnable or
/// running leaves its queue membership untouched.
pub fn kill(scheduler: &Scheduler, pid: Pid) -> SchedResult<()> {
    let woke = lifecycle::kill(&scheduler.table, pid)?;
    if woke {
        if let Some(proc) = scheduler.table.find(pid) {
            scheduler.enqueue(&proc);
        }
    }
    Ok(())
}
