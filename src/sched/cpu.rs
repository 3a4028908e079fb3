//! The scheduler loop (spec §5), grounded on
//! `examples/Yuleo1-octox/src/kernel/proc.rs`'s per-hart `scheduler()`
//! loop: repeatedly pick a runnable process, dispatch it, and hand control
//! to the external context-switch collaborator.

use crate::collab::ContextSwitch;
use crate::proc::{ProcState, ProcTable};
use crate::sched::accountant;
use crate::sched::policy::SchedulingPolicy;
use std::sync::Arc;

/// One logical CPU's view of the scheduler: which process (if any) it is
/// currently running, and how many ticks it has run for.
pub struct Cpu {
    pub id: usize,
    pub running_ticks: u64,
}

impl Cpu {
    pub fn new(id: usize) -> Self {
        Self { id, running_ticks: 0 }
    }
}

/// Owns the policy and drives the table through one dispatch cycle at a
/// time. Exposed as `run_once` rather than an infinite loop so tests (and
/// a future real kernel main loop) control their own pacing — the
/// teacher's `scheduler()` never returns, which isn't something a
/// `#[test]` can drive directly.
pub struct Scheduler {
    pub table: ProcTable,
    pub policy: Box<dyn SchedulingPolicy>,
    pub cpus: Vec<Cpu>,
}

impl Scheduler {
    pub fn new(policy: Box<dyn SchedulingPolicy>, ncpu: usize) -> Self {
        Self {
            table: ProcTable::new(),
            policy,
            cpus: (0..ncpu).map(Cpu::new).collect(),
        }
    }

    /// Picks the next runnable process (if any) via the active policy,
    /// marks it `Running` on `cpu`, calls `on_dispatch`, and switches to
    /// it through the collaborator. Returns the dispatched pid, or `None`
    /// if nothing was runnable (spec §5 edge case: "no runnable process —
    /// idle").
    pub fn run_once(&mut self, cpu_index: usize, switch: &dyn ContextSwitch) -> Option<crate::pid::Pid> {
        let proc = self.policy.select_next(&self.table)?;
        {
            let mut inner = proc.inner.lock();
            if inner.state != ProcState::Runnable {
                return None;
            }
            inner.state = ProcState::Running;
            if inner.is_new {
                inner.is_new = false;
            }
        }
        self.policy.on_dispatch(&proc);
        let pid = proc.pid();
        self.cpus[cpu_index].running_ticks = 0;
        switch.switch_to(pid);
        Some(pid)
    }

    /// Advances the global timing accountant and lets the active policy
    /// react to the tick (preemption, ageing, dynamic-priority recompute).
    /// Called once per timer interrupt (spec §4.6/§4.10/§4.12).
    pub fn tick(&mut self, cpu_index: usize, running: Option<&Arc<crate::proc::Proc>>) {
        accountant::tick(&self.table);
        self.cpus[cpu_index].running_ticks += 1;
        if let Some(proc) = running {
            self.policy
                .on_tick(&self.table, proc, self.cpus[cpu_index].running_ticks);
        }
    }

    /// Moves `proc` back into scheduling contention, e.g. after a fork, a
    /// wakeup, or voluntary yield (spec §4.6/§4.8). Policies that keep
    /// their own ready queue (RR, MLFQ) learn about the transition here.
    pub fn enqueue(&self, proc: &Arc<crate::proc::Proc>) {
        self.policy.on_enqueue(proc);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collab::InlineContextSwitch;
    use crate::sched::rr::RoundRobin;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn run_once_returns_none_when_nothing_is_runnable() {
        let mut scheduler = Scheduler::new(Box::new(RoundRobin::new()), 1);
        let switch = InlineContextSwitch::new();
        assert!(scheduler.run_once(0, &switch).is_none());
    }

    #[test]
    fn run_once_dispatches_the_only_runnable_process() {
        let mut scheduler = Scheduler::new(Box::new(RoundRobin::new()), 1);
        let proc = scheduler.table.alloc_slot(0).unwrap();
        proc.inner.lock().state = ProcState::Runnable;
        scheduler.enqueue(&proc);

        let ran = Arc::new(AtomicUsize::new(0));
        let ran_body = ran.clone();
        let switch = InlineContextSwitch::new();
        switch.register(proc.pid(), move || {
            ran_body.fetch_add(1, Ordering::SeqCst);
        });

        let dispatched = scheduler.run_once(0, &switch);
        assert_eq!(dispatched, Some(proc.pid()));
        assert_eq!(ran.load(Ordering::SeqCst), 1);
        assert_eq!(proc.state(), ProcState::Running);
    }

    #[test]
    fn tick_advances_the_accountant_and_notifies_the_running_processs_policy() {
        let mut scheduler = Scheduler::new(Box::new(RoundRobin::new()), 1);
        let proc = scheduler.table.alloc_slot(0).unwrap();
        proc.inner.lock().state = ProcState::Running;

        scheduler.tick(0, Some(&proc));
        assert_eq!(proc.inner.lock().rtime, 1);
        assert_eq!(scheduler.cpus[0].running_ticks, 1);
    }

    #[test]
    fn tick_with_no_running_process_still_advances_the_accountant() {
        let mut scheduler = Scheduler::new(Box::new(RoundRobin::new()), 1);
        let proc = scheduler.table.alloc_slot(0).unwrap();
        proc.inner.lock().state = ProcState::Runnable;

        scheduler.tick(0, None);
        assert_eq!(proc.inner.lock().wtime, 1);
    }

    // End-to-end scenarios driven against a real `Scheduler`, not a single
    // policy in isolation.

    #[test]
    fn pbs_overtake_preempts_the_running_process_with_a_lower_dynamic_priority() {
        use crate::sched::pbs::Pbs;
        let mut scheduler = Scheduler::new(Box::new(Pbs::new()), 1);
        let a = scheduler.table.alloc_slot(0).unwrap();
        {
            let mut inner = a.inner.lock();
            inner.state = ProcState::Runnable;
            inner.pstatic = 60;
            inner.pdynamic = 60;
        }
        let b = scheduler.table.alloc_slot(1).unwrap();
        {
            let mut inner = b.inner.lock();
            inner.state = ProcState::Runnable;
            inner.pstatic = 40;
            inner.pdynamic = 40;
        }

        let switch = InlineContextSwitch::new();
        let dispatched = scheduler.run_once(0, &switch).unwrap();
        assert_eq!(dispatched, b.pid());
        assert!(b.inner.lock().ns >= 1);
        assert_eq!(a.state(), ProcState::Runnable);
    }

    #[test]
    fn mlfq_yield_re_enters_queue_zero_without_demotion() {
        use crate::sched::mlfq::Mlfq;
        let mut scheduler = Scheduler::new(Box::new(Mlfq::new()), 1);
        let proc = scheduler.table.alloc_slot(0).unwrap();
        proc.inner.lock().state = ProcState::Runnable;
        scheduler.enqueue(&proc);

        let switch = InlineContextSwitch::new();
        let dispatched = scheduler.run_once(0, &switch).unwrap();
        assert_eq!(dispatched, proc.pid());

        crate::sched::yield_proc(&scheduler, &proc);
        assert_eq!(proc.inner.lock().cur_queue, 0);

        let redispatched = scheduler.run_once(0, &switch).unwrap();
        assert_eq!(redispatched, proc.pid());
    }

    #[test]
    fn mlfq_ageing_promotes_a_starved_process_on_the_next_dispatch() {
        use crate::sched::mlfq::Mlfq;
        let mut scheduler = Scheduler::new(Box::new(Mlfq::new()), 1);
        let starved = scheduler.table.alloc_slot(0).unwrap();
        {
            let mut inner = starved.inner.lock();
            inner.state = ProcState::Runnable;
            inner.cur_queue = 4;
        }
        scheduler.enqueue(&starved);

        for _ in 0..41 {
            scheduler.tick(0, None);
        }

        let switch = InlineContextSwitch::new();
        scheduler.run_once(0, &switch);
        let inner = starved.inner.lock();
        assert_eq!(inner.cur_queue, 3);
        assert_eq!(inner.wtime, 0);
    }

    #[test]
    fn kill_during_sleep_forces_runnable_and_stays_killed_through_dispatch() {
        let mut scheduler = Scheduler::new(Box::new(RoundRobin::new()), 1);
        let proc = scheduler.table.alloc_slot(0).unwrap();
        {
            let mut inner = proc.inner.lock();
            inner.state = ProcState::Sleeping;
            inner.sleep_chan = 7;
        }

        crate::sched::kill(&scheduler, proc.pid()).unwrap();
        assert_eq!(proc.state(), ProcState::Runnable);
        assert!(proc.inner.lock().killed);

        let switch = InlineContextSwitch::new();
        let dispatched = scheduler.run_once(0, &switch).unwrap();
        assert_eq!(dispatched, proc.pid());
        assert!(proc.inner.lock().killed);
    }

    #[test]
    fn kill_during_sleep_enqueues_with_mlfq_and_stays_dispatchable() {
        use crate::sched::mlfq::Mlfq;
        let mut scheduler = Scheduler::new(Box::new(Mlfq::new()), 1);
        let proc = scheduler.table.alloc_slot(0).unwrap();
        {
            let mut inner = proc.inner.lock();
            inner.state = ProcState::Sleeping;
            inner.sleep_chan = 7;
        }

        crate::sched::kill(&scheduler, proc.pid()).unwrap();
        assert_eq!(proc.inner.lock().mlfq_priority, Some(0));

        let switch = InlineContextSwitch::new();
        let dispatched = scheduler.run_once(0, &switch).unwrap();
        assert_eq!(dispatched, proc.pid());
    }
}
