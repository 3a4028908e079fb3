//! Lifecycle syscalls (spec §4): fork, exit, wait, waitx, sleep, wakeup,
//! kill, yield, setpriority. Grounded on
//! `examples/Yuleo1-octox/src/kernel/proc.rs`'s `fork`/`exit`/`wait`/`kill`
//! and `examples/original_source/kernel/proc.c`'s `waitx`/`set_priority`
//! for the PBS-specific accounting fields.

use crate::collab::{ContextSwitch, FileOps, MemoryOps};
use crate::error::{SchedError, SchedResult};
use crate::param::DEFAULT_PSTATIC;
use crate::pid::Pid;
use crate::proc::process::Proc;
use crate::proc::state::ProcState;
use crate::proc::table::ProcTable;
use std::sync::Arc;

/// Everything a lifecycle operation needs beyond the process table itself:
/// the external collaborators (spec §6) it must call through, plus the
/// current time source. Bundled so `fork`/`exit`/`wait` don't each grow a
/// five-argument signature.
pub struct LifecycleCtx<'a> {
    pub table: &'a ProcTable,
    pub mem: &'a dyn MemoryOps,
    pub files: &'a dyn FileOps,
    pub switch: &'a dyn ContextSwitch,
    pub now: &'a dyn Fn() -> u64,
}

/// Creates a new process as a copy of `parent` (spec §4.2). The child
/// inherits `parent`'s memory image, open files, cwd, trace mask, and
/// scheduling parameters (static priority, niceness); it does not inherit
/// `parent`'s PID, accounting counters, or queue position.
pub fn fork(ctx: &LifecycleCtx<'_>, parent: &Arc<Proc>) -> SchedResult<Pid> {
    let now = (ctx.now)();
    let child = ctx.table.alloc_slot(now).ok_or(SchedError::NoSlot)?;

    let (parent_size, parent_pt) = unsafe { (parent.data().mem_size, parent.data().page_table) };
    let child_pt = match ctx.mem.create_user_pagetable() {
        Ok(pt) => pt,
        Err(_) => {
            ctx.table.free_slot(&child, ctx.mem, &ctx.table.wait_lock().lock().unwrap());
            return Err(SchedError::OutOfMemory);
        }
    };
    if let Some(parent_pt) = parent_pt {
        if ctx.mem.copy_user_mem(parent_pt, child_pt, parent_size).is_err() {
            ctx.mem.free_user_pagetable(child_pt, 0);
            ctx.table.free_slot(&child, ctx.mem, &ctx.table.wait_lock().lock().unwrap());
            return Err(SchedError::OutOfMemory);
        }
    }
    let trap_frame = ctx.mem.alloc_trap_frame().ok();
    let kernel_stack = ctx.mem.alloc_kernel_stack().ok();

    {
        let parent_inner = parent.inner.lock();
        let mut child_inner = child.inner.lock();
        child_inner.pstatic = parent_inner.pstatic;
        child_inner.pdynamic = parent_inner.pstatic;
        child_inner.niceness = parent_inner.niceness;
    }

    unsafe {
        let parent_data = parent.data();
        let parent_name = parent_data.name_str().to_owned();
        let parent_trace = parent_data.trace_mask;
        let parent_cwd = parent_data.cwd;
        let parent_files = parent_data.open_files;

        let child_data = child.data_mut();
        child_data.mem_size = parent_size;
        child_data.page_table = Some(child_pt);
        child_data.trap_frame = trap_frame;
        child_data.kernel_stack = kernel_stack;
        child_data.cwd = parent_cwd.map(|ino| ctx.files.dup_inode(ino));
        child_data.trace_mask = parent_trace;
        child_data.set_name(&parent_name);
        for (slot, fd) in child_data.open_files.iter_mut().zip(parent_files.iter()) {
            *slot = fd.map(|f| ctx.files.dup(f));
        }
    }

    {
        let wait_guard = ctx.table.wait_lock().lock().unwrap();
        child.set_parent_guarded(&wait_guard, Some(parent.clone()));
    }

    let mut child_inner = child.inner.lock();
    child_inner.state = ProcState::Runnable;
    let pid = child_inner.pid;
    drop(child_inner);
    Ok(pid)
}

/// Marks `proc` a zombie, reassigns its children to `init`, and wakes
/// whichever ancestor is blocked in `wait`/`waitx` (spec §4.3). Never
/// returns: the caller's kernel thread has nothing left to do but hand
/// control back to the scheduler via `ContextSwitch`.
pub fn exit(ctx: &LifecycleCtx<'_>, proc: &Arc<Proc>, init: &Arc<Proc>, status: i32) -> ! {
    if Arc::ptr_eq(proc, init) {
        panic!("init exiting");
    }

    unsafe {
        let data = proc.data_mut();
        for fd in data.open_files.iter_mut() {
            if let Some(f) = fd.take() {
                ctx.files.close(f);
            }
        }
        if let Some(cwd) = data.cwd.take() {
            ctx.files.put_inode(cwd);
        }
    }

    let now = (ctx.now)();
    let wait_guard = ctx.table.wait_lock().lock().unwrap();
    ctx.table.reparent_children(proc, init, &wait_guard);

    let parent = proc.parent_guarded(&wait_guard);

    let mut inner = proc.inner.lock();
    inner.exit_status = status;
    inner.etime = now;
    inner.state = ProcState::Zombie;
    drop(inner);
    drop(wait_guard);

    if let Some(parent) = parent {
        parent.wake.notify_all();
    }

    ctx.switch.switch_to(Pid::NONE);
    unreachable!("scheduler must not resume an exited process")
}

/// Blocks `parent`'s calling thread until one of its children becomes a
/// zombie, reaps it, and returns `(child_pid, exit_status)` (spec §4.4).
/// `NoChildren` if `parent` has none at all.
pub fn wait(ctx: &LifecycleCtx<'_>, parent: &Arc<Proc>) -> SchedResult<(Pid, i32)> {
    loop {
        let wait_guard = ctx.table.wait_lock().lock().unwrap();
        let children = ctx.table.children_of(parent, &wait_guard);
        if children.is_empty() {
            return Err(SchedError::NoChildren);
        }
        for child in &children {
            let mut inner = child.inner.lock();
            if inner.state == ProcState::Zombie {
                let pid = inner.pid;
                let status = inner.exit_status;
                drop(inner);
                ctx.table.free_slot(child, ctx.mem, &wait_guard);
                return Ok((pid, status));
            }
        }

        let parent_killed = {
            let inner = parent.inner.lock();
            inner.killed
        };
        if parent_killed {
            return Err(SchedError::KilledWhileWaiting);
        }

        // Sleep on our own condvar; `exit` wakes us via `parent.wake` once
        // a child becomes a zombie. `wait_guard` is dropped by parking on
        // a *different* lock (`parent.inner`), matching the teacher's
        // "sleep releases the table lock, not the proc lock" ordering.
        drop(wait_guard);
        let inner = parent.inner.lock();
        let _unused = parent.wake.wait_timeout(inner, std::time::Duration::from_millis(50));
    }
}

/// Like [`wait`] but also reports the reaped child's accounting totals
/// (spec §4.5): wait time, run time, and total wait time, in addition to
/// pid and exit status. Grounded on `original_source/kernel/proc.c`'s
/// `waitx`, which xv6 adds specifically to support PBS/MLFQ diagnostics.
pub fn waitx(ctx: &LifecycleCtx<'_>, parent: &Arc<Proc>) -> SchedResult<WaitxResult> {
    loop {
        let wait_guard = ctx.table.wait_lock().lock().unwrap();
        let children = ctx.table.children_of(parent, &wait_guard);
        if children.is_empty() {
            return Err(SchedError::NoChildren);
        }
        for child in &children {
            let mut inner = child.inner.lock();
            if inner.state == ProcState::Zombie {
                // `wtime` here is the lifetime-minus-running figure the
                // syscall actually reports (spec §4.5), not the `wtime`
                // field itself (which resets on MLFQ ageing and so isn't a
                // lifetime total); `twtime` is carried alongside as the
                // richer running-total diagnostic.
                let result = WaitxResult {
                    pid: inner.pid,
                    exit_status: inner.exit_status,
                    wtime: inner.etime.saturating_sub(inner.ctime).saturating_sub(inner.rtime),
                    rtime: inner.rtime,
                    twtime: inner.twtime,
                };
                drop(inner);
                ctx.table.free_slot(child, ctx.mem, &wait_guard);
                return Ok(result);
            }
        }
        drop(wait_guard);
        let inner = parent.inner.lock();
        let _unused = parent.wake.wait_timeout(inner, std::time::Duration::from_millis(50));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitxResult {
    pub pid: Pid,
    pub exit_status: i32,
    pub wtime: u64,
    pub rtime: u64,
    pub twtime: u64,
}

/// Parks the calling process on `chan` until a matching [`wakeup`] (spec
/// §4.7). `chan` is an opaque key; callers choose something address-like
/// and unique to the resource being waited on.
pub fn sleep(proc: &Arc<Proc>, chan: usize) {
    let mut inner = proc.inner.lock();
    inner.sleep_chan = chan;
    inner.state = ProcState::Sleeping;
    while inner.sleep_chan != 0 {
        let (next, _) = proc
            .wake
            .wait_timeout(inner, std::time::Duration::from_millis(50))
            .unwrap();
        inner = next;
    }
}

/// Wakes every process sleeping on `chan` (spec §4.8). A no-op if nobody
/// is waiting — waking a channel nobody slept on is not an error. Returns
/// the processes it moved to `Runnable` so a scheduler-aware caller can
/// enqueue them with the active policy; this function only knows about the
/// table, not the policy.
pub fn wakeup(table: &ProcTable, chan: usize) -> Vec<Arc<Proc>> {
    let mut woken = Vec::new();
    for proc in table.slots() {
        let mut inner = proc.inner.lock();
        if inner.state == ProcState::Sleeping && inner.sleep_chan == chan {
            inner.sleep_chan = 0;
            inner.state = ProcState::Runnable;
            drop(inner);
            proc.wake.notify_all();
            woken.push(proc.clone());
        }
    }
    woken
}

/// Sets `proc`'s `killed` flag and, if it is sleeping, wakes it so it can
/// observe the flag and unwind (spec §4.9). Killing an already-dead or
/// nonexistent process is reported via [`SchedError::NoSuchPid`] by the
/// caller, which must look the pid up first. Returns whether the kill moved
/// `proc` to `Runnable`, so a scheduler-aware caller knows whether it needs
/// enqueuing with the active policy.
pub fn kill(table: &ProcTable, pid: Pid) -> SchedResult<bool> {
    let proc = table.find(pid).ok_or(SchedError::NoSuchPid)?;
    let mut inner = proc.inner.lock();
    inner.killed = true;
    let woke = inner.state == ProcState::Sleeping;
    if woke {
        inner.sleep_chan = 0;
        inner.state = ProcState::Runnable;
    }
    drop(inner);
    proc.wake.notify_all();
    Ok(woke)
}

/// Updates `pid`'s static priority for PBS (spec §4.14). Argument order is
/// `(priority, pid)` to match the syscall's calling convention, not
/// `(pid, priority)` as the natural Rust-idiomatic order would suggest —
/// see DESIGN.md's open-question decision on this. Marks the slot `is_new`
/// again so the next PBS selection round treats it as freshly scheduled
/// rather than carrying over stale `rtime_prev`/`stime_prev` counters.
pub fn setpriority(table: &ProcTable, priority: i32, pid: Pid) -> SchedResult<i32> {
    let proc = table.find(pid).ok_or(SchedError::NoSuchPid)?;
    if !(0..=100).contains(&priority) {
        return Err(SchedError::BadArgument);
    }
    let mut inner = proc.inner.lock();
    let old = inner.pstatic;
    inner.pstatic = priority;
    inner.pdynamic = priority;
    inner.niceness = 5;
    inner.is_new = true;
    inner.rtime_prev = 0;
    inner.stime_prev = 0;
    Ok(old)
}

/// Resolves to the constant the teacher starts every new process's
/// priority at; exposed so `sched` doesn't need to reach into `param`
/// directly for it.
pub const fn default_priority() -> i32 {
    DEFAULT_PSTATIC
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collab::{InlineContextSwitch, TestCollaborators};
    use crate::proc::table::ProcTable;
    use std::panic::{catch_unwind, AssertUnwindSafe};
    use std::sync::atomic::{AtomicU64, Ordering};

    /// Binds `$name` to a `LifecycleCtx` borrowing the test's collaborators.
    /// A statement macro rather than a function: `now_fn` must live in the
    /// caller's own scope, since `LifecycleCtx::now` borrows it and a
    /// function-local closure wouldn't outlive the function call.
    macro_rules! lifecycle_ctx {
        ($name:ident, $table:expr, $mem:expr, $switch:expr, $clock:expr) => {
            let now_fn = || $clock.load(Ordering::Relaxed);
            let $name = LifecycleCtx {
                table: &$table,
                mem: &$mem,
                files: &$mem,
                switch: &$switch,
                now: &now_fn,
            };
        };
    }

    fn spawn_init(table: &ProcTable, now: u64) -> Arc<Proc> {
        let init = table.alloc_slot(now).unwrap();
        init.inner.lock().state = ProcState::Runnable;
        init
    }

    #[test]
    fn fork_gives_the_child_a_distinct_pid_and_copies_scheduling_params() {
        let table = ProcTable::new();
        let mem = TestCollaborators::new();
        let switch = InlineContextSwitch::new();
        let clock = AtomicU64::new(0);
        lifecycle_ctx!(lc, table, mem, switch, clock);

        let parent = spawn_init(&table, 0);
        parent.inner.lock().pstatic = 42;
        parent.inner.lock().niceness = 3;
        unsafe {
            parent.data_mut().set_name("shell");
        }

        let child_pid = fork(&lc, &parent).unwrap();
        assert_ne!(child_pid, parent.pid());
        let child = table.find(child_pid).unwrap();
        assert_eq!(child.inner.lock().pstatic, 42);
        assert_eq!(child.inner.lock().niceness, 3);
        assert_eq!(child.state(), ProcState::Runnable);
        assert_eq!(unsafe { child.data().name_str() }, "shell");

        let guard = table.wait_lock().lock().unwrap();
        assert!(Arc::ptr_eq(&child.parent_guarded(&guard).unwrap(), &parent));
    }

    /// A `MemoryOps`/`FileOps` double whose `create_user_pagetable` always
    /// fails, to exercise `fork`'s partial-allocation cleanup path.
    struct PagetableCreationFails;

    impl crate::collab::MemoryOps for PagetableCreationFails {
        fn create_user_pagetable(&self) -> SchedResult<crate::collab::PageTableHandle> {
            Err(SchedError::OutOfMemory)
        }
        fn copy_user_mem(
            &self,
            _from: crate::collab::PageTableHandle,
            _to: crate::collab::PageTableHandle,
            _size: usize,
        ) -> SchedResult<()> {
            Ok(())
        }
        fn grow_user_mem(
            &self,
            _pt: crate::collab::PageTableHandle,
            old_size: usize,
            delta: usize,
        ) -> SchedResult<usize> {
            Ok(old_size + delta)
        }
        fn shrink_user_mem(&self, _pt: crate::collab::PageTableHandle, old_size: usize, delta: usize) -> usize {
            old_size.saturating_sub(delta)
        }
        fn free_user_pagetable(&self, _pt: crate::collab::PageTableHandle, _size: usize) {}
        fn alloc_kernel_stack(&self) -> SchedResult<crate::collab::KernelStackHandle> {
            Ok(1)
        }
        fn alloc_trap_frame(&self) -> SchedResult<crate::collab::TrapFrameHandle> {
            Ok(1)
        }
        fn free_trap_frame(&self, _tf: crate::collab::TrapFrameHandle) {}
    }

    impl crate::collab::FileOps for PagetableCreationFails {
        fn dup(&self, handle: crate::collab::FileHandle) -> crate::collab::FileHandle {
            handle
        }
        fn close(&self, _handle: crate::collab::FileHandle) {}
        fn dup_inode(&self, inode: crate::collab::InodeHandle) -> crate::collab::InodeHandle {
            inode
        }
        fn put_inode(&self, _inode: crate::collab::InodeHandle) {}
    }

    #[test]
    fn fork_frees_the_child_slot_when_pagetable_creation_fails() {
        let table = ProcTable::new();
        let mem = PagetableCreationFails;
        let switch = InlineContextSwitch::new();
        let clock = AtomicU64::new(0);
        lifecycle_ctx!(lc, table, mem, switch, clock);
        let parent = spawn_init(&table, 0);

        let before = table.slots().iter().filter(|p| p.state() == ProcState::Unused).count();
        assert_eq!(fork(&lc, &parent), Err(SchedError::OutOfMemory));
        let after = table.slots().iter().filter(|p| p.state() == ProcState::Unused).count();
        assert_eq!(after, before, "the failed child slot must be freed back to Unused, not leaked");
    }

    #[test]
    fn fork_fails_with_no_slot_once_the_table_is_full() {
        let table = ProcTable::new();
        let mem = TestCollaborators::new();
        let switch = InlineContextSwitch::new();
        let clock = AtomicU64::new(0);
        lifecycle_ctx!(lc, table, mem, switch, clock);
        let parent = spawn_init(&table, 0);
        // `init` and `parent` already occupy two slots; fill the rest.
        for _ in 0..(crate::param::NPROC - 2) {
            fork(&lc, &parent).unwrap();
        }
        assert_eq!(fork(&lc, &parent), Err(SchedError::NoSlot));
    }

    /// Scenario: single child fork/wait (spec §8 scenario 1). `exit` hands
    /// control to the scheduler via `ContextSwitch::switch_to`, which this
    /// test's collaborator never returns from (any dispatch afterwards is a
    /// bug in a real kernel); we simulate that divergence with a panic and
    /// catch it, since nothing after `exit` should ever run regardless.
    #[test]
    fn single_child_fork_then_exit_then_wait_reaps_the_child() {
        let table = ProcTable::new();
        let mem = TestCollaborators::new();
        let switch = InlineContextSwitch::new();
        let clock = AtomicU64::new(0);
        lifecycle_ctx!(lc, table, mem, switch, clock);

        let init = spawn_init(&table, 0);
        let parent = table.alloc_slot(0).unwrap();
        {
            let guard = table.wait_lock().lock().unwrap();
            parent.set_parent_guarded(&guard, Some(init.clone()));
        }
        let child_pid = fork(&lc, &parent).unwrap();
        let child = table.find(child_pid).unwrap();

        switch.register(Pid::NONE, || panic!("exit diverges into the scheduler"));
        let hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(|_| {}));
        let result = catch_unwind(AssertUnwindSafe(|| exit(&lc, &child, &init, 42)));
        std::panic::set_hook(hook);
        assert!(result.is_err());
        assert_eq!(child.state(), ProcState::Zombie);

        let (reaped_pid, status) = wait(&lc, &parent).unwrap();
        assert_eq!(reaped_pid, child_pid);
        assert_eq!(status, 42);
        assert_eq!(child.state(), ProcState::Unused);
        assert!(table.find(child_pid).is_none());
        assert!(!parent.pid().is_none());
    }

    #[test]
    fn exit_reparents_orphans_to_init_and_wakes_it() {
        let table = ProcTable::new();
        let mem = TestCollaborators::new();
        let switch = InlineContextSwitch::new();
        let clock = AtomicU64::new(0);
        lifecycle_ctx!(lc, table, mem, switch, clock);

        let init = spawn_init(&table, 0);
        let parent = table.alloc_slot(0).unwrap();
        {
            let guard = table.wait_lock().lock().unwrap();
            parent.set_parent_guarded(&guard, Some(init.clone()));
        }
        let grandchild_pid = fork(&lc, &parent).unwrap();
        let grandchild = table.find(grandchild_pid).unwrap();

        switch.register(Pid::NONE, || panic!("exit diverges into the scheduler"));
        let hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(|_| {}));
        let _ = catch_unwind(AssertUnwindSafe(|| exit(&lc, &parent, &init, 0)));
        std::panic::set_hook(hook);

        let guard = table.wait_lock().lock().unwrap();
        assert!(Arc::ptr_eq(&grandchild.parent_guarded(&guard).unwrap(), &init));
    }

    #[test]
    fn wait_reports_no_children_for_a_childless_process() {
        let table = ProcTable::new();
        let mem = TestCollaborators::new();
        let switch = InlineContextSwitch::new();
        let clock = AtomicU64::new(0);
        lifecycle_ctx!(lc, table, mem, switch, clock);
        let parent = spawn_init(&table, 0);
        assert_eq!(wait(&lc, &parent), Err(SchedError::NoChildren));
    }

    #[test]
    fn waitx_reports_run_and_wait_time_for_the_reaped_child() {
        let table = ProcTable::new();
        let mem = TestCollaborators::new();
        let switch = InlineContextSwitch::new();
        let clock = AtomicU64::new(0);
        lifecycle_ctx!(lc, table, mem, switch, clock);

        let init = spawn_init(&table, 0);
        let parent = table.alloc_slot(0).unwrap();
        {
            let guard = table.wait_lock().lock().unwrap();
            parent.set_parent_guarded(&guard, Some(init.clone()));
        }
        let child_pid = fork(&lc, &parent).unwrap();
        let child = table.find(child_pid).unwrap();
        {
            let mut inner = child.inner.lock();
            inner.rtime = 7;
            inner.twtime = 3;
        }
        // wtime is reported as etime - ctime - rtime (spec §4.5), not the
        // `wtime` field itself: child was created at tick 0 and ran for 7
        // ticks, so exiting at tick 10 means 3 ticks of its lifetime were
        // spent waiting.
        clock.store(10, Ordering::Relaxed);

        switch.register(Pid::NONE, || panic!("exit diverges into the scheduler"));
        let hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(|_| {}));
        let _ = catch_unwind(AssertUnwindSafe(|| exit(&lc, &child, &init, 0)));
        std::panic::set_hook(hook);

        let result = waitx(&lc, &parent).unwrap();
        assert_eq!(result.pid, child_pid);
        assert_eq!(result.rtime, 7);
        assert_eq!(result.wtime, 3);
        assert_eq!(result.twtime, 3);
    }

    /// Scenario: sleep/wake ordering (spec §8 scenario 5) — a wakeup that
    /// arrives on another thread is never lost, even if it races the
    /// sleeper's transition into `Sleeping`.
    #[test]
    fn sleep_then_wakeup_from_another_thread_restores_runnable() {
        let table = Arc::new(ProcTable::new());
        let proc = table.alloc_slot(0).unwrap();
        proc.inner.lock().state = ProcState::Runnable;

        let table_for_waker = table.clone();
        let waker = std::thread::spawn(move || {
            std::thread::sleep(std::time::Duration::from_millis(20));
            wakeup(&table_for_waker, 0xC0FFEE);
        });

        sleep(&proc, 0xC0FFEE);
        waker.join().unwrap();

        assert_eq!(proc.state(), ProcState::Runnable);
        assert_eq!(proc.inner.lock().sleep_chan, 0);
    }

    #[test]
    fn kill_forces_a_sleeper_runnable_and_sets_the_killed_flag() {
        let table = ProcTable::new();
        let proc = table.alloc_slot(0).unwrap();
        let pid = proc.pid();
        proc.inner.lock().state = ProcState::Sleeping;
        proc.inner.lock().sleep_chan = 99;

        let woke = kill(&table, pid).unwrap();
        assert!(woke);

        let inner = proc.inner.lock();
        assert!(inner.killed);
        assert_eq!(inner.state, ProcState::Runnable);
        assert_eq!(inner.sleep_chan, 0);
    }

    #[test]
    fn kill_of_an_already_runnable_process_reports_no_wakeup_needed() {
        let table = ProcTable::new();
        let proc = table.alloc_slot(0).unwrap();
        let pid = proc.pid();
        proc.inner.lock().state = ProcState::Runnable;

        let woke = kill(&table, pid).unwrap();
        assert!(!woke);
        assert!(proc.inner.lock().killed);
    }

    #[test]
    fn kill_of_an_unknown_pid_reports_no_such_pid() {
        let table = ProcTable::new();
        assert_eq!(kill(&table, Pid(999_999)), Err(SchedError::NoSuchPid));
    }

    #[test]
    fn setpriority_swaps_in_the_new_static_priority_and_returns_the_old_one() {
        let table = ProcTable::new();
        let proc = table.alloc_slot(0).unwrap();
        let pid = proc.pid();
        proc.inner.lock().pstatic = 60;

        let old = setpriority(&table, 20, pid).unwrap();
        assert_eq!(old, 60);
        assert_eq!(proc.inner.lock().pstatic, 20);
    }

    #[test]
    fn setpriority_rejects_an_out_of_range_priority() {
        let table = ProcTable::new();
        let proc = table.alloc_slot(0).unwrap();
        let pid = proc.pid();
        assert_eq!(setpriority(&table, 101, pid), Err(SchedError::BadArgument));
    }
}
