//! Syscall-boundary wrappers (spec §6): thin shims translating between
//! `SchedResult<T>` and the raw integer return convention xv6-style
//! syscalls use (`-1` on error, translated via `SchedError`'s `Into<i64>`).
//! Grounded on `examples/Yuleo1-octox/src/kernel/syscall/proc.rs`'s
//! `sys_fork`/`sys_exit`/`sys_wait`/... wrappers around the same
//! `proc::` operations this crate exposes directly.

use crate::diagnostics;
use crate::pid::Pid;
use crate::proc::lifecycle::{self, LifecycleCtx};
use crate::proc::{Proc, ProcTable, TraceMask};
use crate::sched::{self, Scheduler};
use std::sync::Arc;

/// Scheduler-aware: the child must land in the active policy's ready queue,
/// not just the process table (spec §4.3), so this goes through
/// `sched::fork` rather than `lifecycle::fork` directly.
pub fn sys_fork(scheduler: &Scheduler, ctx: &LifecycleCtx<'_>, parent: &Arc<Proc>) -> i64 {
    match sched::fork(scheduler, ctx, parent) {
        Ok(pid) => pid.0,
        Err(e) => e.into(),
    }
}

pub fn sys_exit(ctx: &LifecycleCtx<'_>, proc: &Arc<Proc>, init: &Arc<Proc>, status: i32) -> ! {
    lifecycle::exit(ctx, proc, init, status)
}

pub fn sys_wait(ctx: &LifecycleCtx<'_>, parent: &Arc<Proc>) -> i64 {
    match lifecycle::wait(ctx, parent) {
        Ok((pid, _status)) => pid.0,
        Err(e) => e.into(),
    }
}

pub fn sys_waitx(ctx: &LifecycleCtx<'_>, parent: &Arc<Proc>) -> i64 {
    match lifecycle::waitx(ctx, parent) {
        Ok(result) => result.pid.0,
        Err(e) => e.into(),
    }
}

pub fn sys_sleep(proc: &Arc<Proc>, chan: usize) -> i64 {
    lifecycle::sleep(proc, chan);
    0
}

/// Scheduler-aware: a kill that wakes a sleeper must enqueue it with the
/// active policy (spec §4.9), so this goes through `sched::kill` rather
/// than `lifecycle::kill` directly.
pub fn sys_kill(scheduler: &Scheduler, pid: i64) -> i64 {
    match sched::kill(scheduler, Pid(pid)) {
        Ok(()) => 0,
        Err(e) => e.into(),
    }
}

pub fn sys_getpid(proc: &Arc<Proc>) -> i64 {
    proc.pid().0
}

/// `sbrk` (spec §6's "VM resize" surface): grows or shrinks the caller's
/// address space by `increment` bytes and returns the address the break
/// used to be at, xv6-convention. Negative `increment` shrinks.
pub fn sys_sbrk(mem: &dyn crate::collab::MemoryOps, proc: &Arc<Proc>, increment: i64) -> i64 {
    let (old_size, page_table) = unsafe {
        let data = proc.data();
        (data.mem_size, data.page_table)
    };
    let Some(page_table) = page_table else {
        return -1;
    };
    if increment >= 0 {
        match mem.grow_user_mem(page_table, old_size, increment as usize) {
            Ok(new_size) => {
                unsafe {
                    proc.data_mut().mem_size = new_size;
                }
                old_size as i64
            }
            Err(_) => -1,
        }
    } else {
        let shrink_by = increment.unsigned_abs() as usize;
        if shrink_by > old_size {
            return -1;
        }
        let new_size = mem.shrink_user_mem(page_table, old_size, shrink_by);
        unsafe {
            proc.data_mut().mem_size = new_size;
        }
        old_size as i64
    }
}

pub fn sys_uptime(now: &dyn Fn() -> u64) -> i64 {
    now() as i64
}

pub fn sys_strace(proc: &Arc<Proc>, mask: u32) -> i64 {
    let Some(mask) = TraceMask::from_bits(mask) else {
        return -1;
    };
    unsafe {
        proc.data_mut().trace_mask = mask;
    }
    0
}

/// `setpriority(priority, pid)` (spec §4.11) — argument order matches the
/// syscall's own convention, see `lifecycle::setpriority`'s doc comment.
pub fn sys_setpriority(table: &ProcTable, priority: i32, pid: i64) -> i64 {
    match lifecycle::setpriority(table, priority, Pid(pid)) {
        Ok(old) => old as i64,
        Err(e) => e.into(),
    }
}

pub fn sys_procdump(scheduler: &Scheduler) {
    diagnostics::procdump(&scheduler.table);
}
