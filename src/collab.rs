//! External collaborator interfaces (spec §6).
//!
//! Real kernels plug the VM allocator, the file-descriptor table, and the
//! trap/context-switch assembly in here. All three are explicitly out of
//! scope for this crate (§1); it only needs narrow, opaque-handle traits to
//! drive the lifecycle operations, plus a `cargo test`-only in-memory double
//! for each so the whole scheduler core can be exercised on a host.
//!
//! The handle types are plain integers rather than associated types, the
//! same way the original kernel passes around raw pointers/indices for
//! `pagetable_t`, file descriptors, and inode pointers — keeping `Proc` and
//! `ProcTable` free of generic parameters.

use crate::error::SchedResult;
use crate::proc::Pid;
use std::sync::atomic::{AtomicU64, Ordering};

pub type PageTableHandle = u64;
pub type TrapFrameHandle = u64;
pub type KernelStackHandle = u64;
pub type FileHandle = u32;
pub type InodeHandle = u32;

/// Virtual-memory services a real kernel supplies: page-table creation,
/// user-memory copy/grow/shrink, and the per-process trap frame page.
pub trait MemoryOps: Send + Sync {
    fn create_user_pagetable(&self) -> SchedResult<PageTableHandle>;
    fn copy_user_mem(&self, from: PageTableHandle, to: PageTableHandle, size: usize) -> SchedResult<()>;
    fn grow_user_mem(&self, pt: PageTableHandle, old_size: usize, delta: usize) -> SchedResult<usize>;
    fn shrink_user_mem(&self, pt: PageTableHandle, old_size: usize, delta: usize) -> usize;
    fn free_user_pagetable(&self, pt: PageTableHandle, size: usize);
    fn alloc_kernel_stack(&self) -> SchedResult<KernelStackHandle>;
    fn alloc_trap_frame(&self) -> SchedResult<TrapFrameHandle>;
    fn free_trap_frame(&self, tf: TrapFrameHandle);
}

/// File-descriptor-table services: duplicate/close an open file, dup/put an
/// inode reference (for `cwd`).
pub trait FileOps: Send + Sync {
    fn dup(&self, handle: FileHandle) -> FileHandle;
    fn close(&self, handle: FileHandle);
    fn dup_inode(&self, inode: InodeHandle) -> InodeHandle;
    fn put_inode(&self, inode: InodeHandle);
}

/// The hand-off described in spec §4.13: transfer control into `pid`'s saved
/// context, returning once that kernel thread has yielded, slept, or exited
/// and control has returned to the scheduler loop. A real port implements
/// this with `swtch` assembly; it is the one piece this crate cannot
/// meaningfully provide a working implementation of outside a test harness.
pub trait ContextSwitch: Send + Sync {
    fn switch_to(&self, pid: Pid);
}

/// In-memory `MemoryOps`/`FileOps` doubles for `cargo test`. Handles are
/// just monotonically increasing counters; "copy" and "grow" always
/// succeed unless told otherwise.
pub struct TestCollaborators {
    next_handle: AtomicU64,
}

impl TestCollaborators {
    pub fn new() -> Self {
        Self {
            next_handle: AtomicU64::new(1),
        }
    }

    fn fresh(&self) -> u64 {
        self.next_handle.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for TestCollaborators {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryOps for TestCollaborators {
    fn create_user_pagetable(&self) -> SchedResult<PageTableHandle> {
        Ok(self.fresh())
    }
    fn copy_user_mem(&self, _from: PageTableHandle, _to: PageTableHandle, _size: usize) -> SchedResult<()> {
        Ok(())
    }
    fn grow_user_mem(&self, _pt: PageTableHandle, old_size: usize, delta: usize) -> SchedResult<usize> {
        Ok(old_size + delta)
    }
    fn shrink_user_mem(&self, _pt: PageTableHandle, old_size: usize, delta: usize) -> usize {
        old_size.saturating_sub(delta)
    }
    fn free_user_pagetable(&self, _pt: PageTableHandle, _size: usize) {}
    fn alloc_kernel_stack(&self) -> SchedResult<KernelStackHandle> {
        Ok(self.fresh())
    }
    fn alloc_trap_frame(&self) -> SchedResult<TrapFrameHandle> {
        Ok(self.fresh())
    }
    fn free_trap_frame(&self, _tf: TrapFrameHandle) {}
}

impl FileOps for TestCollaborators {
    fn dup(&self, handle: FileHandle) -> FileHandle {
        handle
    }
    fn close(&self, _handle: FileHandle) {}
    fn dup_inode(&self, inode: InodeHandle) -> InodeHandle {
        inode
    }
    fn put_inode(&self, _inode: InodeHandle) {}
}

/// A `ContextSwitch` double that runs the dispatched process synchronously
/// on the scheduler-loop thread, via whatever closure was registered for
/// that pid. This is what lets the whole fork/dispatch/yield/exit cycle be
/// driven deterministically from `#[test]` functions without real hardware.
pub struct InlineContextSwitch {
    bodies: std::sync::Mutex<std::collections::HashMap<Pid, Box<dyn FnMut() + Send>>>,
}

impl InlineContextSwitch {
    pub fn new() -> Self {
        Self {
            bodies: std::sync::Mutex::new(std::collections::HashMap::new()),
        }
    }

    /// Register the kernel-thread body to run the next time `pid` is
    /// dispatched. Bodies are one-shot: register again to be dispatched a
    /// second time (mirrors the fact that a real kernel thread resumes
    /// exactly where its last `sched()` call left off, not from the top).
    pub fn register(&self, pid: Pid, body: impl FnMut() + Send + 'static) {
        self.bodies.lock().unwrap().insert(pid, Box::new(body));
    }
}

impl Default for InlineContextSwitch {
    fn default() -> Self {
        Self::new()
    }
}

impl ContextSwitch for InlineContextSwitch {
    fn switch_to(&self, pid: Pid) {
        let mut body = match self.bodies.lock().unwrap().remove(&pid) {
            Some(body) => body,
            None => return,
        };
        body();
    }
}
