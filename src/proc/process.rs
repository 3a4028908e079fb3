//! The process record (spec §3): `Proc` splits into a `Lock`-guarded
//! `ProcInner` (the fields a caller must hold the slot lock to touch) and a
//! slot-private `ProcData`, exactly the way the teacher's `Proc` does —
//! `examples/Yuleo1-octox/src/kernel/proc.rs`'s `inner: Mutex<ProcInner>` /
//! `data: UnsafeCell<ProcData>` split, with `parent` carved out into its own
//! cell because it is guarded by the table's `wait_lock` instead.

use crate::collab::{FileHandle, InodeHandle, KernelStackHandle, PageTableHandle, TrapFrameHandle};
use crate::param::{MAXPROCNAME, MLFQ_LEVELS, NOFILE};
use crate::pid::Pid;
use crate::proc::context::Context;
use crate::proc::state::ProcState;
use crate::proc::trace::TraceMask;
use crate::sync::Lock;
use std::cell::UnsafeCell;
use std::sync::{Arc, Condvar, Mutex};

/// Fields a caller must hold `Proc::inner`'s lock to read or write.
#[derive(Debug)]
pub struct ProcInner {
    pub state: ProcState,
    pub pid: Pid,
    pub killed: bool,
    pub exit_status: i32,

    /// Opaque wait-channel key, 0 while not sleeping.
    pub sleep_chan: usize,

    pub ctime: u64,
    pub rtime: u64,
    pub etime: u64,
    pub wtime: u64,
    pub twtime: u64,
    pub rtime_prev: u64,
    pub stime_prev: u64,

    pub is_new: bool,
    pub pstatic: i32,
    pub pdynamic: i32,
    pub niceness: i32,
    pub ns: u64,

    pub cur_queue: usize,
    /// Mirrors `cur_queue` while enqueued; `None` while running, sleeping,
    /// zombie, or otherwise off-queue (spec §4.12's `mlfq_priority = -1`).
    pub mlfq_priority: Option<usize>,
    pub qcount: [u64; MLFQ_LEVELS],
}

impl ProcInner {
    const fn new() -> Self {
        Self {
            state: ProcState::Unused,
            pid: Pid::NONE,
            killed: false,
            exit_status: 0,
            sleep_chan: 0,
            ctime: 0,
            rtime: 0,
            etime: 0,
            wtime: 0,
            twtime: 0,
            rtime_prev: 0,
            stime_prev: 0,
            is_new: true,
            pstatic: crate::param::DEFAULT_PSTATIC,
            pdynamic: crate::param::DEFAULT_PSTATIC,
            niceness: 5,
            ns: 0,
            cur_queue: 0,
            mlfq_priority: None,
            qcount: [0; MLFQ_LEVELS],
        }
    }
}

/// Fields private to the slot: no lock needed to touch them, because only
/// the process's own kernel thread (or the allocator, before the slot is
/// published) ever does.
pub struct ProcData {
    pub mem_size: usize,
    pub page_table: Option<PageTableHandle>,
    pub trap_frame: Option<TrapFrameHandle>,
    pub kernel_stack: Option<KernelStackHandle>,
    pub open_files: [Option<FileHandle>; NOFILE],
    pub cwd: Option<InodeHandle>,
    pub name: [u8; MAXPROCNAME],
    pub trace_mask: TraceMask,
    pub context: Context,
}

impl ProcData {
    fn new() -> Self {
        Self {
            mem_size: 0,
            page_table: None,
            trap_frame: None,
            kernel_stack: None,
            open_files: [None; NOFILE],
            cwd: None,
            name: [0; MAXPROCNAME],
            trace_mask: TraceMask::empty(),
            context: Context::zeroed(),
        }
    }

    pub fn name_str(&self) -> &str {
        let len = self.name.iter().position(|&b| b == 0).unwrap_or(self.name.len());
        std::str::from_utf8(&self.name[..len]).unwrap_or("?")
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = [0; MAXPROCNAME];
        let bytes = name.as_bytes();
        let n = bytes.len().min(MAXPROCNAME - 1);
        self.name[..n].copy_from_slice(&bytes[..n]);
    }
}

/// One process-table slot.
pub struct Proc {
    /// Must be held before touching any `ProcInner` field.
    pub(crate) inner: Lock<ProcInner>,
    /// Per-slot condvar used for the sleep/wakeup handshake (spec §4.7/§4.8):
    /// paired with `inner`'s mutex exactly like a textbook condition
    /// variable, which is what lets `sleep` park a real OS thread instead
    /// of simulating a cooperative hand-off.
    pub(crate) wake: Condvar,
    /// Guarded by the owning `ProcTable`'s `wait_lock`, not by `inner`
    /// (spec §3: "Lock ordering: wait_lock before per-process lock").
    pub(crate) parent: UnsafeCell<Option<Arc<Proc>>>,
    pub(crate) data: UnsafeCell<ProcData>,
}

// SAFETY: `parent` is only ever read or written while the owning table's
// `wait_lock` is held (see `proc::lifecycle`); `data` is only touched by the
// slot's own current kernel thread (single-threaded per slot by
// construction: a slot is never `RUNNING` on two CPUs at once, and no other
// accessor touches `data` while it is live).
unsafe impl Sync for Proc {}

impl Proc {
    pub(crate) fn new() -> Self {
        Self {
            inner: Lock::new("proc", ProcInner::new()),
            wake: Condvar::new(),
            parent: UnsafeCell::new(None),
            data: UnsafeCell::new(ProcData::new()),
        }
    }

    pub fn pid(&self) -> Pid {
        self.inner.lock().pid
    }

    pub fn state(&self) -> ProcState {
        self.inner.lock().state
    }

    /// Access to slot-private data. Callers must already know the slot is
    /// not concurrently running elsewhere (true for the slot's own kernel
    /// thread, and for diagnostics which read racily by design per spec §3).
    ///
    /// # Safety
    /// The caller must not alias this with another live `&mut ProcData`
    /// reference to the same slot.
    pub(crate) unsafe fn data(&self) -> &ProcData {
        &*self.data.get()
    }

    /// # Safety
    /// See [`Proc::data`].
    #[allow(clippy::mut_from_ref)]
    pub(crate) unsafe fn data_mut(&self) -> &mut ProcData {
        &mut *self.data.get()
    }

    pub(crate) fn parent_guarded(&self, _wait_guard: &std::sync::MutexGuard<'_, ()>) -> Option<Arc<Proc>> {
        unsafe { (*self.parent.get()).clone() }
    }

    pub(crate) fn set_parent_guarded(&self, _wait_guard: &std::sync::MutexGuard<'_, ()>, parent: Option<Arc<Proc>>) {
        unsafe {
            *self.parent.get() = parent;
        }
    }
}

impl std::fmt::Debug for Proc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("Proc")
            .field("pid", &inner.pid)
            .field("state", &inner.state)
            .finish()
    }
}

// `Lock<T>` wraps `std::sync::Mutex<T>`; re-exported here so `parent`'s
// guard type can be named without reaching into `crate::sync`.
pub type WaitGuard<'a> = Mutex<()>;
