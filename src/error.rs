//! Error kinds surfaced at the syscall boundary.
//!
//! No error-derive crate is used here: nothing in the retrieval pack reaches
//! for `thiserror`/`anyhow` in kernel-space code, so this follows the same
//! hand-written-`Display` precedent as `kaist-cp-rv6`'s `PipeError`.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedError {
    /// The process table is full.
    NoSlot,
    /// A collaborator allocation (trap frame, page table, ...) failed.
    OutOfMemory,
    /// A syscall argument failed to decode.
    BadArgument,
    /// `wait`/`waitx` found no children to wait for.
    NoChildren,
    /// `kill`/`setpriority` found no slot with the given pid.
    NoSuchPid,
    /// The caller was killed while blocked inside `wait`/`waitx`.
    KilledWhileWaiting,
}

impl fmt::Display for SchedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            SchedError::NoSlot => "process table exhausted",
            SchedError::OutOfMemory => "collaborator allocation failed",
            SchedError::BadArgument => "bad syscall argument",
            SchedError::NoChildren => "no children to wait for",
            SchedError::NoSuchPid => "no such pid",
            SchedError::KilledWhileWaiting => "killed while waiting",
        };
        f.write_str(msg)
    }
}

/// Every `SchedError` surfaces as `-1` at the syscall boundary; the kind is
/// still observable via `Result<_, SchedError>` for in-crate callers, it is
/// only collapsed to a raw code at the very edge.
impl From<SchedError> for i64 {
    fn from(_: SchedError) -> i64 {
        -1
    }
}

pub type SchedResult<T> = Result<T, SchedError>;
