//! Build-time constants for the process table and scheduler.
//!
//! Mirrors the teacher's `param` module convention (`use crate::param::*` in
//! `proc.rs`): every fixed-size array in the crate is sized off one of these.

/// Number of process-table slots.
pub const NPROC: usize = 64;

/// Number of simulated CPUs running the scheduler loop.
pub const NCPU: usize = 8;

/// Number of open-file slots per process.
pub const NOFILE: usize = 16;

/// Max length of a process name, including the nul terminator.
pub const MAXPROCNAME: usize = 16;

/// Number of MLFQ priority levels.
pub const MLFQ_LEVELS: usize = 5;

/// Per-level ageing threshold, in ticks. Level 0 never ages (disabled: `None`).
pub const AGEING_THRESHOLD: [Option<u64>; MLFQ_LEVELS] = [None, Some(10), Some(20), Some(30), Some(40)];

/// Initial static priority assigned to every newly allocated process under PBS.
pub const DEFAULT_PSTATIC: i32 = 60;

/// Clamp bounds for PBS dynamic priority.
pub const PDYNAMIC_MIN: i32 = 0;
pub const PDYNAMIC_MAX: i32 = 100;
