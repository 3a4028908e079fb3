//! Process records, the process table, and lifecycle operations (spec §3,
//! §4). Layout mirrors `examples/Yuleo1-octox/src/kernel/proc.rs`'s module
//! split into `proc::{context, trapframe, ...}` submodules plus `proc.rs`
//! itself for the table.

pub mod context;
pub mod lifecycle;
pub mod process;
pub mod state;
pub mod table;
pub mod trace;

pub use crate::pid::{Pid, PidAllocator};
pub use lifecycle::{LifecycleCtx, WaitxResult};
pub use process::{Proc, ProcData, ProcInner};
pub use state::ProcState;
pub use table::ProcTable;
pub use trace::TraceMask;
