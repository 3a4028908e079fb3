//! Diagnostics (spec §4.14), grounded on
//! `examples/Yuleo1-octox/src/kernel/proc.rs`'s `procdump`, which walks
//! the table and prints pid/state/name for every live slot without taking
//! any lock beyond the one needed to read a single process's own fields —
//! a deliberately racy snapshot, same as the original.

use crate::pid::Pid;
use crate::proc::{ProcState, ProcTable};

#[derive(Debug, Clone)]
pub struct ProcSnapshot {
    pub pid: Pid,
    pub name: String,
    pub state: ProcState,
    pub pstatic: i32,
    pub pdynamic: i32,
    pub niceness: i32,
    pub cur_queue: usize,
    pub rtime: u64,
    pub wtime: u64,
}

/// Takes a best-effort, lock-by-lock snapshot of every non-`Unused` slot
/// (spec §8's ambient-stack property: never panics, even mid-transition).
/// Because each slot's lock is acquired and released independently, the
/// result can show a process mid-transition — that's accepted, matching
/// the teacher's own `procdump`.
pub fn snapshot(table: &ProcTable) -> Vec<ProcSnapshot> {
    table
        .slots()
        .iter()
        .filter_map(|proc| {
            let inner = proc.inner.lock();
            if inner.state == ProcState::Unused {
                return None;
            }
            let snap = ProcSnapshot {
                pid: inner.pid,
                name: unsafe { proc.data().name_str().to_owned() },
                state: inner.state,
                pstatic: inner.pstatic,
                pdynamic: inner.pdynamic,
                niceness: inner.niceness,
                cur_queue: inner.cur_queue,
                rtime: inner.rtime,
                wtime: inner.wtime,
            };
            Some(snap)
        })
        .collect()
}


/// Prints the table to the console in the teacher's `procdump` layout.
pub fn procdump(table: &ProcTable) {
    crate::println!("PID\tSTATE\t\tNAME\tPSTAT\tPDYN\tNICE\tQ\tRTIME\tWTIME");
    for p in snapshot(table) {
        crate::println!(
            "{}\t{:?}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            p.pid,
            p.state,
            p.name,
            p.pstatic,
            p.pdynamic,
            p.niceness,
            p.cur_queue,
            p.rtime,
            p.wtime
        );
    }
}
