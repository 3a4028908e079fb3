use bitflags::bitflags;

bitflags! {
    /// Bitmask passed to the `strace` syscall (spec §6); one bit per traced
    /// syscall. Stored on the process so a forked child inherits its
    /// parent's trace mask (spec §4.3).
    pub struct TraceMask: u32 {
        const FORK        = 1 << 0;
        const EXIT        = 1 << 1;
        const WAIT        = 1 << 2;
        const WAITX       = 1 << 3;
        const SLEEP       = 1 << 4;
        const KILL        = 1 << 5;
        const GETPID      = 1 << 6;
        const SBRK        = 1 << 7;
        const UPTIME      = 1 << 8;
        const STRACE      = 1 << 9;
        const SETPRIORITY = 1 << 10;
    }
}
