//! Locked console output, retargeted from the teacher's UART `console`
//! collaborator to stdout.
//!
//! Grounded on `examples/Yuleo1-octox/src/kernel/printf.rs`: a single
//! lock-guarded `Writer` and `print!`/`println!` macros over it, so
//! concurrent diagnostics from multiple scheduler threads don't interleave
//! mid-line.

use crate::sync::Lock;
use std::fmt;
use std::io::Write as _;

struct Writer;

impl fmt::Write for Writer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        std::io::stdout()
            .write_all(s.as_bytes())
            .map_err(|_| fmt::Error)
    }
}

static PR: Lock<Writer> = Lock::new("pr", Writer);

#[doc(hidden)]
pub fn _print(args: fmt::Arguments<'_>) {
    use fmt::Write;
    PR.lock().write_fmt(args).expect("_print: error");
}

#[macro_export]
macro_rules! print {
    ($($arg:tt)*) => {
        $crate::printf::_print(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! println {
    () => {
        $crate::print!("\n")
    };
    ($fmt:expr) => {
        $crate::print!(concat!($fmt, "\n"))
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::print!(concat!($fmt, "\n"), $($arg)*)
    };
}
