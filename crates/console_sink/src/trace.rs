use std::backtrace::{Backtrace, BacktraceStatus};
use std::error::Error;
use std::fmt::Write;

/// Renders an error, its `source()` chain and the current backtrace as text.
///
/// The backtrace follows `RUST_BACKTRACE`/`RUST_LIB_BACKTRACE` and is left out
/// when capturing is disabled.
///
/// `None` renders to an empty string so call sites can pass an optional cause
/// straight through.
pub fn exception_trace(error: Option<&(dyn Error + 'static)>) -> String {
    let Some(error) = error else {
        return String::new();
    };

    let mut trace = String::new();
    let _ = writeln!(trace, "{}", error);

    let mut source = error.source();
    while let Some(cause) = source {
        let _ = writeln!(trace, "Caused by: {}", cause);
        source = cause.source();
    }

    let backtrace = Backtrace::capture();
    if backtrace.status() == BacktraceStatus::Captured {
        let _ = writeln!(trace, "stack backtrace:\n{}", backtrace);
    }
    trace
}
