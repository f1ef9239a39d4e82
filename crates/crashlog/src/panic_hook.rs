use std::backtrace::Backtrace;
use std::panic;
use std::path::PathBuf;
use std::thread;

use crate::CrashLog;

/// Appends a crash report to `report_path` whenever a thread panics, then
/// hands over to the previously installed hook.
///
/// The report is written synchronously so it lands on disk even when the
/// panic is about to take the process down.
pub fn install_panic_hook(crash_log: &'static CrashLog, report_path: impl Into<PathBuf>) {
    let report_path = report_path.into();
    let previous = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        let payload = info.payload();
        let message = payload
            .downcast_ref::<&str>()
            .map(|message| message.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "Box<dyn Any>".to_string());
        let location = info
            .location()
            .map(|location| {
                format!("{}:{}:{}", location.file(), location.line(), location.column())
            })
            .unwrap_or_default();
        let current = thread::current();
        let thread_name = current.name().unwrap_or("<unnamed>");

        let trace = format!(
            "thread '{}' panicked at {}:\n{}\nstack backtrace:\n{}\n",
            thread_name,
            location,
            message,
            Backtrace::force_capture()
        );
        crash_log.write_sync(&report_path, &crash_log.crash_report(&trace));

        previous(info);
    }));
}
