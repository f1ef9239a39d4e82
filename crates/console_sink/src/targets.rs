use std::io::Write;

use crate::{error::ConsoleError, LogLevel, LogMessage};

/// The platform console a [`crate::ConsoleSink`] forwards to.
///
/// The returned code is whatever the platform reports; the sink passes it back
/// to the caller without interpreting it.
pub trait ConsoleTarget: Send + Sync {
    fn println(&self, level: LogLevel, tag: &str, message: &str) -> Result<i32, ConsoleError>;
}

pub struct NoopConsole;

impl ConsoleTarget for NoopConsole {
    fn println(&self, _level: LogLevel, _tag: &str, _message: &str) -> Result<i32, ConsoleError> {
        Ok(0)
    }
}

/// Writes one formatted line per call to stderr and returns the number of
/// bytes written.
pub struct StderrConsole;

impl ConsoleTarget for StderrConsole {
    fn println(&self, level: LogLevel, tag: &str, message: &str) -> Result<i32, ConsoleError> {
        let line = format!("{}\n", LogMessage::new(level, tag, message));
        let mut stderr = std::io::stderr().lock();
        stderr.write_all(line.as_bytes())?;
        Ok(i32::try_from(line.len()).unwrap_or(i32::MAX))
    }
}
