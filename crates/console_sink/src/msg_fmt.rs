use std::io::IsTerminal;
use std::thread::ThreadId;

use chrono::{DateTime, Local};

use crate::LogLevel;

#[derive(Clone)]
pub struct LogMessage<'a> {
    pub(crate) level: LogLevel,
    pub(crate) thread_id: ThreadId,
    pub(crate) timestamp: DateTime<Local>,
    pub(crate) tag: &'a str,
    pub(crate) message: &'a str,
}

impl<'a> LogMessage<'a> {
    pub fn new(level: LogLevel, tag: &'a str, message: &'a str) -> Self {
        LogMessage {
            level,
            thread_id: std::thread::current().id(),
            timestamp: Local::now(),
            tag,
            message,
        }
    }
}

struct Colors;

impl Colors {
    fn paint(level: LogLevel, message_fmt: &str) -> String {
        let code = match level {
            LogLevel::Verbose => "1;35", // magenta
            LogLevel::Debug => "1;34",   // blue
            LogLevel::Info => "1;32",    // green
            LogLevel::Warn => "1;33",    // yellow
            LogLevel::Error => "1;31",   // red
        };
        format!("\x1b[{}m{}\x1b[0m", code, message_fmt)
    }
}

impl std::fmt::Display for LogMessage<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let message_fmt = format!(
            "{:?} - {} [{:7}] {}: {}",
            self.thread_id,
            self.timestamp.format("%d/%m/%Y %H:%M:%S.%f"),
            self.level,
            self.tag,
            self.message,
        );
        if std::io::stderr().is_terminal() {
            write!(f, "{}", Colors::paint(self.level, &message_fmt))
        } else {
            write!(f, "{}", message_fmt)
        }
    }
}
