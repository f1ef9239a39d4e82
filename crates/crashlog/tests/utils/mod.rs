#![allow(dead_code)]

use std::fmt;
use std::sync::Arc;

use crossbeam::channel::{unbounded, Receiver, Sender};
use crashlog::ConsoleError;
use crashlog::{AppContext, ConsoleTarget, LogConfig, LogLevel, PropertyTable};

pub type Line = (LogLevel, String, String);

// Mock implementation of ConsoleTarget for testing
pub struct MockConsole {
    sender: Sender<Line>,
}

impl ConsoleTarget for MockConsole {
    fn println(&self, level: LogLevel, tag: &str, message: &str) -> Result<i32, ConsoleError> {
        let _ = self.sender.send((level, tag.to_string(), message.to_string()));
        Ok(message.len() as i32)
    }
}

pub fn mock_console() -> (Arc<MockConsole>, Receiver<Line>) {
    let (sender, receiver) = unbounded();
    (Arc::new(MockConsole { sender }), receiver)
}

pub fn test_context() -> AppContext {
    AppContext::new("com.example.crashy")
        .with_version("3.1.4")
        .with_properties(
            PropertyTable::new()
                .with_value("MODEL", "GEM-703L")
                .with_value("BRAND", "HUAWEI"),
        )
}

pub fn test_config() -> (LogConfig, Receiver<Line>) {
    let (console, lines) = mock_console();
    let config = LogConfig::new(test_context())
        .with_device_model("GEM-703L")
        .with_console(console);
    (config, lines)
}

#[derive(Debug)]
pub struct DiskFull;

impl fmt::Display for DiskFull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no space left on device")
    }
}

impl std::error::Error for DiskFull {}
