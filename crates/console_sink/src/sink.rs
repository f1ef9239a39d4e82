use std::error::Error;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::{exception_trace, ConsoleTarget, DeviceQuirks, LogLevel};

/// Code returned when the sink is disabled or the console fails.
pub const DEFAULT_CODE: i32 = 0;

/// Level-tagged console logging gated by a single enabled flag.
///
/// Every tag is prefixed with the configured tag prefix. Failures of the
/// underlying [`ConsoleTarget`], including panics, are swallowed and turned
/// into [`DEFAULT_CODE`].
pub struct ConsoleSink {
    enabled: bool,
    tag_prefix: String,
    device_model: String,
    quirks: DeviceQuirks,
    target: Arc<dyn ConsoleTarget>,
}

impl ConsoleSink {
    pub fn new(target: Arc<dyn ConsoleTarget>) -> Self {
        ConsoleSink {
            enabled: true,
            tag_prefix: String::new(),
            device_model: String::new(),
            quirks: DeviceQuirks::new(),
            target,
        }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_tag_prefix(mut self, tag_prefix: impl Into<String>) -> Self {
        self.tag_prefix = tag_prefix.into();
        self
    }

    pub fn with_device(mut self, device_model: impl Into<String>, quirks: DeviceQuirks) -> Self {
        self.device_model = device_model.into();
        self.quirks = quirks;
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn tag_prefix(&self) -> &str {
        &self.tag_prefix
    }

    pub fn device_model(&self) -> &str {
        &self.device_model
    }

    pub fn log(&self, level: LogLevel, tag: &str, message: &str) -> i32 {
        self.log_with(level, tag, message, None)
    }

    pub fn log_with(
        &self,
        level: LogLevel,
        tag: &str,
        message: &str,
        cause: Option<&(dyn Error + 'static)>,
    ) -> i32 {
        if !self.enabled {
            return DEFAULT_CODE;
        }

        let level = self.quirks.resolve(&self.device_model, level);
        let tag = format!("{}{}", self.tag_prefix, tag);
        let message = match cause {
            Some(_) => format!("{}\n{}", message, exception_trace(cause)),
            None => message.to_string(),
        };

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            self.target.println(level, &tag, &message)
        }));
        match result {
            Ok(Ok(code)) => code,
            // nowhere left to report a broken console
            Ok(Err(_)) | Err(_) => DEFAULT_CODE,
        }
    }

    pub fn verbose(&self, tag: &str, message: &str) -> i32 {
        self.log(LogLevel::Verbose, tag, message)
    }

    pub fn debug(&self, tag: &str, message: &str) -> i32 {
        self.log(LogLevel::Debug, tag, message)
    }

    pub fn info(&self, tag: &str, message: &str) -> i32 {
        self.log(LogLevel::Info, tag, message)
    }

    pub fn warn(&self, tag: &str, message: &str) -> i32 {
        self.log(LogLevel::Warn, tag, message)
    }

    pub fn error(&self, tag: &str, message: &str) -> i32 {
        self.log(LogLevel::Error, tag, message)
    }

    pub fn error_with(&self, tag: &str, message: &str, cause: &(dyn Error + 'static)) -> i32 {
        self.log_with(LogLevel::Error, tag, message, Some(cause))
    }
}
