use std::fmt;
use std::sync::Arc;

use console_sink::{ConsoleTarget, DeviceQuirks, StderrConsole};
use env_snapshot::AppContext;
use write_queue::DEFAULT_CAPACITY;

pub const DEFAULT_TAG_PREFIX: &str = "Logger_";

/// Settings for a [`crate::CrashLog`]. Built once at startup and read-only
/// afterwards.
#[derive(Clone)]
pub struct LogConfig {
    pub enabled: bool,
    pub tag_prefix: String,
    pub app_context: Option<AppContext>,
    pub device_model: String,
    pub quirks: DeviceQuirks,
    pub queue_capacity: usize,
    pub console: Arc<dyn ConsoleTarget>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            tag_prefix: DEFAULT_TAG_PREFIX.to_string(),
            app_context: None,
            device_model: String::new(),
            quirks: DeviceQuirks::stock(),
            queue_capacity: DEFAULT_CAPACITY,
            console: Arc::new(StderrConsole),
        }
    }
}

impl LogConfig {
    pub fn new(app_context: AppContext) -> Self {
        Self::default().with_app_context(app_context)
    }

    pub fn with_app_context(mut self, app_context: AppContext) -> Self {
        self.app_context = Some(app_context);
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_tag_prefix(mut self, tag_prefix: impl Into<String>) -> Self {
        self.tag_prefix = tag_prefix.into();
        self
    }

    pub fn with_device_model(mut self, device_model: impl Into<String>) -> Self {
        self.device_model = device_model.into();
        self
    }

    pub fn with_quirks(mut self, quirks: DeviceQuirks) -> Self {
        self.quirks = quirks;
        self
    }

    pub fn with_queue_capacity(mut self, queue_capacity: usize) -> Self {
        self.queue_capacity = queue_capacity;
        self
    }

    pub fn with_console(mut self, console: Arc<dyn ConsoleTarget>) -> Self {
        self.console = console;
        self
    }
}

impl fmt::Debug for LogConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogConfig")
            .field("enabled", &self.enabled)
            .field("tag_prefix", &self.tag_prefix)
            .field("app_context", &self.app_context)
            .field("device_model", &self.device_model)
            .field("quirks", &self.quirks)
            .field("queue_capacity", &self.queue_capacity)
            .finish_non_exhaustive()
    }
}
