use std::error::Error;
use std::path::Path;
use std::sync::OnceLock;

use console_sink::LogLevel;
use env_snapshot::AppContext;

use crate::{error::InitError, CrashLog, LogConfig};

static CRASH_LOG: OnceLock<CrashLog> = OnceLock::new();

pub fn init(app_context: AppContext) -> Result<(), InitError> {
    init_config(LogConfig::new(app_context))
}

pub fn init_with_prefix(app_context: AppContext, tag_prefix: &str) -> Result<(), InitError> {
    init_config(LogConfig::new(app_context).with_tag_prefix(tag_prefix))
}

pub fn init_with(
    app_context: AppContext,
    tag_prefix: &str,
    enabled: bool,
) -> Result<(), InitError> {
    init_config(
        LogConfig::new(app_context)
            .with_tag_prefix(tag_prefix)
            .with_enabled(enabled),
    )
}

/// Installs the process-wide [`CrashLog`]. Only the first call, or the first
/// use of [`global`], decides the configuration.
pub fn init_config(config: LogConfig) -> Result<(), InitError> {
    let mut installed = false;
    CRASH_LOG.get_or_init(|| {
        installed = true;
        CrashLog::new(config)
    });

    if installed {
        Ok(())
    } else {
        Err(InitError::AlreadyInitialized)
    }
}

pub fn is_initialized() -> bool {
    CRASH_LOG.get().is_some()
}

/// The process-wide instance. Used before any `init*` call, it starts with the
/// default configuration and no app context.
pub fn global() -> &'static CrashLog {
    CRASH_LOG.get_or_init(|| CrashLog::new(LogConfig::default()))
}

pub fn log(level: LogLevel, tag: &str, message: &str) -> i32 {
    global().log(level, tag, message)
}

pub fn verbose(tag: &str, message: &str) -> i32 {
    global().verbose(tag, message)
}

pub fn debug(tag: &str, message: &str) -> i32 {
    global().debug(tag, message)
}

pub fn info(tag: &str, message: &str) -> i32 {
    global().info(tag, message)
}

pub fn warn(tag: &str, message: &str) -> i32 {
    global().warn(tag, message)
}

pub fn error(tag: &str, message: &str) -> i32 {
    global().error(tag, message)
}

pub fn error_with(tag: &str, message: &str, cause: &(dyn Error + 'static)) -> i32 {
    global().error_with(tag, message, cause)
}

pub fn write_sync(path: impl AsRef<Path>, content: &str) -> bool {
    global().write_sync(path, content)
}

pub fn write_sync_error(path: impl AsRef<Path>, error: &(dyn Error + 'static)) -> bool {
    global().write_sync_error(path, error)
}

pub fn write_async(path: impl AsRef<Path>, content: impl Into<String>) {
    global().write_async(path, content)
}
