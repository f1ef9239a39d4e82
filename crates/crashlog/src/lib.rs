mod config; pub use config::*;
mod facade; pub use facade::*;
mod global; pub use global::*;
mod panic_hook; pub use panic_hook::*;
mod logger_macro;
pub mod error;

pub use console_sink::error::ConsoleError;
pub use console_sink::{
    exception_trace, ConsoleSink, ConsoleTarget, DeviceQuirks, LogLevel, NoopConsole, StderrConsole,
    INTERNAL_TAG,
};
pub use env_snapshot::{AppContext, EnvironmentSnapshot, PropertyTable};
pub use write_queue::DEFAULT_CAPACITY;
