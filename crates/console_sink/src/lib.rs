mod level; pub use level::*;
mod msg_fmt; pub use msg_fmt::*;
mod targets; pub use targets::*;
mod quirks; pub use quirks::*;
mod sink; pub use sink::*;
mod trace; pub use trace::*;
pub mod error;

/// Tag under which the logging facility reports its own failures.
pub const INTERNAL_TAG: &str = "crashlog";
