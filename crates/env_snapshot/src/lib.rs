mod context; pub use context::*;
mod properties; pub use properties::*;
mod snapshot; pub use snapshot::*;
pub mod error;
