mod job; pub use job::*;
mod queue; pub use queue::*;
mod append; pub use append::*;
mod worker; pub use worker::*;
pub mod error;

pub type WriteQueue = BoundedQueue<WriterCommand>;
