use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("console write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("console is not available")]
    Unavailable,
}
