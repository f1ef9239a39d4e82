use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InitError {
    #[error("crashlog is already initialised")]
    AlreadyInitialized,
}
