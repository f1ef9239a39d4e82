use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("no target path given")]
    MissingPath,

    #[error("nothing to write")]
    EmptyContent,

    #[error("failed to append to '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl WriteError {
    /// Invalid input is ignored by callers rather than reported.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::MissingPath | Self::EmptyContent)
    }
}
