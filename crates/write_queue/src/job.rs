use std::path::{Path, PathBuf};

use crossbeam::channel::Sender;

/// Content waiting to be appended to a file by the writer worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteJob {
    target_path: PathBuf,
    content: String,
}

impl WriteJob {
    pub fn new(target_path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        WriteJob {
            target_path: target_path.into(),
            content: content.into(),
        }
    }

    pub fn target_path(&self) -> &Path {
        &self.target_path
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

pub enum WriterCommand {
    Write(WriteJob),
    /// Acknowledged once every command queued ahead of it has been handled.
    Barrier(Sender<()>),
}
