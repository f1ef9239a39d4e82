use std::error::Error;
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use crossbeam::channel::bounded;
use console_sink::{exception_trace, ConsoleSink, LogLevel, INTERNAL_TAG};
use env_snapshot::{AppContext, EnvironmentSnapshot};
use write_queue::{append_to_file, WriteJob, WriteQueue, WriterCommand, WriterWorker};

use crate::LogConfig;

/// Console logging plus synchronous and queued appends of diagnostic reports.
///
/// Nothing here panics or returns an error to the caller: console calls
/// return the platform code (or 0), `write_sync` returns whether the append
/// succeeded and `write_async` returns nothing.
pub struct CrashLog {
    console: Arc<ConsoleSink>,
    app_context: Option<AppContext>,
    queue: Arc<WriteQueue>,
    worker: Mutex<Option<WriterWorker>>,
}

impl CrashLog {
    pub fn new(config: LogConfig) -> Self {
        let console = Arc::new(
            ConsoleSink::new(config.console)
                .with_enabled(config.enabled)
                .with_tag_prefix(config.tag_prefix)
                .with_device(config.device_model, config.quirks),
        );
        let queue = Arc::new(WriteQueue::new(config.queue_capacity));

        let worker = match WriterWorker::spawn(Arc::clone(&queue), Arc::clone(&console)) {
            Ok(worker) => Some(worker),
            Err(err) => {
                // queued writes fall back to the caller's thread
                console.error_with(INTERNAL_TAG, "failed to start writer thread", &err);
                queue.close();
                None
            }
        };

        CrashLog {
            console,
            app_context: config.app_context,
            queue,
            worker: Mutex::new(worker),
        }
    }

    pub fn console(&self) -> &ConsoleSink {
        &self.console
    }

    pub fn app_context(&self) -> Option<&AppContext> {
        self.app_context.as_ref()
    }

    pub fn log(&self, level: LogLevel, tag: &str, message: &str) -> i32 {
        self.console.log(level, tag, message)
    }

    pub fn log_with(
        &self,
        level: LogLevel,
        tag: &str,
        message: &str,
        cause: Option<&(dyn Error + 'static)>,
    ) -> i32 {
        self.console.log_with(level, tag, message, cause)
    }

    pub fn verbose(&self, tag: &str, message: &str) -> i32 {
        self.console.verbose(tag, message)
    }

    pub fn debug(&self, tag: &str, message: &str) -> i32 {
        self.console.debug(tag, message)
    }

    pub fn info(&self, tag: &str, message: &str) -> i32 {
        self.console.info(tag, message)
    }

    pub fn warn(&self, tag: &str, message: &str) -> i32 {
        self.console.warn(tag, message)
    }

    pub fn error(&self, tag: &str, message: &str) -> i32 {
        self.console.error(tag, message)
    }

    pub fn error_with(&self, tag: &str, message: &str, cause: &(dyn Error + 'static)) -> i32 {
        self.console.error_with(tag, message, cause)
    }

    pub fn environment_snapshot(&self) -> EnvironmentSnapshot {
        EnvironmentSnapshot::capture(self.app_context.as_ref(), &self.console)
    }

    /// An environment snapshot followed by `trace`.
    pub fn crash_report(&self, trace: &str) -> String {
        format!("{}{}", self.environment_snapshot(), trace)
    }

    /// Appends `content` to `path` on the calling thread.
    ///
    /// An empty path or empty content is a no-op returning `false`. I/O
    /// failures are reported through the console and also return `false`.
    pub fn write_sync(&self, path: impl AsRef<Path>, content: &str) -> bool {
        match append_to_file(path.as_ref(), content) {
            Ok(()) => true,
            Err(err) if err.is_invalid_input() => false,
            Err(err) => {
                self.console.error_with(INTERNAL_TAG, "write_sync()", &err);
                false
            }
        }
    }

    /// Writes a crash report for `error` (environment snapshot, then the
    /// error's trace) on the calling thread.
    pub fn write_sync_error(&self, path: impl AsRef<Path>, error: &(dyn Error + 'static)) -> bool {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return false;
        }
        let report = self.crash_report(&exception_trace(Some(error)));
        self.write_sync(path, &report)
    }

    /// Queues `content` for the writer thread and returns once it is accepted.
    ///
    /// Blocks while the queue is full. Queued writes reach the file in
    /// submission order. After [`CrashLog::shutdown`] the write happens on the
    /// calling thread instead.
    pub fn write_async(&self, path: impl AsRef<Path>, content: impl Into<String>) {
        let path = path.as_ref();
        let content = content.into();
        if path.as_os_str().is_empty() || content.is_empty() {
            return;
        }

        let command = WriterCommand::Write(WriteJob::new(path, content));
        if let Err(WriterCommand::Write(job)) = self.queue.enqueue(command) {
            self.write_sync(job.target_path(), job.content());
        }
    }

    /// Blocks until every write queued before this call has been handled.
    /// Intended for tests.
    pub fn wait_idle(&self) {
        let (ack, done) = bounded(1);
        if self.queue.enqueue(WriterCommand::Barrier(ack)).is_ok() {
            let _ = done.recv();
        }
    }

    pub fn pending_writes(&self) -> usize {
        self.queue.len()
    }

    pub fn is_running(&self) -> bool {
        self.worker
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(WriterWorker::is_running)
    }

    /// Drains the writes already queued and stops the writer thread.
    /// Idempotent.
    pub fn shutdown(&self) {
        let worker = self.worker.lock().unwrap_or_else(PoisonError::into_inner).take();
        if let Some(mut worker) = worker {
            worker.shutdown();
        }
    }
}

impl Drop for CrashLog {
    fn drop(&mut self) {
        self.shutdown();
    }
}
