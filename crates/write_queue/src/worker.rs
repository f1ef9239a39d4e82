use std::io;
use std::sync::Arc;
use std::thread;

use console_sink::{ConsoleSink, INTERNAL_TAG};

use crate::{append_to_file, WriteJob, WriteQueue, WriterCommand};

pub const WORKER_THREAD_NAME: &str = "crashlog-writer";

/// The single background thread that drains a [`WriteQueue`] and appends each
/// job to its file.
///
/// A failed write is reported through the console and the loop moves on to
/// the next job. The thread only exits once the queue is closed
/// and empty.
pub struct WriterWorker {
    queue: Arc<WriteQueue>,
    console: Arc<ConsoleSink>,
    thread: Option<thread::JoinHandle<()>>,
}

impl WriterWorker {
    pub fn spawn(queue: Arc<WriteQueue>, console: Arc<ConsoleSink>) -> io::Result<WriterWorker> {
        let thread = {
            let queue = Arc::clone(&queue);
            let console = Arc::clone(&console);
            thread::Builder::new()
                .name(WORKER_THREAD_NAME.to_string())
                .spawn(move || drain(&queue, &console))?
        };

        Ok(WriterWorker {
            queue,
            console,
            thread: Some(thread),
        })
    }

    pub fn is_running(&self) -> bool {
        self.thread.as_ref().is_some_and(|thread| !thread.is_finished())
    }

    /// Closes the queue, waits for the jobs already accepted to be written and
    /// joins the thread. Calling it again does nothing.
    pub fn shutdown(&mut self) {
        self.queue.close();

        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                self.console.error(INTERNAL_TAG, "writer thread terminated abnormally");
            }
        }
    }
}

impl Drop for WriterWorker {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn drain(queue: &WriteQueue, console: &ConsoleSink) {
    while let Some(command) = queue.dequeue() {
        match command {
            WriterCommand::Write(job) => write_job(&job, console),
            WriterCommand::Barrier(ack) => {
                let _ = ack.send(());
            }
        }
    }
}

fn write_job(job: &WriteJob, console: &ConsoleSink) {
    match append_to_file(job.target_path(), job.content()) {
        Ok(()) => {}
        Err(err) if err.is_invalid_input() => {}
        Err(err) => {
            console.error_with(INTERNAL_TAG, "write_async()", &err);
        }
    }
}
