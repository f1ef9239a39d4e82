use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

use crossbeam_queue::ArrayQueue;

pub const DEFAULT_CAPACITY: usize = 100;

/// Fixed-capacity FIFO with blocking `enqueue`/`dequeue`.
///
/// `enqueue` waits while the queue is full and `dequeue` waits while it is
/// empty. Once [`BoundedQueue::close`] is called, new items are handed back to
/// the caller and `dequeue` returns the remaining items before yielding `None`.
pub struct BoundedQueue<T> {
    slots: ArrayQueue<T>,
    // guards every push/pop; the flag records whether the queue is closed
    gate: Mutex<bool>,
    not_full: Condvar,
    not_empty: Condvar,
}

impl<T> BoundedQueue<T> {
    /// A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        BoundedQueue {
            slots: ArrayQueue::new(capacity.max(1)),
            gate: Mutex::new(false),
            not_full: Condvar::new(),
            not_empty: Condvar::new(),
        }
    }

    /// Blocks until a slot is free, then appends `item` at the tail.
    ///
    /// Returns the item back if the queue is closed.
    pub fn enqueue(&self, item: T) -> Result<(), T> {
        let mut closed = self.lock();
        let mut item = item;
        loop {
            if *closed {
                return Err(item);
            }
            match self.slots.push(item) {
                Ok(()) => {
                    drop(closed);
                    self.not_empty.notify_one();
                    return Ok(());
                }
                Err(rejected) => {
                    item = rejected;
                    closed = self.not_full.wait(closed).unwrap_or_else(PoisonError::into_inner);
                }
            }
        }
    }

    /// Blocks until an item is present and removes the head.
    ///
    /// Returns `None` only once the queue is closed and fully drained.
    pub fn dequeue(&self) -> Option<T> {
        let mut closed = self.lock();
        loop {
            if let Some(item) = self.slots.pop() {
                drop(closed);
                self.not_full.notify_one();
                return Some(item);
            }
            if *closed {
                return None;
            }
            closed = self.not_empty.wait(closed).unwrap_or_else(PoisonError::into_inner);
        }
    }

    /// Stops accepting items and wakes every blocked caller. Idempotent.
    pub fn close(&self) {
        let mut closed = self.lock();
        *closed = true;
        drop(closed);
        self.not_full.notify_all();
        self.not_empty.notify_all();
    }

    pub fn is_closed(&self) -> bool {
        *self.lock()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    // The flag is the only state behind the mutex and nothing panics while
    // holding it, so a poisoned lock is still consistent.
    fn lock(&self) -> MutexGuard<'_, bool> {
        self.gate.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Default for BoundedQueue<T> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
