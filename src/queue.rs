//! Fixed-capacity circular queue over caller-provided storage.
//!
//! The queue never overwrites: once full, writes are rejected until a read
//! frees a slot. Head and tail alone cannot tell "full" from "empty" when
//! they meet, so both conditions are tracked as flags.

/// Errors that can occur during queue operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum QueueError {
    /// No free slot to write into.
    Full,
    /// No element to read.
    Empty,
}

impl core::fmt::Display for QueueError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            QueueError::Full => write!(f, "queue is full"),
            QueueError::Empty => write!(f, "queue is empty"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for QueueError {}

/// A FIFO ring buffer of `T` over borrowed storage.
///
/// Capacity is the length of the storage slice. Safe for one producer and
/// one consumer that do not interleave their own calls; the `&mut self`
/// receivers make any other sharing the caller's business.
///
/// # Type Parameters
/// * `'a` - Lifetime of the storage
/// * `T` - Element type, copied in and out of the slots
#[derive(Debug)]
pub struct CircularQueue<'a, T: Copy> {
    storage: &'a mut [T],
    head: usize,
    tail: usize,
    empty: bool,
    full: bool,
}

impl<'a, T: Copy> CircularQueue<'a, T> {
    /// Creates an empty queue over `storage`.
    ///
    /// Existing contents of `storage` are left in place and are not readable
    /// until overwritten by writes.
    pub fn new(storage: &'a mut [T]) -> Self {
        Self {
            storage,
            head: 0,
            tail: 0,
            empty: true,
            full: false,
        }
    }

    /// Writes one element at the head.
    ///
    /// # Errors
    /// * `Full` - No slot is free; the queue is left unchanged
    pub fn write(&mut self, item: T) -> Result<(), QueueError> {
        let capacity = self.storage.len();
        if self.full || capacity == 0 {
            return Err(QueueError::Full);
        }

        self.storage[self.head] = item;
        self.empty = false;
        self.head = (self.head + 1) % capacity;

        // Head can only catch up with tail by filling the last free slot
        if self.head == self.tail {
            self.full = true;
        }

        Ok(())
    }

    /// Reads one element from the tail.
    ///
    /// # Errors
    /// * `Empty` - Nothing to read; the queue is left unchanged
    pub fn read(&mut self) -> Result<T, QueueError> {
        if self.empty {
            return Err(QueueError::Empty);
        }

        let item = self.storage[self.tail];
        self.full = false;
        self.tail = (self.tail + 1) % self.storage.len();

        if self.tail == self.head {
            self.empty = true;
        }

        Ok(item)
    }

    /// Returns the element the next [`read`](Self::read) would yield.
    pub fn peek(&self) -> Option<&T> {
        if self.empty {
            None
        } else {
            self.storage.get(self.tail)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.empty
    }

    pub fn is_full(&self) -> bool {
        self.full
    }

    /// Number of slots.
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Number of elements waiting to be read.
    pub fn len(&self) -> usize {
        if self.full {
            self.storage.len()
        } else if self.head >= self.tail {
            self.head - self.tail
        } else {
            self.storage.len() - self.tail + self.head
        }
    }

    /// Resets the queue to empty.
    ///
    /// Stored elements are not erased; they stay in the storage until later
    /// writes overwrite them.
    pub fn flush(&mut self) {
        self.head = 0;
        self.tail = 0;
        self.empty = true;
        self.full = false;
    }

    /// Consumes the queue and returns the storage.
    pub fn release(self) -> &'a mut [T] {
        self.storage
    }
}
