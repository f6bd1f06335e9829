//! Bounded circular queue.
//!
//! A fixed-capacity FIFO ring buffer. Enqueueing into a full queue is
//! rejected rather than growing the buffer — callers that need overflow
//! handling branch on the returned value.

/// Fixed-capacity FIFO queue backed by a ring buffer.
///
/// # Example
///
/// ```
/// use roadplan::queue::BoundedQueue;
///
/// let mut queue = BoundedQueue::new(2);
/// assert!(queue.enqueue(10).is_ok());
/// assert!(queue.enqueue(20).is_ok());
/// assert!(queue.enqueue(30).is_err()); // Full
/// assert_eq!(queue.dequeue(), Some(10));
/// ```
#[derive(Debug, Clone)]
pub struct BoundedQueue<T> {
    buffer: Vec<Option<T>>,
    head: usize,
    len: usize,
}

impl<T> BoundedQueue<T> {
    /// Creates a queue holding at most `capacity` elements.
    pub fn new(capacity: usize) -> Self {
        let mut buffer = Vec::with_capacity(capacity);
        buffer.resize_with(capacity, || None);
        Self {
            buffer,
            head: 0,
            len: 0,
        }
    }

    /// Adds an element at the rear.
    ///
    /// Returns the element back as `Err` when the queue is full.
    pub fn enqueue(&mut self, value: T) -> Result<(), T> {
        if self.is_full() {
            return Err(value);
        }
        let tail = (self.head + self.len) % self.buffer.len();
        self.buffer[tail] = Some(value);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the front element, `None` when empty.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let value = self.buffer[self.head].take();
        self.head = (self.head + 1) % self.buffer.len();
        self.len -= 1;
        value
    }

    /// A reference to the front element without removing it.
    pub fn front(&self) -> Option<&T> {
        if self.len == 0 {
            return None;
        }
        self.buffer[self.head].as_ref()
    }

    /// Number of queued elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the queue holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the queue is at capacity.
    pub fn is_full(&self) -> bool {
        self.len == self.buffer.len()
    }

    /// Maximum number of elements.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        for slot in &mut self.buffer {
            *slot = None;
        }
        self.head = 0;
        self.len = 0;
    }
}
