use std::fmt::{self, Debug, Display};
use std::iter::Copied;
use std::slice::Iter;

use crate::config::QueueConfig;
use crate::error::{Error, Result};

/// Capacity used by [`IntQueue::new`]
pub const DEFAULT_CAPACITY: usize = 16;
/// Grow factor used by [`IntQueue::new`] and [`IntQueue::with_capacity`]
pub const DEFAULT_GROW_FACTOR: f64 = 2.0;
/// Free tail slots left after a pop has compacted the buffer
const COMPACT_SLACK: usize = 10;
/// Largest number of `i32` slots a `Vec` can hold
const MAX_CAPACITY: usize = isize::MAX as usize / std::mem::size_of::<i32>();

/// A first-in-first-out queue of `i32` values.
///
/// Values live in a single buffer, in push order, between `front` and
/// `front + len`. There is no wraparound: `push` writes past the tail,
/// `pop` reads at the front and moves `front` forward.
///
/// ```text
/// ---------------------------------------------
/// | popped slack | live values | free tail    |
/// ---------------------------------------------
/// 0              front         front + len    capacity
/// ```
///
/// The buffer is rearranged in three ways:
/// * When `push` finds the tail full and the popped slack is at least half
///   of `len` (`front >= len / 2`, `front > 0`), the live values are
///   shifted down to index zero within the same buffer.
/// * When `push` finds the tail full and the slack is smaller than that,
///   the live values are moved into a new buffer of
///   `ceil(capacity * grow_factor)` slots (at least one more slot).
///   Shifting a large queue to reclaim a few slots would cost `O(len)`
///   for every handful of pushes.
/// * When a `pop` moves `front` past half of the capacity, the live values
///   are moved into a new buffer of exactly `len + 10` slots. Depending on
///   `len` this is smaller or larger than the previous capacity.
///
/// ```
/// use intqueue::IntQueue;
///
/// let mut queue = IntQueue::new();
/// queue.extend([1, 2, 3, 4, 5]);
/// queue.pop().unwrap();
/// queue.pop().unwrap();
/// queue.extend([6, 7, 8]);
/// assert_eq!(queue.render(), "3, 4, 5, 6, 7, 8");
/// ```
#[derive(Clone)]
pub struct IntQueue {
    buffer: Vec<i32>,
    front: usize,
    len: usize,
    grow_factor: f64,
    #[cfg(test)]
    moves: Moves,
}

/// Counts how often the live values were moved, and how many values that copied
#[cfg(test)]
#[derive(Debug, Default, Clone, Copy)]
struct Moves {
    shifts: usize,
    grows: usize,
    compactions: usize,
    copied: usize,
}

impl IntQueue {
    /// Create a queue with [`DEFAULT_CAPACITY`] slots and a grow factor of
    /// [`DEFAULT_GROW_FACTOR`].
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a queue with `cap` slots and a grow factor of
    /// [`DEFAULT_GROW_FACTOR`].
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            buffer: vec![0; cap],
            front: 0,
            len: 0,
            grow_factor: DEFAULT_GROW_FACTOR,
            #[cfg(test)]
            moves: Moves::default(),
        }
    }

    /// Create a queue with `cap` slots that grows by `grow_factor`.
    ///
    /// Returns `Error::InvalidArgument` unless `grow_factor` is a finite
    /// number greater than one. A grown capacity is capped at the largest
    /// buffer a `Vec<i32>` can describe; failing to allocate it aborts
    /// the process, like any other allocation failure.
    pub fn with_grow_factor(cap: usize, grow_factor: f64) -> Result<Self> {
        Self::from_config(&QueueConfig {
            initial_capacity: cap,
            grow_factor,
        })
    }

    /// Create a queue from a [`QueueConfig`]
    pub fn from_config(config: &QueueConfig) -> Result<Self> {
        config.validate()?;
        let mut queue = Self::with_capacity(config.initial_capacity);
        queue.grow_factor = config.grow_factor;
        Ok(queue)
    }

    /// Append a value at the tail of the queue
    pub fn push(&mut self, value: i32) {
        if self.front + self.len == self.capacity() {
            if self.front > 0 && self.front >= self.len / 2 {
                self.shift_to_start();
            } else {
                self.grow();
            }
        }

        self.buffer[self.front + self.len] = value;
        self.len += 1;
    }

    /// Remove and return the value at the head of the queue.
    ///
    /// Returns `Error::EmptyQueue` if there is nothing to pop.
    pub fn pop(&mut self) -> Result<i32> {
        if self.len == 0 {
            return Err(Error::EmptyQueue);
        }

        let value = self.buffer[self.front];
        self.front += 1;
        self.len -= 1;

        // Don't let the popped slack take up more than half of the buffer
        if self.front > self.capacity() / 2 {
            self.compact();
        }

        Ok(value)
    }

    /// The value at the head of the queue, without removing it
    pub fn peek(&self) -> Option<i32> {
        self.as_slice().first().copied()
    }

    /// Remove all values. The buffer keeps its capacity.
    pub fn clear(&mut self) {
        self.front = 0;
        self.len = 0;
    }

    /// `true` if there are no values in the queue
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of values in the queue
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of slots in the buffer
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// The factor the buffer grows by once full
    pub fn grow_factor(&self) -> f64 {
        self.grow_factor
    }

    /// The values in the queue, head first
    pub fn as_slice(&self) -> &[i32] {
        &self.buffer[self.front..self.front + self.len]
    }

    /// Iterate over the values in the queue, head first
    pub fn iter(&self) -> Copied<Iter<'_, i32>> {
        self.as_slice().iter().copied()
    }

    /// Render the values head first, separated by `", "`.
    /// An empty queue renders as an empty string.
    pub fn render(&self) -> String {
        self.to_string()
    }

    // Move the live values down to index zero, keeping the same buffer
    fn shift_to_start(&mut self) {
        let end = self.front + self.len;
        self.buffer.copy_within(self.front..end, 0);
        #[cfg(test)]
        {
            self.moves.shifts += 1;
            self.moves.copied += self.len;
        }
        log::trace!("shifted {} values down from offset {}", self.len, self.front);
        self.front = 0;
    }

    fn grow(&mut self) {
        let cap = self.capacity();
        let new_cap = grown_capacity(cap, self.grow_factor);
        self.move_to_new_buffer(new_cap);
        #[cfg(test)]
        {
            self.moves.grows += 1;
        }
        log::debug!("grew buffer from {cap} to {new_cap}");
    }

    fn compact(&mut self) {
        let cap = self.capacity();
        self.move_to_new_buffer(self.len + COMPACT_SLACK);
        #[cfg(test)]
        {
            self.moves.compactions += 1;
        }
        log::debug!("compacted buffer from {cap} to {}", self.capacity());
    }

    // Copy the live values to the start of a new buffer of `new_cap` slots
    fn move_to_new_buffer(&mut self, new_cap: usize) {
        let mut buffer = vec![0; new_cap];
        buffer[..self.len].copy_from_slice(self.as_slice());
        self.buffer = buffer;
        self.front = 0;
        #[cfg(test)]
        {
            self.moves.copied += self.len;
        }
    }
}

// `ceil(cap * grow_factor)`, at least one more slot and at most `MAX_CAPACITY`
fn grown_capacity(cap: usize, grow_factor: f64) -> usize {
    let scaled = (cap as f64 * grow_factor).ceil();
    let scaled = if scaled >= MAX_CAPACITY as f64 {
        MAX_CAPACITY
    } else {
        scaled as usize
    };
    scaled.max(cap + 1).min(MAX_CAPACITY)
}

impl Default for IntQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for IntQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut values = self.iter();
        if let Some(first) = values.next() {
            write!(f, "{first}")?;
            for value in values {
                write!(f, ", {value}")?;
            }
        }
        Ok(())
    }
}

impl Debug for IntQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntQueue")
            .field("values", &self.as_slice())
            .field("front", &self.front)
            .field("capacity", &self.capacity())
            .field("grow_factor", &self.grow_factor)
            .finish()
    }
}

impl PartialEq for IntQueue {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for IntQueue {}

impl Extend<i32> for IntQueue {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl FromIterator<i32> for IntQueue {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<'a> IntoIterator for &'a IntQueue {
    type Item = i32;
    type IntoIter = Copied<Iter<'a, i32>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
