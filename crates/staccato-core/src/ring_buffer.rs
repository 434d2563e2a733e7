//! Fixed-capacity FIFO ring buffer with a compile-time overflow policy.
//!
//! [`RingBuffer`] stores up to `N` elements in an inline array. Nothing is
//! allocated after construction, and every operation is O(1), so it is safe to
//! use from an audio callback for delay lines, event queues or block staging.
//!
//! # Overflow Policies
//!
//! What happens when [`push`](RingBuffer::push) meets a full buffer is chosen
//! by a type parameter, so the decision is resolved at monomorphization time
//! rather than on every push:
//!
//! | Policy | On full | Typical use |
//! |--------|---------|-------------|
//! | [`Overwrite`] (default) | Evict the oldest element, then insert | Delay lines, history windows |
//! | [`Discard`] | Drop the incoming element | Lossy event queues |
//!
//! # Example
//!
//! ```rust
//! use staccato_core::{Discard, RingBuffer};
//!
//! let mut history: RingBuffer<f32, 4> = RingBuffer::new();
//! for x in [1.0, 2.0, 2.5, 3.5, 4.5] {
//!     history.push(x);
//! }
//! assert_eq!(*history.front(), 2.0);
//!
//! let mut events: RingBuffer<u8, 2, Discard> = RingBuffer::new();
//! events.push(1);
//! events.push(2);
//! events.push(3); // dropped
//! assert_eq!(events.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
//! ```

use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;

mod sealed {
    pub trait Sealed {}
}

/// Behaviour selected by an [`OverflowPolicy`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverflowKind {
    /// Evict the oldest element to make room.
    Overwrite,
    /// Keep the buffer unchanged and drop the new element.
    Discard,
}

/// Compile-time overflow policy for [`RingBuffer`].
///
/// Sealed: the only implementations are [`Overwrite`] and [`Discard`].
pub trait OverflowPolicy: sealed::Sealed {
    /// Behaviour when pushing onto a full buffer.
    const KIND: OverflowKind;
}

/// Pushing onto a full buffer evicts the oldest element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Overwrite;

/// Pushing onto a full buffer drops the new element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Discard;

impl sealed::Sealed for Overwrite {}
impl sealed::Sealed for Discard {}

impl OverflowPolicy for Overwrite {
    const KIND: OverflowKind = OverflowKind::Overwrite;
}

impl OverflowPolicy for Discard {
    const KIND: OverflowKind = OverflowKind::Discard;
}

/// Fixed-capacity FIFO with `N` inline slots.
///
/// `head` indexes the oldest element and `tail` the newest. Logical index `i`
/// (0 = oldest) lives in physical slot `(head + i) % N`.
///
/// Storage is filled with `T::default()` at construction, so even a
/// precondition violation (reading an empty buffer in a release build) only
/// ever observes initialised memory.
///
/// # Panics
///
/// Construction panics if `N == 0`.
pub struct RingBuffer<T, const N: usize, P: OverflowPolicy = Overwrite> {
    buffer: [T; N],
    head: usize,
    tail: usize,
    len: usize,
    _policy: PhantomData<P>,
}

impl<T: Copy + Default, const N: usize, P: OverflowPolicy> RingBuffer<T, N, P> {
    /// Creates an empty ring buffer with zeroed storage.
    pub fn new() -> Self {
        assert!(N > 0, "RingBuffer capacity must be > 0");
        Self {
            buffer: [T::default(); N],
            head: 0,
            tail: N - 1,
            len: 0,
            _policy: PhantomData,
        }
    }
}

impl<T, const N: usize, P: OverflowPolicy> RingBuffer<T, N, P> {
    /// Appends an element at the back.
    ///
    /// On a full buffer the outcome depends on `P`: [`Overwrite`] evicts the
    /// oldest element first, [`Discard`] drops `item` and leaves the buffer
    /// untouched.
    #[inline]
    pub fn push(&mut self, item: T) {
        if self.len == N {
            match P::KIND {
                OverflowKind::Overwrite => self.advance_head(),
                OverflowKind::Discard => return,
            }
        }
        self.tail = Self::wrap(self.tail + 1);
        self.len += 1;
        self.buffer[self.tail] = item;
    }

    /// Returns the oldest element.
    ///
    /// Calling this on an empty buffer is a caller error: debug builds
    /// panic, release builds return whatever the head slot holds (a default
    /// value or a previously popped element).
    #[inline]
    pub fn front(&self) -> &T {
        debug_assert!(self.len > 0, "front() on empty RingBuffer");
        &self.buffer[self.head]
    }

    /// Returns the newest element.
    ///
    /// Same empty-buffer contract as [`front`](Self::front).
    #[inline]
    pub fn back(&self) -> &T {
        debug_assert!(self.len > 0, "back() on empty RingBuffer");
        &self.buffer[self.tail]
    }

    /// Returns the element at logical position `index` (0 = oldest), or
    /// `None` past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len {
            Some(&self.buffer[Self::wrap(self.head + index)])
        } else {
            None
        }
    }

    /// Resets to empty in O(1). Storage is left in place.
    #[inline]
    pub fn clear(&mut self) {
        self.head = 0;
        self.tail = N - 1;
        self.len = 0;
    }

    /// Number of stored elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Capacity, always `N`.
    #[inline]
    pub const fn max_size(&self) -> usize {
        N
    }

    /// Returns true if the buffer holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if the next push will overflow.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == N
    }

    /// Cursor at the oldest element.
    pub fn begin(&self) -> Cursor<'_, T, N, P> {
        Cursor {
            buffer: self,
            position: 0,
        }
    }

    /// Cursor one past the newest element.
    pub fn end(&self) -> Cursor<'_, T, N, P> {
        Cursor {
            buffer: self,
            position: self.len,
        }
    }

    /// Iterates from oldest to newest.
    pub fn iter(&self) -> Iter<'_, T, N, P> {
        Iter {
            buffer: self,
            front: 0,
            back: self.len,
        }
    }

    #[inline]
    fn advance_head(&mut self) {
        self.head = Self::wrap(self.head + 1);
        self.len -= 1;
    }

    /// Reduces an index in `0..2N` to a physical slot.
    #[inline]
    fn wrap(index: usize) -> usize {
        if index >= N { index - N } else { index }
    }
}

impl<T: Copy, const N: usize, P: OverflowPolicy> RingBuffer<T, N, P> {
    /// Removes and returns the oldest element.
    ///
    /// On an empty buffer this is a no-op returning `None`.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let item = self.buffer[self.head];
        self.advance_head();
        Some(item)
    }
}

impl<T: Copy + Default, const N: usize, P: OverflowPolicy> Default for RingBuffer<T, N, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, const N: usize, P: OverflowPolicy> Clone for RingBuffer<T, N, P> {
    fn clone(&self) -> Self {
        Self {
            buffer: self.buffer.clone(),
            head: self.head,
            tail: self.tail,
            len: self.len,
            _policy: PhantomData,
        }
    }
}

impl<T: fmt::Debug, const N: usize, P: OverflowPolicy> fmt::Debug for RingBuffer<T, N, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingBuffer")
            .field("capacity", &N)
            .field("policy", &P::KIND)
            .field("items", &DebugItems(self))
            .finish()
    }
}

struct DebugItems<'a, T, const N: usize, P: OverflowPolicy>(&'a RingBuffer<T, N, P>);

impl<T: fmt::Debug, const N: usize, P: OverflowPolicy> fmt::Debug for DebugItems<'_, T, N, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<'a, T, const N: usize, P: OverflowPolicy> IntoIterator for &'a RingBuffer<T, N, P> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, N, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Bidirectional position within a [`RingBuffer`].
///
/// Positions are logical (0 = oldest), never physical slots. Two cursors are
/// equal only if they point into the same buffer instance at the same
/// position, so cursors from different buffers never compare equal even when
/// their contents match.
pub struct Cursor<'a, T, const N: usize, P: OverflowPolicy> {
    buffer: &'a RingBuffer<T, N, P>,
    position: usize,
}

impl<'a, T, const N: usize, P: OverflowPolicy> Cursor<'a, T, N, P> {
    /// Element under the cursor, or `None` at [`end`](RingBuffer::end).
    #[inline]
    pub fn get(&self) -> Option<&'a T> {
        self.buffer.get(self.position)
    }

    /// Logical position (0 = oldest).
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Moves one element towards the back.
    #[inline]
    pub fn move_next(&mut self) {
        self.position += 1;
    }

    /// Moves one element towards the front. Saturates at the first element.
    #[inline]
    pub fn move_prev(&mut self) {
        self.position = self.position.saturating_sub(1);
    }
}

impl<T, const N: usize, P: OverflowPolicy> Clone for Cursor<'_, T, N, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const N: usize, P: OverflowPolicy> Copy for Cursor<'_, T, N, P> {}

impl<T, const N: usize, P: OverflowPolicy> PartialEq for Cursor<'_, T, N, P> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.buffer, other.buffer) && self.position == other.position
    }
}

impl<T, const N: usize, P: OverflowPolicy> Eq for Cursor<'_, T, N, P> {}

impl<T, const N: usize, P: OverflowPolicy> fmt::Debug for Cursor<'_, T, N, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}

/// Double-ended iterator over a [`RingBuffer`], oldest to newest.
pub struct Iter<'a, T, const N: usize, P: OverflowPolicy> {
    buffer: &'a RingBuffer<T, N, P>,
    front: usize,
    back: usize,
}

impl<'a, T, const N: usize, P: OverflowPolicy> Iterator for Iter<'a, T, N, P> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let item = self.buffer.get(self.front);
        self.front += 1;
        item
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T, const N: usize, P: OverflowPolicy> DoubleEndedIterator for Iter<'_, T, N, P> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        self.buffer.get(self.back)
    }
}

impl<T, const N: usize, P: OverflowPolicy> ExactSizeIterator for Iter<'_, T, N, P> {}

impl<T, const N: usize, P: OverflowPolicy> FusedIterator for Iter<'_, T, N, P> {}

impl<T, const N: usize, P: OverflowPolicy> Clone for Iter<'_, T, N, P> {
    fn clone(&self) -> Self {
        Self {
            buffer: self.buffer,
            front: self.front,
            back: self.back,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_front_pop() {
        let mut buffer: RingBuffer<i32, 4> = RingBuffer::new();
        buffer.push(1);
        assert_eq!(*buffer.front(), 1);
        buffer.push(2);
        assert_eq!(*buffer.front(), 1);
        assert_eq!(*buffer.back(), 2);

        assert_eq!(buffer.pop(), Some(1));
        assert_eq!(*buffer.front(), 2);
        assert_eq!(buffer.pop(), Some(2));
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_len_and_capacity() {
        let mut buffer: RingBuffer<i32, 4> = RingBuffer::new();
        assert_eq!(buffer.max_size(), 4);
        buffer.push(1);
        buffer.push(2);
        assert_eq!(buffer.len(), 2);
        buffer.push(45);
        assert_eq!(buffer.len(), 3);
        assert!(!buffer.is_full());
        buffer.push(46);
        assert!(buffer.is_full());
    }

    #[test]
    fn test_clear() {
        let mut buffer: RingBuffer<i32, 4> = RingBuffer::new();
        buffer.push(1);
        buffer.push(2);
        assert!(!buffer.is_empty());
        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.len(), 0);

        // Usable again after clearing
        buffer.push(7);
        assert_eq!(*buffer.front(), 7);
        assert_eq!(*buffer.back(), 7);
    }

    #[test]
    fn test_overwrite_wrapping() {
        let mut buffer: RingBuffer<f32, 4> = RingBuffer::new();
        buffer.push(1.0);
        buffer.push(2.0);
        buffer.push(2.5);
        buffer.pop();
        buffer.pop();
        buffer.push(3.5);
        assert_eq!(buffer.len(), 2);

        buffer.push(3.6);
        buffer.push(3.9);
        buffer.pop();
        buffer.pop();
        assert_eq!(*buffer.front(), 3.6);

        buffer.pop();
        buffer.clear();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_overwrite_evicts_oldest() {
        let mut buffer: RingBuffer<f32, 4> = RingBuffer::new();
        for x in [1.0, 2.0, 2.5, 3.5, 4.5] {
            buffer.push(x);
        }
        assert_eq!(*buffer.front(), 2.0);
        assert_eq!(*buffer.back(), 4.5);
        assert_eq!(buffer.len(), 4);
    }

    #[test]
    fn test_discard_wrapping() {
        let mut buffer: RingBuffer<f64, 4, Discard> = RingBuffer::new();
        buffer.push(1.0);
        buffer.push(2.0);
        buffer.push(2.5);
        buffer.pop();
        buffer.pop();
        buffer.push(3.5);
        assert_eq!(buffer.len(), 2);
        buffer.push(3.6);
        buffer.push(3.9);
        buffer.pop();
        buffer.pop();
        assert_eq!(*buffer.front(), 3.6);
        buffer.pop();
        assert_eq!(buffer.len(), 1);
        buffer.clear();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_discard_drops_incoming() {
        let mut buffer: RingBuffer<f64, 4, Discard> = RingBuffer::new();
        for x in [1.0, 2.0, 2.5, 3.5, 4.5] {
            buffer.push(x);
        }
        assert_eq!(*buffer.front(), 1.0);
        assert_eq!(*buffer.back(), 3.5);
        assert_eq!(buffer.len(), 4);
        buffer.pop();
        assert_eq!(buffer.len(), 3);
    }

    #[test]
    fn test_pop_empty_is_noop() {
        let mut buffer: RingBuffer<i32, 3> = RingBuffer::new();
        for _ in 0..5 {
            assert_eq!(buffer.pop(), None);
        }
        assert_eq!(buffer.len(), 0);
        buffer.push(9);
        assert_eq!(*buffer.front(), 9);
        assert_eq!(buffer.len(), 1);
    }

    #[test]
    fn test_capacity_one() {
        let mut buffer: RingBuffer<i32, 1> = RingBuffer::new();
        buffer.push(1);
        buffer.push(2);
        assert_eq!(*buffer.front(), 2);
        assert_eq!(*buffer.back(), 2);

        let mut discard: RingBuffer<i32, 1, Discard> = RingBuffer::new();
        discard.push(1);
        discard.push(2);
        assert_eq!(*discard.front(), 1);
    }

    #[test]
    fn test_get_logical_index() {
        let mut buffer: RingBuffer<i32, 3> = RingBuffer::new();
        for x in 1..=5 {
            buffer.push(x);
        }
        assert_eq!(buffer.get(0), Some(&3));
        assert_eq!(buffer.get(2), Some(&5));
        assert_eq!(buffer.get(3), None);
    }

    #[test]
    fn test_iter_follows_logical_order_across_wrap() {
        let mut buffer: RingBuffer<f64, 6> = RingBuffer::new();
        for i in 0..9 {
            buffer.push(f64::from(i));
        }
        let items: Vec<f64> = buffer.iter().copied().collect();
        assert_eq!(items, vec![3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);

        let reversed: Vec<f64> = buffer.iter().rev().copied().collect();
        assert_eq!(reversed, vec![8.0, 7.0, 6.0, 5.0, 4.0, 3.0]);
        assert_eq!(buffer.iter().len(), 6);
    }

    #[test]
    fn test_for_each_loop() {
        let mut buffer: RingBuffer<f64, 6> = RingBuffer::new();
        let values = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        for &v in &values {
            buffer.push(v);
        }
        let mut i = 0;
        for item in &buffer {
            assert_eq!(*item, values[i]);
            i += 1;
        }
        assert_eq!(i, 6);
    }

    #[test]
    fn test_iter_meets_in_the_middle() {
        let mut buffer: RingBuffer<i32, 4> = RingBuffer::new();
        for x in 1..=4 {
            buffer.push(x);
        }
        let mut it = buffer.iter();
        assert_eq!(it.next(), Some(&1));
        assert_eq!(it.next_back(), Some(&4));
        assert_eq!(it.next(), Some(&2));
        assert_eq!(it.next_back(), Some(&3));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn test_cursor_walk() {
        let mut buffer: RingBuffer<i32, 6> = RingBuffer::new();
        for x in [10, 20, 30] {
            buffer.push(x);
        }
        let mut cursor = buffer.begin();
        let end = buffer.end();
        let mut seen = Vec::new();
        while cursor != end {
            seen.push(*cursor.get().unwrap());
            cursor.move_next();
        }
        assert_eq!(seen, vec![10, 20, 30]);
        assert_eq!(cursor.get(), None);

        cursor.move_prev();
        assert_eq!(cursor.get(), Some(&30));
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_cursor_equality_requires_same_buffer() {
        let a: RingBuffer<i32, 4> = RingBuffer::new();
        let b: RingBuffer<i32, 4> = RingBuffer::new();
        assert_eq!(a.begin(), a.end());
        assert_ne!(a.begin(), b.begin());
    }

    #[test]
    fn test_empty_iter() {
        let buffer: RingBuffer<i32, 4> = RingBuffer::new();
        assert_eq!(buffer.iter().next(), None);
        assert_eq!(buffer.begin(), buffer.end());
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn test_front_on_empty_asserts_in_debug() {
        let buffer: RingBuffer<i32, 4> = RingBuffer::new();
        let _ = buffer.front();
    }

    #[test]
    #[should_panic]
    fn test_zero_capacity_panics() {
        let _buffer: RingBuffer<i32, 0> = RingBuffer::new();
    }

    #[test]
    fn test_debug_lists_logical_items() {
        let mut buffer: RingBuffer<i32, 2> = RingBuffer::new();
        buffer.push(1);
        buffer.push(2);
        buffer.push(3);
        let text = format!("{buffer:?}");
        assert!(text.contains("[2, 3]"), "got: {text}");
        assert!(text.contains("Overwrite"), "got: {text}");
    }
}
