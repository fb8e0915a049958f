//! FIFO queue over the [`Deque`] ring buffer.
//!
//! Enqueue writes at the back of the ring and dequeue reads at the front, so both
//! are O(1) amortized.  [`AnyQueue`] is the capability trait, also implemented for
//! `VecDeque<T>`.

use core::fmt;
use std::collections::VecDeque;

use crate::container::Container;
use crate::deque::Deque;

// ─── AnyQueue ─────────────────────────────────────────────────────────────────

/// First-in, first-out capability.
///
/// `push`, `pop` and `peek` are provided aliases of `enqueue`, `dequeue` and `front`.
pub trait AnyQueue<T>: Container {
    /// Adds an element at the back.
    fn enqueue(&mut self, item: T);
    /// Removes and returns the front element, or `None` if empty.
    fn dequeue(&mut self) -> Option<T>;
    /// Returns the front element without removing it, or `None` if empty.
    fn front(&self) -> Option<&T>;

    fn push(&mut self, item: T) {
        self.enqueue(item);
    }
    fn pop(&mut self) -> Option<T> {
        self.dequeue()
    }
    fn peek(&self) -> Option<&T> {
        self.front()
    }
}

impl<T> AnyQueue<T> for VecDeque<T> {
    fn enqueue(&mut self, item: T) {
        self.push_back(item);
    }
    fn dequeue(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn front(&self) -> Option<&T> {
        VecDeque::front(self)
    }
}

// ─── Queue ────────────────────────────────────────────────────────────────────

/// A first-in, first-out queue.
///
/// Storage follows the [`Deque`] policy: capacity doubles on demand and
/// [`clear`](Queue::clear) reallocates at [`INITIAL_CAPACITY`](crate::deque::INITIAL_CAPACITY).
#[derive(Clone, PartialEq, Eq)]
pub struct Queue<T> {
    ring: Deque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self { ring: Deque::new() }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.ring.capacity()
    }

    /// Adds `item` to the back of the queue.
    #[inline]
    pub fn enqueue(&mut self, item: T) {
        self.ring.push_back(item);
    }

    /// Alias of [`enqueue`](Queue::enqueue).
    #[inline]
    pub fn push(&mut self, item: T) {
        self.enqueue(item);
    }

    /// Removes and returns the front item, or `None` if the queue is empty.
    #[inline]
    pub fn dequeue(&mut self) -> Option<T> {
        self.ring.pop_front()
    }

    /// Alias of [`dequeue`](Queue::dequeue).
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.dequeue()
    }

    /// Returns the front item without removing it, or `None` if the queue is empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.ring.front()
    }

    /// Alias of [`front`](Queue::front).
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.front()
    }

    /// Returns the most recently enqueued item, or `None` if the queue is empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.ring.back()
    }

    pub fn clear(&mut self) {
        self.ring.clear();
    }
}

impl<T> Container for Queue<T> {
    fn len(&self) -> usize {
        self.len()
    }
    fn clear(&mut self) {
        self.clear();
    }
}

impl<T> AnyQueue<T> for Queue<T> {
    fn enqueue(&mut self, item: T) {
        self.enqueue(item);
    }
    fn dequeue(&mut self) -> Option<T> {
        self.dequeue()
    }
    fn front(&self) -> Option<&T> {
        self.front()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.ring, f)
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.ring.extend(iter);
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            ring: Deque::from_iter(iter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deque::INITIAL_CAPACITY;

    // ─── enqueue / dequeue / front ────────────────────────────────────────────
    #[test]
    fn test_queue_ops_enqueue_len() {
        let mut q = Queue::new();
        for v in ["one", "two", "three"] {
            q.enqueue(v);
        }
        assert_eq!(q.len(), 3);
        assert_eq!(q.back(), Some(&"three"));
    }

    #[test]
    fn test_queue_ops_dequeue_fifo() {
        let values = ['a', 'b', 'c'];
        let mut q: Queue<char> = Queue::new();
        for v in values {
            q.enqueue(v);
        }
        for expected in values {
            assert_eq!(q.dequeue(), Some(expected));
        }
        assert_eq!(q.dequeue(), None);
    }

    #[test]
    fn test_queue_ops_front_does_not_remove() {
        let mut q = Queue::new();
        q.enqueue(9.81);
        assert_eq!(q.front(), Some(&9.81));
        assert_eq!(q.len(), 1);
        q.dequeue();
        assert_eq!(q.front(), None);
        assert_eq!(q.back(), None);
    }

    #[test]
    fn test_queue_ops_aliases() {
        let mut q = Queue::new();
        q.push(1);
        q.push(2);
        assert_eq!(q.peek(), Some(&1));
        assert_eq!(q.pop(), Some(1));
        assert_eq!(q.pop(), Some(2));
        assert_eq!(q.pop(), None);
        assert_eq!(q.peek(), None);
    }

    #[test]
    fn test_queue_ops_interleaved_through_growth() {
        let mut q = Queue::new();
        let mut next_out = 0;
        for i in 0..200 {
            q.enqueue(i);
            if i % 3 == 2 {
                assert_eq!(q.dequeue(), Some(next_out));
                next_out += 1;
            }
        }
        while let Some(v) = q.dequeue() {
            assert_eq!(v, next_out);
            next_out += 1;
        }
        assert_eq!(next_out, 200);
    }

    #[test]
    fn test_queue_ops_steady_state_does_not_grow() {
        let mut q = Queue::new();
        for i in 0..1000 {
            q.enqueue(i);
            assert_eq!(q.dequeue(), Some(i));
        }
        assert_eq!(q.capacity(), INITIAL_CAPACITY);
    }

    // ─── clear ────────────────────────────────────────────────────────────────
    #[test]
    fn test_queue_clear() {
        let mut q: Queue<String> = (0..20).map(|i| i.to_string()).collect();
        q.clear();
        assert!(q.is_empty());
        assert_eq!(q.len(), 0);
        assert_eq!(q.capacity(), INITIAL_CAPACITY);
        assert_eq!(q.dequeue(), None);
        assert_eq!(q.front(), None);
        q.clear();
        assert!(q.is_empty());
    }

    // ─── traits ───────────────────────────────────────────────────────────────
    #[test]
    fn test_queue_traits_debug_clone_eq() {
        let q: Queue<i32> = vec![1, 2, 3].into_iter().collect();
        let mut cloned = q.clone();
        assert_eq!(q, cloned);
        assert_eq!(format!("{:?}", q), "[1, 2, 3]");
        cloned.extend([4]);
        assert_ne!(q, cloned);
    }

    #[test]
    fn test_queue_any_queue_trait() {
        fn exercise(any: &mut dyn AnyQueue<&'static str>) {
            any.enqueue("first");
            any.push("second");
            assert_eq!(any.len(), 2);
            assert_eq!(any.front(), Some(&"first"));
            assert_eq!(any.peek(), Some(&"first"));
            assert_eq!(any.dequeue(), Some("first"));
            assert_eq!(any.pop(), Some("second"));
            assert_eq!(any.pop(), None);
            any.enqueue("third");
            any.clear();
            assert!(any.is_empty());
        }
        exercise(&mut Queue::new());
        exercise(&mut VecDeque::new());
    }
}
