//! LIFO stack over a growable contiguous buffer.
//!
//! [`Stack`] wraps a `Vec<T>` whose last element is the top.  [`AnyStack`] is the
//! capability trait, also implemented for `Vec<T>` itself.

use core::fmt;

use crate::container::Container;

// ─── AnyStack ─────────────────────────────────────────────────────────────────

/// Last-in, first-out capability.
pub trait AnyStack<T>: Container {
    /// Pushes an element onto the top.
    fn push(&mut self, item: T);
    /// Removes and returns the top element, or `None` if empty.
    fn pop(&mut self) -> Option<T>;
    /// Returns the top element without removing it, or `None` if empty.
    fn peek(&self) -> Option<&T>;
    /// Reverses the order of the elements in place.
    fn reverse(&mut self);
}

impl<T> Container for Vec<T> {
    fn len(&self) -> usize {
        self.len()
    }
    fn clear(&mut self) {
        self.clear();
    }
}

impl<T> AnyStack<T> for Vec<T> {
    fn push(&mut self, item: T) {
        self.push(item);
    }
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }
    fn peek(&self) -> Option<&T> {
        self.last()
    }
    fn reverse(&mut self) {
        self.as_mut_slice().reverse();
    }
}

// ─── Stack ────────────────────────────────────────────────────────────────────

/// A last-in, first-out stack.
///
/// [`clear`](Stack::clear) keeps the allocated capacity for reuse.
#[derive(Clone, PartialEq, Eq)]
pub struct Stack<T> {
    data: Vec<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack.  Does not allocate.
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Pushes `item` onto the top of the stack.
    #[inline]
    pub fn push(&mut self, item: T) {
        self.data.push(item);
    }

    /// Removes and returns the top item, or `None` if the stack is empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.data.pop()
    }

    /// Returns the top item without removing it, or `None` if the stack is empty.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.data.last()
    }

    #[inline]
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.data.last_mut()
    }

    /// Removes every item.  Capacity is retained.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Reverses the stack in place: the bottom item becomes the top.
    pub fn reverse(&mut self) {
        let Some(mut j) = self.data.len().checked_sub(1) else {
            return;
        };
        let mut i = 0;
        while i < j {
            self.data.swap(i, j);
            i += 1;
            j -= 1;
        }
    }
}

impl<T> Container for Stack<T> {
    fn len(&self) -> usize {
        self.len()
    }
    fn clear(&mut self) {
        self.clear();
    }
}

impl<T> AnyStack<T> for Stack<T> {
    fn push(&mut self, item: T) {
        self.push(item);
    }
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }
    fn peek(&self) -> Option<&T> {
        self.peek()
    }
    fn reverse(&mut self) {
        self.reverse();
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Bottom to top.
impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.data.extend(iter);
    }
}

/// Items are pushed in iteration order, so the last one ends up on top.
impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: Vec::from_iter(iter),
        }
    }
}
