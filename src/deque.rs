//! Growable double-ended queue over a single circular buffer.
//!
//! [`Deque`] keeps its elements in a `Box<[MaybeUninit<T>]>` ring with a `head`
//! cursor, a `tail` cursor and a live `len`.  The capacity starts at
//! [`INITIAL_CAPACITY`] and doubles whenever a push finds the ring full.  Growth
//! moves the live elements into the new allocation in logical order starting at
//! slot 0, so after a growth `head == 0` and `tail == len`.
//!
//! [`AnyDeque`] is the capability trait shared with `std::collections::VecDeque`.

use core::fmt;
use core::mem::MaybeUninit;
use core::ptr;
use std::collections::VecDeque;

use crate::container::Container;

/// Capacity of a freshly created (or cleared) [`Deque`].  Always a power of two.
pub const INITIAL_CAPACITY: usize = 8;

// ─── AnyDeque ─────────────────────────────────────────────────────────────────

/// Double-ended queue capability: insertion and removal at both ends.
///
/// Implemented by [`Deque<T>`] and `VecDeque<T>`.
pub trait AnyDeque<T>: Container {
    /// Prepends an element to the front.
    fn push_front(&mut self, item: T);
    /// Appends an element to the back.
    fn push_back(&mut self, item: T);
    /// Removes and returns the element from the front, or `None` if empty.
    fn pop_front(&mut self) -> Option<T>;
    /// Removes and returns the element from the back, or `None` if empty.
    fn pop_back(&mut self) -> Option<T>;
    /// Returns a shared reference to the front element, or `None` if empty.
    fn front(&self) -> Option<&T>;
    /// Returns a shared reference to the back element, or `None` if empty.
    fn back(&self) -> Option<&T>;
}

impl<T> Container for VecDeque<T> {
    fn len(&self) -> usize {
        self.len()
    }
    fn clear(&mut self) {
        self.clear();
    }
}

impl<T> AnyDeque<T> for VecDeque<T> {
    fn push_front(&mut self, item: T) {
        self.push_front(item);
    }
    fn push_back(&mut self, item: T) {
        self.push_back(item);
    }
    fn pop_front(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn pop_back(&mut self) -> Option<T> {
        self.pop_back()
    }
    fn front(&self) -> Option<&T> {
        self.front()
    }
    fn back(&self) -> Option<&T> {
        self.back()
    }
}

// ─── Deque ────────────────────────────────────────────────────────────────────

/// A double-ended queue backed by a power-of-two circular buffer.
///
/// # Layout
/// Slots `head, head+1, …, head+len-1` (all taken modulo `capacity`) hold the live
/// elements front to back.  `tail` is the slot one past the back element.  Every
/// other slot is uninitialised.
///
/// # Clear policy
/// [`clear`](Deque::clear) releases the buffer and starts over at
/// [`INITIAL_CAPACITY`].  This differs from [`Stack`](crate::Stack), which keeps
/// its allocation across a clear.
pub struct Deque<T> {
    buf: Box<[MaybeUninit<T>]>,
    head: usize,
    tail: usize,
    len: usize,
}

impl<T> Deque<T> {
    /// Creates an empty deque with [`INITIAL_CAPACITY`] slots.
    pub fn new() -> Self {
        const {
            assert!(INITIAL_CAPACITY.is_power_of_two(), "INITIAL_CAPACITY must be a power of two");
        }
        Self {
            buf: Self::alloc_buffer(INITIAL_CAPACITY),
            head: 0,
            tail: 0,
            len: 0,
        }
    }

    /// Allocates `capacity` uninitialised slots.  Aborts on allocation failure.
    #[inline]
    fn alloc_buffer(capacity: usize) -> Box<[MaybeUninit<T>]> {
        Box::new_uninit_slice(capacity)
    }

    /// Returns the number of elements currently in the deque.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the deque contains no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots in the ring buffer.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Physical slot `add` positions after `idx`.
    /// Uses bitmask `(capacity - 1)`, valid because capacity is a power of two.
    #[inline(always)]
    fn wrap_add(&self, idx: usize, add: usize) -> usize {
        (idx + add) & (self.capacity() - 1)
    }

    /// Physical slot `sub` positions before `idx`, never negative.
    #[inline(always)]
    fn wrap_sub(&self, idx: usize, sub: usize) -> usize {
        idx.wrapping_sub(sub) & (self.capacity() - 1)
    }

    /// Prepends `item` to the front of the deque, growing the buffer when full.
    #[inline]
    pub fn push_front(&mut self, item: T) {
        if self.len == self.capacity() {
            self.grow();
        }
        self.head = self.wrap_sub(self.head, 1);
        self.buf[self.head].write(item);
        self.len += 1;
    }

    /// Appends `item` to the back of the deque, growing the buffer when full.
    #[inline]
    pub fn push_back(&mut self, item: T) {
        if self.len == self.capacity() {
            self.grow();
        }
        self.buf[self.tail].write(item);
        self.tail = self.wrap_add(self.tail, 1);
        self.len += 1;
    }

    /// Removes and returns the first element, or `None` if empty.
    #[inline]
    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        // SAFETY: `head` is a live slot while `len > 0`; it is marked dead by
        // advancing `head` right after the read.
        let val = unsafe { self.buf[self.head].assume_init_read() };
        self.head = self.wrap_add(self.head, 1);
        self.len -= 1;
        Some(val)
    }

    /// Removes and returns the last element, or `None` if empty.
    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.tail = self.wrap_sub(self.tail, 1);
        self.len -= 1;
        // SAFETY: the slot before the old `tail` was the live back element and is
        // now outside the live range.
        Some(unsafe { self.buf[self.tail].assume_init_read() })
    }

    /// Returns a shared reference to the front element, or `None` if empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        if self.len == 0 {
            None
        } else {
            // SAFETY: `head` is live while `len > 0`.
            Some(unsafe { self.buf[self.head].assume_init_ref() })
        }
    }

    /// Returns a shared reference to the back element, or `None` if empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        if self.len == 0 {
            None
        } else {
            let idx = self.wrap_sub(self.tail, 1);
            // SAFETY: the slot before `tail` is live while `len > 0`.
            Some(unsafe { self.buf[idx].assume_init_ref() })
        }
    }

    /// Returns an exclusive reference to the front element, or `None` if empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        if self.len == 0 {
            None
        } else {
            let idx = self.head;
            Some(unsafe { self.buf[idx].assume_init_mut() })
        }
    }

    /// Returns an exclusive reference to the back element, or `None` if empty.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.len == 0 {
            None
        } else {
            let idx = self.wrap_sub(self.tail, 1);
            Some(unsafe { self.buf[idx].assume_init_mut() })
        }
    }

    /// Drops every element, then reallocates the buffer at [`INITIAL_CAPACITY`].
    pub fn clear(&mut self) {
        self.drop_live();
        #[cfg(feature = "tracing")]
        {
            if self.capacity() != INITIAL_CAPACITY {
                tracing::trace!(capacity = self.capacity(), "deque clear releases grown buffer");
            }
        }
        self.buf = Self::alloc_buffer(INITIAL_CAPACITY);
        self.head = 0;
        self.tail = 0;
    }

    /// Drops the live elements in place and sets `len` to zero.
    fn drop_live(&mut self) {
        let len = self.len;
        // Zero first so a panicking destructor leaks the rest instead of double-dropping.
        self.len = 0;
        for i in 0..len {
            let idx = self.wrap_add(self.head, i);
            // SAFETY: slot `idx` was live and is visited once.
            unsafe { self.buf[idx].assume_init_drop() };
        }
    }

    /// Doubles the capacity, moving the live elements to slots `0..len` in order.
    ///
    /// Called only when the ring is full.
    #[cold]
    #[inline(never)]
    fn grow(&mut self) {
        let old_cap = self.capacity();
        let new_cap = old_cap
            .checked_mul(2)
            .unwrap_or_else(|| panic!("Deque capacity overflow"));
        #[cfg(feature = "tracing")]
        tracing::trace!(old_cap, new_cap, len = self.len, "deque grow");

        let mut new_buf = Self::alloc_buffer(new_cap);
        let src = self.buf.as_ptr();
        let dst = new_buf.as_mut_ptr();
        for i in 0..self.len {
            let from = self.wrap_add(self.head, i);
            // SAFETY: `from` is a live slot of the old buffer and `i < len <= new_cap`.
            // The old buffer is uninitialised memory afterwards and has no drop glue.
            unsafe { ptr::copy_nonoverlapping(src.add(from), dst.add(i), 1) };
        }
        self.buf = new_buf;
        self.head = 0;
        self.tail = self.len;
    }

    /// Borrows the live elements front to back.
    fn iter_live(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.len).map(move |i| {
            let idx = self.wrap_add(self.head, i);
            // SAFETY: every index in `0..len` maps to a live slot.
            unsafe { self.buf[idx].assume_init_ref() }
        })
    }
}

impl<T> Drop for Deque<T> {
    fn drop(&mut self) {
        self.drop_live();
    }
}

impl<T> Container for Deque<T> {
    fn len(&self) -> usize {
        self.len
    }
    fn clear(&mut self) {
        self.clear();
    }
}

impl<T> AnyDeque<T> for Deque<T> {
    fn push_front(&mut self, item: T) {
        self.push_front(item);
    }
    fn push_back(&mut self, item: T) {
        self.push_back(item);
    }
    fn pop_front(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn pop_back(&mut self) -> Option<T> {
        self.pop_back()
    }
    fn front(&self) -> Option<&T> {
        self.front()
    }
    fn back(&self) -> Option<&T> {
        self.back()
    }
}

impl<T: Clone> Clone for Deque<T> {
    fn clone(&self) -> Self {
        let mut buf = Self::alloc_buffer(self.capacity());
        let mut written = 0;
        for (slot, item) in buf.iter_mut().zip(self.iter_live()) {
            slot.write(item.clone());
            written += 1;
        }
        Self {
            buf,
            head: 0,
            tail: written & (self.capacity() - 1),
            len: written,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Deque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter_live()).finish()
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for Deque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter_live().eq(other.iter_live())
    }
}
impl<T: Eq> Eq for Deque<T> {}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for i in iter {
            self.push_back(i);
        }
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}
