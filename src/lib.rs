//! # Linear Collections
//!
//! Three generic linear containers, each over a single contiguous buffer:
//!
//! * [`Stack`]: last-in, first-out over a growable `Vec`.
//! * [`Queue`]: first-in, first-out over a circular buffer.
//! * [`Deque`]: double-ended circular buffer with O(1) amortized push and pop at
//!   both ends.
//!
//! Every container implements the [`Container`] capability trait (`len`,
//! `is_empty`, `clear`) plus its own specialised trait ([`AnyStack`],
//! [`AnyQueue`], [`AnyDeque`]).  The specialised traits are also implemented for
//! `Vec` and `VecDeque`, so generic code can accept either.
//!
//! Accessors that can find the container empty return `Option`; they never panic.
//!
//! ## Capacity
//!
//! * `Deque` and `Queue` start at [`INITIAL_CAPACITY`] slots (a power of two) and
//!   double when a push finds the buffer full.  `clear` goes back to the initial
//!   capacity.
//! * `Stack` grows like `Vec` and keeps its capacity across `clear`.
//!
//! ## Cargo features
//!
//! * `tracing` (default): emit `tracing` trace events when a deque buffer grows
//!   or a grown buffer is released by `clear`.
//!
//! ## Examples
//!
//! ### Deque
//!
//! ```rust
//! use linear_collections::Deque;
//!
//! let mut d = Deque::new();
//! d.push_back(2);
//! d.push_back(3);
//! d.push_front(1);
//!
//! assert_eq!(d.front(), Some(&1));
//! assert_eq!(d.back(), Some(&3));
//! assert_eq!(d.pop_back(), Some(3));
//! assert_eq!(d.pop_front(), Some(1));
//! ```
//!
//! ### Stack
//!
//! ```rust
//! use linear_collections::Stack;
//!
//! let mut s: Stack<_> = ["a", "b", "c"].into_iter().collect();
//! assert_eq!(s.peek(), Some(&"c"));
//!
//! s.reverse();
//! assert_eq!(s.pop(), Some("a"));
//! ```
//!
//! ### Queue behind its capability trait
//!
//! ```rust
//! use linear_collections::{AnyQueue, Container, new_queue};
//!
//! let mut q = new_queue::<i32>();
//! q.enqueue(10);
//! q.enqueue(20);
//!
//! assert_eq!(q.dequeue(), Some(10));
//! assert_eq!(q.len(), 1);
//! q.clear();
//! assert_eq!(q.dequeue(), None);
//! ```

// --- Module Declarations ---

pub mod container;
pub mod deque;
pub mod queue;
pub mod stack;

// --- Re-exports ---

pub use container::Container;
pub use deque::{AnyDeque, Deque, INITIAL_CAPACITY};
pub use queue::{AnyQueue, Queue};
pub use stack::{AnyStack, Stack};

// --- Facade Constructors ---

/// Returns an empty [`Stack`] behind the [`AnyStack`] capability.
pub fn new_stack<T>() -> impl AnyStack<T> {
    Stack::new()
}

/// Returns an empty [`Queue`] behind the [`AnyQueue`] capability.
pub fn new_queue<T>() -> impl AnyQueue<T> {
    Queue::new()
}

/// Returns an empty [`Deque`] behind the [`AnyDeque`] capability.
pub fn new_deque<T>() -> impl AnyDeque<T> {
    Deque::new()
}
