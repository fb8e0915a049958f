//! Capability contract shared by every linear container in this crate.

/// Basic introspection and management shared by stacks, queues and deques.
///
/// The specialised traits ([`AnyStack`](crate::AnyStack),
/// [`AnyQueue`](crate::AnyQueue), [`AnyDeque`](crate::AnyDeque)) all extend it.
pub trait Container {
    /// Returns the number of elements currently in the container.
    fn len(&self) -> usize;

    /// Returns `true` if the container holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every element.  Afterwards `is_empty()` holds.
    fn clear(&mut self);
}
