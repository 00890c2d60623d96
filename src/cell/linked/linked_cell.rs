//! `LinkedCell` - a value handle that can share its slot with a link group.
//!
//! A handle owns one `Rc<RefCell<T>>`. The set of handles holding clones of the
//! same `Rc` is the handle's link group; the reference count is the group size.
//! Group operations only ever reassign the receiver's `Rc`, which is what makes
//! linking asymmetric: nobody else's pointer changes.

use core::fmt;
use std::cell::RefCell;
use std::rc::Rc;

/// A handle to a value that may be shared with other linked handles.
///
/// See the [crate documentation](crate) for the group algebra.
///
/// `Clone` is a *copy*: the clone lands in a new singleton group. Use
/// [`LinkedCell::linked_to`] to create a handle that shares the slot.
///
/// Equality compares values, not group membership; use
/// [`LinkedCell::is_linked_with`] for identity.
pub struct LinkedCell<T> {
    pub(super) slot: Rc<RefCell<T>>,
}

impl<T> LinkedCell<T> {
    /// Creates a singleton handle holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            slot: Rc::new(RefCell::new(value)),
        }
    }

    /// Creates a handle that starts out in `other`'s link group.
    ///
    /// The group grows by one. `other` itself is not modified.
    pub fn linked_to(other: &Self) -> Self {
        link_trace!(
            link_count = Rc::strong_count(&other.slot) + 1,
            "linked_cell::linked_to"
        );
        Self {
            slot: Rc::clone(&other.slot),
        }
    }

    /// Consumes the handle and returns the group's current value.
    ///
    /// If this was the last member the value is moved out of the slot;
    /// otherwise it is cloned and the remaining members keep the slot.
    pub fn into_inner(self) -> T
    where
        T: Clone,
    {
        Rc::unwrap_or_clone(self.slot).into_inner()
    }
}

impl<T: Default> Default for LinkedCell<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> From<T> for LinkedCell<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: Clone> Clone for LinkedCell<T> {
    /// Copies the current value into a fresh singleton group.
    ///
    /// # Panics
    /// Panics if the group's value is currently mutably borrowed.
    fn clone(&self) -> Self {
        Self::new(self.slot.borrow().clone())
    }
}

impl<T: PartialEq> PartialEq for LinkedCell<T> {
    fn eq(&self, other: &Self) -> bool {
        *self.slot.borrow() == *other.slot.borrow()
    }
}

impl<T: Eq> Eq for LinkedCell<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = f.debug_struct("LinkedCell");
        match self.slot.try_borrow() {
            Ok(value) => d.field("value", &*value),
            Err(_) => d.field("value", &format_args!("<borrowed>")),
        };
        d.field("link_count", &Rc::strong_count(&self.slot)).finish()
    }
}
