use core::mem;

use super::linked_cell::LinkedCell;

impl<T> LinkedCell<T> {
    /// Returns a copy of the group's current value.
    ///
    /// # Panics
    /// Panics if the value is mutably borrowed by an enclosing
    /// [`update`](Self::update) on the same group.
    #[inline]
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.slot.borrow().clone()
    }

    /// Overwrites the group's value.
    ///
    /// Every handle in the group observes `value` on its next read.
    #[inline]
    pub fn set(&self, value: T) {
        drop(self.replace(value));
    }

    /// Overwrites the group's value, returning the previous one.
    ///
    /// # Panics
    /// Panics if called from inside [`with`](Self::with) or
    /// [`update`](Self::update) on a member of the same group.
    #[inline]
    pub fn replace(&self, value: T) -> T {
        self.slot.replace(value)
    }

    /// Takes the group's value, leaving `T::default()` in its place.
    #[inline]
    pub fn take(&self) -> T
    where
        T: Default,
    {
        self.replace(T::default())
    }

    /// Runs `f` with a shared borrow of the group's value.
    ///
    /// # Panics
    /// Panics if the value is mutably borrowed by an enclosing
    /// [`update`](Self::update) on the same group.
    #[inline]
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.slot.borrow())
    }

    /// Mutates the group's value in place.
    ///
    /// # Panics
    /// Panics if `f` reads or writes the same group through any handle.
    #[inline]
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.slot.borrow_mut())
    }

    /// Swaps the values of two groups.
    ///
    /// Membership is untouched. Swapping two members of the same group is a
    /// no-op.
    ///
    /// # Panics
    /// Panics if either group's value is borrowed by an enclosing
    /// [`with`](Self::with) or [`update`](Self::update).
    pub fn swap(&self, other: &Self) {
        if self.is_linked_with(other) {
            return;
        }
        mem::swap(&mut *self.slot.borrow_mut(), &mut *other.slot.borrow_mut());
    }
}
