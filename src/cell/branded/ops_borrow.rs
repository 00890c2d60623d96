use core::mem;

use crate::GhostToken;

use super::branded_linked_cell::BrandedLinkedCell;

impl<'brand, T> BrandedLinkedCell<'brand, T> {
    /// Borrows the group's value immutably.
    #[inline(always)]
    pub fn borrow<'a>(&'a self, _token: &'a GhostToken<'brand>) -> &'a T {
        // SAFETY: a mutable borrow of any slot of this brand requires
        // `&mut GhostToken<'brand>`, which cannot coexist with `_token`.
        unsafe { &*self.slot.get() }
    }

    /// Borrows the group's value mutably.
    #[inline(always)]
    pub fn borrow_mut<'a>(&'a self, _token: &'a mut GhostToken<'brand>) -> &'a mut T {
        // SAFETY: the token is linear and borrowed exclusively for `'a`, so no
        // other reference into any slot of this brand can exist for `'a`. The
        // slot itself outlives `'a` because `self` holds an `Rc` to it.
        unsafe { &mut *self.slot.get() }
    }

    /// Returns a copy of the group's current value.
    #[inline]
    pub fn get(&self, token: &GhostToken<'brand>) -> T
    where
        T: Clone,
    {
        self.borrow(token).clone()
    }

    /// Overwrites the group's value.
    #[inline]
    pub fn set(&self, token: &mut GhostToken<'brand>, value: T) {
        *self.borrow_mut(token) = value;
    }

    /// Overwrites the group's value, returning the previous one.
    #[inline]
    pub fn replace(&self, token: &mut GhostToken<'brand>, value: T) -> T {
        mem::replace(self.borrow_mut(token), value)
    }
}
