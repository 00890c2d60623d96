//! `BrandedLinkedCell` - a linked cell whose slot is gated by a ghost token.
//!
//! Every slot of a brand is only reachable through a token of that brand, so
//! `&mut GhostToken<'brand>` excludes every other borrow of every slot at once,
//! including slots shared by many handles. Group operations (`link_with`,
//! `is_linked*`) never touch the value and therefore need no token.

use core::cell::UnsafeCell;
use std::rc::Rc;

use crate::token::InvariantLifetime;
use crate::GhostToken;

/// A branded handle to a value that may be shared with other linked handles.
///
/// Reads need `&GhostToken<'brand>`; writes need `&mut GhostToken<'brand>`.
/// `Clone` is not implemented because copying the value needs the token; use
/// [`copy`](Self::copy).
pub struct BrandedLinkedCell<'brand, T> {
    pub(super) slot: Rc<UnsafeCell<T>>,
    _brand: InvariantLifetime<'brand>,
}

impl<'brand, T> BrandedLinkedCell<'brand, T> {
    /// Creates a singleton handle holding `value`.
    pub fn new(value: T) -> Self {
        Self::from_slot(Rc::new(UnsafeCell::new(value)))
    }

    /// Creates a handle that starts out in `other`'s link group.
    pub fn linked_to(other: &Self) -> Self {
        link_trace!(
            link_count = Rc::strong_count(&other.slot) + 1,
            "branded_linked_cell::linked_to"
        );
        Self::from_slot(Rc::clone(&other.slot))
    }

    /// Copies the current value into a fresh singleton group.
    pub fn copy(&self, token: &GhostToken<'brand>) -> Self
    where
        T: Clone,
    {
        Self::new(self.borrow(token).clone())
    }

    /// Moves this handle into `target`'s link group.
    ///
    /// Only the receiver moves; see [`LinkedCell::link_with`](crate::LinkedCell::link_with).
    pub fn link_with(&mut self, target: &Self) {
        if self.is_linked_with(target) {
            link_debug!("branded_linked_cell::link_with: attempt to link already linked cells");
            return;
        }
        link_trace!(
            left = Rc::strong_count(&self.slot) - 1,
            joined = Rc::strong_count(&target.slot) + 1,
            "branded_linked_cell::link_with"
        );
        self.slot = Rc::clone(&target.slot);
    }

    /// Detaches this handle into a new singleton group holding the current
    /// value.
    pub fn remove_links(&mut self, token: &GhostToken<'brand>)
    where
        T: Clone,
    {
        if !self.is_linked() {
            return;
        }
        link_trace!(
            left = Rc::strong_count(&self.slot) - 1,
            "branded_linked_cell::remove_links"
        );
        let value = self.borrow(token).clone();
        self.slot = Rc::new(UnsafeCell::new(value));
    }

    /// Returns `true` if at least one other handle shares this handle's slot.
    #[inline]
    pub fn is_linked(&self) -> bool {
        Rc::strong_count(&self.slot) > 1
    }

    /// Returns `true` if `self` and `other` share the same slot.
    #[inline]
    pub fn is_linked_with(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }

    /// Returns the number of handles in this handle's link group.
    #[inline]
    pub fn link_count(&self) -> usize {
        Rc::strong_count(&self.slot)
    }

    #[inline(always)]
    fn from_slot(slot: Rc<UnsafeCell<T>>) -> Self {
        Self {
            slot,
            _brand: InvariantLifetime::new(),
        }
    }
}

impl<'brand, T: Default> Default for BrandedLinkedCell<'brand, T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<'brand, T> From<T> for BrandedLinkedCell<'brand, T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}
