use std::cell::RefCell;
use std::rc::Rc;

use super::linked_cell::LinkedCell;

impl<T> LinkedCell<T> {
    /// Moves this handle into `target`'s link group.
    ///
    /// This handle's previous value is discarded and it now reads and writes
    /// `target`'s value. If this handle was the last member of its old group,
    /// the old slot is freed.
    ///
    /// Only the receiver moves. The other members of this handle's old group
    /// stay linked to each other, and `target`'s other members are unaffected.
    /// Linking two handles that already share a slot does nothing.
    pub fn link_with(&mut self, target: &Self) {
        if self.is_linked_with(target) {
            link_debug!("linked_cell::link_with: attempt to link already linked cells");
            return;
        }
        link_trace!(
            left = Rc::strong_count(&self.slot) - 1,
            joined = Rc::strong_count(&target.slot) + 1,
            "linked_cell::link_with"
        );
        self.slot = Rc::clone(&target.slot);
    }

    /// Detaches this handle into a new singleton group.
    ///
    /// The handle keeps the group's current value in a private slot. Remaining
    /// members keep sharing the old slot. Already-singleton handles are left as
    /// they are.
    ///
    /// # Panics
    /// Panics if the group's value is currently mutably borrowed.
    pub fn remove_links(&mut self)
    where
        T: Clone,
    {
        if !self.is_linked() {
            return;
        }
        link_trace!(
            left = Rc::strong_count(&self.slot) - 1,
            "linked_cell::remove_links"
        );
        let value = self.slot.borrow().clone();
        self.slot = Rc::new(RefCell::new(value));
    }

    /// Returns `true` if at least one other handle shares this handle's slot.
    #[inline]
    pub fn is_linked(&self) -> bool {
        Rc::strong_count(&self.slot) > 1
    }

    /// Returns `true` if `self` and `other` share the same slot.
    ///
    /// This is an identity comparison; equal values in separate slots are not
    /// linked.
    #[inline]
    pub fn is_linked_with(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }

    /// Returns the number of handles in this handle's link group.
    #[inline]
    pub fn link_count(&self) -> usize {
        Rc::strong_count(&self.slot)
    }
}
