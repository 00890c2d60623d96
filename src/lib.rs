//! # `linkcell` - Linked-Attribute Cells
//!
//! A handle type that stores a value but can be joined into, and detached
//! from, a *link group* of other handles. Every member of a group observes the
//! same underlying value, so an edit through one handle is immediately visible
//! through all of them.
//!
//! ## Group algebra
//!
//! - **Membership is identity.** Two handles are linked iff they reference the
//!   same storage slot. Equal values in separate slots are not linked.
//! - **Linking moves only the receiver.** `a.link_with(&b)` takes `a` out of
//!   its current group and puts it into `b`'s group. Other members of `a`'s old
//!   group stay behind; `b`'s group gains exactly one member.
//! - **Copies never alias.** `Clone` produces a singleton holding a copy of the
//!   current value, whatever the size of the source's group.
//! - **Detaching keeps the value.** `remove_links` gives the handle a private
//!   slot initialised to the group's current value.
//!
//! Slots are reference counted: the last handle to leave a group frees it.
//! There is no observer list and no union-find table; a group is simply the
//! set of handles holding the same `Rc`.
//!
//! ## Flavours
//!
//! 1. [`LinkedCell<T>`]: runtime borrow checking through `RefCell`. The
//!    default choice for attribute storage in an editing model.
//! 2. [`BrandedLinkedCell<'brand, T>`]: access gated by a [`GhostToken`], so
//!    borrows are proven exclusive at compile time and the slot carries no
//!    borrow flag.
//!
//! ## Example
//!
//! ```rust
//! use linkcell::LinkedCell;
//!
//! let x = LinkedCell::new(5);
//! let y = LinkedCell::linked_to(&x);
//! assert!(x.is_linked_with(&y));
//!
//! y.set(9);
//! assert_eq!(x.get(), 9);
//!
//! let mut x = x;
//! x.remove_links();
//! assert!(!y.is_linked());
//! assert_eq!(x.get(), 9);
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events when link topology changes.
//! - `proptest`: implement `proptest::arbitrary::Arbitrary` for
//!   [`LinkedCell<T>`].

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod macros;

#[cfg(feature = "proptest")]
mod arbitrary;
pub mod cell;
pub mod token;

pub use cell::{BrandedLinkedCell, LinkedCell};
pub use token::{GhostToken, InvariantLifetime};

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // Tokens are ZSTs.
    assert!(mem::size_of::<GhostToken<'static>>() == 0);

    // A handle is exactly one `Rc`: group bookkeeping lives in the slot's
    // reference count, never in the handle.
    assert!(mem::size_of::<LinkedCell<u64>>() == mem::size_of::<usize>());
    assert!(mem::size_of::<LinkedCell<[u8; 256]>>() == mem::size_of::<usize>());

    // The brand is a ZST, so the branded handle matches the plain one.
    assert!(mem::size_of::<BrandedLinkedCell<'static, u64>>() == mem::size_of::<usize>());
    assert!(
        mem::size_of::<Option<BrandedLinkedCell<'static, u64>>>() == mem::size_of::<usize>()
    );
};
