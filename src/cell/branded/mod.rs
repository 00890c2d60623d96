//! Token-gated linked cells.
//!
//! Same group algebra as [`LinkedCell`](crate::LinkedCell), but the slot is a
//! bare `UnsafeCell` and access is proven exclusive by a
//! [`GhostToken`](crate::GhostToken) instead of a runtime borrow flag.

pub mod branded_linked_cell;

mod ops_borrow;


pub use branded_linked_cell::BrandedLinkedCell;
