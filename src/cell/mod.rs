//! Linked cell family - handles whose storage can be shared by a link group.
//!
//! The module tree is split by access discipline:
//! - `linked::*` checks borrows at runtime (`Rc<RefCell<T>>`).
//! - `branded::*` gates borrows with a [`GhostToken`](crate::GhostToken).
//!
//! Both expose the same group operations: `linked_to`, `link_with`,
//! `remove_links`, `is_linked`, `is_linked_with` and `link_count`.

pub mod branded;
pub mod linked;

pub use branded::BrandedLinkedCell;
pub use linked::LinkedCell;
