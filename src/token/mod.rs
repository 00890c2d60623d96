//! `GhostToken` - the access capability for branded link groups.
//!
//! A token is a zero-sized value branded with a fresh, invariant lifetime.
//! Every [`BrandedLinkedCell`](crate::BrandedLinkedCell) created under that
//! brand can only be read with `&GhostToken<'brand>` and only be written with
//! `&mut GhostToken<'brand>`. Since all members of a link group share one slot,
//! a single exclusive token borrow is enough to prove that nobody else is
//! looking at any slot of the brand.
//!
//! ## Core invariant (linearity)
//!
//! `GhostToken<'brand>` is **not** `Copy`/`Clone`, and the only way to obtain
//! one is [`GhostToken::new`], which mints exactly one token per brand.

mod invariant;

pub use invariant::InvariantLifetime;

/// A zero-sized token that controls access to branded link groups.
#[derive(Debug)]
pub struct GhostToken<'brand>(InvariantLifetime<'brand>);

impl<'brand> GhostToken<'brand> {
    /// Creates a new token and runs `f` with it.
    ///
    /// The brand is universally quantified over the closure, so it cannot
    /// escape or be unified with any other brand.
    ///
    /// # Example
    ///
    /// ```rust
    /// use linkcell::{BrandedLinkedCell, GhostToken};
    ///
    /// let total = GhostToken::new(|mut token| {
    ///     let a = BrandedLinkedCell::new(1);
    ///     let b = BrandedLinkedCell::linked_to(&a);
    ///     b.set(&mut token, 41);
    ///     a.get(&token) + 1
    /// });
    /// assert_eq!(total, 42);
    /// ```
    pub fn new<F, R>(f: F) -> R
    where
        F: for<'new_brand> FnOnce(GhostToken<'new_brand>) -> R,
    {
        f(GhostToken(InvariantLifetime::new()))
    }
}
