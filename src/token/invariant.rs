use core::marker::PhantomData;

/// Lifetime marker that is invariant in `'brand`.
///
/// Covariance would let the compiler shrink two different brands to a common
/// lifetime and mix their cells; invariance forbids that.
#[derive(Debug, Default)]
pub struct InvariantLifetime<'brand>(PhantomData<fn(&'brand ()) -> &'brand ()>);

impl<'brand> InvariantLifetime<'brand> {
    /// Creates the marker.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}
