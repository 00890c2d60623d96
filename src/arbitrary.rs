//! `proptest` integration.
//!
//! Generated cells are always singletons; tests build link groups from them
//! explicitly with `linked_to` and `link_with`.

use proptest::arbitrary::{any_with, Arbitrary};
use proptest::strategy::{Map, Strategy};

use crate::LinkedCell;

impl<T> Arbitrary for LinkedCell<T>
where
    T: Arbitrary + 'static,
{
    type Parameters = T::Parameters;
    type Strategy = Map<T::Strategy, fn(T) -> Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        any_with::<T>(args).prop_map(LinkedCell::new as fn(T) -> Self)
    }
}
