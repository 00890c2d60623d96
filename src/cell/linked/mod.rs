//! Runtime-checked linked cells.
//!
//! Public surface is re-exported from `linked_cell`; the operations are split
//! across small submodules by concern.

pub mod linked_cell;

mod ops_access;
mod ops_link;

#[cfg(test)]
mod tests;

pub use linked_cell::LinkedCell;
