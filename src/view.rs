//! Zero-copy views over BSON buffers.
//!
//! Views borrow the buffer they were created from and decode nothing until an
//! accessor is called. Use the owning types in [`crate::value`] when the data
//! has to outlive the buffer.

mod array;
mod document;
mod element;

pub use array::{ArrayView, Iter as ArrayIter};
pub use document::{DocumentView, Iter as DocumentIter};
pub use element::ElementView;
