//! Owning counterparts of the views.
//!
//! A value copies the bytes a view points at into a buffer it owns alone and
//! re-derives a view over that buffer on demand, so code written against
//! views accepts owned data unchanged.

mod document;
mod element;
#[cfg(feature = "shared")]
mod shared;
mod view_or_value;

pub use document::{ArrayValue, DocumentValue};
pub use element::ElementValue;
#[cfg(feature = "shared")]
pub use shared::SharedDocument;
pub use view_or_value::{
    ArrayViewOrValue, DocumentViewOrValue, ElementViewOrValue, Owned, ViewOrValue,
};
