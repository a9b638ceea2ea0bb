//! Zero-copy views over BSON documents, with owning counterparts.
//!
//! A [`DocumentView`] wraps a byte slice holding an encoded document and
//! decodes nothing up front. Lookups return [`ElementView`]s, which point at
//! one key/value pair and decode its payload only when a typed accessor is
//! called. A failed lookup yields the *unset* element rather than an error,
//! so lookups chain; the typed accessors are where errors surface.
//!
//! ```
//! use na_bson::{DocumentView, Error, Tag};
//!
//! // {"n": 42, "list": [10, 20]}
//! let bytes = [
//!     37, 0, 0, 0, //
//!     0x10, b'n', 0, 42, 0, 0, 0, //
//!     0x04, b'l', b'i', b's', b't', 0, //
//!     19, 0, 0, 0, 0x10, b'0', 0, 10, 0, 0, 0, 0x10, b'1', 0, 20, 0, 0, 0, 0, //
//!     0,
//! ];
//! let doc = DocumentView::from_slice(&bytes)?;
//!
//! assert_eq!(doc.get("n").get_int32()?, 42);
//! assert_eq!(doc.get("list").get(1).get_int32()?, 20);
//! assert!(!doc.get("list").get(2).is_set());
//! assert_eq!(
//!     doc.get("n").get_utf8(),
//!     Err(Error::WrongElementType { expected: Tag::Utf8, actual: Tag::Int32 })
//! );
//! # Ok::<(), na_bson::Error>(())
//! ```
//!
//! Views borrow their buffer. [`DocumentValue`], [`ArrayValue`] and
//! [`ElementValue`] copy the bytes into storage they own, and
//! [`ViewOrValue`] lets an API accept either.
//!
//! # Features
//!
//! - `serde`: `serde::Serialize` for views, values and payloads.
//! - `shared`: [`SharedDocument`], a reference-counted document buffer.

mod error;
mod index;
#[cfg(feature = "serde")]
mod ser;
mod tag;
mod util;

pub mod diagnostic;
pub mod types;
pub mod value;
pub mod view;

pub use error::{Error, Result};
pub use index::Index;
pub use tag::{BinarySubtype, Tag};
pub use types::{BsonRef, ObjectId};
pub use util::null_blind_eq;
pub use value::*;
pub use view::*;

pub(crate) use util::cold_path;
