//! Typed payloads, one per [`Tag`].
//!
//! Variable-length payloads (strings, binary data, nested documents) borrow
//! from the buffer they were read from. Fixed-width scalars are copied.

use crate::{ArrayView, DocumentView, Tag};

mod binary;
mod decimal128;
mod object_id;
mod text;
mod time;

pub use binary::*;
pub use decimal128::*;
pub use object_id::*;
pub use text::*;
pub use time::*;

/// Any BSON value, borrowed from its buffer.
///
/// Returned by [`ElementView::get_value`](crate::ElementView::get_value) for
/// code that does not know the kind of an element ahead of time.
#[derive(Clone, PartialEq, Debug)]
pub enum BsonRef<'a> {
    /// Double (0x01).
    Double(f64),
    /// UTF-8 string (0x02).
    Utf8(&'a str),
    /// Embedded document (0x03).
    Document(DocumentView<'a>),
    /// Array (0x04).
    Array(ArrayView<'a>),
    /// Binary data (0x05).
    Binary(Binary<'a>),
    /// Undefined (0x06).
    Undefined,
    /// Object id (0x07).
    Oid(ObjectId),
    /// Boolean (0x08).
    Bool(bool),
    /// UTC datetime (0x09).
    Date(Date),
    /// Null (0x0A).
    Null,
    /// Regular expression (0x0B).
    Regex(Regex<'a>),
    /// DBPointer (0x0C).
    DbPointer(DbPointer<'a>),
    /// JavaScript code (0x0D).
    Code(&'a str),
    /// Symbol (0x0E).
    Symbol(&'a str),
    /// JavaScript code with scope (0x0F).
    CodeWithScope(CodeWithScope<'a>),
    /// 32-bit integer (0x10).
    Int32(i32),
    /// Timestamp (0x11).
    Timestamp(Timestamp),
    /// 64-bit integer (0x12).
    Int64(i64),
    /// 128-bit decimal (0x13).
    Decimal128(Decimal128),
    /// Min key (0xFF).
    MinKey,
    /// Max key (0x7F).
    MaxKey,
}

impl<'a> BsonRef<'a> {
    #[inline]
    pub fn tag(&self) -> Tag {
        match self {
            BsonRef::Double(_) => Tag::Double,
            BsonRef::Utf8(_) => Tag::Utf8,
            BsonRef::Document(_) => Tag::Document,
            BsonRef::Array(_) => Tag::Array,
            BsonRef::Binary(_) => Tag::Binary,
            BsonRef::Undefined => Tag::Undefined,
            BsonRef::Oid(_) => Tag::Oid,
            BsonRef::Bool(_) => Tag::Bool,
            BsonRef::Date(_) => Tag::Date,
            BsonRef::Null => Tag::Null,
            BsonRef::Regex(_) => Tag::Regex,
            BsonRef::DbPointer(_) => Tag::DbPointer,
            BsonRef::Code(_) => Tag::Code,
            BsonRef::Symbol(_) => Tag::Symbol,
            BsonRef::CodeWithScope(_) => Tag::CodeWithScope,
            BsonRef::Int32(_) => Tag::Int32,
            BsonRef::Timestamp(_) => Tag::Timestamp,
            BsonRef::Int64(_) => Tag::Int64,
            BsonRef::Decimal128(_) => Tag::Decimal128,
            BsonRef::MinKey => Tag::MinKey,
            BsonRef::MaxKey => Tag::MaxKey,
        }
    }

    #[inline]
    pub fn as_double(&self) -> Option<f64> {
        match self {
            BsonRef::Double(value) => Some(*value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            BsonRef::Utf8(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_document(&self) -> Option<DocumentView<'a>> {
        match self {
            BsonRef::Document(value) => Some(*value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_array(&self) -> Option<ArrayView<'a>> {
        match self {
            BsonRef::Array(value) => Some(*value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_binary(&self) -> Option<&Binary<'a>> {
        match self {
            BsonRef::Binary(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            BsonRef::Bool(value) => Some(*value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            BsonRef::Int32(value) => Some(*value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            BsonRef::Int64(value) => Some(*value),
            _ => None,
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, BsonRef::Null)
    }
}
