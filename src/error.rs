//! Error types for BSON element access.
//!
//! This module contains the [`Error`] type which represents all possible errors
//! that can occur when reading values out of a BSON buffer.
//!
//! Lookups never fail: a missing key, an out-of-range index or a lookup on the
//! wrong kind of element yields the unset element. Errors only appear once a
//! concrete value is requested from an element.
//!
//! # Example
//!
//! ```
//! use na_bson::{DocumentView, Error, Tag};
//!
//! // {"a": 1}
//! let bytes = [12, 0, 0, 0, 0x10, b'a', 0, 1, 0, 0, 0, 0];
//! let doc = DocumentView::new(&bytes);
//!
//! match doc.get("a").get_utf8() {
//!     Err(Error::WrongElementType { expected, actual }) => {
//!         assert_eq!(expected, Tag::Utf8);
//!         assert_eq!(actual, Tag::Int32);
//!     }
//!     other => panic!("unexpected {other:?}"),
//! }
//!
//! assert_eq!(doc.get("missing").get("deeper").tag(), Err(Error::UnsetElement));
//! ```

use std::fmt::{self, Display};

use crate::Tag;

/// Alias for a `Result` with the error type [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// This type represents all possible errors that can occur when reading
/// BSON data.
///
/// # Variants
///
/// - [`UnsetElement`](Error::UnsetElement) - An accessor was called on the unset element
/// - [`WrongElementType`](Error::WrongElementType) - A payload of the wrong kind was requested
/// - [`EndOfFile`](Error::EndOfFile) - The buffer ended in the middle of an element
/// - [`InvalidTagType`](Error::InvalidTagType) - An unknown BSON type byte was encountered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An accessor was called on the unset element.
    ///
    /// The unset element is what lookups return when nothing matched. Only
    /// [`is_set`](crate::ElementView::is_set) and equality work on it.
    UnsetElement,

    /// A typed accessor was called on an element of a different type.
    WrongElementType { expected: Tag, actual: Tag },

    /// The input ended unexpectedly.
    ///
    /// The element header or payload extends past the end of the buffer.
    EndOfFile,

    /// An invalid BSON type byte was encountered.
    InvalidTagType(u8),

    /// A length prefix is negative or too small for its payload.
    InvalidLength(i32),

    /// A string payload is not terminated by a NUL byte.
    MissingTerminator,

    /// A key or string payload is not valid UTF-8.
    InvalidUtf8,

    /// A boolean payload holds something other than 0 or 1.
    InvalidBool(u8),

    /// The buffer's length prefix or trailing NUL does not match its extent.
    InvalidDocument,
}

impl Error {
    /// `true` for the errors raised while decoding bytes, as opposed to
    /// misuse of the accessor API.
    pub fn is_structural(&self) -> bool {
        !matches!(self, Error::UnsetElement | Error::WrongElementType { .. })
    }
}

impl Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::UnsetElement => formatter.write_str("cannot read from an unset element"),
            Error::WrongElementType { expected, actual } => {
                write!(formatter, "expected element of type {expected}, found {actual}")
            }
            Error::EndOfFile => formatter.write_str("unexpected end of input"),
            Error::InvalidTagType(tag) => write!(formatter, "invalid BSON type: {tag:#04x}"),
            Error::InvalidLength(len) => write!(formatter, "invalid length prefix: {len}"),
            Error::MissingTerminator => formatter.write_str("string is not NUL terminated"),
            Error::InvalidUtf8 => formatter.write_str("invalid UTF-8"),
            Error::InvalidBool(byte) => write!(formatter, "invalid boolean byte: {byte:#04x}"),
            Error::InvalidDocument => {
                formatter.write_str("document length prefix does not match its buffer")
            }
        }
    }
}

impl std::error::Error for Error {}
