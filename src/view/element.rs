use std::fmt;

use crate::{
    ArrayView, BinarySubtype, BsonRef, DocumentView, ElementValue, Error, Result, Tag, cold_path,
    diagnostic,
    index::Index,
    types::{Binary, CodeWithScope, Date, DbPointer, Decimal128, ObjectId, Regex, Timestamp},
    util,
};

/// A zero-copy view of one key/value pair inside a BSON buffer.
///
/// An element is either *set*, pointing at a real element of its parent
/// document, or the *unset* sentinel returned when a lookup finds nothing.
/// [`get`](ElementView::get) is lenient and returns the sentinel on any miss,
/// so lookups chain; every other accessor fails on the sentinel with
/// [`Error::UnsetElement`] and on a kind mismatch with
/// [`Error::WrongElementType`].
///
/// The bytes are only decoded when an accessor asks for them, so a malformed
/// payload is reported by the accessor that reads it.
#[derive(Clone, Copy, Default)]
pub struct ElementView<'a> {
    raw: Option<&'a [u8]>,
    offset: u32,
    keylen: u32,
}

impl<'a> ElementView<'a> {
    /// `raw` is the whole parent document; `offset` points at the type byte.
    #[inline]
    pub(crate) fn new(raw: &'a [u8], offset: u32, keylen: u32) -> Self {
        Self {
            raw: Some(raw),
            offset,
            keylen,
        }
    }

    /// The unset sentinel.
    #[inline]
    pub const fn unset() -> Self {
        Self {
            raw: None,
            offset: 0,
            keylen: 0,
        }
    }

    /// `true` if this view references element data.
    ///
    /// A set element may still hold the BSON `null` value.
    #[inline]
    pub fn is_set(&self) -> bool {
        self.raw.is_some()
    }

    /// The parent buffer this element lives in; empty when unset.
    #[inline]
    pub fn raw(&self) -> &'a [u8] {
        self.raw.unwrap_or_default()
    }

    /// Byte length of the parent buffer.
    #[inline]
    pub fn length(&self) -> u32 {
        self.raw().len() as u32
    }

    /// Offset of this element's type byte within the parent buffer.
    #[inline]
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Byte length of the key, without its terminator.
    #[inline]
    pub fn keylen(&self) -> u32 {
        self.keylen
    }

    #[inline]
    fn value_offset(&self) -> usize {
        self.offset as usize + 1 + self.keylen as usize + 1
    }

    #[inline]
    fn header(&self) -> Result<(&'a [u8], Tag)> {
        let Some(raw) = self.raw else {
            cold_path();
            return Err(Error::UnsetElement);
        };
        let byte = *raw.get(self.offset as usize).ok_or(Error::EndOfFile)?;
        Ok((raw, Tag::try_from(byte)?))
    }

    /// The kind of this element.
    #[inline]
    pub fn tag(&self) -> Result<Tag> {
        self.header()
            .map(|(_, tag)| tag)
            .map_err(diagnostic::report)
    }

    /// The element's key, borrowed from the buffer.
    pub fn key(&self) -> Result<&'a str> {
        self.decode_key().map_err(diagnostic::report)
    }

    pub(crate) fn decode_key(&self) -> Result<&'a str> {
        let Some(raw) = self.raw else {
            cold_path();
            return Err(Error::UnsetElement);
        };
        util::span(raw, self.offset as usize + 1, self.keylen as usize).and_then(util::utf8)
    }

    /// The bytes of the whole element: type byte, key and payload.
    pub fn raw_element(&self) -> Result<&'a [u8]> {
        self.element_bytes().map_err(diagnostic::report)
    }

    fn element_bytes(&self) -> Result<&'a [u8]> {
        let (raw, tag) = self.header()?;
        let at = self.value_offset();
        let size = util::payload_size(tag, raw, at)?;
        Ok(&raw[self.offset as usize..at + size])
    }

    /// The parent buffer and the payload offset, if the tag is `expected`.
    #[inline]
    fn payload(&self, expected: Tag) -> Result<(&'a [u8], usize)> {
        let (raw, actual) = self.header()?;
        if actual != expected {
            cold_path();
            return Err(Error::WrongElementType { expected, actual });
        }
        Ok((raw, self.value_offset()))
    }

    /// Checks the tag, then decodes the payload with `read`.
    #[inline]
    fn read<T>(&self, expected: Tag, read: impl FnOnce(&'a [u8], usize) -> Result<T>) -> Result<T> {
        self.payload(expected)
            .and_then(|(raw, at)| read(raw, at))
            .map_err(diagnostic::report)
    }

    pub fn get_double(&self) -> Result<f64> {
        self.read(Tag::Double, util::read_f64)
    }

    pub fn get_utf8(&self) -> Result<&'a str> {
        self.read(Tag::Utf8, read_string)
    }

    pub fn get_document(&self) -> Result<DocumentView<'a>> {
        self.read(Tag::Document, read_document)
    }

    pub fn get_array(&self) -> Result<ArrayView<'a>> {
        self.read(Tag::Array, read_array)
    }

    /// The binary payload, borrowing the parent buffer.
    ///
    /// For the deprecated subtype 0x02 the redundant inner length is
    /// stripped when it agrees with the outer one.
    pub fn get_binary(&self) -> Result<Binary<'a>> {
        self.read(Tag::Binary, read_binary)
    }

    pub fn get_undefined(&self) -> Result<()> {
        self.read(Tag::Undefined, |_, _| Ok(()))
    }

    pub fn get_oid(&self) -> Result<ObjectId> {
        self.read(Tag::Oid, read_oid)
    }

    pub fn get_bool(&self) -> Result<bool> {
        self.read(Tag::Bool, read_bool)
    }

    pub fn get_date(&self) -> Result<Date> {
        self.read(Tag::Date, |raw, at| Ok(Date(util::read_i64(raw, at)?)))
    }

    pub fn get_null(&self) -> Result<()> {
        self.read(Tag::Null, |_, _| Ok(()))
    }

    pub fn get_regex(&self) -> Result<Regex<'a>> {
        self.read(Tag::Regex, read_regex)
    }

    pub fn get_dbpointer(&self) -> Result<DbPointer<'a>> {
        self.read(Tag::DbPointer, read_dbpointer)
    }

    pub fn get_code(&self) -> Result<&'a str> {
        self.read(Tag::Code, read_string)
    }

    pub fn get_symbol(&self) -> Result<&'a str> {
        self.read(Tag::Symbol, read_string)
    }

    pub fn get_codewscope(&self) -> Result<CodeWithScope<'a>> {
        self.read(Tag::CodeWithScope, read_codewscope)
    }

    pub fn get_int32(&self) -> Result<i32> {
        self.read(Tag::Int32, util::read_i32)
    }

    pub fn get_timestamp(&self) -> Result<Timestamp> {
        self.read(Tag::Timestamp, read_timestamp)
    }

    pub fn get_int64(&self) -> Result<i64> {
        self.read(Tag::Int64, util::read_i64)
    }

    pub fn get_decimal128(&self) -> Result<Decimal128> {
        self.read(Tag::Decimal128, read_decimal128)
    }

    pub fn get_minkey(&self) -> Result<()> {
        self.read(Tag::MinKey, |_, _| Ok(()))
    }

    pub fn get_maxkey(&self) -> Result<()> {
        self.read(Tag::MaxKey, |_, _| Ok(()))
    }

    /// Decodes the payload whatever its kind.
    pub fn get_value(&self) -> Result<BsonRef<'a>> {
        self.decode_value().map_err(diagnostic::report)
    }

    pub(crate) fn decode_value(&self) -> Result<BsonRef<'a>> {
        let (raw, tag) = self.header()?;
        let at = self.value_offset();
        Ok(match tag {
            Tag::Double => BsonRef::Double(util::read_f64(raw, at)?),
            Tag::Utf8 => BsonRef::Utf8(read_string(raw, at)?),
            Tag::Document => BsonRef::Document(read_document(raw, at)?),
            Tag::Array => BsonRef::Array(read_array(raw, at)?),
            Tag::Binary => BsonRef::Binary(read_binary(raw, at)?),
            Tag::Undefined => BsonRef::Undefined,
            Tag::Oid => BsonRef::Oid(read_oid(raw, at)?),
            Tag::Bool => BsonRef::Bool(read_bool(raw, at)?),
            Tag::Date => BsonRef::Date(Date(util::read_i64(raw, at)?)),
            Tag::Null => BsonRef::Null,
            Tag::Regex => BsonRef::Regex(read_regex(raw, at)?),
            Tag::DbPointer => BsonRef::DbPointer(read_dbpointer(raw, at)?),
            Tag::Code => BsonRef::Code(read_string(raw, at)?),
            Tag::Symbol => BsonRef::Symbol(read_string(raw, at)?),
            Tag::CodeWithScope => BsonRef::CodeWithScope(read_codewscope(raw, at)?),
            Tag::Int32 => BsonRef::Int32(util::read_i32(raw, at)?),
            Tag::Timestamp => BsonRef::Timestamp(read_timestamp(raw, at)?),
            Tag::Int64 => BsonRef::Int64(util::read_i64(raw, at)?),
            Tag::Decimal128 => BsonRef::Decimal128(read_decimal128(raw, at)?),
            Tag::MinKey => BsonRef::MinKey,
            Tag::MaxKey => BsonRef::MaxKey,
        })
    }

    /// Looks up a key of a document element or a position of an array
    /// element.
    ///
    /// Never fails: an unset element, a missing entry, or an element of any
    /// other kind all yield the unset sentinel.
    ///
    /// ```
    /// use na_bson::DocumentView;
    ///
    /// // {"a": {"b": 7}}
    /// let bytes = [
    ///     20, 0, 0, 0, 0x03, b'a', 0, 12, 0, 0, 0, 0x10, b'b', 0, 7, 0, 0, 0, 0, 0,
    /// ];
    /// let doc = DocumentView::new(&bytes);
    /// assert_eq!(doc.get("a").get("b").get_int32(), Ok(7));
    /// assert!(!doc.get("a").get("b").get("c").is_set());
    /// assert!(!doc.get("a").get(0).is_set());
    /// ```
    #[inline]
    pub fn get<I: Index>(&self, index: I) -> ElementView<'a> {
        index.index_dispatch(
            self,
            |value, index| {
                value
                    .payload(Tag::Array)
                    .and_then(|(raw, at)| read_array(raw, at))
                    .map(|array| array.get(index))
                    .unwrap_or_default()
            },
            |value, key| {
                value
                    .payload(Tag::Document)
                    .and_then(|(raw, at)| read_document(raw, at))
                    .map(|document| document.get(key))
                    .unwrap_or_default()
            },
        )
    }

    /// Copies the parent buffer into an [`ElementValue`].
    #[inline]
    pub fn to_value(&self) -> ElementValue {
        ElementValue::new(*self)
    }
}

/// A nested document or array payload: a length-prefixed buffer.
#[inline]
fn read_document(raw: &[u8], at: usize) -> Result<DocumentView<'_>> {
    let len = util::read_len(raw, at, util::MIN_DOCUMENT_LEN)?;
    let bytes = util::span(raw, at, len)?;
    if bytes[len - 1] != 0 {
        cold_path();
        return Err(Error::InvalidDocument);
    }
    Ok(DocumentView::new(bytes))
}

#[inline]
fn read_array(raw: &[u8], at: usize) -> Result<ArrayView<'_>> {
    read_document(raw, at).map(ArrayView::from_document)
}

#[inline]
fn read_string(raw: &[u8], at: usize) -> Result<&str> {
    util::string(raw, at).map(|(text, _)| text)
}

fn read_binary(raw: &[u8], at: usize) -> Result<Binary<'_>> {
    let len = util::read_len(raw, at, 0)?;
    let subtype = BinarySubtype::from(*raw.get(at + 4).ok_or(Error::EndOfFile)?);
    let bytes = util::span(raw, at + 5, len)?;
    if subtype == BinarySubtype::BinaryOld && len >= 4 {
        let inner = util::read_i32(bytes, 0)?;
        if inner >= 0 && inner as usize == len - 4 {
            return Ok(Binary::borrowed(subtype, &bytes[4..]));
        }
    }
    Ok(Binary::borrowed(subtype, bytes))
}

#[inline]
fn read_oid(raw: &[u8], at: usize) -> Result<ObjectId> {
    Ok(ObjectId::from_bytes(util::fixed(raw, at)?))
}

#[inline]
fn read_bool(raw: &[u8], at: usize) -> Result<bool> {
    match *raw.get(at).ok_or(Error::EndOfFile)? {
        0 => Ok(false),
        1 => Ok(true),
        byte => Err(Error::InvalidBool(byte)),
    }
}

fn read_regex(raw: &[u8], at: usize) -> Result<Regex<'_>> {
    let pattern = util::cstr(raw, at)?;
    let options = util::cstr(raw, at + pattern.len() + 1)?;
    Ok(Regex {
        pattern: util::utf8(pattern)?,
        options: util::utf8(options)?,
    })
}

fn read_dbpointer(raw: &[u8], at: usize) -> Result<DbPointer<'_>> {
    let (collection, size) = util::string(raw, at)?;
    Ok(DbPointer {
        collection,
        oid: read_oid(raw, at + size)?,
    })
}

fn read_codewscope(raw: &[u8], at: usize) -> Result<CodeWithScope<'_>> {
    let total = util::read_len(raw, at, 4 + 5 + util::MIN_DOCUMENT_LEN)?;
    // both parts must fit inside the declared total
    let payload = util::span(raw, at, total)?;
    let (code, code_size) = util::string(payload, 4)?;
    let scope = read_document(payload, 4 + code_size)?;
    if 4 + code_size + scope.as_bytes().len() != total {
        cold_path();
        return Err(Error::InvalidLength(total as i32));
    }
    Ok(CodeWithScope { code, scope })
}

#[inline]
fn read_timestamp(raw: &[u8], at: usize) -> Result<Timestamp> {
    Ok(Timestamp {
        increment: util::read_u32(raw, at)?,
        timestamp: util::read_u32(raw, at + 4)?,
    })
}

#[inline]
fn read_decimal128(raw: &[u8], at: usize) -> Result<Decimal128> {
    Ok(Decimal128 {
        low: util::read_u64(raw, at)?,
        high: util::read_u64(raw, at + 8)?,
    })
}

impl PartialEq for ElementView<'_> {
    /// Unset elements are equal to each other; set elements are equal when
    /// their key and payload bytes are.
    fn eq(&self, other: &Self) -> bool {
        match (self.is_set(), other.is_set()) {
            (false, false) => true,
            (true, true) => match (self.element_bytes(), other.element_bytes()) {
                (Ok(lhs), Ok(rhs)) => lhs == rhs,
                _ => false,
            },
            _ => false,
        }
    }
}

impl fmt::Debug for ElementView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_set() {
            return f.write_str("ElementView(unset)");
        }
        match (self.decode_key(), self.decode_value()) {
            (Ok(key), Ok(value)) => f.debug_tuple("ElementView").field(&key).field(&value).finish(),
            (_, Err(error)) | (Err(error), _) => write!(f, "ElementView(<{error}>)"),
        }
    }
}
