use zerocopy::byteorder::{self, LittleEndian};

use crate::{Error, Result, Tag};

#[inline(always)]
#[cold]
pub(crate) fn cold_path() {}

/// The empty document: a length prefix of 5 followed by the terminator.
pub(crate) static EMPTY_DOCUMENT: [u8; 5] = [5, 0, 0, 0, 0];

/// Smallest valid document: length prefix plus terminator.
pub(crate) const MIN_DOCUMENT_LEN: usize = 5;

#[inline]
pub(crate) fn fixed<const N: usize>(data: &[u8], at: usize) -> Result<[u8; N]> {
    let end = at.checked_add(N).ok_or(Error::EndOfFile)?;
    match data.get(at..end) {
        Some(bytes) => bytes.try_into().map_err(|_| Error::EndOfFile),
        None => {
            cold_path();
            Err(Error::EndOfFile)
        }
    }
}

#[inline]
pub(crate) fn read_i32(data: &[u8], at: usize) -> Result<i32> {
    Ok(byteorder::I32::<LittleEndian>::from_bytes(fixed(data, at)?).get())
}

#[inline]
pub(crate) fn read_u32(data: &[u8], at: usize) -> Result<u32> {
    Ok(byteorder::U32::<LittleEndian>::from_bytes(fixed(data, at)?).get())
}

#[inline]
pub(crate) fn read_i64(data: &[u8], at: usize) -> Result<i64> {
    Ok(byteorder::I64::<LittleEndian>::from_bytes(fixed(data, at)?).get())
}

#[inline]
pub(crate) fn read_u64(data: &[u8], at: usize) -> Result<u64> {
    Ok(byteorder::U64::<LittleEndian>::from_bytes(fixed(data, at)?).get())
}

#[inline]
pub(crate) fn read_f64(data: &[u8], at: usize) -> Result<f64> {
    Ok(byteorder::F64::<LittleEndian>::from_bytes(fixed(data, at)?).get())
}

/// Reads a length prefix that must be at least `min`.
#[inline]
pub(crate) fn read_len(data: &[u8], at: usize, min: usize) -> Result<usize> {
    let len = read_i32(data, at)?;
    if len < 0 || (len as usize) < min {
        cold_path();
        return Err(Error::InvalidLength(len));
    }
    Ok(len as usize)
}

/// Returns `data[at..end]` or `EndOfFile`.
#[inline]
pub(crate) fn span(data: &[u8], at: usize, len: usize) -> Result<&[u8]> {
    let end = at.checked_add(len).ok_or(Error::EndOfFile)?;
    data.get(at..end).ok_or(Error::EndOfFile)
}

/// The bytes of a NUL-terminated string starting at `at`, without the NUL.
#[inline]
pub(crate) fn cstr(data: &[u8], at: usize) -> Result<&[u8]> {
    let rest = data.get(at..).ok_or(Error::EndOfFile)?;
    match rest.iter().position(|&b| b == 0) {
        Some(nul) => Ok(&rest[..nul]),
        None => {
            cold_path();
            Err(Error::MissingTerminator)
        }
    }
}

#[inline]
pub(crate) fn utf8(bytes: &[u8]) -> Result<&str> {
    std::str::from_utf8(bytes).map_err(|_| Error::InvalidUtf8)
}

/// A length-prefixed, NUL-terminated string (utf8, code, symbol).
///
/// Returns the text and the full size of the payload, prefix included.
#[inline]
pub(crate) fn string(data: &[u8], at: usize) -> Result<(&str, usize)> {
    let len = read_len(data, at, 1)?;
    let bytes = span(data, at + 4, len)?;
    let (text, nul) = bytes.split_at(len - 1);
    if nul != [0] {
        cold_path();
        return Err(Error::MissingTerminator);
    }
    Ok((utf8(text)?, 4 + len))
}

/// Size in bytes of the payload of a `tag` element starting at `at`.
///
/// Only the fields needed to find the end of the payload are read; the
/// payload itself is not validated.
pub(crate) fn payload_size(tag: Tag, data: &[u8], at: usize) -> Result<usize> {
    let size = match tag {
        Tag::Double | Tag::Date | Tag::Timestamp | Tag::Int64 => 8,
        Tag::Utf8 | Tag::Code | Tag::Symbol => 4 + read_len(data, at, 1)?,
        Tag::Document | Tag::Array => read_len(data, at, MIN_DOCUMENT_LEN)?,
        Tag::Binary => 4 + 1 + read_len(data, at, 0)?,
        Tag::Undefined | Tag::Null | Tag::MinKey | Tag::MaxKey => 0,
        Tag::Oid => 12,
        Tag::Bool => 1,
        Tag::Regex => {
            let pattern = cstr(data, at)?.len() + 1;
            pattern + cstr(data, at + pattern)?.len() + 1
        }
        Tag::DbPointer => 4 + read_len(data, at, 1)? + 12,
        // total length, string, scope document
        Tag::CodeWithScope => read_len(data, at, 4 + 5 + MIN_DOCUMENT_LEN)?,
        Tag::Int32 => 4,
        Tag::Decimal128 => 16,
    };
    span(data, at, size)?;
    Ok(size)
}

/// Compares two strings, tolerating a single trailing NUL on either side.
///
/// Strings of equal length must match exactly. When the lengths differ by
/// one, the longer string must end in NUL and start with the shorter one.
/// Any larger difference in length never compares equal.
///
/// ```
/// use na_bson::null_blind_eq;
///
/// assert!(null_blind_eq("abc", "abc\0"));
/// assert!(null_blind_eq("abc\0", "abc"));
/// assert!(!null_blind_eq("abc", "abd\0"));
/// assert!(!null_blind_eq("ab", "abcd"));
/// ```
pub fn null_blind_eq(lhs: impl AsRef<[u8]>, rhs: impl AsRef<[u8]>) -> bool {
    let (lhs, rhs) = (lhs.as_ref(), rhs.as_ref());
    let (shorter, longer) = if lhs.len() <= rhs.len() {
        (lhs, rhs)
    } else {
        (rhs, lhs)
    };
    match longer.len() - shorter.len() {
        0 => lhs == rhs,
        1 => longer.last() == Some(&0) && longer.starts_with(shorter),
        _ => false,
    }
}
