use std::fmt;

use crate::{
    DocumentValue, ElementView, Error, Result, Tag, cold_path,
    util::{self, EMPTY_DOCUMENT, MIN_DOCUMENT_LEN},
};

/// A zero-copy view of a BSON document.
///
/// Holds the whole buffer: length prefix, elements and terminator. Nothing is
/// decoded up front; [`get`](DocumentView::get) scans the elements from the
/// start every time it is called.
///
/// A view over an empty slice is the *null* view. Every lookup on it yields
/// the unset element. The [`Default`] view is the empty document.
#[derive(Clone, Copy)]
pub struct DocumentView<'a> {
    data: &'a [u8],
}

impl Default for DocumentView<'_> {
    #[inline]
    fn default() -> Self {
        Self {
            data: &EMPTY_DOCUMENT,
        }
    }
}

impl<'a> DocumentView<'a> {
    /// Wraps `data` without looking at it.
    #[inline]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// Wraps `data` after checking the length prefix against the slice and
    /// the trailing terminator. Elements are still decoded lazily.
    pub fn from_slice(data: &'a [u8]) -> Result<Self> {
        if data.len() < MIN_DOCUMENT_LEN {
            cold_path();
            return Err(Error::EndOfFile);
        }
        let len = util::read_i32(data, 0)?;
        if len < 0 || len as usize != data.len() || data[data.len() - 1] != 0 {
            cold_path();
            return Err(Error::InvalidDocument);
        }
        Ok(Self { data })
    }

    /// The view over no buffer at all.
    #[inline]
    pub const fn null() -> Self {
        Self { data: &[] }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    /// Byte length of the buffer.
    #[inline]
    pub fn length(&self) -> u32 {
        self.data.len() as u32
    }

    #[inline]
    pub fn iter(&self) -> Iter<'a> {
        Iter::new(self.data)
    }

    /// The first element whose key equals `key`, or the unset element.
    #[inline]
    pub fn get(&self, key: &str) -> ElementView<'a> {
        self.find(key).unwrap_or_default()
    }

    /// The first element whose key equals `key`, byte for byte.
    pub fn find(&self, key: &str) -> Option<ElementView<'a>> {
        let key = key.as_bytes();
        self.iter().find(|element| {
            let start = element.offset() as usize + 1;
            self.data.get(start..start + element.keylen() as usize) == Some(key)
        })
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Number of elements. Walks the whole document.
    ///
    /// Counts only the elements before the first malformed one; use
    /// [`try_len`](DocumentView::try_len) to tell a short document from a
    /// damaged one.
    #[inline]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Number of elements, or the error that stopped the walk.
    pub fn try_len(&self) -> Result<usize> {
        let mut iter = self.iter();
        let len = iter.by_ref().count();
        match iter.error() {
            Some(error) => Err(error.clone()),
            None => Ok(len),
        }
    }

    /// `true` when no element precedes the terminator, or the first element
    /// is malformed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Copies the buffer into a [`DocumentValue`].
    #[inline]
    pub fn to_value(&self) -> DocumentValue {
        DocumentValue::new(*self)
    }
}

impl<'a> IntoIterator for DocumentView<'a> {
    type Item = ElementView<'a>;
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl PartialEq for DocumentView<'_> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl Eq for DocumentView<'_> {}

impl fmt::Debug for DocumentView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        let mut iter = self.iter();
        for element in iter.by_ref() {
            match (element.decode_key(), element.decode_value()) {
                (Ok(key), Ok(value)) => map.entry(&key, &value),
                (_, Err(error)) | (Err(error), _) => map.entry(&"<error>", &error),
            };
        }
        if let Some(error) = iter.error() {
            map.entry(&"<error>", error);
        }
        map.finish()
    }
}

/// Walks the elements of a document in stored order.
///
/// Iteration stops at the terminator, or at the first element whose header
/// or size cannot be decoded. In the second case the walk is incomplete and
/// [`error`](Iter::error) says why; callers that need every element must
/// check it once `next` returns `None`.
#[derive(Clone)]
pub struct Iter<'a> {
    data: &'a [u8],
    offset: usize,
    end: usize,
    error: Option<Error>,
}

impl<'a> Iter<'a> {
    fn new(data: &'a [u8]) -> Self {
        let (end, error) = if data.is_empty() {
            (0, None)
        } else {
            match util::read_i32(data, 0) {
                Ok(len) if len >= MIN_DOCUMENT_LEN as i32 => ((len as usize).min(data.len()), None),
                Ok(len) => (0, Some(Error::InvalidLength(len))),
                Err(error) => (0, Some(error)),
            }
        };
        Self {
            data,
            offset: 4,
            end,
            error,
        }
    }

    /// Why iteration ended early, if it did.
    ///
    /// `None` while elements remain and after a walk that reached the
    /// terminator.
    #[inline]
    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    fn advance(&mut self) -> Result<Option<ElementView<'a>>> {
        let bounded = &self.data[..self.end];
        let byte = bounded[self.offset];
        if byte == 0 {
            return Ok(None);
        }
        let tag = Tag::try_from(byte)?;
        let key = util::cstr(bounded, self.offset + 1)?;
        let at = self.offset + 1 + key.len() + 1;
        let size = util::payload_size(tag, bounded, at)?;
        let element = ElementView::new(self.data, self.offset as u32, key.len() as u32);
        self.offset = at + size;
        Ok(Some(element))
    }

    fn stop(&mut self, error: Error) {
        cold_path();
        tracing::debug!(offset = self.offset, %error, "stopping at malformed element");
        self.error = Some(error);
        self.offset = usize::MAX;
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = ElementView<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset == usize::MAX || self.error.is_some() {
            return None;
        }
        if self.offset >= self.end {
            // the buffer ran out before the terminator
            if self.end > 0 {
                self.stop(Error::EndOfFile);
            }
            return None;
        }
        match self.advance() {
            Ok(Some(element)) => Some(element),
            Ok(None) => {
                self.offset = usize::MAX;
                None
            }
            Err(error) => {
                self.stop(error);
                None
            }
        }
    }
}
