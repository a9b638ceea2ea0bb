use std::fmt;

use crate::{ArrayValue, DocumentView, ElementView, Error, Result, view::document};

/// A zero-copy view of a BSON array.
///
/// On the wire an array is a document whose keys are the decimal positions
/// `"0"`, `"1"`, ... . [`get`](ArrayView::get) looks the position up by key,
/// so an array whose keys are out of order still resolves by key.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct ArrayView<'a> {
    doc: DocumentView<'a>,
}

impl<'a> ArrayView<'a> {
    /// Wraps `data` without looking at it.
    #[inline]
    pub const fn new(data: &'a [u8]) -> Self {
        Self {
            doc: DocumentView::new(data),
        }
    }

    /// Wraps `data` after checking the length prefix and terminator.
    #[inline]
    pub fn from_slice(data: &'a [u8]) -> Result<Self> {
        DocumentView::from_slice(data).map(Self::from_document)
    }

    #[inline]
    pub const fn from_document(doc: DocumentView<'a>) -> Self {
        Self { doc }
    }

    /// The same bytes seen as a document keyed by position strings.
    #[inline]
    pub const fn as_document(&self) -> DocumentView<'a> {
        self.doc
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        self.doc.is_null()
    }

    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.doc.as_bytes()
    }

    #[inline]
    pub fn length(&self) -> u32 {
        self.doc.length()
    }

    /// The element stored under key `index`, or the unset element.
    #[inline]
    pub fn get(&self, index: usize) -> ElementView<'a> {
        let mut buffer = itoa::Buffer::new();
        self.doc.get(buffer.format(index))
    }

    #[inline]
    pub fn iter(&self) -> Iter<'a> {
        Iter {
            inner: self.doc.iter(),
        }
    }

    /// Number of elements. Walks the whole array and, like
    /// [`DocumentView::len`], stops counting at a malformed element.
    #[inline]
    pub fn len(&self) -> usize {
        self.doc.len()
    }

    #[inline]
    pub fn try_len(&self) -> Result<usize> {
        self.doc.try_len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.doc.is_empty()
    }

    /// Copies the buffer into an [`ArrayValue`].
    #[inline]
    pub fn to_value(&self) -> ArrayValue {
        ArrayValue::new(*self)
    }
}

impl<'a> IntoIterator for ArrayView<'a> {
    type Item = ElementView<'a>;
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for ArrayView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        let mut iter = self.iter();
        for element in iter.by_ref() {
            match element.decode_value() {
                Ok(value) => list.entry(&value),
                Err(error) => list.entry(&error),
            };
        }
        if let Some(error) = iter.error() {
            list.entry(error);
        }
        list.finish()
    }
}

/// Walks the elements of an array in stored order.
#[derive(Clone)]
pub struct Iter<'a> {
    inner: document::Iter<'a>,
}

impl Iter<'_> {
    /// Why iteration ended early, if it did.
    #[inline]
    pub fn error(&self) -> Option<&Error> {
        self.inner.error()
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = ElementView<'a>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}
