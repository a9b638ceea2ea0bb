use std::fmt;

use crate::{ArrayView, DocumentView, Owned, Result};

/// A document that owns its buffer.
///
/// Cloning copies the buffer; two values never share storage. The
/// [`Default`] value holds no buffer and views as the null document.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct DocumentValue {
    data: Box<[u8]>,
}

impl DocumentValue {
    /// Copies the bytes of `view`.
    pub fn new(view: DocumentView<'_>) -> Self {
        tracing::trace!(len = view.length(), "copying document buffer");
        Self {
            data: Box::from(view.as_bytes()),
        }
    }

    /// Adopts `data` after checking its length prefix and terminator.
    pub fn from_vec(data: Vec<u8>) -> Result<Self> {
        DocumentView::from_slice(&data)?;
        Ok(Self {
            data: data.into_boxed_slice(),
        })
    }

    #[inline]
    pub fn view(&self) -> DocumentView<'_> {
        DocumentView::new(&self.data)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Releases the buffer.
    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.data.into_vec()
    }
}

impl From<DocumentView<'_>> for DocumentValue {
    #[inline]
    fn from(view: DocumentView<'_>) -> Self {
        Self::new(view)
    }
}

impl TryFrom<Vec<u8>> for DocumentValue {
    type Error = crate::Error;

    #[inline]
    fn try_from(data: Vec<u8>) -> Result<Self> {
        Self::from_vec(data)
    }
}

impl<'v> From<&'v DocumentValue> for DocumentView<'v> {
    #[inline]
    fn from(value: &'v DocumentValue) -> Self {
        value.view()
    }
}

impl fmt::Debug for DocumentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.view(), f)
    }
}

impl Owned for DocumentValue {
    type View<'v> = DocumentView<'v>;

    #[inline]
    fn view(&self) -> DocumentView<'_> {
        DocumentValue::view(self)
    }

    #[inline]
    fn from_view(view: DocumentView<'_>) -> Self {
        Self::new(view)
    }

    #[inline]
    fn shorten<'s, 'l: 's>(view: DocumentView<'l>) -> DocumentView<'s> {
        view
    }
}

/// An array that owns its buffer.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ArrayValue {
    doc: DocumentValue,
}

impl ArrayValue {
    /// Copies the bytes of `view`.
    #[inline]
    pub fn new(view: ArrayView<'_>) -> Self {
        Self {
            doc: DocumentValue::new(view.as_document()),
        }
    }

    /// Adopts `data` after checking its length prefix and terminator.
    #[inline]
    pub fn from_vec(data: Vec<u8>) -> Result<Self> {
        DocumentValue::from_vec(data).map(|doc| Self { doc })
    }

    #[inline]
    pub fn view(&self) -> ArrayView<'_> {
        ArrayView::from_document(self.doc.view())
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.doc.as_bytes()
    }

    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.doc.into_bytes()
    }
}

impl From<ArrayView<'_>> for ArrayValue {
    #[inline]
    fn from(view: ArrayView<'_>) -> Self {
        Self::new(view)
    }
}

impl<'v> From<&'v ArrayValue> for ArrayView<'v> {
    #[inline]
    fn from(value: &'v ArrayValue) -> Self {
        value.view()
    }
}

impl fmt::Debug for ArrayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.view(), f)
    }
}

impl Owned for ArrayValue {
    type View<'v> = ArrayView<'v>;

    #[inline]
    fn view(&self) -> ArrayView<'_> {
        ArrayValue::view(self)
    }

    #[inline]
    fn from_view(view: ArrayView<'_>) -> Self {
        Self::new(view)
    }

    #[inline]
    fn shorten<'s, 'l: 's>(view: ArrayView<'l>) -> ArrayView<'s> {
        view
    }
}
