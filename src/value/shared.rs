use std::fmt;

use bytes::Bytes;

use crate::{DocumentValue, DocumentView, Result};

/// A document whose buffer is shared by reference counting.
///
/// Unlike [`DocumentValue`], cloning a `SharedDocument` does not copy: all
/// clones view the same immutable bytes, released when the last clone drops.
/// Use it to fan one received buffer out to several consumers.
#[derive(Clone, PartialEq, Eq)]
pub struct SharedDocument {
    source: Bytes,
}

impl SharedDocument {
    /// Wraps `source` after checking its length prefix and terminator.
    pub fn from_bytes(source: Bytes) -> Result<Self> {
        DocumentView::from_slice(&source)?;
        Ok(Self { source })
    }

    #[inline]
    pub fn view(&self) -> DocumentView<'_> {
        DocumentView::new(&self.source)
    }

    #[inline]
    pub fn as_bytes(&self) -> &Bytes {
        &self.source
    }

    #[inline]
    pub fn into_bytes(self) -> Bytes {
        self.source
    }

    /// Copies the bytes into a value that owns them exclusively.
    #[inline]
    pub fn to_value(&self) -> DocumentValue {
        DocumentValue::new(self.view())
    }
}

impl From<DocumentValue> for SharedDocument {
    /// Moves the buffer of `value` into shared storage without copying.
    #[inline]
    fn from(value: DocumentValue) -> Self {
        Self {
            source: Bytes::from(value.into_bytes()),
        }
    }
}

impl fmt::Debug for SharedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.view(), f)
    }
}
