use std::borrow::Cow;

use crate::BinarySubtype;

/// The payload of a binary element.
///
/// Read from a view, the bytes borrow the parent buffer. Built by an owning
/// operation (see [`Binary::owned`] and [`Binary::set_owned_buffer`]), the
/// bytes live in their own allocation: cloning allocates a fresh copy and
/// dropping frees it once. Moving never copies.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Binary<'a> {
    pub subtype: BinarySubtype,
    bytes: Cow<'a, [u8]>,
}

impl<'a> Binary<'a> {
    #[inline]
    pub fn borrowed(subtype: BinarySubtype, bytes: &'a [u8]) -> Self {
        Self {
            subtype,
            bytes: Cow::Borrowed(bytes),
        }
    }

    #[inline]
    pub fn owned(subtype: BinarySubtype, bytes: Vec<u8>) -> Binary<'static> {
        Binary {
            subtype,
            bytes: Cow::Owned(bytes),
        }
    }

    /// Whether the bytes are held in an allocation of their own.
    #[inline]
    pub fn is_owned(&self) -> bool {
        matches!(self.bytes, Cow::Owned(_))
    }

    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Replaces the payload with `bytes`, releasing any buffer owned before.
    #[inline]
    pub fn set_owned_buffer(&mut self, bytes: Vec<u8>) {
        self.bytes = Cow::Owned(bytes);
    }

    /// Detaches the payload from the parent buffer, copying if borrowed.
    #[inline]
    pub fn into_owned(self) -> Binary<'static> {
        Binary {
            subtype: self.subtype,
            bytes: Cow::Owned(self.bytes.into_owned()),
        }
    }

    /// Takes the bytes out, copying if borrowed.
    #[inline]
    pub fn into_vec(self) -> Vec<u8> {
        self.bytes.into_owned()
    }
}

impl AsRef<[u8]> for Binary<'_> {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
