use std::fmt;

use crate::{ElementView, Owned};

/// An element that owns a copy of its parent buffer.
///
/// Built from an [`ElementView`] by copying every byte of the view's parent
/// buffer and remembering where the element sits in it, so
/// [`view`](ElementValue::view) yields an element that behaves exactly like
/// the source view but no longer depends on its buffer.
///
/// Cloning copies the buffer again; two values never share storage.
/// [`Default`] (and therefore `std::mem::take`) leaves a value holding no
/// buffer, whose view is the unset element.
#[derive(Clone, Default)]
pub struct ElementValue {
    raw: Option<Box<[u8]>>,
    offset: u32,
    keylen: u32,
}

impl ElementValue {
    pub fn new(view: ElementView<'_>) -> Self {
        if !view.is_set() {
            return Self::default();
        }
        tracing::trace!(len = view.length(), "copying element buffer");
        Self {
            raw: Some(Box::from(view.raw())),
            offset: view.offset(),
            keylen: view.keylen(),
        }
    }

    #[inline]
    pub fn view(&self) -> ElementView<'_> {
        match &self.raw {
            Some(raw) => ElementView::new(raw, self.offset, self.keylen),
            None => ElementView::unset(),
        }
    }

    /// `false` for a value built from the unset element or taken from.
    #[inline]
    pub fn is_set(&self) -> bool {
        self.raw.is_some()
    }
}

impl From<ElementView<'_>> for ElementValue {
    #[inline]
    fn from(view: ElementView<'_>) -> Self {
        Self::new(view)
    }
}

impl<'v> From<&'v ElementValue> for ElementView<'v> {
    #[inline]
    fn from(value: &'v ElementValue) -> Self {
        value.view()
    }
}

impl PartialEq for ElementValue {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.view() == other.view()
    }
}

impl fmt::Debug for ElementValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.view(), f)
    }
}

impl Owned for ElementValue {
    type View<'v> = ElementView<'v>;

    #[inline]
    fn view(&self) -> ElementView<'_> {
        ElementValue::view(self)
    }

    #[inline]
    fn from_view(view: ElementView<'_>) -> Self {
        Self::new(view)
    }

    #[inline]
    fn shorten<'s, 'l: 's>(view: ElementView<'l>) -> ElementView<'s> {
        view
    }
}
