use std::fmt;

use crate::{
    ArrayValue, ArrayView, DocumentValue, DocumentView, ElementValue, ElementView,
};

/// An owning type that can hand out a view over its own storage.
pub trait Owned: Clone + 'static {
    type View<'v>: Copy
    where
        Self: 'v;

    fn view(&self) -> Self::View<'_>;

    /// Copies the bytes a view points at.
    fn from_view(view: Self::View<'_>) -> Self;

    /// Narrows the lifetime of a view.
    fn shorten<'s, 'l: 's>(view: Self::View<'l>) -> Self::View<'s>;
}

/// Either a view into someone else's buffer or a value owning its own.
///
/// Lets an API take "a view you keep alive, or a value you hand over" through
/// one parameter (`impl Into<DocumentViewOrValue<'a>>`) and always read it
/// through [`view`](ViewOrValue::view).
///
/// Cloning the borrowed case copies the view; cloning the owned case copies
/// the bytes, and the clone's view points at the new copy.
pub enum ViewOrValue<'a, V: Owned> {
    View(V::View<'a>),
    Value(V),
}

pub type DocumentViewOrValue<'a> = ViewOrValue<'a, DocumentValue>;
pub type ArrayViewOrValue<'a> = ViewOrValue<'a, ArrayValue>;
pub type ElementViewOrValue<'a> = ViewOrValue<'a, ElementValue>;

impl<'a, V: Owned> ViewOrValue<'a, V> {
    /// A view over whichever storage is held.
    #[inline]
    pub fn view(&self) -> V::View<'_> {
        match self {
            ViewOrValue::View(view) => V::shorten(*view),
            ViewOrValue::Value(value) => value.view(),
        }
    }

    #[inline]
    pub fn is_owned(&self) -> bool {
        matches!(self, ViewOrValue::Value(_))
    }

    /// The owned value, copying the bytes if only a view is held.
    #[inline]
    pub fn into_owned(self) -> V {
        match self {
            ViewOrValue::View(view) => V::from_view(view),
            ViewOrValue::Value(value) => value,
        }
    }
}

impl<'a, V: Owned> Clone for ViewOrValue<'a, V> {
    #[inline]
    fn clone(&self) -> Self {
        match self {
            ViewOrValue::View(view) => ViewOrValue::View(*view),
            ViewOrValue::Value(value) => ViewOrValue::Value(value.clone()),
        }
    }
}

impl<'a, V: Owned> From<V> for ViewOrValue<'a, V> {
    #[inline]
    fn from(value: V) -> Self {
        ViewOrValue::Value(value)
    }
}

macro_rules! from_view {
    ($view:ident, $value:ident) => {
        impl<'a> From<$view<'a>> for ViewOrValue<'a, $value> {
            #[inline]
            fn from(view: $view<'a>) -> Self {
                ViewOrValue::View(view)
            }
        }

        impl<'a> From<&'a $value> for ViewOrValue<'a, $value> {
            #[inline]
            fn from(value: &'a $value) -> Self {
                ViewOrValue::View(value.view())
            }
        }

        impl<'a> PartialEq for ViewOrValue<'a, $value> {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                self.view() == other.view()
            }
        }

        impl<'a> fmt::Debug for ViewOrValue<'a, $value> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Debug::fmt(&self.view(), f)
            }
        }
    };
}

from_view!(DocumentView, DocumentValue);
from_view!(ArrayView, ArrayValue);
from_view!(ElementView, ElementValue);
