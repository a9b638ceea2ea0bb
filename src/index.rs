mod private {
    pub trait Sealed {}
    impl Sealed for usize {}
    impl Sealed for str {}
    impl Sealed for String {}
    impl<T> Sealed for &T where T: ?Sized + Sealed {}
}

/// A key usable with [`ElementView::get`](crate::ElementView::get): an
/// integer position into an array or a string key into a document.
///
/// Sealed; implemented for `usize`, `str` and `String`, and references to
/// them.
///
/// ```
/// use na_bson::DocumentView;
///
/// // {"list": [10, 20]}
/// let bytes = [
///     30, 0, 0, 0, 0x04, b'l', b'i', b's', b't', 0, //
///     19, 0, 0, 0, 0x10, b'0', 0, 10, 0, 0, 0, 0x10, b'1', 0, 20, 0, 0, 0, 0, //
///     0,
/// ];
/// let doc = DocumentView::new(&bytes);
///
/// let position: usize = 1;
/// let key = String::from("list");
/// assert_eq!(doc.get("list").get(1).get_int32(), Ok(20));
/// assert_eq!(doc.get(&key).get(position).get_int32(), Ok(20));
/// // a string key into an array misses
/// assert!(!doc.get("list").get("1").is_set());
/// ```
pub trait Index: private::Sealed {
    #[doc(hidden)]
    fn index_dispatch<'a, V, R>(
        &self,
        value: &'a V,
        n: impl FnOnce(&'a V, usize) -> R,
        s: impl FnOnce(&'a V, &str) -> R,
    ) -> R;
}

impl Index for usize {
    #[inline]
    fn index_dispatch<'a, V, R>(
        &self,
        value: &'a V,
        n: impl FnOnce(&'a V, usize) -> R,
        _: impl FnOnce(&'a V, &str) -> R,
    ) -> R {
        n(value, *self)
    }
}

impl Index for str {
    #[inline]
    fn index_dispatch<'a, V, R>(
        &self,
        value: &'a V,
        _: impl FnOnce(&'a V, usize) -> R,
        s: impl FnOnce(&'a V, &str) -> R,
    ) -> R {
        s(value, self)
    }
}

impl Index for String {
    #[inline]
    fn index_dispatch<'a, V, R>(
        &self,
        value: &'a V,
        _: impl FnOnce(&'a V, usize) -> R,
        s: impl FnOnce(&'a V, &str) -> R,
    ) -> R {
        s(value, self.as_str())
    }
}

impl<T: ?Sized + Index> Index for &T {
    #[inline]
    fn index_dispatch<'a, V, R>(
        &self,
        value: &'a V,
        n: impl FnOnce(&'a V, usize) -> R,
        s: impl FnOnce(&'a V, &str) -> R,
    ) -> R {
        (**self).index_dispatch(value, n, s)
    }
}
