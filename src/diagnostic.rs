//! Process-wide hook observing accessor errors.
//!
//! Nothing is captured unless a hook is installed. A hook can record a
//! backtrace, bump a counter or log; it must not panic.
//!
//! ```
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! static SEEN: AtomicUsize = AtomicUsize::new(0);
//!
//! let installed = na_bson::diagnostic::set_error_hook(|_error| {
//!     SEEN.fetch_add(1, Ordering::Relaxed);
//! });
//! assert!(installed.is_ok());
//!
//! let _ = na_bson::ElementView::unset().tag();
//! assert!(SEEN.load(Ordering::Relaxed) >= 1);
//! ```

use once_cell::sync::OnceCell;

use crate::Error;

pub type ErrorHook = Box<dyn Fn(&Error) + Send + Sync + 'static>;

static HOOK: OnceCell<ErrorHook> = OnceCell::new();

/// Installs the error hook. Only the first call succeeds; the rejected hook
/// is handed back.
pub fn set_error_hook<F>(hook: F) -> Result<(), ErrorHook>
where
    F: Fn(&Error) + Send + Sync + 'static,
{
    HOOK.set(Box::new(hook))
}

/// Returns `true` once a hook has been installed.
pub fn has_error_hook() -> bool {
    HOOK.get().is_some()
}

/// Passes `error` through the installed hook, if any.
#[inline]
pub(crate) fn report(error: Error) -> Error {
    if let Some(hook) = HOOK.get() {
        hook(&error);
    }
    error
}
