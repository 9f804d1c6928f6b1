//! Shared record handles with identity semantics.
//!
//! A [`Record<S>`] is the grid's view of one caller-owned domain object. Two
//! handles are equal only if they point at the same allocation; two records
//! holding equal values are still different rows.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A shared, identity-compared handle to a domain record.
///
/// Cloning the handle is cheap and yields the same identity.
///
/// # Example
///
/// ```
/// use horizon_grid::Record;
///
/// let a = Record::new(String::from("alice"));
/// let b = Record::new(String::from("alice"));
///
/// assert_eq!(a, a.clone());
/// assert_ne!(a, b);
/// ```
pub struct Record<S>(Arc<RwLock<S>>);

impl<S> Record<S> {
    /// Wrap a value in a new record handle.
    pub fn new(value: S) -> Self {
        Self(Arc::new(RwLock::new(value)))
    }

    /// Lock the record for reading.
    pub fn read(&self) -> RwLockReadGuard<'_, S> {
        self.0.read()
    }

    /// Lock the record for writing.
    pub fn write(&self) -> RwLockWriteGuard<'_, S> {
        self.0.write()
    }

    /// Run a closure against the record's current value.
    pub fn with<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.0.read())
    }

    /// Check whether two handles refer to the same record.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    fn addr(&self) -> usize {
        Arc::as_ptr(&self.0) as *const () as usize
    }
}

impl<S> Clone for Record<S> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<S> PartialEq for Record<S> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<S> Eq for Record<S> {}

impl<S> Hash for Record<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr().hash(state);
    }
}

impl<S: fmt::Debug> fmt::Debug for Record<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Record")
            .field(&format_args!("{:#x}", self.addr()))
            .field(&*self.0.read())
            .finish()
    }
}

impl<S> From<S> for Record<S> {
    fn from(value: S) -> Self {
        Self::new(value)
    }
}
