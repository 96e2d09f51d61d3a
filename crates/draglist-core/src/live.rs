use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::{Rc, Weak};

/// Identity-stable cell whose contents are mutated in place.
///
/// Cloning a `LiveRef` clones the handle, not the value: every clone observes
/// the same storage, so a reference cached once keeps reading the latest
/// contents for as long as it is held.
pub struct LiveRef<T> {
    inner: Rc<RefCell<T>>,
}

impl<T> Clone for LiveRef<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> LiveRef<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(value)),
        }
    }

    /// Run `f` with an immutable reference to the stored value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let borrow = self.inner.borrow();
        f(&*borrow)
    }

    /// Run `f` with a mutable reference to the stored value.
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut borrow = self.inner.borrow_mut();
        f(&mut *borrow)
    }

    pub fn borrow(&self) -> Ref<'_, T> {
        self.inner.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.inner.borrow_mut()
    }

    /// Overwrite the contents. The cell itself keeps its identity.
    pub fn set(&self, value: T) {
        *self.inner.borrow_mut() = value;
    }

    /// Returns true when both handles point at the same storage.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: Clone> LiveRef<T> {
    pub fn get(&self) -> T {
        self.inner.borrow().clone()
    }
}

impl<T: Default> Default for LiveRef<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for LiveRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.try_borrow() {
            Ok(value) => f.debug_tuple("LiveRef").field(&*value).finish(),
            Err(_) => f.write_str("LiveRef(<borrowed>)"),
        }
    }
}

/// Non-owning handle to a target that lives in the rendering layer.
///
/// The renderer owns the target as an `Rc<T>` and attaches it here; the
/// handle only keeps a `Weak`, so a dropped target reads back as `None`
/// instead of being kept alive. Attach and detach can happen from render
/// code or from frame callbacks, and every clone of the handle sees the
/// change immediately.
pub struct LiveHandle<T: ?Sized> {
    target: Rc<RefCell<Option<Weak<T>>>>,
}

impl<T: ?Sized> Clone for LiveHandle<T> {
    fn clone(&self) -> Self {
        Self {
            target: Rc::clone(&self.target),
        }
    }
}

impl<T: ?Sized> Default for LiveHandle<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> LiveHandle<T> {
    /// Create an empty handle.
    pub fn new() -> Self {
        Self {
            target: Rc::new(RefCell::new(None)),
        }
    }

    /// Point the handle at `target`, replacing any previous target.
    pub fn attach(&self, target: &Rc<T>) {
        *self.target.borrow_mut() = Some(Rc::downgrade(target));
    }

    /// Clear the handle.
    pub fn detach(&self) {
        self.target.borrow_mut().take();
    }

    /// The current target, if one is attached and still alive.
    pub fn current(&self) -> Option<Rc<T>> {
        self.target.borrow().as_ref().and_then(Weak::upgrade)
    }

    pub fn is_populated(&self) -> bool {
        self.current().is_some()
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.target, &other.target)
    }
}

impl<T: ?Sized> fmt::Debug for LiveHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LiveHandle")
            .field("populated", &self.is_populated())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/live_tests.rs"]
mod tests;
