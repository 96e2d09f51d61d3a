//! Thread-local provider stack.
//!
//! A provider publishes a type-erased value to everything that runs inside
//! its scope. Values are keyed by a marker type so unrelated providers can
//! nest without shadowing each other; the innermost provider for a key wins.

use std::any::{Any, TypeId};
use std::cell::{Cell, RefCell};
use std::marker::PhantomData;
use std::rc::Rc;

struct ProvidedEntry {
    id: u64,
    key: TypeId,
    value: Rc<dyn Any>,
}

thread_local! {
    static PROVIDER_STACK: RefCell<Vec<ProvidedEntry>> = const { RefCell::new(Vec::new()) };
    static NEXT_ENTRY_ID: Cell<u64> = const { Cell::new(0) };
}

/// Guard that removes its own entry from the provider stack on drop.
///
/// Guards dropped out of order only withdraw the value they published.
#[must_use = "ProviderGuard removes its provided value on drop"]
pub struct ProviderGuard {
    id: u64,
    // Entries are thread-local; keep the guard on the thread that pushed.
    _not_send: PhantomData<Rc<()>>,
}

impl Drop for ProviderGuard {
    fn drop(&mut self) {
        let removed = PROVIDER_STACK.with(|stack| {
            let mut stack = stack.borrow_mut();
            let position = stack.iter().rposition(|entry| entry.id == self.id)?;
            Some(stack.remove(position))
        });
        // The value may itself hold guards; drop it after the stack borrow ends.
        drop(removed);
    }
}

/// Publish `value` under key `K` until the returned guard is dropped.
pub fn enter<K: 'static>(value: Rc<dyn Any>) -> ProviderGuard {
    let id = NEXT_ENTRY_ID.with(|next| {
        let id = next.get();
        next.set(id + 1);
        id
    });
    PROVIDER_STACK.with(|stack| {
        stack.borrow_mut().push(ProvidedEntry {
            id,
            key: TypeId::of::<K>(),
            value,
        });
    });
    ProviderGuard {
        id,
        _not_send: PhantomData,
    }
}

/// Run `content` with `value` published under key `K`.
pub fn provide<K: 'static, R>(value: Rc<dyn Any>, content: impl FnOnce() -> R) -> R {
    let _guard = enter::<K>(value);
    content()
}

/// The innermost value published under `K`, if any provider is active.
pub fn current<K: 'static>() -> Option<Rc<dyn Any>> {
    let key = TypeId::of::<K>();
    PROVIDER_STACK.with(|stack| {
        stack
            .borrow()
            .iter()
            .rev()
            .find(|entry| entry.key == key)
            .map(|entry| Rc::clone(&entry.value))
    })
}

#[cfg(test)]
#[path = "tests/local_tests.rs"]
mod tests;
