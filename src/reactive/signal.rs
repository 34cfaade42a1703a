use std::cell::RefCell;
use std::rc::Rc;

use super::runtime::{notify_write, release_signal, with_runtime, SignalId};

struct SignalInner<T> {
    id: SignalId,
    value: RefCell<T>,
}

impl<T> Drop for SignalInner<T> {
    fn drop(&mut self) {
        release_signal(self.id);
    }
}

/// A reactive value owned by the UI thread.
///
/// Reading a signal inside an effect subscribes the effect; writing a
/// different value re-runs subscribers before `set` returns. Clones share
/// the same value.
pub struct Signal<T> {
    inner: Rc<SignalInner<T>>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> Signal<T> {
    pub fn new(value: T) -> Self {
        let id = with_runtime(|rt| rt.allocate_signal());
        Self {
            inner: Rc::new(SignalInner {
                id,
                value: RefCell::new(value),
            }),
        }
    }

    fn track(&self) {
        with_runtime(|rt| rt.track_read(self.inner.id));
    }

    /// Borrow the value, subscribing the running effect.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        self.track();
        f(&self.inner.value.borrow())
    }

    pub fn with_untracked<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.inner.value.borrow())
    }
}

impl<T: Clone> Signal<T> {
    pub fn get(&self) -> T {
        self.with(T::clone)
    }

    pub fn get_untracked(&self) -> T {
        self.with_untracked(T::clone)
    }
}

impl<T: PartialEq> Signal<T> {
    /// Set the value, notifying subscribers only if it changed.
    pub fn set(&self, value: T) {
        {
            let mut current = self.inner.value.borrow_mut();
            if *current == value {
                return;
            }
            *current = value;
        }
        notify_write(self.inner.id);
    }
}

impl<T: PartialEq + Clone> Signal<T> {
    /// Modify the value in place, notifying subscribers only if it changed.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut T),
    {
        let changed = {
            let mut current = self.inner.value.borrow_mut();
            let old = current.clone();
            f(&mut current);
            *current != old
        };
        if changed {
            notify_write(self.inner.id);
        }
    }
}

pub fn create_signal<T>(value: T) -> Signal<T> {
    Signal::new(value)
}
