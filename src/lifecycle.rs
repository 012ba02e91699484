//! Teardown bookkeeping for mounted effects.
//!
//! Each effect registers the undo step for everything it attaches (listener,
//! frame callback, observer, body style) in its [`Scope`]. Disposing the
//! scope, explicitly or by dropping it, runs those steps newest first, so a
//! torn-down page keeps no listeners and no scheduled frames.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Default)]
pub struct Scope {
    name: &'static str,
    undo: Vec<Box<dyn FnOnce()>>,
}

impl Scope {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            undo: Vec::new(),
        }
    }

    pub fn defer(&mut self, f: impl FnOnce() + 'static) {
        self.undo.push(Box::new(f));
    }

    /// Keep `value` alive until the scope is disposed (closures, observers).
    pub fn hold<T: 'static>(&mut self, value: T) {
        self.defer(move || drop(value));
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.undo.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.undo.is_empty()
    }

    pub fn dispose(&mut self) {
        if !self.undo.is_empty() {
            log::debug!("[scope] {} disposing {} bindings", self.name, self.undo.len());
        }
        while let Some(f) = self.undo.pop() {
            f();
        }
    }
}

impl Drop for Scope {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Shared count of live bindings, for checking that teardown balanced every
/// attach with a detach.
#[derive(Clone, Default, Debug)]
pub struct LiveCounter(Rc<Cell<usize>>);

impl LiveCounter {
    /// Count one attach and register the matching detach in `scope`.
    pub fn track(&self, scope: &mut Scope) {
        self.0.set(self.0.get() + 1);
        let counter = self.0.clone();
        scope.defer(move || counter.set(counter.get().saturating_sub(1)));
    }

    #[inline]
    pub fn get(&self) -> usize {
        self.0.get()
    }
}
