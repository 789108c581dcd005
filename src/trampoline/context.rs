//! Call Context
//!
//! Per-invocation record handed to the step routine on every iteration. It
//! carries the continue/exit decision, the result, the first-call flag and a
//! data bag for cross-iteration state that does not fit the argument pack.
//!
//! A context is created by the driver for one top-level call and dropped when
//! that call returns; it is never shared between calls or threads.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::mem;

/// Named slots of caller-chosen types that live for one trampoline loop.
///
/// Each slot holds a single value of whatever type was inserted under that
/// key. Reading a slot with a different type yields `None`.
#[derive(Default)]
pub struct DataBag {
    slots: HashMap<String, Box<dyn Any>>,
}

impl DataBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `key`, replacing any previous slot of any type
    pub fn insert<T: 'static>(&mut self, key: impl Into<String>, value: T) {
        self.slots.insert(key.into(), Box::new(value));
    }

    pub fn get<T: 'static>(&self, key: &str) -> Option<&T> {
        self.slots.get(key)?.downcast_ref::<T>()
    }

    pub fn get_mut<T: 'static>(&mut self, key: &str) -> Option<&mut T> {
        self.slots.get_mut(key)?.downcast_mut::<T>()
    }

    /// Slot under `key`, filled with `init()` if it is empty.
    /// Returns `None` if the slot already holds a value of another type.
    pub fn get_or_insert_with<T: 'static>(
        &mut self,
        key: impl Into<String>,
        init: impl FnOnce() -> T,
    ) -> Option<&mut T> {
        self.slots
            .entry(key.into())
            .or_insert_with(|| Box::new(init()) as Box<dyn Any>)
            .downcast_mut::<T>()
    }

    /// Remove and return the slot, only if it holds a `T`
    pub fn remove<T: 'static>(&mut self, key: &str) -> Option<T> {
        if !self.slots.get(key)?.is::<T>() {
            return None;
        }
        self.slots
            .remove(key)?
            .downcast::<T>()
            .ok()
            .map(|boxed| *boxed)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.slots.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Drop every slot
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

impl fmt::Debug for DataBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&str> = self.slots.keys().map(String::as_str).collect();
        keys.sort_unstable();
        f.debug_struct("DataBag").field("keys", &keys).finish()
    }
}

/// Continue and exit share one slot, so exactly one is in effect at a time
#[derive(Debug)]
enum Control<A, R> {
    Continue(A),
    Exit(Option<R>),
}

/// Mutable record passed to a step routine on each trampoline iteration.
///
/// `A` is the argument pack: `()` for zero arguments, `T` for one, and a
/// tuple for two or three. `R` is the result type.
///
/// The routine signals what happens next by calling either
/// [`request_continue`](Self::request_continue) or
/// [`request_exit`](Self::request_exit) before it returns. If it calls
/// neither, the loop ends after the current iteration with no result.
#[derive(Debug)]
pub struct CallContext<A, R> {
    control: Control<A, R>,
    is_first_call: bool,
    iteration: u64,
    data: DataBag,
}

impl<A, R> CallContext<A, R> {
    /// Seed a context with the initial arguments of a top-level call
    pub(crate) fn new(args: A) -> Self {
        CallContext {
            control: Control::Continue(args),
            is_first_call: true,
            iteration: 0,
            data: DataBag::new(),
        }
    }

    /// Context for step routines that return their decision as a
    /// [`Step`](super::Step); nothing is pending and requests are ignored
    pub(crate) fn detached() -> Self {
        CallContext {
            control: Control::Exit(None),
            is_first_call: true,
            iteration: 0,
            data: DataBag::new(),
        }
    }

    /// True only while the first iteration of this loop is running
    pub fn is_first_call(&self) -> bool {
        self.is_first_call
    }

    /// Number of iterations completed before the current one
    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    /// End the loop after this iteration and return `result`.
    /// The last request made during an iteration wins.
    pub fn request_exit(&mut self, result: R) {
        self.control = Control::Exit(Some(result));
    }

    /// End the loop after this iteration without a result
    pub fn request_stop(&mut self) {
        self.control = Control::Exit(None);
    }

    /// Run another iteration with `args`, discarding any result set so far
    pub fn request_continue(&mut self, args: A) {
        self.control = Control::Continue(args);
    }

    pub fn exit_requested(&self) -> bool {
        matches!(self.control, Control::Exit(_))
    }

    /// Result recorded by `request_exit` during the current iteration
    pub fn result(&self) -> Option<&R> {
        match &self.control {
            Control::Exit(result) => result.as_ref(),
            Control::Continue(_) => None,
        }
    }

    pub fn data(&self) -> &DataBag {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut DataBag {
        &mut self.data
    }

    /// Arguments queued by `request_continue` for the next iteration
    pub(crate) fn pending(&self) -> Option<&A> {
        match &self.control {
            Control::Continue(args) => Some(args),
            Control::Exit(_) => None,
        }
    }

    /// Take the pending arguments and reset the control to "exit with no
    /// result", so a routine that requests nothing terminates the loop.
    /// Returns `None` once an exit has been requested.
    pub(crate) fn take_pending(&mut self) -> Option<A> {
        match mem::replace(&mut self.control, Control::Exit(None)) {
            Control::Continue(args) => Some(args),
            Control::Exit(result) => {
                self.control = Control::Exit(result);
                None
            }
        }
    }

    pub(crate) fn finish_iteration(&mut self) {
        self.is_first_call = false;
        self.iteration += 1;
    }

    pub(crate) fn into_result(self) -> Option<R> {
        match self.control {
            Control::Exit(result) => result,
            Control::Continue(_) => None,
        }
    }
}
