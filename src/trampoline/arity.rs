//! Arity Adapters
//!
//! One adapter per supported arity (0 through 3) that turns a step routine
//! into a callable of the same logical signature. Everything is resolved at
//! compile time; the argument pack is `()`, `T`, `(T1, T2)` or `(T1, T2, T3)`.
//!
//! For each arity there are five forms:
//! - `funcN`: reusable callable returning `Option<R>` (context-style routine)
//! - `actionN`: reusable callable returning nothing
//! - `callN`: run the loop once, right now
//! - `tail_funcN`: reusable callable for a routine that returns a [`Step`]
//! - `tail_callN`: run a [`Step`] routine once, right now
//!
//! Every invocation of a reusable callable builds its own context, so
//! separate calls (including calls from different threads) never observe
//! each other's state.

use super::context::CallContext;
use super::engine::{run, run_steps};
use super::step::Step;

// ---------------------------------------------------------------------------
// Arity 0: () -> R

/// Build: `() -> Option<R>`
pub fn func0<R, F>(routine: F) -> impl Fn() -> Option<R>
where
    F: Fn(&mut CallContext<(), R>),
{
    move || run((), |(), ctx| routine(ctx))
}

/// Build: `() -> ()`
pub fn action0<F>(routine: F) -> impl Fn()
where
    F: Fn(&mut CallContext<(), ()>),
{
    move || {
        run((), |(), ctx| routine(ctx));
    }
}

/// Invoke: `() -> Option<R>`
pub fn call0<R, F>(mut routine: F) -> Option<R>
where
    F: FnMut(&mut CallContext<(), R>),
{
    run((), |(), ctx| routine(ctx))
}

pub fn tail_func0<R, F>(routine: F) -> impl Fn() -> R
where
    F: Fn(&mut CallContext<(), R>) -> Step<(), R>,
{
    move || run_steps((), |(), ctx| routine(ctx))
}

pub fn tail_call0<R, F>(mut routine: F) -> R
where
    F: FnMut(&mut CallContext<(), R>) -> Step<(), R>,
{
    run_steps((), |(), ctx| routine(ctx))
}

// ---------------------------------------------------------------------------
// Arity 1: T -> R

/// Build: `T -> Option<R>`
pub fn func1<T, R, F>(routine: F) -> impl Fn(T) -> Option<R>
where
    F: Fn(T, &mut CallContext<T, R>),
{
    move |arg| run(arg, |arg, ctx| routine(arg, ctx))
}

/// Build: `T -> ()`
pub fn action1<T, F>(routine: F) -> impl Fn(T)
where
    F: Fn(T, &mut CallContext<T, ()>),
{
    move |arg| {
        run(arg, |arg, ctx| routine(arg, ctx));
    }
}

/// Invoke: `T -> Option<R>`
pub fn call1<T, R, F>(arg: T, mut routine: F) -> Option<R>
where
    F: FnMut(T, &mut CallContext<T, R>),
{
    run(arg, |arg, ctx| routine(arg, ctx))
}

pub fn tail_func1<T, R, F>(routine: F) -> impl Fn(T) -> R
where
    F: Fn(T, &mut CallContext<T, R>) -> Step<T, R>,
{
    move |arg| run_steps(arg, |arg, ctx| routine(arg, ctx))
}

pub fn tail_call1<T, R, F>(arg: T, mut routine: F) -> R
where
    F: FnMut(T, &mut CallContext<T, R>) -> Step<T, R>,
{
    run_steps(arg, |arg, ctx| routine(arg, ctx))
}

// ---------------------------------------------------------------------------
// Arity 2: (T1, T2) -> R

/// Build: `(T1, T2) -> Option<R>`
pub fn func2<T1, T2, R, F>(routine: F) -> impl Fn(T1, T2) -> Option<R>
where
    F: Fn(T1, T2, &mut CallContext<(T1, T2), R>),
{
    move |a, b| run((a, b), |(a, b), ctx| routine(a, b, ctx))
}

/// Build: `(T1, T2) -> ()`
pub fn action2<T1, T2, F>(routine: F) -> impl Fn(T1, T2)
where
    F: Fn(T1, T2, &mut CallContext<(T1, T2), ()>),
{
    move |a, b| {
        run((a, b), |(a, b), ctx| routine(a, b, ctx));
    }
}

/// Invoke: `(T1, T2) -> Option<R>`
pub fn call2<T1, T2, R, F>(a: T1, b: T2, mut routine: F) -> Option<R>
where
    F: FnMut(T1, T2, &mut CallContext<(T1, T2), R>),
{
    run((a, b), |(a, b), ctx| routine(a, b, ctx))
}

pub fn tail_func2<T1, T2, R, F>(routine: F) -> impl Fn(T1, T2) -> R
where
    F: Fn(T1, T2, &mut CallContext<(T1, T2), R>) -> Step<(T1, T2), R>,
{
    move |a, b| run_steps((a, b), |(a, b), ctx| routine(a, b, ctx))
}

pub fn tail_call2<T1, T2, R, F>(a: T1, b: T2, mut routine: F) -> R
where
    F: FnMut(T1, T2, &mut CallContext<(T1, T2), R>) -> Step<(T1, T2), R>,
{
    run_steps((a, b), |(a, b), ctx| routine(a, b, ctx))
}

// ---------------------------------------------------------------------------
// Arity 3: (T1, T2, T3) -> R

/// Build: `(T1, T2, T3) -> Option<R>`
pub fn func3<T1, T2, T3, R, F>(routine: F) -> impl Fn(T1, T2, T3) -> Option<R>
where
    F: Fn(T1, T2, T3, &mut CallContext<(T1, T2, T3), R>),
{
    move |a, b, c| run((a, b, c), |(a, b, c), ctx| routine(a, b, c, ctx))
}

/// Build: `(T1, T2, T3) -> ()`
pub fn action3<T1, T2, T3, F>(routine: F) -> impl Fn(T1, T2, T3)
where
    F: Fn(T1, T2, T3, &mut CallContext<(T1, T2, T3), ()>),
{
    move |a, b, c| {
        run((a, b, c), |(a, b, c), ctx| routine(a, b, c, ctx));
    }
}

/// Invoke: `(T1, T2, T3) -> Option<R>`
pub fn call3<T1, T2, T3, R, F>(a: T1, b: T2, c: T3, mut routine: F) -> Option<R>
where
    F: FnMut(T1, T2, T3, &mut CallContext<(T1, T2, T3), R>),
{
    run((a, b, c), |(a, b, c), ctx| routine(a, b, c, ctx))
}

pub fn tail_func3<T1, T2, T3, R, F>(routine: F) -> impl Fn(T1, T2, T3) -> R
where
    F: Fn(T1, T2, T3, &mut CallContext<(T1, T2, T3), R>) -> Step<(T1, T2, T3), R>,
{
    move |a, b, c| run_steps((a, b, c), |(a, b, c), ctx| routine(a, b, c, ctx))
}

pub fn tail_call3<T1, T2, T3, R, F>(a: T1, b: T2, c: T3, mut routine: F) -> R
where
    F: FnMut(T1, T2, T3, &mut CallContext<(T1, T2, T3), R>) -> Step<(T1, T2, T3), R>,
{
    run_steps((a, b, c), |(a, b, c), ctx| routine(a, b, c, ctx))
}
