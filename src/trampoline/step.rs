//! Step Types
//!
//! Explicit result of a single trampoline step, for routines that return
//! their decision instead of recording it on the context.

/// Outcome of one step: run again with new arguments, or finish with a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step<A, R> {
    /// Invoke the routine again with these arguments
    Continue(A),
    /// Stop the loop and return this result
    Exit(R),
}

impl<A, R> Step<A, R> {
    pub fn is_exit(&self) -> bool {
        matches!(self, Step::Exit(_))
    }

    pub fn is_continue(&self) -> bool {
        matches!(self, Step::Continue(_))
    }

    /// Transform the pending arguments, leaving an exit untouched
    pub fn map_continue<B>(self, f: impl FnOnce(A) -> B) -> Step<B, R> {
        match self {
            Step::Continue(args) => Step::Continue(f(args)),
            Step::Exit(result) => Step::Exit(result),
        }
    }

    /// Transform the result, leaving a continuation untouched
    pub fn map_exit<S>(self, f: impl FnOnce(R) -> S) -> Step<A, S> {
        match self {
            Step::Continue(args) => Step::Continue(args),
            Step::Exit(result) => Step::Exit(f(result)),
        }
    }
}
