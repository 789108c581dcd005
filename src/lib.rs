//! Tailcall - Trampoline Engine Library
//!
//! This library runs logically recursive computations as flat loops. A
//! caller writes a *step routine* that performs one step of the recursion and
//! then either asks for another iteration with new arguments or finishes with
//! a result. The driver loop keeps invoking the routine until it finishes, so
//! the native stack never grows with the depth of the computation.
//!
//! # Architecture
//!
//! 1. **Call Context** (`trampoline::CallContext`)
//!    - Created fresh for every top-level call
//!    - Holds the pending arguments or the exit result (exactly one at a time)
//!    - Exposes `is_first_call`, the iteration count and a typed data bag
//!
//! 2. **Driver** (`trampoline::Driver`, `run`, `try_run`, `run_steps`)
//!    - Resets the context to "exit" before each invocation, so a routine
//!      that requests nothing ends the loop
//!    - Passes routine errors through unchanged
//!
//! 3. **Arity adapters** (`func0`..`func3`, `action0`..`action3`, `call0`..`call3`,
//!    `tail_func0`..`tail_func3`, `tail_call0`..`tail_call3`)
//!    - Turn a step routine into a callable with the same argument list
//!
//! # Example
//!
//! ```rust
//! use tailcall::trampoline::func2;
//!
//! let aggregate = func2(|n: u64, acc: u64, ctx| {
//!     if n > 6 {
//!         ctx.request_exit(acc);
//!     } else {
//!         ctx.request_continue((n + 1, acc * n));
//!     }
//! });
//!
//! assert_eq!(aggregate(3, 1), Some(360));
//! ```
//!
//! Routines can also return their decision explicitly:
//!
//! ```rust
//! use tailcall::trampoline::{tail_func1, Step};
//!
//! let count = tail_func1(|i: u64, _ctx| {
//!     if i < 1_000_000 { Step::Continue(i + 1) } else { Step::Exit(i) }
//! });
//!
//! assert_eq!(count(0), 1_000_000);
//! ```

pub mod config;
pub mod error;
pub mod samples;
pub mod trampoline;

pub use config::TrampolineConfig;
pub use error::TrampolineError;
pub use trampoline::{CallContext, DataBag, Driver, Step};
