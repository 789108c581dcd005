//! Trampoline-based Iterative Calls
//!
//! This module provides the call context, the driver loop and the per-arity
//! adapters that run a logically recursive step routine as a flat loop.
//! This keeps stack usage constant however long the call chain gets.

mod arity;
mod context;
mod dynamic;
mod engine;
mod step;

pub use arity::{
    action0, action1, action2, action3, call0, call1, call2, call3, func0, func1, func2, func3,
    tail_call0, tail_call1, tail_call2, tail_call3, tail_func0, tail_func1, tail_func2, tail_func3,
};
pub use context::{CallContext, DataBag};
pub use dynamic::{call_dynamic, DynamicContext, DynamicTrampoline};
pub use engine::{run, run_steps, try_run, try_run_steps, Driver};
pub use step::Step;
