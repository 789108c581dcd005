//! Errors reported by the trampoline engine itself.
//!
//! The engine never wraps failures raised by a step routine; those reach the
//! caller unmodified. The only error the engine owns is a contract violation
//! detected by the checked dynamic entry point.

use std::fmt;

/// Error type for engine-level contract violations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrampolineError {
    /// Wrong number of positional arguments for the declared routine arity.
    /// Raised for the seed arguments and for every continuation request.
    ArityMismatch { expected: usize, actual: usize },
}

impl TrampolineError {
    pub fn arity_mismatch(expected: usize, actual: usize) -> Self {
        TrampolineError::ArityMismatch { expected, actual }
    }
}

impl fmt::Display for TrampolineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrampolineError::ArityMismatch { expected, actual } => write!(
                f,
                "Arity mismatch: routine requires exactly {} argument{}, got {}",
                expected,
                if *expected == 1 { "" } else { "s" },
                actual
            ),
        }
    }
}

impl std::error::Error for TrampolineError {}
