//! Sample clients of the trampoline engine.
//!
//! These routines exercise the public API the way an embedding application
//! would: each one is a logically recursive walk expressed as a step routine.
//! Console output, filesystem access and sleeping are passed in as
//! capabilities so the samples can be driven from tests.

pub mod countdown;
pub mod files;
pub mod messages;
pub mod numeric;

pub use countdown::{countdown, timed_countdown, Sleeper, ThreadSleeper};
pub use files::{collect_files, print_files, DirectorySource, Listing, OsDirectories};
pub use messages::{find_attachments, record_subjects, Attachment, Message};
pub use numeric::{count_up, fibonacci, fibonacci_batch, partial_factorial};
