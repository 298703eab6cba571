//! Search orchestration
//!
//! Drives one [`MentionSource`](crate::lookup::MentionSource) over the parsed
//! contacts.

mod executor;

pub use executor::Sweep;
