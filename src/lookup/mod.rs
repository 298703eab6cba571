//! Remote mention lookups
//!
//! [`SearchClient`] queries the search API for an exact-phrase name and
//! normalizes the answer into a [`Lookup`].

mod client;
pub mod models;
mod traits;

pub use client::SearchClient;
pub use traits::{Lookup, MentionSource};
