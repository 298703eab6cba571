//! HTTP networking module
//!
//! Provides the HTTP client used to query the search API.

mod client;

pub use client::{HttpClient, HttpResponse};
