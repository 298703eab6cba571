//! Result types shared by the lookup, sweep and report stages

mod types;

pub use types::*;
