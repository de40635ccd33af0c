//! Subcommand handlers
//!
//! Handlers read their input, call into the library crates and write the
//! result to the given writer. They never print errors themselves.

mod emails;
mod sums;

pub use emails::*;
pub use sums::*;
