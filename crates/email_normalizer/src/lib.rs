//! Email address normalization and deduplication
//!
//! Counts how many distinct mailboxes a batch of raw addresses actually
//! reaches. Two addresses are the same mailbox when they only differ by dots
//! in the local part, or by a `+tag` suffix on the local part:
//!
//! ```
//! let emails = [
//!     "alice.z@leetcode.com",
//!     "alicez@leetcode.com",
//!     "m.y+name@email.com",
//!     "my@email.com",
//! ];
//! assert_eq!(email_normalizer::count_unique(emails).unwrap(), 2);
//! ```
//!
//! ## Module Organization
//!
//! - `address`: raw split (`EmailAddress`) and canonical form (`NormalizedEmail`)
//! - `normalization`: `NormalizationPolicy` and the `Normalizer`
//! - `dedup`: `UniqueAddressSet`, `DedupReport` and the counting entry points
//! - `error`: `MalformedEmail`

mod address;
mod dedup;
mod error;
mod normalization;

pub use address::{EmailAddress, NormalizedEmail};
pub use dedup::{count_unique, dedup, DedupReport, UniqueAddressSet};
pub use error::{MalformedEmail, MalformedReason, Result};
pub use normalization::{normalize_email, normalize_local, NormalizationPolicy, Normalizer};
