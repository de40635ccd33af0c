//! Raw and normalized address types

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Serialize, Serializer};

use crate::error::{MalformedEmail, MalformedReason, Result};

/// A raw address split at its `@`, borrowing from the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmailAddress<'a> {
    pub local: &'a str,
    pub domain: &'a str,
}

impl<'a> EmailAddress<'a> {
    /// Split `raw` into local part and domain.
    ///
    /// The local part may be empty (`@example.com` is accepted), the domain
    /// may not. Nothing else is validated.
    pub fn parse(raw: &'a str) -> Result<Self> {
        let Some((local, domain)) = raw.split_once('@') else {
            return Err(MalformedEmail::new(raw, MalformedReason::MissingSeparator));
        };

        if domain.contains('@') {
            return Err(MalformedEmail::new(raw, MalformedReason::MultipleSeparators));
        }

        if domain.is_empty() {
            return Err(MalformedEmail::new(raw, MalformedReason::EmptyDomain));
        }

        Ok(Self { local, domain })
    }
}

/// Canonical `local@domain` form of an address.
///
/// Two raw inputs are the same effective address exactly when their
/// normalized forms are string-equal.
#[derive(Debug, Clone)]
pub struct NormalizedEmail {
    value: String,
    at: usize,
}

impl NormalizedEmail {
    pub(crate) fn from_parts(local: &str, domain: &str) -> Self {
        let mut value = String::with_capacity(local.len() + 1 + domain.len());
        value.push_str(local);
        value.push('@');
        value.push_str(domain);
        Self {
            value,
            at: local.len(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn local(&self) -> &str {
        &self.value[..self.at]
    }

    pub fn domain(&self) -> &str {
        &self.value[self.at + 1..]
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

// Equality, ordering and hashing only look at the string so that lookups by
// `&str` through `Borrow` agree with lookups by `NormalizedEmail`.
impl PartialEq for NormalizedEmail {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for NormalizedEmail {}

impl PartialOrd for NormalizedEmail {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for NormalizedEmail {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl Hash for NormalizedEmail {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl fmt::Display for NormalizedEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for NormalizedEmail {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl Borrow<str> for NormalizedEmail {
    fn borrow(&self) -> &str {
        &self.value
    }
}

impl From<NormalizedEmail> for String {
    fn from(email: NormalizedEmail) -> Self {
        email.value
    }
}

// Serialized as the plain address string
impl Serialize for NormalizedEmail {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.value)
    }
}
