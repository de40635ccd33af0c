//! Local-part normalization
//!
//! Mail providers deliver `alice.z@x.com` and `alicez+news@x.com` to the same
//! mailbox as `alicez@x.com`. The default [`NormalizationPolicy`] applies both
//! rules to every domain: dots are removed from the local part, then the local
//! part is cut at the first `+`.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::address::{EmailAddress, NormalizedEmail};
use crate::error::{MalformedEmail, Result};

/// Which rewrites are applied to an address before comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NormalizationPolicy {
    /// Remove every `.` from the local part
    pub strip_dots: bool,

    /// Drop the first `+` and everything after it from the local part
    pub strip_subaddress: bool,

    /// Restrict dot removal to these domains (ASCII case-insensitive).
    /// `None` removes dots for every domain.
    pub dot_domains: Option<Vec<String>>,

    /// Lowercase the whole address, domain included
    pub lowercase: bool,

    /// Trim surrounding whitespace before parsing
    pub trim_whitespace: bool,
}

impl Default for NormalizationPolicy {
    fn default() -> Self {
        Self {
            strip_dots: true,
            strip_subaddress: true,
            dot_domains: None,
            lowercase: false,
            trim_whitespace: false,
        }
    }
}

impl NormalizationPolicy {
    /// Whether dots in local parts at `domain` are insignificant
    pub fn strips_dots_for(&self, domain: &str) -> bool {
        if !self.strip_dots {
            return false;
        }

        match &self.dot_domains {
            None => true,
            Some(domains) => domains.iter().any(|d| d.eq_ignore_ascii_case(domain)),
        }
    }
}

/// Apply `policy` to a local part belonging to `domain`.
///
/// Borrows from `local` unless a dot actually has to be removed.
pub fn normalize_local<'a>(
    local: &'a str,
    domain: &str,
    policy: &NormalizationPolicy,
) -> Cow<'a, str> {
    let mut local = Cow::Borrowed(local);

    if policy.strips_dots_for(domain) && local.contains('.') {
        local = Cow::Owned(local.replace('.', ""));
    }

    if policy.strip_subaddress {
        if let Some(plus) = local.find('+') {
            local = match local {
                Cow::Borrowed(s) => Cow::Borrowed(&s[..plus]),
                Cow::Owned(mut s) => {
                    s.truncate(plus);
                    Cow::Owned(s)
                }
            };
        }
    }

    local
}

/// Normalizes raw addresses under a fixed policy.
///
/// Holds no state besides the policy, so one instance can be shared freely
/// between callers and threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Normalizer {
    policy: NormalizationPolicy,
}

impl Normalizer {
    pub fn new(policy: NormalizationPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &NormalizationPolicy {
        &self.policy
    }

    /// Normalize a single raw address
    pub fn normalize(&self, raw: &str) -> Result<NormalizedEmail> {
        let input = if self.policy.trim_whitespace {
            raw.trim()
        } else {
            raw
        };

        let lowered;
        let input = if self.policy.lowercase {
            lowered = input.to_lowercase();
            lowered.as_str()
        } else {
            input
        };

        let address =
            EmailAddress::parse(input).map_err(|e| MalformedEmail::new(raw, e.reason))?;
        let local = normalize_local(address.local, address.domain, &self.policy);
        let normalized = NormalizedEmail::from_parts(&local, address.domain);

        trace!("Normalized {:?} -> {}", raw, normalized);
        Ok(normalized)
    }
}

/// Normalize `raw` with the default policy
pub fn normalize_email(raw: &str) -> Result<NormalizedEmail> {
    Normalizer::default().normalize(raw)
}
