//! Counting distinct effective addresses
//!
//! Every pass builds its own [`UniqueAddressSet`] and drops it when the
//! result is returned, so repeated or concurrent calls never see each
//! other's addresses.

use std::collections::{hash_set, BTreeMap, HashSet};

use serde::Serialize;
use tracing::debug;

use crate::address::NormalizedEmail;
use crate::error::Result;
use crate::normalization::Normalizer;

/// Set of normalized addresses, compared by exact string equality
#[derive(Debug, Clone, Default)]
pub struct UniqueAddressSet {
    addresses: HashSet<NormalizedEmail>,
}

impl UniqueAddressSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the address was not already present
    pub fn insert(&mut self, email: NormalizedEmail) -> bool {
        self.addresses.insert(email)
    }

    pub fn contains(&self, email: &str) -> bool {
        self.addresses.contains(email)
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    pub fn iter(&self) -> hash_set::Iter<'_, NormalizedEmail> {
        self.addresses.iter()
    }

    pub fn into_sorted_vec(self) -> Vec<NormalizedEmail> {
        let mut addresses: Vec<_> = self.addresses.into_iter().collect();
        addresses.sort();
        addresses
    }
}

impl<'a> IntoIterator for &'a UniqueAddressSet {
    type Item = &'a NormalizedEmail;
    type IntoIter = hash_set::Iter<'a, NormalizedEmail>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Outcome of a full dedup pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DedupReport {
    /// Number of raw inputs seen
    pub total: usize,

    /// Each normalized address with the raw spellings that produced it, in
    /// input order
    pub addresses: BTreeMap<NormalizedEmail, Vec<String>>,
}

impl DedupReport {
    pub fn unique_count(&self) -> usize {
        self.addresses.len()
    }

    pub fn duplicate_count(&self) -> usize {
        self.total - self.unique_count()
    }

    pub fn unique(&self) -> impl Iterator<Item = &NormalizedEmail> {
        self.addresses.keys()
    }
}

impl Normalizer {
    /// Build the set of normalized addresses for `emails`
    pub fn collect<I, S>(&self, emails: I) -> Result<UniqueAddressSet>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = UniqueAddressSet::new();
        for email in emails {
            set.insert(self.normalize(email.as_ref())?);
        }
        Ok(set)
    }

    /// Number of distinct effective addresses in `emails`.
    ///
    /// Fails on the first malformed input; no partial count is returned.
    pub fn count_unique<I, S>(&self, emails: I) -> Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set = self.collect(emails)?;
        debug!("Counted {} unique addresses", set.len());
        Ok(set.len())
    }

    /// Group `emails` by normalized address
    pub fn dedup<I, S>(&self, emails: I) -> Result<DedupReport>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report = DedupReport::default();

        for email in emails {
            let raw = email.as_ref();
            let normalized = self.normalize(raw)?;
            report
                .addresses
                .entry(normalized)
                .or_default()
                .push(raw.to_string());
            report.total += 1;
        }

        debug!(
            "Dedup: {} inputs -> {} unique, {} duplicates",
            report.total,
            report.unique_count(),
            report.duplicate_count()
        );
        Ok(report)
    }
}

/// Number of distinct effective addresses in `emails` under the default policy
pub fn count_unique<I, S>(emails: I) -> Result<usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Normalizer::default().count_unique(emails)
}

/// Group `emails` by normalized address under the default policy
pub fn dedup<I, S>(emails: I) -> Result<DedupReport>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Normalizer::default().dedup(emails)
}
