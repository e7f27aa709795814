//! CNAME chain following over a flat answer section.
//!
//! Nameservers usually return the whole alias chain in one answer section,
//! so the target name is looked up again in the full record set at every
//! hop instead of assuming a single level of indirection.

use ferrous_resolver_domain::{names_equal, DnsRecord, DomainError, RecordType};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::trace;

pub const DEFAULT_MAX_ALIAS_DEPTH: usize = 16;

/// Addresses that `name` ends up at, following CNAMEs through `answers`.
///
/// A records for a name win over CNAMEs for the same name. When a name has
/// several CNAMEs, the addresses of every branch are collected in record
/// order; a target reached by more than one branch contributes its
/// addresses once. An empty result means nothing in `answers` leads to an
/// address.
pub fn resolve_aliases(answers: &[DnsRecord], name: &str) -> Result<Vec<Arc<str>>, DomainError> {
    resolve_aliases_bounded(answers, name, DEFAULT_MAX_ALIAS_DEPTH)
}

/// Same as [`resolve_aliases`], failing once a chain needs more than
/// `max_depth` CNAME hops.
pub fn resolve_aliases_bounded(
    answers: &[DnsRecord],
    name: &str,
    max_depth: usize,
) -> Result<Vec<Arc<str>>, DomainError> {
    let mut walk = AliasWalk {
        answers,
        max_depth,
        path: Vec::new(),
        expanded: HashMap::new(),
        addresses: Vec::new(),
    };
    walk.follow(name)?;
    Ok(walk.addresses)
}

struct AliasWalk<'a> {
    answers: &'a [DnsRecord],
    max_depth: usize,
    // Names on the current branch only, so two branches that converge on
    // the same target are not mistaken for a loop.
    path: Vec<&'a str>,
    // Fully expanded names and the longest chain below each. Every name is
    // expanded at most once per call.
    expanded: HashMap<String, usize>,
    addresses: Vec<Arc<str>>,
}

impl<'a> AliasWalk<'a> {
    /// Returns the number of CNAME hops below `name`.
    fn follow(&mut self, name: &'a str) -> Result<usize, DomainError> {
        if self.path.iter().any(|seen| names_equal(seen, name)) {
            return Err(DomainError::AliasLoopDetected {
                name: name.to_string(),
            });
        }

        let key = name_key(name);
        if let Some(&height) = self.expanded.get(&key) {
            self.check_depth(name, height)?;
            return Ok(height);
        }
        self.check_depth(name, 0)?;

        let answers = self.answers;
        let named: Vec<&'a DnsRecord> = answers.iter().filter(|r| r.has_name(name)).collect();

        let before = self.addresses.len();
        self.addresses.extend(
            named
                .iter()
                .filter(|r| r.is_type(RecordType::A))
                .map(|r| Arc::clone(&r.data)),
        );

        let mut height = 0;
        if self.addresses.len() == before {
            self.path.push(name);
            for cname in named.into_iter().filter(|r| r.is_type(RecordType::CNAME)) {
                trace!(alias = %name, target = %cname.data, "Following CNAME");
                height = height.max(self.follow(&cname.data)? + 1);
            }
            self.path.pop();
        }

        self.expanded.insert(key, height);
        Ok(height)
    }

    fn check_depth(&self, name: &str, height: usize) -> Result<(), DomainError> {
        if self.path.len() + height > self.max_depth {
            return Err(DomainError::AliasChainTooLong {
                name: self.path.first().copied().unwrap_or(name).to_string(),
                max_depth: self.max_depth,
            });
        }
        Ok(())
    }
}

fn name_key(name: &str) -> String {
    name.strip_suffix('.').unwrap_or(name).to_ascii_lowercase()
}
