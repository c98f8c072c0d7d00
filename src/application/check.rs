//! Check Use Case
//!
//! Resolves every list of a manifest and collects all resolution issues, so a
//! broken reference is caught before any runner consumes the lists.

use std::collections::HashSet;

use serde::Serialize;

use crate::domain::entities::ManifestStore;
use crate::domain::services::{ResolutionIssue, Resolver};

/// Resolution summary of one list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListReport {
    pub name: String,
    /// Entries as authored
    pub entries: usize,
    /// Direct references to other lists
    pub references: Vec<String>,
    /// Paths after resolution
    pub resolved: usize,
    /// Resolved paths that are glob patterns
    pub patterns: usize,
    pub issues: Vec<ResolutionIssue>,
}

/// Result of checking a whole manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    /// One report per list, in name order
    pub lists: Vec<ListReport>,
    /// Lists no other list references (entry points)
    pub roots: Vec<String>,
}

impl CheckResult {
    /// Distinct issues across all lists.
    ///
    /// A broken reference shows up in every list that reaches it; it is
    /// counted once here.
    pub fn issues(&self) -> Vec<&ResolutionIssue> {
        let mut seen = HashSet::new();
        self.lists
            .iter()
            .flat_map(|l| l.issues.iter())
            .filter(|i| seen.insert(*i))
            .collect()
    }

    pub fn is_clean(&self) -> bool {
        self.lists.iter().all(|l| l.issues.is_empty())
    }
}

/// Check Use Case
pub struct CheckUseCase<'a> {
    store: &'a ManifestStore,
}

impl<'a> CheckUseCase<'a> {
    pub fn new(store: &'a ManifestStore) -> Self {
        Self { store }
    }

    pub fn execute(&self) -> CheckResult {
        self.execute_with_callback(|_| {})
    }

    /// Execute with a callback for each list (for streaming output)
    pub fn execute_with_callback<F>(&self, mut on_list: F) -> CheckResult
    where
        F: FnMut(&ListReport),
    {
        let resolver = Resolver::new(self.store);
        let mut result = CheckResult::default();
        let mut referenced: HashSet<&str> = HashSet::new();

        for list in self.store.lists() {
            referenced.extend(list.references());

            let resolved = resolver.resolve_list(list);
            let report = ListReport {
                name: list.name().to_string(),
                entries: list.len(),
                references: list.references().map(str::to_string).collect(),
                resolved: resolved.len(),
                patterns: resolved
                    .paths()
                    .iter()
                    .filter(|p| crate::domain::value_objects::is_glob_pattern(p))
                    .count(),
                issues: resolved.issues().to_vec(),
            };
            on_list(&report);
            result.lists.push(report);
        }

        result.roots = self
            .store
            .names()
            .into_iter()
            .filter(|name| !referenced.contains(name))
            .map(str::to_string)
            .collect();

        result
    }
}
