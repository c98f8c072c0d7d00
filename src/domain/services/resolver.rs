//! Resolver
//!
//! Flattens a named list into an ordered, duplicate-free sequence of literal
//! paths:
//! - `@name` references expand in place, depth-first, in the referenced list's order
//! - the first occurrence of a literal wins; later duplicates are dropped
//! - missing references and cycles are recorded and skipped, never fatal
//!
//! Exclusion lists are resolved the same way and subtracted by exact string
//! equality.

use std::collections::HashSet;

use serde::Serialize;

use crate::domain::entities::{ManifestStore, NamedList, ResolveError};
use crate::domain::policies::EntryFilter;
use crate::domain::value_objects::Entry;

/// A non-fatal problem found while expanding references.
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResolutionIssue {
    #[error("No dependency: '@{name}' in list '{referenced_from}' does not name a known list")]
    MissingReference {
        name: String,
        referenced_from: String,
    },

    #[error("Cyclic reference: '@{name}' in list '{referenced_from}' ({})", .chain.join(" → "))]
    CyclicReference {
        name: String,
        referenced_from: String,
        /// Lists being expanded when the cycle closed, ending with `name`.
        chain: Vec<String>,
    },
}

impl ResolutionIssue {
    /// The referenced list name that caused the issue.
    pub fn name(&self) -> &str {
        match self {
            Self::MissingReference { name, .. } | Self::CyclicReference { name, .. } => name,
        }
    }

    /// The list containing the offending reference.
    pub fn referenced_from(&self) -> &str {
        match self {
            Self::MissingReference {
                referenced_from, ..
            }
            | Self::CyclicReference {
                referenced_from, ..
            } => referenced_from,
        }
    }

    pub fn is_missing_reference(&self) -> bool {
        matches!(self, Self::MissingReference { .. })
    }

    pub fn is_cycle(&self) -> bool {
        matches!(self, Self::CyclicReference { .. })
    }
}

/// Result of one resolution request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedFileSet {
    paths: Vec<String>,
    issues: Vec<ResolutionIssue>,
}

impl ResolvedFileSet {
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    pub fn into_paths(self) -> Vec<String> {
        self.paths
    }

    pub fn issues(&self) -> &[ResolutionIssue] {
        &self.issues
    }

    /// True when no issues were recorded.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.paths.iter().any(|p| p == path)
    }

    /// Names of referenced lists that do not exist, in encounter order.
    pub fn missing_references(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.issues
            .iter()
            .filter(|i| i.is_missing_reference())
            .map(ResolutionIssue::name)
            .filter(|name| seen.insert(*name))
            .collect()
    }

    pub fn cycles(&self) -> impl Iterator<Item = &ResolutionIssue> {
        self.issues.iter().filter(|i| i.is_cycle())
    }

    /// Remove every path equal to a path of `exclusions`, keeping order.
    ///
    /// Issues of both sets are kept. Subtracting the same set twice is a no-op.
    pub fn subtract(&self, exclusions: &ResolvedFileSet) -> ResolvedFileSet {
        let excluded: HashSet<&str> = exclusions.paths.iter().map(String::as_str).collect();
        let mut result = ResolvedFileSet {
            paths: self
                .paths
                .iter()
                .filter(|p| !excluded.contains(p.as_str()))
                .cloned()
                .collect(),
            issues: self.issues.clone(),
        };
        for issue in &exclusions.issues {
            result.record(issue.clone());
        }
        result
    }

    /// Keep only paths the filter does not reject.
    pub fn filtered(&self, filter: &dyn EntryFilter) -> ResolvedFileSet {
        ResolvedFileSet {
            paths: self
                .paths
                .iter()
                .filter(|p| !filter.rejects(p))
                .cloned()
                .collect(),
            issues: self.issues.clone(),
        }
    }

    fn record(&mut self, issue: ResolutionIssue) {
        if !self.issues.contains(&issue) {
            self.issues.push(issue);
        }
    }
}

/// Expands named lists of a [`ManifestStore`].
///
/// Holds only a shared borrow of the store; every call starts from scratch.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    store: &'a ManifestStore,
}

impl<'a> Resolver<'a> {
    pub fn new(store: &'a ManifestStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &'a ManifestStore {
        self.store
    }

    /// Resolve a list of the store.
    ///
    /// Fails only if `name` itself is unknown; problems further down are
    /// returned as issues alongside the partial result.
    pub fn resolve(&self, name: &str) -> Result<ResolvedFileSet, ResolveError> {
        let list = self.store.get(name)?;
        Ok(self.resolve_list(list))
    }

    /// Resolve a list that may not be part of the store (ad hoc lists).
    ///
    /// The list's own name is treated as being expanded, so a reference back
    /// to a store list of the same name is reported as a cycle.
    pub fn resolve_list(&self, list: &NamedList) -> ResolvedFileSet {
        let result = Walk::new(self.store).run(list.name(), list.entries());
        tracing::debug!(
            list = list.name(),
            paths = result.paths.len(),
            issues = result.issues.len(),
            "resolved list"
        );
        result
    }

    /// Subtract the resolved `exclusions` list from `file_set`.
    ///
    /// References inside the exclusion list are expanded first; its issues are
    /// merged into the returned set. Exclusions that match nothing are ignored.
    pub fn apply_exclusions(
        &self,
        file_set: &ResolvedFileSet,
        exclusions: &NamedList,
    ) -> ResolvedFileSet {
        file_set.subtract(&self.resolve_list(exclusions))
    }
}

/// A list being expanded and the index of its next entry.
struct Frame<'s> {
    name: &'s str,
    entries: &'s [Entry],
    next: usize,
}

/// State of a single depth-first expansion.
///
/// The walk keeps its own frame stack, so reference chains of any length
/// resolve without growing the call stack.
struct Walk<'s> {
    store: &'s ManifestStore,
    emitted: HashSet<String>,
    /// Lists currently being expanded, outermost first.
    stack: Vec<Frame<'s>>,
    on_stack: HashSet<&'s str>,
    /// Lists already fully expanded in this walk. Their literals are emitted
    /// and their issues recorded, so later references to them are no-ops.
    completed: HashSet<&'s str>,
    result: ResolvedFileSet,
}

impl<'s> Walk<'s> {
    fn new(store: &'s ManifestStore) -> Self {
        Self {
            store,
            emitted: HashSet::new(),
            stack: Vec::new(),
            on_stack: HashSet::new(),
            completed: HashSet::new(),
            result: ResolvedFileSet::default(),
        }
    }

    fn run(mut self, root: &'s str, entries: &'s [Entry]) -> ResolvedFileSet {
        self.push(root, entries);

        while let Some(frame) = self.stack.last_mut() {
            let (from, entries, index) = (frame.name, frame.entries, frame.next);
            let Some(entry) = entries.get(index) else {
                self.pop();
                continue;
            };
            frame.next += 1;

            match entry {
                Entry::Literal(path) => {
                    if self.emitted.insert(path.clone()) {
                        self.result.paths.push(path.clone());
                    }
                }
                Entry::Reference(name) => self.enter(from, name),
            }
        }

        self.result
    }

    fn push(&mut self, name: &'s str, entries: &'s [Entry]) {
        self.on_stack.insert(name);
        self.stack.push(Frame {
            name,
            entries,
            next: 0,
        });
    }

    fn pop(&mut self) {
        if let Some(frame) = self.stack.pop() {
            self.on_stack.remove(frame.name);
            self.completed.insert(frame.name);
        }
    }

    fn enter(&mut self, from: &'s str, name: &'s str) {
        if self.on_stack.contains(name) {
            let mut chain: Vec<String> = self.stack.iter().map(|f| f.name.to_string()).collect();
            chain.push(name.to_string());
            tracing::debug!(list = from, reference = name, "cyclic reference skipped");
            self.result.record(ResolutionIssue::CyclicReference {
                name: name.to_string(),
                referenced_from: from.to_string(),
                chain,
            });
            return;
        }

        if self.completed.contains(name) {
            tracing::trace!(list = from, reference = name, "already expanded");
            return;
        }

        let store = self.store;
        match store.find(name) {
            Some(list) => {
                tracing::trace!(list = from, reference = name, "expanding reference");
                self.push(list.name(), list.entries());
            }
            None => {
                tracing::debug!(list = from, reference = name, "no dependency");
                self.result.record(ResolutionIssue::MissingReference {
                    name: name.to_string(),
                    referenced_from: from.to_string(),
                });
            }
        }
    }
}
