//! Entry filters
//!
//! A secondary exclusion predicate supplied by the caller, applied to resolved
//! paths. Unlike exclusion lists, filters may match on any part of a path.

/// Decides whether a resolved path should be dropped.
pub trait EntryFilter {
    fn rejects(&self, path: &str) -> bool;
}

impl<F> EntryFilter for F
where
    F: Fn(&str) -> bool,
{
    fn rejects(&self, path: &str) -> bool {
        self(path)
    }
}

/// Rejects paths containing any of the configured substrings.
///
/// An empty filter rejects nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubstringFilter {
    needles: Vec<String>,
}

impl SubstringFilter {
    pub fn new<I, S>(needles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            needles: needles
                .into_iter()
                .map(Into::into)
                .filter(|n: &String| !n.is_empty())
                .collect(),
        }
    }

    pub fn needles(&self) -> &[String] {
        &self.needles
    }

    pub fn is_empty(&self) -> bool {
        self.needles.is_empty()
    }
}

impl EntryFilter for SubstringFilter {
    fn rejects(&self, path: &str) -> bool {
        self.needles.iter().any(|n| path.contains(n.as_str()))
    }
}
