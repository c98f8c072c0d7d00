//! Property tests for reference resolution.

use std::collections::HashSet;

use proptest::prelude::*;

use filesets::{ManifestStore, NamedList, Resolver};

const LIST_COUNT: usize = 5;

/// One raw entry: a literal from a small pool, or a reference to one of the
/// lists (index `LIST_COUNT` names a list that does not exist).
fn raw_entry() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => (0..8usize).prop_map(|i| format!("src/f{}.js", i)),
        1 => Just("test/*.js".to_string()),
        2 => (0..=LIST_COUNT).prop_map(|i| format!("@l{}", i)),
    ]
}

fn raw_manifest() -> impl Strategy<Value = Vec<(String, Vec<String>)>> {
    proptest::collection::vec(proptest::collection::vec(raw_entry(), 0..=6), LIST_COUNT).prop_map(
        |lists| {
            lists
                .into_iter()
                .enumerate()
                .map(|(i, entries)| (format!("l{}", i), entries))
                .collect()
        },
    )
}

fn literal_pool(raw: &[(String, Vec<String>)]) -> HashSet<String> {
    raw.iter()
        .flat_map(|(_, entries)| entries.iter())
        .filter(|e| !e.starts_with('@'))
        .cloned()
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Resolution terminates on arbitrary reference graphs,
    /// cycles included, and yields only literals from the manifest without duplicates.
    #[test]
    fn property_resolution_is_duplicate_free_and_literal(raw in raw_manifest()) {
        let pool = literal_pool(&raw);
        let store = ManifestStore::from_raw(raw).unwrap();
        let resolver = Resolver::new(&store);

        for name in store.names() {
            let resolved = resolver.resolve(name).unwrap();
            let mut seen = HashSet::new();
            for path in resolved.paths() {
                prop_assert!(seen.insert(path.clone()), "duplicate {} in {}", path, name);
                prop_assert!(pool.contains(path), "{} is not a manifest literal", path);
            }
        }
    }

    /// PROPERTY: A list without references resolves to its entries in order,
    /// keeping the first occurrence of each.
    #[test]
    fn property_reference_free_list_keeps_order(
        entries in proptest::collection::vec((0..8usize).prop_map(|i| format!("f{}.js", i)), 0..=12)
    ) {
        let store = ManifestStore::from_raw(vec![("only".to_string(), entries.clone())]).unwrap();
        let resolved = Resolver::new(&store).resolve("only").unwrap();

        let mut seen = HashSet::new();
        let expected: Vec<String> = entries.into_iter().filter(|e| seen.insert(e.clone())).collect();
        prop_assert_eq!(resolved.paths(), expected.as_slice());
        prop_assert!(resolved.is_clean());
    }

    /// PROPERTY: The root list's literals that come before its first
    /// reference lead the output, in order.
    #[test]
    fn property_leading_literals_come_first(raw in raw_manifest()) {
        let store = ManifestStore::from_raw(raw).unwrap();
        let resolver = Resolver::new(&store);

        for list in store.lists() {
            let resolved = resolver.resolve(list.name()).unwrap();
            let mut seen = HashSet::new();
            let leading: Vec<&str> = list
                .entries()
                .iter()
                .map_while(|e| e.as_literal())
                .filter(|lit| seen.insert(*lit))
                .collect();
            let head: Vec<&str> = resolved.paths().iter().take(leading.len()).map(String::as_str).collect();
            prop_assert_eq!(head, leading);
        }
    }

    /// PROPERTY: Subtracting an exclusion list twice equals subtracting it once,
    /// and no excluded path survives.
    #[test]
    fn property_exclusion_is_idempotent(
        raw in raw_manifest(),
        excluded in proptest::collection::vec(raw_entry(), 0..=4),
    ) {
        let store = ManifestStore::from_raw(raw).unwrap();
        let resolver = Resolver::new(&store);
        let exclusions = NamedList::parse("exclusions", &excluded).unwrap();
        let excluded_paths = resolver.resolve_list(&exclusions);

        let resolved = resolver.resolve("l0").unwrap();
        let once = resolver.apply_exclusions(&resolved, &exclusions);
        let twice = resolver.apply_exclusions(&once, &exclusions);

        prop_assert_eq!(once.paths(), twice.paths());
        for path in once.paths() {
            prop_assert!(!excluded_paths.contains(path));
            prop_assert!(resolved.contains(path));
        }
    }

    /// PROPERTY: Every issue points at a reference that actually appears in
    /// the list it claims to come from.
    #[test]
    fn property_issues_name_real_references(raw in raw_manifest()) {
        let store = ManifestStore::from_raw(raw).unwrap();
        let resolver = Resolver::new(&store);

        for name in store.names() {
            for issue in resolver.resolve(name).unwrap().issues() {
                let from = store.get(issue.referenced_from()).unwrap();
                prop_assert!(from.references().any(|r| r == issue.name()));
                if issue.is_missing_reference() {
                    prop_assert!(!store.has(issue.name()));
                } else {
                    prop_assert!(store.has(issue.name()));
                }
            }
        }
    }
}
