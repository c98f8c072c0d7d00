//! Property tests for manifest parsing.

use std::path::Path;

use proptest::prelude::*;

use filesets::{ManifestFormat, Resolver};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing never panics on arbitrary input in any format.
    #[test]
    fn property_parse_never_panics(content in "(?s).{0,256}") {
        for format in [ManifestFormat::Toml, ManifestFormat::Json, ManifestFormat::Yaml] {
            let _ = format.parse(&content, Path::new("manifest"));
        }
    }

    /// PROPERTY: A JSON manifest built from arbitrary list names and paths
    /// parses and every list resolves.
    #[test]
    fn property_generated_json_manifest_resolves(
        lists in proptest::collection::btree_map(
            "[a-z][a-zA-Z0-9]{0,8}",
            proptest::collection::vec("[a-z/]{1,12}(\\.js)?", 0..=5),
            1..=4,
        )
    ) {
        let content = serde_json::to_string(&lists).unwrap();
        let store = ManifestFormat::Json.parse(&content, Path::new("files.json")).unwrap();
        prop_assert_eq!(store.len(), lists.len());

        let resolver = Resolver::new(&store);
        for name in lists.keys() {
            let resolved = resolver.resolve(name).unwrap();
            prop_assert!(resolved.is_clean());
            prop_assert!(resolved.len() <= lists[name].len());
        }
    }
}
