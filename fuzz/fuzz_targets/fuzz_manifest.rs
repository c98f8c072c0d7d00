#![no_main]

use std::path::Path;

use filesets::{ManifestFormat, Resolver};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };
    for format in [ManifestFormat::Toml, ManifestFormat::Json, ManifestFormat::Yaml] {
        // Any manifest that parses must resolve every list without panicking
        if let Ok(store) = format.parse(content, Path::new("fuzz")) {
            let resolver = Resolver::new(&store);
            for name in store.names() {
                let _ = resolver.resolve(name);
            }
        }
    }
});
