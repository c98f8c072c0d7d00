//! Test fixtures - reusable manifest content.

/// The small scenario used throughout: one reference, one exclusion list.
pub const BASIC_MANIFEST: &str = r#"
base = ["a.js", "b.js"]
extra = ["c.js", "@base"]
exclude = ["b.js"]
"#;

/// A trimmed-down test-runner manifest with vendor files, source groups,
/// test patterns and a companion exclusion list.
pub const RUNNER_MANIFEST: &str = r#"
angularSrc = [
  "src/Angular.js",
  "src/loader.js",
  "src/angular-bootstrap.js",
  "src/ng/compile.js",
]

angularScenario = [
  "src/ngScenario/Scenario.js",
  "src/ngScenario/Runner.js",
]

angularTest = [
  "test/testabilityPatch.js",
  "test/matchers.js",
  "test/ng/*.js",
  "test/ngScenario/jstd-scenario-adapter/*.js",
]

jstd = [
  "lib/jasmine/jasmine.js",
  "lib/jasmine-jstd-adapter/JasmineAdapter.js",
  "lib/jquery/jquery.js",
  "test/jquery_remove.js",
  "@angularSrc",
  "src/publishExternalApis.js",
  "@angularScenario",
  "src/ngScenario/jstd-scenario-adapter/Adapter.js",
  "@angularTest",
]

jstdExclude = [
  "test/jquery_alias.js",
  "src/angular-bootstrap.js",
]
"#;

/// Manifest with a missing reference and a two-list cycle.
pub const BROKEN_MANIFEST: &str = r#"
app = ["main.js", "@vendor", "@ghost"]
vendor = ["lib/jquery.js", "@plugins"]
plugins = ["lib/plugin.js", "@vendor"]
"#;
