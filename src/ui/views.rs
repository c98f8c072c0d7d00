//! Plain-text views for `lists` and `check`.

use filesets::application::{CheckResult, ListReport};
use filesets::domain::entities::ManifestStore;
use filesets::domain::value_objects::REFERENCE_MARKER;

struct Icons {
    ok: &'static str,
    fail: &'static str,
    arrow: &'static str,
}

impl Icons {
    fn pick(unicode: bool) -> Self {
        if unicode {
            Self {
                ok: "✓",
                fail: "✗",
                arrow: "→",
            }
        } else {
            Self {
                ok: "[OK]",
                fail: "[FAIL]",
                arrow: "->",
            }
        }
    }
}

fn plural(count: usize, one: &str, many: &str) -> String {
    format!("{} {}", count, if count == 1 { one } else { many })
}

/// One line per list: name, entry count and direct references.
pub fn render_lists(store: &ManifestStore, unicode: bool) -> String {
    let icons = Icons::pick(unicode);
    let width = store.names().iter().map(|n| n.len()).max().unwrap_or(0);
    let mut out = String::new();

    for list in store.lists() {
        let refs: Vec<String> = list
            .references()
            .map(|r| format!("{}{}", REFERENCE_MARKER, r))
            .collect();
        out.push_str(&format!(
            "{:<width$}  {}",
            list.name(),
            plural(list.len(), "entry", "entries"),
            width = width
        ));
        if !refs.is_empty() {
            out.push_str(&format!("  {} {}", icons.arrow, refs.join(", ")));
        }
        out.push('\n');
    }

    out.push('\n');
    out.push_str(&plural(store.len(), "list", "lists"));
    out.push('\n');
    out
}

fn render_report(report: &ListReport, icons: &Icons) -> String {
    let status = if report.issues.is_empty() {
        icons.ok
    } else {
        icons.fail
    };
    let mut line = format!(
        "{} {}: {}",
        status,
        report.name,
        plural(report.resolved, "path", "paths")
    );
    if !report.issues.is_empty() {
        line.push_str(&format!(", {}", plural(report.issues.len(), "issue", "issues")));
    }
    line.push('\n');
    for issue in &report.issues {
        line.push_str(&format!("    {}\n", issue));
    }
    line
}

/// Per-list status lines followed by a summary.
pub fn render_check(result: &CheckResult, unicode: bool) -> String {
    let icons = Icons::pick(unicode);
    let mut out = String::new();

    for report in &result.lists {
        out.push_str(&render_report(report, &icons));
    }

    out.push('\n');
    out.push_str(&format!(
        "{} checked, {}\n",
        plural(result.lists.len(), "list", "lists"),
        plural(result.issues().len(), "issue", "issues")
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use filesets::CheckUseCase;

    fn store() -> ManifestStore {
        ManifestStore::from_raw(vec![
            ("base".to_string(), vec!["a.js", "b.js"]),
            ("extra".to_string(), vec!["c.js", "@base", "@ghost"]),
        ])
        .unwrap()
    }

    #[test]
    fn lists_view_aligns_names() {
        let out = render_lists(&store(), false);
        assert_eq!(
            out,
            "base   2 entries\nextra  3 entries  -> @base, @ghost\n\n2 lists\n"
        );
    }

    #[test]
    fn check_view_lists_issues_under_failing_list() {
        let result = CheckUseCase::new(&store()).execute();
        let out = render_check(&result, false);
        assert_eq!(
            out,
            "[OK] base: 2 paths\n\
             [FAIL] extra: 3 paths, 1 issue\n    \
             No dependency: '@ghost' in list 'extra' does not name a known list\n\
             \n\
             2 lists checked, 1 issue\n"
        );
    }

    #[test]
    fn unicode_icons() {
        let result = CheckUseCase::new(&store()).execute();
        assert!(render_check(&result, true).starts_with("✓ base"));
    }
}
