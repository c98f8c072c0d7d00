use std::io::Write;

use anyhow::{Context, Result};

use filesets::domain::value_objects::is_glob_pattern;
use filesets::{assemble, BuildInput, BuildInputRequest, Entry, FilesetsError, SubstringFilter};

use super::CommandContext;
use crate::cli::ResolveArgs;
use crate::ui::json;

/// Build the assembly request from CLI flags layered over config.
pub fn build_request(ctx: &CommandContext, args: &ResolveArgs) -> Result<BuildInputRequest> {
    let resolve = &ctx.config.resolve;

    let prepend = if args.prepend.is_empty() {
        resolve.prepend.clone()
    } else {
        args.prepend.clone()
    };
    let skip = if args.skip_containing.is_empty() {
        &resolve.skip_containing
    } else {
        &args.skip_containing
    };
    let exclude_entries = args
        .exclude_paths
        .iter()
        .map(|raw| Entry::parse(raw).with_context(|| format!("invalid --exclude-path '{}'", raw)))
        .collect::<Result<Vec<_>>>()?;

    let mut request = BuildInputRequest::new(&args.list)
        .with_exclude_entries(exclude_entries)
        .with_prepend(prepend)
        .with_filter(SubstringFilter::new(skip.iter().cloned()));
    if let Some(name) = &args.exclude {
        request = request.with_exclude_list(name);
    }
    if !args.no_companion {
        if let Some(suffix) = ctx.config.companion_suffix() {
            request = request.with_companion_suffix(suffix);
        }
    }
    Ok(request)
}

pub fn cmd_resolve(ctx: &CommandContext, args: &ResolveArgs) -> Result<()> {
    let store = ctx.load_store()?;
    let request = build_request(ctx, args)?;
    let input = assemble(&store, &request)?;

    let mut out = std::io::stdout().lock();
    if ctx.json {
        write_json(&mut out, &input)?;
    } else {
        for file in &input.files {
            writeln!(out, "{}", file)?;
        }
        for issue in &input.issues {
            tracing::warn!("{}", issue);
        }
    }
    out.flush()?;

    tracing::info!(
        list = %input.list,
        files = input.files.len(),
        excluded = input.excluded.len(),
        filtered = input.filtered.len(),
        exclusion_list = input.exclusion_list.as_deref().unwrap_or("-"),
        "resolved"
    );

    if !input.is_clean() && (args.strict || ctx.config.resolve.fail_on_issues) {
        return Err(FilesetsError::UnresolvedIssues {
            list: input.list.clone(),
            count: input.issues.len(),
        }
        .into());
    }
    Ok(())
}

fn write_json(out: &mut impl Write, input: &BuildInput) -> std::io::Result<()> {
    json::write_event(
        out,
        &serde_json::json!({
            "event": "start",
            "command": "resolve",
            "list": input.list,
        }),
    )?;
    for file in &input.files {
        json::write_event(
            out,
            &serde_json::json!({
                "event": "file",
                "path": file,
                "pattern": is_glob_pattern(file),
            }),
        )?;
    }
    for issue in &input.issues {
        json::write_tagged(out, "issue", issue)?;
    }
    json::write_event(
        out,
        &serde_json::json!({
            "event": "complete",
            "command": "resolve",
            "list": input.list,
            "files": input.files.len(),
            "exclusion_list": input.exclusion_list,
            "excluded": input.excluded,
            "filtered": input.filtered,
            "issues": input.issues.len(),
            "success": input.is_clean(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use filesets::config::LoadedConfig;
    use std::path::Path;

    fn ctx_with(config: filesets::Config) -> CommandContext {
        CommandContext::new(
            Path::new("."),
            LoadedConfig {
                config,
                ..LoadedConfig::default()
            },
            None,
            false,
        )
    }

    #[test]
    fn config_values_apply_when_flags_absent() {
        let mut config = filesets::Config::default();
        config.resolve.prepend = vec!["lib/jasmine/jasmine.js".to_string()];
        config.resolve.skip_containing = vec!["jasmine".to_string()];

        let args = ResolveArgs {
            list: "jstd".to_string(),
            ..ResolveArgs::default()
        };
        let request = build_request(&ctx_with(config), &args).unwrap();

        assert_eq!(request.prepend, vec!["lib/jasmine/jasmine.js"]);
        assert_eq!(request.filter.needles(), &["jasmine".to_string()]);
        assert_eq!(request.companion_suffix.as_deref(), Some("Exclude"));
    }

    #[test]
    fn flags_replace_config_values() {
        let mut config = filesets::Config::default();
        config.resolve.prepend = vec!["configured.js".to_string()];

        let args = ResolveArgs {
            list: "jstd".to_string(),
            prepend: vec!["flag.js".to_string()],
            exclude: Some("jstdJqueryExclude".to_string()),
            exclude_paths: vec!["@vendor".to_string(), "x.js".to_string()],
            no_companion: true,
            ..ResolveArgs::default()
        };
        let request = build_request(&ctx_with(config), &args).unwrap();

        assert_eq!(request.prepend, vec!["flag.js"]);
        assert_eq!(request.exclude_list.as_deref(), Some("jstdJqueryExclude"));
        assert_eq!(
            request.exclude_entries,
            vec![Entry::reference("vendor"), Entry::literal("x.js")]
        );
        assert_eq!(request.companion_suffix, None);
    }

    #[test]
    fn bare_marker_exclude_path_is_rejected() {
        let args = ResolveArgs {
            list: "jstd".to_string(),
            exclude_paths: vec!["@".to_string()],
            ..ResolveArgs::default()
        };
        assert!(build_request(&ctx_with(filesets::Config::default()), &args).is_err());
    }

    #[test]
    fn json_output_is_ndjson() {
        let input = BuildInput {
            list: "app".to_string(),
            files: vec!["a.js".to_string(), "test/*.js".to_string()],
            ..BuildInput::default()
        };
        let mut out = Vec::new();
        write_json(&mut out, &input).unwrap();

        let lines: Vec<serde_json::Value> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0]["event"], "start");
        assert_eq!(lines[2]["pattern"], true);
        assert_eq!(lines[3]["success"], true);
    }
}
