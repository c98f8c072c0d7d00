//! CLI Argument Parsing
//!
//! Global flags (--json, --manifest, --verbose, --quiet) are inherited by all
//! subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// filesets - resolve named file lists for build and test runners
#[derive(Parser, Debug)]
#[command(name = "filesets")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Manifest file (.toml, .json, .yaml); overrides config and FILESETS_MANIFEST
    #[arg(short, long, global = true, value_name = "PATH")]
    pub manifest: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a list into the ordered file list for a runner
    Resolve(ResolveArgs),

    /// Show every list with its entry count and references
    Lists,

    /// Resolve every list and report missing references and cycles
    Check,
}

#[derive(clap::Args, Debug, Default)]
pub struct ResolveArgs {
    /// Name of the list to resolve
    pub list: String,

    /// Exclusion list to subtract (defaults to the <LIST>Exclude companion)
    #[arg(short = 'x', long, value_name = "LIST")]
    pub exclude: Option<String>,

    /// Extra path (or @list) to exclude; can be given multiple times
    #[arg(long = "exclude-path", value_name = "PATH")]
    pub exclude_paths: Vec<String>,

    /// Entry to place first, never filtered or excluded; replaces configured prepends
    #[arg(long = "prepend", value_name = "PATH")]
    pub prepend: Vec<String>,

    /// Drop resolved paths containing this text; replaces configured values
    #[arg(long = "skip-containing", value_name = "TEXT")]
    pub skip_containing: Vec<String>,

    /// Do not look up a <LIST>Exclude companion list
    #[arg(long)]
    pub no_companion: bool,

    /// Exit non-zero when references are missing or cyclic
    #[arg(long)]
    pub strict: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_resolve_with_options() {
        let cli = Cli::try_parse_from([
            "filesets",
            "--manifest",
            "files.json",
            "resolve",
            "jstd",
            "-x",
            "jstdExclude",
            "--exclude-path",
            "test/jquery_alias.js",
            "--prepend",
            "lib/jasmine/jasmine.js",
            "--skip-containing",
            "jstd",
            "--strict",
        ])
        .unwrap();

        assert_eq!(cli.manifest, Some(PathBuf::from("files.json")));
        match cli.command {
            Commands::Resolve(args) => {
                assert_eq!(args.list, "jstd");
                assert_eq!(args.exclude.as_deref(), Some("jstdExclude"));
                assert_eq!(args.exclude_paths, vec!["test/jquery_alias.js"]);
                assert_eq!(args.prepend, vec!["lib/jasmine/jasmine.js"]);
                assert_eq!(args.skip_containing, vec!["jstd"]);
                assert!(args.strict);
                assert!(!args.no_companion);
            }
            other => panic!("expected resolve, got {:?}", other),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["filesets", "check", "--json", "-vv"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Check));
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["filesets", "-q", "-v", "lists"]).is_err());
    }
}
