//! gitstamp — render git metadata into a template.
//!
//! # Usage
//!
//! ```text
//! gitstamp <template> [-g <repo>] [-o <out>] [-f] [--ignore-git-errors]
//! gitstamp -v
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).

mod commands;

use anyhow::Result;
use clap::{ArgAction, Parser};

use commands::stamp::StampArgs;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "gitstamp",
    version,
    disable_version_flag = true,
    about = "Render git repository metadata into a text template",
    long_about = None,
)]
struct Cli {
    /// Print version and exit.
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: (),

    #[command(flatten)]
    stamp: StampArgs,
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();
    cli.stamp.run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_all_flags() {
        let cli = Cli::try_parse_from([
            "gitstamp",
            "version.tera",
            "-g",
            "/repo",
            "-o",
            "version.h",
            "-f",
            "--ignore-git-errors",
        ])
        .unwrap();
        let opts = cli.stamp.into_options();
        assert_eq!(opts.template, std::path::PathBuf::from("version.tera"));
        assert_eq!(opts.git_repo, Some("/repo".into()));
        assert_eq!(opts.out, Some("version.h".into()));
        assert!(opts.force);
        assert!(opts.ignore_git_errors);
    }

    #[test]
    fn empty_paths_are_accepted() {
        let cli = Cli::try_parse_from(["gitstamp", "version.tera", "-g", "", "-o", ""]).unwrap();
        let opts = cli.stamp.into_options();
        assert_eq!(opts.git_repo, Some(std::path::PathBuf::new()));
        assert_eq!(opts.out, Some(std::path::PathBuf::new()));
    }

    #[test]
    fn template_is_required() {
        assert!(Cli::try_parse_from(["gitstamp"]).is_err());
    }

    #[test]
    fn short_v_is_version() {
        let err = Cli::try_parse_from(["gitstamp", "-v"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }
}
