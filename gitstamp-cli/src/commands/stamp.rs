//! `gitstamp <template>` — inspect, render, write.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::Args;
use gitstamp_sync::{pipeline, StampOptions, WriteResult};

/// Arguments for a stamp run.
#[derive(Args, Debug)]
pub struct StampArgs {
    /// Template file to render.
    pub template: PathBuf,

    /// Git repository path (default: the current directory).
    #[arg(short = 'g', long = "git-repo", value_name = "PATH", value_parser = path_or_empty())]
    pub git_repo: Option<PathBuf>,

    /// Output file path (default: stdout).
    #[arg(short = 'o', long = "out", value_name = "PATH", value_parser = path_or_empty())]
    pub out: Option<PathBuf>,

    /// Overwrite the destination even when the content is unchanged.
    #[arg(short = 'f', long)]
    pub force: bool,

    /// Render with empty values instead of failing when git queries fail.
    #[arg(long)]
    pub ignore_git_errors: bool,
}

/// Like clap's path parser, but an empty value is accepted and later treated
/// as unset, so `-o "$OUT"` works with an empty `$OUT`.
fn path_or_empty() -> impl TypedValueParser<Value = PathBuf> {
    OsStringValueParser::new().map(PathBuf::from)
}

impl StampArgs {
    pub fn into_options(self) -> StampOptions {
        StampOptions {
            template: self.template,
            git_repo: self.git_repo,
            out: self.out,
            force: self.force,
            ignore_git_errors: self.ignore_git_errors,
        }
    }

    pub fn run(self) -> Result<()> {
        let opts = self.into_options();
        let result = pipeline::run(&opts)
            .with_context(|| format!("failed to stamp '{}'", opts.template.display()))?;

        match result {
            WriteResult::Stdout => {}
            WriteResult::Written { path } => tracing::debug!("updated {}", path.display()),
            WriteResult::Unchanged { path } => {
                tracing::debug!("{} already up to date", path.display())
            }
        }
        Ok(())
    }
}
