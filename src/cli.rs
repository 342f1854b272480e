use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use layoutgen::ProcessOptions;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// layoutgen - builds layout.json for simulator package directories
#[derive(Parser, Debug)]
#[command(name = "layoutgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output NDJSON events for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Config file (defaults to ~/.config/layoutgen/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Switches shared by every generation
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct RunArgs {
    /// Regenerate even if layout.json already exists
    #[arg(short, long)]
    pub force: bool,

    /// Only print warnings, errors and results
    #[arg(short, long)]
    pub quiet: bool,

    /// Report every skipped file
    #[arg(long)]
    pub debug: bool,

    /// Fail when manifest.json is missing
    #[arg(long)]
    pub check_manifest: bool,

    /// Leave manifest.json untouched
    #[arg(long)]
    pub skip_manifest_update: bool,
}

impl RunArgs {
    pub fn to_options(&self) -> ProcessOptions {
        ProcessOptions::new()
            .with_force(self.force)
            .with_quiet(self.quiet)
            .with_debug(self.debug)
            .with_check_manifest(self.check_manifest)
            .with_skip_manifest_update(self.skip_manifest_update)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate layout.json for one or more package directories
    Generate {
        /// Package directories
        #[arg(required = true, value_name = "DIR")]
        dirs: Vec<PathBuf>,

        #[command(flatten)]
        run: RunArgs,
    },

    /// Watch a package directory and regenerate layout.json on changes
    ///
    /// Every regeneration is forced.
    Watch {
        /// Package directory
        #[arg(value_name = "DIR")]
        dir: PathBuf,

        /// Quiet period after the last change, in milliseconds
        #[arg(long, value_name = "MS")]
        debounce_ms: Option<u64>,

        #[command(flatten)]
        run: RunArgs,
    },
}
