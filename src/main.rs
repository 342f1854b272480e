//! layoutgen CLI
//!
//! Usage: layoutgen <COMMAND>
//!
//! Commands:
//!   generate  Generate layout.json for package directories
//!   watch     Regenerate layout.json whenever a package changes

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use layoutgen::Config;

use cli::{Cli, Commands};
use ui::context::UiContext;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, warnings) = Config::load_layered(cli.config.as_deref())?;
    let ui = UiContext::new(cli.json, cli.color, &config);
    ui::print_config_warnings(&warnings, &ui);

    match cli.command {
        Commands::Generate { dirs, run } => {
            let all_ok = commands::generate::cmd_generate(&dirs, &run, &ui, &config)?;
            if !all_ok {
                std::process::exit(1);
            }
        }
        Commands::Watch {
            dir,
            debounce_ms,
            run,
        } => commands::watch::cmd_watch(&dir, debounce_ms, &run, &ui, &config)?,
    }

    Ok(())
}
