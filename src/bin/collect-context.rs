//! collect-context - copy the fight app's key project files into a staging directory
//!
//! Usage: collect-context [--config PATH] [--dry-run] [--json] [--color WHEN] [-v...]

use anyhow::Result;
use clap::Parser;

use ringside::application::{CollectOptions, CollectPlan};
use ringside::config;
use ringside::presentation::{create_collect_event_sink, create_collect_use_case, CollectCli};
use ringside::ui::{Icon, UiContext};

fn main() -> Result<()> {
    let cli = CollectCli::parse();

    let (config, warnings) = config::load(cli.config.as_deref())?;
    let ui = UiContext::new(cli.json, cli.verbose, cli.color, &config.output);

    if !ui.json {
        for warning in &warnings {
            eprintln!("{} {}", ui.icon(Icon::Warning), warning);
        }
    }

    let plan = CollectPlan::from_config(&config.collect)?;
    let options = CollectOptions::new().with_dry_run(cli.dry_run);
    let sink = create_collect_event_sink(ui);

    create_collect_use_case().execute(&plan, &options, sink.as_ref())?;

    Ok(())
}
