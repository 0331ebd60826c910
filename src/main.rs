//! CLI binary for the autopilot track analyzer
//!
//! Fetches one telemetry feed and prints the distance travelled per autopilot state.

use anyhow::{Context, Result};
use autopilot_track::{analyze_source, FetchOptions};
use clap::{Arg, ArgMatches, Command};
use tracing::level_filters::LevelFilter;

fn build_command() -> Command {
    Command::new("Autopilot Track")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Report distance travelled with the autopilot on, off, and in an unknown state.")
        .arg(
            Arg::new("url")
                .help("Telemetry feed to analyze (http://, https:// or file:// URL)")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Enable debug output on stderr")
                .action(clap::ArgAction::SetTrue),
        )
}

fn init_logging(debug: bool) {
    let level = if debug {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(matches: &ArgMatches) -> Result<()> {
    let url = matches
        .get_one::<String>("url")
        .context("missing telemetry URL")?;

    tracing::debug!(
        "autopilot_track {} ({})",
        env!("CARGO_PKG_VERSION"),
        option_env!("VERGEN_GIT_SHA").unwrap_or("unknown revision")
    );

    let summary = analyze_source(url, &FetchOptions::default())
        .with_context(|| format!("Failed to analyze telemetry from {url}"))?;

    for line in summary.lines() {
        println!("{line}");
    }

    Ok(())
}

fn main() -> Result<()> {
    let matches = build_command().get_matches();
    init_logging(matches.get_flag("debug"));
    run(&matches)
}
