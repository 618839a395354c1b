use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Dated timelines from Ming Shilu chronicle text.
#[derive(Parser)]
#[command(
    name = "chronicle-timeline",
    version,
    about = "Stem-branch date parser for Ming Shilu chronicle text"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Parse a chronicle text file into a dated timeline.
    Parse(ParseArgs),
    /// Resolve one stem-branch day label to a solar date.
    Convert(ConvertArgs),
}

/// Arguments for the `parse` subcommand.
#[derive(clap::Args)]
pub struct ParseArgs {
    /// Path to the chronicle text file (UTF-8).
    #[arg(short, long)]
    pub input: PathBuf,

    /// Write the timeline as JSON to this path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to a parser TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the `convert` subcommand.
#[derive(clap::Args)]
pub struct ConvertArgs {
    /// Day label, e.g. 丁酉.
    pub label: String,

    /// Jiajing era year (1 = 元年).
    pub era_year: u32,

    /// Era month, 1-12.
    pub era_month: u32,
}
