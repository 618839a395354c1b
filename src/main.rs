mod cli;
mod logging;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use chronicle_timeline::{ChronicleParser, ParserConfig, Timeline, convert, export, monthly};

use crate::cli::{Cli, Command, ConvertArgs, ParseArgs};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Parse(args) => run_parse(args),
        Command::Convert(args) => run_convert(args),
    }
}

fn run_parse(args: ParseArgs) -> Result<()> {
    let config: ParserConfig = match &args.config {
        Some(path) => ParserConfig::from_toml_file(path)
            .with_context(|| format!("failed to load config: {}", path.display()))?,
        None => ParserConfig::default(),
    };

    let parser = ChronicleParser::new(config);
    let timeline: Timeline = parser
        .parse_file(&args.input)
        .with_context(|| format!("failed to parse chronicle: {}", args.input.display()))?;

    match (timeline.first_date(), timeline.last_date(), timeline.span_days()) {
        (Some(first), Some(last), Some(span)) => {
            info!(records = timeline.len(), %first, %last, span_days = span, "time range");
        }
        _ => warn!(path = %args.input.display(), "no dated records found"),
    }
    for ((era_year, month), bucket) in monthly::group_by_month(&timeline) {
        info!(era_year, month, records = bucket.keys.len(), chars = bucket.char_count, "month");
    }

    match &args.output {
        Some(path) => export::write_json(&timeline, path)
            .with_context(|| format!("failed to write timeline: {}", path.display()))?,
        None => println!("{}", export::to_json(&timeline)?),
    }
    Ok(())
}

fn run_convert(args: ConvertArgs) -> Result<()> {
    match convert(&args.label, args.era_year, args.era_month) {
        Some(date) => println!("{date}"),
        None => println!("unresolved"),
    }
    Ok(())
}
