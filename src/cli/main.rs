#![warn(clippy::all, clippy::pedantic)]
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use csv::Writer;
use flownet::{check, parse_network, ArcFlow, EdmondsKarp, MaxFlow, Report};
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

/// Computes the maximum flow from node 0 to the last node of a network read from a file.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Network file: a node count followed by `from to capacity` triples
    #[arg(default_value = "data/ladder_5.txt")]
    input: PathBuf,

    /// Write the final positive arc flows to this CSV file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verify the flow invariants and the max-flow/min-cut equality after solving
    #[arg(long)]
    check: bool,

    /// Only print the final result, not the intermediate augmentation steps
    #[arg(short, long)]
    quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

// Function to write the final flows
fn write_csv(flows: &[ArcFlow<i64>], filepath: &Path) -> Result<(), Box<dyn Error>> {
    let mut wtr = Writer::from_path(filepath)?;
    for flow in flows {
        wtr.serialize(flow)?;
    }
    wtr.flush()?;
    Ok(())
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let text = fs::read_to_string(&cli.input)
        .map_err(|e| format!("cannot read {}: {e}", cli.input.display()))?;
    let mut network = parse_network::<i64>(&text).map_err(|e| e.to_string())?;

    let solution = EdmondsKarp::default().max_flow(&mut network);

    let input = cli.input.display().to_string();
    println!(
        "{}",
        Report::new(&network, &solution)
            .with_input(&input)
            .with_steps(!cli.quiet)
    );

    if cli.check {
        check(&network, &solution).map_err(|e| e.to_string())?;
        log::info!("flow invariants hold");
    }

    if let Some(output) = &cli.output {
        write_csv(solution.flows(), output)?;
        log::info!("wrote {} flow(s) to {}", solution.flows().len(), output.display());
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // logs go to stderr so stdout carries the report only
    let _ = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
