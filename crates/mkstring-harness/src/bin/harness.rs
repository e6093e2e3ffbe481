//! CLI entrypoint for the mkstring demonstration harness.

use std::fmt::Write as _;
use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};

use mkstring_core::{Arg, make_string};
use mkstring_harness::{HarnessError, run_all};

/// Demonstration driver for the mkstring formatter.
#[derive(Debug, Parser)]
#[command(name = "mkstring-harness")]
#[command(about = "Demonstration and timing driver for mkstring")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Replay the demonstration scenarios.
    Demo {
        /// Emit a JSON report instead of human-readable output.
        #[arg(long)]
        json: bool,
        /// Write the report to a file instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Time the hot-loop template.
    Bench {
        /// Number of formatting calls to run.
        #[arg(long, default_value_t = 10_000_000)]
        iterations: u64,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("mkstring-harness: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), HarnessError> {
    let cli = Cli::parse();
    match cli.command {
        Command::Demo { json, output } => run_demo(json, output),
        Command::Bench { iterations } => run_bench(iterations),
    }
}

fn run_demo(json: bool, output: Option<PathBuf>) -> Result<(), HarnessError> {
    let reports = run_all();

    let rendered = if json {
        serde_json::to_string_pretty(&reports)?
    } else {
        let mut text = String::new();
        for report in &reports {
            let marker = if report.degraded { "  [degraded]" } else { "" };
            let _ = writeln!(
                text,
                "{}:\n  template: {:?}\n  output:   {:?}{marker}",
                report.name, report.template, report.output
            );
        }
        text
    };

    match output {
        Some(path) => std::fs::write(path, rendered)?,
        None => println!("{rendered}"),
    }
    Ok(())
}

fn run_bench(iterations: u64) -> Result<(), HarnessError> {
    let args = [Arg::from("The orc"), Arg::from(27), Arg::from("arrows")];

    let start = Instant::now();
    let mut bytes = 0_usize;
    for _ in 0..iterations {
        bytes += make_string("%s bends down and picks up %d %s.", &args).len();
    }
    let elapsed = start.elapsed();

    println!(
        "{iterations} calls, {} bytes rendered, {} milliseconds",
        bytes,
        elapsed.as_millis()
    );
    Ok(())
}
