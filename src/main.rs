mod algorithm;
mod bench;
mod error;
mod report;
mod source;
mod timer;
mod utils;
#[cfg(test)]
mod random;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;

use algorithm::Algorithm;
use bench::{Bench, Config};
use source::ArraySource;
use timer::Clock;

#[derive(Parser, Debug)]
#[command(author, version, about = "Ranks sorting algorithms by their average time over a file of integer arrays", long_about = None)]
struct Args {
    /// One array per line, whitespace-separated integers.
    #[arg(default_value = "arrays.txt")]
    input: PathBuf,

    /// Stop after this many valid arrays.
    #[arg(long, default_value_t = bench::MAX_ARRAYS)]
    max_arrays: usize,

    #[arg(long, value_enum, default_value_t = Clock::Wall)]
    clock: Clock,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,

    /// -v for debug, -vv for trace.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::builder().filter_level(log_level).parse_default_env().init();

    let source = ArraySource::open(&args.input)
        .with_context(|| format!("Can't open '{}'", args.input.display()))?;
    let config = Config { max_arrays: args.max_arrays, clock: args.clock };
    let summary = Bench::new(&Algorithm::ALL, config)
        .run(source)
        .with_context(|| format!("Benchmark over '{}' failed", args.input.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        report::write_json(&mut out, &summary)?;
    } else {
        report::write_table(&mut out, &summary)?;
    }

    Ok(())
}
