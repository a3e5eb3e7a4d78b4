use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use tally::repl::{Session, SessionOptions};
use tracing_subscriber::EnvFilter;

/// tally is an interactive calculator with variables and constants.
/// End every statement with ';' to print its result.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Read statements from this file instead of standard input.
    file: Option<PathBuf>,

    /// Suppress the greeting and the prompts.
    #[arg(short, long)]
    quiet: bool,

    /// Log every declaration, assignment and statement to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();

    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();

    if let Some(path) = args.file {
        let file = File::open(&path).with_context(|| {
                                         format!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                                 path.display())
                                     })?;
        Session::new(BufReader::new(file), SessionOptions::quiet()).run(&mut out, &mut err)?;
    } else {
        let options = if args.quiet { SessionOptions::quiet() } else { SessionOptions::default() };
        Session::new(io::stdin().lock(), options).run(&mut out, &mut err)?;
    }

    Ok(())
}
