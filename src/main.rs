use std::{fs, io, path::PathBuf};

use clap::Parser;
use memcalc::{RunOptions, run};

/// memcalc is an interactive calculator with a single memory register.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Reads numbers, operators and commands from a file instead of standard
    /// input.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Quiet mode leaves out the banner and the prompts, so only results,
    /// errors and notices are printed.
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    let options = RunOptions { prompts: !args.quiet };
    let stdout = io::stdout();

    let result = if let Some(path) = &args.file {
        let script = fs::read(path).unwrap_or_else(|e| {
                         eprintln!("Failed to read the input file '{}': {e}", path.display());
                         std::process::exit(1);
                     });
        log::debug!("running script {} ({} bytes)", path.display(), script.len());
        run(script.as_slice(), stdout.lock(), &options)
    } else {
        run(io::stdin().lock(), stdout.lock(), &options)
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
