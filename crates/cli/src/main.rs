//! Y86-64 pipelined simulator CLI.
//!
//! This binary loads a `.yo` object file and runs it to completion. It performs:
//! 1. **Configuration:** Built-in defaults, optionally replaced by a JSON file and overridden
//!    by command-line flags.
//! 2. **Load:** Validates and loads the object file; a bad file aborts before any cycle runs.
//! 3. **Run:** Ticks the pipeline until an instruction halts it or the cycle limit is hit.
//! 4. **Report:** Dumps registers, condition codes and memory, plus statistics on request.

use std::path::PathBuf;
use std::{fs, process};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use y86sim_core::common::{SimError, Status};
use y86sim_core::config::Config;
use y86sim_core::sim::Simulator;

#[derive(Parser, Debug)]
#[command(
    name = "sim",
    author,
    version,
    about = "Y86-64 five-stage pipelined simulator",
    long_about = "Load a .yo object file and run it on a cycle-level model of the five-stage Y86-64 pipeline.\n\nExamples:\n  sim prog.yo\n  sim prog.yo --stats\n  sim prog.yo --trace --max-cycles 200\n  RUST_LOG=y86sim_core=debug sim prog.yo"
)]
struct Cli {
    /// Object file to run (must end in .yo).
    file: PathBuf,

    /// Stop after this many cycles if the program has not halted.
    #[arg(long)]
    max_cycles: Option<u64>,

    /// JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the pipeline registers every cycle and enable trace-level logging.
    #[arg(short, long)]
    trace: bool,

    /// Print simulation statistics after the run.
    #[arg(short, long)]
    stats: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.trace);

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let mut sim = Simulator::new(&config);
    if let Err(e) = sim.load_file(&cli.file) {
        eprintln!("Load error: {e}");
        eprintln!("Usage: sim <file.yo>");
        process::exit(1);
    }

    let result = sim.run();
    sim.dump_state();
    if cli.stats {
        sim.cpu.stats.print();
    }

    match result {
        Ok(summary) => {
            println!(
                "\n[*] Stopped with status {} after {} cycles",
                summary.status, summary.cycles
            );
            process::exit(i32::from(summary.status != Status::Hlt));
        }
        Err(e) => {
            eprintln!("\n[!] {e}");
            process::exit(1);
        }
    }
}

/// Installs the tracing subscriber. `RUST_LOG` wins over the default level.
fn init_logging(trace: bool) {
    let default = if trace { "trace" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Builds the run configuration from defaults, the optional JSON file and flags.
fn build_config(cli: &Cli) -> Result<Config, SimError> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|source| SimError::ConfigRead {
                path: path.clone(),
                source,
            })?;
            Config::from_json(&text)?
        }
        None => Config::default(),
    };
    if let Some(limit) = cli.max_cycles {
        config.general.max_cycles = limit;
    }
    if cli.trace {
        config.general.trace_instructions = true;
    }
    Ok(config)
}
