mod plot;

use std::error::Error;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use env_logger::Builder;
use log::{error, info, warn};
use serde::Serialize;

use disk_scheduling::config::{RandomRequests, ScenarioConfig};
use disk_scheduling::report::{format_comparison, format_result};
use disk_scheduling::{compare_selected, simulate, Algorithm, Direction};

use crate::plot::{plot_comparison, plot_sequence};

#[derive(Parser, Debug)]
#[command(author, version, about = "Disk scheduling simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Runs a single algorithm.
    Simulate {
        /// Algorithm: FCFS, SSTF, SCAN or C-SCAN.
        #[arg(short, long, default_value = "SSTF")]
        algorithm: Algorithm,
        #[command(flatten)]
        scenario: ScenarioArgs,
    },
    /// Runs several algorithms on the same requests and picks the best one.
    Compare {
        #[command(flatten)]
        scenario: ScenarioArgs,
    },
}

#[derive(Args, Debug)]
struct ScenarioArgs {
    /// Path to a scenario in YAML format.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Comma-separated track numbers, e.g. "98,183,37".
    #[arg(short, long)]
    requests: Option<String>,
    /// Initial head position.
    #[arg(long, allow_negative_numbers = true)]
    head: Option<i64>,
    /// Number of tracks on the disk.
    #[arg(long, allow_negative_numbers = true)]
    disk_size: Option<i64>,
    /// SCAN direction: left or right.
    #[arg(short, long)]
    direction: Option<Direction>,
    /// Generate this many random requests instead of using the given ones.
    #[arg(long)]
    random: Option<usize>,
    /// Seed for random requests, also replaces the seed of a scenario file.
    #[arg(long)]
    seed: Option<u64>,
    /// Write results to a JSON file.
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Draw results to a PNG file.
    #[arg(short, long)]
    plot: Option<PathBuf>,
}

impl ScenarioArgs {
    /// Loads the scenario file (or the default scenario) and applies command-line overrides.
    fn scenario(&self) -> Result<ScenarioConfig, Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => ScenarioConfig::load(path)?,
            None => ScenarioConfig::default(),
        };
        if let Some(requests) = &self.requests {
            config.requests = requests.clone();
            config.random = None;
        }
        if let Some(count) = self.random {
            let seed = self
                .seed
                .or_else(|| config.random.as_ref().map(|random| random.seed))
                .unwrap_or(0);
            config.random = Some(RandomRequests { count, seed });
        } else if let Some(seed) = self.seed {
            match &mut config.random {
                Some(random) => random.seed = seed,
                None => warn!("Seed {} is ignored as requests are not generated", seed),
            }
        }
        if let Some(head) = self.head {
            config.initial_head = head;
        }
        if let Some(disk_size) = self.disk_size {
            config.disk_size = disk_size;
        }
        if let Some(direction) = self.direction {
            config.direction = direction;
        }
        Ok(config)
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), Box<dyn Error>> {
    let mut file = File::create(path).map_err(|e| format!("can't create {:?}: {}", path, e))?;
    file.write_all(serde_json::to_string_pretty(value)?.as_bytes())?;
    info!("Results are saved to {:?}", path);
    Ok(())
}

fn run(command: Command) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Simulate { algorithm, scenario } => {
            let workload = scenario.scenario()?.workload()?;
            let result = simulate(&workload, algorithm);
            print!("{}", format_result(&result));
            if let Some(path) = &scenario.output {
                write_json(path, &result)?;
            }
            if let Some(path) = &scenario.plot {
                plot_sequence(path, &result)?;
                info!("Sequence plot is saved to {:?}", path);
            }
        }
        Command::Compare { scenario } => {
            let config = scenario.scenario()?;
            let workload = config.workload()?;
            let comparison = compare_selected(&workload, &config.algorithms()?);
            print!("{}", format_comparison(&comparison));
            if let Some(path) = &scenario.output {
                write_json(path, &comparison)?;
            }
            if let Some(path) = &scenario.plot {
                plot_comparison(path, &comparison)?;
                info!("Comparison chart is saved to {:?}", path);
            }
        }
    }
    Ok(())
}

fn main() {
    Builder::from_default_env()
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        error!("{}", e);
        std::process::exit(1);
    }
}
