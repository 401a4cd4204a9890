//! Chase CLI.
//!
//! - `chase run <layout>` - play a level out, headless or paced in real time
//! - `chase check <layout>` - parse a level and describe it

use std::fs::File;
use std::future::Future;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use chase_core::Level;
use chase_sim::{trace::write_jsonl, Outcome, SimConfig, Simulation};

#[derive(Parser)]
#[command(name = "chase")]
#[command(about = "Pursuit-evasion simulation on a tile grid", version)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a level until one side wins or the tick limit is reached
    Run {
        /// Layout file
        layout: PathBuf,

        /// YAML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the configured seed
        #[arg(long)]
        seed: Option<u64>,

        /// Override the configured tick limit
        #[arg(long)]
        max_ticks: Option<u64>,

        /// Pace ticks in real time; Ctrl-C stops the run
        #[arg(long)]
        realtime: bool,

        /// Write trace events as JSON lines
        #[arg(long, value_name = "FILE")]
        trace: Option<PathBuf>,
    },

    /// Describe a layout without running it
    Check {
        /// Layout file
        layout: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over the verbosity flag
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    if cli.log_json {
        fmt().json().with_env_filter(filter).with_target(false).init();
    } else {
        fmt().with_env_filter(filter).with_target(false).init();
    }

    match cli.command {
        Commands::Run {
            layout,
            config,
            seed,
            max_ticks,
            realtime,
            trace,
        } => {
            let mut config = match config {
                Some(path) => SimConfig::load(&path)
                    .with_context(|| format!("loading config {}", path.display()))?,
                None => SimConfig::default(),
            };
            if let Some(seed) = seed {
                config.seed = seed;
            }
            if let Some(max_ticks) = max_ticks {
                config.max_ticks = max_ticks;
            }
            run_level(&layout, config, realtime, trace.as_deref()).await
        }
        Commands::Check { layout } => check_level(&layout),
    }
}

fn load_level(path: &Path) -> Result<Level> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading layout {}", path.display()))?;
    Level::parse(&text).with_context(|| format!("parsing layout {}", path.display()))
}

async fn run_level(
    layout: &Path,
    config: SimConfig,
    realtime: bool,
    trace: Option<&Path>,
) -> Result<()> {
    let level = load_level(layout)?;
    tracing::info!(
        layout = %layout.display(),
        seed = config.seed,
        max_ticks = config.max_ticks,
        "Starting simulation"
    );
    let mut sim = Simulation::new(level, config)?;

    let outcome = if realtime {
        run_paced(&mut sim, tokio::signal::ctrl_c()).await?
    } else {
        sim.run()?
    };

    println!("{outcome} after {} ticks", sim.tick());

    if let Some(path) = trace {
        let file =
            File::create(path).with_context(|| format!("creating trace {}", path.display()))?;
        write_jsonl(BufWriter::new(file), &sim.trace().events)?;
        tracing::info!(
            path = %path.display(),
            events = sim.trace().events.len(),
            "Trace written"
        );
    }
    Ok(())
}

/// Steps once per scheduling tick until the chase ends, the tick limit is hit, or `shutdown`
/// resolves.
async fn run_paced<F>(sim: &mut Simulation, shutdown: F) -> Result<Outcome>
where
    F: Future<Output = std::io::Result<()>>,
{
    let tps = sim.config().ticks_per_second.max(1);
    let mut interval = tokio::time::interval(Duration::from_secs(1) / tps);
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                if let Some(outcome) = sim.step()? {
                    return Ok(outcome);
                }
                if sim.tick() >= sim.config().max_ticks {
                    return Ok(sim.cancel());
                }
            }
            _ = &mut shutdown => {
                tracing::info!(tick = sim.tick(), "Interrupted");
                return Ok(sim.cancel());
            }
        }
    }
}

fn check_level(path: &Path) -> Result<()> {
    let level = load_level(path)?;

    println!("Level {}", path.display());
    println!("==========");
    println!();
    println!("Size: {} rows x {} cols", level.rows(), level.cols());
    println!(
        "Walls: {}, obstacles: {}",
        level.walls().len(),
        level.obstacles().len()
    );
    println!("Food: {}", level.foods().len());
    println!();
    println!("Rooms: {}", level.rooms().len());
    for room in level.rooms().values() {
        println!(
            "  - {} ({} tiles, {} entrances)",
            room.id,
            room.tiles().len(),
            room.entrances().len()
        );
    }
    println!();
    println!("Spawns: {}", level.spawns().len());
    for spawn in level.spawns() {
        println!(
            "  - {} {:?} at ({}, {})",
            spawn.id, spawn.role, spawn.location.row, spawn.location.col
        );
    }
    if let Some(at) = level.rendezvous() {
        println!();
        println!("Rendezvous: ({}, {})", at.row, at.col);
    }

    if let Err(err) = level.validate() {
        println!();
        println!("Not playable: {err}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const APART: &str = "+++++++\n+1....+\n+++++++\n+0...A+\n+++++++\n";

    fn sim(max_ticks: u64) -> Simulation {
        let config = SimConfig {
            ticks_per_second: 1000,
            max_ticks,
            ..SimConfig::default()
        };
        Simulation::from_layout(APART, config).unwrap()
    }

    #[tokio::test]
    async fn paced_run_stops_at_the_tick_limit() {
        let mut sim = sim(3);
        let outcome = run_paced(&mut sim, std::future::pending()).await.unwrap();
        assert_eq!(outcome, Outcome::Timeout);
        assert_eq!(sim.tick(), 3);
    }

    #[tokio::test]
    async fn paced_run_stops_on_shutdown() {
        let mut sim = sim(100_000);
        let outcome = run_paced(&mut sim, std::future::ready(Ok(()))).await.unwrap();
        assert_eq!(outcome, Outcome::Timeout);
        assert_eq!(sim.outcome(), Some(Outcome::Timeout));
        assert!(sim.tick() < 100_000);
    }
}
