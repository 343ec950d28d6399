//! Headless simulator CLI.
//!
//! Plays scripted runs to check difficulty and catch gameplay regressions.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                     # Default: 200 runs
//!   cargo run --bin simulate -- -n 50 --skill 1  # 50 runs, perfect reactions
//!   cargo run --bin simulate -- --seed 42 --json # Reproducible, JSON saved

use clap::Parser;
use skyflap::simulator::{run_simulation, SimConfig};

#[derive(Debug, Parser)]
#[command(name = "simulate", version = skyflap::build_info::BUILD_VERSION, about = "Headless skyflap simulator")]
struct Args {
    /// Number of runs
    #[arg(short = 'n', long = "runs", default_value_t = 200)]
    runs: u32,

    /// Base seed; run i uses seed + i
    #[arg(short, long)]
    seed: Option<u64>,

    /// Frame cap per run
    #[arg(short = 'f', long, default_value_t = 18_000)]
    max_frames: u64,

    /// Chance the pilot reacts on a given frame (0..=1)
    #[arg(long, default_value_t = 0.9)]
    skill: f64,

    /// Pixels below the gap centre the pilot aims for
    #[arg(long, default_value_t = 20.0)]
    aim_offset: f64,

    /// Print every run
    #[arg(short, long)]
    verbose: bool,

    /// Also write the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let config = SimConfig {
        num_runs: args.runs,
        seed: args.seed,
        max_frames_per_run: args.max_frames,
        skill: args.skill,
        aim_offset: args.aim_offset,
        verbosity: if args.verbose { 2 } else { 1 },
    };

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║                  SKYFLAP SIMULATOR                            ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Max Frames:     {}", config.max_frames_per_run);
    println!("  Skill:          {:.2}", config.skill);
    println!("  Aim Offset:     {:.0}", config.aim_offset);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);
    println!("{}", report.to_text());

    if args.json {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, report.to_json())?;
        println!("JSON report saved to: {}", filename);
    }

    Ok(())
}
