//! Region Algebra CLI
//!
//! Ask targeting questions from the command line.
//!
//! Usage:
//!     region-algebra check --own 0,0 --target 5,0 --friendly 100,100
//!     region-algebra scan --own 0,0 --friendly 5,1 --target 5,0 --target 0,5
//!     region-algebra config --config ~/.region-algebra/targeting.json

use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use region_algebra::adapters::RegionTargeting;
use region_algebra::core::{ConfigResult, Distance, Point, TargetingConfig};
use region_algebra::ports::Targeting;

/// Region Algebra - composable 2D regions for targeting
#[derive(Parser)]
#[command(name = "region-algebra")]
#[command(version)]
#[command(about = "Is it in range? Ask the region algebra.", long_about = None)]
struct Cli {
    /// Log every targeting decision
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Targeting profile: optional file, overridden by explicit flags
#[derive(Args)]
struct Profile {
    /// JSON targeting profile
    #[arg(long)]
    config: Option<String>,

    /// Maximum engagement distance
    #[arg(short, long)]
    range: Option<Distance>,

    /// Safety buffer around ourselves and friendlies
    #[arg(short, long = "min-distance")]
    min_distance: Option<Distance>,
}

impl Profile {
    fn resolve(&self) -> ConfigResult<TargetingConfig> {
        let mut config = match &self.config {
            Some(path) => TargetingConfig::load(path)?,
            None => TargetingConfig::default(),
        };
        if let Some(range) = self.range {
            config = config.with_range(range);
        }
        if let Some(min_distance) = self.min_distance {
            config = config.with_minimum_distance(min_distance);
        }
        Ok(config)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Check a single target against one friendly
    Check {
        /// Our position as x,y
        #[arg(long, allow_hyphen_values = true)]
        own: Point,

        /// Target position as x,y
        #[arg(long, allow_hyphen_values = true)]
        target: Point,

        /// Friendly position as x,y
        #[arg(long, allow_hyphen_values = true)]
        friendly: Point,

        #[command(flatten)]
        profile: Profile,
    },

    /// Check many targets against any number of friendlies
    Scan {
        /// Our position as x,y
        #[arg(long, allow_hyphen_values = true)]
        own: Point,

        /// Candidate target as x,y (repeatable)
        #[arg(long = "target", allow_hyphen_values = true, required = true)]
        targets: Vec<Point>,

        /// Friendly position as x,y (repeatable)
        #[arg(long = "friendly", allow_hyphen_values = true)]
        friendlies: Vec<Point>,

        #[command(flatten)]
        profile: Profile,
    },

    /// Print the effective targeting profile as JSON
    Config {
        #[command(flatten)]
        profile: Profile,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("region_algebra=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_check(own: Point, target: Point, friendly: Point, config: TargetingConfig) -> ExitCode {
    let targeting = RegionTargeting::new(config);

    if targeting.in_range(own, target, friendly) {
        println!("in range");
        ExitCode::SUCCESS
    } else {
        println!("out of range");
        ExitCode::from(1)
    }
}

fn cmd_scan(own: Point, targets: &[Point], friendlies: &[Point], config: TargetingConfig) -> ExitCode {
    let targeting = RegionTargeting::new(config);
    let valid = targeting.valid_targets(own, targets, friendlies);

    for target in targets {
        let verdict = if valid.contains(target) { "in range" } else { "out of range" };
        println!("{:<24} {}", target.to_string(), verdict);
    }
    println!();
    println!("{} of {} targets in range", valid.len(), targets.len());

    if valid.is_empty() {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}

fn cmd_config(config: TargetingConfig) -> ExitCode {
    match config.to_json_string() {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::from(2)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let profile = match &cli.command {
        Commands::Check { profile, .. } | Commands::Scan { profile, .. } | Commands::Config { profile } => {
            profile
        }
    };

    let config = match profile.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };
    tracing::debug!(?config, "targeting profile");

    match &cli.command {
        Commands::Check { own, target, friendly, .. } => cmd_check(*own, *target, *friendly, config),
        Commands::Scan { own, targets, friendlies, .. } => cmd_scan(*own, targets, friendlies, config),
        Commands::Config { .. } => cmd_config(config),
    }
}
