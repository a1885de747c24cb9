//! League simulator CLI
//!
//! Plays a seeded season in-process and prints tables, results and predictions.

use clap::{Parser, Subcommand, ValueEnum};
use league_core::{title_odds, Season, SeasonConfig, WeekReport};
use log::info;
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "league_sim")]
#[command(about = "Simulate a four-team round-robin football league", long_about = None)]
struct Cli {
    /// Season config file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// RNG seed, overrides the config file
    #[arg(short, long)]
    seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play weeks 1 through `week` and print each report
    Play {
        /// Last week to play
        #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
        week: u32,
    },
    /// Play the whole season
    Season,
    /// Monte Carlo title odds after playing the given number of weeks
    Odds {
        /// Weeks to play before projecting
        #[arg(long, default_value = "0")]
        after: u32,

        /// Number of simulated season endings
        #[arg(long, default_value = "10000")]
        simulations: usize,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let mut config = match &cli.config {
        Some(path) => SeasonConfig::load(path)?,
        None => SeasonConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }

    let mut season = Season::new(config)?;
    info!("seeded strengths: {:?}", season.team_strengths()?);

    match cli.command {
        Commands::Play { week } => {
            let mut reports = Vec::new();
            for w in 1..=week {
                reports.push(season.play_week(w)?);
            }
            print_reports(&reports, cli.format)?;
        }
        Commands::Season => {
            let reports = season.play_remaining()?;
            print_reports(&reports, cli.format)?;
        }
        Commands::Odds { after, simulations } => {
            for w in 1..=after {
                season.play_week(w)?;
            }
            let odds = title_odds(&season, simulations, cli.seed)?;
            match cli.format {
                OutputFormat::Text => {
                    println!("Title odds after week {} ({} simulations)", after, simulations);
                    for (idx, o) in odds.iter().enumerate() {
                        println!(
                            "{}. {:<20} {:>6.2}%  [{:.2} - {:.2}]",
                            idx + 1,
                            o.name,
                            o.probability * 100.0,
                            o.ci_low * 100.0,
                            o.ci_high * 100.0
                        );
                    }
                }
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&odds)?),
            }
        }
    }
    Ok(())
}

fn print_reports(reports: &[WeekReport], format: OutputFormat) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Text => {
            for report in reports {
                println!("{}", report);
                println!("----");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(reports)?),
    }
    Ok(())
}
