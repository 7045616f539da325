//! Dungeon crawler, headless
//!
//! Generates a level, plays a key script through it and prints the map.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, info};

use dc_cli::{parse_script, render_map, replay, status_line};
use dc_core::{GameConfig, GameRng, GameState};

/// Play a scripted dungeon crawl and print the result
#[derive(Parser, Debug)]
#[command(name = "crawl")]
#[command(author, version, about = "Crawl a generated dungeon from a key script", long_about = None)]
struct Args {
    /// Seed for level generation and sprite variants (random if omitted)
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// JSON configuration file
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Map width (overrides the configuration)
    #[arg(long = "width")]
    width: Option<usize>,

    /// Map height (overrides the configuration)
    #[arg(long = "height")]
    height: Option<usize>,

    /// Keys to play: hjklyubn, numpad digits, '.' to wait
    #[arg(short = 'k', long = "keys", default_value = "")]
    keys: String,

    /// Milliseconds between scripted keys; keys faster than the turn delay are dropped
    #[arg(long = "key-interval")]
    key_interval: Option<u64>,

    /// Print the message log after the map
    #[arg(short = 'm', long = "messages")]
    messages: bool,

    /// Print the effective configuration as JSON and exit
    #[arg(long = "print-config")]
    print_config: bool,

    /// Verbose logging (repeat for more)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn load_config(args: &Args) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            GameConfig::from_json(&json).with_context(|| format!("loading config {}", path.display()))?
        }
        None => GameConfig::default(),
    };
    if let Some(width) = args.width {
        config.map_width = width;
    }
    if let Some(height) = args.height {
        config.map_height = height;
    }
    config.validate().context("invalid command line overrides")?;
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let config = load_config(&args)?;
    if args.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }
    let keys = parse_script(&args.keys).context("parsing key script")?;

    let mut rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    info!("seed {}", rng.seed());

    let layout = dc_gen::generate_for(&config, &mut rng).context("generating level")?;
    let interval = Duration::from_millis(args.key_interval.unwrap_or(config.turn_interval_ms));
    let mut state = GameState::new(&layout, config, rng);

    let outcomes = replay(&mut state, &keys, interval);
    info!("{} of {} keys played", outcomes.len(), keys.len());

    for line in render_map(&state) {
        println!("{line}");
    }
    println!("{}", status_line(&state));
    if args.messages {
        for msg in &state.message_history {
            println!("{msg}");
        }
    }
    Ok(())
}
