#![deny(unsafe_code)]
//! CLI binary for the lotto-draw number generator.
//!
//! Subcommands:
//! - `draw`: generate 1-5 combinations and print them as colored ball rows
//! - `tiers`: print the display tier bands

mod error;
mod render;

use clap::{ArgAction, Parser, Subcommand};
use error::CliError;
use lotto_draw_core::{DrawBatch, DrawSeed, Stagger, Tier};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lotto-draw", about = "Lotto number generator")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Draw combinations of six main numbers plus a bonus number.
    Draw {
        /// Number of sets to draw (1-5).
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// PRNG seed for a reproducible draw. Random when omitted.
        #[arg(long)]
        seed: Option<u64>,

        /// Stagger overrides as a JSON object, e.g. '{"row": 0.3}'.
        #[arg(long, default_value = "{}")]
        stagger: String,

        /// Save the draw's seed to this file so it can be replayed.
        #[arg(long)]
        save: Option<PathBuf>,

        /// Replay a draw from a saved seed file.
        #[arg(long, conflicts_with_all = ["count", "seed", "stagger"])]
        replay: Option<PathBuf>,

        /// Reveal balls one at a time using the stagger delays. Ignored with --json.
        #[arg(long)]
        animate: bool,

        /// Disable ANSI colors.
        #[arg(long)]
        no_color: bool,
    },
    /// List the display tiers and their colors.
    Tiers {
        /// Disable ANSI colors.
        #[arg(long)]
        no_color: bool,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn use_color(no_color: bool) -> bool {
    !no_color && std::env::var_os("NO_COLOR").is_none() && io::stdout().is_terminal()
}

fn build_seed(
    count: usize,
    seed: Option<u64>,
    stagger: &str,
    replay: Option<PathBuf>,
) -> Result<DrawSeed, CliError> {
    if let Some(path) = replay {
        info!(path = %path.display(), "replaying saved draw");
        return Ok(DrawSeed::load(&path)?);
    }
    let params: serde_json::Value = serde_json::from_str(stagger)
        .map_err(|e| CliError::Input(format!("invalid --stagger JSON: {e}")))?;
    if !params.is_object() {
        return Err(CliError::Input("--stagger must be a JSON object".into()));
    }
    let seed = seed.unwrap_or_else(rand::random);
    debug!(seed, "using draw seed");
    Ok(DrawSeed {
        count,
        seed,
        stagger: Stagger::from_json(&params),
    })
}

/// JSON printed by `draw --json`: the seed that reproduces the batch, then the batch.
fn draw_payload(seed: &DrawSeed, batch: &DrawBatch) -> serde_json::Value {
    serde_json::json!({
        "seed": seed,
        "batch": batch,
    })
}

fn tiers_payload() -> Result<serde_json::Value, CliError> {
    Ok(serde_json::to_value(Tier::legend())?)
}

/// Terminal write failures are I/O errors, except a reveal delay the renderer
/// rejected, which came from the user's stagger.
fn output_error(e: io::Error) -> CliError {
    match e.kind() {
        io::ErrorKind::InvalidInput => CliError::Input(e.to_string()),
        _ => CliError::Io(e.to_string()),
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Tiers { no_color } => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&tiers_payload()?)?);
            } else {
                for line in render::tier_legend(use_color(no_color)) {
                    println!("{line}");
                }
            }
        }
        Command::Draw {
            count,
            seed,
            stagger,
            save,
            replay,
            animate,
            no_color,
        } => {
            let draw_seed = build_seed(count, seed, &stagger, replay)?;
            let batch = draw_seed.draw()?;
            info!(count = batch.len(), seed = draw_seed.seed, "drew batch");

            if let Some(path) = &save {
                draw_seed.save(path)?;
                info!(path = %path.display(), "saved draw seed");
            }

            if cli.json {
                let payload = draw_payload(&draw_seed, &batch);
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                let color = use_color(no_color);
                let mut out = io::stdout().lock();
                let written = if animate {
                    render::animate_batch(&mut out, &batch, color)
                } else {
                    render::write_batch(&mut out, &batch, color)
                };
                written.map_err(output_error)?;
                eprintln!("replay with --seed {}", draw_seed.seed);
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
