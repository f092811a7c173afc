//! Arena CLI - fast in-memory matches between move policies.
//!
//! Runs complete matches through the pure domain without delays, commentary,
//! or a human seat, for comparing policies and tuning skill odds.

mod metrics;
mod output;
mod simulator;
mod types;

use std::time::Instant;

use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use engine::ai::registry::by_name;
use engine::MovePolicy;
use metrics::build_match_metrics;
use output::OutputWriter;
use simulator::{MatchOutcome, Simulator};
use types::{MetricsLevel, OutputFormat, PolicyChoice};

#[derive(Parser)]
#[command(name = "arena")]
#[command(about = "Fast in-memory Gobang matches between move policies")]
struct Args {
    /// Number of matches to run
    #[arg(short, long, default_value = "1")]
    matches: u32,

    /// Policy for both seats (shortcut to set both to the same policy)
    #[arg(long, conflicts_with_all = ["black", "white"])]
    both: Option<PolicyChoice>,

    /// Policy for the Black seat
    #[arg(long, default_value = "heuristic")]
    black: PolicyChoice,

    /// Policy for the White seat
    #[arg(long, default_value = "heuristic")]
    white: PolicyChoice,

    /// Base seed for deterministic runs; omitted draws from OS entropy
    #[arg(long)]
    seed: Option<u64>,

    /// Chance that a turn opens with a skill activation
    #[arg(long, default_value = "0.2")]
    skill_chance: f64,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Show output summary and file paths
    #[arg(long)]
    show_output: bool,

    /// Output directory for results
    #[arg(long, default_value = "./arena-results")]
    output_dir: String,

    /// Output format
    #[arg(long, default_value = "jsonl")]
    output_format: OutputFormat,

    /// Compress output files
    #[arg(long)]
    compress: bool,

    /// Metrics detail level
    #[arg(long, default_value = "detailed")]
    metrics_level: MetricsLevel,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Silent by default, warnings and errors only
    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if args.show_output {
        info!("Starting arena");
        info!("Configuration: {} matches", args.matches);
    }

    // Resolve seats: --both overrides the per-seat flags
    let (black_choice, white_choice) = if let Some(both) = args.both {
        (both.clone(), both)
    } else {
        (args.black, args.white)
    };

    if args.show_output {
        info!(
            "Policies: black={:?}, white={:?}, skill_chance={}",
            black_choice, white_choice, args.skill_chance
        );
    }

    let mut output_writer = OutputWriter::new(&args.output_dir, &args.output_format, args.compress)?;
    if args.show_output {
        info!("Output directory: {}", args.output_dir);
    }

    // With a base seed the whole run replays: one stream hands out the
    // per-match seeds and the policy seeds.
    let mut seed_stream = args.seed.map(ChaCha8Rng::seed_from_u64);

    let policy_names = (black_choice.registry_name(), white_choice.registry_name());
    let policies: [Box<dyn MovePolicy + Send + Sync>; 2] = [
        make_policy(&black_choice, draw_seed(&mut seed_stream))?,
        make_policy(&white_choice, draw_seed(&mut seed_stream))?,
    ];

    let include_moves = matches!(args.metrics_level, MetricsLevel::Detailed);

    // Run matches
    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0u32;

    for match_id in 1..=args.matches {
        let match_start = Instant::now();
        let match_seed = draw_seed(&mut seed_stream);

        match Simulator::new(match_seed, args.skill_chance).simulate_match(&policies) {
            Ok(outcome) => {
                let duration_ms = match_start.elapsed().as_secs_f64() * 1000.0;
                let row = build_match_metrics(
                    match_id,
                    match_seed,
                    policy_names,
                    args.matches,
                    args.skill_chance,
                    &outcome,
                    duration_ms,
                    include_moves,
                );

                if let Err(e) = output_writer.write_match(&row) {
                    warn!("Failed to write metrics for match {}: {}", match_id, e);
                }

                if args.verbose {
                    info!(
                        "Match {} completed: verdict={}, plies={}",
                        match_id, row.result.verdict, outcome.plies
                    );
                }
                results.push(outcome);
            }
            Err(e) => {
                errors += 1;
                warn!("Match {} failed: {}", match_id, e);
            }
        }
    }

    let elapsed = start.elapsed();

    let (jsonl_path, csv_path) = output_writer.output_paths();
    let jsonl_path = jsonl_path.cloned();
    let csv_path = csv_path.cloned();

    output_writer.finish()?;

    if args.show_output {
        if let Some(path) = jsonl_path {
            info!("Detailed results written to: {}", path.display());
        }
        if let Some(path) = csv_path {
            info!("Summary CSV written to: {}", path.display());
        }

        print_summary(&results, errors, elapsed, args.matches);
    }

    Ok(())
}

fn make_policy(
    choice: &PolicyChoice,
    seed: u64,
) -> Result<Box<dyn MovePolicy + Send + Sync>, Box<dyn std::error::Error>> {
    let factory = by_name(choice.registry_name())
        .ok_or_else(|| format!("Unknown policy: {}", choice.registry_name()))?;
    Ok((factory.make)(Some(seed)))
}

/// Next seed from the replayable stream, or fresh entropy without one.
fn draw_seed(stream: &mut Option<ChaCha8Rng>) -> u64 {
    match stream.as_mut() {
        Some(stream) => stream.random(),
        None => rand::random(),
    }
}

fn print_summary(results: &[MatchOutcome], errors: u32, elapsed: std::time::Duration, total: u32) {
    println!("\n=== Arena Summary ===");
    println!("Matches completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {}", errors);
    }
    println!("Total time: {:?}", elapsed);
    if !results.is_empty() {
        println!(
            "Average time per match: {:?}",
            elapsed / results.len() as u32
        );
    }

    if results.is_empty() {
        return;
    }

    let mut black_wins = 0u32;
    let mut white_wins = 0u32;
    let mut draws = 0u32;
    let mut total_plies = 0u64;
    let mut min_plies = u32::MAX;
    let mut max_plies = 0u32;
    let mut skills = [0u64; 2];

    for outcome in results {
        match outcome.verdict {
            simulator::Verdict::BlackWin => black_wins += 1,
            simulator::Verdict::WhiteWin => white_wins += 1,
            simulator::Verdict::Draw => draws += 1,
        }
        total_plies += outcome.plies as u64;
        min_plies = min_plies.min(outcome.plies);
        max_plies = max_plies.max(outcome.plies);
        skills[0] += outcome.skills_used[0] as u64;
        skills[1] += outcome.skills_used[1] as u64;
    }

    let count = results.len() as f64;
    println!("\n=== Verdicts ===");
    println!(
        "Black wins: {} ({:.1}%)",
        black_wins,
        black_wins as f64 / count * 100.0
    );
    println!(
        "White wins: {} ({:.1}%)",
        white_wins,
        white_wins as f64 / count * 100.0
    );
    println!("Draws: {} ({:.1}%)", draws, draws as f64 / count * 100.0);
    println!(
        "Plies: avg={:.1}, min={}, max={}",
        total_plies as f64 / count,
        min_plies,
        max_plies
    );
    println!(
        "Skills used: black={}, white={}",
        skills[0], skills[1]
    );
}
