use anyhow::{Context, Result, bail};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;
use std::path::PathBuf;

use lbgen::config::{self, GenConfig};
use lbgen::{group_digits, matches, players};

#[derive(Parser)]
#[command(
    name = "lbgen",
    about = "Synthetic leaderboard CSV datasets for database-migration testing",
    version
)]
struct Cli {
    /// Output directory for the generated CSV files (created if absent)
    #[arg(long, default_value = "data")]
    out_dir: PathBuf,

    /// Number of player rows in players_historical.csv
    #[arg(long, default_value_t = config::NUM_PLAYERS)]
    players: u64,

    /// Number of match rows in matches_historical.csv
    #[arg(long, default_value_t = config::NUM_MATCHES)]
    matches: u64,

    /// Number of match rows in matches_batch2.csv
    #[arg(long, default_value_t = config::NUM_BATCH2_MATCHES)]
    batch2: u64,

    /// Fraction of batch2 rows copied verbatim from matches_historical.csv
    #[arg(long, default_value_t = config::DUPLICATE_FRACTION)]
    duplicate_fraction: f64,

    /// Seed the RNG for reproducible output; defaults to OS entropy
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if !(0.0..=1.0).contains(&cli.duplicate_fraction) {
        bail!(
            "--duplicate-fraction must be within 0.0..=1.0, got {}",
            cli.duplicate_fraction
        );
    }

    let cfg = GenConfig {
        out_dir: cli.out_dir,
        num_players: cli.players,
        num_matches: cli.matches,
        num_batch2: cli.batch2,
        duplicate_fraction: cli.duplicate_fraction,
    };

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    fs::create_dir_all(&cfg.out_dir).with_context(|| {
        format!(
            "failed to create output directory {}",
            cfg.out_dir.display()
        )
    })?;

    banner("Game Leaderboard - Data Generation");
    println!();

    players::generate(&cfg, &mut rng)?;
    matches::generate(&cfg, &mut rng)?;
    matches::generate_batch2(&cfg, &mut rng)?;

    println!();
    banner("✓ All data generated successfully!");
    println!();
    println!("Files created:");
    for (file, rows) in [
        (config::PLAYERS_FILE, cfg.num_players),
        (config::MATCHES_FILE, cfg.num_matches),
        (config::BATCH2_FILE, cfg.num_batch2),
    ] {
        println!(
            "  - {} ({} rows)",
            cfg.out_dir.join(file).display(),
            group_digits(rows)
        );
    }
    println!();

    Ok(())
}

fn banner(title: &str) {
    println!("{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}
