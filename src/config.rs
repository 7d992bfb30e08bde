//! Generation parameters: row counts, ID ranges, date windows, cadences.
//!
//! The constants here are the canonical dataset shape; the CLI exposes them
//! as overridable defaults so tests can run with small row counts.

use std::ops::RangeInclusive;
use std::path::PathBuf;

use jiff::civil::Date;

/// Player rows written to `players_historical.csv`.
pub const NUM_PLAYERS: u64 = 100_000;
/// Match rows written to `matches_historical.csv`.
pub const NUM_MATCHES: u64 = 500_000;
/// Match rows written to `matches_batch2.csv`.
pub const NUM_BATCH2_MATCHES: u64 = 50_000;
/// Fraction of batch2 rows copied verbatim from the matches file.
pub const DUPLICATE_FRACTION: f64 = 0.1;

/// IDs 1..=10 belong to players that already exist in the target database;
/// generated historical players start at 11.
pub const RESERVED_PLAYER_IDS: u64 = 10;

/// Inclusive score range for every match row.
pub const SCORE_RANGE: RangeInclusive<u32> = 100..=5000;

/// How many matches rows are read back as the batch2 duplicate pool.
pub const DUPLICATE_POOL_SIZE: usize = 1000;

/// One-year window for player sign-ups and historical matches, `[start, end)`.
pub const HISTORICAL_WINDOW: (Date, Date) =
    (Date::constant(2023, 1, 1), Date::constant(2024, 1, 1));
/// Shifted, narrower window for the fresh rows of batch2, `[start, end)`.
pub const BATCH2_WINDOW: (Date, Date) = (Date::constant(2023, 6, 1), Date::constant(2024, 1, 1));

/// Progress line cadence while generating players.
pub const PLAYER_PROGRESS_EVERY: u64 = 10_000;
/// Progress line cadence while generating matches.
pub const MATCH_PROGRESS_EVERY: u64 = 50_000;

pub const PLAYERS_FILE: &str = "players_historical.csv";
pub const MATCHES_FILE: &str = "matches_historical.csv";
pub const BATCH2_FILE: &str = "matches_batch2.csv";

/// Resolved parameters for one generation run.
#[derive(Debug, Clone)]
pub struct GenConfig {
    pub out_dir: PathBuf,
    pub num_players: u64,
    pub num_matches: u64,
    pub num_batch2: u64,
    pub duplicate_fraction: f64,
}

impl GenConfig {
    /// Inclusive `player_id` range referenced by match rows.
    pub fn player_id_range(&self) -> RangeInclusive<u64> {
        RESERVED_PLAYER_IDS + 1..=RESERVED_PLAYER_IDS + self.num_players
    }

    /// Batch2 composition as `(num_new, num_duplicates)`.
    ///
    /// The duplicate count is floored, the remainder is freshly sampled, so
    /// the two always sum to `num_batch2`.
    pub fn batch2_split(&self) -> (u64, u64) {
        let num_duplicates = (self.num_batch2 as f64 * self.duplicate_fraction) as u64;
        (self.num_batch2 - num_duplicates, num_duplicates)
    }
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("data"),
            num_players: NUM_PLAYERS,
            num_matches: NUM_MATCHES,
            num_batch2: NUM_BATCH2_MATCHES,
            duplicate_fraction: DUPLICATE_FRACTION,
        }
    }
}
