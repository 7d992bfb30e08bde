//! Player account synthesis for `players_historical.csv`.

use anyhow::Result;
use rand::Rng;

use crate::config::{GenConfig, HISTORICAL_WINDOW, PLAYER_PROGRESS_EVERY, PLAYERS_FILE};
use crate::group_digits;
use crate::output::CsvFile;
use crate::timestamp::DateWindow;

/// Username vocabularies. Picks are uniform with replacement; collisions
/// between picks are fine since the trailing sequence index keeps every
/// username unique.
pub const ADJECTIVES: [&str; 10] = [
    "swift", "mighty", "clever", "brave", "silent", "fierce", "wise", "dark", "bright", "cool",
];
pub const NOUNS: [&str; 10] = [
    "dragon", "phoenix", "tiger", "wolf", "eagle", "ninja", "warrior", "mage", "knight", "hunter",
];

pub const EMAIL_DOMAIN: &str = "gamers.example.com";

/// Random username for sequence index `i`, e.g. `swift_dragon_0`.
pub fn username<R: Rng>(rng: &mut R, index: u64) -> String {
    let adj = ADJECTIVES[rng.gen_range(0..ADJECTIVES.len())];
    let noun = NOUNS[rng.gen_range(0..NOUNS.len())];
    format!("{adj}_{noun}_{index}")
}

/// Generate the players file: one row per sequence index, sign-up timestamps
/// uniform over the historical one-year window.
pub fn generate<R: Rng>(cfg: &GenConfig, rng: &mut R) -> Result<()> {
    println!("Generating {} players...", group_digits(cfg.num_players));

    let window = DateWindow::new(HISTORICAL_WINDOW.0, HISTORICAL_WINDOW.1)?;
    let path = cfg.out_dir.join(PLAYERS_FILE);
    let mut out = CsvFile::create(&path, "username,email,created_at")?;

    for i in 0..cfg.num_players {
        let username = username(rng, i);
        let email = format!("{username}@{EMAIL_DOMAIN}");
        out.write_player(&username, &email, window.sample(rng))?;

        if (i + 1) % PLAYER_PROGRESS_EVERY == 0 {
            println!("  Generated {} players...", group_digits(i + 1));
        }
    }

    out.finish()?;
    println!("✓ Players saved to {}", path.display());
    Ok(())
}
