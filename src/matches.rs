//! Match record synthesis: the historical bulk file and the second batch
//! with its guaranteed duplicate fraction.

use anyhow::{Result, bail};
use rand::Rng;

use crate::config::{
    BATCH2_FILE, BATCH2_WINDOW, DUPLICATE_POOL_SIZE, GenConfig, HISTORICAL_WINDOW,
    MATCH_PROGRESS_EVERY, MATCHES_FILE, SCORE_RANGE,
};
use crate::group_digits;
use crate::input::read_match_prefix;
use crate::output::CsvFile;
use crate::timestamp::DateWindow;

const MATCH_HEADER: &str = "player_id,score,played_at";

/// Generate the historical matches file. `player_id` values reference the
/// generated player range but are not validated against the players file.
pub fn generate<R: Rng>(cfg: &GenConfig, rng: &mut R) -> Result<()> {
    println!("Generating {} matches...", group_digits(cfg.num_matches));

    let window = DateWindow::new(HISTORICAL_WINDOW.0, HISTORICAL_WINDOW.1)?;
    let ids = cfg.player_id_range();
    let path = cfg.out_dir.join(MATCHES_FILE);
    let mut out = CsvFile::create(&path, MATCH_HEADER)?;

    for i in 0..cfg.num_matches {
        let player_id = rng.gen_range(ids.clone());
        let score = rng.gen_range(SCORE_RANGE);
        out.write_match(player_id, score, window.sample(rng))?;

        if (i + 1) % MATCH_PROGRESS_EVERY == 0 {
            println!("  Generated {} matches...", group_digits(i + 1));
        }
    }

    out.finish()?;
    println!("✓ Matches saved to {}", path.display());
    Ok(())
}

/// Generate the batch2 file: fresh rows over the shifted window first, then
/// verbatim copies drawn uniformly from the matches-file prefix.
///
/// Reads the matches file back from disk, so it must run after [`generate`]
/// has finished and flushed.
pub fn generate_batch2<R: Rng>(cfg: &GenConfig, rng: &mut R) -> Result<()> {
    let (num_new, num_duplicates) = cfg.batch2_split();
    println!(
        "Generating {} batch2 matches (with {:.0}% duplicates)...",
        group_digits(cfg.num_batch2),
        cfg.duplicate_fraction * 100.0
    );

    let pool = read_match_prefix(&cfg.out_dir.join(MATCHES_FILE), DUPLICATE_POOL_SIZE)?;
    if num_duplicates > 0 && pool.is_empty() {
        bail!("{MATCHES_FILE} has no data rows to duplicate");
    }

    let window = DateWindow::new(BATCH2_WINDOW.0, BATCH2_WINDOW.1)?;
    let ids = cfg.player_id_range();
    let path = cfg.out_dir.join(BATCH2_FILE);
    let mut out = CsvFile::create(&path, MATCH_HEADER)?;

    for _ in 0..num_new {
        let player_id = rng.gen_range(ids.clone());
        let score = rng.gen_range(SCORE_RANGE);
        out.write_match(player_id, score, window.sample(rng))?;
    }

    for _ in 0..num_duplicates {
        out.write_raw(&pool[rng.gen_range(0..pool.len())])?;
    }

    out.finish()?;
    println!("✓ Batch2 matches saved to {}", path.display());
    println!(
        "  ({} new matches, {} duplicates)",
        group_digits(num_new),
        group_digits(num_duplicates)
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn cfg_in(dir: &tempfile::TempDir) -> GenConfig {
        GenConfig {
            out_dir: dir.path().to_path_buf(),
            num_players: 50,
            num_matches: 300,
            num_batch2: 40,
            duplicate_fraction: 0.25,
        }
    }

    fn fields(line: &str) -> (u64, u32, &str) {
        let mut it = line.split(',');
        let id = it.next().unwrap().parse().unwrap();
        let score = it.next().unwrap().parse().unwrap();
        let at = it.next().unwrap();
        assert!(it.next().is_none(), "extra fields in {line}");
        (id, score, at)
    }

    #[test]
    fn matches_respect_id_and_score_ranges() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = cfg_in(&dir);
        let mut rng = StdRng::seed_from_u64(11);
        generate(&cfg, &mut rng).unwrap();

        let text = std::fs::read_to_string(dir.path().join(MATCHES_FILE)).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], MATCH_HEADER);
        assert_eq!(lines.len() - 1, 300);

        for line in &lines[1..] {
            let (id, score, at) = fields(line);
            assert!((11..=60).contains(&id), "{line}");
            assert!((100..=5000).contains(&score), "{line}");
            // lexicographic comparison works for this timestamp format
            assert!(("2023-01-01 00:00:00".."2024-01-01 00:00:00").contains(&at), "{line}");
        }
    }

    #[test]
    fn batch2_writes_new_rows_then_verbatim_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = cfg_in(&dir);
        let mut rng = StdRng::seed_from_u64(23);
        generate(&cfg, &mut rng).unwrap();
        generate_batch2(&cfg, &mut rng).unwrap();

        let matches = std::fs::read_to_string(dir.path().join(MATCHES_FILE)).unwrap();
        let pool: HashSet<&str> = matches.lines().skip(1).take(DUPLICATE_POOL_SIZE).collect();

        let batch2 = std::fs::read_to_string(dir.path().join(BATCH2_FILE)).unwrap();
        let rows: Vec<&str> = batch2.lines().skip(1).collect();
        let (num_new, num_duplicates) = cfg.batch2_split();
        assert_eq!(rows.len() as u64, cfg.num_batch2);
        assert_eq!((num_new, num_duplicates), (30, 10));

        // fresh rows come first and use the shifted window
        for line in &rows[..num_new as usize] {
            let (id, score, at) = fields(line);
            assert!((11..=60).contains(&id), "{line}");
            assert!((100..=5000).contains(&score), "{line}");
            assert!(("2023-06-01 00:00:00".."2024-01-01 00:00:00").contains(&at), "{line}");
        }

        // every trailing row is a byte-identical copy of a pool row
        for line in &rows[num_new as usize..] {
            assert!(pool.contains(line), "not a duplicate of the prefix: {line}");
        }
    }

    #[test]
    fn batch2_without_matches_rows_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = GenConfig {
            num_matches: 0,
            ..cfg_in(&dir)
        };
        let mut rng = StdRng::seed_from_u64(5);
        generate(&cfg, &mut rng).unwrap();

        let err = generate_batch2(&cfg, &mut rng).unwrap_err();
        assert!(err.to_string().contains("no data rows"), "{err}");
    }

    #[test]
    fn batch2_with_zero_duplicate_fraction_needs_no_pool() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = GenConfig {
            num_matches: 0,
            duplicate_fraction: 0.0,
            ..cfg_in(&dir)
        };
        let mut rng = StdRng::seed_from_u64(5);
        generate(&cfg, &mut rng).unwrap();
        generate_batch2(&cfg, &mut rng).unwrap();

        let batch2 = std::fs::read_to_string(dir.path().join(BATCH2_FILE)).unwrap();
        assert_eq!(batch2.lines().count() - 1, 40);
    }
}
