//! Shared test utilities: spawn the `lbgen` binary against a temp directory
//! and load back the files it wrote.

// each test binary uses a subset of these helpers
#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Output};

/// Run the built binary with the given arguments.
pub fn run_lbgen(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lbgen"))
        .args(args)
        .output()
        .expect("failed to run lbgen")
}

/// Run with small row counts into `out_dir`, asserting success.
pub fn run_small(out_dir: &Path, seed: u64) -> Output {
    let out_dir = out_dir.to_str().unwrap();
    let seed = seed.to_string();
    let output = run_lbgen(&[
        "--out-dir",
        out_dir,
        "--players",
        "50",
        "--matches",
        "400",
        "--batch2",
        "60",
        "--seed",
        &seed,
    ]);
    assert!(
        output.status.success(),
        "lbgen exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    output
}

/// Header line of a generated CSV.
pub fn header(path: &Path) -> String {
    let text = std::fs::read_to_string(path).expect("failed to read generated csv");
    text.lines().next().expect("file is empty").to_string()
}

/// Data rows of a generated CSV (header stripped), in file order.
pub fn data_rows(path: &Path) -> Vec<String> {
    let text = std::fs::read_to_string(path).expect("failed to read generated csv");
    text.lines().skip(1).map(str::to_string).collect()
}

/// Split a `player_id,score,played_at` row.
pub fn match_fields(row: &str) -> (u64, u32, String) {
    let mut it = row.split(',');
    let id = it.next().unwrap().parse().expect("player_id not an integer");
    let score = it.next().unwrap().parse().expect("score not an integer");
    let at = it.next().expect("missing played_at").to_string();
    assert!(it.next().is_none(), "extra fields in row: {row}");
    (id, score, at)
}
