//! Read-back of already-written CSV: the batch2 duplicate source pool.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

/// Separator count of a well-formed three-field match row.
const MATCH_FIELD_SEPS: usize = 2;

/// Collect up to `limit` data rows (header excluded) from a matches CSV, in
/// written order, as verbatim lines.
///
/// Rows are kept as raw text so that batch2 duplicates stay byte-identical
/// to their source rows. A row without exactly three fields is fatal; there
/// is no recovery path for a corrupt intermediate file.
pub fn read_match_prefix(path: &Path, limit: usize) -> Result<Vec<String>> {
    let buf =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let mut rows = Vec::with_capacity(limit);
    for (lineno, line) in buf.split('\n').enumerate() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.is_empty() || lineno == 0 {
            // blank trailing line, or the header
            continue;
        }
        if memchr::memchr_iter(b',', line.as_bytes()).count() != MATCH_FIELD_SEPS {
            bail!(
                "malformed row at {}:{}: {line:?}",
                path.display(),
                lineno + 1
            );
        }
        rows.push(line.to_string());
        if rows.len() == limit {
            break;
        }
    }
    Ok(rows)
}
