/// CSV output.
///
/// Writes rows directly to a buffered `Write` sink with no intermediate
/// per-row `String` allocation. Uses `itoa` for integers and jiff's
/// `strftime` adapter for timestamps.
///
/// Generated field values never contain commas, quotes, or newlines, so no
/// quoting layer is needed.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use jiff::civil::DateTime;

use crate::timestamp::TIMESTAMP_FMT;

const WRITE_BUF_CAPACITY: usize = 128 * 1024;

/// A CSV file under construction: buffered writer plus the path it was
/// opened at, kept for error context and completion messages.
#[derive(Debug)]
pub struct CsvFile {
    path: PathBuf,
    out: BufWriter<File>,
}

impl CsvFile {
    /// Create the file (truncating any previous run) and write the header row.
    pub fn create(path: &Path, header: &str) -> Result<Self> {
        let file =
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
        let mut out = BufWriter::with_capacity(WRITE_BUF_CAPACITY, file);
        out.write_all(header.as_bytes())?;
        out.write_all(b"\n")?;
        Ok(Self {
            path: path.to_path_buf(),
            out,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `username,email,created_at`
    pub fn write_player(
        &mut self,
        username: &str,
        email: &str,
        created_at: DateTime,
    ) -> Result<()> {
        self.out.write_all(username.as_bytes())?;
        self.out.write_all(b",")?;
        self.out.write_all(email.as_bytes())?;
        self.out.write_all(b",")?;
        write!(self.out, "{}", created_at.strftime(TIMESTAMP_FMT))?;
        self.out.write_all(b"\n")?;
        Ok(())
    }

    /// `player_id,score,played_at`
    pub fn write_match(&mut self, player_id: u64, score: u32, played_at: DateTime) -> Result<()> {
        let mut buf = itoa::Buffer::new();
        self.out.write_all(buf.format(player_id).as_bytes())?;
        self.out.write_all(b",")?;
        self.out.write_all(buf.format(score).as_bytes())?;
        self.out.write_all(b",")?;
        write!(self.out, "{}", played_at.strftime(TIMESTAMP_FMT))?;
        self.out.write_all(b"\n")?;
        Ok(())
    }

    /// A data line captured verbatim from another file.
    pub fn write_raw(&mut self, line: &str) -> Result<()> {
        self.out.write_all(line.as_bytes())?;
        self.out.write_all(b"\n")?;
        Ok(())
    }

    /// Flush buffered rows to disk. Later stages read completed files back,
    /// so a stage must not finish with bytes still sitting in the buffer.
    pub fn finish(mut self) -> Result<()> {
        self.out
            .flush()
            .with_context(|| format!("failed to flush {}", self.path.display()))
    }
}
