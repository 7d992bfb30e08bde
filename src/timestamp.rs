//! Random timestamps within half-open civil date windows.

use anyhow::{Result, bail};
use jiff::ToSpan;
use jiff::civil::{Date, DateTime};
use rand::Rng;

/// Timestamp format used in every generated file.
pub const TIMESTAMP_FMT: &str = "%Y-%m-%d %H:%M:%S";

const SECONDS_PER_DAY: i64 = 86_400;

/// A half-open window of civil dates, `[start, end)`.
///
/// The window length in whole days is fixed at construction; sampling draws
/// a uniform day offset plus a uniform second-of-day, so every instant of
/// the window is equally likely and the end date is never reached.
#[derive(Debug, Clone, Copy)]
pub struct DateWindow {
    start: Date,
    days: i64,
}

impl DateWindow {
    pub fn new(start: Date, end: Date) -> Result<Self> {
        let days = i64::from(start.until(end)?.get_days());
        if days <= 0 {
            bail!("empty date window: {start} .. {end}");
        }
        Ok(Self { start, days })
    }

    /// Number of whole days covered by the window.
    pub fn days(&self) -> i64 {
        self.days
    }

    /// Uniform instant within the window.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> DateTime {
        let day = rng.gen_range(0..self.days);
        let secs = rng.gen_range(0..SECONDS_PER_DAY);
        // day < self.days keeps the date strictly inside the window, so the
        // add cannot saturate; hour/minute/second are in range by division.
        let date = self.start.saturating_add(day.days());
        date.at(
            (secs / 3600) as i8,
            (secs % 3600 / 60) as i8,
            (secs % 60) as i8,
            0,
        )
    }
}
