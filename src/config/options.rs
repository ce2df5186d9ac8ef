// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;
use crate::csv::Delim;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatKind {
    #[default]
    Batting,
    Pitching,
}

impl StatKind {
    pub fn label(self) -> &'static str {
        match self { StatKind::Batting => "batting", StatKind::Pitching => "pitching" }
    }
}

fn secs(s: u64) -> Duration { Duration::from_secs(s) }

fn default_years() -> Vec<u16> { (FIRST_YEAR..=LAST_YEAR).collect() }

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SalaryOptions {
    pub out: PathBuf,
    pub years: Vec<u16>,
    /// Team codes; empty = all 30.
    pub teams: Vec<String>,
    pub split: bool,
    pub batters_out: PathBuf,
    pub pitchers_out: PathBuf,
    pub format: Delim,
    pub wait: Duration,
}

impl Default for SalaryOptions {
    fn default() -> Self {
        Self {
            out: PathBuf::from(DEFAULT_SALARIES_FILE),
            years: default_years(),
            teams: Vec::new(),
            split: true,
            batters_out: PathBuf::from(DEFAULT_BATTERS_FILE),
            pitchers_out: PathBuf::from(DEFAULT_PITCHERS_FILE),
            format: Delim::Csv,
            wait: secs(PAYROLL_WAIT_SECS),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitOptions {
    pub input: PathBuf,
    pub batters_out: PathBuf,
    pub pitchers_out: PathBuf,
    pub format: Delim,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_SALARIES_FILE),
            batters_out: PathBuf::from(DEFAULT_BATTERS_FILE),
            pitchers_out: PathBuf::from(DEFAULT_PITCHERS_FILE),
            format: Delim::Csv,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JoinOptions {
    pub input: PathBuf,
    pub out: PathBuf,
    pub kind: StatKind,
    pub format: Delim,
    pub wait: Duration,
    pub suffix_bound: usize,
    /// Also write the miss list as JSON.
    pub misses_out: Option<PathBuf>,
}

impl Default for JoinOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_BATTERS_FILE),
            out: PathBuf::from(DEFAULT_JOINED_FILE),
            kind: StatKind::Batting,
            format: Delim::Csv,
            wait: secs(JOIN_WAIT_SECS),
            suffix_bound: SUFFIX_BOUND,
            misses_out: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GapFillOptions {
    /// Existing stats table; result goes to `<stem>_full.<ext>` beside it.
    pub stats: PathBuf,
    pub kind: StatKind,
    /// `page_id,key` file replacing the built-in list.
    pub targets: Option<PathBuf>,
    pub format: Delim,
    pub wait: Duration,
}

impl Default for GapFillOptions {
    fn default() -> Self {
        Self {
            stats: PathBuf::from(DEFAULT_JOINED_FILE),
            kind: StatKind::Batting,
            targets: None,
            format: Delim::Csv,
            wait: secs(GAPFILL_WAIT_SECS),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckOptions {
    pub years: Vec<u16>,
    pub teams: Vec<String>,
    pub wait: Duration,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self { years: default_years(), teams: Vec::new(), wait: secs(PAYROLL_WAIT_SECS) }
    }
}
