// src/cli.rs
use std::error::Error;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::consts::*;
use crate::config::options::*;
use crate::config::StatKind;
use crate::core::net::HttpSource;
use crate::csv::Delim;
use crate::progress::ConsoleProgress;
use crate::runner::{self, RunSummary};

#[derive(Parser, Debug)]
#[command(name = "salary_join")]
#[command(about = "MLB salaries joined with Baseball-Reference batting/pitching stats", long_about = None)]
pub struct Cli {
    /// Debug logging (RUST_LOG still wins)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Delimiter for files whose extension does not say
    #[arg(long, value_enum, global = true, default_value = "csv")]
    pub format: Format,

    /// Pause after every request, in milliseconds
    #[arg(long, global = true, default_value_t = REQUEST_PAUSE_MS)]
    pub pause_ms: u64,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Politeness pause for the HTTP source.
    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Csv,
    Tsv,
}

impl From<Format> for Delim {
    fn from(f: Format) -> Self {
        match f { Format::Csv => Delim::Csv, Format::Tsv => Delim::Tsv }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scrape Spotrac payroll pages into one salary file
    Salaries {
        #[arg(short, long, default_value = DEFAULT_SALARIES_FILE)]
        out: PathBuf,
        /// e.g. "2012-2018" or "2014,2016"
        #[arg(long)]
        years: Option<String>,
        /// Team codes, comma separated (default: all 30)
        #[arg(long, value_delimiter = ',')]
        teams: Vec<String>,
        /// Skip writing batter/pitcher files
        #[arg(long)]
        no_split: bool,
        #[arg(long, default_value = DEFAULT_BATTERS_FILE)]
        batters_out: PathBuf,
        #[arg(long, default_value = DEFAULT_PITCHERS_FILE)]
        pitchers_out: PathBuf,
        #[arg(long, default_value_t = PAYROLL_WAIT_SECS)]
        wait: u64,
    },
    /// Split a salary file into batters and pitchers
    Split {
        #[arg(short, long, default_value = DEFAULT_SALARIES_FILE)]
        input: PathBuf,
        #[arg(long, default_value = DEFAULT_BATTERS_FILE)]
        batters_out: PathBuf,
        #[arg(long, default_value = DEFAULT_PITCHERS_FILE)]
        pitchers_out: PathBuf,
    },
    /// Join salary rows with Baseball-Reference stats
    Join {
        #[arg(short, long, default_value = DEFAULT_BATTERS_FILE)]
        input: PathBuf,
        #[arg(short, long, default_value = DEFAULT_JOINED_FILE)]
        out: PathBuf,
        /// Use pitching tables instead of batting
        #[arg(long)]
        pitching: bool,
        /// Also write misses as JSON
        #[arg(long)]
        misses_out: Option<PathBuf>,
        #[arg(long, default_value_t = JOIN_WAIT_SECS)]
        wait: u64,
        #[arg(long, default_value_t = SUFFIX_BOUND)]
        suffix_bound: usize,
    },
    /// Re-scrape known misses and append them to a stats file
    Gapfill {
        #[arg(short, long, default_value = DEFAULT_JOINED_FILE)]
        stats: PathBuf,
        #[arg(long)]
        pitching: bool,
        /// page_id,key table replacing the built-in list
        #[arg(long)]
        targets: Option<PathBuf>,
        #[arg(long, default_value_t = GAPFILL_WAIT_SECS)]
        wait: u64,
    },
    /// Check that payroll pages load and carry a salary table
    Check {
        #[arg(long)]
        years: Option<String>,
        #[arg(long, value_delimiter = ',')]
        teams: Vec<String>,
        #[arg(long, default_value_t = PAYROLL_WAIT_SECS)]
        wait: u64,
    },
}

fn kind(pitching: bool) -> StatKind {
    if pitching { StatKind::Pitching } else { StatKind::Batting }
}

/// "2012-2014,2017" → [2012, 2013, 2014, 2017]; `None` → default seasons.
pub fn parse_years(arg: Option<&str>) -> Result<Vec<u16>, Box<dyn Error>> {
    let Some(s) = arg else {
        return Ok((FIRST_YEAR..=LAST_YEAR).collect());
    };
    let mut out = Vec::new();
    for part in s.split(',') {
        let part = part.trim();
        if part.is_empty() { continue; }
        if let Some((a, b)) = part.split_once('-') {
            let a: u16 = a.trim().parse()?;
            let b: u16 = b.trim().parse()?;
            if a > b { return Err(format!("Invalid range: {part}").into()); }
            out.extend(a..=b);
        } else {
            out.push(part.parse()?);
        }
    }
    out.sort_unstable();
    out.dedup();
    if out.is_empty() {
        return Err("No years given".into());
    }
    Ok(out)
}

pub fn run(cli: Cli) -> Result<RunSummary, Box<dyn Error>> {
    let format = Delim::from(cli.format);
    let pause = cli.pause();
    let mut progress = ConsoleProgress;

    match cli.command {
        Command::Split { input, batters_out, pitchers_out } => {
            let opts = SplitOptions { input, batters_out, pitchers_out, format };
            runner::run_split(&opts, &mut progress)
        }
        Command::Salaries { out, years, teams, no_split, batters_out, pitchers_out, wait } => {
            let opts = SalaryOptions {
                out,
                years: parse_years(years.as_deref())?,
                teams,
                split: !no_split,
                batters_out,
                pitchers_out,
                format,
                wait: Duration::from_secs(wait),
            };
            let source = HttpSource::new(pause)?;
            runner::run_salaries(&opts, &source, &mut progress)
        }
        Command::Join { input, out, pitching, misses_out, wait, suffix_bound } => {
            let opts = JoinOptions {
                input,
                out,
                kind: kind(pitching),
                format,
                wait: Duration::from_secs(wait),
                suffix_bound,
                misses_out,
            };
            let source = HttpSource::new(pause)?;
            runner::run_join(&opts, &source, &mut progress)
        }
        Command::Gapfill { stats, pitching, targets, wait } => {
            let opts = GapFillOptions {
                stats,
                kind: kind(pitching),
                targets,
                format,
                wait: Duration::from_secs(wait),
            };
            let source = HttpSource::new(pause)?;
            runner::run_gapfill(&opts, &source, &mut progress)
        }
        Command::Check { years, teams, wait } => {
            let opts = CheckOptions {
                years: parse_years(years.as_deref())?,
                teams,
                wait: Duration::from_secs(wait),
            };
            let source = HttpSource::new(pause)?;
            runner::run_check(&opts, &source, &mut progress)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_ranges() {
        assert_eq!(parse_years(Some("2014-2016,2012")).unwrap(), [2012, 2014, 2015, 2016]);
        assert_eq!(parse_years(None).unwrap().len(), 7);
        assert!(parse_years(Some("2016-2014")).is_err());
        assert!(parse_years(Some("abc")).is_err());
        assert!(parse_years(Some(",")).is_err());
    }

    #[test]
    fn cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
