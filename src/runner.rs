// src/runner.rs
//
// Pipeline entry points shared by the CLI and the integration tests. Each
// takes its options, a page source and a progress sink, and does the file
// I/O around the engine.

use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use crate::config::options::{CheckOptions, GapFillOptions, JoinOptions, SalaryOptions, SplitOptions};
use crate::config::teams;
use crate::core::net::PageSource;
use crate::engine::gapfill;
use crate::engine::split::split_by_position;
use crate::engine::{join_all, JoinSettings};
use crate::file::{append_rows, create_output, full_path, read_table, write_into, write_rows_start, write_table};
use crate::progress::{fmt_hms, Progress};
use crate::scrape;
use crate::specs::payroll;

/// Summary of what was produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
    pub misses: usize,
}

/* ---------------- Salaries ---------------- */

pub fn run_salaries(
    opts: &SalaryOptions,
    source: &dyn PageSource,
    progress: &mut dyn Progress,
) -> Result<RunSummary, Box<dyn Error>> {
    let teams = teams::select(&opts.teams)?;
    write_rows_start(&opts.out, &payroll::salary_headers(), opts.format)?;

    progress.begin(opts.years.len() * teams.len());
    let mut summary = RunSummary { files_written: vec![opts.out.clone()], misses: 0 };

    for &year in &opts.years {
        for &(code, slug) in &teams {
            match scrape::fetch_team_year(source, code, slug, year, opts.wait) {
                Ok(rows) => {
                    append_rows(&opts.out, &rows, opts.format)?;
                    log::debug!(
                        "{code} {year}: {} rows, ${:.0} total",
                        rows.len(),
                        payroll::payroll_total(&rows)
                    );
                    progress.log(".");
                }
                Err(e) => {
                    log::warn!("Failure for {code} {year}: {e}");
                    progress.log(&format!("Failure for {code} {year}"));
                    summary.misses += 1;
                }
            }
        }
    }

    if opts.split {
        let split = SplitOptions {
            input: opts.out.clone(),
            batters_out: opts.batters_out.clone(),
            pitchers_out: opts.pitchers_out.clone(),
            format: opts.format,
        };
        summary.files_written.extend(run_split(&split, progress)?.files_written);
    }

    progress.finish();
    Ok(summary)
}

/* ---------------- Split ---------------- */

pub fn run_split(opts: &SplitOptions, progress: &mut dyn Progress) -> Result<RunSummary, Box<dyn Error>> {
    let salaries = read_table(&opts.input, opts.format)?;
    let (batters, pitchers) = split_by_position(&salaries)?;
    write_table(&opts.batters_out, &batters, opts.format)?;
    write_table(&opts.pitchers_out, &pitchers, opts.format)?;
    progress.log(&format!("{} batters, {} pitchers", batters.len(), pitchers.len()));
    Ok(RunSummary {
        files_written: vec![opts.batters_out.clone(), opts.pitchers_out.clone()],
        misses: 0,
    })
}

/* ---------------- Join ---------------- */

pub fn run_join(
    opts: &JoinOptions,
    source: &dyn PageSource,
    progress: &mut dyn Progress,
) -> Result<RunSummary, Box<dyn Error>> {
    let salaries = read_table(&opts.input, opts.format)?;
    // fail on a bad destination before hours of fetching
    let out = create_output(&opts.out)?;
    let misses_out = opts.misses_out.as_deref().map(create_output).transpose()?;

    let settings = JoinSettings { kind: opts.kind, wait: opts.wait, suffix_bound: opts.suffix_bound };
    let run = join_all(&salaries, source, &settings, progress)?;

    write_into(out, &run.table, opts.format)?;
    let mut files_written = vec![opts.out.clone()];
    if let (Some(file), Some(path)) = (misses_out, opts.misses_out.as_ref()) {
        write_misses(file, &run.misses)?;
        files_written.push(path.clone());
    }

    let listing: Vec<String> = run.misses.iter().map(ToString::to_string).collect();
    progress.log(&format!("{listing:?}"));
    progress.log("");
    progress.log(&run.summary());
    progress.finish();

    Ok(RunSummary { files_written, misses: run.misses.len() })
}

fn write_misses<T: serde::Serialize>(file: File, misses: &[T]) -> Result<(), Box<dyn Error>> {
    serde_json::to_writer_pretty(BufWriter::new(file), misses)?;
    Ok(())
}

/* ---------------- Gap fill ---------------- */

pub fn run_gapfill(
    opts: &GapFillOptions,
    source: &dyn PageSource,
    progress: &mut dyn Progress,
) -> Result<RunSummary, Box<dyn Error>> {
    let targets = match &opts.targets {
        Some(path) => gapfill::parse_targets(&read_table(path, opts.format)?)?,
        None => gapfill::builtin_targets(opts.kind),
    };
    let mut stats = read_table(&opts.stats, opts.format)?;
    let out_path = full_path(&opts.stats);
    let out = create_output(&out_path)?;

    let run = gapfill::gap_fill(&targets, source, opts.kind, opts.wait, progress);
    stats.append(&run.table);
    write_into(out, &stats, opts.format)?;

    let ids: Vec<&str> = run.misses.iter().map(|t| t.page_id.as_str()).collect();
    let keys: Vec<u32> = run.misses.iter().map(|t| t.key).collect();
    progress.log("");
    progress.log(&format!("{ids:?}"));
    progress.log(&format!("{keys:?}"));
    progress.log(&format!("{} players missed", run.misses.len()));
    progress.log("");
    progress.log(&format!("Time: {}", fmt_hms(run.elapsed)));
    progress.finish();

    Ok(RunSummary { files_written: vec![out_path], misses: run.misses.len() })
}

/* ---------------- Check ---------------- */

pub fn run_check(
    opts: &CheckOptions,
    source: &dyn PageSource,
    progress: &mut dyn Progress,
) -> Result<RunSummary, Box<dyn Error>> {
    let teams = teams::select(&opts.teams)?;
    progress.begin(opts.years.len() * teams.len());
    let mut misses = 0;
    for &year in &opts.years {
        for &(code, slug) in &teams {
            match scrape::check_page(source, slug, year, opts.wait) {
                Ok(()) => progress.log("."),
                Err(e) => {
                    log::debug!("{code} {year}: {e}");
                    progress.log(&format!("Failure for {code} {year}"));
                    misses += 1;
                }
            }
        }
    }
    progress.finish();
    Ok(RunSummary { files_written: Vec::new(), misses })
}
