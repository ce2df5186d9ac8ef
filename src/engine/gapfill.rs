// src/engine/gapfill.rs
//
// Second pass for players the suffix search cannot reach. Each target names
// the player page directly plus the salary-row key the stats belong to.

use std::error::Error;
use std::time::{Duration, Instant};

use crate::config::consts::{KEY_COLUMN, LEAGUES};
use crate::config::{missing, StatKind};
use crate::core::html;
use crate::core::net::PageSource;
use crate::engine::types::{GapFillTarget, StatsTable, TrialError};
use crate::progress::Progress;
use crate::specs::player;
use crate::store::DataSet;

pub struct GapFillRun {
    pub table: DataSet,
    pub misses: Vec<GapFillTarget>,
    pub elapsed: Duration,
}

pub fn builtin_targets(kind: StatKind) -> Vec<GapFillTarget> {
    missing::targets(kind)
        .iter()
        .map(|&(page_id, key)| GapFillTarget { page_id: page_id.to_string(), key })
        .collect()
}

/// Targets from a `page_id,key` table.
pub fn parse_targets(ds: &DataSet) -> Result<Vec<GapFillTarget>, Box<dyn Error>> {
    let id_ix = ds.column("page_id").ok_or("targets file needs a page_id column")?;
    let key_ix = ds.column(KEY_COLUMN).ok_or("targets file needs a key column")?;
    ds.rows
        .iter()
        .map(|r| -> Result<GapFillTarget, Box<dyn Error>> {
            let key = r[key_ix]
                .trim()
                .parse::<u32>()
                .map_err(|e| format!("bad key {:?} for {}: {e}", r[key_ix], r[id_ix]))?;
            Ok(GapFillTarget { page_id: r[id_ix].trim().to_string(), key })
        })
        .collect()
}

fn league_rows<'a>(t: &'a StatsTable) -> impl Iterator<Item = &'a Vec<String>> + 'a {
    t.data.rows.iter().filter(|r| LEAGUES.contains(&r[t.league].as_str()))
}

/// Left merge of standard onto value rows sharing (Year, team), both tables
/// restricted to recognised leagues. Value columns already present in the
/// standard table are dropped; `key` is appended to every row.
pub fn merge_page(standard: &StatsTable, value: &StatsTable, key: u32) -> DataSet {
    let extra: Vec<usize> = value
        .data
        .headers
        .iter()
        .enumerate()
        .filter(|(_, h)| standard.data.column(h).is_none())
        .map(|(i, _)| i)
        .collect();

    let mut headers = standard.data.headers.clone();
    headers.extend(extra.iter().map(|&i| value.data.headers[i].clone()));
    headers.push(KEY_COLUMN.to_string());
    let mut out = DataSet::new(headers);

    let key = key.to_string();
    let values: Vec<&Vec<String>> = league_rows(value).collect();
    for srow in league_rows(standard) {
        let same_key = |v: &&&Vec<String>| {
            v[value.year] == srow[standard.year] && v[value.team] == srow[standard.team]
        };
        let mut matched = values.iter().filter(same_key).peekable();
        if matched.peek().is_none() {
            let mut row = srow.clone();
            row.resize(standard.data.headers.len() + extra.len(), s!());
            row.push(key.clone());
            out.rows.push(row);
            continue;
        }
        for vrow in matched {
            let mut row = srow.clone();
            row.extend(extra.iter().map(|&i| vrow[i].clone()));
            row.push(key.clone());
            out.rows.push(row);
        }
    }
    out
}

fn fetch_target(
    source: &dyn PageSource,
    kind: StatKind,
    target: &GapFillTarget,
    wait: Duration,
) -> Result<DataSet, TrialError> {
    let url = player::page_url(&target.page_id);
    let markup = source.fetch_regions(&url, &player::regions(kind), wait)?;
    let [std_markup, val_markup] = markup.as_slice() else {
        return Err(TrialError::Malformed(html::TableError::NoTable));
    };
    let standard = StatsTable::new(html::parse_table(std_markup)?)?;
    let value = StatsTable::new(html::parse_table(val_markup)?)?;
    Ok(merge_page(&standard, &value, target.key))
}

pub fn gap_fill(
    targets: &[GapFillTarget],
    source: &dyn PageSource,
    kind: StatKind,
    wait: Duration,
    progress: &mut dyn Progress,
) -> GapFillRun {
    let started = Instant::now();
    progress.begin(targets.len());
    progress.log(&format!(
        "Number of player salaries to match to {} statistics: {}",
        kind.label(),
        targets.len()
    ));

    let mut table = DataSet::default();
    let mut misses = Vec::new();
    for target in targets {
        match fetch_target(source, kind, target, wait) {
            Ok(ds) => table.append(&ds),
            Err(e) => {
                log::warn!("{} (key {}): {e}", target.page_id, target.key);
                misses.push(target.clone());
            }
        }
    }

    GapFillRun { table, misses, elapsed: started.elapsed() }
}
