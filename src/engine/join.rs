// src/engine/join.rs
//
// Salary rows × stats pages. One suffix search per row; records are kept in
// run order and laid out against the union schema once the loop is done.

use std::time::{Duration, Instant};

use crate::config::consts::{COL_NAME, COL_SALARY_AGE, COL_SALARY_YEAR, PROGRESS_EVERY, SUFFIX_BOUND};
use crate::config::StatKind;
use crate::core::html::TableError;
use crate::core::net::PageSource;
use crate::core::sanitize::trunc_decimal;
use crate::engine::ident::derive_base;
use crate::engine::matcher::{SearchOutcome, SuffixSearch};
use crate::engine::schema::OutputSchema;
use crate::engine::types::{JoinedRecord, MissRecord, Target};
use crate::progress::Progress;
use crate::store::DataSet;

#[derive(Clone, Debug)]
pub struct JoinSettings {
    pub kind: StatKind,
    pub wait: Duration,
    pub suffix_bound: usize,
}

impl Default for JoinSettings {
    fn default() -> Self {
        Self {
            kind: StatKind::Batting,
            wait: Duration::from_secs(crate::config::consts::JOIN_WAIT_SECS),
            suffix_bound: SUFFIX_BOUND,
        }
    }
}

pub struct JoinRun {
    pub table: DataSet,
    pub misses: Vec<MissRecord>,
    pub total: usize,
}

impl JoinRun {
    pub fn summary(&self) -> String {
        format!("Missed {} of {}", self.misses.len(), self.total)
    }
}

pub fn join_all(
    salaries: &DataSet,
    source: &dyn PageSource,
    settings: &JoinSettings,
    progress: &mut dyn Progress,
) -> Result<JoinRun, TableError> {
    let col = |name: &str| {
        salaries.column(name).ok_or_else(|| TableError::MissingColumn(name.to_string()))
    };
    let (name_ix, age_ix, year_ix) = (col(COL_NAME)?, col(COL_SALARY_AGE)?, col(COL_SALARY_YEAR)?);

    let total = salaries.len();
    progress.begin(total);
    progress.log(&format!(
        "Number of player salaries to match to {} statistics: {total}",
        settings.kind.label()
    ));

    let search = SuffixSearch::new(source, settings.kind, settings.wait).with_bound(settings.suffix_bound);
    let mut schema = OutputSchema::new(salaries.headers.iter().cloned());
    let mut records: Vec<JoinedRecord> = Vec::new();
    let mut misses = Vec::new();
    let started = Instant::now();

    for (i, row) in salaries.rows.iter().enumerate() {
        let name = row[name_ix].as_str();
        let target = Target {
            year: trunc_decimal(&row[year_ix]).to_string(),
            age: trunc_decimal(&row[age_ix]).to_string(),
        };

        let base = match derive_base(name) {
            Ok(b) => b,
            Err(e) => {
                log::warn!("{name}: {e}");
                let miss = MissRecord { name: name.to_string(), year: target.year, identifier: None };
                progress.missed(&miss);
                misses.push(miss);
                continue;
            }
        };

        let mut salary = JoinedRecord::new();
        salary.extend(salaries.pairs(row));

        match search.run(&base, &target, &salary) {
            SearchOutcome::Matched { id, records: found } => {
                log::debug!("{name} {} -> {id} ({} rows)", target.year, found.len());
                for r in &found {
                    schema.observe(r);
                }
                records.extend(found);
                if i % PROGRESS_EVERY == 0 {
                    progress.checkpoint(i, started.elapsed());
                }
            }
            SearchOutcome::Exhausted => {
                let miss = MissRecord { name: name.to_string(), year: target.year, identifier: Some(base) };
                log::warn!("no stats page for {miss}");
                progress.missed(&miss);
                misses.push(miss);
            }
        }
    }

    Ok(JoinRun { table: schema.to_dataset(&records), misses, total })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::net::FetchError;
    use crate::progress::NullProgress;

    struct Nothing;

    impl PageSource for Nothing {
        fn fetch_page(&self, url: &str, _wait: Duration) -> Result<String, FetchError> {
            Err(FetchError::Status { url: url.to_string(), status: 404 })
        }
    }

    fn salaries(rows: &[&[&str]]) -> DataSet {
        DataSet::from_parts(
            vec![s!("name"), s!("age"), s!("year")],
            rows.iter().map(|r| r.iter().map(|c| c.to_string()).collect()).collect(),
        )
    }

    #[test]
    fn missing_input_column_fails_before_any_fetch() {
        let ds = DataSet::from_parts(vec![s!("name"), s!("year")], vec![]);
        let err = join_all(&ds, &Nothing, &JoinSettings::default(), &mut NullProgress).err();
        assert_eq!(err, Some(TableError::MissingColumn(s!("age"))));
    }

    #[test]
    fn every_row_misses_when_nothing_resolves() {
        let ds = salaries(&[&["Mike Trout", "22", "2014.0"], &["Ichiro", "40", "2014"]]);
        let settings = JoinSettings { suffix_bound: 2, ..JoinSettings::default() };
        let run = join_all(&ds, &Nothing, &settings, &mut NullProgress).unwrap();

        assert_eq!(run.total, 2);
        assert_eq!(run.summary(), "Missed 2 of 2");
        assert_eq!(run.misses[0].identifier.as_deref(), Some("troutmi"));
        assert_eq!(run.misses[0].year, "2014");
        assert_eq!(run.misses[1].identifier, None);
        assert_eq!(run.table.headers, ["name", "age", "year"]);
        assert!(run.table.is_empty());
    }
}
