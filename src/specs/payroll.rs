// src/specs/payroll.rs
//! Spotrac team payroll page.
//!
//! Layout we rely on:
//! - the first `<table>` on the page is the active roster
//! - the second `<table>` is the disabled list only when the `<h2>` right
//!   before it mentions "Disabled"; otherwise the page has no DL table
//!
//! Column text varies by team and season, so rows are taken positionally
//! (first ten cells) and renamed to `SALARY_COLUMNS`. The name cell reads
//! "Last First Last First"; it is written once, as "First Last".

use crate::config::consts::{
    DISABLED_HEADING, SALARY_COLUMNS, SITE_SALARY_COLUMNS, SPOTRAC_MLB, TYPE_ACTIVE, TYPE_DISABLED,
};
use crate::core::html::{self, TableError};
use crate::core::sanitize::{dedup_name_tokens, parse_currency, strip_injury_tag, surname_last};
use crate::store::DataSet;

const TOTAL_SALARY_IX: usize = 7;

pub struct PayrollTables {
    pub active: DataSet,
    pub disabled: Option<DataSet>,
}

pub fn page_url(slug: &str, year: u16) -> String {
    format!("{SPOTRAC_MLB}/{slug}/payroll/{year}/")
}

pub fn salary_headers() -> Vec<String> {
    SALARY_COLUMNS.iter().map(|h| s!(*h)).collect()
}

pub fn parse(doc: &str) -> Result<PayrollTables, TableError> {
    let tables = html::tables_with_headings(doc);
    let (_, active_markup) = tables.first().ok_or(TableError::NoTable)?;
    let active = html::parse_table(active_markup)?;

    let disabled = match tables.get(1) {
        Some((Some(heading), markup)) if heading.contains(DISABLED_HEADING) => {
            match html::parse_table(markup) {
                Ok(ds) => Some(ds),
                Err(TableError::Empty) => None,
                Err(e) => return Err(e),
            }
        }
        _ => None,
    };

    Ok(PayrollTables { active, disabled })
}

/// Rows shaped to `SALARY_COLUMNS`: active rows first, then disabled-list rows.
pub fn salary_rows(tables: &PayrollTables, team: &str, year: u16) -> Vec<Vec<String>> {
    let mut out = Vec::new();
    let sections = [
        (Some(&tables.active), TYPE_ACTIVE, false),
        (tables.disabled.as_ref(), TYPE_DISABLED, true),
    ];
    for (ds, kind, injured) in sections {
        let Some(ds) = ds else { continue };
        for row in &ds.rows {
            out.push(shape_row(row, kind, injured, team, year));
        }
    }
    out
}

/// Sum of the `total_salary` cells that parse as money.
pub fn payroll_total(rows: &[Vec<String>]) -> f64 {
    rows.iter()
        .filter_map(|r| r.get(TOTAL_SALARY_IX).and_then(|c| parse_currency(c)))
        .sum()
}

fn shape_row(site: &[String], kind: &str, injured: bool, team: &str, year: u16) -> Vec<String> {
    let mut row: Vec<String> = site.iter().take(SITE_SALARY_COLUMNS).cloned().collect();
    row.resize(SITE_SALARY_COLUMNS, s!());

    let name = if injured { strip_injury_tag(&row[0]) } else { row[0].clone() };
    row[0] = surname_last(&dedup_name_tokens(&name));

    row.push(s!(kind));
    row.push(year.to_string());
    row.push(s!(team));
    row
}
