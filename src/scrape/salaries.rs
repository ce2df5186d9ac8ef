// src/scrape/salaries.rs
use std::time::Duration;

use crate::core::html::TableError;
use crate::core::net::{FetchError, PageSource};
use crate::specs::payroll;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PageError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Table(#[from] TableError),
}

/// Salary rows for one team page, shaped to `SALARY_COLUMNS`.
pub fn fetch_team_year(
    source: &dyn PageSource,
    team: &str,
    slug: &str,
    year: u16,
    wait: Duration,
) -> Result<Vec<Vec<String>>, PageError> {
    let doc = source.fetch_page(&payroll::page_url(slug, year), wait)?;
    let tables = payroll::parse(&doc)?;
    Ok(payroll::salary_rows(&tables, team, year))
}

/// The page loads and has an active-roster table.
pub fn check_page(source: &dyn PageSource, slug: &str, year: u16, wait: Duration) -> Result<(), PageError> {
    let doc = source.fetch_page(&payroll::page_url(slug, year), wait)?;
    payroll::parse(&doc)?;
    Ok(())
}
