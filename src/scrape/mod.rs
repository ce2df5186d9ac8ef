// src/scrape/mod.rs
mod salaries;

pub use salaries::{check_page, fetch_team_year, PageError};
