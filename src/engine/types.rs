// src/engine/types.rs
use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;

use crate::config::consts::{COL_AGE, COL_LEAGUE, COL_YEAR, TEAM_COLUMNS};
use crate::core::html::TableError;
use crate::core::net::FetchError;
use crate::specs::player;
use crate::store::DataSet;

/// Base identifier plus a 1-based page suffix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerId {
    pub base: String,
    pub suffix: usize,
}

impl PlayerId {
    pub fn new(base: &str, suffix: usize) -> Self {
        Self { base: base.to_string(), suffix }
    }

    pub fn url(&self) -> String {
        player::page_url(&self.to_string())
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:02}", self.base, self.suffix)
    }
}

/// Year and age a salary row is looking for, already truncated at '.'.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Target {
    pub year: String,
    pub age: String,
}

/// A stats table whose key columns have been located.
pub struct StatsTable {
    pub data: DataSet,
    pub year: usize,
    pub age: usize,
    pub team: usize,
    pub league: usize,
}

impl StatsTable {
    pub fn new(data: DataSet) -> Result<Self, TableError> {
        if data.is_empty() {
            return Err(TableError::Empty);
        }
        let find = |name: &str| {
            data.column(name).ok_or_else(|| TableError::MissingColumn(name.to_string()))
        };
        let year = find(COL_YEAR)?;
        let age = find(COL_AGE)?;
        let league = find(COL_LEAGUE)?;
        let team = data
            .column_any(&TEAM_COLUMNS)
            .ok_or_else(|| TableError::MissingColumn(TEAM_COLUMNS.join("|")))?;
        Ok(Self { data, year, age, team, league })
    }

    pub fn has_year(&self, year: &str) -> bool {
        self.data.rows.iter().any(|r| r[self.year] == year)
    }
}

/// Ordered column → value map. The first value stored under a name wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JoinedRecord(IndexMap<String, String>);

impl JoinedRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend<'a, I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (k, v) in pairs {
            if !self.0.contains_key(k) {
                self.0.insert(k.to_string(), v.to_string());
            }
        }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.0.get(column).map(String::as_str)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// A salary row that never found its stats page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MissRecord {
    pub name: String,
    pub year: String,
    pub identifier: Option<String>,
}

impl fmt::Display for MissRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = self.identifier.as_deref().unwrap_or("-");
        write!(f, "{} {} {}", self.name, self.year, id)
    }
}

/// A curated (player page, salary key) pair for gap filling.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GapFillTarget {
    pub page_id: String,
    pub key: u32,
}

#[derive(Debug, Error)]
pub enum TrialError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("malformed table: {0}")]
    Malformed(#[from] TableError),
    #[error("no standard row for year {0}")]
    NoYearMatch(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentError {
    #[error("cannot build an identifier from {0} name parts")]
    UnsupportedNamePartCount(usize),
}
