// src/specs/mod.rs
//! # Page layouts
//!
//! One module per remote page type. Each page module knows **where the data lives in
//! the HTML** and how to turn it into a `store::DataSet`:
//!
//! - `payroll` – Spotrac team payroll page (`/mlb/{slug}/payroll/{year}/`):
//!   active roster table, and the disabled-list table when its heading says so.
//! - `player` – Baseball-Reference player page (`/players/{l}/{id}.shtml`):
//!   URL building and the standard/value table region ids per stat kind.
//!
//! Specs do not fetch, cache, join or write files. Callers hand them HTML (or
//! ask a `core::net::PageSource` for regions) and decide what to do with the
//! tables.
//!
//! Specs are testable offline against small HTML fixtures.
pub mod payroll;
pub mod player;
