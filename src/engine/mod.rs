// src/engine/mod.rs
//! Join engine: identifiers, suffix search, output schema, and the two
//! pipelines built on them (full join and gap fill) plus the position split.
//!
//! Nothing in here touches files. Pages come through `core::net::PageSource`
//! and results go back as `store::DataSet`s.

pub mod gapfill;
pub mod ident;
pub mod join;
pub mod matcher;
pub mod schema;
pub mod split;
pub mod types;

pub use join::{join_all, JoinRun, JoinSettings};
pub use types::{GapFillTarget, JoinedRecord, MissRecord, PlayerId, Target};
