// src/config/mod.rs

pub mod consts;
pub mod missing;
pub mod options;
pub mod teams;

pub use options::StatKind;
