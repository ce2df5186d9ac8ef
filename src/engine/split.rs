// src/engine/split.rs
use crate::config::consts::{COL_POSITION, KEY_COLUMN};
use crate::core::html::TableError;
use crate::store::DataSet;

/// Any position code containing 'P' counts as a pitcher ("SP", "RP", "DH/P").
pub fn is_pitcher(position: &str) -> bool {
    position.contains('P')
}

/// (batters, pitchers). Each gets a leading `key` column numbering its rows
/// from 0; gap-fill targets refer to salary rows by that key. A `key` column
/// already in the input is replaced.
pub fn split_by_position(salaries: &DataSet) -> Result<(DataSet, DataSet), TableError> {
    let pos = salaries
        .column(COL_POSITION)
        .ok_or_else(|| TableError::MissingColumn(COL_POSITION.to_string()))?;
    let old_key = salaries.column(KEY_COLUMN);

    let mut headers = vec![s!(KEY_COLUMN)];
    headers.extend(salaries.headers.iter().filter(|h| *h != KEY_COLUMN).cloned());

    let mut batters = DataSet::new(headers.clone());
    let mut pitchers = DataSet::new(headers);
    for row in &salaries.rows {
        let out = if is_pitcher(&row[pos]) { &mut pitchers } else { &mut batters };
        let mut keyed = vec![out.len().to_string()];
        keyed.extend(
            row.iter()
                .enumerate()
                .filter(|(i, _)| Some(*i) != old_key)
                .map(|(_, c)| c.clone()),
        );
        out.rows.push(keyed);
    }
    Ok((batters, pitchers))
}
