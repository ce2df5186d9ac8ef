// src/engine/schema.rs
//
// Output columns for a join run: the union of every record's columns in the
// order they were first seen. Rows are laid out against the final schema only
// when the table is written, so every row has the same width.

use indexmap::IndexSet;

use crate::engine::types::JoinedRecord;
use crate::store::DataSet;

#[derive(Clone, Debug, Default)]
pub struct OutputSchema {
    columns: IndexSet<String>,
}

impl OutputSchema {
    pub fn new<I, S>(seed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { columns: seed.into_iter().map(Into::into).collect() }
    }

    pub fn observe(&mut self, record: &JoinedRecord) {
        for c in record.columns() {
            if !self.columns.contains(c) {
                self.columns.insert(c.to_string());
            }
        }
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(String::as_str)
    }

    pub fn coerce(&self, record: &JoinedRecord) -> Vec<String> {
        self.columns
            .iter()
            .map(|c| record.get(c).unwrap_or_default().to_string())
            .collect()
    }

    pub fn to_dataset(&self, records: &[JoinedRecord]) -> DataSet {
        let headers = self.columns.iter().cloned().collect();
        let rows = records.iter().map(|r| self.coerce(r)).collect();
        DataSet::from_parts(headers, rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(pairs: &[(&str, &str)]) -> JoinedRecord {
        let mut r = JoinedRecord::new();
        r.extend(pairs.iter().copied());
        r
    }

    #[test]
    fn union_in_first_seen_order() {
        let mut schema = OutputSchema::new(["name", "year"]);
        let a = rec(&[("name", "A"), ("year", "2014"), ("HR", "3")]);
        let b = rec(&[("name", "B"), ("year", "2015"), ("SO", "9"), ("HR", "1")]);
        schema.observe(&a);
        schema.observe(&b);
        assert_eq!(schema.columns().collect::<Vec<_>>(), ["name", "year", "HR", "SO"]);

        let ds = schema.to_dataset(&[a, b]);
        assert_eq!(ds.rows[0], ["A", "2014", "3", ""]);
        assert_eq!(ds.rows[1], ["B", "2015", "1", "9"]);
    }

    #[test]
    fn seed_only_schema_is_salary_header() {
        let schema = OutputSchema::new(vec![s!("name"), s!("age")]);
        assert_eq!(schema.columns().count(), 2);
        assert!(schema.to_dataset(&[]).rows.is_empty());
    }
}
