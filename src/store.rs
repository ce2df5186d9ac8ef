// src/store.rs
//
// In-memory table shared by every stage: scraped pages, salary files,
// joined output. Headers are always present; rows are positional cells
// aligned to them.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn new(headers: Vec<String>) -> Self {
        Self { headers, rows: Vec::new() }
    }

    pub fn from_parts(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Index of the first column with this exact name.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Index of the first column matching any of `names`, tried in order.
    pub fn column_any(&self, names: &[&str]) -> Option<usize> {
        names.iter().find_map(|n| self.column(n))
    }

    /// Push a row, padding or truncating it to the header width.
    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.headers.len(), s!());
        self.rows.push(row);
    }

    /// (header, cell) pairs for one row.
    pub fn pairs<'a>(&'a self, row: &'a [String]) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.headers
            .iter()
            .zip(row.iter())
            .map(|(h, c)| (h.as_str(), c.as_str()))
    }

    /// Append rows from `other`, widening the header to the union of both.
    /// Columns keep first-seen order; cells missing on either side are blank.
    pub fn append(&mut self, other: &DataSet) {
        let mut map = Vec::with_capacity(other.headers.len());
        for h in &other.headers {
            let ix = match self.column(h) {
                Some(ix) => ix,
                None => {
                    self.headers.push(h.clone());
                    self.headers.len() - 1
                }
            };
            map.push(ix);
        }
        let width = self.headers.len();
        for row in &mut self.rows {
            row.resize(width, s!());
        }
        for src in &other.rows {
            let mut row = vec![s!(); width];
            for (cell, &ix) in src.iter().zip(map.iter()) {
                row[ix] = cell.clone();
            }
            self.rows.push(row);
        }
    }
}
