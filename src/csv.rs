// src/csv.rs
use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, Writer, WriterBuilder};

use crate::store::DataSet;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Delim {
    #[default]
    Csv,
    Tsv,
}

impl Delim {
    pub fn byte(self) -> u8 {
        match self { Delim::Csv => b',', Delim::Tsv => b'\t' }
    }

    /// `.tsv` / `.tab` files read as TSV, `.csv` as CSV, anything else as `fallback`.
    pub fn for_path(path: &Path, fallback: Delim) -> Delim {
        match path.extension().and_then(|e| e.to_str()).map(|e| e.to_ascii_lowercase()) {
            Some(e) if e == "tsv" || e == "tab" => Delim::Tsv,
            Some(e) if e == "csv" => Delim::Csv,
            _ => fallback,
        }
    }
}

/* ---------------- Reading ---------------- */

/// Header row + data rows. Ragged rows are padded/truncated to the header.
pub fn read_dataset<R: Read>(rdr: R, delim: Delim) -> Result<DataSet, csv::Error> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delim.byte())
        .flexible(true)
        .from_reader(rdr);

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let mut ds = DataSet::new(headers);
    for record in reader.records() {
        let record = record?;
        ds.push_row(record.iter().map(str::to_string).collect());
    }
    Ok(ds)
}

/* ---------------- Writing ---------------- */

pub fn writer<W: Write>(w: W, delim: Delim) -> Writer<W> {
    WriterBuilder::new()
        .delimiter(delim.byte())
        .flexible(true)
        .from_writer(w)
}

pub fn write_row<W: Write>(wtr: &mut Writer<W>, row: &[String]) -> Result<(), csv::Error> {
    wtr.write_record(row)
}

pub fn write_dataset<W: Write>(w: W, ds: &DataSet, delim: Delim) -> Result<(), csv::Error> {
    let mut wtr = writer(w, delim);
    write_row(&mut wtr, &ds.headers)?;
    for row in &ds.rows {
        write_row(&mut wtr, row)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_string(ds: &DataSet, delim: Delim) -> String {
        let mut buf: Vec<u8> = Vec::new();
        write_dataset(&mut buf, ds, delim).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn roundtrip_with_quotes_and_ragged_rows() {
        let text = "name,age,position\n\"Trout, Mike\",27,CF\nOhtani Shohei,24\n";
        let ds = read_dataset(text.as_bytes(), Delim::Csv).unwrap();
        assert_eq!(ds.headers, vec!["name", "age", "position"]);
        assert_eq!(ds.rows[0], vec!["Trout, Mike", "27", "CF"]);
        assert_eq!(ds.rows[1], vec!["Ohtani Shohei", "24", ""]);

        let out = to_string(&ds, Delim::Csv);
        assert!(out.starts_with("name,age,position\n"));
        assert!(out.contains("\"Trout, Mike\",27,CF\n"));
    }

    #[test]
    fn tsv_delimiter() {
        let ds = read_dataset("a\tb\n1\t2\n".as_bytes(), Delim::Tsv).unwrap();
        assert_eq!(ds.rows[0], vec!["1", "2"]);
        assert_eq!(to_string(&ds, Delim::Tsv), "a\tb\n1\t2\n");
    }

    #[test]
    fn delim_from_extension() {
        assert_eq!(Delim::for_path(Path::new("x.TSV"), Delim::Csv), Delim::Tsv);
        assert_eq!(Delim::for_path(Path::new("x.csv"), Delim::Tsv), Delim::Csv);
        assert_eq!(Delim::for_path(Path::new("x.txt"), Delim::Tsv), Delim::Tsv);
    }
}
