// src/file.rs

use std::{
    error::Error,
    fs::{self, File, OpenOptions},
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::consts::FULL_SUFFIX;
use crate::csv::{read_dataset, write_dataset, write_row, writer, Delim};
use crate::store::DataSet;

/// Read a delimited table; delimiter follows the extension, else `fallback`.
pub fn read_table(path: &Path, fallback: Delim) -> Result<DataSet, Box<dyn Error>> {
    let file = File::open(path)
        .map_err(|e| format!("Cannot read {}: {e}", path.display()))?;
    let ds = read_dataset(BufReader::new(file), Delim::for_path(path, fallback))?;
    Ok(ds)
}

/// Create/truncate `path` and write the whole table.
pub fn write_table(path: &Path, ds: &DataSet, delim: Delim) -> Result<(), Box<dyn Error>> {
    let file = create_output(path)?;
    write_into(file, ds, delim)
}

/// Write into an already-opened destination (see [`create_output`]).
pub fn write_into(file: File, ds: &DataSet, delim: Delim) -> Result<(), Box<dyn Error>> {
    let mut out = BufWriter::new(file);
    write_dataset(&mut out, ds, delim)?;
    out.flush()?;
    Ok(())
}

/// Ensure parent dir exists; create/truncate file; write header row.
pub fn write_rows_start(path: &Path, headers: &[String], delim: Delim) -> Result<(), Box<dyn Error>> {
    let file = create_output(path)?;
    let mut wtr = writer(BufWriter::new(file), delim);
    write_row(&mut wtr, headers)?;
    wtr.flush()?;
    Ok(())
}

/// Append rows to an existing CSV/TSV file (must be created already).
pub fn append_rows(path: &Path, rows: &[Vec<String>], delim: Delim) -> Result<(), Box<dyn Error>> {
    let file = OpenOptions::new().append(true).open(path)?;
    let mut wtr = writer(BufWriter::new(file), delim);
    for row in rows {
        write_row(&mut wtr, row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Open an output file up front so a bad destination fails before any work.
pub fn create_output(path: &Path) -> Result<File, Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    File::create(path).map_err(|e| format!("Cannot write {}: {e}", path.display()).into())
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// "out/batters_bbr.csv" → "out/batters_bbr_full.csv"
pub fn full_path(path: &Path) -> PathBuf {
    let stem = path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
    let name = match path.extension() {
        Some(ext) => join!(&stem, FULL_SUFFIX, ".", &ext.to_string_lossy()),
        None => join!(&stem, FULL_SUFFIX),
    };
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tmp_dir(name: &str) -> PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("salary_join_file_{}", name));
        let _ = fs::remove_dir_all(&p);
        fs::create_dir_all(&p).unwrap();
        p
    }

    #[test]
    fn full_path_keeps_dir_and_ext() {
        assert_eq!(full_path(Path::new("out/batters_bbr.csv")), PathBuf::from("out/batters_bbr_full.csv"));
        assert_eq!(full_path(Path::new("stats")), PathBuf::from("stats_full"));
    }

    #[test]
    fn start_then_append() {
        let dir = tmp_dir("append");
        let p = dir.join("nested").join("s.csv");
        write_rows_start(&p, &[s!("name"), s!("age")], Delim::Csv).unwrap();
        append_rows(&p, &[vec![s!("Trout Mike"), s!("27")]], Delim::Csv).unwrap();
        append_rows(&p, &[vec![s!("Ohtani Shohei"), s!("24")]], Delim::Csv).unwrap();
        let back = read_table(&p, Delim::Csv).unwrap();
        assert_eq!(back.headers, vec!["name", "age"]);
        assert_eq!(back.rows.len(), 2);
    }

    #[test]
    fn output_under_a_file_is_rejected() {
        let dir = tmp_dir("reject");
        let blocker = dir.join("blocker");
        fs::write(&blocker, "x").unwrap();
        assert!(create_output(&blocker.join("out.csv")).is_err());
    }
}
