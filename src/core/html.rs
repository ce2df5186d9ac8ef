// src/core/html.rs
//
// Table extraction on top of `scraper`. Pages are parsed once per call;
// nothing here touches the network.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

use crate::core::sanitize::normalize_ws;
use crate::store::DataSet;

static TABLE: LazyLock<Selector> = LazyLock::new(|| sel("table"));
static THEAD_TR: LazyLock<Selector> = LazyLock::new(|| sel("thead tr"));
static TBODY_TR: LazyLock<Selector> = LazyLock::new(|| sel("tbody tr"));
static TR: LazyLock<Selector> = LazyLock::new(|| sel("tr"));
static CELL: LazyLock<Selector> = LazyLock::new(|| sel("th, td"));
static HEADING_OR_TABLE: LazyLock<Selector> = LazyLock::new(|| sel("h2, table"));

fn sel(css: &str) -> Selector {
    Selector::parse(css).expect("static selector")
}

/// Row classes that are layout, not data.
const SKIP_ROW_CLASSES: [&str; 3] = ["thead", "spacer", "over_header"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("no <table> in markup")]
    NoTable,
    #[error("table has no data rows")]
    Empty,
    #[error("table is missing column {0:?}")]
    MissingColumn(String),
}

/// Outer HTML of `<table id="region_id">`.
///
/// Baseball-Reference ships most secondary tables inside HTML comments and
/// un-comments them client-side; when the plain parse misses the region the
/// document is parsed again with comment markers removed.
pub fn extract_region(doc: &str, region_id: &str) -> Option<String> {
    let selector = Selector::parse(&format!("table#{region_id}")).ok()?;

    let html = Html::parse_document(doc);
    if let Some(el) = html.select(&selector).next() {
        return Some(el.html());
    }

    if !doc.contains("<!--") {
        return None;
    }
    let uncommented = doc.replace("<!--", "").replace("-->", "");
    let html = Html::parse_document(&uncommented);
    html.select(&selector).next().map(|el| el.html())
}

/// Every `<table>` in document order, paired with the text of the nearest
/// preceding `<h2>` (consumed by the first table after it).
pub fn tables_with_headings(doc: &str) -> Vec<(Option<String>, String)> {
    let html = Html::parse_document(doc);
    let mut out = Vec::new();
    let mut heading: Option<String> = None;
    for el in html.select(&HEADING_OR_TABLE) {
        if el.value().name() == "h2" {
            heading = Some(text_of(el));
        } else {
            out.push((heading.take(), el.html()));
        }
    }
    out
}

/// Parse one table's markup into headers + rows.
///
/// - header = last `thead` row, or the first row when there is no `thead`
/// - columns with a blank header are dropped
/// - repeated names get `.1`, `.2`, … suffixes
/// - layout rows (`thead`, `spacer`) and cell-less rows are skipped
/// - rows are padded/truncated to the header width
pub fn parse_table(markup: &str) -> Result<DataSet, TableError> {
    let frag = Html::parse_fragment(markup);
    let table = frag.select(&TABLE).next().ok_or(TableError::NoTable)?;

    let head_rows: Vec<ElementRef> = table.select(&THEAD_TR).collect();
    let (header_row, body_rows): (ElementRef, Vec<ElementRef>) = match head_rows.last() {
        Some(last) => (*last, table.select(&TBODY_TR).collect()),
        None => {
            let mut all = table.select(&TR);
            let first = all.next().ok_or(TableError::Empty)?;
            (first, all.collect())
        }
    };

    let raw_headers: Vec<String> = header_row.select(&CELL).map(text_of).collect();
    let keep: Vec<usize> = raw_headers
        .iter()
        .enumerate()
        .filter(|(_, h)| !h.is_empty())
        .map(|(i, _)| i)
        .collect();
    let headers = dedup_headers(keep.iter().map(|&i| raw_headers[i].clone()));

    let mut ds = DataSet::new(headers);
    for tr in body_rows {
        if is_layout_row(tr) { continue; }
        let cells: Vec<String> = tr.select(&CELL).map(text_of).collect();
        if cells.is_empty() { continue; }
        let row = keep
            .iter()
            .map(|&i| cells.get(i).cloned().unwrap_or_default())
            .collect();
        ds.push_row(row);
    }

    if ds.is_empty() {
        return Err(TableError::Empty);
    }
    Ok(ds)
}

fn is_layout_row(tr: ElementRef) -> bool {
    tr.value()
        .attr("class")
        .map(|c| c.split_whitespace().any(|c| SKIP_ROW_CLASSES.contains(&c)))
        .unwrap_or(false)
}

fn text_of(el: ElementRef) -> String {
    normalize_ws(&el.text().collect::<String>())
}

fn dedup_headers<I: Iterator<Item = String>>(names: I) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for name in names {
        let mut candidate = name.clone();
        let mut n = 1;
        while out.contains(&candidate) {
            candidate = format!("{name}.{n}");
            n += 1;
        }
        out.push(candidate);
    }
    out
}
