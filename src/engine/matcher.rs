// src/engine/matcher.rs
//! Suffix search over candidate player pages.
//!
//! A salary row only knows a base identifier (`troutmi`). The real page is
//! `troutmi01`, `troutmi02`, ... and the first one whose **standard** table
//! has a row for the target year is taken as the player. The search is an
//! explicit state machine:
//!
//! ```text
//! Trying(1) --fail--> Trying(2) --fail--> ... Trying(bound) --fail--> Exhausted
//!     \                   \                         \
//!      +------ ok --------+-----------ok------------+----> Matched
//! ```
//!
//! A matched page is then "fanned out" into zero or more joined records, one
//! per value-table row whose team also has a standard row.

use std::time::Duration;

use indexmap::IndexMap;

use crate::config::consts::{LEAGUES, SUFFIX_BOUND};
use crate::config::StatKind;
use crate::core::html;
use crate::core::net::PageSource;
use crate::core::sanitize::trunc_decimal;
use crate::engine::types::{JoinedRecord, PlayerId, StatsTable, Target, TrialError};
use crate::specs::player;

/// A page whose standard table has the target year.
pub struct MatchedPage {
    pub id: PlayerId,
    pub standard: StatsTable,
    pub value: StatsTable,
}

pub enum SearchState {
    Trying(usize),
    Matched(MatchedPage),
    Exhausted,
}

pub enum SearchOutcome {
    Matched { id: PlayerId, records: Vec<JoinedRecord> },
    Exhausted,
}

pub struct SuffixSearch<'a> {
    source: &'a dyn PageSource,
    kind: StatKind,
    wait: Duration,
    bound: usize,
}

impl<'a> SuffixSearch<'a> {
    pub fn new(source: &'a dyn PageSource, kind: StatKind, wait: Duration) -> Self {
        Self { source, kind, wait, bound: SUFFIX_BOUND }
    }

    pub fn with_bound(mut self, bound: usize) -> Self {
        self.bound = bound;
        self
    }

    /// Fetch and validate one candidate page.
    pub fn try_candidate(&self, id: &PlayerId, target: &Target) -> Result<MatchedPage, TrialError> {
        let regions = player::regions(self.kind);
        let markup = self.source.fetch_regions(&id.url(), &regions, self.wait)?;
        let (std_markup, val_markup) = match markup.as_slice() {
            [s, v] => (s, v),
            _ => return Err(TrialError::Malformed(html::TableError::NoTable)),
        };

        let standard = StatsTable::new(html::parse_table(std_markup)?)?;
        let value = StatsTable::new(html::parse_table(val_markup)?)?;

        if !standard.has_year(&target.year) {
            return Err(TrialError::NoYearMatch(target.year.clone()));
        }
        Ok(MatchedPage { id: id.clone(), standard, value })
    }

    /// Advance the machine by one trial. `Matched` and `Exhausted` are terminal.
    pub fn step(&self, state: SearchState, base: &str, target: &Target) -> SearchState {
        let SearchState::Trying(suffix) = state else { return state };
        let id = PlayerId::new(base, suffix);
        match self.try_candidate(&id, target) {
            Ok(page) => SearchState::Matched(page),
            Err(e) => {
                log::debug!("{id}: {e}");
                if suffix >= self.bound {
                    SearchState::Exhausted
                } else {
                    SearchState::Trying(suffix + 1)
                }
            }
        }
    }

    pub fn run(&self, base: &str, target: &Target, salary: &JoinedRecord) -> SearchOutcome {
        if self.bound == 0 {
            return SearchOutcome::Exhausted;
        }
        let mut state = SearchState::Trying(1);
        loop {
            state = match self.step(state, base, target) {
                SearchState::Matched(page) => {
                    let records = fan_out(salary, &page.standard, &page.value, target);
                    return SearchOutcome::Matched { id: page.id, records };
                }
                SearchState::Exhausted => return SearchOutcome::Exhausted,
                trying => trying,
            };
        }
    }
}

fn in_league(t: &StatsTable, row: &[String]) -> bool {
    LEAGUES.contains(&row[t.league].as_str())
}

/// Join a matched page against one salary row.
///
/// Standard rows compare Age exactly; value rows compare Age after
/// truncating at '.'. When two standard rows share a team the later one is
/// kept. Value rows with no standard row for their team are dropped.
pub fn fan_out(
    salary: &JoinedRecord,
    standard: &StatsTable,
    value: &StatsTable,
    target: &Target,
) -> Vec<JoinedRecord> {
    let mut by_team: IndexMap<&str, JoinedRecord> = IndexMap::new();
    for row in &standard.data.rows {
        if row[standard.year] != target.year
            || row[standard.age] != target.age
            || !in_league(standard, row)
        {
            continue;
        }
        let mut rec = salary.clone();
        rec.extend(standard.data.pairs(row));
        by_team.insert(row[standard.team].as_str(), rec);
    }

    let mut out = Vec::new();
    for row in &value.data.rows {
        if row[value.year] != target.year
            || trunc_decimal(&row[value.age]) != target.age
            || !in_league(value, row)
        {
            continue;
        }
        let Some(base) = by_team.get(row[value.team].as_str()) else { continue };
        let mut rec = base.clone();
        rec.extend(value.data.pairs(row));
        out.push(rec);
    }
    out
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;
    use crate::core::net::FetchError;

    const STD_HEAD: &str = "<tr><th>Year</th><th>Age</th><th>Tm</th><th>Lg</th><th>G</th><th>HR</th></tr>";
    const VAL_HEAD: &str = "<tr><th>Year</th><th>Age</th><th>Tm</th><th>Lg</th><th>G</th><th>WAR</th></tr>";

    fn tr(cells: &[&str]) -> String {
        let tds: String = cells.iter().map(|c| format!("<td>{c}</td>")).collect();
        format!("<tr>{tds}</tr>")
    }

    fn page(std_rows: &[&[&str]], val_rows: &[&[&str]]) -> String {
        let body = |rows: &[&[&str]]| rows.iter().map(|r| tr(r)).collect::<String>();
        format!(
            r#"<table id="batting_standard"><thead>{STD_HEAD}</thead><tbody>{}</tbody></table>
               <table id="batting_value"><thead>{VAL_HEAD}</thead><tbody>{}</tbody></table>"#,
            body(std_rows),
            body(val_rows)
        )
    }

    /// Pages keyed by player id; records every id asked for.
    #[derive(Default)]
    struct Pages {
        by_id: HashMap<String, String>,
        asked: RefCell<Vec<String>>,
    }

    impl Pages {
        fn with(mut self, id: &str, html: String) -> Self {
            self.by_id.insert(id.to_string(), html);
            self
        }
    }

    impl PageSource for Pages {
        fn fetch_page(&self, url: &str, _wait: Duration) -> Result<String, FetchError> {
            let id = url.rsplit('/').next().unwrap_or("").trim_end_matches(".shtml").to_string();
            self.asked.borrow_mut().push(id.clone());
            self.by_id
                .get(&id)
                .cloned()
                .ok_or(FetchError::Status { url: url.to_string(), status: 404 })
        }
    }

    fn salary() -> JoinedRecord {
        let mut r = JoinedRecord::new();
        r.extend([("name", "Mike Trout"), ("age", "22"), ("year", "2014"), ("G", "salary-G")]);
        r
    }

    fn target() -> Target {
        Target { year: s!("2014"), age: s!("22") }
    }

    fn search(src: &Pages) -> SuffixSearch<'_> {
        SuffixSearch::new(src, StatKind::Batting, Duration::from_secs(1))
    }

    #[test]
    fn first_suffix_with_year_wins() {
        let src = Pages::default()
            .with("troutmi01", page(&[&["2010", "22", "LAA", "AL", "1", "0"]], &[&["2010", "22", "LAA", "AL", "1", "0.1"]]))
            .with("troutmi02", page(&[&["2014", "22", "LAA", "AL", "157", "36"]], &[&["2014", "22", "LAA", "AL", "157", "7.9"]]));

        let SearchOutcome::Matched { id, records } = search(&src).run("troutmi", &target(), &salary()) else {
            panic!("expected a match");
        };
        assert_eq!(id.to_string(), "troutmi02");
        assert_eq!(*src.asked.borrow(), ["troutmi01", "troutmi02"]);
        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.get("HR"), Some("36"));
        assert_eq!(r.get("WAR"), Some("7.9"));
        // salary column wins over same-named stat columns
        assert_eq!(r.get("G"), Some("salary-G"));
        assert_eq!(r.columns().next(), Some("name"));
    }

    #[test]
    fn only_teams_present_in_both_tables() {
        let src = Pages::default().with(
            "troutmi01",
            page(
                &[&["2014", "22", "A", "AL", "50", "10"], &["2014", "22", "B", "NL", "60", "12"]],
                &[&["2014", "22", "A", "AL", "50", "1.0"], &["2014", "22", "C", "NL", "60", "2.0"]],
            ),
        );
        let SearchOutcome::Matched { records, .. } = search(&src).run("troutmi", &target(), &salary()) else {
            panic!("expected a match");
        };
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("Tm"), Some("A"));
    }

    #[test]
    fn value_age_is_truncated_and_league_filtered() {
        let src = Pages::default().with(
            "troutmi01",
            page(
                &[&["2014", "22", "LAA", "AL", "157", "36"], &["2014", "22", "TOT", "", "157", "36"]],
                &[&["2014", "22.0", "LAA", "AL", "157", "7.9"], &["2014", "22", "TOT", "", "157", "7.9"]],
            ),
        );
        let SearchOutcome::Matched { records, .. } = search(&src).run("troutmi", &target(), &salary()) else {
            panic!("expected a match");
        };
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("Tm"), Some("LAA"));
    }

    #[test]
    fn standard_age_compares_exactly() {
        let src = Pages::default().with(
            "troutmi01",
            page(&[&["2014", "22.0", "LAA", "AL", "157", "36"]], &[&["2014", "22", "LAA", "AL", "157", "7.9"]]),
        );
        let SearchOutcome::Matched { records, .. } = search(&src).run("troutmi", &target(), &salary()) else {
            panic!("year matched, so the trial succeeds");
        };
        assert!(records.is_empty());
    }

    #[test]
    fn later_standard_row_for_team_overwrites() {
        let src = Pages::default().with(
            "troutmi01",
            page(
                &[&["2014", "22", "LAA", "AL", "1", "first"], &["2014", "22", "LAA", "AL", "2", "second"]],
                &[&["2014", "22", "LAA", "AL", "3", "7.9"]],
            ),
        );
        let SearchOutcome::Matched { records, .. } = search(&src).run("troutmi", &target(), &salary()) else {
            panic!("expected a match");
        };
        assert_eq!(records[0].get("HR"), Some("second"));
    }

    #[test]
    fn exhausted_after_bound_even_if_next_would_match() {
        let src = Pages::default().with(
            "troutmi12",
            page(&[&["2014", "22", "LAA", "AL", "1", "1"]], &[&["2014", "22", "LAA", "AL", "1", "1"]]),
        );
        let outcome = search(&src).run("troutmi", &target(), &salary());
        assert!(matches!(outcome, SearchOutcome::Exhausted));
        let asked = src.asked.borrow();
        assert_eq!(asked.len(), SUFFIX_BOUND);
        assert_eq!(asked.last().map(String::as_str), Some("troutmi11"));
    }

    #[test]
    fn malformed_tables_fail_the_trial() {
        let no_league = r#"<table id="batting_standard"><tr><th>Year</th><th>Age</th><th>Tm</th></tr><tr><td>2014</td><td>22</td><td>LAA</td></tr></table>
                           <table id="batting_value"><tr><th>Year</th></tr><tr><td>2014</td></tr></table>"#;
        let src = Pages::default()
            .with("troutmi01", s!(no_league))
            .with("troutmi02", page(&[], &[]))
            .with("troutmi03", page(&[&["2014", "22", "LAA", "AL", "1", "1"]], &[&["2014", "22", "LAA", "AL", "1", "1"]]));
        let s = search(&src);
        assert!(matches!(s.try_candidate(&PlayerId::new("troutmi", 1), &target()), Err(TrialError::Malformed(_))));
        assert!(matches!(s.try_candidate(&PlayerId::new("troutmi", 2), &target()), Err(TrialError::Malformed(_))));
        assert!(matches!(s.run("troutmi", &target(), &salary()), SearchOutcome::Matched { ref id, .. } if id.suffix == 3));
    }

    #[test]
    fn step_reports_year_miss_and_stops_at_terminal_states() {
        let src = Pages::default()
            .with("troutmi01", page(&[&["2013", "21", "LAA", "AL", "1", "1"]], &[&["2013", "21", "LAA", "AL", "1", "1"]]));
        let s = search(&src).with_bound(1);
        assert!(matches!(
            s.try_candidate(&PlayerId::new("troutmi", 1), &target()),
            Err(TrialError::NoYearMatch(y)) if y == "2014"
        ));
        let state = s.step(SearchState::Trying(1), "troutmi", &target());
        assert!(matches!(state, SearchState::Exhausted));
        let state = s.step(state, "troutmi", &target());
        assert!(matches!(state, SearchState::Exhausted));
        assert_eq!(src.asked.borrow().len(), 1);
    }
}
