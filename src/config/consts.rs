// src/config/consts.rs

// Sites
pub const SPOTRAC_MLB: &str = "https://www.spotrac.com/mlb";
pub const BBR_PLAYERS: &str = "https://www.baseball-reference.com/players";
pub const USER_AGENT: &str = concat!("salary_join/", env!("CARGO_PKG_VERSION"));

// Waits (seconds) for a page and its table regions
pub const PAYROLL_WAIT_SECS: u64 = 60;
pub const JOIN_WAIT_SECS: u64 = 60;
pub const GAPFILL_WAIT_SECS: u64 = 10;

// Politeness pause after every request
pub const REQUEST_PAUSE_MS: u64 = 3_000;

// Matching
pub const LEAGUES: [&str; 3] = ["AL", "NL", "MLB"];
pub const SUFFIX_BOUND: usize = 11;
pub const PROGRESS_EVERY: usize = 100;

// Stat-table columns
pub const COL_YEAR: &str = "Year";
pub const COL_AGE: &str = "Age";
pub const COL_LEAGUE: &str = "Lg";
pub const TEAM_COLUMNS: [&str; 2] = ["Tm", "Team"];
pub const KEY_COLUMN: &str = "key";

// Salary table: the site's first ten columns under generic names, then our tags.
// Spotrac's own header text changes between teams and years.
pub const SITE_SALARY_COLUMNS: usize = 10;
pub const SALARY_COLUMNS: [&str; 13] = [
    "name", "age", "position", "status", "base_salary", "signing_bonus", "incentives",
    "total_salary", "adjusted_salary", "payroll_perc", "type", "year", "team",
];
pub const COL_NAME: &str = "name";
pub const COL_SALARY_AGE: &str = "age";
pub const COL_SALARY_YEAR: &str = "year";
pub const COL_POSITION: &str = "position";

pub const TYPE_ACTIVE: &str = "A";
pub const TYPE_DISABLED: &str = "D";
pub const DISABLED_HEADING: &str = "Disabled";

// Seasons scraped by default
pub const FIRST_YEAR: u16 = 2012;
pub const LAST_YEAR: u16 = 2018;

// Default file names
pub const DEFAULT_SALARIES_FILE: &str = "salaries.csv";
pub const DEFAULT_BATTERS_FILE: &str = "salaries_batters.csv";
pub const DEFAULT_PITCHERS_FILE: &str = "salaries_pitchers.csv";
pub const DEFAULT_JOINED_FILE: &str = "joined_salaries_bbr.csv";
pub const FULL_SUFFIX: &str = "_full";
