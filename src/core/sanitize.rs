// src/core/sanitize.rs

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Collapse repeated name tokens, keeping the first occurrence of each.
/// Spotrac prints the full name twice in its name cell:
/// "Trout Mike Trout Mike" → "Trout Mike".
pub fn dedup_name_tokens(name: &str) -> String {
    let mut kept: Vec<&str> = Vec::new();
    for tok in name.split_whitespace() {
        if !kept.contains(&tok) {
            kept.push(tok);
        }
    }
    kept.join(" ")
}

/// Spotrac lists "Last First"; move the leading surname token to the end.
/// "Mauer Joe" → "Joe Mauer". Single tokens are returned unchanged.
pub fn surname_last(name: &str) -> String {
    let mut tokens = name.split_whitespace();
    let Some(surname) = tokens.next() else { return s!() };
    let mut rest: Vec<&str> = tokens.collect();
    rest.push(surname);
    rest.join(" ")
}

/// Drop a trailing parenthesised disabled-list tag, e.g. "Smith John (60-day)".
pub fn strip_injury_tag(name: &str) -> String {
    let t = name.trim();
    if t.ends_with(')') {
        if let Some(open) = t.rfind('(') {
            if open > 0 {
                return t[..open].trim_end().to_string();
            }
        }
    }
    t.to_string()
}

/// "2014.0" → "2014", " 27 " → "27". Anything after the first '.' is dropped.
pub fn trunc_decimal(s: &str) -> &str {
    let t = s.trim();
    t.split('.').next().unwrap_or(t)
}

/// Name cleanup ahead of identifier derivation: no periods, no apostrophes,
/// lower-case, split on whitespace.
pub fn name_parts(name: &str) -> Vec<String> {
    name.replace(['.', '\''], "")
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// "$1,250,000" → 1250000.0. Blank and dash cells are `None`.
pub fn parse_currency(cell: &str) -> Option<f64> {
    let digits: String = cell
        .trim()
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    if digits.is_empty() || digits == "-" {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedup_collapses_doubled_names() {
        assert_eq!(dedup_name_tokens("Mike Trout Mike Trout"), "Mike Trout");
        assert_eq!(dedup_name_tokens("  Trout   Mike  "), "Trout Mike");
    }

    #[test]
    fn surname_moves_to_the_end() {
        assert_eq!(surname_last("Mauer Joe"), "Joe Mauer");
        assert_eq!(surname_last("Martinez J.D."), "J.D. Martinez");
        assert_eq!(surname_last("Ichiro"), "Ichiro");
        assert_eq!(surname_last("  "), "");
    }

    #[test]
    fn dedup_is_idempotent() {
        for name in ["Mike Trout Mike Trout", "De Los Santos Abel De Los Santos Abel", "", "A B A C B"] {
            let once = dedup_name_tokens(name);
            assert_eq!(dedup_name_tokens(&once), once);
        }
    }

    #[test]
    fn injury_tag_variants() {
        assert_eq!(strip_injury_tag("Smith John (60-day)"), "Smith John");
        assert_eq!(strip_injury_tag("Smith John (7-day)"), "Smith John");
        assert_eq!(strip_injury_tag("Smith John"), "Smith John");
        assert_eq!(strip_injury_tag("(10-day)"), "(10-day)");
    }

    #[test]
    fn trunc_decimal_drops_fraction() {
        assert_eq!(trunc_decimal("2014.0"), "2014");
        assert_eq!(trunc_decimal(" 27 "), "27");
        assert_eq!(trunc_decimal(""), "");
    }

    #[test]
    fn name_parts_cleanup() {
        assert_eq!(name_parts("J.D. Martinez"), vec!["jd", "martinez"]);
        assert_eq!(name_parts("Travis d'Arnaud"), vec!["travis", "darnaud"]);
    }

    #[test]
    fn currency_cells() {
        assert_eq!(parse_currency("$1,250,000"), Some(1_250_000.0));
        assert_eq!(parse_currency("0.45%"), Some(0.45));
        assert_eq!(parse_currency("-"), None);
        assert_eq!(parse_currency(""), None);
    }
}
