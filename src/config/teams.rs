// src/config/teams.rs

/// Team code → Spotrac URL slug.
pub const TEAMS: [(&str, &str); 30] = [
    ("LAA", "los-angeles-angels"),
    ("CHW", "chicago-white-sox"),
    ("CLE", "cleveland-indians"),
    ("KC", "kansas-city-royals"),
    ("MIL", "milwaukee-brewers"),
    ("OAK", "oakland-athletics"),
    ("SEA", "seattle-mariners"),
    ("TEX", "texas-rangers"),
    ("CHC", "chicago-cubs"),
    ("CIN", "cincinnati-reds"),
    ("LAD", "los-angeles-dodgers"),
    ("SD", "san-diego-padres"),
    ("SF", "san-francisco-giants"),
    ("COL", "colorado-rockies"),
    ("ARI", "arizona-diamondbacks"),
    ("BAL", "baltimore-orioles"),
    ("BOS", "boston-red-sox"),
    ("DET", "detroit-tigers"),
    ("MIN", "minnesota-twins"),
    ("NYY", "new-york-yankees"),
    ("TOR", "toronto-blue-jays"),
    ("ATL", "atlanta-braves"),
    ("HOU", "houston-astros"),
    ("WSH", "washington-nationals"),
    ("NYM", "new-york-mets"),
    ("PHI", "philadelphia-phillies"),
    ("PIT", "pittsburgh-pirates"),
    ("STL", "st.-louis-cardinals"),
    ("MIA", "miami-marlins"),
    ("TB", "tampa-bay-rays"),
];

pub fn slug(code: &str) -> Option<&'static str> {
    TEAMS
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code))
        .map(|(_, s)| *s)
}

/// Resolve user-supplied codes; empty selection means every team.
pub fn select(codes: &[String]) -> Result<Vec<(&'static str, &'static str)>, String> {
    if codes.is_empty() {
        return Ok(TEAMS.to_vec());
    }
    codes
        .iter()
        .map(|c| {
            TEAMS
                .iter()
                .find(|(code, _)| code.eq_ignore_ascii_case(c))
                .copied()
                .ok_or_else(|| format!("Unknown team code: {c}"))
        })
        .collect()
}
