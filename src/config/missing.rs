// src/config/missing.rs
//
// Players the suffix search could not reach on a previous full run
// (nickname pages, name-order quirks, suffixes past the bound).
// Each entry: Baseball-Reference page id, row key in the salary file.

use super::StatKind;

pub fn targets(kind: StatKind) -> &'static [(&'static str, u32)] {
    match kind {
        StatKind::Batting => &MISSING_BATTERS,
        StatKind::Pitching => &MISSING_PITCHERS,
    }
}

pub const MISSING_BATTERS: [(&str, u32); 26] = [
    ("coraal01", 87),
    ("lairdbr01", 8469),
    ("kangju01", 16144),
    ("phamth01", 16031),
    ("uptonbj01", 854),
    ("sanchca01", 14065),
    ("stantmi03", 6864),
    ("waldrky02", 8541),
    ("mondera02", 18324),
    ("martios01", 7403),
    ("johnsro07", 5366),
    ("youklke01", 110),
    ("fernajo03", 21397),
    ("shuckja01", 8691),
    ("penato02", 418),
    ("murphjr01", 14326),
    ("gourryu01", 20806),
    ("youngma02", 7639),
    ("alberha01", 16595),
    ("curtico01", 7460),
    ("scalebo01", 5199),
    ("fieldth01", 11609),
    ("taveros01", 15284),
    ("bayja01", 691),
    ("manzeto01", 7334),
    ("lopezfe01", 938),
];

pub const MISSING_PITCHERS: [(&str, u32); 39] = [
    ("rauchjo01", 928),
    ("fuentbr01", 255),
    ("garcija01", 608),
    ("gutieju01", 13535),
    ("nunezle01", 416),
    ("carmofa01", 243),
    ("hoeyja02", 59),
    ("herreda01", 5214),
    ("carigan01", 8593),
    ("delarda01", 8474),
    ("valdelu01", 8631),
    ("deleojo02", 11589),
    ("hartke01", 144),
    ("sttuemi01", 8654),
    ("greense01", 755),
    ("delarru01", 8759),
    ("villape01", 11456),
    ("mendero01", 12045),
    ("wolfro01", 18851),
    ("leech01", 12049),
    ("rodrist02", 11570),
    ("diazjo01", 14091),
    ("gonzami05", 13519),
    ("marimsu01", 14190),
    ("ogandne01", 16574),
    ("riverfe01", 16020),
    ("delosab01", 18036),
    ("zychto01", 18163),
    ("edwarca01", 16514),
    ("cravyty01", 17563),
    ("valdejo03", 14144),
    ("overtdi01", 20499),
    ("delacjo01", 16654),
    ("torrejo02", 18332),
    ("reedco01", 17722),
    ("delosen01", 24687),
    ("makitka01", 24728),
    ("vastoje01", 26288),
    ("blackra01", 16585),
];
