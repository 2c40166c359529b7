//! Betting-slip screenshot ingestion.
//!
//! OCR output is noisy: menu chrome, truncated words, odds glued to team
//! names. This parser scans the recognized lines for team-plus-line and
//! over/under shapes, keeps only picks that name a known team or a total,
//! and deduplicates. Lines it cannot place are dropped silently; the slip
//! is untrusted input and a partial read is still useful.

use regex::Regex;
use std::sync::LazyLock;

use crate::odds::parse_odds;
use crate::types::Leg;

/// Team names recognizable in slip text, partial matches allowed.
const KNOWN_TEAMS: &[&str] = &[
    // NBA
    "lakers", "celtics", "warriors", "bulls", "heat", "nets", "knicks", "sixers",
    "bucks", "suns", "mavericks", "mavs", "clippers", "nuggets", "grizzlies",
    "cavaliers", "cavs", "thunder", "pelicans", "timberwolves", "wolves", "kings",
    "hawks", "hornets", "magic", "pacers", "pistons", "raptors", "wizards",
    "spurs", "jazz", "trail blazers", "blazers", "rockets",
    // NFL
    "chiefs", "eagles", "cowboys", "bills", "ravens", "49ers", "niners", "dolphins",
    "lions", "packers", "bengals", "chargers", "seahawks", "steelers", "rams",
    "vikings", "jaguars", "jags", "texans", "colts", "broncos", "raiders", "saints",
    "patriots", "pats", "bears", "falcons", "cardinals", "giants", "jets", "titans",
    "panthers", "browns", "commanders", "buccaneers", "bucs",
    // MLB
    "yankees", "dodgers", "braves", "astros", "mets", "phillies", "padres",
    "mariners", "blue jays", "orioles", "rays", "twins", "guardians", "rangers",
    "red sox", "white sox", "cubs", "brewers", "diamondbacks", "dbacks",
    "reds", "pirates", "royals", "tigers", "athletics", "angels", "rockies",
    "marlins", "nationals",
    // NHL
    "bruins", "avalanche", "oilers", "hurricanes", "devils", "maple leafs",
    "leafs", "lightning", "stars", "wild", "golden knights", "knights", "flames",
    "kraken", "penguins", "pens", "capitals", "caps", "canucks", "islanders",
    "isles", "blackhawks", "blues", "senators", "sens", "sabres", "red wings",
    "wings", "ducks", "coyotes", "predators", "preds", "sharks",
    // Soccer
    "arsenal", "chelsea", "liverpool", "man city", "manchester city", "man united",
    "manchester united", "tottenham", "barcelona", "real madrid", "bayern",
    "psg", "juventus", "inter", "milan", "dortmund", "ajax", "benfica", "porto",
];

static BET_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)([A-Za-z][A-Za-z\s.']+?)\s*([+-]?\d+\.?\d*|ML|moneyline|over|under|o\d+\.?\d*|u\d+\.?\d*)\s*([+-]\d{2,3})?",
    )
    .unwrap()
});

static TOTAL_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(over|under|o|u)\s*(\d+\.?\d*)\s*([+-]\d{2,3})?").unwrap());

/// Parse OCR-derived text lines from a slip screenshot into parlay legs.
pub fn parse_slip_lines(lines: &[String]) -> Vec<Leg> {
    let mut legs: Vec<Leg> = Vec::new();

    for raw in lines {
        let line = raw.trim();
        if line.chars().count() < 3 {
            continue;
        }

        if let Some(caps) = BET_LINE_RE.captures(line) {
            let candidate = caps.get(1).map(|m| m.as_str().trim()).unwrap_or("");
            let candidate_lower = candidate.to_lowercase();
            let line_info = caps.get(2).map(|m| m.as_str().trim()).unwrap_or("");
            let odds = caps.get(3).map(|m| m.as_str());

            let is_known = KNOWN_TEAMS
                .iter()
                .any(|t| candidate_lower.contains(t) || t.contains(candidate_lower.as_str()));

            if is_known && !candidate_lower.is_empty() {
                let team = title_case(candidate);
                let team_lower = team.to_lowercase();
                let duplicate = legs.iter().any(|l| l.pick.to_lowercase().contains(&team_lower));
                if !duplicate {
                    legs.push(Leg {
                        pick: format!("{} {}", team, line_info),
                        odds: odds.map(parse_odds).unwrap_or(1.0),
                    });
                }
                continue;
            }
        }

        if let Some(caps) = TOTAL_LINE_RE.captures(line) {
            let direction = match caps.get(1).unwrap().as_str().to_lowercase().as_str() {
                "over" | "o" => "Over",
                _ => "Under",
            };
            let number = caps.get(2).unwrap().as_str();
            let odds = caps.get(3).map(|m| m.as_str());

            let pick = format!("{} {}", direction, number);
            let pick_lower = pick.to_lowercase();
            let duplicate = legs.iter().any(|l| l.pick.to_lowercase().contains(&pick_lower));
            if !duplicate {
                legs.push(Leg { pick, odds: odds.map(parse_odds).unwrap_or(1.0) });
            }
        }
    }

    legs
}

/// Uppercase the first letter of each word, lowercase the rest.
fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
