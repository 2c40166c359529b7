//! Parlay leg parsing.
//!
//! People paste picks in every imaginable shape: one per line, comma runs,
//! numbered lists, bullets, with or without odds. The parser is forgiving:
//! it splits, strips decoration, pulls trailing odds off each line, and
//! keeps whatever survives as a pick. An empty result is the caller's
//! signal that nothing parseable was sent.

use regex::Regex;
use std::sync::LazyLock;

use crate::odds::parse_odds;
use crate::types::Leg;

/// Lines that are exactly one of these words are slip chrome, not picks.
const NOISE_WORDS: [&str; 6] = ["parlay", "total", "wager", "stake", "bet", "slip"];

static ORDINAL_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+[.)]\s*").unwrap());
static BULLET_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-•*]\s*").unwrap());
static LEG_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^leg\s*\d*:?\s*").unwrap());
static TRAILING_PUNCT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[,;:]+$").unwrap());

/// Trailing odds anchors, tried in order; the first that matches the tail of
/// a line wins and everything before it is the pick.
static ODDS_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"([+-]\d{3})\s*$",          // American: +150, -110
        r"([+-]\d+)\s*$",            // short American: +15, -11
        r"@\s*([+-]?\d+\.?\d*)\s*$", // @ 1.95
        r"\(([+-]?\d+\.?\d*)\)\s*$", // (1.95) or (+150)
        r"\s(\d+\.\d{2})\s*$",       // bare decimal: 1.95
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Split a free-text block into ordered parlay legs. May be empty.
pub fn parse_legs(text: &str) -> Vec<Leg> {
    let text = text.trim();

    let lines: Vec<&str> = if text.contains('\n') {
        text.split('\n').collect()
    } else if text.contains(',') {
        text.split(',').collect()
    } else if text.contains(';') {
        text.split(';').collect()
    } else {
        vec![text]
    };

    let mut legs = Vec::new();
    for raw in lines {
        if let Some(leg) = parse_leg_line(raw) {
            legs.push(leg);
        }
    }
    legs
}

fn parse_leg_line(raw: &str) -> Option<Leg> {
    let mut line = raw.trim().to_string();
    if line.is_empty() || line.starts_with('/') || line.starts_with('#') {
        return None;
    }

    line = ORDINAL_PREFIX_RE.replace(&line, "").into_owned();
    line = BULLET_PREFIX_RE.replace(&line, "").into_owned();
    line = LEG_PREFIX_RE.replace(&line, "").into_owned();
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let lower = line.to_lowercase();
    if NOISE_WORDS.iter().any(|w| lower == *w) {
        return None;
    }

    let mut odds = 1.0;
    let mut pick = line;
    for pattern in ODDS_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(line) {
            odds = parse_odds(caps.get(1).unwrap().as_str());
            pick = line[..caps.get(0).unwrap().start()].trim_end();
            break;
        }
    }

    let pick = TRAILING_PUNCT_RE.replace(pick.trim(), "").trim().to_string();
    if pick.chars().count() < 2 {
        return None;
    }

    Some(Leg { pick, odds })
}

/// Product of all leg odds. Recomputed whenever legs change; never stored
/// as an independent source of truth.
pub fn total_odds(legs: &[Leg]) -> f64 {
    legs.iter().map(|l| l.odds).product()
}
