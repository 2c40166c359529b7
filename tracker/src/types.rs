//! Core type definitions for wagers, parlays, and game snapshots.
//!
//! These are the plain records that flow between the parsers, the stores,
//! and the ledger. User references and channel ids are opaque strings as
//! reported by the chat platform; the core never interprets them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// === Wagers ===

/// Lifecycle state of a two-party wager.
///
/// Transitions are monotone: `Open` -> `Settled` or `Open` -> `Cancelled`,
/// never out of a terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WagerStatus {
    Open,
    Settled,
    Cancelled,
}

impl std::fmt::Display for WagerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WagerStatus::Open => write!(f, "open"),
            WagerStatus::Settled => write!(f, "settled"),
            WagerStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// A two-party, single-amount bet between members of a channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wager {
    /// Store-assigned id, monotonically increasing.
    pub id: u64,
    /// Channel the bet was logged in.
    pub channel: String,
    pub participant_a: String,
    pub participant_b: String,
    /// Dollar-prefixed amount as parsed from the message, e.g. `"$50"`.
    pub amount: String,
    pub description: String,
    pub status: WagerStatus,
    /// Set only when status is `Settled`; always one of the two participants.
    pub winner: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Set exactly once, on settle or cancel.
    pub resolved_at: Option<DateTime<Utc>>,
    /// Who sent the message that created the bet.
    pub created_by: String,
}

impl Wager {
    /// The participant who is not `user`, if `user` is in the bet at all.
    pub fn counterparty(&self, user: &str) -> Option<&str> {
        if self.participant_a == user {
            Some(&self.participant_b)
        } else if self.participant_b == user {
            Some(&self.participant_a)
        } else {
            None
        }
    }

    pub fn involves(&self, user: &str) -> bool {
        self.participant_a == user || self.participant_b == user
    }
}

// === Parlays ===

/// One pick inside a parlay, with its decimal odds multiplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    pub pick: String,
    /// Decimal payout multiplier; `1.0` when the odds were absent or
    /// unreadable.
    pub odds: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParlayStatus {
    Open,
    Won,
    Lost,
    Pushed,
}

impl std::fmt::Display for ParlayStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParlayStatus::Open => write!(f, "open"),
            ParlayStatus::Won => write!(f, "won"),
            ParlayStatus::Lost => write!(f, "lost"),
            ParlayStatus::Pushed => write!(f, "pushed"),
        }
    }
}

/// Where a parlay's legs came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlipSource {
    /// Typed into chat.
    Manual,
    /// OCR'd from a betting-slip screenshot.
    Screenshot,
}

/// A single-owner, multi-leg conditional bet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parlay {
    pub id: u64,
    pub owner: String,
    pub channel: String,
    /// Dollar-prefixed stake if one was given.
    pub stake: Option<String>,
    /// Non-empty by store invariant.
    pub legs: Vec<Leg>,
    /// Product of all leg odds, computed when the parlay is built.
    pub total_odds: f64,
    pub status: ParlayStatus,
    /// Free-text outcome note, set on resolution.
    pub result: Option<String>,
    pub created_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub source: SlipSource,
}

impl Parlay {
    /// Stake times total odds, when the stake parses as an amount.
    pub fn potential_payout(&self) -> Option<f64> {
        let stake = parse_amount(self.stake.as_deref()?)?;
        Some(stake * self.total_odds)
    }
}

// === Games ===

/// Read-only snapshot of a game from the score feed. The core never
/// mutates these; an empty game list just means nothing can be matched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub home_team: String,
    pub away_team: String,
    pub home_abbrev: String,
    pub away_abbrev: String,
    pub home_score: u32,
    pub away_score: u32,
    pub completed: bool,
    /// Winning team name, `"Tie"` for draws, `None` while in progress.
    pub winner: Option<String>,
}

// === Amounts ===

/// Parse a money string into a float, stripping `$` and thousands
/// separators. Returns `None` for garbage; ledger callers map that to a
/// neutral zero so one corrupt record never blocks aggregation.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect();
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_amount_strips_currency_markup() {
        assert_eq!(parse_amount("$50"), Some(50.0));
        assert_eq!(parse_amount("$1,250.50"), Some(1250.5));
        assert_eq!(parse_amount(" 20 "), Some(20.0));
    }

    #[test]
    fn parse_amount_rejects_garbage() {
        assert_eq!(parse_amount("fifty"), None);
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("$"), None);
    }

    #[test]
    fn counterparty_lookup() {
        let w = Wager {
            id: 1,
            channel: "C1".into(),
            participant_a: "U1".into(),
            participant_b: "U2".into(),
            amount: "$10".into(),
            description: "test".into(),
            status: WagerStatus::Open,
            winner: None,
            created_at: Utc::now(),
            resolved_at: None,
            created_by: "U1".into(),
        };
        assert_eq!(w.counterparty("U1"), Some("U2"));
        assert_eq!(w.counterparty("U2"), Some("U1"));
        assert_eq!(w.counterparty("U3"), None);
    }

    #[test]
    fn potential_payout_needs_parsable_stake() {
        let mut p = Parlay {
            id: 1,
            owner: "U1".into(),
            channel: "C1".into(),
            stake: Some("$20".into()),
            legs: vec![Leg { pick: "Lakers ML".into(), odds: 2.5 }],
            total_odds: 2.5,
            status: ParlayStatus::Open,
            result: None,
            created_at: Utc::now(),
            resolved_at: None,
            source: SlipSource::Manual,
        };
        assert_eq!(p.potential_payout(), Some(50.0));
        p.stake = Some("twenty".into());
        assert_eq!(p.potential_payout(), None);
        p.stake = None;
        assert_eq!(p.potential_payout(), None);
    }
}
