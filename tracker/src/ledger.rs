//! Ledger computation over settled wagers.
//!
//! Everything here is a pure fold over the settled set: net balances,
//! pairwise debts, and win/loss records. Nothing is cached or maintained
//! incrementally; every query rescans, which keeps the view unconditionally
//! consistent with the store at low settlement volume. All aggregation is a
//! commutative sum, so scan order never affects the result.

use rustc_hash::FxHashMap;

use crate::types::{parse_amount, Wager, WagerStatus};

/// Win/loss tally for one user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Record {
    pub wins: u32,
    pub losses: u32,
}

impl Record {
    pub fn total(&self) -> u32 {
        self.wins + self.losses
    }

    /// Percentage of settled wagers won; 0 when the user has none.
    pub fn win_pct(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.wins as f64 / total as f64 * 100.0
        }
    }
}

/// Winner and loser of a settled wager, or `None` when the record is not a
/// valid settlement (wrong status, missing winner, winner not a
/// participant). Invalid records are skipped, never fatal.
fn settled_sides(wager: &Wager) -> Option<(&str, &str)> {
    if wager.status != WagerStatus::Settled {
        return None;
    }
    let winner = wager.winner.as_deref()?;
    let loser = wager.counterparty(winner)?;
    Some((winner, loser))
}

/// Wager amount as a float; garbage degrades to a neutral zero so one
/// corrupt record never blocks aggregation over the rest.
fn wager_amount(wager: &Wager) -> f64 {
    parse_amount(&wager.amount).unwrap_or(0.0)
}

/// Net balance per user across the settled set: winners up by the amount,
/// losers down. The sum over all users is zero by construction.
pub fn balances(settled: &[Wager]) -> FxHashMap<String, f64> {
    let mut out: FxHashMap<String, f64> = FxHashMap::default();
    for wager in settled {
        let Some((winner, loser)) = settled_sides(wager) else {
            continue;
        };
        let amount = wager_amount(wager);
        *out.entry(winner.to_string()).or_default() += amount;
        *out.entry(loser.to_string()).or_default() -= amount;
    }
    out
}

/// Net position between `user` and each counterparty they have settled
/// wagers with. Positive means the counterparty owes `user`. Symmetric by
/// construction: recomputing from the other side negates every entry.
pub fn debts_for(user: &str, settled: &[Wager]) -> FxHashMap<String, f64> {
    let mut out: FxHashMap<String, f64> = FxHashMap::default();
    for wager in settled {
        let Some((winner, _)) = settled_sides(wager) else {
            continue;
        };
        let Some(other) = wager.counterparty(user) else {
            continue;
        };
        let amount = wager_amount(wager);
        let entry = out.entry(other.to_string()).or_default();
        if winner == user {
            *entry += amount;
        } else {
            *entry -= amount;
        }
    }
    out
}

/// Win/loss records for every user in the settled set.
pub fn records(settled: &[Wager]) -> FxHashMap<String, Record> {
    let mut out: FxHashMap<String, Record> = FxHashMap::default();
    for wager in settled {
        let Some((winner, loser)) = settled_sides(wager) else {
            continue;
        };
        out.entry(winner.to_string()).or_default().wins += 1;
        out.entry(loser.to_string()).or_default().losses += 1;
    }
    out
}
