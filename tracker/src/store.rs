//! Store seams and in-memory implementations.
//!
//! The core only ever talks to persistence through these narrow traits; the
//! dispatcher decides what actually backs them. The in-memory stores here
//! are the reference implementation and what the tests and the binary run
//! against. The one hard requirement is settle-if-open: two concurrent
//! settle attempts on the same id must yield exactly one success, so the
//! status check and the mutation happen inside a single write-lock critical
//! section.

use anyhow::{bail, Result};
use chrono::Utc;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::parlay::total_odds;
use crate::types::{Leg, Parlay, ParlayStatus, SlipSource, Wager, WagerStatus};

/// User-visible reasons a settlement cannot proceed. Reported without
/// mutating anything.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettleError {
    #[error("wager #{0} not found")]
    NotFound(u64),
    #[error("wager #{id} is already {status}")]
    AlreadyResolved { id: u64, status: WagerStatus },
    #[error("winner must be one of the participants")]
    NotAParticipant,
}

/// Fields for a new wager; the store assigns id, status, and timestamps.
#[derive(Debug, Clone)]
pub struct NewWager {
    pub channel: String,
    pub participant_a: String,
    pub participant_b: String,
    pub amount: String,
    pub description: String,
    pub created_by: String,
}

pub trait WagerStore: Send + Sync {
    fn create(&self, new: NewWager) -> Result<u64>;
    fn get(&self, id: u64) -> Option<Wager>;
    /// Open wagers, newest first, optionally scoped to one channel.
    fn list_open(&self, channel: Option<&str>) -> Vec<Wager>;
    /// Settled wagers, newest resolution first.
    fn list_settled(&self, channel: Option<&str>, limit: Option<usize>) -> Vec<Wager>;
    /// Settled and cancelled wagers, for history display.
    fn list_resolved(&self, channel: Option<&str>, limit: usize) -> Vec<Wager>;
    /// Transition Open -> Settled iff the wager is still open. Returns
    /// whether this call performed the transition.
    fn settle_if_open(&self, id: u64, winner: &str) -> bool;
    /// Transition Open -> Cancelled iff the wager is still open.
    fn cancel_if_open(&self, id: u64) -> bool;
}

pub trait ParlayStore: Send + Sync {
    /// Fails on empty legs; a degenerate parlay must never be recorded.
    fn create(
        &self,
        owner: &str,
        channel: &str,
        stake: Option<String>,
        legs: Vec<Leg>,
        source: SlipSource,
    ) -> Result<u64>;
    fn get(&self, id: u64) -> Option<Parlay>;
    fn list_by_owner(&self, owner: &str, status: Option<ParlayStatus>) -> Vec<Parlay>;
    /// Resolve an open parlay. Returns whether this call performed the
    /// transition.
    fn update_status_if_open(&self, id: u64, status: ParlayStatus, result: Option<String>)
        -> bool;
    fn delete(&self, id: u64) -> bool;
}

// === In-memory implementations ===

pub struct MemoryWagerStore {
    wagers: RwLock<Vec<Wager>>,
    next_id: AtomicU64,
}

impl Default for MemoryWagerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryWagerStore {
    pub fn new() -> Self {
        Self { wagers: RwLock::new(Vec::new()), next_id: AtomicU64::new(1) }
    }
}

impl WagerStore for MemoryWagerStore {
    fn create(&self, new: NewWager) -> Result<u64> {
        if new.participant_a == new.participant_b {
            bail!("a wager needs two different participants");
        }
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let wager = Wager {
            id,
            channel: new.channel,
            participant_a: new.participant_a,
            participant_b: new.participant_b,
            amount: new.amount,
            description: new.description,
            status: WagerStatus::Open,
            winner: None,
            created_at: Utc::now(),
            resolved_at: None,
            created_by: new.created_by,
        };
        self.wagers.write().push(wager);
        tracing::info!(id, "wager recorded");
        Ok(id)
    }

    fn get(&self, id: u64) -> Option<Wager> {
        self.wagers.read().iter().find(|w| w.id == id).cloned()
    }

    fn list_open(&self, channel: Option<&str>) -> Vec<Wager> {
        let mut out: Vec<Wager> = self
            .wagers
            .read()
            .iter()
            .filter(|w| w.status == WagerStatus::Open)
            .filter(|w| channel.map_or(true, |c| w.channel == c))
            .cloned()
            .collect();
        out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        out
    }

    fn list_settled(&self, channel: Option<&str>, limit: Option<usize>) -> Vec<Wager> {
        let mut out: Vec<Wager> = self
            .wagers
            .read()
            .iter()
            .filter(|w| w.status == WagerStatus::Settled)
            .filter(|w| channel.map_or(true, |c| w.channel == c))
            .cloned()
            .collect();
        out.sort_by(|a, b| b.resolved_at.cmp(&a.resolved_at));
        if let Some(limit) = limit {
            out.truncate(limit);
        }
        out
    }

    fn list_resolved(&self, channel: Option<&str>, limit: usize) -> Vec<Wager> {
        let mut out: Vec<Wager> = self
            .wagers
            .read()
            .iter()
            .filter(|w| w.status != WagerStatus::Open)
            .filter(|w| channel.map_or(true, |c| w.channel == c))
            .cloned()
            .collect();
        out.sort_by(|a, b| b.resolved_at.cmp(&a.resolved_at));
        out.truncate(limit);
        out
    }

    fn settle_if_open(&self, id: u64, winner: &str) -> bool {
        let mut wagers = self.wagers.write();
        let Some(wager) = wagers.iter_mut().find(|w| w.id == id) else {
            return false;
        };
        if wager.status != WagerStatus::Open {
            return false;
        }
        wager.status = WagerStatus::Settled;
        wager.winner = Some(winner.to_string());
        wager.resolved_at = Some(Utc::now());
        tracing::info!(id, winner, "wager settled");
        true
    }

    fn cancel_if_open(&self, id: u64) -> bool {
        let mut wagers = self.wagers.write();
        let Some(wager) = wagers.iter_mut().find(|w| w.id == id) else {
            return false;
        };
        if wager.status != WagerStatus::Open {
            return false;
        }
        wager.status = WagerStatus::Cancelled;
        wager.resolved_at = Some(Utc::now());
        tracing::info!(id, "wager cancelled");
        true
    }
}

pub struct MemoryParlayStore {
    parlays: RwLock<Vec<Parlay>>,
    next_id: AtomicU64,
}

impl Default for MemoryParlayStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryParlayStore {
    pub fn new() -> Self {
        Self { parlays: RwLock::new(Vec::new()), next_id: AtomicU64::new(1) }
    }
}

impl ParlayStore for MemoryParlayStore {
    fn create(
        &self,
        owner: &str,
        channel: &str,
        stake: Option<String>,
        legs: Vec<Leg>,
        source: SlipSource,
    ) -> Result<u64> {
        if legs.is_empty() {
            bail!("a parlay needs at least one leg");
        }
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let parlay = Parlay {
            id,
            owner: owner.to_string(),
            channel: channel.to_string(),
            stake,
            total_odds: total_odds(&legs),
            legs,
            status: ParlayStatus::Open,
            result: None,
            created_at: Utc::now(),
            resolved_at: None,
            source,
        };
        self.parlays.write().push(parlay);
        tracing::info!(id, "parlay recorded");
        Ok(id)
    }

    fn get(&self, id: u64) -> Option<Parlay> {
        self.parlays.read().iter().find(|p| p.id == id).cloned()
    }

    fn list_by_owner(&self, owner: &str, status: Option<ParlayStatus>) -> Vec<Parlay> {
        let mut out: Vec<Parlay> = self
            .parlays
            .read()
            .iter()
            .filter(|p| p.owner == owner)
            .filter(|p| status.map_or(true, |s| p.status == s))
            .cloned()
            .collect();
        out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        out
    }

    fn update_status_if_open(
        &self,
        id: u64,
        status: ParlayStatus,
        result: Option<String>,
    ) -> bool {
        let mut parlays = self.parlays.write();
        let Some(parlay) = parlays.iter_mut().find(|p| p.id == id) else {
            return false;
        };
        if parlay.status != ParlayStatus::Open || status == ParlayStatus::Open {
            return false;
        }
        parlay.status = status;
        parlay.result = result;
        parlay.resolved_at = Some(Utc::now());
        true
    }

    fn delete(&self, id: u64) -> bool {
        let mut parlays = self.parlays.write();
        let before = parlays.len();
        parlays.retain(|p| p.id != id);
        parlays.len() < before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_wager(a: &str, b: &str) -> NewWager {
        NewWager {
            channel: "C1".into(),
            participant_a: a.into(),
            participant_b: b.into(),
            amount: "$20".into(),
            description: "test".into(),
            created_by: a.into(),
        }
    }

    #[test]
    fn settle_if_open_succeeds_exactly_once() {
        let store = MemoryWagerStore::new();
        let id = store.create(new_wager("U1", "U2")).unwrap();

        assert!(store.settle_if_open(id, "U2"));
        let first_resolved_at = store.get(id).unwrap().resolved_at.unwrap();

        assert!(!store.settle_if_open(id, "U2"));
        assert!(!store.settle_if_open(id, "U1"));

        let wager = store.get(id).unwrap();
        assert_eq!(wager.status, WagerStatus::Settled);
        assert_eq!(wager.winner.as_deref(), Some("U2"));
        assert_eq!(wager.resolved_at.unwrap(), first_resolved_at);
    }

    #[test]
    fn cancel_after_settle_is_a_noop() {
        let store = MemoryWagerStore::new();
        let id = store.create(new_wager("U1", "U2")).unwrap();
        assert!(store.settle_if_open(id, "U1"));
        assert!(!store.cancel_if_open(id));
        assert_eq!(store.get(id).unwrap().status, WagerStatus::Settled);
    }

    #[test]
    fn missing_ids_fail_quietly() {
        let store = MemoryWagerStore::new();
        assert!(!store.settle_if_open(99, "U1"));
        assert!(!store.cancel_if_open(99));
        assert!(store.get(99).is_none());
    }

    #[test]
    fn ids_are_monotonic() {
        let store = MemoryWagerStore::new();
        let a = store.create(new_wager("U1", "U2")).unwrap();
        let b = store.create(new_wager("U3", "U4")).unwrap();
        assert!(b > a);
    }

    #[test]
    fn listing_filters_by_channel_and_status() {
        let store = MemoryWagerStore::new();
        let a = store.create(new_wager("U1", "U2")).unwrap();
        let mut other = new_wager("U3", "U4");
        other.channel = "C2".into();
        store.create(other).unwrap();

        assert_eq!(store.list_open(Some("C1")).len(), 1);
        assert_eq!(store.list_open(None).len(), 2);

        store.settle_if_open(a, "U1");
        assert_eq!(store.list_open(Some("C1")).len(), 0);
        assert_eq!(store.list_settled(Some("C1"), None).len(), 1);
        assert_eq!(store.list_resolved(None, 10).len(), 1);
    }

    #[test]
    fn same_participant_twice_is_rejected() {
        let store = MemoryWagerStore::new();
        assert!(store.create(new_wager("U1", "U1")).is_err());
    }

    #[test]
    fn empty_leg_parlay_is_rejected() {
        let store = MemoryParlayStore::new();
        let err = store.create("U1", "C1", None, vec![], SlipSource::Manual);
        assert!(err.is_err());
    }

    #[test]
    fn parlay_total_odds_computed_at_creation() {
        let store = MemoryParlayStore::new();
        let legs = vec![
            Leg { pick: "Lakers ML".into(), odds: 2.5 },
            Leg { pick: "Over 220".into(), odds: 1.91 },
        ];
        let id = store
            .create("U1", "C1", Some("$20".into()), legs, SlipSource::Manual)
            .unwrap();
        let parlay = store.get(id).unwrap();
        assert!((parlay.total_odds - 4.775).abs() < 1e-9);
        assert!((parlay.potential_payout().unwrap() - 95.5).abs() < 1e-9);
    }

    #[test]
    fn parlay_resolution_is_terminal_and_owner_scoped_listing_works() {
        let store = MemoryParlayStore::new();
        let legs = vec![Leg { pick: "Lakers ML".into(), odds: 2.0 }];
        let id = store.create("U1", "C1", None, legs, SlipSource::Screenshot).unwrap();

        assert!(store.update_status_if_open(id, ParlayStatus::Won, Some("$40.00".into())));
        assert!(!store.update_status_if_open(id, ParlayStatus::Lost, None));
        assert_eq!(store.get(id).unwrap().status, ParlayStatus::Won);

        assert_eq!(store.list_by_owner("U1", None).len(), 1);
        assert_eq!(store.list_by_owner("U1", Some(ParlayStatus::Open)).len(), 0);
        assert!(store.list_by_owner("U2", None).is_empty());

        assert!(store.delete(id));
        assert!(!store.delete(id));
    }
}
