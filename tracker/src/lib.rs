//! Core parsing and ledger library for the group bet tracker.
//!
//! Everything in this crate is pure, synchronous, in-memory work: turning
//! free-form chat text into structured wagers and parlays, matching wager
//! descriptions against finished games, and deriving balances, debts, and
//! win/loss records from the settled set. Chat delivery, persistence
//! mechanics, OCR, and score feeds live outside and talk to this crate
//! through the narrow seams in `store` and the plain-data types in `types`.

pub mod bet_parser;
pub mod ledger;
pub mod matcher;
pub mod normalize;
pub mod odds;
pub mod parlay;
pub mod projections;
pub mod slip;
pub mod store;
pub mod types;
