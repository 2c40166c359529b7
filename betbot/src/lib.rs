//! Bet tracker bot: command dispatch and collaborator plumbing.
//!
//! The library target exists so the integration tests can drive the full
//! command surface; the binary in `main.rs` just wires stores and the HTTP
//! event endpoint around it.

pub mod commands;
pub mod config;
pub mod format;
pub mod scores;
