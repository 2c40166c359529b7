//! Environment configuration.
//!
//! Everything is plain env vars parsed once; there is no config file. The
//! getters cache through `OnceLock` so hot paths never re-read the
//! environment.

use std::sync::OnceLock;

/// The bot's own user id as reported by the chat platform. Mentions of this
/// id are stripped before parsing and never become a participant.
/// Set `BOT_USER_ID`.
pub fn bot_user_id() -> &'static str {
    static CACHED: OnceLock<String> = OnceLock::new();
    CACHED.get_or_init(|| std::env::var("BOT_USER_ID").unwrap_or_else(|_| "betbot".to_string()))
}

/// Address the event endpoint binds to. Set `BETBOT_BIND` (default
/// `127.0.0.1:8080`).
pub fn bind_addr() -> &'static str {
    static CACHED: OnceLock<String> = OnceLock::new();
    CACHED.get_or_init(|| {
        std::env::var("BETBOT_BIND").unwrap_or_else(|_| "127.0.0.1:8080".to_string())
    })
}

/// How many resolved wagers the history views show. Set `HISTORY_LIMIT`
/// (default 10).
pub fn history_limit() -> usize {
    static CACHED: OnceLock<usize> = OnceLock::new();
    *CACHED.get_or_init(|| {
        std::env::var("HISTORY_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10)
    })
}

/// Minimum settled wagers before a user can appear on the wall of shame.
/// Set `SHAME_MIN_GAMES` (default 2).
pub fn shame_min_games() -> u32 {
    static CACHED: OnceLock<u32> = OnceLock::new();
    *CACHED.get_or_init(|| {
        std::env::var("SHAME_MIN_GAMES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(2)
    })
}

/// Sports swept by the `check` command, comma separated. Set `CHECK_SPORTS`
/// (default `nba,nfl,mlb,nhl`).
pub fn check_sports() -> &'static [String] {
    static CACHED: OnceLock<Vec<String>> = OnceLock::new();
    CACHED.get_or_init(|| {
        std::env::var("CHECK_SPORTS")
            .ok()
            .filter(|s| !s.is_empty())
            .map(|s| s.split(',').map(|v| v.trim().to_lowercase()).collect())
            .unwrap_or_else(|| {
                ["nba", "nfl", "mlb", "nhl"].iter().map(|s| s.to_string()).collect()
            })
    })
}
