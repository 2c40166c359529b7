//! ESPN scoreboard client.
//!
//! Read-only score and betting-line feeds used to auto-match open bets to
//! finished games and to answer `scores` / `lines` commands. Every failure
//! here surfaces as an `Err` that callers translate into "no data"; the bot
//! keeps working with whatever feeds are reachable.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;
use tracing::warn;

use tracker::types::Game;

/// ESPN site API base URL.
pub const ESPN_API_BASE: &str = "https://site.api.espn.com/apis/site/v2/sports";

/// Map a user-facing sport keyword to its ESPN path segment.
pub fn sport_path(sport: &str) -> Option<&'static str> {
    match sport.to_lowercase().as_str() {
        "nba" => Some("basketball/nba"),
        "nfl" => Some("football/nfl"),
        "mlb" => Some("baseball/mlb"),
        "nhl" => Some("hockey/nhl"),
        "ncaab" => Some("basketball/mens-college-basketball"),
        "ncaaf" => Some("football/college-football"),
        "soccer" | "mls" => Some("soccer/usa.1"),
        "epl" => Some("soccer/eng.1"),
        "laliga" => Some("soccer/esp.1"),
        "bundesliga" => Some("soccer/ger.1"),
        "seriea" => Some("soccer/ita.1"),
        "ligue1" => Some("soccer/fra.1"),
        "ucl" => Some("soccer/uefa.champions"),
        _ => None,
    }
}

// === Wire types ===

#[derive(Deserialize, Debug)]
struct Scoreboard {
    #[serde(default)]
    events: Vec<Event>,
}

#[derive(Deserialize, Debug)]
struct Event {
    #[serde(default)]
    competitions: Vec<Competition>,
    status: Option<EventStatus>,
}

#[derive(Deserialize, Debug)]
struct Competition {
    #[serde(default)]
    competitors: Vec<Competitor>,
    #[serde(default)]
    odds: Vec<OddsEntry>,
    status: Option<EventStatus>,
}

#[derive(Deserialize, Debug)]
struct Competitor {
    team: Option<TeamInfo>,
    score: Option<String>,
    #[serde(rename = "homeAway")]
    home_away: Option<String>,
}

#[derive(Deserialize, Debug)]
struct TeamInfo {
    #[serde(rename = "displayName", default)]
    display_name: String,
    #[serde(default)]
    abbreviation: String,
}

#[derive(Deserialize, Debug)]
struct EventStatus {
    #[serde(rename = "type")]
    kind: Option<StatusType>,
}

#[derive(Deserialize, Debug, Default)]
struct StatusType {
    #[serde(default)]
    completed: bool,
    #[serde(rename = "shortDetail", default)]
    short_detail: String,
    #[serde(default)]
    state: String,
}

#[derive(Deserialize, Debug)]
struct OddsEntry {
    details: Option<String>,
    spread: Option<f64>,
    #[serde(rename = "overUnder")]
    over_under: Option<f64>,
}

/// Betting-line summary for one game, for the `lines` command.
#[derive(Debug, Clone)]
pub struct GameLine {
    pub home: String,
    pub away: String,
    pub status: String,
    pub spread: Option<String>,
    pub total: Option<f64>,
    pub details: Option<String>,
    pub score: Option<String>,
}

// === Client ===

pub struct ScoresClient {
    http: reqwest::Client,
    base: String,
}

impl Default for ScoresClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoresClient {
    pub fn new() -> Self {
        Self::with_base(ESPN_API_BASE)
    }

    /// Point the client at a different base URL (tests).
    pub fn with_base(base: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .expect("failed to build HTTP client"),
            base: base.into(),
        }
    }

    async fn scoreboard(&self, sport: &str) -> Result<Scoreboard> {
        let path = sport_path(sport).with_context(|| format!("unknown sport '{}'", sport))?;
        let url = format!("{}/{}/scoreboard", self.base, path);
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("scoreboard request failed for {}", sport))?;
        if !resp.status().is_success() {
            anyhow::bail!("scoreboard returned {} for {}", resp.status(), sport);
        }
        resp.json::<Scoreboard>()
            .await
            .with_context(|| format!("bad scoreboard payload for {}", sport))
    }

    /// Current games for a sport as read-only snapshots. The winner is
    /// derived here from the final score; `"Tie"` for draws.
    pub async fn fetch_scores(&self, sport: &str) -> Result<Vec<Game>> {
        let board = self.scoreboard(sport).await?;
        let mut games = Vec::new();

        for event in board.events {
            let Some(competition) = event.competitions.into_iter().next() else {
                continue;
            };
            let Some((home, away)) = split_sides(competition.competitors) else {
                continue;
            };

            let completed = event
                .status
                .and_then(|s| s.kind)
                .map(|k| k.completed)
                .unwrap_or(false);

            let home_score = parse_score(home.score.as_deref());
            let away_score = parse_score(away.score.as_deref());
            let (home_team, home_abbrev) = team_fields(home.team);
            let (away_team, away_abbrev) = team_fields(away.team);

            let winner = if completed {
                Some(if home_score > away_score {
                    home_team.clone()
                } else if away_score > home_score {
                    away_team.clone()
                } else {
                    "Tie".to_string()
                })
            } else {
                None
            };

            games.push(Game {
                home_team,
                away_team,
                home_abbrev,
                away_abbrev,
                home_score,
                away_score,
                completed,
                winner,
            });
        }

        Ok(games)
    }

    /// Spread/total/moneyline summary for a sport's slate.
    pub async fn fetch_lines(&self, sport: &str) -> Result<Vec<GameLine>> {
        let board = self.scoreboard(sport).await?;
        let mut lines = Vec::new();

        for event in board.events {
            let event_status = event
                .status
                .and_then(|s| s.kind)
                .unwrap_or_default();
            let Some(competition) = event.competitions.into_iter().next() else {
                continue;
            };
            let comp_state = competition
                .status
                .and_then(|s| s.kind)
                .map(|k| k.state)
                .unwrap_or_default();

            let odds = competition.odds.into_iter().next();
            let Some((home, away)) = split_sides(competition.competitors) else {
                continue;
            };

            let score = if comp_state != "pre" && !comp_state.is_empty() {
                Some(format!(
                    "{}-{}",
                    parse_score(away.score.as_deref()),
                    parse_score(home.score.as_deref())
                ))
            } else {
                None
            };

            let (home_team, _) = team_fields(home.team);
            let (away_team, _) = team_fields(away.team);

            lines.push(GameLine {
                home: home_team,
                away: away_team,
                status: event_status.short_detail,
                spread: odds.as_ref().and_then(|o| o.spread).map(|s| format!("{:+.1}", s)),
                total: odds.as_ref().and_then(|o| o.over_under),
                details: odds.and_then(|o| o.details),
                score,
            });
        }

        Ok(lines)
    }

    /// Fetch several sports and pool the results; feeds that fail are
    /// logged and skipped so one dead provider never empties the sweep.
    pub async fn fetch_all_scores(&self, sports: &[String]) -> Vec<Game> {
        let mut all = Vec::new();
        for sport in sports {
            match self.fetch_scores(sport).await {
                Ok(games) => all.extend(games),
                Err(err) => warn!(sport = sport.as_str(), "score fetch failed: {:#}", err),
            }
        }
        all
    }
}

fn split_sides(competitors: Vec<Competitor>) -> Option<(Competitor, Competitor)> {
    if competitors.len() < 2 {
        return None;
    }
    let home_idx = competitors
        .iter()
        .position(|c| c.home_away.as_deref() == Some("home"))
        .unwrap_or(0);
    let mut competitors = competitors;
    let home = competitors.remove(home_idx);
    let away_idx = competitors
        .iter()
        .position(|c| c.home_away.as_deref() == Some("away"))
        .unwrap_or(0);
    let away = competitors.remove(away_idx);
    Some((home, away))
}

fn team_fields(team: Option<TeamInfo>) -> (String, String) {
    match team {
        Some(t) => (t.display_name, t.abbreviation),
        None => (String::new(), String::new()),
    }
}

fn parse_score(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.parse().ok()).unwrap_or(0)
}
