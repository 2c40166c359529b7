//! Player stat projections and prop-line edge comparison.
//!
//! A projections CSV (player rows, numeric per-category columns) can be
//! uploaded at any time; the latest snapshot is held by an explicit store
//! object with a load timestamp, injected wherever it is needed. Comparing
//! a snapshot against sportsbook prop lines yields "edges": the picks where
//! the projection disagrees most with the line.

use anyhow::{bail, Result};
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

/// One player's projected stat line.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerProjection {
    pub name: String,
    pub team: String,
    pub minutes: f64,
    pub pts: f64,
    pub ast: f64,
    pub reb: f64,
    pub stl: f64,
    pub blk: f64,
}

/// An immutable parse of one uploaded CSV, keyed by lower-cased player name.
#[derive(Debug, Clone)]
pub struct ProjectionSnapshot {
    players: FxHashMap<String, PlayerProjection>,
    pub loaded_at: DateTime<Utc>,
}

impl ProjectionSnapshot {
    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn get(&self, player: &str) -> Option<&PlayerProjection> {
        self.players.get(&player.to_lowercase())
    }

    /// Best projection match for a free-text player name: exact key,
    /// substring either way, then last-name equality (when longer than 3
    /// chars, so "Jr." and short surnames don't collide).
    pub fn find(&self, player: &str) -> Option<&PlayerProjection> {
        let wanted = player.to_lowercase();
        if let Some(p) = self.players.get(&wanted) {
            return Some(p);
        }
        if let Some(p) = self
            .players
            .iter()
            .find(|(key, _)| key.contains(&wanted) || wanted.contains(key.as_str()))
            .map(|(_, p)| p)
        {
            return Some(p);
        }
        let wanted_last = wanted.split_whitespace().last()?;
        if wanted_last.len() <= 3 {
            return None;
        }
        self.players
            .iter()
            .find(|(key, _)| key.split_whitespace().last() == Some(wanted_last))
            .map(|(_, p)| p)
    }

    /// Players sorted by a stat selector, highest first.
    pub fn top_by<F: Fn(&PlayerProjection) -> f64>(&self, n: usize, stat: F) -> Vec<&PlayerProjection> {
        let mut all: Vec<&PlayerProjection> = self.players.values().collect();
        all.sort_by(|a, b| stat(b).partial_cmp(&stat(a)).unwrap_or(std::cmp::Ordering::Equal));
        all.truncate(n);
        all
    }
}

/// Holds the most recently uploaded snapshot. Replaces the ambient
/// module-global the feature grew out of; ownership and lifecycle are the
/// caller's.
#[derive(Default)]
pub struct ProjectionStore {
    snapshot: RwLock<Option<ProjectionSnapshot>>,
}

impl ProjectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a CSV upload and make it the current snapshot. Returns the
    /// number of player rows kept. Rows without a name are skipped and
    /// unreadable numeric cells become 0.0; only a missing header is fatal.
    pub fn load(&self, csv: &str) -> Result<usize> {
        let snapshot = parse_projections_csv(csv)?;
        let count = snapshot.len();
        *self.snapshot.write() = Some(snapshot);
        tracing::info!(players = count, "projections loaded");
        Ok(count)
    }

    /// The current snapshot, if any upload has happened.
    pub fn current(&self) -> Option<ProjectionSnapshot> {
        self.snapshot.read().clone()
    }
}

fn parse_projections_csv(csv: &str) -> Result<ProjectionSnapshot> {
    let mut lines = csv.lines();
    let Some(header) = lines.next() else {
        bail!("empty projections CSV");
    };

    let columns: Vec<&str> = header.split(',').map(str::trim).collect();
    let col = |name: &str| columns.iter().position(|c| c.eq_ignore_ascii_case(name));
    let Some(name_col) = col("Player") else {
        bail!("projections CSV has no Player column");
    };
    let team_col = col("Team");
    let minutes_col = col("Minutes");
    let pts_col = col("PTS");
    let ast_col = col("AST");
    let dreb_col = col("DREB");
    let oreb_col = col("OREB");
    let stl_col = col("STL");
    let blk_col = col("BLK");

    let mut players = FxHashMap::default();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        let name = fields.get(name_col).copied().unwrap_or("");
        if name.is_empty() {
            continue;
        }

        let num = |idx: Option<usize>| -> f64 {
            idx.and_then(|i| fields.get(i))
                .and_then(|v| v.parse::<f64>().ok())
                .unwrap_or(0.0)
        };

        players.insert(
            name.to_lowercase(),
            PlayerProjection {
                name: name.to_string(),
                team: fields
                    .get(team_col.unwrap_or(usize::MAX))
                    .copied()
                    .unwrap_or("")
                    .to_string(),
                minutes: num(minutes_col),
                pts: num(pts_col),
                ast: num(ast_col),
                reb: num(dreb_col) + num(oreb_col),
                stl: num(stl_col),
                blk: num(blk_col),
            },
        );
    }

    Ok(ProjectionSnapshot { players, loaded_at: Utc::now() })
}

// === Prop line comparison ===

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropCategory {
    Points,
    Assists,
    Rebounds,
}

impl std::fmt::Display for PropCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropCategory::Points => write!(f, "PTS"),
            PropCategory::Assists => write!(f, "AST"),
            PropCategory::Rebounds => write!(f, "REB"),
        }
    }
}

/// A sportsbook prop line for one player and category.
#[derive(Debug, Clone)]
pub struct PropLine {
    pub player: String,
    pub category: PropCategory,
    pub line: f64,
}

/// A projection/line disagreement.
#[derive(Debug, Clone)]
pub struct Edge {
    pub player: String,
    pub team: String,
    pub category: PropCategory,
    pub line: f64,
    pub projection: f64,
    /// projection minus line; positive leans over.
    pub delta: f64,
}

impl Edge {
    pub fn lean(&self) -> &'static str {
        if self.delta > 0.0 {
            "OVER"
        } else {
            "UNDER"
        }
    }
}

/// Compare prop lines against a snapshot. Lines whose player has no
/// projection are skipped; results come back biggest absolute delta first.
pub fn find_edges(snapshot: &ProjectionSnapshot, props: &[PropLine]) -> Vec<Edge> {
    let mut edges: Vec<Edge> = props
        .iter()
        .filter_map(|prop| {
            let projection = snapshot.find(&prop.player)?;
            let projected = match prop.category {
                PropCategory::Points => projection.pts,
                PropCategory::Assists => projection.ast,
                PropCategory::Rebounds => projection.reb,
            };
            Some(Edge {
                player: projection.name.clone(),
                team: projection.team.clone(),
                category: prop.category,
                line: prop.line,
                projection: projected,
                delta: projected - prop.line,
            })
        })
        .collect();

    edges.sort_by(|a, b| {
        b.delta
            .abs()
            .partial_cmp(&a.delta.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
Player,Team,Minutes,PTS,AST,DREB,OREB,STL,BLK
Nikola Jokic,DEN,34.1,26.5,9.1,9.2,2.9,1.3,0.8
Luka Doncic,DAL,36.0,32.2,8.8,7.1,1.1,1.4,0.5
,BAD,10,1,1,1,1,1,1
Shaky Row,CHI,oops,12.5,not-a-number,3.0,1.0,0.5,0.2";

    #[test]
    fn load_counts_named_rows_only() {
        let store = ProjectionStore::new();
        assert!(store.current().is_none());
        let count = store.load(CSV).unwrap();
        assert_eq!(count, 3);
        assert!(store.current().is_some());
    }

    #[test]
    fn garbage_cells_become_zero() {
        let store = ProjectionStore::new();
        store.load(CSV).unwrap();
        let snapshot = store.current().unwrap();
        let shaky = snapshot.get("Shaky Row").unwrap();
        assert_eq!(shaky.minutes, 0.0);
        assert_eq!(shaky.ast, 0.0);
        assert_eq!(shaky.pts, 12.5);
        assert_eq!(shaky.reb, 4.0);
    }

    #[test]
    fn missing_player_column_is_fatal() {
        let store = ProjectionStore::new();
        assert!(store.load("Nobody,Home\n1,2").is_err());
        assert!(store.current().is_none());
    }

    #[test]
    fn reload_replaces_snapshot() {
        let store = ProjectionStore::new();
        store.load(CSV).unwrap();
        store.load("Player,PTS\nSolo Player,10.0").unwrap();
        let snapshot = store.current().unwrap();
        assert_eq!(snapshot.len(), 1);
        assert!(snapshot.get("Nikola Jokic").is_none());
    }

    #[test]
    fn find_matches_by_substring_and_last_name() {
        let store = ProjectionStore::new();
        store.load(CSV).unwrap();
        let snapshot = store.current().unwrap();
        assert!(snapshot.find("nikola jokic").is_some());
        assert!(snapshot.find("Jokic").is_some());
        assert_eq!(snapshot.find("L. Doncic").unwrap().name, "Luka Doncic");
        assert!(snapshot.find("Unknown Guy").is_none());
    }

    #[test]
    fn edges_sorted_by_absolute_delta() {
        let store = ProjectionStore::new();
        store.load(CSV).unwrap();
        let snapshot = store.current().unwrap();
        let props = vec![
            PropLine { player: "Nikola Jokic".into(), category: PropCategory::Points, line: 25.5 },
            PropLine { player: "Luka Doncic".into(), category: PropCategory::Points, line: 27.5 },
            PropLine { player: "Nobody Real".into(), category: PropCategory::Points, line: 10.0 },
        ];
        let edges = find_edges(&snapshot, &props);
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].player, "Luka Doncic");
        assert!((edges[0].delta - 4.7).abs() < 1e-9);
        assert_eq!(edges[0].lean(), "OVER");
        assert_eq!(edges[1].player, "Nikola Jokic");
    }
}
