//! Mention command dispatch.
//!
//! One inbound mention becomes exactly one reply string. Dispatch order
//! matters and mirrors how people actually talk to the bot: exact keyword
//! commands first, then the pattern commands (scores, lines, parlay,
//! settle, cancel), and only then is the message treated as a new bet. A
//! message nothing understands gets a generic fallback, never an error.

use regex::Regex;
use std::sync::{Arc, LazyLock};
use tracing::warn;

use tracker::bet_parser::parse_bet;
use tracker::ledger;
use tracker::matcher::match_game;
use tracker::normalize::strip_bot_mention;
use tracker::parlay::parse_legs;
use tracker::projections::{find_edges, ProjectionStore, PropLine};
use tracker::slip::parse_slip_lines;
use tracker::store::{NewWager, ParlayStore, SettleError, WagerStore};
use tracker::types::{ParlayStatus, SlipSource, Wager, WagerStatus};

use crate::config;
use crate::format::{
    game_line, mention, money, odds_block, parlay_card, resolved_wager_line, wager_line,
};
use crate::scores::{sport_path, ScoresClient};

const HELP_TEXT: &str = "*Bet Tracker Bot Help*

*Log a bet:*
`@betbot @alice vs @bob $50 on the game`
`@betbot I bet @bob 50 Lakers win`
`@betbot @alice owes @bob $20`

*Bets:*
- `list` - open bets in this channel
- `all` - all open bets
- `mybets` - your open bets
- `history` - recently resolved bets
- `myhistory` - your bet history
- `settle <id> winner @person` - settle a bet
- `cancel <id>` - cancel a bet

*Money:*
- `balance` - your balance & debts
- `balances` - leaderboard
- `shame` - wall of shame (worst records)

*Parlays:*
- `parlay $20 Lakers ML, Chiefs -3, Over 220` - log a parlay
- `parlays` - your open parlays
- `parlay won <id>` / `parlay lost <id>` / `parlay push <id>`
- `parlay delete <id>`

*Feeds:*
- `scores nba` - live scores
- `lines nfl` - betting odds/spreads
- `check` - auto-match open bets to finished games
- `props` - projections vs prop lines";

static SETTLE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)settle\s+(\d+)\s+(?:winner\s+)?<@(\w+)>", // settle 1 winner @person
        r"(?i)(\d+)\s+(?:winner|won|goes to)\s+<@(\w+)>", // 1 winner @person
        r"(?i)<@(\w+)>\s+(?:won|wins)\s+(?:bet\s+)?(\d+)", // @person won bet 1
        r"(?i)(?:close|resolve|end)\s+(\d+)\s+<@(\w+)>", // close 1 @person
        r"(?i)(\d+)\s+<@(\w+)>\s+(?:won|wins)",         // 1 @person won
        r"(?i)(\d+)\s+to\s+<@(\w+)>",                   // 1 to @person
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static CANCEL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^cancel\s+(\d+)").unwrap());
static SCORES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^scores?\b\s*(\w+)?").unwrap());
static LINES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:lines?|odds|spreads?|betting)\b\s*(.*)").unwrap());
static PARLAY_RESOLVE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^parlay[\s_](won|lost|push|pushed)\s+(\d+)\s*$").unwrap());
static PARLAY_DELETE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^parlay[\s_]delete\s+(\d+)\s*$").unwrap());
static PARLAY_NEW_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)^parlay\b\s*(.*)$").unwrap());
static STAKE_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\$(\d+(?:\.\d{2})?)\s*").unwrap());

/// The bot: narrow store seams in, one reply string out.
pub struct Bot {
    wagers: Arc<dyn WagerStore>,
    parlays: Arc<dyn ParlayStore>,
    projections: Arc<ProjectionStore>,
    scores: ScoresClient,
}

impl Bot {
    pub fn new(
        wagers: Arc<dyn WagerStore>,
        parlays: Arc<dyn ParlayStore>,
        projections: Arc<ProjectionStore>,
        scores: ScoresClient,
    ) -> Self {
        Self { wagers, parlays, projections, scores }
    }

    /// Dispatch one mention and produce the reply.
    pub async fn handle_mention(&self, channel: &str, sender: &str, text: &str) -> String {
        let clean = strip_bot_mention(text, config::bot_user_id());
        let lower = clean.to_lowercase();

        match lower.as_str() {
            "commands" | "command" | "cmds" | "cmd" | "help" => return HELP_TEXT.to_string(),
            "list" | "bets" | "open" | "openbets" | "open bets" => {
                return self.list_open(Some(channel), "*Open Bets in this channel:*", "No open bets in this channel!")
            }
            "listall" | "list all" | "all" | "all bets" | "allbets" => {
                return self.list_open(None, "*All Open Bets:*", "No open bets anywhere!")
            }
            "history" | "recent" | "resolved" | "past" | "past bets" => {
                return self.history(channel)
            }
            "balance" | "mybalance" | "my balance" => return self.balance(sender),
            "balances" | "leaderboard" | "standings" | "all balances" => return self.leaderboard(),
            "mybets" | "my bets" | "myopen" | "my open" => return self.my_open(sender),
            "myhistory" | "my history" => return self.my_history(sender),
            "shame" | "wall of shame" | "wallofshame" | "losers" | "worst" => return self.shame(),
            "parlays" | "my parlays" => return self.my_parlays(sender),
            "check" => return self.check(channel).await,
            "props" => return self.props_overview(),
            _ => {}
        }

        if let Some(caps) = PARLAY_RESOLVE_RE.captures(&clean) {
            let outcome = caps.get(1).unwrap().as_str().to_lowercase();
            let id = caps.get(2).unwrap().as_str().parse().unwrap_or(0);
            return self.resolve_parlay(sender, id, &outcome);
        }
        if let Some(caps) = PARLAY_DELETE_RE.captures(&clean) {
            let id = caps.get(1).unwrap().as_str().parse().unwrap_or(0);
            return self.delete_parlay(sender, id);
        }
        if let Some(caps) = PARLAY_NEW_RE.captures(&clean) {
            let rest = caps.get(1).map(|m| m.as_str()).unwrap_or("");
            return self.new_parlay(channel, sender, rest);
        }

        if let Some(caps) = SCORES_RE.captures(&clean) {
            let sport = caps.get(1).map(|m| m.as_str()).unwrap_or("nba");
            return self.scores_report(sport).await;
        }
        if let Some(caps) = LINES_RE.captures(&clean) {
            let query = caps.get(1).map(|m| m.as_str().trim()).unwrap_or("");
            let query = if query.is_empty() { "nba" } else { query };
            return self.lines_report(query).await;
        }

        for pattern in SETTLE_PATTERNS.iter() {
            if let Some(caps) = pattern.captures(&clean) {
                let first = caps.get(1).unwrap().as_str();
                let second = caps.get(2).unwrap().as_str();
                // One group is the bet id, the other the winner; which is
                // which depends on the phrasing.
                let (id, winner) = if first.chars().all(|c| c.is_ascii_digit()) {
                    (first.parse().unwrap_or(0), second)
                } else {
                    (second.parse().unwrap_or(0), first)
                };
                return self.settle(id, winner);
            }
        }

        if let Some(caps) = CANCEL_RE.captures(&clean) {
            let id = caps.get(1).unwrap().as_str().parse().unwrap_or(0);
            return self.cancel(id);
        }

        if let Some(parsed) = parse_bet(text, config::bot_user_id(), sender) {
            let new = NewWager {
                channel: channel.to_string(),
                participant_a: parsed.participant_a.clone(),
                participant_b: parsed.participant_b.clone(),
                amount: parsed.amount.clone(),
                description: parsed.description.clone(),
                created_by: sender.to_string(),
            };
            return match self.wagers.create(new) {
                Ok(id) => format!(
                    "Bet #{} recorded! {} vs {} for {}: {}",
                    id,
                    mention(&parsed.participant_a),
                    mention(&parsed.participant_b),
                    parsed.amount,
                    parsed.description
                ),
                Err(err) => format!("Couldn't record that bet: {}", err),
            };
        }

        "I didn't understand that. Try `help` for usage info.".to_string()
    }

    // === Bets ===

    fn list_open(&self, channel: Option<&str>, header: &str, empty: &str) -> String {
        let bets = self.wagers.list_open(channel);
        if bets.is_empty() {
            return empty.to_string();
        }
        let mut lines = vec![header.to_string()];
        lines.extend(bets.iter().map(wager_line));
        lines.join("\n")
    }

    fn history(&self, channel: &str) -> String {
        let bets = self.wagers.list_resolved(Some(channel), config::history_limit());
        if bets.is_empty() {
            return "No bet history in this channel!".to_string();
        }
        let mut lines = vec!["*Recent Bet History:*".to_string()];
        lines.extend(bets.iter().map(resolved_wager_line));
        lines.join("\n")
    }

    fn my_open(&self, sender: &str) -> String {
        let mine: Vec<Wager> = self
            .wagers
            .list_open(None)
            .into_iter()
            .filter(|w| w.involves(sender))
            .collect();
        if mine.is_empty() {
            return "You have no open bets!".to_string();
        }
        let mut lines = vec!["*Your Open Bets:*".to_string()];
        lines.extend(mine.iter().map(wager_line));
        lines.join("\n")
    }

    fn my_history(&self, sender: &str) -> String {
        let mine: Vec<Wager> = self
            .wagers
            .list_settled(None, None)
            .into_iter()
            .filter(|w| w.involves(sender))
            .take(config::history_limit())
            .collect();
        if mine.is_empty() {
            return "You have no bet history yet!".to_string();
        }

        let mut wins = 0;
        let mut losses = 0;
        let mut lines = vec!["*Your Bet History:*".to_string()];
        for bet in &mine {
            let won = bet.winner.as_deref() == Some(sender);
            if won {
                wins += 1;
            } else {
                losses += 1;
            }
            let opponent = bet.counterparty(sender).unwrap_or("?");
            lines.push(format!(
                "• {} {} vs {}: {}",
                if won { "WON" } else { "LOST" },
                bet.amount,
                mention(opponent),
                bet.description
            ));
        }
        lines.push(format!("\n*Record: {}W - {}L*", wins, losses));
        lines.join("\n")
    }

    fn settle(&self, id: u64, winner: &str) -> String {
        match self.try_settle(id, winner) {
            Ok(wager) => {
                let loser = wager.counterparty(winner).unwrap_or("?");
                format!(
                    "Bet #{} settled! {} wins {} from {}!",
                    id,
                    mention(winner),
                    wager.amount,
                    mention(loser)
                )
            }
            Err(SettleError::NotFound(id)) => format!("Bet #{} not found!", id),
            Err(SettleError::AlreadyResolved { id, status }) => {
                format!("Bet #{} is already {}!", id, status)
            }
            Err(SettleError::NotAParticipant) => {
                "Winner must be one of the people in the bet!".to_string()
            }
        }
    }

    /// The checks report without mutating; the transition itself is the
    /// store's settle-if-open, so a concurrent duplicate loses cleanly.
    fn try_settle(&self, id: u64, winner: &str) -> Result<Wager, SettleError> {
        let wager = self.wagers.get(id).ok_or(SettleError::NotFound(id))?;
        if wager.status != WagerStatus::Open {
            return Err(SettleError::AlreadyResolved { id, status: wager.status });
        }
        if !wager.involves(winner) {
            return Err(SettleError::NotAParticipant);
        }
        if !self.wagers.settle_if_open(id, winner) {
            let status = self.wagers.get(id).map(|w| w.status).unwrap_or(wager.status);
            return Err(SettleError::AlreadyResolved { id, status });
        }
        self.wagers.get(id).ok_or(SettleError::NotFound(id))
    }

    fn cancel(&self, id: u64) -> String {
        if self.wagers.cancel_if_open(id) {
            format!("Bet #{} cancelled!", id)
        } else {
            format!("Couldn't cancel bet #{} (not found or already resolved)", id)
        }
    }

    // === Ledger ===

    fn balance(&self, sender: &str) -> String {
        let settled = self.wagers.list_settled(None, None);
        let balance = ledger::balances(&settled).get(sender).copied().unwrap_or(0.0);

        let mut lines = Vec::new();
        if balance > 0.0 {
            lines.push(format!("*You are up {}*", money(balance)));
        } else if balance < 0.0 {
            lines.push(format!("*You are down {}*", money(balance.abs())));
        } else {
            lines.push("*You are even*".to_string());
        }

        let debts = ledger::debts_for(sender, &settled);
        let mut entries: Vec<(&String, &f64)> = debts.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        let mut they_owe = Vec::new();
        let mut you_owe = Vec::new();
        for (other, net) in entries {
            if *net > 0.0 {
                they_owe.push(format!("{} owes you {}", mention(other), money(*net)));
            } else if *net < 0.0 {
                you_owe.push(format!("You owe {} {}", mention(other), money(net.abs())));
            }
        }
        if !you_owe.is_empty() {
            lines.push(format!("\n{}", you_owe.join("\n")));
        }
        if !they_owe.is_empty() {
            lines.push(format!("\n{}", they_owe.join("\n")));
        }
        lines.join("\n")
    }

    fn leaderboard(&self) -> String {
        let settled = self.wagers.list_settled(None, None);
        let balances = ledger::balances(&settled);
        if balances.is_empty() {
            return "No settled bets yet - no balances to show!".to_string();
        }

        let mut sorted: Vec<(&String, &f64)> = balances.iter().collect();
        sorted.sort_by(|a, b| {
            b.1.partial_cmp(a.1).unwrap_or(std::cmp::Ordering::Equal).then(a.0.cmp(b.0))
        });

        let mut lines = vec!["*Leaderboard:*".to_string()];
        for (user, balance) in sorted {
            let formatted = if *balance > 0.0 {
                format!("+{}", money(*balance))
            } else {
                money(*balance)
            };
            lines.push(format!("{}: {}", mention(user), formatted));
        }
        lines.join("\n")
    }

    fn shame(&self) -> String {
        let settled = self.wagers.list_settled(None, None);
        let records = ledger::records(&settled);
        if records.is_empty() {
            return "No settled bets yet!".to_string();
        }

        let min_games = config::shame_min_games();
        let mut eligible: Vec<(&String, &ledger::Record)> = records
            .iter()
            .filter(|(_, r)| r.total() >= min_games)
            .collect();
        if eligible.is_empty() {
            return "Not enough bets to determine the wall of shame!".to_string();
        }
        eligible.sort_by(|a, b| {
            a.1.win_pct()
                .partial_cmp(&b.1.win_pct())
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.0.cmp(b.0))
        });

        let mut lines = vec!["*Wall of Shame:*".to_string()];
        for (i, (user, record)) in eligible.iter().take(5).enumerate() {
            lines.push(format!(
                "{}. {}: {}W-{}L ({:.0}%)",
                i + 1,
                mention(user),
                record.wins,
                record.losses,
                record.win_pct()
            ));
        }
        lines.join("\n")
    }

    // === Parlays ===

    fn my_parlays(&self, sender: &str) -> String {
        let open = self.parlays.list_by_owner(sender, Some(ParlayStatus::Open));
        if open.is_empty() {
            return "You have no open parlays! Start one with `parlay $20 Lakers ML, Over 220`"
                .to_string();
        }
        let cards: Vec<String> = open.iter().map(parlay_card).collect();
        format!("*Your Open Parlays:*\n\n{}", cards.join("\n\n"))
    }

    fn new_parlay(&self, channel: &str, sender: &str, rest: &str) -> String {
        let rest = rest.trim();
        let (stake, legs_text) = match STAKE_PREFIX_RE.captures(rest) {
            Some(caps) => {
                let stake = format!("${}", caps.get(1).unwrap().as_str());
                (Some(stake), &rest[caps.get(0).unwrap().end()..])
            }
            None => (None, rest),
        };

        let legs = parse_legs(legs_text);
        if legs.is_empty() {
            return "Just send me your picks!\n\nExamples:\n`parlay $20 Lakers ML, Chiefs -3, Over 220`\nor one pick per line."
                .to_string();
        }

        match self.parlays.create(sender, channel, stake, legs, SlipSource::Manual) {
            Ok(id) => {
                let parlay = self.parlays.get(id).expect("parlay just created");
                format!("✅ *Parlay #{} registered!*\n\n{}", id, parlay_card(&parlay))
            }
            Err(err) => format!("Couldn't record that parlay: {}", err),
        }
    }

    fn resolve_parlay(&self, sender: &str, id: u64, outcome: &str) -> String {
        let Some(parlay) = self.parlays.get(id) else {
            return format!("Parlay #{} not found!", id);
        };
        if parlay.owner != sender {
            return "You can only update your own parlays!".to_string();
        }
        if parlay.status != ParlayStatus::Open {
            return format!("Parlay #{} is already {}!", id, parlay.status);
        }

        let (status, result) = match outcome {
            "won" => (ParlayStatus::Won, parlay.potential_payout().map(money)),
            "lost" => (ParlayStatus::Lost, None),
            _ => (ParlayStatus::Pushed, None),
        };
        if !self.parlays.update_status_if_open(id, status, result.clone()) {
            return format!("Parlay #{} is already resolved!", id);
        }

        match status {
            ParlayStatus::Won => match result {
                Some(payout) => format!("Parlay #{} marked as WON! You won {}!", id, payout),
                None => format!("Parlay #{} marked as WON!", id),
            },
            ParlayStatus::Lost => {
                format!("Parlay #{} marked as LOST. Better luck next time!", id)
            }
            _ => format!("Parlay #{} pushed. Stake returned.", id),
        }
    }

    fn delete_parlay(&self, sender: &str, id: u64) -> String {
        let Some(parlay) = self.parlays.get(id) else {
            return format!("Parlay #{} not found!", id);
        };
        if parlay.owner != sender {
            return "You can only delete your own parlays!".to_string();
        }
        self.parlays.delete(id);
        format!("Parlay #{} deleted.", id)
    }

    /// Register a parlay from OCR'd betting-slip lines (the OCR engine is
    /// an external collaborator; it hands over recognized text lines).
    pub fn register_slip(
        &self,
        channel: &str,
        owner: &str,
        lines: &[String],
        stake: Option<String>,
    ) -> String {
        let legs = parse_slip_lines(lines);
        if legs.is_empty() {
            return "Couldn't read any picks from that slip. Type them with `parlay ...` instead."
                .to_string();
        }
        match self.parlays.create(owner, channel, stake, legs, SlipSource::Screenshot) {
            Ok(id) => {
                let parlay = self.parlays.get(id).expect("parlay just created");
                format!("✅ *Parlay #{} registered!*\n\n{}", id, parlay_card(&parlay))
            }
            Err(err) => format!("Couldn't record that slip: {}", err),
        }
    }

    // === Feeds ===

    async fn scores_report(&self, sport: &str) -> String {
        if sport_path(sport).is_none() {
            return format!("Unknown sport '{}'. Try: nba, nfl, mlb, nhl, epl", sport);
        }
        match self.scores.fetch_scores(sport).await {
            Ok(games) if !games.is_empty() => {
                let mut lines = vec![format!("*{} Scores:*", sport.to_uppercase())];
                lines.extend(games.iter().take(10).map(game_line));
                lines.join("\n")
            }
            Ok(_) => format!("No {} games right now.", sport.to_uppercase()),
            Err(err) => {
                warn!(sport, "score fetch failed: {:#}", err);
                format!("Couldn't fetch {} scores right now.", sport.to_uppercase())
            }
        }
    }

    async fn lines_report(&self, query: &str) -> String {
        if sport_path(query).is_some() {
            return match self.scores.fetch_lines(query).await {
                Ok(lines) if !lines.is_empty() => {
                    let blocks: Vec<String> = lines.iter().map(odds_block).collect();
                    format!("*{} Lines:*\n\n{}", query.to_uppercase(), blocks.join("\n\n"))
                }
                Ok(_) => format!("No games/odds found for {}", query.to_uppercase()),
                Err(err) => {
                    warn!(query, "lines fetch failed: {:#}", err);
                    format!("Couldn't fetch {} lines right now.", query.to_uppercase())
                }
            };
        }

        // Not a sport keyword: search team names across the big four.
        let query_lower = query.to_lowercase();
        let mut matching = Vec::new();
        for sport in ["nba", "nfl", "mlb", "nhl"] {
            match self.scores.fetch_lines(sport).await {
                Ok(lines) => matching.extend(lines.into_iter().filter(|l| {
                    l.home.to_lowercase().contains(&query_lower)
                        || l.away.to_lowercase().contains(&query_lower)
                })),
                Err(err) => warn!(sport, "lines fetch failed: {:#}", err),
            }
        }

        if matching.is_empty() {
            return format!(
                "No games found for '{}'. Try a team name or sport (nba, nfl, mlb, nhl)",
                query
            );
        }
        let blocks: Vec<String> = matching.iter().map(odds_block).collect();
        format!("*Lines for '{}':*\n\n{}", query, blocks.join("\n\n"))
    }

    async fn check(&self, channel: &str) -> String {
        let open = self.wagers.list_open(Some(channel));
        if open.is_empty() {
            return "No open bets to check!".to_string();
        }

        let games = self.scores.fetch_all_scores(config::check_sports()).await;
        let matches: Vec<(&Wager, &tracker::types::Game)> = open
            .iter()
            .filter_map(|bet| match_game(&bet.description, &games).map(|game| (bet, game)))
            .collect();

        if matches.is_empty() {
            return "Couldn't auto-match any bets to recent games. You can settle manually with `settle <id> winner @person`"
                .to_string();
        }

        let mut lines = vec!["*Potential bet matches found:*".to_string()];
        for (bet, game) in matches {
            lines.push(format!("\n*Bet #{}*: {}", bet.id, bet.description));
            lines.push(format!("  Matched game: {} vs {}", game.away_team, game.home_team));
            lines.push(format!(
                "  Result: {} - {}, Winner: {}",
                game.away_score,
                game.home_score,
                game.winner.as_deref().unwrap_or("?")
            ));
            lines.push(format!("  → To settle: `settle {} winner @person`", bet.id));
        }
        lines.join("\n")
    }

    // === Projections ===

    /// Feed a projections CSV upload into the snapshot store.
    pub fn load_projections(&self, csv: &str) -> String {
        match self.projections.load(csv) {
            Ok(count) => format!(
                "✅ Projections loaded! Parsed {} players.\nUse `props` to see them.",
                count
            ),
            Err(err) => {
                warn!("projections upload rejected: {:#}", err);
                "That doesn't look like projections data. Expected columns: Player, Team, PTS, AST, ..."
                    .to_string()
            }
        }
    }

    /// `props` with no prop lines available: show the top of the snapshot.
    fn props_overview(&self) -> String {
        let Some(snapshot) = self.projections.current() else {
            return "No projections loaded. Upload the CSV first!".to_string();
        };

        let mut lines = vec![format!(
            "*Projections* _(loaded {})_",
            snapshot.loaded_at.format("%Y-%m-%d %H:%M")
        )];
        lines.push("\n*Top Points:*".to_string());
        for (i, p) in snapshot.top_by(10, |p| p.pts).iter().enumerate() {
            lines.push(format!("{}. {} ({}) - {:.1} PTS", i + 1, p.name, p.team, p.pts));
        }
        lines.push("\n*Top Assists:*".to_string());
        for (i, p) in snapshot.top_by(10, |p| p.ast).iter().enumerate() {
            lines.push(format!("{}. {} ({}) - {:.1} AST", i + 1, p.name, p.team, p.ast));
        }
        lines.join("\n")
    }

    /// Compare externally supplied prop lines against the snapshot.
    pub fn props_report(&self, props: &[PropLine]) -> String {
        let Some(snapshot) = self.projections.current() else {
            return "No projections loaded. Upload the CSV first!".to_string();
        };

        let edges = find_edges(&snapshot, props);
        if edges.is_empty() {
            return "No edges found for those lines.".to_string();
        }

        let mut lines = vec!["*Projections vs Prop Lines - Biggest Edges*".to_string()];
        for edge in edges.iter().take(10) {
            lines.push(format!(
                "• {} ({}) {}: line {} | proj {:.1} | *{} ({:+.1})*",
                edge.player,
                edge.team,
                edge.category,
                edge.line,
                edge.projection,
                edge.lean(),
                edge.delta
            ));
        }
        lines.join("\n")
    }
}
