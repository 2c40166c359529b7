//! Chat-facing formatting for wagers, parlays, games, and money.
//!
//! All replies are plain chat markdown. Participant ids are rendered as
//! `<@id>` mention tokens and left to the platform to resolve into names.

use tracker::types::{Game, Parlay, ParlayStatus, Wager, WagerStatus};

use crate::scores::GameLine;

/// `$12.50`, always two decimals, sign folded into the prefix.
pub fn money(value: f64) -> String {
    if value < 0.0 {
        format!("-${:.2}", value.abs())
    } else {
        format!("${:.2}", value)
    }
}

pub fn mention(user: &str) -> String {
    format!("<@{}>", user)
}

/// One-line summary of an open wager.
pub fn wager_line(wager: &Wager) -> String {
    format!(
        "*#{}* - {} vs {} for {}: {}",
        wager.id,
        mention(&wager.participant_a),
        mention(&wager.participant_b),
        wager.amount,
        wager.description
    )
}

/// History line including the outcome.
pub fn resolved_wager_line(wager: &Wager) -> String {
    let outcome = match (wager.status, wager.winner.as_deref()) {
        (WagerStatus::Settled, Some(winner)) => format!("won by {}", mention(winner)),
        (WagerStatus::Cancelled, _) => "cancelled".to_string(),
        _ => wager.status.to_string(),
    };
    format!("{} [{}]", wager_line(wager), outcome)
}

/// Multi-line parlay card.
pub fn parlay_card(parlay: &Parlay) -> String {
    let mut lines = vec![format!("*Parlay #{}* - {}", parlay.id, mention(&parlay.owner))];

    if let Some(stake) = &parlay.stake {
        match parlay.potential_payout() {
            Some(payout) => {
                lines.push(format!("Stake: {} → Potential: {}", stake, money(payout)))
            }
            None => lines.push(format!("Stake: {}", stake)),
        }
    }

    lines.push(format!("Legs ({}):", parlay.legs.len()));
    for (i, leg) in parlay.legs.iter().enumerate() {
        let odds = if (leg.odds - 1.0).abs() > f64::EPSILON {
            format!(" ({:.2})", leg.odds)
        } else {
            String::new()
        };
        lines.push(format!("  {}. {}{}", i + 1, leg.pick, odds));
    }

    match parlay.status {
        ParlayStatus::Won => lines.push("*WON!*".to_string()),
        ParlayStatus::Lost => lines.push("*LOST*".to_string()),
        ParlayStatus::Pushed => lines.push("*PUSHED* (stake returned)".to_string()),
        ParlayStatus::Open => {}
    }

    lines.join("\n")
}

/// Scoreboard line for one game.
pub fn game_line(game: &Game) -> String {
    if game.completed {
        format!(
            "{} {} @ {} {} (Final) - Winner: {}",
            game.away_team,
            game.away_score,
            game.home_team,
            game.home_score,
            game.winner.as_deref().unwrap_or("?"),
        )
    } else {
        format!(
            "{} {} @ {} {} (in progress)",
            game.away_team, game.away_score, game.home_team, game.home_score
        )
    }
}

/// Betting-line block for one game.
pub fn odds_block(line: &GameLine) -> String {
    let mut out = vec![format!("*{} @ {}*", line.away, line.home)];
    out.push(format!("  {}", line.status));
    if let Some(score) = &line.score {
        out.push(format!("  Score: {}", score));
    }
    if let Some(spread) = &line.spread {
        out.push(format!("  Spread: {}", spread));
    }
    if let Some(total) = line.total {
        out.push(format!("  O/U: {}", total));
    }
    if let Some(details) = &line.details {
        out.push(format!("  {}", details));
    }
    out.join("\n")
}
