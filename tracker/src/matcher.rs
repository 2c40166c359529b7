//! Matching wager descriptions against finished games.
//!
//! A deliberately weak heuristic: the first completed game whose team name
//! or abbreviation appears inside the description wins. It can pick the
//! wrong game when short or generic names collide, so the result is only a
//! suggestion; callers must always offer manual settlement.

use crate::types::Game;

/// Find the first completed game mentioned by `description`, in the order
/// the caller supplied the games. Identifiers shorter than 3 characters are
/// skipped to keep two-letter abbreviations from matching everything.
pub fn match_game<'a>(description: &str, games: &'a [Game]) -> Option<&'a Game> {
    let desc = description.to_lowercase();

    for game in games {
        if !game.completed {
            continue;
        }

        let idents = [
            game.home_team.as_str(),
            game.away_team.as_str(),
            game.home_abbrev.as_str(),
            game.away_abbrev.as_str(),
        ];

        for ident in idents {
            let ident = ident.to_lowercase();
            if ident.len() > 2 && desc.contains(&ident) {
                return Some(game);
            }
        }
    }

    None
}
