//! Odds notation conversion.
//!
//! Both American (`+150`, `-110`) and decimal (`1.91`) notations show up in
//! parlay legs and betting-slip screenshots; everything downstream works in
//! decimal multipliers.

/// Convert an odds token to a decimal payout multiplier.
///
/// A token with a decimal point and no sign prefix is taken as already
/// decimal. A signed integer is American: `+p` risks $100 to win $p, `-n`
/// risks $n to win $100. Anything unreadable collapses to the neutral `1.0`
/// multiplier rather than failing; odds are advisory, never blocking. Note
/// the neutral value is indistinguishable from true even-money decimal odds.
pub fn parse_odds(raw: &str) -> f64 {
    let s = raw.trim();

    if s.contains('.') && !s.starts_with('+') && !s.starts_with('-') {
        if let Ok(v) = s.parse::<f64>() {
            return v;
        }
    }

    if let Ok(n) = s.replace('+', "").parse::<i64>() {
        if n > 0 {
            return 1.0 + n as f64 / 100.0;
        }
        if n < 0 {
            return 1.0 + 100.0 / n.unsigned_abs() as f64;
        }
        // A literal zero has no sensible American reading.
        return 1.0;
    }

    1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn american_plus() {
        assert!(close(parse_odds("+150"), 2.5));
        assert!(close(parse_odds("+100"), 2.0));
        assert!(close(parse_odds("150"), 2.5));
    }

    #[test]
    fn american_minus() {
        assert!(close(parse_odds("-150"), 1.6667));
        assert!(close(parse_odds("-110"), 1.9091));
    }

    #[test]
    fn decimal_passthrough() {
        assert!(close(parse_odds("2.5"), 2.5));
        assert!(close(parse_odds("1.91"), 1.91));
    }

    #[test]
    fn garbage_is_neutral() {
        assert!(close(parse_odds("garbage"), 1.0));
        assert!(close(parse_odds(""), 1.0));
        assert!(close(parse_odds("0"), 1.0));
    }

    #[test]
    fn never_nonpositive_for_valid_american() {
        for n in [-10_000i64, -500, -101, -100, -1, 1, 100, 9_999] {
            let m = parse_odds(&n.to_string());
            assert!(m > 0.0, "odds {} gave multiplier {}", n, m);
        }
    }
}
