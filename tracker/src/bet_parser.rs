//! Free-form bet message parsing.
//!
//! A mention like `@betbot @alice vs @bob $50 on the finals` has to become a
//! structured two-party wager. The parser is an ordered cascade of pattern
//! rules: the most explicit phrasings are tried first and the first rule
//! that matches wins, so a well-formed sentence can never be misread by a
//! greedier fallback. When no rule matches, a last-resort scan collects
//! whatever mentions and numbers are present and makes a best-effort guess.
//! Total failure is `None`; the caller answers with a generic "didn't
//! understand" message.

use regex::Regex;
use std::sync::LazyLock;

use crate::normalize::{collapse_whitespace, strip_bot_mention};

/// Parsed fields for a new wager, ready for the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedWager {
    pub participant_a: String,
    pub participant_b: String,
    /// Always dollar-prefixed, e.g. `"$50"` or `"$12.50"`.
    pub amount: String,
    pub description: String,
}

/// How a rule's capture groups map onto wager fields.
#[derive(Debug, Clone, Copy)]
enum RuleShape {
    /// Groups are (participant_a, participant_b, amount, description).
    TwoParty { default_desc: Option<&'static str> },
    /// Groups are (participant_b, amount, description); the sender is side A.
    SenderFirst,
    /// Groups are (amount, participant_b, description); the sender is side A.
    AmountFirst,
}

/// One entry in the cascade: a compiled pattern plus its field mapping.
struct BetRule {
    name: &'static str,
    shape: RuleShape,
    pattern: Regex,
}

impl BetRule {
    fn try_match(&self, text: &str, sender: &str) -> Option<ParsedWager> {
        let caps = self.pattern.captures(text)?;
        let grab = |i: usize| caps.get(i).map(|m| m.as_str().trim()).unwrap_or("");

        let parsed = match self.shape {
            RuleShape::TwoParty { default_desc } => {
                let desc = grab(4);
                let desc = if desc.is_empty() {
                    default_desc?.to_string()
                } else {
                    desc.to_string()
                };
                ParsedWager {
                    participant_a: grab(1).to_string(),
                    participant_b: grab(2).to_string(),
                    amount: format!("${}", grab(3)),
                    description: desc,
                }
            }
            RuleShape::SenderFirst => ParsedWager {
                participant_a: sender.to_string(),
                participant_b: grab(1).to_string(),
                amount: format!("${}", grab(2)),
                description: non_empty_or(grab(3), "bet"),
            },
            RuleShape::AmountFirst => ParsedWager {
                participant_a: sender.to_string(),
                participant_b: grab(2).to_string(),
                amount: format!("${}", grab(1)),
                description: non_empty_or(grab(3), "bet"),
            },
        };

        tracing::debug!(rule = self.name, "bet rule matched");
        Some(parsed)
    }
}

/// Accepted amount syntax everywhere: optional `$`, digits, optional
/// exactly-two-digit cents.
const AMOUNT: &str = r"\$?(\d+(?:\.\d{2})?)";

/// The cascade, most to least specific. Order is a precedence policy, not an
/// implementation detail.
static RULES: LazyLock<Vec<BetRule>> = LazyLock::new(|| {
    vec![
        BetRule {
            name: "versus",
            shape: RuleShape::TwoParty { default_desc: None },
            pattern: Regex::new(&format!(
                r"(?i)<@(\w+)>\s+(?:vs\.?|versus)\s+<@(\w+)>\s+{AMOUNT}\s+(.+)"
            ))
            .unwrap(),
        },
        BetRule {
            name: "owes",
            shape: RuleShape::TwoParty { default_desc: Some("debt") },
            pattern: Regex::new(&format!(
                r"(?i)<@(\w+)>\s+owes\s+<@(\w+)>\s+{AMOUNT}\s*(?:for\s+)?(.*)"
            ))
            .unwrap(),
        },
        BetRule {
            name: "i_bet",
            shape: RuleShape::SenderFirst,
            pattern: Regex::new(&format!(r"(?i)(?:i\s+)?bet\s+<@(\w+)>\s+{AMOUNT}\s*(.*)"))
                .unwrap(),
        },
        BetRule {
            name: "mention_amount",
            shape: RuleShape::SenderFirst,
            pattern: Regex::new(&format!(
                r"(?i)<@(\w+)>\s+{AMOUNT}\s+(?:on|that|for)?\s*(.*)"
            ))
            .unwrap(),
        },
        BetRule {
            name: "amount_mention",
            shape: RuleShape::AmountFirst,
            pattern: Regex::new(&format!(
                r"(?i){AMOUNT}\s+(?:with|against|vs)?\s*<@(\w+)>\s*(.*)"
            ))
            .unwrap(),
        },
    ]
});

static MENTION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<@(\w+)>").unwrap());
static DOLLAR_AMOUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$(\d+(?:\.\d{2})?)").unwrap());
/// Bare numbers only count when standalone and at least two digits, so
/// jersey numbers and ids embedded in words stay out of the amount pool.
static BARE_AMOUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|[\s,])(\d{2,})(?:[\s,.]|$)").unwrap());
static LEAD_BOILERPLATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(bet|i bet|on|that|for)\s*").unwrap());

/// Parse a mention message into wager fields.
///
/// The bot's own mention is stripped first; `sender` fills in the implicit
/// first participant for the one-sided phrasings.
pub fn parse_bet(text: &str, bot_user_id: &str, sender: &str) -> Option<ParsedWager> {
    let text = strip_bot_mention(text, bot_user_id);

    for rule in RULES.iter() {
        if let Some(parsed) = rule.try_match(&text, sender) {
            return Some(parsed);
        }
    }

    last_resort_scan(&text, bot_user_id, sender)
}

/// Rule 6: no phrasing matched, so scavenge the message for mentions and
/// numeric tokens. Dollar-prefixed tokens outrank bare ones, the largest
/// candidate wins (big numbers are likelier to be the stake than a number in
/// the description), and amounts below 1 are discarded.
fn last_resort_scan(text: &str, bot_user_id: &str, sender: &str) -> Option<ParsedWager> {
    let mut mentions: Vec<&str> = Vec::new();
    for caps in MENTION_RE.captures_iter(text) {
        let id = caps.get(1).unwrap().as_str();
        if id != bot_user_id && !mentions.contains(&id) {
            mentions.push(id);
        }
    }

    let collect = |re: &Regex| -> Vec<&str> {
        re.captures_iter(text)
            .map(|c| c.get(1).unwrap().as_str())
            .filter(|a| a.parse::<f64>().map(|v| v >= 1.0).unwrap_or(false))
            .collect()
    };
    let dollar = collect(&DOLLAR_AMOUNT_RE);
    let bare = collect(&BARE_AMOUNT_RE);

    let largest = |tokens: &[&str]| -> Option<String> {
        tokens
            .iter()
            .max_by(|a, b| {
                let av = a.parse::<f64>().unwrap_or(0.0);
                let bv = b.parse::<f64>().unwrap_or(0.0);
                av.partial_cmp(&bv).unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|s| s.to_string())
    };
    let amount = largest(&dollar).or_else(|| largest(&bare))?;

    let (participant_a, participant_b) = match mentions.as_slice() {
        [] => return None,
        [only] => (sender.to_string(), only.to_string()),
        [first, second, ..] => (first.to_string(), second.to_string()),
    };

    // Rebuild the description from whatever the scan did not consume.
    let mut desc = text.to_string();
    for m in &mentions {
        desc = desc.replace(&format!("<@{}>", m), " ");
    }
    let amount_re = Regex::new(&format!(r"\$?{}", regex::escape(&amount))).unwrap();
    desc = amount_re.replace(&desc, " ").into_owned();
    desc = collapse_whitespace(&desc);
    desc = LEAD_BOILERPLATE_RE.replace(&desc, "").trim().to_string();

    Some(ParsedWager {
        participant_a,
        participant_b,
        amount: format!("${}", amount),
        description: non_empty_or(&desc, "bet"),
    })
}

fn non_empty_or(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOT: &str = "BOT";

    fn parse(text: &str) -> Option<ParsedWager> {
        parse_bet(text, BOT, "SENDER")
    }

    #[test]
    fn versus_rule_takes_precedence() {
        let w = parse("<@BOT> <@A> vs <@B> $50 finals").unwrap();
        assert_eq!(w.participant_a, "A");
        assert_eq!(w.participant_b, "B");
        assert_eq!(w.amount, "$50");
        assert_eq!(w.description, "finals");
    }

    #[test]
    fn versus_spelled_out() {
        let w = parse("<@A> versus <@B> 25 who wins the derby").unwrap();
        assert_eq!(w.amount, "$25");
        assert_eq!(w.description, "who wins the derby");
    }

    #[test]
    fn owes_defaults_description_to_debt() {
        let w = parse("<@BOT> <@U1> owes <@U2> $20").unwrap();
        assert_eq!(w.participant_a, "U1");
        assert_eq!(w.participant_b, "U2");
        assert_eq!(w.amount, "$20");
        assert_eq!(w.description, "debt");
    }

    #[test]
    fn owes_keeps_explicit_reason() {
        let w = parse("<@U1> owes <@U2> $20 for lunch").unwrap();
        assert_eq!(w.description, "lunch");
    }

    #[test]
    fn i_bet_uses_sender_as_side_a() {
        let w = parse("I bet <@B> 50 Lakers win it all").unwrap();
        assert_eq!(w.participant_a, "SENDER");
        assert_eq!(w.participant_b, "B");
        assert_eq!(w.amount, "$50");
        assert_eq!(w.description, "Lakers win it all");
    }

    #[test]
    fn mention_then_amount() {
        let w = parse("<@B> $10 that it rains tomorrow").unwrap();
        assert_eq!(w.participant_a, "SENDER");
        assert_eq!(w.participant_b, "B");
        assert_eq!(w.amount, "$10");
        assert_eq!(w.description, "it rains tomorrow");
    }

    #[test]
    fn amount_then_mention() {
        let w = parse("$15 against <@B> the demo ships friday").unwrap();
        assert_eq!(w.participant_a, "SENDER");
        assert_eq!(w.participant_b, "B");
        assert_eq!(w.amount, "$15");
        assert_eq!(w.description, "the demo ships friday");
    }

    #[test]
    fn cents_are_accepted() {
        let w = parse("<@A> vs <@B> $12.50 closest to the pin").unwrap();
        assert_eq!(w.amount, "$12.50");
    }

    #[test]
    fn fallback_prefers_dollar_token_over_bare() {
        // "100" is incidental and larger; the dollar-prefixed "$20" is the
        // stake. Verify with both token orderings.
        let w = parse("something weird <@A> <@B> maybe $20 after 100 tries").unwrap();
        assert_eq!(w.amount, "$20");
        assert_eq!((w.participant_a.as_str(), w.participant_b.as_str()), ("A", "B"));
        let w = parse("something weird 100 times over <@A> <@B> maybe $20").unwrap();
        assert_eq!(w.amount, "$20");
    }

    #[test]
    fn fallback_picks_largest_bare_amount() {
        let w = parse("crazy stakes <@A> and <@B> maybe 15 or 40 tonight").unwrap();
        assert_eq!(w.amount, "$40");
        assert_eq!(w.participant_a, "A");
        assert_eq!(w.participant_b, "B");
    }

    #[test]
    fn fallback_single_mention_pairs_with_sender() {
        let w = parse("loser buys dinner <@B> 30").unwrap();
        assert_eq!(w.participant_a, "SENDER");
        assert_eq!(w.participant_b, "B");
        assert_eq!(w.amount, "$30");
    }

    #[test]
    fn fallback_discards_sub_dollar_noise() {
        assert!(parse("fraction 0.50 only <@B> here").is_none());
    }

    #[test]
    fn no_mention_fails() {
        assert!(parse("nobody mentioned $50 here").is_none());
    }

    #[test]
    fn no_amount_fails() {
        assert!(parse("<@A> and <@B> disagree about dinner").is_none());
    }

    #[test]
    fn bot_mention_never_becomes_participant() {
        let w = parse("<@BOT> stakes tonight <@BOT> <@B> 25").unwrap();
        assert_eq!(w.participant_a, "SENDER");
        assert_eq!(w.participant_b, "B");
    }
}
