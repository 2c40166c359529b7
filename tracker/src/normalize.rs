//! Message text normalization.
//!
//! Every inbound mention runs through here before any parser sees it: the
//! bot's own `<@ID>` token is removed and whitespace is collapsed. The
//! operation is idempotent, so accidental double-normalization is harmless.

/// Strip the bot's own mention token from `text` and tidy whitespace.
pub fn strip_bot_mention(text: &str, bot_user_id: &str) -> String {
    let token = format!("<@{}>", bot_user_id);
    let without = text.replace(&token, " ");
    collapse_whitespace(&without)
}

/// Collapse runs of whitespace to single spaces and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
