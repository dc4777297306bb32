use std::fmt::Display;
use thiserror::Error;

pub const WHY: &str = "Why @{name}, why???";
pub const QUOTE: &str = "\"{quote}\" - Added by @{name} on {date}";
pub const NO_QUOTES: &str = "No quotes available";
pub const QUOTE_SAVED: &str = "Quote saved!";
pub const DEATH: &str = "{name} has died embarrassingly {count} times on stream!";
pub const BOOP: &str = "{name} booped the snoot! The snoot has been booped {count} times.";
pub const BOOP_LEADERBOARD: &str = "Top Boopers:";
pub const BOOP_PLACEMENT: &str = " {placement}. @{name}: {score} boops,";
pub const COMMAND_EXISTS: &str = "Command already exists.";
pub const COMMAND_ADDED: &str = "Command !{command} added!";
pub const COMMAND_DELETED: &str = "Command deleted.";
pub const COMMAND_NOT_FOUND: &str = "Command not found.";
pub const COUNTER_SET: &str = "{counter} set to {count}.";
pub const SUBSCRIPTION: &str = "Thank you for the subscription @{name}! Enjoy your stay.";
pub const COMMANDS: &str = "Commands:";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TemplateError {
    #[error("No value supplied for placeholder {{{0}}}")]
    Unresolved(String),
}

/// Fills every `{placeholder}` in `template` from `params`.
///
/// Values are inserted verbatim and never re-scanned, so a value may itself
/// contain braces. A placeholder with no matching parameter is an error.
pub fn render(template: &str, params: &[(&str, &dyn Display)]) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return Ok(out);
        };

        let name = &after[..close];
        let value = params
            .iter()
            .find(|(key, _)| *key == name)
            .ok_or_else(|| TemplateError::Unresolved(name.to_string()))?;
        out.push_str(&value.1.to_string());
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    Ok(out)
}

/// Upper-cases the first character, e.g. a counter name for display.
pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
