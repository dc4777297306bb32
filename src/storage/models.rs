use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Strips the path separator characters that are never allowed in stored text.
pub fn sanitize(text: &str) -> String {
    text.chars().filter(|&c| c != '/' && c != '\\').collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub id: String,
    pub text: String,
    pub user_added: String,
    pub date_added: DateTime<Utc>,
}

impl Quote {
    pub fn new(text: &str, user_added: &str) -> Self {
        Quote {
            id: Uuid::new_v4().to_string(),
            text: sanitize(text),
            user_added: user_added.to_string(),
            date_added: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub user: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter {
    pub id: String,
    pub name: String,
    pub count: i64,
    /// Sorted descending by count, one entry per user.
    pub scoreboard: Vec<ScoreEntry>,
}

impl Counter {
    pub fn new(name: &str) -> Self {
        Counter {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            count: 0,
            scoreboard: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleTextCommand {
    pub id: String,
    /// Lower-cased, without the `!` prefix.
    pub command: String,
    pub text: String,
}

impl SimpleTextCommand {
    pub fn new(command: &str, text: &str) -> Self {
        SimpleTextCommand {
            id: Uuid::new_v4().to_string(),
            command: sanitize(command).to_lowercase(),
            text: sanitize(text),
        }
    }

    pub fn keyword(&self) -> String {
        format!("!{}", self.command)
    }
}
