pub mod client;
pub mod models;

pub use client::SqliteStore;
pub use models::{Counter, Quote, ScoreEntry, SimpleTextCommand};

use crate::error::BotError;

/// Durable home of every record the bot keeps between restarts.
///
/// The bot only ever reads from it at startup; afterwards the in-memory copy
/// is authoritative and writes are best-effort.
#[async_trait::async_trait]
pub trait DocumentStore: Send + Sync {
    async fn find_quotes(&self) -> Result<Vec<Quote>, BotError>;

    async fn create_quote(&self, quote: &Quote) -> Result<(), BotError>;

    async fn find_counter(&self, name: &str) -> Result<Option<Counter>, BotError>;

    async fn create_counter(&self, name: &str) -> Result<Counter, BotError>;

    async fn save_counter(&self, counter: &Counter) -> Result<(), BotError>;

    async fn find_simple_commands(&self) -> Result<Vec<SimpleTextCommand>, BotError>;

    async fn create_simple_command(&self, command: &SimpleTextCommand) -> Result<(), BotError>;

    /// Returns `false` when no command with that keyword existed.
    async fn delete_simple_command(&self, command: &str) -> Result<bool, BotError>;
}
