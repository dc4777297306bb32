use rusqlite::{params, Connection, OptionalExtension};
use crate::storage::models::{Counter, Quote, ScoreEntry, SimpleTextCommand};
use crate::storage::DocumentStore;
use crate::error::BotError;
use std::path::Path;
use chrono::{DateTime, Utc};
use log::{debug, info};
use parking_lot::Mutex;

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, BotError> {
        let conn = Connection::open(&path)?;
        let store = Self::with_connection(conn)?;
        info!("Opened document store at {}", path.as_ref().display());
        Ok(store)
    }

    pub fn open_in_memory() -> Result<Self, BotError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, BotError> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS quotes (
                id TEXT PRIMARY KEY,
                text TEXT NOT NULL,
                user_added TEXT NOT NULL,
                date_added INTEGER NOT NULL
            )",
            [],
        )?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS counters (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL UNIQUE,
                count INTEGER NOT NULL DEFAULT 0,
                scoreboard TEXT NOT NULL DEFAULT '[]'
            )",
            [],
        )?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS simple_text_commands (
                id TEXT PRIMARY KEY,
                command TEXT NOT NULL UNIQUE,
                text TEXT NOT NULL
            )",
            [],
        )?;

        debug!("Document store schema created or updated successfully");

        Ok(SqliteStore {
            conn: Mutex::new(conn),
        })
    }
}

#[async_trait::async_trait]
impl DocumentStore for SqliteStore {
    async fn find_quotes(&self) -> Result<Vec<Quote>, BotError> {
        let query = "SELECT id, text, user_added, date_added FROM quotes ORDER BY date_added";
        let conn = self.conn.lock();
        let mut stmt = conn.prepare_cached(query)?;
        let rows = stmt.query_map([], |row| {
            Ok(Quote {
                id: row.get(0)?,
                text: row.get(1)?,
                user_added: row.get(2)?,
                date_added: DateTime::from_timestamp(row.get::<_, i64>(3)?, 0)
                    .unwrap_or_else(Utc::now),
            })
        })?;

        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    async fn create_quote(&self, quote: &Quote) -> Result<(), BotError> {
        let query = "INSERT INTO quotes (id, text, user_added, date_added) VALUES (?1, ?2, ?3, ?4)";
        let conn = self.conn.lock();
        let mut stmt = conn.prepare_cached(query)?;
        stmt.execute(params![quote.id, quote.text, quote.user_added, quote.date_added.timestamp()])?;
        Ok(())
    }

    async fn find_counter(&self, name: &str) -> Result<Option<Counter>, BotError> {
        let query = "SELECT id, name, count, scoreboard FROM counters WHERE name = ?1";
        let row = {
            let conn = self.conn.lock();
            let mut stmt = conn.prepare_cached(query)?;
            stmt.query_row([name], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, i64>(2)?,
                    row.get::<_, String>(3)?,
                ))
            })
            .optional()?
        };

        match row {
            Some((id, name, count, scoreboard)) => {
                let scoreboard: Vec<ScoreEntry> = serde_json::from_str(&scoreboard)?;
                Ok(Some(Counter { id, name, count, scoreboard }))
            }
            None => Ok(None),
        }
    }

    async fn create_counter(&self, name: &str) -> Result<Counter, BotError> {
        let counter = Counter::new(name);
        let query = "INSERT INTO counters (id, name, count, scoreboard) VALUES (?1, ?2, ?3, ?4)";
        let scoreboard = serde_json::to_string(&counter.scoreboard)?;
        let conn = self.conn.lock();
        let mut stmt = conn.prepare_cached(query)?;
        stmt.execute(params![counter.id, counter.name, counter.count, scoreboard])?;
        Ok(counter)
    }

    async fn save_counter(&self, counter: &Counter) -> Result<(), BotError> {
        let query = "INSERT INTO counters (id, name, count, scoreboard) VALUES (?1, ?2, ?3, ?4)
                     ON CONFLICT(name) DO UPDATE SET count = excluded.count, scoreboard = excluded.scoreboard";
        let scoreboard = serde_json::to_string(&counter.scoreboard)?;
        let conn = self.conn.lock();
        let mut stmt = conn.prepare_cached(query)?;
        stmt.execute(params![counter.id, counter.name, counter.count, scoreboard])?;
        debug!("Saved counter {} = {}", counter.name, counter.count);
        Ok(())
    }

    async fn find_simple_commands(&self) -> Result<Vec<SimpleTextCommand>, BotError> {
        let query = "SELECT id, command, text FROM simple_text_commands ORDER BY rowid";
        let conn = self.conn.lock();
        let mut stmt = conn.prepare_cached(query)?;
        let rows = stmt.query_map([], |row| {
            Ok(SimpleTextCommand {
                id: row.get(0)?,
                command: row.get(1)?,
                text: row.get(2)?,
            })
        })?;

        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    async fn create_simple_command(&self, command: &SimpleTextCommand) -> Result<(), BotError> {
        let query = "INSERT INTO simple_text_commands (id, command, text) VALUES (?1, ?2, ?3)";
        let conn = self.conn.lock();
        let mut stmt = conn.prepare_cached(query)?;
        stmt.execute(params![command.id, command.command, command.text])?;
        Ok(())
    }

    async fn delete_simple_command(&self, command: &str) -> Result<bool, BotError> {
        let query = "DELETE FROM simple_text_commands WHERE command = ?1";
        let conn = self.conn.lock();
        let mut stmt = conn.prepare_cached(query)?;
        let deleted = stmt.execute([command])?;
        Ok(deleted > 0)
    }
}
