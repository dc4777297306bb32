//! Doubles for the external collaborators, shared by the unit tests.

use crate::commands::cooldown::Clock;
use crate::error::BotError;
use crate::storage::{Counter, DocumentStore, Quote, SimpleTextCommand};
use crate::twitch::api::FollowageLookup;
use crate::twitch::irc::ChatSink;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

#[derive(Default)]
struct Documents {
    quotes: Vec<Quote>,
    counters: HashMap<String, Counter>,
    commands: Vec<SimpleTextCommand>,
}

#[derive(Default)]
pub struct MemoryStore {
    docs: Mutex<Documents>,
    failing: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_writes(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn counter(&self, name: &str) -> Option<Counter> {
        self.docs.lock().counters.get(name).cloned()
    }

    pub fn quotes(&self) -> Vec<Quote> {
        self.docs.lock().quotes.clone()
    }

    pub fn commands(&self) -> Vec<SimpleTextCommand> {
        self.docs.lock().commands.clone()
    }

    pub fn seed_quote(&self, quote: Quote) {
        self.docs.lock().quotes.push(quote);
    }

    pub fn seed_command(&self, command: SimpleTextCommand) {
        self.docs.lock().commands.push(command);
    }

    fn check_writable(&self) -> Result<(), BotError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(io::Error::new(io::ErrorKind::Other, "store offline").into());
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl DocumentStore for MemoryStore {
    async fn find_quotes(&self) -> Result<Vec<Quote>, BotError> {
        Ok(self.quotes())
    }

    async fn create_quote(&self, quote: &Quote) -> Result<(), BotError> {
        self.check_writable()?;
        self.docs.lock().quotes.push(quote.clone());
        Ok(())
    }

    async fn find_counter(&self, name: &str) -> Result<Option<Counter>, BotError> {
        Ok(self.counter(name))
    }

    async fn create_counter(&self, name: &str) -> Result<Counter, BotError> {
        self.check_writable()?;
        let counter = Counter::new(name);
        self.docs.lock().counters.insert(name.to_string(), counter.clone());
        Ok(counter)
    }

    async fn save_counter(&self, counter: &Counter) -> Result<(), BotError> {
        self.check_writable()?;
        self.docs.lock().counters.insert(counter.name.clone(), counter.clone());
        Ok(())
    }

    async fn find_simple_commands(&self) -> Result<Vec<SimpleTextCommand>, BotError> {
        Ok(self.commands())
    }

    async fn create_simple_command(&self, command: &SimpleTextCommand) -> Result<(), BotError> {
        self.check_writable()?;
        self.docs.lock().commands.push(command.clone());
        Ok(())
    }

    async fn delete_simple_command(&self, command: &str) -> Result<bool, BotError> {
        self.check_writable()?;
        let mut docs = self.docs.lock();
        let before = docs.commands.len();
        docs.commands.retain(|c| c.command != command);
        Ok(docs.commands.len() != before)
    }
}

/// Clock that only moves when told to.
pub struct ManualClock {
    start: Instant,
    offset: Mutex<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        ManualClock {
            start: Instant::now(),
            offset: Mutex::new(Duration::ZERO),
        }
    }

    pub fn advance(&self, by: Duration) {
        *self.offset.lock() += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.start + *self.offset.lock()
    }
}

pub struct StubFollowage {
    reply: Option<String>,
    pub calls: Mutex<Vec<(String, String)>>,
}

impl StubFollowage {
    pub fn answering(reply: &str) -> Self {
        StubFollowage { reply: Some(reply.to_string()), calls: Mutex::new(Vec::new()) }
    }

    pub fn failing() -> Self {
        StubFollowage { reply: None, calls: Mutex::new(Vec::new()) }
    }
}

#[async_trait::async_trait]
impl FollowageLookup for StubFollowage {
    async fn lookup(&self, channel: &str, user: &str) -> Result<String, BotError> {
        self.calls.lock().push((channel.to_string(), user.to_string()));
        self.reply.clone().ok_or(BotError::Followage { status: 404 })
    }
}

#[derive(Default)]
pub struct RecordingSink {
    pub sent: Mutex<Vec<(String, String)>>,
}

impl RecordingSink {
    pub fn messages(&self) -> Vec<(String, String)> {
        self.sent.lock().clone()
    }
}

#[async_trait::async_trait]
impl ChatSink for RecordingSink {
    async fn send(&self, channel: &str, text: &str) -> Result<(), BotError> {
        self.sent.lock().push((channel.to_string(), text.to_string()));
        Ok(())
    }
}
