use crate::commands::command_system::{Command, InvocationContext};
use crate::commands::messages::{self, render};
use crate::error::BotError;
use crate::storage::models::sanitize;
use crate::storage::{DocumentStore, Quote};
use chrono::{DateTime, Local, TimeZone, Utc};
use log::{debug, error};
use parking_lot::RwLock;
use rand::seq::SliceRandom;
use std::sync::Arc;

/// All quotes, loaded once and appended to as chat adds more.
pub struct QuoteBook {
    quotes: RwLock<Vec<Quote>>,
    store: Arc<dyn DocumentStore>,
}

impl QuoteBook {
    pub async fn load(store: Arc<dyn DocumentStore>) -> Result<Self, BotError> {
        let quotes = store.find_quotes().await?;
        debug!("Loaded {} quotes", quotes.len());
        Ok(QuoteBook {
            quotes: RwLock::new(quotes),
            store,
        })
    }

    pub fn len(&self) -> usize {
        self.quotes.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn random(&self) -> Option<Quote> {
        self.quotes.read().choose(&mut rand::thread_rng()).cloned()
    }

    /// Returns `None` when there is nothing left to save after sanitising.
    pub async fn add(&self, text: &str, user: &str) -> Option<Quote> {
        if sanitize(text).trim().is_empty() {
            return None;
        }

        let quote = Quote::new(text, user);
        self.quotes.write().push(quote.clone());
        if let Err(e) = self.store.create_quote(&quote).await {
            error!("Failed to persist quote from {}: {}", user, e);
        }
        Some(quote)
    }
}

pub struct AddQuoteCommand {
    pub quotes: Arc<QuoteBook>,
}

#[async_trait::async_trait]
impl Command for AddQuoteCommand {
    async fn execute(&self, ctx: &InvocationContext) -> Result<Option<String>, BotError> {
        let added = self.quotes.add(ctx.text_after(1), &ctx.user_name).await;
        Ok(added.map(|_| messages::QUOTE_SAVED.to_string()))
    }
}

/// Calendar date of `at` as seen in `tz`, e.g. `3/4/2024`.
pub fn quote_date<Tz: TimeZone>(at: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.with_timezone(tz).format("%-m/%-d/%Y").to_string()
}

pub struct QuoteCommand {
    pub quotes: Arc<QuoteBook>,
}

#[async_trait::async_trait]
impl Command for QuoteCommand {
    async fn execute(&self, _ctx: &InvocationContext) -> Result<Option<String>, BotError> {
        let Some(quote) = self.quotes.random() else {
            return Ok(Some(messages::NO_QUOTES.to_string()));
        };

        let date = quote_date(&quote.date_added, &Local);
        let reply = render(
            messages::QUOTE,
            &[("quote", &quote.text), ("name", &quote.user_added), ("date", &date)],
        )?;
        Ok(Some(reply))
    }
}
