pub mod commands;
pub mod config;
pub mod counters;
pub mod error;
pub mod logging;
pub mod storage;
pub mod twitch;

#[cfg(test)]
mod test_utils;

pub use error::BotError;

use crate::commands::builtins::{self, BuiltinDeps, QuoteBook};
use crate::commands::cooldown::{Clock, SystemClock};
use crate::commands::{CommandRegistry, Dispatcher};
use crate::config::Config;
use crate::counters::CounterHandle;
use crate::storage::{DocumentStore, SqliteStore};
use crate::twitch::api::{FollowageLookup, HttpFollowage};
use crate::twitch::irc::{spawn_rules_broadcast, ChatSink, MessageHandler, TwitchChatClient};
use log::info;
use std::sync::Arc;

pub const DEATH_COUNTER: &str = "deaths";
pub const BOOP_COUNTER: &str = "boops";

pub struct Bot {
    pub config: Config,
    pub dispatcher: Arc<Dispatcher>,
}

/// Loads everything the commands need from the store and registers them.
pub async fn build_dispatcher(
    config: &Config,
    store: Arc<dyn DocumentStore>,
    followage: Arc<dyn FollowageLookup>,
    clock: Arc<dyn Clock>,
) -> Result<Dispatcher, BotError> {
    let quotes = Arc::new(QuoteBook::load(store.clone()).await?);
    let deaths = CounterHandle::load(DEATH_COUNTER, store.clone()).await?;
    let boops = CounterHandle::load(BOOP_COUNTER, store.clone()).await?;

    let registry = CommandRegistry::new().into_shared();
    builtins::register_builtins(
        &registry,
        BuiltinDeps {
            store: store.clone(),
            quotes,
            deaths,
            boops,
            followage,
            streamer_name: config.streamer_display_name(),
            rules_text: config.rules_text.clone(),
            home_channel: config.home_channel().map(str::to_string),
            cooldown: config.command_cooldown(),
            clock,
        },
    );
    builtins::load_simple_commands(&registry, store.as_ref()).await?;

    Ok(Dispatcher::new(registry))
}

pub async fn init(config: Config) -> Result<Bot, BotError> {
    let store: Arc<dyn DocumentStore> = Arc::new(SqliteStore::new(&config.database_path)?);
    let followage: Arc<dyn FollowageLookup> = Arc::new(HttpFollowage::new(&config.followage_base_url));
    let dispatcher = build_dispatcher(&config, store, followage, Arc::new(SystemClock)).await?;

    Ok(Bot {
        config,
        dispatcher: Arc::new(dispatcher),
    })
}

pub async fn run(bot: Bot) -> Result<(), BotError> {
    let config = &bot.config;
    let (client, incoming_messages) =
        TwitchChatClient::connect(&config.bot_username, &config.oauth_token, &config.channels)?;
    let sink: Arc<dyn ChatSink> = Arc::new(client.clone());

    let rules = spawn_rules_broadcast(
        sink.clone(),
        config.channels.clone(),
        config.rules_text.clone(),
        config.rules_interval(),
    );
    let handler = MessageHandler::new(bot.dispatcher.clone(), sink, client.username());

    info!("Bot is now running. Press Ctrl+C to exit.");
    tokio::select! {
        _ = handler.handle_messages(incoming_messages) => {
            info!("Twitch connection closed.");
        }
        signal = tokio::signal::ctrl_c() => {
            signal?;
            info!("Received Ctrl+C, shutting down.");
        }
    }

    if let Some(rules) = rules {
        rules.abort();
    }
    info!("Bot has shut down.");
    Ok(())
}
