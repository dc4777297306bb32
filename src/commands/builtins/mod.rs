pub mod counters;
pub mod custom;
pub mod followage;
pub mod info;
pub mod quotes;
pub mod whyme;

pub use counters::{BoopBoardCommand, BoopCommand, DeathCommand, SetCounterCommand};
pub use custom::{load_simple_commands, AddCommandCommand, RemoveCommandCommand};
pub use followage::FollowageCommand;
pub use info::{CommandsCommand, RulesCommand};
pub use quotes::{AddQuoteCommand, QuoteBook, QuoteCommand};
pub use whyme::WhyMeCommand;

use crate::commands::command_system::CommandHandler;
use crate::commands::cooldown::{Clock, CooldownCommand};
use crate::commands::registry::SharedRegistry;
use crate::counters::CounterHandle;
use crate::storage::DocumentStore;
use crate::twitch::api::FollowageLookup;
use log::info;
use std::sync::Arc;
use std::time::Duration;

/// Everything the built-in commands need, wired up once at startup.
#[derive(Clone)]
pub struct BuiltinDeps {
    pub store: Arc<dyn DocumentStore>,
    pub quotes: Arc<QuoteBook>,
    pub deaths: CounterHandle,
    pub boops: CounterHandle,
    pub followage: Arc<dyn FollowageLookup>,
    pub streamer_name: String,
    pub rules_text: String,
    pub home_channel: Option<String>,
    pub cooldown: Duration,
    pub clock: Arc<dyn Clock>,
}

pub fn register_builtins(registry: &SharedRegistry, deps: BuiltinDeps) {
    let mut reg = registry.write();

    reg.register("!whyme", CommandHandler::builtin(WhyMeCommand), false);
    reg.register(
        "!addquote",
        CommandHandler::builtin(AddQuoteCommand { quotes: deps.quotes.clone() }),
        false,
    );
    reg.register(
        "!quote",
        CommandHandler::builtin(QuoteCommand { quotes: deps.quotes.clone() }),
        false,
    );
    reg.register(
        "!death",
        CommandHandler::builtin(CooldownCommand::with_clock(
            DeathCommand {
                deaths: deps.deaths.clone(),
                streamer_name: deps.streamer_name.clone(),
            },
            deps.cooldown,
            deps.clock.clone(),
        )),
        false,
    );
    reg.register(
        "!setdeaths",
        CommandHandler::builtin(SetCounterCommand {
            counter: deps.deaths.clone(),
            require_moderator: true,
        }),
        true,
    );
    reg.register(
        "!boop",
        CommandHandler::builtin(CooldownCommand::with_clock(
            BoopCommand { boops: deps.boops.clone() },
            deps.cooldown,
            deps.clock.clone(),
        )),
        false,
    );
    reg.register(
        "!boopboard",
        CommandHandler::builtin(BoopBoardCommand { boops: deps.boops.clone() }),
        false,
    );
    reg.register(
        "!addcommand",
        CommandHandler::builtin(AddCommandCommand {
            registry: registry.clone(),
            store: deps.store.clone(),
        }),
        true,
    );
    reg.register(
        "!removecommand",
        CommandHandler::builtin(RemoveCommandCommand {
            registry: registry.clone(),
            store: deps.store.clone(),
        }),
        true,
    );
    reg.register(
        "!rules",
        CommandHandler::builtin(RulesCommand { rules_text: deps.rules_text }),
        false,
    );
    reg.register(
        "!commands",
        CommandHandler::builtin(CommandsCommand { registry: registry.clone() }),
        false,
    );
    reg.register(
        "!followage",
        CommandHandler::builtin(FollowageCommand {
            lookup: deps.followage,
            home_channel: deps.home_channel,
        }),
        false,
    );

    info!("Registered {} built-in commands", reg.len());
}
