use crate::commands::command_system::{Command, CommandHandler, InvocationContext};
use crate::commands::messages::{self, render};
use crate::commands::registry::SharedRegistry;
use crate::error::BotError;
use crate::storage::models::sanitize;
use crate::storage::{DocumentStore, SimpleTextCommand};
use log::{error, info, warn};
use std::sync::Arc;

/// Normalises a user-supplied keyword: no `!`, no separators, lower case.
fn command_name(token: &str) -> String {
    sanitize(token.trim_start_matches('!')).to_lowercase()
}

/// Registers every stored macro. Returns how many were loaded.
pub async fn load_simple_commands(registry: &SharedRegistry, store: &dyn DocumentStore) -> Result<usize, BotError> {
    let commands = store.find_simple_commands().await?;
    let mut registry = registry.write();
    for command in &commands {
        registry.register(&command.keyword(), CommandHandler::SimpleText(command.text.clone()), false);
    }
    info!("Loaded {} simple text commands", commands.len());
    Ok(commands.len())
}

/// `!addcommand <keyword> <text...>`
pub struct AddCommandCommand {
    pub registry: SharedRegistry,
    pub store: Arc<dyn DocumentStore>,
}

#[async_trait::async_trait]
impl Command for AddCommandCommand {
    async fn execute(&self, ctx: &InvocationContext) -> Result<Option<String>, BotError> {
        if !ctx.is_moderator || ctx.args.len() < 3 {
            return Ok(None);
        }

        let name = command_name(&ctx.args[1]);
        let record = SimpleTextCommand::new(&name, ctx.text_after(2));
        if name.is_empty() || record.text.trim().is_empty() {
            return Ok(None);
        }

        {
            let mut registry = self.registry.write();
            if registry.contains(&record.keyword()) {
                return Ok(Some(messages::COMMAND_EXISTS.to_string()));
            }
            registry.register(&record.keyword(), CommandHandler::SimpleText(record.text.clone()), false);
        }
        info!("{} added command {}", ctx.user_name, record.keyword());

        if let Err(e) = self.store.create_simple_command(&record).await {
            error!("Failed to persist command {}: {}", record.keyword(), e);
        }

        Ok(Some(render(messages::COMMAND_ADDED, &[("command", &record.command)])?))
    }
}

/// `!removecommand <keyword>`; only user-defined macros can be removed.
pub struct RemoveCommandCommand {
    pub registry: SharedRegistry,
    pub store: Arc<dyn DocumentStore>,
}

#[async_trait::async_trait]
impl Command for RemoveCommandCommand {
    async fn execute(&self, ctx: &InvocationContext) -> Result<Option<String>, BotError> {
        if !ctx.is_moderator || ctx.args.len() < 2 {
            return Ok(None);
        }

        let name = command_name(&ctx.args[1]);
        let keyword = format!("!{}", name);
        let removed = {
            let mut registry = self.registry.write();
            let removable = registry
                .lookup(&keyword)
                .map_or(false, |entry| entry.handler.is_simple_text());
            if removable {
                registry.unregister(&keyword)
            } else {
                None
            }
        };

        if removed.is_none() {
            return Ok(Some(messages::COMMAND_NOT_FOUND.to_string()));
        }
        info!("{} removed command {}", ctx.user_name, keyword);

        match self.store.delete_simple_command(&name).await {
            Ok(true) => {}
            Ok(false) => warn!("Command {} was registered but not stored", keyword),
            Err(e) => error!("Failed to delete command {}: {}", keyword, e),
        }

        Ok(Some(messages::COMMAND_DELETED.to_string()))
    }
}
