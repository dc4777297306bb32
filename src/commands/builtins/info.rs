use crate::commands::command_system::{Command, InvocationContext};
use crate::commands::messages;
use crate::commands::registry::SharedRegistry;
use crate::error::BotError;

/// Replies with the configured rules text, or stays quiet if there is none.
pub struct RulesCommand {
    pub rules_text: String,
}

#[async_trait::async_trait]
impl Command for RulesCommand {
    async fn execute(&self, _ctx: &InvocationContext) -> Result<Option<String>, BotError> {
        if self.rules_text.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(self.rules_text.clone()))
    }
}

/// Lists every keyword a viewer can use, in registration order.
pub struct CommandsCommand {
    pub registry: SharedRegistry,
}

#[async_trait::async_trait]
impl Command for CommandsCommand {
    async fn execute(&self, _ctx: &InvocationContext) -> Result<Option<String>, BotError> {
        let keywords = self.registry.read().list_public();
        let reply = format!("{} {}", messages::COMMANDS, keywords.join(" "));
        Ok(Some(reply.trim_end().to_string()))
    }
}
