use crate::commands::command_system::{Command, InvocationContext};
use crate::error::BotError;
use crate::twitch::api::FollowageLookup;
use std::sync::Arc;

pub struct FollowageCommand {
    pub lookup: Arc<dyn FollowageLookup>,
    /// Used when the invocation did not come from a channel.
    pub home_channel: Option<String>,
}

#[async_trait::async_trait]
impl Command for FollowageCommand {
    async fn execute(&self, ctx: &InvocationContext) -> Result<Option<String>, BotError> {
        let Some(channel) = ctx.channel.as_deref().or(self.home_channel.as_deref()) else {
            return Ok(None);
        };

        let body = self.lookup.lookup(channel, &ctx.user_name).await?;
        Ok(Some(format!("@{}", body)))
    }
}
