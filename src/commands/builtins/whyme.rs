use crate::commands::command_system::{Command, InvocationContext};
use crate::commands::messages::{self, render};
use crate::error::BotError;

pub struct WhyMeCommand;

#[async_trait::async_trait]
impl Command for WhyMeCommand {
    async fn execute(&self, ctx: &InvocationContext) -> Result<Option<String>, BotError> {
        Ok(Some(render(messages::WHY, &[("name", &ctx.user_name)])?))
    }
}
