use crate::error::BotError;
use crate::twitch::roles::UserRole;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Chat,
    Action,
    Whisper,
}

/// A chat line as delivered by the transport, before any command parsing.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub channel: Option<String>,
    pub username: String,
    pub badges: Vec<String>,
    pub text: String,
    pub is_self: bool,
    pub kind: MessageKind,
}

/// Everything a handler gets to see about one invocation.
#[derive(Debug, Clone)]
pub struct InvocationContext {
    pub channel: Option<String>,
    pub user_name: String,
    /// The trimmed message.
    pub raw_message: String,
    /// `raw_message` split on single spaces; token 0 is the keyword as typed.
    pub args: Vec<String>,
    pub is_moderator: bool,
}

impl InvocationContext {
    pub fn from_message(msg: &ChatMessage) -> Self {
        let raw_message = msg.text.trim().to_string();
        // consecutive spaces yield empty tokens on purpose
        let args = raw_message.split(' ').map(str::to_string).collect();

        InvocationContext {
            channel: msg.channel.clone(),
            user_name: msg.username.clone(),
            raw_message,
            args,
            is_moderator: UserRole::from_badges(msg.badges.as_slice()).is_moderator(),
        }
    }

    /// Lower-cased token 0, the registry lookup key.
    pub fn keyword(&self) -> String {
        self.args.first().map(|s| s.to_lowercase()).unwrap_or_default()
    }

    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }

    /// The raw message with the first `n` tokens and their separators removed.
    pub fn text_after(&self, n: usize) -> &str {
        let skip: usize = self.args.iter().take(n).map(|a| a.len() + 1).sum();
        self.raw_message.get(skip..).unwrap_or("")
    }
}

#[async_trait::async_trait]
pub trait Command: Send + Sync {
    /// `Ok(None)` means the command ran but has nothing to say.
    async fn execute(&self, ctx: &InvocationContext) -> Result<Option<String>, BotError>;
}

/// What a keyword resolves to: built-in logic, or a user-defined macro that
/// always answers with the same text.
#[derive(Clone)]
pub enum CommandHandler {
    Builtin(Arc<dyn Command>),
    SimpleText(String),
}

impl CommandHandler {
    pub fn builtin<C: Command + 'static>(command: C) -> Self {
        CommandHandler::Builtin(Arc::new(command))
    }

    pub async fn invoke(&self, ctx: &InvocationContext) -> Result<Option<String>, BotError> {
        match self {
            CommandHandler::Builtin(command) => command.execute(ctx).await,
            CommandHandler::SimpleText(text) => Ok(Some(text.clone())),
        }
    }

    pub fn is_simple_text(&self) -> bool {
        matches!(self, CommandHandler::SimpleText(_))
    }
}
