use crate::commands::command_system::{ChatMessage, InvocationContext, MessageKind};
use crate::commands::registry::SharedRegistry;
use log::{debug, error};

/// Routes a chat line to its registered handler and hands back the reply.
pub struct Dispatcher {
    registry: SharedRegistry,
}

impl Dispatcher {
    pub fn new(registry: SharedRegistry) -> Self {
        Dispatcher { registry }
    }

    pub fn registry(&self) -> &SharedRegistry {
        &self.registry
    }

    /// Never fails: unknown keywords, missing privileges and handler errors
    /// all end in `None`.
    pub async fn dispatch(&self, msg: &ChatMessage) -> Option<String> {
        if msg.is_self || msg.kind != MessageKind::Chat {
            return None;
        }

        let ctx = InvocationContext::from_message(msg);
        let keyword = ctx.keyword();

        // clone out so the lock is not held while the handler runs; handlers
        // like !addcommand take the write lock themselves
        let entry = self.registry.read().lookup(&keyword).cloned()?;

        if entry.requires_moderator && !ctx.is_moderator {
            debug!("{} tried moderator command {}", ctx.user_name, keyword);
            return None;
        }

        debug!("Dispatching {} for {}", keyword, ctx.user_name);
        match entry.handler.invoke(&ctx).await {
            Ok(reply) => reply,
            Err(e) => {
                error!("Command {} failed: {}", keyword, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::command_system::{Command, CommandHandler};
    use crate::commands::cooldown::CooldownCommand;
    use crate::commands::registry::CommandRegistry;
    use crate::error::BotError;
    use crate::test_utils::ManualClock;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    struct Counting {
        calls: Arc<AtomicUsize>,
        reply: &'static str,
    }

    #[async_trait::async_trait]
    impl Command for Counting {
        async fn execute(&self, _ctx: &InvocationContext) -> Result<Option<String>, BotError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Some(self.reply.to_string()))
        }
    }

    struct Broken;

    #[async_trait::async_trait]
    impl Command for Broken {
        async fn execute(&self, _ctx: &InvocationContext) -> Result<Option<String>, BotError> {
            Err(BotError::Transport("boom".into()))
        }
    }

    fn chat(text: &str, badges: &[&str]) -> ChatMessage {
        ChatMessage {
            channel: Some("channel".into()),
            username: "someone".into(),
            badges: badges.iter().map(|b| b.to_string()).collect(),
            text: text.into(),
            is_self: false,
            kind: MessageKind::Chat,
        }
    }

    fn setup() -> (Dispatcher, Arc<AtomicUsize>, Arc<AtomicUsize>) {
        let public_calls = Arc::new(AtomicUsize::new(0));
        let gated_calls = Arc::new(AtomicUsize::new(0));
        let mut registry = CommandRegistry::new();
        registry.register(
            "!hello",
            CommandHandler::builtin(Counting { calls: public_calls.clone(), reply: "hi" }),
            false,
        );
        registry.register(
            "!secret",
            CommandHandler::builtin(Counting { calls: gated_calls.clone(), reply: "shh" }),
            true,
        );
        registry.register("!broken", CommandHandler::builtin(Broken), false);
        (Dispatcher::new(registry.into_shared()), public_calls, gated_calls)
    }

    #[tokio::test]
    async fn public_command_runs_for_anyone() {
        let (dispatcher, calls, _) = setup();
        assert_eq!(dispatcher.dispatch(&chat("!HELLO there", &[])).await.as_deref(), Some("hi"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn gated_command_is_never_invoked_for_viewers() {
        let (dispatcher, _, calls) = setup();
        assert_eq!(dispatcher.dispatch(&chat("!secret", &["subscriber"])).await, None);
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert_eq!(dispatcher.dispatch(&chat("!secret", &["moderator"])).await.as_deref(), Some("shh"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn self_and_non_chat_messages_are_ignored() {
        let (dispatcher, calls, _) = setup();

        let mut own = chat("!hello", &[]);
        own.is_self = true;
        assert_eq!(dispatcher.dispatch(&own).await, None);

        let mut whisper = chat("!hello", &[]);
        whisper.kind = MessageKind::Whisper;
        assert_eq!(dispatcher.dispatch(&whisper).await, None);

        let mut action = chat("!hello", &[]);
        action.kind = MessageKind::Action;
        assert_eq!(dispatcher.dispatch(&action).await, None);

        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn unknown_keywords_and_failures_produce_nothing() {
        let (dispatcher, _, _) = setup();
        assert_eq!(dispatcher.dispatch(&chat("!unknown", &[])).await, None);
        assert_eq!(dispatcher.dispatch(&chat("hello !hello", &[])).await, None);
        assert_eq!(dispatcher.dispatch(&chat("", &[])).await, None);
        assert_eq!(dispatcher.dispatch(&chat("!broken", &[])).await, None);
    }

    #[tokio::test]
    async fn cooldown_gates_repeat_dispatches() {
        let calls = Arc::new(AtomicUsize::new(0));
        let clock = Arc::new(ManualClock::new());
        let mut registry = CommandRegistry::new();
        registry.register(
            "!death",
            CommandHandler::builtin(CooldownCommand::with_clock(
                Counting { calls: calls.clone(), reply: "dead" },
                Duration::from_millis(500),
                clock.clone(),
            )),
            false,
        );
        let dispatcher = Dispatcher::new(registry.into_shared());

        assert!(dispatcher.dispatch(&chat("!death", &[])).await.is_some());
        clock.advance(Duration::from_millis(499));
        assert!(dispatcher.dispatch(&chat("!death", &[])).await.is_none());
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        clock.advance(Duration::from_millis(1));
        assert!(dispatcher.dispatch(&chat("!death", &[])).await.is_some());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
