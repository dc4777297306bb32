use crate::commands::command_system::{Command, InvocationContext};
use crate::error::BotError;
use log::debug;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant};

pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Window state for one wrapped handler, shared by every caller.
#[derive(Debug)]
pub struct Cooldown {
    last_fired: Option<Instant>,
    window: Duration,
}

impl Cooldown {
    pub fn new(window: Duration) -> Self {
        Cooldown { last_fired: None, window }
    }

    /// Accepts and restarts the window, or refuses while it is still open.
    pub fn try_fire(&mut self, now: Instant) -> bool {
        match self.last_fired {
            Some(last) if now.saturating_duration_since(last) < self.window => false,
            _ => {
                self.last_fired = Some(now);
                true
            }
        }
    }
}

/// Wraps a handler so that calls inside the window are swallowed silently.
pub struct CooldownCommand {
    inner: Arc<dyn Command>,
    cooldown: Mutex<Cooldown>,
    clock: Arc<dyn Clock>,
}

impl CooldownCommand {
    pub fn with_clock<C: Command + 'static>(inner: C, window: Duration, clock: Arc<dyn Clock>) -> Self {
        CooldownCommand {
            inner: Arc::new(inner),
            cooldown: Mutex::new(Cooldown::new(window)),
            clock,
        }
    }
}

#[async_trait::async_trait]
impl Command for CooldownCommand {
    async fn execute(&self, ctx: &InvocationContext) -> Result<Option<String>, BotError> {
        let accepted = self.cooldown.lock().try_fire(self.clock.now());
        if !accepted {
            debug!("{} is on cooldown, ignoring {}", ctx.keyword(), ctx.user_name);
            return Ok(None);
        }
        self.inner.execute(ctx).await
    }
}
