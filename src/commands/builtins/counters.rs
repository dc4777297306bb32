use crate::commands::command_system::{Command, InvocationContext};
use crate::commands::messages::{self, render, upper_first};
use crate::counters::CounterHandle;
use crate::error::BotError;

pub const LEADERBOARD_SIZE: usize = 3;

/// Integer value of a chat argument; decimals truncate, garbage is 0.
pub fn parse_count(arg: Option<&str>) -> i64 {
    let Some(arg) = arg.map(str::trim) else {
        return 0;
    };

    arg.parse::<i64>()
        .ok()
        .or_else(|| arg.parse::<f64>().ok().filter(|v| v.is_finite()).map(|v| v.trunc() as i64))
        .unwrap_or(0)
}

pub struct DeathCommand {
    pub deaths: CounterHandle,
    pub streamer_name: String,
}

#[async_trait::async_trait]
impl Command for DeathCommand {
    async fn execute(&self, ctx: &InvocationContext) -> Result<Option<String>, BotError> {
        let (count, pending) = self.deaths.increment(&ctx.user_name, false);
        pending.detach();
        let reply = render(messages::DEATH, &[("name", &self.streamer_name), ("count", &count)])?;
        Ok(Some(reply))
    }
}

pub struct BoopCommand {
    pub boops: CounterHandle,
}

#[async_trait::async_trait]
impl Command for BoopCommand {
    async fn execute(&self, ctx: &InvocationContext) -> Result<Option<String>, BotError> {
        let (count, pending) = self.boops.increment(&ctx.user_name, true);
        pending.detach();
        let reply = render(messages::BOOP, &[("name", &ctx.user_name), ("count", &count)])?;
        Ok(Some(reply))
    }
}

/// Overwrites a counter's total, e.g. `!setdeaths 7`.
pub struct SetCounterCommand {
    pub counter: CounterHandle,
    pub require_moderator: bool,
}

#[async_trait::async_trait]
impl Command for SetCounterCommand {
    async fn execute(&self, ctx: &InvocationContext) -> Result<Option<String>, BotError> {
        if self.require_moderator && !ctx.is_moderator {
            return Ok(None);
        }

        let value = parse_count(ctx.arg(1));
        self.counter.set_count(value).detach();
        let reply = render(
            messages::COUNTER_SET,
            &[("counter", &upper_first(&self.counter.name())), ("count", &value)],
        )?;
        Ok(Some(reply))
    }
}

pub struct BoopBoardCommand {
    pub boops: CounterHandle,
}

#[async_trait::async_trait]
impl Command for BoopBoardCommand {
    async fn execute(&self, _ctx: &InvocationContext) -> Result<Option<String>, BotError> {
        let mut board = messages::BOOP_LEADERBOARD.to_string();
        for placement in self.boops.top(LEADERBOARD_SIZE) {
            board.push_str(&render(
                messages::BOOP_PLACEMENT,
                &[("placement", &placement.rank), ("name", &placement.user), ("score", &placement.count)],
            )?);
        }
        Ok(Some(board.trim_end_matches(',').to_string()))
    }
}
