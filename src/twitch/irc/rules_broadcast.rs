use super::client::ChatSink;
use log::{debug, error, info};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// Posts the rules to every channel once per `period`, first one period from now.
///
/// Returns `None` when the period is zero or there is nothing to post.
pub fn spawn_rules_broadcast(
    sink: Arc<dyn ChatSink>,
    channels: Vec<String>,
    rules_text: String,
    period: Duration,
) -> Option<JoinHandle<()>> {
    if period.is_zero() || rules_text.trim().is_empty() || channels.is_empty() {
        info!("Periodic rules broadcast disabled");
        return None;
    }

    info!("Posting rules every {:?} to {} channel(s)", period, channels.len());
    Some(tokio::spawn(async move {
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            for channel in &channels {
                debug!("Posting rules to {}", channel);
                if let Err(e) = sink.send(channel, &rules_text).await {
                    error!("Failed to post rules to {}: {}", channel, e);
                }
            }
        }
    }))
}
