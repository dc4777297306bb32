use crate::error::BotError;
use log::{debug, info};
use tokio::sync::mpsc::UnboundedReceiver;
use twitch_irc::login::StaticLoginCredentials;
use twitch_irc::message::ServerMessage;
use twitch_irc::{ClientConfig, SecureTCPTransport, TwitchIRCClient};

pub type TwitchIRCClientType = TwitchIRCClient<SecureTCPTransport, StaticLoginCredentials>;

/// Where replies go. Implemented by the live Twitch connection and by test doubles.
#[async_trait::async_trait]
pub trait ChatSink: Send + Sync {
    async fn send(&self, channel: &str, text: &str) -> Result<(), BotError>;
}

#[derive(Clone)]
pub struct TwitchChatClient {
    client: TwitchIRCClientType,
    username: String,
}

impl TwitchChatClient {
    /// Logs in and joins every channel. Must be called inside the tokio runtime.
    pub fn connect(
        username: &str,
        oauth_token: &str,
        channels: &[String],
    ) -> Result<(Self, UnboundedReceiver<ServerMessage>), BotError> {
        let oauth_token = oauth_token.trim_start_matches("oauth:").to_string();
        let client_config = ClientConfig::new_simple(StaticLoginCredentials::new(
            username.to_lowercase(),
            Some(oauth_token),
        ));

        let (incoming_messages, client) = TwitchIRCClientType::new(client_config);

        for channel in channels {
            let channel = channel.trim_start_matches('#').to_lowercase();
            client
                .join(channel.clone())
                .map_err(|e| BotError::Transport(format!("cannot join {}: {}", channel, e)))?;
            info!("Joined channel: {}", channel);
        }

        Ok((
            TwitchChatClient {
                client,
                username: username.to_lowercase(),
            },
            incoming_messages,
        ))
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

#[async_trait::async_trait]
impl ChatSink for TwitchChatClient {
    async fn send(&self, channel: &str, text: &str) -> Result<(), BotError> {
        debug!("Sending to {}: {}", channel, text);
        self.client
            .say(channel.to_string(), text.to_string())
            .await
            .map_err(|e| BotError::Transport(e.to_string()))
    }
}
