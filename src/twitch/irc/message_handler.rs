use super::client::ChatSink;
use crate::commands::messages::{self, render};
use crate::commands::{ChatMessage, Dispatcher, MessageKind};
use log::{debug, error, info, trace};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;
use twitch_irc::message::{PrivmsgMessage, ServerMessage, UserNoticeEvent};

/// Turns a Twitch chat line into the transport-neutral form the dispatcher reads.
pub fn chat_message_from_privmsg(msg: &PrivmsgMessage, bot_login: &str) -> ChatMessage {
    ChatMessage {
        channel: Some(msg.channel_login.clone()),
        username: msg.sender.login.clone(),
        badges: msg.badges.iter().map(|b| b.name.clone()).collect(),
        text: msg.message_text.clone(),
        is_self: msg.sender.login.eq_ignore_ascii_case(bot_login),
        kind: if msg.is_action { MessageKind::Action } else { MessageKind::Chat },
    }
}

pub struct MessageHandler {
    dispatcher: Arc<Dispatcher>,
    sink: Arc<dyn ChatSink>,
    bot_login: String,
}

impl MessageHandler {
    pub fn new(dispatcher: Arc<Dispatcher>, sink: Arc<dyn ChatSink>, bot_login: &str) -> Self {
        MessageHandler {
            dispatcher,
            sink,
            bot_login: bot_login.to_lowercase(),
        }
    }

    /// Runs until the connection closes. Each message is handled to completion
    /// before the next is read.
    pub async fn handle_messages(&self, mut incoming: UnboundedReceiver<ServerMessage>) {
        while let Some(message) = incoming.recv().await {
            self.handle_message(message).await;
        }
        info!("Twitch message stream ended");
    }

    pub async fn handle_message(&self, message: ServerMessage) {
        match message {
            ServerMessage::Privmsg(msg) => {
                let chat = chat_message_from_privmsg(&msg, &self.bot_login);
                self.handle_chat(&chat).await;
            }
            ServerMessage::UserNotice(notice) => match notice.event {
                UserNoticeEvent::SubOrResub { is_resub: false, .. } => {
                    self.handle_subscription(&notice.channel_login, &notice.sender.login).await;
                }
                other => trace!("Ignoring user notice: {:?}", other),
            },
            ServerMessage::GlobalUserState(state) => {
                info!("Connected to Twitch chat as {}", state.user_name);
            }
            other => trace!("Ignoring IRC message: {:?}", other),
        }
    }

    pub async fn handle_chat(&self, msg: &ChatMessage) {
        let Some(reply) = self.dispatcher.dispatch(msg).await else {
            return;
        };
        match msg.channel.as_deref() {
            Some(channel) => self.send(channel, &reply).await,
            None => debug!("Dropping reply with no channel: {}", reply),
        }
    }

    pub async fn handle_subscription(&self, channel: &str, user: &str) {
        match render(messages::SUBSCRIPTION, &[("name", &user)]) {
            Ok(reply) => self.send(channel, &reply).await,
            Err(e) => error!("Failed to render subscription message: {}", e),
        }
    }

    async fn send(&self, channel: &str, text: &str) {
        if let Err(e) = self.sink.send(channel, text).await {
            error!("Failed to send message to {}: {}", channel, e);
        }
    }
}
