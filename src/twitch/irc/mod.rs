pub mod client;
pub mod message_handler;
pub mod rules_broadcast;

pub use client::{ChatSink, TwitchChatClient};
pub use message_handler::MessageHandler;
pub use rules_broadcast::spawn_rules_broadcast;
