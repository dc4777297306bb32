pub mod api;
pub mod irc;
pub mod roles;

pub use api::{FollowageLookup, HttpFollowage};
pub use irc::{ChatSink, MessageHandler, TwitchChatClient};
