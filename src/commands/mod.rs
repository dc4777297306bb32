pub mod builtins;
pub mod command_system;
pub mod cooldown;
pub mod dispatcher;
pub mod messages;
pub mod registry;

pub use command_system::{ChatMessage, Command, CommandHandler, InvocationContext, MessageKind};
pub use dispatcher::Dispatcher;
pub use registry::{CommandRegistry, SharedRegistry};
