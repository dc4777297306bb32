use crate::commands::command_system::CommandHandler;
use parking_lot::RwLock;
use std::sync::Arc;

pub type SharedRegistry = Arc<RwLock<CommandRegistry>>;

#[derive(Clone)]
pub struct RegisteredCommand {
    pub keyword: String,
    pub handler: CommandHandler,
    pub requires_moderator: bool,
}

/// Keyword → handler table. Enumeration follows registration order; an
/// overwrite keeps the keyword's existing position.
#[derive(Default)]
pub struct CommandRegistry {
    commands: Vec<RegisteredCommand>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_shared(self) -> SharedRegistry {
        Arc::new(RwLock::new(self))
    }

    pub fn register(&mut self, keyword: &str, handler: CommandHandler, requires_moderator: bool) {
        let entry = RegisteredCommand {
            keyword: keyword.to_lowercase(),
            handler,
            requires_moderator,
        };

        match self.commands.iter_mut().find(|c| c.keyword == entry.keyword) {
            Some(existing) => *existing = entry,
            None => self.commands.push(entry),
        }
    }

    /// Returns the removed entry, if there was one.
    pub fn unregister(&mut self, keyword: &str) -> Option<RegisteredCommand> {
        let keyword = keyword.to_lowercase();
        let index = self.commands.iter().position(|c| c.keyword == keyword)?;
        Some(self.commands.remove(index))
    }

    pub fn lookup(&self, keyword: &str) -> Option<&RegisteredCommand> {
        let keyword = keyword.to_lowercase();
        self.commands.iter().find(|c| c.keyword == keyword)
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.lookup(keyword).is_some()
    }

    /// Keywords anyone may use, in registration order.
    pub fn list_public(&self) -> Vec<String> {
        self.commands
            .iter()
            .filter(|c| !c.requires_moderator)
            .map(|c| c.keyword.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
