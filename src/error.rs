use thiserror::Error;
use crate::commands::messages::TemplateError;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Failed to write config template: {0}")]
    ConfigTemplate(#[from] toml::ser::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logger already initialized: {0}")]
    Logging(#[from] log::SetLoggerError),

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error("Chat transport error: {0}")]
    Transport(String),

    #[error("Followage lookup returned status {status}")]
    Followage { status: u16 },

    #[error("Missing required configuration: {0}")]
    MissingConfig(&'static str),
}
