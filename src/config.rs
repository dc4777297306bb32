use crate::error::BotError;
use crate::logging::LogLevel;
use crate::twitch::api::followage::DEFAULT_BASE_URL;
use config::{Environment, File, FileFormat};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_RULES: &str = "Please remember the channel rules: 1. Be kind 2. No politics or religion 3. No spam 4. Only backseat if I ask for it.";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub bot_username: String,
    pub oauth_token: String,
    /// Channels to join. The first one is the home channel.
    pub channels: Vec<String>,
    pub database_path: String,
    pub command_cooldown_ms: u64,
    /// `0` turns the periodic rules post off.
    pub rules_interval_ms: u64,
    pub streamer_name: String,
    pub rules_text: String,
    pub followage_base_url: String,
    pub log_level: LogLevel,
    pub show_irc_debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bot_username: String::new(),
            oauth_token: String::new(),
            channels: Vec::new(),
            database_path: "boopbot.db".to_string(),
            command_cooldown_ms: 30_000,
            rules_interval_ms: 900_000,
            streamer_name: String::new(),
            rules_text: DEFAULT_RULES.to_string(),
            followage_base_url: DEFAULT_BASE_URL.to_string(),
            log_level: LogLevel::INFO,
            show_irc_debug: false,
        }
    }
}

impl Config {
    pub const CONFIG_PATH: &'static str = "boopbot.toml";
    pub const ENV_PREFIX: &'static str = "BOOPBOT";

    /// Defaults, then the TOML file if it exists, then `BOOPBOT_*` variables.
    pub fn load(path: Option<&Path>) -> Result<Self, BotError> {
        let path = path.unwrap_or_else(|| Path::new(Self::CONFIG_PATH));
        let settings = config::Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(
                Environment::with_prefix(Self::ENV_PREFIX)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("channels"),
            )
            .build()?;

        let mut config: Config = settings.try_deserialize()?;
        config.normalize();
        Ok(config)
    }

    fn normalize(&mut self) {
        self.oauth_token = self.oauth_token.trim().trim_start_matches("oauth:").to_string();
        self.channels = self
            .channels
            .iter()
            .map(|c| c.trim().trim_start_matches('#').to_lowercase())
            .filter(|c| !c.is_empty())
            .collect();
    }

    pub fn validate(&self) -> Result<(), BotError> {
        if self.bot_username.trim().is_empty() {
            return Err(BotError::MissingConfig("bot_username"));
        }
        if self.oauth_token.trim().is_empty() {
            return Err(BotError::MissingConfig("oauth_token"));
        }
        if self.channels.is_empty() {
            return Err(BotError::MissingConfig("channels"));
        }
        Ok(())
    }

    /// Writes the defaults as a starting point for a new install.
    pub fn write_template(path: &Path) -> Result<(), BotError> {
        let toml = toml::to_string_pretty(&Config::default())?;
        fs::write(path, toml)?;
        info!("Config template written to {}", path.display());
        Ok(())
    }

    pub fn home_channel(&self) -> Option<&str> {
        self.channels.first().map(String::as_str)
    }

    /// Name used in the death message; the home channel when unset.
    pub fn streamer_display_name(&self) -> String {
        if !self.streamer_name.trim().is_empty() {
            return self.streamer_name.clone();
        }
        self.home_channel().unwrap_or_default().to_string()
    }

    pub fn command_cooldown(&self) -> Duration {
        Duration::from_millis(self.command_cooldown_ms)
    }

    pub fn rules_interval(&self) -> Duration {
        Duration::from_millis(self.rules_interval_ms)
    }
}
