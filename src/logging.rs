use crate::error::BotError;
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    ERROR,
    WARN,
    #[default]
    INFO,
    DEBUG,
    #[serde(alias = "trace")]
    VERBOSE,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::ERROR => LevelFilter::Error,
            LogLevel::WARN => LevelFilter::Warn,
            LogLevel::INFO => LevelFilter::Info,
            LogLevel::DEBUG => LevelFilter::Debug,
            LogLevel::VERBOSE => LevelFilter::Trace,
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(LogLevel::ERROR),
            "warn" | "warning" => Ok(LogLevel::WARN),
            "info" => Ok(LogLevel::INFO),
            "debug" => Ok(LogLevel::DEBUG),
            "verbose" | "trace" => Ok(LogLevel::VERBOSE),
            other => Err(format!("unknown log level: {}", other)),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            LogLevel::ERROR => "error",
            LogLevel::WARN => "warn",
            LogLevel::INFO => "info",
            LogLevel::DEBUG => "debug",
            LogLevel::VERBOSE => "verbose",
        };
        f.write_str(name)
    }
}

/// Level for the `twitch_irc` target. Raw IRC traffic is only shown on request.
fn irc_level(show_irc_debug: bool) -> LevelFilter {
    if show_irc_debug {
        LevelFilter::Trace
    } else {
        LevelFilter::Warn
    }
}

/// Installs the global logger. Can only succeed once per process.
pub fn init_logging(level: LogLevel, show_irc_debug: bool) -> Result<(), BotError> {
    let colors = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::Green)
        .debug(Color::Blue)
        .trace(Color::Magenta);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{}] {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                colors.color(record.level()),
                record.target(),
                message
            ))
        })
        .level(level.into())
        .level_for("twitch_irc", irc_level(show_irc_debug))
        .level_for("hyper", LevelFilter::Warn)
        .level_for("reqwest", LevelFilter::Warn)
        .chain(std::io::stdout())
        .apply()?;

    Ok(())
}
