use boopbot::config::Config;
use boopbot::logging::{init_logging, LogLevel};
use boopbot::{init, run, BotError};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "boopbot", version, about = "Twitch chat bot with counters, quotes and custom commands")]
struct Cli {
    /// Path to the TOML config file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,

    /// Override the database path from the config
    #[arg(long, value_name = "PATH")]
    database: Option<String>,

    /// Override the log level (error, warn, info, debug, verbose)
    #[arg(long)]
    log_level: Option<LogLevel>,
}

#[tokio::main]
async fn main() -> Result<(), BotError> {
    let cli = Cli::parse();
    let config_path = cli.config.unwrap_or_else(|| PathBuf::from(Config::CONFIG_PATH));

    if cli.init_config {
        Config::write_template(&config_path)?;
        println!("Config template written to {}", config_path.display());
        return Ok(());
    }

    let mut config = Config::load(Some(&config_path))?;
    if let Some(database) = cli.database {
        config.database_path = database;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }

    init_logging(config.log_level, config.show_irc_debug)?;
    config.validate()?;

    let bot = init(config).await?;
    run(bot).await
}
