use crate::error::BotError;
use log::{debug, warn};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::Client;

pub const DEFAULT_BASE_URL: &str = "https://api.2g.be";

/// How long `user` has followed `channel`, as a ready-to-print sentence.
#[async_trait::async_trait]
pub trait FollowageLookup: Send + Sync {
    async fn lookup(&self, channel: &str, user: &str) -> Result<String, BotError>;
}

#[derive(Clone)]
pub struct HttpFollowage {
    client: Client,
    base_url: String,
}

impl HttpFollowage {
    pub fn new(base_url: &str) -> Self {
        HttpFollowage {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url_for(&self, channel: &str, user: &str) -> String {
        format!(
            "{}/twitch/followage/{}/{}?format=mwdhms",
            self.base_url,
            utf8_percent_encode(channel, NON_ALPHANUMERIC),
            utf8_percent_encode(user, NON_ALPHANUMERIC),
        )
    }
}

#[async_trait::async_trait]
impl FollowageLookup for HttpFollowage {
    async fn lookup(&self, channel: &str, user: &str) -> Result<String, BotError> {
        let url = self.url_for(channel, user);
        debug!("Requesting followage: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if status != reqwest::StatusCode::OK {
            warn!("Followage lookup for {} in {} failed. Status: {}", user, channel, status);
            return Err(BotError::Followage { status: status.as_u16() });
        }

        Ok(response.text().await?)
    }
}
