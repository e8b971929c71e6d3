//! Application configuration. Account identity, target phrase, collaborator
//! credentials.

use crate::domain::entities::DEFAULT_TARGET_PHRASE;
use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Identifier of the account the sentinel runs as. Read from SENTINEL_ACTOR_ID.
    pub actor_id: Option<String>,

    /// Phrase to detect. Read from SENTINEL_TARGET_PHRASE; defaults to the
    /// built-in phrase when unset.
    #[serde(default)]
    pub target_phrase: Option<String>,

    /// Feed API instance root, e.g. https://example.social. Read from SENTINEL_FEED_API_BASE.
    #[serde(default)]
    pub feed_api_base: Option<String>,

    /// Feed API bearer token. Read from SENTINEL_FEED_API_TOKEN.
    #[serde(default)]
    pub feed_api_token: Option<String>,

    /// Slack incoming-webhook URL. Read from SENTINEL_SLACK_WEBHOOK_URL.
    #[serde(default)]
    pub slack_webhook_url: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("SENTINEL"));
        if let Ok(path) = std::env::var("SENTINEL_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        let cfg: Self = c.build()?.try_deserialize()?;
        Ok(cfg)
    }

    /// Returns the phrase to detect. Defaults to the built-in phrase.
    pub fn target_phrase_or_default(&self) -> String {
        self.target_phrase
            .clone()
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| DEFAULT_TARGET_PHRASE.to_string())
    }

    /// Returns true if the real feed client can be constructed.
    pub fn is_feed_configured(&self) -> bool {
        self.feed_api_base.is_some() && self.feed_api_token.is_some()
    }

    /// Returns true if the Slack notifier can be constructed.
    pub fn is_slack_configured(&self) -> bool {
        self.slack_webhook_url.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_phrase_falls_back_to_default() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.target_phrase_or_default(), DEFAULT_TARGET_PHRASE);

        let cfg = AppConfig {
            target_phrase: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(cfg.target_phrase_or_default(), DEFAULT_TARGET_PHRASE);
    }

    #[test]
    fn configured_flags_require_all_fields() {
        let mut cfg = AppConfig {
            feed_api_base: Some("https://example.social".into()),
            ..Default::default()
        };
        assert!(!cfg.is_feed_configured());
        cfg.feed_api_token = Some("token".into());
        assert!(cfg.is_feed_configured());
        assert!(!cfg.is_slack_configured());
    }
}
