//! Wiring & DI. Entry point: bootstrap adapters, inject into the detector,
//! evaluate posts from stdin one at a time.
//! No business logic here; detection and fan-out live in the use cases.

use feed_sentinel::adapters::feed::{HttpFeedClient, MockFeedClient};
use feed_sentinel::adapters::notify::{MockNotifier, SlackNotifier};
use feed_sentinel::domain::{ActorIdentity, Post, TargetPattern};
use feed_sentinel::ports::{FeedActionPort, NotifierPort};
use feed_sentinel::shared::config::AppConfig;
use feed_sentinel::usecases::PhraseDetector;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv::dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!("no .env found (check CWD)"),
    }

    let cfg = AppConfig::load().unwrap_or_default();

    let actor_id = cfg
        .actor_id
        .clone()
        .or_else(|| std::env::var("SENTINEL_ACTOR_ID").ok())
        .unwrap_or_default();
    if actor_id.is_empty() {
        anyhow::bail!("Set SENTINEL_ACTOR_ID (env or .env) to the account id the sentinel runs as");
    }

    let pattern = TargetPattern::new(cfg.target_phrase_or_default());
    info!(phrase = pattern.as_str(), "watching for target phrase");

    // --- Collaborators: real adapters when configured, mocks otherwise ---
    let feed: Arc<dyn FeedActionPort> = if cfg.is_feed_configured() {
        info!("feed actions enabled (SENTINEL_FEED_API_BASE, SENTINEL_FEED_API_TOKEN)");
        Arc::new(HttpFeedClient::new(
            cfg.feed_api_base.clone().unwrap_or_default(),
            cfg.feed_api_token.clone().unwrap_or_default(),
        ))
    } else {
        warn!("SENTINEL_FEED_API_BASE/TOKEN not set, using mock feed client");
        Arc::new(MockFeedClient::new())
    };

    let notifier: Arc<dyn NotifierPort> = if cfg.is_slack_configured() {
        info!("Slack notifications enabled (SENTINEL_SLACK_WEBHOOK_URL)");
        Arc::new(SlackNotifier::new(
            cfg.slack_webhook_url.clone().unwrap_or_default(),
        ))
    } else {
        warn!("SENTINEL_SLACK_WEBHOOK_URL not set, using mock notifier");
        Arc::new(MockNotifier::new())
    };

    let detector = PhraseDetector::new(ActorIdentity::new(actor_id), pattern, feed, notifier);

    // --- Stream: one JSON post per stdin line, evaluated one at a time ---
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut processed = 0usize;
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let post: Post = match serde_json::from_str(line) {
            Ok(p) => p,
            Err(e) => {
                warn!(error = %e, "skipping undecodable post");
                continue;
            }
        };
        detector.run(&post, || processed += 1).await;
    }

    info!(processed, "post stream ended");
    Ok(())
}
