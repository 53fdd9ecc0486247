use std::sync::Arc;

use tracing::{error, info, warn};

use {snoochat_config::RedditCredentials, snoochat_reddit::RedditClient};

/// Process-wide gateway state, built once at startup and read-only afterward.
///
/// `reddit_available` and the optional client are distinct on purpose: the
/// flag is what the reply composer branches on, while the client is the
/// handle the orchestrator fetches with. They are only ever set together
/// here, but the chat handler still guards the inconsistent combination.
pub struct GatewayState {
    pub reddit: Option<Arc<RedditClient>>,
    pub reddit_available: bool,
}

impl GatewayState {
    pub fn new(reddit: Option<Arc<RedditClient>>, reddit_available: bool) -> Self {
        Self {
            reddit,
            reddit_available,
        }
    }

    /// Derive state from the environment: credentials present → build the
    /// client and probe it. A failed probe demotes the process to "Reddit
    /// unavailable" instead of refusing to start.
    pub async fn from_env() -> Self {
        let Some(credentials) = RedditCredentials::from_env() else {
            return Self::new(None, false);
        };

        let client = match RedditClient::new(credentials) {
            Ok(client) => client,
            Err(err) => {
                error!(error = %err, "failed to construct Reddit client");
                return Self::new(None, false);
            },
        };

        match client.verify().await {
            Ok(()) => {
                info!("Reddit client initialized; subreddit lookups enabled");
                Self::new(Some(Arc::new(client)), true)
            },
            Err(err) => {
                warn!(error = %err, "Reddit credential check failed; continuing without Reddit");
                Self::new(None, false)
            },
        }
    }
}
