//! Process configuration: Reddit API credentials resolved from the
//! environment.
//!
//! The gateway's availability flag is derived from exactly one thing — all
//! three `REDDIT_*` variables being present and non-empty at startup.

use {secrecy::Secret, tracing::warn};

pub const CLIENT_ID_VAR: &str = "REDDIT_CLIENT_ID";
pub const CLIENT_SECRET_VAR: &str = "REDDIT_CLIENT_SECRET";
pub const USER_AGENT_VAR: &str = "REDDIT_USER_AGENT";

/// App-only OAuth credentials for the Reddit API.
#[derive(Clone)]
pub struct RedditCredentials {
    pub client_id: String,
    pub client_secret: Secret<String>,
    pub user_agent: String,
}

impl RedditCredentials {
    /// Resolve credentials from the process environment.
    ///
    /// Returns `None` (and warns) unless all three variables are set and
    /// non-empty; a partial credential set never yields a usable client.
    pub fn from_env() -> Option<Self> {
        Self::resolve(|name| std::env::var(name).ok())
    }

    fn resolve(get: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let non_empty = |name: &str| get(name).filter(|value| !value.trim().is_empty());

        let client_id = non_empty(CLIENT_ID_VAR);
        let client_secret = non_empty(CLIENT_SECRET_VAR);
        let user_agent = non_empty(USER_AGENT_VAR);

        match (client_id, client_secret, user_agent) {
            (Some(client_id), Some(client_secret), Some(user_agent)) => Some(Self {
                client_id,
                client_secret: Secret::new(client_secret),
                user_agent,
            }),
            _ => {
                warn!(
                    "Reddit credentials ({CLIENT_ID_VAR}, {CLIENT_SECRET_VAR}, \
                     {USER_AGENT_VAR}) not found or incomplete; Reddit integration \
                     will be skipped"
                );
                None
            },
        }
    }
}
