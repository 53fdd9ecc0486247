use thiserror::Error;

/// Why a subreddit lookup produced no [`SubredditInfo`].
///
/// [`SubredditInfo`]: snoochat_common::SubredditInfo
#[derive(Debug, Error)]
pub enum LookupError {
    /// The subreddit does not exist (Reddit answers with a redirect to
    /// search, or a 404, for unknown names).
    #[error("subreddit not found")]
    NotFound,

    /// The subreddit exists but is private, banned, or quarantined.
    #[error("subreddit is private, banned, or quarantined")]
    AccessDenied,

    /// Anything else: network failure, rate limiting, unexpected status,
    /// token trouble, malformed response body.
    #[error("Reddit API error: {0}")]
    Transient(String),
}

impl From<reqwest::Error> for LookupError {
    fn from(source: reqwest::Error) -> Self {
        Self::Transient(source.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LookupError>;
