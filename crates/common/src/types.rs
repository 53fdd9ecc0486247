use serde::{Deserialize, Serialize};

/// Result of splitting a raw chat message into an optional subreddit scope
/// and the residual question.
///
/// `subreddit` is `None` exactly when no well-formed `@r/<name>` directive
/// was found at the very start of the trimmed message. `question` may be
/// empty (directive-only messages, empty input).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedQuery {
    pub subreddit: Option<String>,
    pub question: String,
}

impl ParsedQuery {
    /// A query with no subreddit scope — the whole message is the question.
    pub fn unscoped(question: impl Into<String>) -> Self {
        Self {
            subreddit: None,
            question: question.into(),
        }
    }

    pub fn scoped(subreddit: impl Into<String>, question: impl Into<String>) -> Self {
        Self {
            subreddit: Some(subreddit.into()),
            question: question.into(),
        }
    }
}

/// Descriptive attributes of a resolved subreddit, as returned by the Reddit
/// `about` endpoint.
///
/// Optional fields trigger the reply composer's fallback literals when
/// absent. `requested_name` is the name the user typed, kept alongside the
/// canonical `display_name` so a reply can always name *some* subreddit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubredditInfo {
    pub requested_name: String,
    pub display_name: Option<String>,
    pub public_description: Option<String>,
    pub subscribers: Option<u64>,
}

impl SubredditInfo {
    /// Canonical name if Reddit supplied one, otherwise the name as typed.
    pub fn name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.requested_name)
    }
}
