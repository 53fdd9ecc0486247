//! Reddit metadata source: app-only OAuth client for resolving a subreddit
//! name into its descriptive attributes.
//!
//! The gateway calls [`RedditClient::verify`] once at startup and
//! [`RedditClient::lookup`] per scoped question. Lookup failures are typed
//! ([`LookupError`]) so the orchestrator can translate each kind into a
//! distinct user-facing message; they are never handed to the reply composer.

pub mod client;
pub mod error;

pub use {
    client::RedditClient,
    error::{LookupError, Result},
};
