//! HTTP transport and orchestration for snoochat.
//!
//! Flow: `POST /api/chat` → validate payload → parse directive → fetch
//! subreddit info when scoped and Reddit is available → compose reply.
//! Lookup failures become user-facing error messages here; the reply
//! composer only ever sees `None` or a fully resolved `SubredditInfo`.

pub mod chat;
pub mod server;
pub mod state;

pub use {server::build_gateway_app, state::GatewayState};
