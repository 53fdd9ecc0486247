//! Route inbound chat messages into a subreddit scope and a question.
//!
//! A message may open with a directive of the form `@r/<name>` that scopes
//! the question to one subreddit. The directive only counts at the very
//! start of the (trimmed) message; anywhere else it is ordinary text.

pub mod parse;

pub use parse::parse_message;
