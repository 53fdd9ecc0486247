//! Shared data contracts used across the snoochat crates.

pub mod types;

pub use types::{ParsedQuery, SubredditInfo};
