//! Deterministic reply composition — the stage between subreddit resolution
//! and delivery.
//!
//! Flow: parsed question + optional subreddit context + availability flag →
//! pick one of three templates → interpolate → final reply text. Real answer
//! synthesis is an external capability; the templates mark where it plugs in.

pub mod compose;

pub use compose::compose_reply;
