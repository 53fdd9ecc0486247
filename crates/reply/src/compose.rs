use snoochat_common::SubredditInfo;

/// Shown when a resolved subreddit carries no public description.
const NO_DESCRIPTION: &str = "No description available.";
/// Shown when Reddit did not report a subscriber count.
const UNKNOWN_SUBSCRIBERS: &str = "N/A";

/// Which template a reply is built from. One formatter per variant.
enum ReplySource<'a> {
    /// Live subreddit context was fetched for this question.
    Subreddit(&'a SubredditInfo),
    /// Reddit is reachable but no subreddit was resolved for this question.
    GenericAvailable,
    /// No live Reddit data at all (credentials missing or startup probe failed).
    GenericUnavailable,
}

/// Compose the reply for `question`.
///
/// Pure and total: no I/O, no failure path, identical inputs give identical
/// output. Subreddit context always wins — `reddit_available` is only
/// consulted when `info` is `None`.
pub fn compose_reply(
    question: &str,
    info: Option<&SubredditInfo>,
    reddit_available: bool,
) -> String {
    let source = match info {
        Some(info) => ReplySource::Subreddit(info),
        None if reddit_available => ReplySource::GenericAvailable,
        None => ReplySource::GenericUnavailable,
    };

    match source {
        ReplySource::Subreddit(info) => subreddit_reply(question, info),
        ReplySource::GenericAvailable => generic_available_reply(question),
        ReplySource::GenericUnavailable => generic_unavailable_reply(question),
    }
}

fn subreddit_reply(question: &str, info: &SubredditInfo) -> String {
    let description = info.public_description.as_deref().unwrap_or(NO_DESCRIPTION);
    let subscribers = info
        .subscribers
        .map_or_else(|| UNKNOWN_SUBSCRIBERS.to_owned(), |n| n.to_string());
    format!(
        "Based on live info from r/{} (Subscribers: {subscribers}, Description: \
         '{description}'), the answer to '{question}' is [answer drawn from this \
         subreddit's context].",
        info.name(),
    )
}

fn generic_available_reply(question: &str) -> String {
    format!(
        "I can access Reddit, but you didn't specify a subreddit or there was an \
         issue I couldn't pinpoint for the one you mentioned. For your question \
         '{question}', the general answer is [generic answer, Reddit access active]."
    )
}

fn generic_unavailable_reply(question: &str) -> String {
    format!(
        "I currently don't have access to live Reddit data. Regarding your question \
         '{question}', the general answer without subreddit context is [generic \
         answer, Reddit access inactive]."
    )
}
