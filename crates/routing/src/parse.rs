use {once_cell::sync::Lazy, regex::Regex, tracing::warn};

use snoochat_common::ParsedQuery;

/// Splits a message into the leading directive token and everything after it.
///
/// The identifier is the maximal run of word characters after `@r/`; only
/// whitespace between the token and the remainder is consumed. `(?s)` lets
/// the remainder span newlines.
#[allow(clippy::expect_used)]
static MESSAGE_SPLIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^(@r/\w+)\s*(.*)$").expect("message split pattern is valid"));

/// Isolates the subreddit name from an already-matched directive token.
#[allow(clippy::expect_used)]
static DIRECTIVE_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^@r/(\w+)").expect("directive name pattern is valid"));

/// Extract an optional `@r/<name>` scope from the start of `raw` and return
/// it with the residual question.
///
/// Total over all inputs: a message with no directive (or a directive that
/// is not at position zero) comes back unscoped with the trimmed message as
/// the question. The question itself is trimmed and may be empty.
pub fn parse_message(raw: &str) -> ParsedQuery {
    let trimmed = raw.trim();

    let Some(caps) = MESSAGE_SPLIT.captures(trimmed) else {
        return ParsedQuery::unscoped(trimmed);
    };
    let (Some(directive), Some(rest)) = (caps.get(1), caps.get(2)) else {
        return ParsedQuery::unscoped(trimmed);
    };

    match DIRECTIVE_NAME
        .captures(directive.as_str())
        .and_then(|caps| caps.get(1))
    {
        Some(name) => ParsedQuery::scoped(name.as_str(), rest.as_str().trim()),
        // Unreachable given the split pattern already matched `@r/\w+`, but a
        // malformed directive must degrade to "no directive", not fail.
        None => {
            warn!(directive = directive.as_str(), "directive token failed re-extraction");
            ParsedQuery::unscoped(trimmed)
        },
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use rstest::rstest;

    use super::parse_message;

    #[rstest]
    #[case("@r/learnpython what is flask?", Some("learnpython"), "what is flask?")]
    #[case("  @r/learnpython what is flask?", Some("learnpython"), "what is flask?")]
    #[case("what is python?", None, "what is python?")]
    #[case(
        "My question about @r/askreddit is important.",
        None,
        "My question about @r/askreddit is important."
    )]
    #[case("@r/help", Some("help"), "")]
    #[case("@r/help ", Some("help"), "")]
    #[case("@r/ask   ", Some("ask"), "")]
    #[case("", None, "")]
    #[case("   ", None, "")]
    #[case(
        "@r/techsupport my computer is making a @wEiRd noise!",
        Some("techsupport"),
        "my computer is making a @wEiRd noise!"
    )]
    #[case("@r/ what now?", None, "@r/ what now?")]
    fn splits_directive_and_question(
        #[case] raw: &str,
        #[case] subreddit: Option<&str>,
        #[case] question: &str,
    ) {
        let parsed = parse_message(raw);
        assert_eq!(parsed.subreddit.as_deref(), subreddit);
        assert_eq!(parsed.question, question);
    }

    /// The identifier is the maximal word-character run after `@r/`. A run
    /// that swallows the first word of the question is not re-split; the
    /// remainder starts after the run.
    #[test]
    fn identifier_run_is_greedy_and_never_resplit() {
        let parsed = parse_message("@r/django_rest_frameworkhow to serialize?");
        assert_eq!(parsed.subreddit.as_deref(), Some("django_rest_frameworkhow"));
        assert_eq!(parsed.question, "to serialize?");

        let parsed = parse_message("@r/helpwhatis");
        assert_eq!(parsed.subreddit.as_deref(), Some("helpwhatis"));
        assert_eq!(parsed.question, "");
    }

    #[test]
    fn question_survives_newlines() {
        let parsed = parse_message("@r/rust why does this\nnot compile?");
        assert_eq!(parsed.subreddit.as_deref(), Some("rust"));
        assert_eq!(parsed.question, "why does this\nnot compile?");
    }

    #[test]
    fn hyphen_ends_the_identifier_run() {
        let parsed = parse_message("@r/tip-of-my-tongue that song?");
        assert_eq!(parsed.subreddit.as_deref(), Some("tip"));
        assert_eq!(parsed.question, "-of-my-tongue that song?");
    }
}
