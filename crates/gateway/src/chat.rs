use std::sync::Arc;

use {
    axum::{
        Json,
        extract::{State, rejection::JsonRejection},
        http::StatusCode,
    },
    serde::{Deserialize, Serialize},
    tracing::{error, info, warn},
};

use {
    snoochat_reddit::LookupError, snoochat_reply::compose_reply, snoochat_routing::parse_message,
};

use crate::state::GatewayState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

/// Exactly one of `reply` / `error` is set; both fields are always present
/// in the serialized body so clients can branch on either.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: Option<String>,
    pub error: Option<String>,
}

impl ChatResponse {
    fn reply(text: impl Into<String>) -> Self {
        Self {
            reply: Some(text.into()),
            error: None,
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            reply: None,
            error: Some(message.into()),
        }
    }
}

/// `POST /api/chat` — the full message pipeline.
pub async fn chat_handler(
    State(state): State<Arc<GatewayState>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> (StatusCode, Json<ChatResponse>) {
    // Malformed body and missing `message` field get the same client error.
    let message = match payload {
        Ok(Json(ChatRequest {
            message: Some(message),
        })) => message,
        _ => {
            warn!("invalid chat request: no JSON body or no 'message' field");
            return (
                StatusCode::BAD_REQUEST,
                Json(ChatResponse::error("Invalid request: No message provided.")),
            );
        },
    };

    if message.trim().is_empty() {
        info!("received empty message");
        return (
            StatusCode::OK,
            Json(ChatResponse::error("Please enter a question.")),
        );
    }

    let parsed = parse_message(&message);
    info!(
        subreddit = parsed.subreddit.as_deref().unwrap_or("-"),
        question = %parsed.question,
        "parsed message",
    );

    if let Some(name) = &parsed.subreddit {
        if parsed.question.is_empty() {
            return (
                StatusCode::OK,
                Json(ChatResponse::error(format!(
                    "You mentioned r/{name}, but what is your question?"
                ))),
            );
        }
    }

    let mut subreddit_info = None;
    if let Some(name) = &parsed.subreddit {
        if !state.reddit_available {
            warn!(subreddit = %name, "Reddit unavailable; answering without subreddit context");
        } else {
            let Some(client) = &state.reddit else {
                // Should be unreachable given how GatewayState is built.
                error!("Reddit marked available but no client is configured");
                return (
                    StatusCode::OK,
                    Json(ChatResponse::error(
                        "Sorry, Reddit API access is not configured correctly on the server.",
                    )),
                );
            };
            match client.lookup(name).await {
                Ok(info) => subreddit_info = Some(info),
                Err(err) => {
                    warn!(subreddit = %name, error = %err, "subreddit lookup failed");
                    return (
                        StatusCode::OK,
                        Json(ChatResponse::error(lookup_error_message(name, &err))),
                    );
                },
            }
        }
    }

    let reply = compose_reply(
        &parsed.question,
        subreddit_info.as_ref(),
        state.reddit_available,
    );
    (StatusCode::OK, Json(ChatResponse::reply(reply)))
}

/// Translate a lookup failure into the user-facing message for that kind.
fn lookup_error_message(name: &str, err: &LookupError) -> String {
    match err {
        LookupError::NotFound => {
            format!("Sorry, the subreddit r/{name} could not be found.")
        },
        LookupError::AccessDenied => {
            format!("Sorry, r/{name} is private, banned, or quarantined.")
        },
        LookupError::Transient(_) => format!(
            "Sorry, an error occurred with the Reddit API while trying to fetch r/{name}."
        ),
    }
}
