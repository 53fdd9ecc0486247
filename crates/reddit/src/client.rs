use std::time::{Duration, Instant};

use {
    reqwest::StatusCode,
    secrecy::{ExposeSecret, Secret},
    serde::Deserialize,
    tokio::sync::RwLock,
    tracing::{debug, info},
};

use {snoochat_common::SubredditInfo, snoochat_config::RedditCredentials};

use crate::error::{LookupError, Result};

const DEFAULT_AUTH_BASE: &str = "https://www.reddit.com";
const DEFAULT_API_BASE: &str = "https://oauth.reddit.com";

/// Refresh the bearer token this long before its reported expiry.
const TOKEN_EXPIRY_MARGIN: Duration = Duration::from_secs(60);
/// Assumed lifetime when the token endpoint omits `expires_in`.
const DEFAULT_TOKEN_LIFETIME: Duration = Duration::from_secs(3600);

/// App-only OAuth client for the Reddit API.
///
/// Holds one cached bearer token behind an async lock; safe to share across
/// request handlers via `Arc`.
pub struct RedditClient {
    http: reqwest::Client,
    credentials: RedditCredentials,
    auth_base: String,
    api_base: String,
    token: RwLock<Option<BearerToken>>,
}

struct BearerToken {
    access_token: Secret<String>,
    expires_at: Instant,
}

#[derive(Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    expires_in: Option<u64>,
    #[serde(default)]
    error: Option<String>,
}

/// `GET /r/{name}/about` envelope: `{"kind": "t5", "data": {...}}`.
#[derive(Deserialize)]
struct AboutResponse {
    data: AboutData,
}

#[derive(Deserialize)]
struct AboutData {
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    public_description: Option<String>,
    #[serde(default)]
    subscribers: Option<u64>,
}

impl RedditClient {
    /// Client against the production Reddit endpoints.
    pub fn new(credentials: RedditCredentials) -> Result<Self> {
        Self::with_base_urls(credentials, DEFAULT_AUTH_BASE, DEFAULT_API_BASE)
    }

    /// Client against non-default endpoints. Tests point this at a local
    /// mock server.
    pub fn with_base_urls(
        credentials: RedditCredentials,
        auth_base: impl Into<String>,
        api_base: impl Into<String>,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            // A redirect from the about endpoint means "no such subreddit";
            // following it would turn not-found into a search page.
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|source| LookupError::Transient(source.to_string()))?;

        Ok(Self {
            http,
            credentials,
            auth_base: auth_base.into(),
            api_base: api_base.into(),
            token: RwLock::new(None),
        })
    }

    /// Startup probe: fetch a token so that bad credentials demote the
    /// process to "Reddit unavailable" before any traffic is served.
    pub async fn verify(&self) -> Result<()> {
        self.ensure_token().await?;
        info!("Reddit API credentials verified");
        Ok(())
    }

    /// Resolve `name` into its descriptive attributes.
    pub async fn lookup(&self, name: &str) -> Result<SubredditInfo> {
        let token = self.ensure_token().await?;
        let url = format!("{}/r/{name}/about", self.api_base);
        debug!(subreddit = name, "fetching subreddit info");

        let resp = self
            .http
            .get(&url)
            .bearer_auth(token.expose_secret())
            .header(reqwest::header::USER_AGENT, &self.credentials.user_agent)
            .send()
            .await?;

        let status = resp.status();
        if status.is_redirection() || status == StatusCode::NOT_FOUND {
            return Err(LookupError::NotFound);
        }
        if status == StatusCode::FORBIDDEN {
            return Err(LookupError::AccessDenied);
        }
        if !status.is_success() {
            return Err(LookupError::Transient(format!(
                "unexpected status {status} for r/{name}"
            )));
        }

        let about: AboutResponse = resp.json().await?;
        Ok(SubredditInfo {
            requested_name: name.to_owned(),
            display_name: about.data.display_name,
            public_description: about.data.public_description,
            subscribers: about.data.subscribers,
        })
    }

    /// Return the cached bearer token, refreshing it when absent or stale.
    async fn ensure_token(&self) -> Result<Secret<String>> {
        if let Some(token) = self.token.read().await.as_ref() {
            if token.expires_at > Instant::now() {
                return Ok(token.access_token.clone());
            }
        }
        self.refresh_token().await
    }

    async fn refresh_token(&self) -> Result<Secret<String>> {
        let url = format!("{}/api/v1/access_token", self.auth_base);
        debug!("requesting app-only access token");

        let resp = self
            .http
            .post(&url)
            .basic_auth(
                &self.credentials.client_id,
                Some(self.credentials.client_secret.expose_secret()),
            )
            .header(reqwest::header::USER_AGENT, &self.credentials.user_agent)
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(LookupError::Transient(format!(
                "token request failed with status {status}"
            )));
        }

        let body: TokenResponse = resp.json().await?;
        if let Some(error) = body.error {
            return Err(LookupError::Transient(format!(
                "token endpoint error: {error}"
            )));
        }
        let Some(access_token) = body.access_token else {
            return Err(LookupError::Transient(
                "token endpoint returned no access_token".to_owned(),
            ));
        };

        let lifetime = body
            .expires_in
            .map_or(DEFAULT_TOKEN_LIFETIME, Duration::from_secs)
            .saturating_sub(TOKEN_EXPIRY_MARGIN);
        let token = Secret::new(access_token);
        *self.token.write().await = Some(BearerToken {
            access_token: token.clone(),
            expires_at: Instant::now() + lifetime,
        });
        Ok(token)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use mockito::ServerGuard;

    use super::*;

    fn test_credentials() -> RedditCredentials {
        RedditCredentials {
            client_id: "test-id".into(),
            client_secret: Secret::new("test-secret".into()),
            user_agent: "snoochat-tests/0.1".into(),
        }
    }

    fn client_for(server: &ServerGuard) -> RedditClient {
        RedditClient::with_base_urls(test_credentials(), server.url(), server.url()).unwrap()
    }

    async fn mock_token(server: &mut ServerGuard) -> mockito::Mock {
        server
            .mock("POST", "/api/v1/access_token")
            .with_status(200)
            .with_body(r#"{"access_token": "tok", "token_type": "bearer", "expires_in": 3600}"#)
            .create_async()
            .await
    }

    #[tokio::test]
    async fn lookup_deserializes_about_payload() {
        let mut server = mockito::Server::new_async().await;
        let _token = mock_token(&mut server).await;
        let about = server
            .mock("GET", "/r/learnpython/about")
            .match_header("authorization", "Bearer tok")
            .with_status(200)
            .with_body(
                r#"{"kind": "t5", "data": {"display_name": "learnpython",
                    "public_description": "A place to learn Python.",
                    "subscribers": 850000}}"#,
            )
            .create_async()
            .await;

        let client = client_for(&server);
        let info = client.lookup("learnpython").await.unwrap();
        assert_eq!(info.requested_name, "learnpython");
        assert_eq!(info.display_name.as_deref(), Some("learnpython"));
        assert_eq!(info.subscribers, Some(850_000));
        about.assert_async().await;
    }

    #[tokio::test]
    async fn token_is_cached_across_lookups() {
        let mut server = mockito::Server::new_async().await;
        let token = mock_token(&mut server).await;
        let _about = server
            .mock("GET", "/r/rust/about")
            .with_status(200)
            .with_body(r#"{"kind": "t5", "data": {"display_name": "rust"}}"#)
            .expect(2)
            .create_async()
            .await;

        let client = client_for(&server);
        client.lookup("rust").await.unwrap();
        client.lookup("rust").await.unwrap();
        // One token request serves both lookups.
        token.assert_async().await;
    }

    #[tokio::test]
    async fn missing_subreddit_maps_to_not_found() {
        let mut server = mockito::Server::new_async().await;
        let _token = mock_token(&mut server).await;
        let _about = server
            .mock("GET", "/r/doesnotexist/about")
            .with_status(404)
            .create_async()
            .await;

        let client = client_for(&server);
        assert!(matches!(
            client.lookup("doesnotexist").await,
            Err(LookupError::NotFound)
        ));
    }

    #[tokio::test]
    async fn search_redirect_maps_to_not_found() {
        let mut server = mockito::Server::new_async().await;
        let _token = mock_token(&mut server).await;
        let _about = server
            .mock("GET", "/r/typo/about")
            .with_status(302)
            .with_header("location", "/subreddits/search")
            .create_async()
            .await;

        let client = client_for(&server);
        assert!(matches!(
            client.lookup("typo").await,
            Err(LookupError::NotFound)
        ));
    }

    #[tokio::test]
    async fn forbidden_maps_to_access_denied() {
        let mut server = mockito::Server::new_async().await;
        let _token = mock_token(&mut server).await;
        let _about = server
            .mock("GET", "/r/private/about")
            .with_status(403)
            .create_async()
            .await;

        let client = client_for(&server);
        assert!(matches!(
            client.lookup("private").await,
            Err(LookupError::AccessDenied)
        ));
    }

    #[tokio::test]
    async fn server_error_maps_to_transient() {
        let mut server = mockito::Server::new_async().await;
        let _token = mock_token(&mut server).await;
        let _about = server
            .mock("GET", "/r/rust/about")
            .with_status(503)
            .create_async()
            .await;

        let client = client_for(&server);
        assert!(matches!(
            client.lookup("rust").await,
            Err(LookupError::Transient(_))
        ));
    }

    #[tokio::test]
    async fn verify_fails_on_rejected_credentials() {
        let mut server = mockito::Server::new_async().await;
        let _token = server
            .mock("POST", "/api/v1/access_token")
            .with_status(401)
            .create_async()
            .await;

        let client = client_for(&server);
        assert!(matches!(
            client.verify().await,
            Err(LookupError::Transient(_))
        ));
    }
}
