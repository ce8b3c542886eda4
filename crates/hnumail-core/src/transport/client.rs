use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use super::ApiResponse;
use crate::config::ClientConfig;
use crate::error::Result;

/// JSON-over-HTTP client for the mail backend.
///
/// Cloning is cheap; clones share the connection pool and the token.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    token: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client cannot
    /// be constructed.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url()?,
            token: Arc::new(RwLock::new(None)),
        })
    }

    /// Backend base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Store the bearer token for subsequent requests.
    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token.into());
    }

    /// Forget the bearer token.
    pub fn clear_token(&self) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Currently held bearer token.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Whether a bearer token is held.
    #[must_use]
    pub fn has_token(&self) -> bool {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Perform a request without a body.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid, the request cannot be sent,
    /// or a successful body fails to decode. Non-success statuses are not
    /// errors here; they come back in the [`ApiResponse`].
    pub async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<ApiResponse<T>> {
        let builder = self.request(method.clone(), path, query)?;
        self.dispatch(builder, &method, path).await
    }

    /// Perform a request with a JSON body.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::call`].
    pub async fn call_json<B, T>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: &B,
    ) -> Result<ApiResponse<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(method.clone(), path, query)?.json(body);
        self.dispatch(builder, &method, path).await
    }

    fn request(&self, method: Method, path: &str, query: &[(&str, String)]) -> Result<RequestBuilder> {
        let url = self.base_url.join(path.trim_start_matches('/'))?;
        let mut builder = self.http.request(method, url);

        if !query.is_empty() {
            builder = builder.query(query);
        }
        // Read the token now so no lock is held across the send.
        if let Some(token) = self.token() {
            builder = builder.bearer_auth(token);
        }
        Ok(builder)
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        method: &Method,
        path: &str,
    ) -> Result<ApiResponse<T>> {
        let response = builder.send().await.inspect_err(|e| {
            tracing::warn!(%method, path, error = %e, "request failed");
        })?;

        let status = response.status();
        let text = response.text().await?;
        tracing::debug!(%method, path, status = status.as_u16(), "response received");

        if !status.is_success() {
            return Ok(ApiResponse {
                status,
                body: None,
                error_body: (!text.trim().is_empty()).then_some(text),
            });
        }

        let body = if text.trim().is_empty() {
            None
        } else {
            Some(serde_json::from_str(&text)?)
        };
        Ok(ApiResponse {
            status,
            body,
            error_body: None,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::ApiMessage;
    use mockito::Matcher;

    fn client_for(server: &mockito::ServerGuard) -> ApiClient {
        ApiClient::new(&ClientConfig::with_base_url(server.url())).unwrap()
    }

    #[test]
    fn test_token_lifecycle() {
        let client = ApiClient::new(&ClientConfig::default()).unwrap();
        assert!(!client.has_token());

        client.set_token("t1");
        let clone = client.clone();
        assert_eq!(clone.token().as_deref(), Some("t1"));

        clone.clear_token();
        assert!(!client.has_token());
    }

    #[test]
    fn test_invalid_base_url() {
        let result = ApiClient::new(&ClientConfig::with_base_url("mailto:x@y"));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[tokio::test]
    async fn test_bearer_attached_when_held() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/auth/profile")
            .match_header("authorization", "Bearer secret-token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success":true,"message":"ok"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        client.set_token("secret-token");
        let response: ApiResponse<ApiMessage> =
            client.call(Method::GET, "/api/auth/profile", &[]).await.unwrap();

        mock.assert_async().await;
        assert!(response.is_success());
        assert_eq!(response.body.unwrap().message, "ok");
    }

    #[tokio::test]
    async fn test_no_authorization_without_token() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/auth/login")
            .match_header("authorization", Matcher::Missing)
            .match_body(Matcher::Json(serde_json::json!({
                "username": "alice",
                "password": "pw"
            })))
            .with_status(200)
            .with_body(r#"{"success":true,"message":"hi"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let body = crate::model::Credentials::new("alice", "pw");
        let response: ApiResponse<ApiMessage> = client
            .call_json(Method::POST, "api/auth/login", &[], &body)
            .await
            .unwrap();

        mock.assert_async().await;
        assert!(response.is_success());
    }

    #[tokio::test]
    async fn test_query_parameters() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/mail/inbox")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("page".into(), "2".into()),
                Matcher::UrlEncoded("size".into(), "20".into()),
            ]))
            .with_status(200)
            .with_body(r#"{"content":[]}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let response: ApiResponse<serde_json::Value> = client
            .call(
                Method::GET,
                "api/mail/inbox",
                &[("page", "2".to_string()), ("size", "20".to_string())],
            )
            .await
            .unwrap();

        mock.assert_async().await;
        assert!(response.body.is_some());
    }

    #[tokio::test]
    async fn test_failure_keeps_error_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("DELETE", "/api/mail/4")
            .with_status(404)
            .with_body(r#"{"success":false,"message":"Mail not found"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let response: ApiResponse<ApiMessage> =
            client.call(Method::DELETE, "api/mail/4", &[]).await.unwrap();

        assert!(!response.is_success());
        assert!(response.body.is_none());
        assert_eq!(response.error_message(), "Mail not found");
    }

    #[tokio::test]
    async fn test_empty_success_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("PUT", "/api/mail/1/read")
            .with_status(200)
            .create_async()
            .await;

        let client = client_for(&server);
        let response: ApiResponse<ApiMessage> =
            client.call(Method::PUT, "api/mail/1/read", &[]).await.unwrap();

        assert!(response.is_success());
        assert!(matches!(response.into_result(), Err(Error::EmptyBody)));
    }

    #[tokio::test]
    async fn test_connection_refused_is_http_error() {
        let client = ApiClient::new(&ClientConfig::with_base_url("http://127.0.0.1:9")).unwrap();
        let result: Result<ApiResponse<ApiMessage>> =
            client.call(Method::GET, "api/auth/profile", &[]).await;
        assert!(matches!(result, Err(Error::Http(_))));
    }
}
