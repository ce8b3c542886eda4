//! Repository with one method per backend endpoint.
//!
//! Methods return the raw [`ApiResponse`](crate::transport::ApiResponse) so
//! callers decide how to interpret statuses and empty bodies.

mod admin;
mod auth;
mod mail;

use crate::transport::ApiClient;

/// Typed access to the mail backend's REST endpoints.
#[derive(Debug, Clone)]
pub struct MailRepository {
    client: ApiClient,
}

impl MailRepository {
    /// Create a repository over a transport client.
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Underlying transport (token management).
    #[must_use]
    pub const fn client(&self) -> &ApiClient {
        &self.client
    }
}

fn paging(page: u32, size: u32) -> [(&'static str, String); 2] {
    [("page", page.to_string()), ("size", size.to_string())]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::model::{Folder, ResetPasswordRequest, UserRole, UserStatus};
    use mockito::Matcher;

    const ACK: &str = r#"{"success":true,"message":"ok"}"#;

    fn repository_for(server: &mockito::ServerGuard) -> MailRepository {
        let client = ApiClient::new(&ClientConfig::with_base_url(server.url())).unwrap();
        client.set_token("tok");
        MailRepository::new(client)
    }

    #[tokio::test]
    async fn test_move_to_folder_query() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/api/mail/8/move")
            .match_query(Matcher::UrlEncoded("folder".into(), "TRASH".into()))
            .match_header("authorization", "Bearer tok")
            .with_status(200)
            .with_body(ACK)
            .create_async()
            .await;

        let response = repository_for(&server)
            .move_to_folder(8, Folder::Trash)
            .await
            .unwrap();
        mock.assert_async().await;
        assert!(response.into_result().unwrap().success);
    }

    #[tokio::test]
    async fn test_user_status_and_role_queries() {
        let mut server = mockito::Server::new_async().await;
        let status = server
            .mock("PUT", "/api/admin/users/3/status")
            .match_query(Matcher::UrlEncoded("status".into(), "DISABLED".into()))
            .with_status(200)
            .with_body(ACK)
            .create_async()
            .await;
        let role = server
            .mock("PUT", "/api/admin/users/3/role")
            .match_query(Matcher::UrlEncoded("role".into(), "ADMIN".into()))
            .with_status(200)
            .with_body(ACK)
            .create_async()
            .await;

        let repository = repository_for(&server);
        repository.set_user_status(3, UserStatus::Disabled).await.unwrap();
        repository.set_user_role(3, UserRole::Admin).await.unwrap();
        status.assert_async().await;
        role.assert_async().await;
    }

    #[tokio::test]
    async fn test_reset_password_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/api/admin/users/5/reset-password")
            .match_body(Matcher::Json(serde_json::json!({"newPassword": "abcdef"})))
            .with_status(200)
            .with_body(ACK)
            .create_async()
            .await;

        repository_for(&server)
            .reset_password(
                5,
                &ResetPasswordRequest {
                    new_password: "abcdef".to_string(),
                },
            )
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_drafts_endpoint() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/mail/draft")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("page".into(), "0".into()),
                Matcher::UrlEncoded("size".into(), "10".into()),
            ]))
            .with_status(200)
            .with_body(r#"{"content":[{"id":1,"folder":"DRAFT"}],"totalElements":1}"#)
            .create_async()
            .await;

        let page = repository_for(&server)
            .drafts(0, 10)
            .await
            .unwrap()
            .into_result()
            .unwrap();
        mock.assert_async().await;
        assert_eq!(page.content.len(), 1);
        assert!(page.content[0].is_draft());
    }
}
