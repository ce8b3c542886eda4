//! Mailbox endpoints.

use super::{MailRepository, paging};
use crate::error::Result;
use crate::model::{ApiMessage, Email, EmailRequest, Folder, Page};
use crate::transport::{ApiResponse, Method};

impl MailRepository {
    /// `GET /api/mail/inbox`
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be performed.
    pub async fn inbox(&self, page: u32, size: u32) -> Result<ApiResponse<Page<Email>>> {
        self.client
            .call(Method::GET, "api/mail/inbox", &paging(page, size))
            .await
    }

    /// `GET /api/mail/sent`
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be performed.
    pub async fn sent(&self, page: u32, size: u32) -> Result<ApiResponse<Page<Email>>> {
        self.client
            .call(Method::GET, "api/mail/sent", &paging(page, size))
            .await
    }

    /// `GET /api/mail/draft`
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be performed.
    pub async fn drafts(&self, page: u32, size: u32) -> Result<ApiResponse<Page<Email>>> {
        self.client
            .call(Method::GET, "api/mail/draft", &paging(page, size))
            .await
    }

    /// `GET /api/mail/{id}`
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be performed.
    pub async fn email(&self, id: i64) -> Result<ApiResponse<Email>> {
        self.client
            .call(Method::GET, &format!("api/mail/{id}"), &[])
            .await
    }

    /// `DELETE /api/mail/{id}`
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be performed.
    pub async fn delete_email(&self, id: i64) -> Result<ApiResponse<ApiMessage>> {
        self.client
            .call(Method::DELETE, &format!("api/mail/{id}"), &[])
            .await
    }

    /// `PUT /api/mail/{id}/read`, returning the updated email.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be performed.
    pub async fn mark_read(&self, id: i64) -> Result<ApiResponse<Email>> {
        self.client
            .call(Method::PUT, &format!("api/mail/{id}/read"), &[])
            .await
    }

    /// `PUT /api/mail/{id}/move?folder=`
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be performed.
    pub async fn move_to_folder(&self, id: i64, folder: Folder) -> Result<ApiResponse<ApiMessage>> {
        self.client
            .call(
                Method::PUT,
                &format!("api/mail/{id}/move"),
                &[("folder", folder.as_str().to_string())],
            )
            .await
    }

    /// `POST /api/mail/send`
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be performed.
    pub async fn send_email(&self, request: &EmailRequest) -> Result<ApiResponse<ApiMessage>> {
        self.client
            .call_json(Method::POST, "api/mail/send", &[], request)
            .await
    }

    /// `POST /api/mail/draft`
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be performed.
    pub async fn save_draft(&self, request: &EmailRequest) -> Result<ApiResponse<ApiMessage>> {
        self.client
            .call_json(Method::POST, "api/mail/draft", &[], request)
            .await
    }
}
