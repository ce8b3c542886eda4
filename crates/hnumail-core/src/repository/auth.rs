//! Authentication and self-service profile endpoints.

use super::MailRepository;
use crate::error::Result;
use crate::model::{
    ApiMessage, ChangePasswordRequest, Credentials, RegisterRequest, Session,
    UpdateProfileRequest, UserProfile,
};
use crate::transport::{ApiResponse, Method};

impl MailRepository {
    /// `POST /api/auth/login`
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be performed.
    pub async fn login(&self, credentials: &Credentials) -> Result<ApiResponse<Session>> {
        self.client
            .call_json(Method::POST, "api/auth/login", &[], credentials)
            .await
    }

    /// `POST /api/auth/register`
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be performed.
    pub async fn register(&self, request: &RegisterRequest) -> Result<ApiResponse<Session>> {
        self.client
            .call_json(Method::POST, "api/auth/register", &[], request)
            .await
    }

    /// `POST /api/auth/logout`
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be performed.
    pub async fn logout(&self) -> Result<ApiResponse<ApiMessage>> {
        self.client.call(Method::POST, "api/auth/logout", &[]).await
    }

    /// `GET /api/auth/profile`
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be performed.
    pub async fn profile(&self) -> Result<ApiResponse<UserProfile>> {
        self.client.call(Method::GET, "api/auth/profile", &[]).await
    }

    /// `POST /api/auth/profile`
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be performed.
    pub async fn update_profile(
        &self,
        request: &UpdateProfileRequest,
    ) -> Result<ApiResponse<ApiMessage>> {
        self.client
            .call_json(Method::POST, "api/auth/profile", &[], request)
            .await
    }

    /// `POST /api/auth/change-password`
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be performed.
    pub async fn change_password(
        &self,
        request: &ChangePasswordRequest,
    ) -> Result<ApiResponse<ApiMessage>> {
        self.client
            .call_json(Method::POST, "api/auth/change-password", &[], request)
            .await
    }
}
