//! Administration endpoints.

use super::{MailRepository, paging};
use crate::error::Result;
use crate::model::{
    ApiMessage, BroadcastRequest, CreateUserRequest, Page, ResetPasswordRequest, User, UserRole,
    UserStatus,
};
use crate::transport::{ApiResponse, Method};

impl MailRepository {
    /// `GET /api/admin/users`
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be performed.
    pub async fn users(&self, page: u32, size: u32) -> Result<ApiResponse<Page<User>>> {
        self.client
            .call(Method::GET, "api/admin/users", &paging(page, size))
            .await
    }

    /// `POST /api/admin/users`
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be performed.
    pub async fn create_user(&self, request: &CreateUserRequest) -> Result<ApiResponse<ApiMessage>> {
        self.client
            .call_json(Method::POST, "api/admin/users", &[], request)
            .await
    }

    /// `PUT /api/admin/users/{id}/status?status=`
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be performed.
    pub async fn set_user_status(
        &self,
        id: i64,
        status: UserStatus,
    ) -> Result<ApiResponse<ApiMessage>> {
        self.client
            .call(
                Method::PUT,
                &format!("api/admin/users/{id}/status"),
                &[("status", status.as_str().to_string())],
            )
            .await
    }

    /// `PUT /api/admin/users/{id}/role?role=`
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be performed.
    pub async fn set_user_role(&self, id: i64, role: UserRole) -> Result<ApiResponse<ApiMessage>> {
        self.client
            .call(
                Method::PUT,
                &format!("api/admin/users/{id}/role"),
                &[("role", role.as_str().to_string())],
            )
            .await
    }

    /// `DELETE /api/admin/users/{id}`
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be performed.
    pub async fn delete_user(&self, id: i64) -> Result<ApiResponse<ApiMessage>> {
        self.client
            .call(Method::DELETE, &format!("api/admin/users/{id}"), &[])
            .await
    }

    /// `PUT /api/admin/users/{id}/reset-password`
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be performed.
    pub async fn reset_password(
        &self,
        id: i64,
        request: &ResetPasswordRequest,
    ) -> Result<ApiResponse<ApiMessage>> {
        self.client
            .call_json(
                Method::PUT,
                &format!("api/admin/users/{id}/reset-password"),
                &[],
                request,
            )
            .await
    }

    /// `POST /api/admin/mail/broadcast`
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be performed.
    pub async fn broadcast(&self, request: &BroadcastRequest) -> Result<ApiResponse<ApiMessage>> {
        self.client
            .call_json(Method::POST, "api/admin/mail/broadcast", &[], request)
            .await
    }
}
