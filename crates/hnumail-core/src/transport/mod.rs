//! HTTP transport to the mail backend.
//!
//! [`ApiClient`] owns the `reqwest` client, the base URL and the bearer token.
//! Every call returns an [`ApiResponse`] carrying the status, the decoded body
//! on success and the raw error body on failure.

mod client;
mod response;

pub use client::ApiClient;
pub use response::ApiResponse;
pub use reqwest::Method;
