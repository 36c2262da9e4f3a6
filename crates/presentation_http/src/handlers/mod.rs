//! HTTP request handlers

pub mod climate;
pub mod health;
pub mod index;
pub mod temperature;

use axum::http::Uri;

use crate::error::ApiError;

/// Fallback for paths outside the route table
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
