//! Custom Axum extractors

use axum::extract::FromRequest;

use super::error::ApiError;

/// JSON request body whose rejections render as [`ApiError`]
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);
