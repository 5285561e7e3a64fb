//! Mapping from store failures to HTTP errors.
//!
//! `StoreError` converts into `anyhow::Error`, so a bare `?` would render it
//! as a 500. Handlers go through [`store_error`] instead.

use axum::http::StatusCode;
use tourist_core::AppError;
use tourist_db::StoreError;

pub fn store_error(err: StoreError) -> AppError {
    if err.is_unavailable() {
        AppError::store_unavailable(err)
    } else {
        AppError::new(StatusCode::CONFLICT, err)
    }
}
