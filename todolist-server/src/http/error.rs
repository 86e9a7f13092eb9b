//! Page error type with IntoResponse
//!
//! No failure reaches the browser as an error page: every error is logged
//! and answered with a redirect back to the default list.

use axum::response::{IntoResponse, Redirect, Response};

use crate::db::DbError;
use crate::error::Error;
use crate::models::ValidationError;

/// Error raised by a page handler
#[derive(Debug)]
pub enum PageError {
    /// Bad form input (logged at warn)
    Validation(ValidationError),

    /// Form body that could not be decoded (logged at warn)
    Form(String),

    /// Target list does not exist (logged at warn)
    NotFound { resource: &'static str, id: String },

    /// Store failure (logged at error)
    Database(DbError),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match &self {
            Self::Validation(e) => tracing::warn!("Rejected form input: {}", e),
            Self::Form(reason) => tracing::warn!("Malformed form: {}", reason),
            Self::NotFound { resource, id } => {
                tracing::warn!("{} '{}' not found", resource, id)
            }
            Self::Database(e) => tracing::error!("Database error: {}", e),
        }

        Redirect::to("/").into_response()
    }
}

impl From<ValidationError> for PageError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for PageError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            _ => Self::Database(e),
        }
    }
}

impl From<Error> for PageError {
    fn from(e: Error) -> Self {
        match e {
            Error::Validation(e) => e.into(),
            Error::Db(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, StatusCode};

    fn location(response: &Response) -> &str {
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn validation_error_redirects_home() {
        let err = PageError::Validation(ValidationError::Empty { field: "item name" });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/");
    }

    #[tokio::test]
    async fn malformed_form_redirects_home() {
        let response = PageError::Form("missing content type".into()).into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/");
    }

    #[tokio::test]
    async fn not_found_redirects_home() {
        let err: PageError = DbError::NotFound {
            resource: "list",
            id: "ghost".into(),
        }
        .into();
        assert!(matches!(err, PageError::NotFound { .. }));

        let response = err.into_response();
        assert_eq!(location(&response), "/");
    }

    #[tokio::test]
    async fn duplicate_key_is_database_error() {
        let err: PageError = Error::Db(DbError::DuplicateKey {
            resource: "list",
            key: "groceries".into(),
        })
        .into();
        assert!(matches!(err, PageError::Database(_)));
    }
}
