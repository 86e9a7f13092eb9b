//! Custom Axum extractors

use axum::extract::{FromRequest, Request};
use axum::Form;
use serde::de::DeserializeOwned;

use super::error::PageError;

/// Urlencoded form whose rejection is a [`PageError`] (redirect to `/`)
/// instead of axum's 415/422 responses.
pub struct PageForm<T>(pub T);

impl<T, S> FromRequest<S> for PageForm<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = PageError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state)
            .await
            .map_err(|rejection| PageError::Form(rejection.body_text()))?;
        Ok(Self(value))
    }
}
