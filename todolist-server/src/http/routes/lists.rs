//! List pages and item forms
//!
//! - GET /          default list
//! - GET /{name}    named list (created or reseeded, then redirect to re-read)
//! - GET /delete    the list named "delete"
//! - POST /         add an item (`newItem`, `list`)
//! - POST /delete   delete an item (`checkbox`, `listName`)

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::http::error::PageError;
use crate::http::extractors::PageForm;
use crate::http::server::AppState;
use crate::http::view;
use crate::models::{ListTarget, ValidationError, DEFAULT_LIST_NAME};
use crate::resolver::Resolution;

/// Add item form
#[derive(Debug, Deserialize)]
pub struct NewItemForm {
    #[serde(default, rename = "newItem")]
    pub new_item: String,
    #[serde(default)]
    pub list: String,
}

/// Delete item form
#[derive(Debug, Deserialize)]
pub struct DeleteItemForm {
    #[serde(default)]
    pub checkbox: String,
    #[serde(default, rename = "listName")]
    pub list_name: String,
}

/// GET / - render the default list
///
/// A failure renders an empty list rather than redirecting, which would loop.
async fn show_default_list(State(state): State<Arc<AppState>>) -> Html<String> {
    match state.resolver.resolve_default_list().await {
        Ok(items) => view::render_list(DEFAULT_LIST_NAME, &items),
        Err(e) => {
            tracing::error!("Failed to load default list: {}", e);
            view::render_list(DEFAULT_LIST_NAME, &[])
        }
    }
}

/// GET /{name} - render a named list
async fn show_list(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Response, PageError> {
    render_target(&state, ListTarget::from_name(&name)).await
}

/// GET /delete - the form target shares its path with a list called "delete"
async fn show_delete_list(State(state): State<Arc<AppState>>) -> Result<Response, PageError> {
    render_target(&state, ListTarget::from_name("delete")).await
}

async fn render_target(state: &AppState, target: ListTarget) -> Result<Response, PageError> {
    match state.resolver.resolve(&target).await? {
        Resolution::Ready(items) => Ok(view::render_list(target.title(), &items).into_response()),
        Resolution::Created | Resolution::Reseeded => {
            Ok(Redirect::to(&target.path()).into_response())
        }
    }
}

/// POST / - add an item to the default or a named list
async fn add_item(
    State(state): State<Arc<AppState>>,
    PageForm(form): PageForm<NewItemForm>,
) -> Result<Redirect, PageError> {
    let target = ListTarget::from_name(&form.list);
    let item = state.resolver.add_item(&target, &form.new_item).await?;
    tracing::debug!(list = %target.title(), id = %item.id, "Added item");

    Ok(Redirect::to(&target.path()))
}

/// POST /delete - delete an item from the default and/or a named list
async fn delete_item(
    State(state): State<Arc<AppState>>,
    PageForm(form): PageForm<DeleteItemForm>,
) -> Result<Redirect, PageError> {
    let id = Uuid::parse_str(form.checkbox.trim()).map_err(|_| ValidationError::InvalidFormat {
        field: "checkbox",
        reason: "invalid item id",
    })?;
    let target = ListTarget::from_name(&form.list_name);

    if state.resolver.delete_item(id, &target).await? {
        Ok(Redirect::to(&target.path()))
    } else {
        Ok(Redirect::to("/"))
    }
}

/// List routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(show_default_list).post(add_item))
        .route("/delete", get(show_delete_list).post(delete_item))
        .route("/{name}", get(show_list))
}
